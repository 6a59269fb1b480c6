//! Animal - Catalog Record DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use bestiary::{Animal, AnimalId, NewAnimal};

// ============================================
// Request/Response DTOs
// ============================================

/// Animal payload for create and update.
///
/// `animalId` is ignored if sent. Name, habitat, description, diet and lifespan
/// are required. Color may be left out since the path carries one. Optional
/// fields and fun facts that are missing overwrite the stored value with nothing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnimalRequest {
    #[serde(default)]
    pub color: String,
    pub name: String,
    #[serde(default)]
    pub scientific_name: Option<String>,
    pub habitat: String,
    pub description: String,
    pub diet: String,
    /// Years
    pub lifespan: f64,
    #[serde(default)]
    pub fun_facts: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Animal as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnimalResponse {
    pub animal_id: AnimalId,
    pub color: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scientific_name: Option<String>,
    pub habitat: String,
    pub description: String,
    pub diet: String,
    pub lifespan: f64,
    pub fun_facts: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Filters for the full listing
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListAnimalsQuery {
    /// Case-insensitive name fragment; empty means no name filter
    pub animal_name: Option<String>,
    /// Minimum lifespan in years
    pub min_lifespan: Option<f64>,
}

impl From<AnimalRequest> for NewAnimal {
    fn from(req: AnimalRequest) -> Self {
        Self {
            color: req.color,
            name: req.name,
            scientific_name: req.scientific_name,
            habitat: req.habitat,
            description: req.description,
            diet: req.diet,
            lifespan: req.lifespan,
            fun_facts: req.fun_facts,
            image_url: req.image_url,
        }
    }
}

impl From<Animal> for AnimalResponse {
    fn from(animal: Animal) -> Self {
        Self {
            animal_id: animal.id,
            color: animal.color,
            name: animal.name,
            scientific_name: animal.scientific_name,
            habitat: animal.habitat,
            description: animal.description,
            diet: animal.diet,
            lifespan: animal.lifespan,
            fun_facts: animal.fun_facts,
            image_url: animal.image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ignores_animal_id_and_defaults_optional_fields() {
        let req: AnimalRequest = serde_json::from_str(
            r#"{"animalId": 99, "name": "Fox", "habitat": "forest", "description": "sly",
                "diet": "omnivore", "lifespan": 5}"#,
        )
        .unwrap();
        let animal = NewAnimal::from(req);

        assert_eq!(animal.name, "Fox");
        assert_eq!(animal.color, "");
        assert!(animal.fun_facts.is_empty());
        assert_eq!(animal.scientific_name, None);
        assert_eq!(animal.image_url, None);
    }

    #[test]
    fn test_request_requires_descriptive_fields() {
        let complete = serde_json::json!({
            "name": "Fox",
            "habitat": "forest",
            "description": "sly",
            "diet": "omnivore",
            "lifespan": 5
        });
        assert!(serde_json::from_value::<AnimalRequest>(complete.clone()).is_ok());

        for field in ["name", "habitat", "description", "diet", "lifespan"] {
            let mut body = complete.clone();
            body.as_object_mut().unwrap().remove(field);
            let err = serde_json::from_value::<AnimalRequest>(body).unwrap_err();
            assert!(err.to_string().contains(field), "{}", err);
        }
    }

    #[test]
    fn test_response_uses_camel_case_and_skips_missing_optionals() {
        let animal = Animal::from_new(
            3,
            NewAnimal {
                name: "Fox".to_string(),
                fun_facts: vec!["fast".to_string()],
                lifespan: 5.0,
                ..Default::default()
            },
        );
        let json = serde_json::to_value(AnimalResponse::from(animal)).unwrap();

        assert_eq!(json["animalId"], 3);
        assert_eq!(json["funFacts"][0], "fast");
        assert_eq!(json["lifespan"], 5.0);
        assert!(json.get("scientificName").is_none());
        assert!(json.get("imageUrl").is_none());
    }
}
