//! Animal - Catalog Record
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

/// Store-assigned animal identifier
pub type AnimalId = i64;

/// Animal - a persisted catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub id: AnimalId,
    pub color: String,
    pub name: String,
    pub scientific_name: Option<String>,
    pub habitat: String,
    pub description: String,
    pub diet: String,
    /// Years
    pub lifespan: f64,
    pub fun_facts: Vec<String>,
    pub image_url: Option<String>,
}

/// Every field of an Animal except its identifier.
///
/// Used both for inserts and for whole-record overwrites: an update replaces all of
/// these fields at once, none keep their previous value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewAnimal {
    pub color: String,
    pub name: String,
    pub scientific_name: Option<String>,
    pub habitat: String,
    pub description: String,
    pub diet: String,
    pub lifespan: f64,
    pub fun_facts: Vec<String>,
    pub image_url: Option<String>,
}

impl NewAnimal {
    /// Replace the color, whatever the payload said
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

impl Animal {
    /// Attach a store-assigned id to an unsaved record
    pub fn from_new(id: AnimalId, new: NewAnimal) -> Self {
        Self {
            id,
            color: new.color,
            name: new.name,
            scientific_name: new.scientific_name,
            habitat: new.habitat,
            description: new.description,
            diet: new.diet,
            lifespan: new.lifespan,
            fun_facts: new.fun_facts,
            image_url: new.image_url,
        }
    }

    pub fn has_color(&self, color: &str) -> bool {
        self.color.to_lowercase() == color.to_lowercase()
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    pub fn name_contains(&self, fragment: &str) -> bool {
        self.name.to_lowercase().contains(&fragment.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fox() -> NewAnimal {
        NewAnimal {
            color: "red".to_string(),
            name: "Red Fox".to_string(),
            scientific_name: Some("Vulpes vulpes".to_string()),
            habitat: "Forests and grasslands".to_string(),
            description: "Clever".to_string(),
            diet: "Omnivore".to_string(),
            lifespan: 5.0,
            fun_facts: vec!["Excellent hearing".to_string(), "Fast".to_string()],
            image_url: None,
        }
    }

    #[test]
    fn test_with_color_overrides_payload() {
        let animal = fox().with_color("Blue");
        assert_eq!(animal.color, "Blue");
        assert_eq!(animal.name, "Red Fox");
    }

    #[test]
    fn test_from_new_keeps_fun_fact_order() {
        let animal = Animal::from_new(7, fox());
        assert_eq!(animal.id, 7);
        assert_eq!(animal.fun_facts, vec!["Excellent hearing", "Fast"]);
        assert_eq!(animal.scientific_name.as_deref(), Some("Vulpes vulpes"));
    }

    #[test]
    fn test_case_insensitive_matching() {
        let animal = Animal::from_new(1, fox());
        assert!(animal.has_color("RED"));
        assert!(!animal.has_color("redd"));
        assert!(animal.has_name("red fox"));
        assert!(animal.name_contains("D FO"));
        assert!(animal.name_contains(""));
        assert!(!animal.name_contains("wolf"));
    }
}
