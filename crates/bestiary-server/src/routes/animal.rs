//! Animal Routes - Catalog CRUD and Filtering
//!
//! HTTP handlers that delegate to AnimalService. The `{color}` segment of the
//! id-based routes is never used as a filter.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use bestiary::{AnimalId, NewAnimal};

use super::{error_response, json_body, ApiError};
use crate::models::{AnimalRequest, AnimalResponse, ListAnimalsQuery};
use crate::AppState;

fn to_responses(animals: Vec<bestiary::Animal>) -> Vec<AnimalResponse> {
    animals.into_iter().map(Into::into).collect()
}

/// List all animals, optionally filtered by name fragment and minimum lifespan
#[utoipa::path(
    get,
    path = "/api/all",
    params(ListAnimalsQuery),
    responses(
        (status = 200, description = "Matching animals", body = Vec<AnimalResponse>),
        (status = 400, description = "Malformed query"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Animal"
)]
pub async fn list_animals(
    State(state): State<AppState>,
    Query(query): Query<ListAnimalsQuery>,
) -> Result<Json<Vec<AnimalResponse>>, ApiError> {
    let animals = state
        .animal_service
        .list(query.animal_name.as_deref(), query.min_lifespan)
        .await
        .map_err(error_response)?;

    Ok(Json(to_responses(animals)))
}

/// Preview of the animals of a color (same result as the full color listing)
#[utoipa::path(
    get,
    path = "/api/{color}",
    params(
        ("color" = String, Path, description = "Color, matched ignoring case")
    ),
    responses(
        (status = 200, description = "Animals of the color", body = Vec<AnimalResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Animal"
)]
pub async fn preview_color(
    state: State<AppState>,
    color: Path<String>,
) -> Result<Json<Vec<AnimalResponse>>, ApiError> {
    list_color(state, color).await
}

/// List the animals of a color
#[utoipa::path(
    get,
    path = "/api/{color}/all",
    params(
        ("color" = String, Path, description = "Color, matched ignoring case")
    ),
    responses(
        (status = 200, description = "Animals of the color", body = Vec<AnimalResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Animal"
)]
pub async fn list_color(
    State(state): State<AppState>,
    Path(color): Path<String>,
) -> Result<Json<Vec<AnimalResponse>>, ApiError> {
    let animals = state
        .animal_service
        .by_color(&color)
        .await
        .map_err(error_response)?;

    Ok(Json(to_responses(animals)))
}

/// Get animal by ID
#[utoipa::path(
    get,
    path = "/api/{color}/{id}",
    params(
        ("color" = String, Path, description = "Ignored"),
        ("id" = i64, Path, description = "Animal ID")
    ),
    responses(
        (status = 200, description = "Animal found", body = AnimalResponse),
        (status = 404, description = "Animal not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Animal"
)]
pub async fn get_animal(
    State(state): State<AppState>,
    Path((_color, id)): Path<(String, AnimalId)>,
) -> Result<Json<AnimalResponse>, ApiError> {
    let animal = state
        .animal_service
        .get_by_id(id)
        .await
        .map_err(error_response)?;

    Ok(Json(animal.into()))
}

/// Replace every field of an animal except its ID
#[utoipa::path(
    put,
    path = "/api/{color}/{id}/update",
    params(
        ("color" = String, Path, description = "Stored only when the body has no color"),
        ("id" = i64, Path, description = "Animal ID")
    ),
    request_body = AnimalRequest,
    responses(
        (status = 200, description = "Animal updated", body = AnimalResponse),
        (status = 400, description = "Missing required field or value rejected by the store"),
        (status = 404, description = "Animal not found"),
        (status = 409, description = "Name or scientific name already taken"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Animal"
)]
pub async fn update_animal(
    State(state): State<AppState>,
    Path((color, id)): Path<(String, AnimalId)>,
    payload: Result<Json<AnimalRequest>, JsonRejection>,
) -> Result<Json<AnimalResponse>, ApiError> {
    let mut animal: NewAnimal = json_body(payload)?.into();
    if animal.color.trim().is_empty() {
        animal = animal.with_color(color);
    }

    let animal = state
        .animal_service
        .update(id, animal)
        .await
        .map_err(error_response)?;

    Ok(Json(animal.into()))
}

/// Create an animal of the path's color
#[utoipa::path(
    post,
    path = "/api/{color}/create",
    params(
        ("color" = String, Path, description = "Color stored on the new animal")
    ),
    request_body = AnimalRequest,
    responses(
        (status = 200, description = "Animal created", body = AnimalResponse),
        (status = 400, description = "Missing required field or value rejected by the store"),
        (status = 409, description = "Name or scientific name already taken"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Animal"
)]
pub async fn create_animal(
    State(state): State<AppState>,
    Path(color): Path<String>,
    payload: Result<Json<AnimalRequest>, JsonRejection>,
) -> Result<Json<AnimalResponse>, ApiError> {
    let payload = json_body(payload)?;
    let animal = state
        .animal_service
        .create(&color, payload.into())
        .await
        .map_err(error_response)?;

    Ok(Json(animal.into()))
}

/// Delete an animal
#[utoipa::path(
    delete,
    path = "/api/{color}/{id}/delete",
    params(
        ("color" = String, Path, description = "Ignored"),
        ("id" = i64, Path, description = "Animal ID")
    ),
    responses(
        (status = 204, description = "Animal deleted"),
        (status = 404, description = "Animal not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Animal"
)]
pub async fn delete_animal(
    State(state): State<AppState>,
    Path((_color, id)): Path<(String, AnimalId)>,
) -> Result<StatusCode, ApiError> {
    state
        .animal_service
        .delete(id)
        .await
        .map_err(error_response)?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/all", get(list_animals))
        .route("/api/:color", get(preview_color))
        .route("/api/:color/all", get(list_color))
        .route("/api/:color/create", post(create_animal))
        .route("/api/:color/:id", get(get_animal))
        .route("/api/:color/:id/update", put(update_animal))
        .route("/api/:color/:id/delete", delete(delete_animal))
}
