//! Bestiary API Routes
//!
//! - /api/all - Full listing with name/lifespan filters
//! - /api/:color - Animals of a color
//! - /api/:color/:id - Single animal (update, create, delete below it)
//! - /upload - Image upload

use axum::{extract::rejection::JsonRejection, http::StatusCode, Json, Router};

use bestiary::DomainError;

use crate::AppState;

pub mod animal;
pub mod swagger;
pub mod upload;

/// Error half of every handler result
pub type ApiError = (StatusCode, String);

/// Map a domain failure onto its HTTP status
pub fn error_response(e: DomainError) -> ApiError {
    let status = match &e {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Repository(_) | DomainError::Storage(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, e.to_string())
}

/// Unwrap a JSON body. Missing or mistyped fields are a 400 like any other
/// rejected value; syntax and content-type problems keep axum's status.
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(JsonRejection::JsonDataError(e)) => Err((StatusCode::BAD_REQUEST, e.body_text())),
        Err(rejection) => Err((rejection.status(), rejection.body_text())),
    }
}

/// All API routes; uploads are limited to `max_upload_bytes` per request
pub fn app(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .merge(animal::router())
        .merge(upload::router(max_upload_bytes))
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::Path;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use serde::de::DeserializeOwned;
    use tower::ServiceExt;

    use crate::adapters::{FsImageStore, InMemoryAnimalRepository};
    use crate::AppState;

    pub const TEST_UPLOAD_LIMIT: usize = 64 * 1024;

    pub fn test_app(upload_root: &Path) -> Router {
        let state = AppState::new(
            Arc::new(InMemoryAnimalRepository::new()),
            Arc::new(FsImageStore::new(upload_root)),
        );
        super::app(TEST_UPLOAD_LIMIT).with_state(state)
    }

    pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    pub async fn send_json<T: DeserializeOwned>(
        app: &Router,
        request: Request<Body>,
    ) -> (StatusCode, T) {
        let (status, body) = send(app, request).await;
        let parsed = serde_json::from_slice(&body).unwrap_or_else(|e| {
            panic!(
                "status {}: {} ({})",
                status,
                String::from_utf8_lossy(&body),
                e
            )
        });
        (status, parsed)
    }

    pub fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    pub fn with_json(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }
}
