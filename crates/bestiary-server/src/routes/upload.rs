//! Upload Routes - Image Upload
//!
//! Accepts a multipart form with a `file` field and stores it through ImageService.

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};

use super::{error_response, ApiError};
use crate::models::{UploadImageForm, UploadResponse};
use crate::AppState;

const FILE_FIELD: &str = "file";

/// Upload an image
#[utoipa::path(
    post,
    path = "/upload",
    request_body(content = UploadImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image stored", body = UploadResponse),
        (status = 400, description = "Malformed form or missing `file` field"),
        (status = 413, description = "Upload too large"),
        (status = 500, description = "Image could not be written")
    ),
    tag = "Upload"
)]
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| (e.status(), e.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_owned);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| (e.status(), e.body_text()))?;

        let url = state
            .image_service
            .upload(file_name.as_deref(), &bytes)
            .await
            .map_err(error_response)?;

        return Ok(Json(UploadResponse { url }));
    }

    Err((
        StatusCode::BAD_REQUEST,
        format!("Missing multipart field `{}`", FILE_FIELD),
    ))
}

pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/upload", post(upload_image))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}
