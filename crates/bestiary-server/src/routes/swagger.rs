//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{AnimalRequest, AnimalResponse, UploadImageForm, UploadResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Animal endpoints
        super::animal::list_animals,
        super::animal::preview_color,
        super::animal::list_color,
        super::animal::get_animal,
        super::animal::update_animal,
        super::animal::create_animal,
        super::animal::delete_animal,
        // Upload endpoints
        super::upload::upload_image,
    ),
    info(
        title = "Bestiary API",
        version = "0.1.0",
        description = "Animal catalog API: browse animals by color or name, manage records and upload their images.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Animal", description = "Animal catalog records"),
        (name = "Upload", description = "Image uploads, served back under /uploads"),
    ),
    components(
        schemas(
            // Animal
            AnimalRequest,
            AnimalResponse,
            // Upload
            UploadImageForm,
            UploadResponse,
        )
    )
)]
pub struct ApiDoc;
