use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use bestiary::{AnimalRepository, ImageStore};

mod adapters;
mod application;
mod config;
mod models;
mod routes;
mod seed;

use adapters::{FsImageStore, PgAnimalRepository};
use application::{AnimalService, ImageService};
use config::AppConfig;

/// Type aliases for application services behind their ports
pub type AppAnimalService = AnimalService<dyn AnimalRepository>;
pub type AppImageService = ImageService<dyn ImageStore>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub animal_service: Arc<AppAnimalService>,
    pub image_service: Arc<AppImageService>,
}

impl AppState {
    pub fn new(animals: Arc<dyn AnimalRepository>, images: Arc<dyn ImageStore>) -> Self {
        Self {
            animal_service: Arc::new(AnimalService::new(animals)),
            image_service: Arc::new(ImageService::new(images)),
        }
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Bestiary API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🦊 Bestiary API initializing...");

    let config = AppConfig::from_secrets(&secrets);

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("✅ Database migrations completed");

    // Initialize application services
    let animal_repo = Arc::new(PgAnimalRepository::new(pool));
    let image_store = Arc::new(FsImageStore::new(&config.upload_dir));
    let uploads = ServeDir::new(image_store.root());

    tracing::info!("🖼️  Uploads stored in {}", image_store.root().display());

    let state = AppState::new(animal_repo, image_store);

    if config.seed_catalog {
        let inserted = seed::seed_catalog(state.animal_service.as_ref())
            .await
            .context("Failed to seed animal catalog")?;
        tracing::info!("🌱 Catalog seeded ({} new animals)", inserted);
    }

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    // Build router with shared state
    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::app(config.max_upload_bytes))
        .nest_service("/uploads", uploads)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Bestiary API ready");

    Ok(router.into())
}
