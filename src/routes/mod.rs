use axum::{response::Json, routing::get, Router};

use crate::{
    error::AppError,
    models::{ApiInfoResponse, HealthResponse},
    utils::API_KEY_SCHEME,
};

mod auth;

pub use auth::create_auth_router;

pub fn create_routes() -> Router {
    Router::new()
        .route("/", get(api_info))
        .route("/health", get(health_check))
        .nest("/auth", create_auth_router())
}

async fn api_info() -> Result<Json<ApiInfoResponse>, AppError> {
    Ok(Json(ApiInfoResponse {
        name: "ApiKey Gate".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        scheme: API_KEY_SCHEME.to_string(),
    }))
}

async fn health_check() -> Result<Json<HealthResponse>, AppError> {
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}
