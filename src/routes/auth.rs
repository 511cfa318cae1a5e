use axum::{middleware, response::Json, routing::get, Router};

use crate::{
    error::AppError,
    middleware::auth::require_api_key,
    models::WhoAmIResponse,
    utils::{ApiKey, API_KEY_SCHEME},
};

pub fn create_auth_router() -> Router {
    Router::new()
        .route("/whoami", get(whoami))
        .route_layer(middleware::from_fn(require_api_key))
}

async fn whoami(key: ApiKey) -> Result<Json<WhoAmIResponse>, AppError> {
    Ok(Json(WhoAmIResponse {
        scheme: API_KEY_SCHEME.to_string(),
        credential: key.masked(),
    }))
}
