use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::{
    error::AppError,
    utils::{get_api_key, ApiKey},
};

pub async fn require_api_key(mut req: Request, next: Next) -> Result<Response, Response> {
    match get_api_key(req.headers()) {
        Ok(key) => {
            req.extensions_mut().insert(ApiKey(key));
            Ok(next.run(req).await)
        }
        Err(e) => {
            warn!(path = %req.uri().path(), "Rejected request: {}", e);
            Err(AppError::from(e).into_response())
        }
    }
}
