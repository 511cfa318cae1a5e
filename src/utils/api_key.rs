use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use thiserror::Error;

use crate::error::AppError;

/// Scheme token expected in front of the credential: `Authorization: ApiKey <token>`.
pub const API_KEY_SCHEME: &str = "ApiKey";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("no authorization header included")]
    NoAuthHeader,

    #[error("malformed authorization header")]
    MalformedHeader,
}

/// Extracts the API key from the `Authorization` header.
///
/// The value must be valid UTF-8 and exactly `ApiKey <token>` with a single
/// space and a non-empty token containing no whitespace. When the header
/// carries several values only the first one is considered.
///
/// Returns [`AuthError::NoAuthHeader`] if the header is missing or empty and
/// [`AuthError::MalformedHeader`] for any other value that does not match.
pub fn get_api_key(headers: &HeaderMap) -> Result<String, AuthError> {
    let value = match headers.get(AUTHORIZATION) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(AuthError::NoAuthHeader),
    };

    let value =
        std::str::from_utf8(value.as_bytes()).map_err(|_| AuthError::MalformedHeader)?;

    match value.split_once(' ') {
        Some((API_KEY_SCHEME, token))
            if !token.is_empty() && !token.contains(char::is_whitespace) =>
        {
            Ok(token.to_string())
        }
        _ => Err(AuthError::MalformedHeader),
    }
}

/// Credential presented by the caller.
///
/// Usable as a handler argument. If [`require_api_key`](crate::middleware::require_api_key)
/// already ran, the credential it stored is reused; otherwise the headers are parsed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey(pub String);

impl ApiKey {
    /// First four characters kept, the rest replaced by `*`.
    pub fn masked(&self) -> String {
        let visible = if self.0.chars().count() > 4 { 4 } else { 0 };

        self.0
            .chars()
            .enumerate()
            .map(|(i, c)| if i < visible { c } else { '*' })
            .collect()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(key) = parts.extensions.get::<ApiKey>() {
            return Ok(key.clone());
        }

        let key = get_api_key(&parts.headers)?;
        Ok(ApiKey(key))
    }
}
