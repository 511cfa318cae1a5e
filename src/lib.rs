pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod utils;

pub use error::AppError;
pub use utils::{get_api_key, ApiKey, AuthError};
