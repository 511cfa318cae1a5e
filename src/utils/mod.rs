pub mod api_key;

pub use api_key::{get_api_key, ApiKey, AuthError, API_KEY_SCHEME};
