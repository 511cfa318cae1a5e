use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiInfoResponse {
    pub name: String,
    pub version: String,
    pub scheme: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WhoAmIResponse {
    pub scheme: String,
    pub credential: String,
}
