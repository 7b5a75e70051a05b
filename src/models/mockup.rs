use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct MockupRequest {
    pub logo_url: String,
    pub template_type: String,
}

#[derive(Debug, Serialize)]
pub struct MockupResponse {
    pub url: String,
}
