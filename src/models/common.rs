use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub status: String,
    pub service: String,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
}
