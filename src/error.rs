use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum GenError {
    ConfigError(String),
    ClientError(String),
    ValidationError(String),
    NetworkError {
        status: Option<u16>,
        detail: String,
    },
    StorageError(String),
    InternalError(String),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            GenError::ClientError(msg) => write!(f, "Client error: {}", msg),
            GenError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            GenError::NetworkError { status, detail } => match status {
                Some(code) => write!(f, "Upstream error (HTTP {}): {}", code, detail),
                None => write!(f, "Upstream error: {}", detail),
            },
            GenError::StorageError(msg) => write!(f, "Storage error: {}", msg),
            GenError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for GenError {}

impl ResponseError for GenError {
    fn status_code(&self) -> StatusCode {
        match self {
            GenError::ValidationError(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "detail": self.to_string() }))
    }
}

pub type Result<T> = std::result::Result<T, GenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_error_display_includes_status_and_body() {
        let err = GenError::NetworkError {
            status: Some(503),
            detail: "server overloaded".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Upstream error (HTTP 503): server overloaded"
        );
    }

    #[test]
    fn validation_errors_map_to_bad_request() {
        let err = GenError::ValidationError("prompt must not be empty".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = GenError::NetworkError {
            status: None,
            detail: "connection refused".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
