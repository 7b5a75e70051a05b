use serde::{Deserialize, Serialize};

fn default_style() -> String {
    "modern".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogoRequest {
    pub brand_name: String,
    pub prompt: String,
    #[serde(default = "default_style")]
    pub style: String,
    pub industry: Option<String>,
    pub colors: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct LogoResponse {
    pub url: String,
    pub metadata: LogoMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct LogoMetadata {
    pub width: u32,
    pub height: u32,
    pub generated_by: String,
    pub seed: u64,
}

impl Default for LogoMetadata {
    // The upstream API exposes no size or seed controls, so the
    // metadata reported to callers is fixed.
    fn default() -> Self {
        LogoMetadata {
            width: 512,
            height: 512,
            generated_by: "stable-diffusion-2-1".to_string(),
            seed: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_defaults_to_modern() {
        let request: LogoRequest = serde_json::from_str(
            r#"{"brand_name": "Acme", "prompt": "a rocket taking off"}"#,
        )
        .unwrap();
        assert_eq!(request.style, "modern");
        assert!(request.industry.is_none());
        assert!(request.colors.is_none());
    }

    #[test]
    fn missing_required_fields_are_rejected() {
        let result: Result<LogoRequest, _> = serde_json::from_str(r#"{"prompt": "a rocket"}"#);
        assert!(result.is_err());
    }
}
