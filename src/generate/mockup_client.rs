use crate::models::{MockupRequest, MockupResponse};
use std::time::Duration;

const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

/// Mock mockup backend: waits a fixed delay, then returns a placeholder
/// image URL templated with the requested template type.
pub struct MockupClient {
    delay: Duration,
}

impl MockupClient {
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_DELAY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub async fn generate(&self, request: &MockupRequest) -> MockupResponse {
        log::info!("👕 Generating mockup: {}", request.template_type);

        tokio::time::sleep(self.delay).await;

        MockupResponse {
            url: format!(
                "https://via.placeholder.com/800x600.png?text=Mockup+{}",
                request.template_type
            ),
        }
    }
}

impl Default for MockupClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn url_contains_the_template_type() {
        let client = MockupClient::new().with_delay(Duration::ZERO);
        let request = MockupRequest {
            logo_url: "http://localhost:8000/static/logo_abc.png".to_string(),
            template_type: "tshirt".to_string(),
        };

        let response = client.generate(&request).await;
        assert!(response.url.contains("tshirt"));
        assert_eq!(
            response.url,
            "https://via.placeholder.com/800x600.png?text=Mockup+tshirt"
        );
    }
}
