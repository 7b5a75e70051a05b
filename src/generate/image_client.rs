use crate::{
    config::UpstreamConfig,
    error::{GenError, Result},
};
use reqwest::Client;
use std::time::Duration;

/// Pollinations.ai is a free, keyless text-to-image API. The prompt is
/// percent-encoded straight into the URL path.
pub const POLLINATIONS_URL: &str = "https://image.pollinations.ai/prompt";

// Some free upstreams reject requests without a browser-like User-Agent.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Clone)]
pub struct ImageClient {
    client: Client,
    base_url: String,
}

impl ImageClient {
    pub fn new(config: UpstreamConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(
            config
                .user_agent
                .unwrap_or_else(|| BROWSER_USER_AGENT.to_string()),
        );

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| GenError::ClientError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config
                .base_url
                .unwrap_or_else(|| POLLINATIONS_URL.to_string()),
        })
    }

    /// The outbound request URL for a prompt: base URL plus the
    /// percent-encoded prompt as a single path segment.
    pub fn request_url(&self, prompt: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(prompt)
        )
    }

    /// Generate an image for a prompt, returning the raw response bytes.
    ///
    /// One GET, no retry. A non-2xx upstream status fails with the status
    /// code and response body attached.
    pub async fn generate(&self, prompt: &str) -> Result<Vec<u8>> {
        if prompt.trim().is_empty() {
            return Err(GenError::ValidationError(
                "prompt must not be empty".to_string(),
            ));
        }

        let url = self.request_url(prompt);
        log::info!("Requesting image from {}", self.base_url);
        log::debug!("Image request URL: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GenError::NetworkError {
                status: e.status().map(|s| s.as_u16()),
                detail: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Image API error (HTTP {}): {}", status.as_u16(), body);
            return Err(GenError::NetworkError {
                status: Some(status.as_u16()),
                detail: body,
            });
        }

        let bytes = response.bytes().await.map_err(|e| GenError::NetworkError {
            status: None,
            detail: e.to_string(),
        })?;

        Ok(bytes.to_vec())
    }
}
