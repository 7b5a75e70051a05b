pub mod chat_client;
pub mod image_client;
pub mod mockup_client;

use crate::{config::Config, error::Result, models::LogoRequest};

pub use chat_client::{ChatClient, CHAT_RESPONSES, CHAT_SENTIMENT};
pub use image_client::{ImageClient, POLLINATIONS_URL};
pub use mockup_client::MockupClient;

/// One client per endpoint, bundled behind a single facade.
pub struct GenerationClient {
    image_client: ImageClient,
    chat_client: ChatClient,
    mockup_client: MockupClient,
}

impl GenerationClient {
    pub fn new(config: &Config) -> Result<Self> {
        let upstream = config.upstream.clone().unwrap_or_default();

        Ok(Self {
            image_client: ImageClient::new(upstream)?,
            chat_client: ChatClient::new(),
            mockup_client: MockupClient::new(),
        })
    }

    /// Replace the chat backend, e.g. with a seeded one.
    pub fn with_chat(mut self, chat_client: ChatClient) -> Self {
        self.chat_client = chat_client;
        self
    }

    pub fn with_mockup(mut self, mockup_client: MockupClient) -> Self {
        self.mockup_client = mockup_client;
        self
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }

    pub fn chat(&self) -> &ChatClient {
        &self.chat_client
    }

    pub fn mockup(&self) -> &MockupClient {
        &self.mockup_client
    }
}

/// Build the upstream prompt from the brand fields of a logo request.
pub fn build_logo_prompt(request: &LogoRequest) -> String {
    let mut parts = vec![
        format!("logo for {}", request.brand_name),
        request.prompt.clone(),
        request.style.clone(),
    ];

    if let Some(industry) = &request.industry {
        parts.push(format!("{} industry", industry));
    }

    if let Some(colors) = &request.colors {
        if !colors.is_empty() {
            parts.push(format!("colors: {}", colors.join(", ")));
        }
    }

    parts.push("vector graphics, flat design, white background, high quality, professional".to_string());

    parts.join(", ")
}

#[cfg(test)]
pub(crate) mod testutil {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one canned HTTP response on an ephemeral local port
    /// and return the base URL to reach it.
    pub async fn spawn_upstream(status_line: &'static str, body: &'static [u8]) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;

                let header = format!(
                    "{}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    status_line,
                    body.len()
                );
                let _ = socket.write_all(header.as_bytes()).await;
                let _ = socket.write_all(body).await;
                let _ = socket.shutdown().await;
            }
        });

        format!("http://{}", addr)
    }
}
