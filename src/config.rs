use std::env;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub base_url: Option<String>,
    pub user_agent: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: Option<u16>,
    pub static_dir: Option<String>,
    pub public_base_url: Option<String>,
    pub upstream: Option<UpstreamConfig>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        UpstreamConfig {
            base_url: None,
            user_agent: None,
            timeout_secs: None,
        }
    }
}

impl UpstreamConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let base_url = env::var("IMAGE_API_URL").ok();
        let user_agent = env::var("IMAGE_API_USER_AGENT").ok();
        let timeout_secs = env::var("IMAGE_API_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok());

        UpstreamConfig {
            base_url,
            user_agent,
            timeout_secs,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: None,
            static_dir: None,
            public_base_url: None,
            upstream: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let port = env::var("PORT").ok().and_then(|port| port.parse().ok());
        let static_dir = env::var("STATIC_DIR").ok();
        let public_base_url = env::var("PUBLIC_BASE_URL").ok();

        Config {
            port,
            static_dir,
            public_base_url,
            upstream: Some(UpstreamConfig::from_env()),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_static_dir(mut self, dir: impl Into<String>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    pub fn with_public_base_url(mut self, url: impl Into<String>) -> Self {
        self.public_base_url = Some(url.into());
        self
    }

    pub fn with_upstream(mut self, config: UpstreamConfig) -> Self {
        self.upstream = Some(config);
        self
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn static_dir(&self) -> String {
        self.static_dir
            .clone()
            .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
    }

    pub fn public_base_url(&self) -> String {
        self.public_base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_PUBLIC_BASE_URL.to_string())
    }
}
