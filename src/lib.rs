pub mod config;
pub mod error;
pub mod generate;
pub mod logger;
pub mod models;
pub mod server;
pub mod storage;

pub use config::{Config, UpstreamConfig};
pub use error::{GenError, Result};
pub use generate::{ChatClient, GenerationClient, ImageClient, MockupClient};
pub use models::*;
pub use storage::ImageStore;
