pub mod chat;
pub mod common;
pub mod logo;
pub mod mockup;

pub use chat::*;
pub use common::*;
pub use logo::*;
pub use mockup::*;
