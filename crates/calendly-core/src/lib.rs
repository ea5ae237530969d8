pub mod config;
pub mod error;
pub mod status;

pub use config::{Config, DEFAULT_API_URL, DEFAULT_AUTH_URL};
pub use error::Error;
pub use status::{EventStatus, ParseEventStatusError};
