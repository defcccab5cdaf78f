pub mod client;
pub mod models;

pub use client::{ApiConfig, ApiError, SongsClient};
pub use models::*;
