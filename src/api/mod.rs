//! HTTP client module for the backend services

mod client;
mod error;
mod traits;
mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use traits::ApiClientTrait;
pub use types::*;

#[cfg(test)]
pub use traits::MockApiClientTrait;
