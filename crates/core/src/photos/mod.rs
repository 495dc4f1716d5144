//! Upstream photo API integration.
//!
//! This module provides the `PhotoProvider` trait for searching photos and
//! fetching per-photo details from an external API, plus the Unsplash
//! implementation of it.

mod types;
mod unsplash;

pub use types::*;
pub use unsplash::{UnsplashClient, UnsplashConfig};

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when talking to the upstream photo API.
#[derive(Debug, Error)]
pub enum PhotoError {
    /// HTTP request failed (transport-level).
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Upstream rate limit exceeded.
    #[error("Rate limit exceeded, please wait before retrying")]
    RateLimitExceeded,

    /// Photo not found (404).
    #[error("Photo not found: {0}")]
    NotFound(String),

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Client not configured (missing API key, etc.).
    #[error("Client not configured: {0}")]
    NotConfigured(String),
}

/// Trait for upstream photo API clients.
///
/// Implemented by `UnsplashClient` in production and `MockPhotoProvider`
/// in tests, so the search pipeline and the API handlers never depend on a
/// concrete backend.
#[async_trait]
pub trait PhotoProvider: Send + Sync {
    /// Backend name for logging and status reporting.
    fn name(&self) -> &str;

    /// Search photos by free-text query. Results keep the upstream order.
    async fn search(&self, query: &str, per_page: u32) -> Result<Vec<PhotoSummary>, PhotoError>;

    /// Fetch a single photo by its upstream identifier.
    async fn get_photo(&self, id: &str) -> Result<PhotoDetail, PhotoError>;
}
