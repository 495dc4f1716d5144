//! Unsplash API client.
//!
//! Unsplash requires a client ID ("Access Key") for every request and
//! rate-limits demo applications to 50 requests per hour.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{PhotoDetail, PhotoSummary};
use super::{PhotoError, PhotoProvider};

/// Unsplash API client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnsplashConfig {
    /// Unsplash access key (required).
    pub api_key: String,
    /// Base URL (default: https://api.unsplash.com).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

fn default_timeout() -> u32 {
    30
}

/// Unsplash API client.
pub struct UnsplashClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl UnsplashClient {
    /// Create a new Unsplash client.
    pub fn new(config: UnsplashConfig) -> Result<Self, PhotoError> {
        if config.api_key.is_empty() {
            return Err(PhotoError::NotConfigured(
                "Unsplash access key is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .build()?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| "https://api.unsplash.com".to_string());

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key,
        })
    }

    fn check_status(status: reqwest::StatusCode) -> Result<(), PhotoError> {
        if status == 401 {
            return Err(PhotoError::NotConfigured(
                "Invalid Unsplash access key".to_string(),
            ));
        }
        // Unsplash reports exhausted quotas as 403
        if status == 403 || status == 429 {
            return Err(PhotoError::RateLimitExceeded);
        }
        Ok(())
    }
}

#[async_trait]
impl PhotoProvider for UnsplashClient {
    fn name(&self) -> &str {
        "unsplash"
    }

    async fn search(&self, query: &str, per_page: u32) -> Result<Vec<PhotoSummary>, PhotoError> {
        let url = format!("{}/search/photos", self.base_url);

        debug!("Unsplash photo search: query='{}'", query);

        let per_page = per_page.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("client_id", self.api_key.as_str()),
                ("query", query),
                ("per_page", per_page.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        Self::check_status(status)?;
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PhotoError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let search_result: UnsplashSearchResponse = response.json().await.map_err(|e| {
            PhotoError::ParseError(format!("Failed to parse photo search response: {}", e))
        })?;

        let photos = search_result
            .results
            .into_iter()
            .map(|r| r.into())
            .collect();

        Ok(photos)
    }

    async fn get_photo(&self, id: &str) -> Result<PhotoDetail, PhotoError> {
        let url = format!("{}/photos/{}", self.base_url, id);

        debug!("Unsplash get photo: id={}", id);

        let response = self
            .client
            .get(&url)
            .query(&[("client_id", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if status == 404 {
            return Err(PhotoError::NotFound(id.to_string()));
        }
        Self::check_status(status)?;
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PhotoError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let photo: UnsplashPhoto = response.json().await.map_err(|e| {
            PhotoError::ParseError(format!("Failed to parse photo response: {}", e))
        })?;

        Ok(photo.into())
    }
}

// ============================================================================
// Unsplash API Response Types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct UnsplashSearchResponse {
    results: Vec<UnsplashPhoto>,
}

#[derive(Debug, Deserialize)]
struct UnsplashPhoto {
    id: String,
    urls: UnsplashUrls,
    alt_description: Option<String>,
    description: Option<String>,
    created_at: Option<chrono::DateTime<chrono::Utc>>,
    width: Option<u32>,
    height: Option<u32>,
    likes: Option<u32>,
    #[serde(default)]
    user: Option<UnsplashUser>,
    #[serde(default)]
    links: Option<UnsplashLinks>,
}

#[derive(Debug, Deserialize)]
struct UnsplashUrls {
    regular: Option<String>,
    small: Option<String>,
    thumb: Option<String>,
    full: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UnsplashUser {
    name: Option<String>,
    username: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UnsplashLinks {
    html: Option<String>,
}

// ============================================================================
// Conversions
// ============================================================================

impl UnsplashUrls {
    /// Smallest rendition suitable for a result grid.
    fn thumbnail(&self) -> String {
        self.small
            .clone()
            .or_else(|| self.thumb.clone())
            .or_else(|| self.regular.clone())
            .unwrap_or_default()
    }

    /// Display-sized rendition for the detail view.
    fn display(&self) -> String {
        self.regular
            .clone()
            .or_else(|| self.full.clone())
            .or_else(|| self.small.clone())
            .unwrap_or_default()
    }
}

impl From<UnsplashPhoto> for PhotoSummary {
    fn from(p: UnsplashPhoto) -> Self {
        Self {
            thumbnail_url: p.urls.thumbnail(),
            id: p.id,
            alt_text: p.alt_description,
            width: p.width,
            height: p.height,
            likes: p.likes,
        }
    }
}

impl From<UnsplashPhoto> for PhotoDetail {
    fn from(p: UnsplashPhoto) -> Self {
        let (author_name, author_username) = match p.user {
            Some(user) => (
                user.name.unwrap_or_else(|| "Unknown".to_string()),
                user.username,
            ),
            None => ("Unknown".to_string(), None),
        };

        Self {
            full_image_url: p.urls.display(),
            source_link: p.links.and_then(|l| l.html).unwrap_or_default(),
            id: p.id,
            description: p.description,
            alt_text: p.alt_description,
            author_name,
            author_username,
            created_at: p.created_at,
            width: p.width,
            height: p.height,
            likes: p.likes,
        }
    }
}
