use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use crate::photos::UnsplashConfig;
use crate::search::SearchConfig;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub photos: Option<PhotosConfig>,
    #[serde(default)]
    pub search: SearchConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            photos: None,
            search: SearchConfig::default(),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    "0.0.0.0".parse().unwrap()
}

fn default_port() -> u16 {
    8080
}

/// Photo provider configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PhotosConfig {
    /// Upstream photo API backend
    pub backend: PhotoBackend,
    /// Unsplash-specific configuration (required when backend = "unsplash")
    #[serde(default)]
    pub unsplash: Option<UnsplashConfig>,
}

/// Available photo API backends
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PhotoBackend {
    Unsplash,
    // Future: Pexels, Flickr
}

/// Sanitized config for API responses (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photos: Option<SanitizedPhotosConfig>,
    pub search: SearchConfig,
}

/// Sanitized photo provider config (API key redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedPhotosConfig {
    pub backend: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsplash: Option<SanitizedUnsplashConfig>,
}

/// Sanitized Unsplash config (API key hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedUnsplashConfig {
    pub api_key_configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    pub timeout_secs: u32,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            photos: config.photos.as_ref().map(|p| SanitizedPhotosConfig {
                backend: match p.backend {
                    PhotoBackend::Unsplash => "unsplash".to_string(),
                },
                unsplash: p.unsplash.as_ref().map(|u| SanitizedUnsplashConfig {
                    api_key_configured: !u.api_key.is_empty(),
                    base_url: u.base_url.clone(),
                    timeout_secs: u.timeout_secs,
                }),
            }),
            search: config.search.clone(),
        }
    }
}
