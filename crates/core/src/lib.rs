pub mod config;
pub mod metrics;
pub mod photos;
pub mod search;
pub mod testing;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, PhotoBackend,
    PhotosConfig, SanitizedConfig, ServerConfig,
};
pub use photos::{
    PhotoDetail, PhotoError, PhotoProvider, PhotoSummary, UnsplashClient, UnsplashConfig,
};
pub use search::{SearchConfig, SearchMode, SearchPhase, SearchSession, SearchSnapshot};
