use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Debounce interval is not 0
/// - Result page size is within the upstream's documented bounds
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    // Search validation
    if config.search.debounce_ms == 0 {
        return Err(ConfigError::ValidationError(
            "search.debounce_ms cannot be 0".to_string(),
        ));
    }
    if config.search.per_page == 0 || config.search.per_page > 30 {
        return Err(ConfigError::ValidationError(
            "search.per_page must be between 1 and 30".to_string(),
        ));
    }

    Ok(())
}
