use serde::{Deserialize, Serialize};

/// Search pipeline configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Quiet period after the last input event before a query fires,
    /// in milliseconds (default: 500)
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Results requested per search (default: 20, upstream maximum: 30)
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_per_page() -> u32 {
    20
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            per_page: default_per_page(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.debounce_ms, 500);
        assert_eq!(config.per_page, 20);
    }

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let config: SearchConfig = toml::from_str("").unwrap();
        assert_eq!(config.debounce_ms, 500);
        assert_eq!(config.per_page, 20);
    }

    #[test]
    fn test_deserialize_custom_values() {
        let toml = r#"
debounce_ms = 250
per_page = 30
"#;
        let config: SearchConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.debounce_ms, 250);
        assert_eq!(config.per_page, 30);
    }
}
