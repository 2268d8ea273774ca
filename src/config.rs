//! Visualizer configuration persistence
//!
//! Stores user preferences in `~/.config/slate/config.yaml`

use serde::{Deserialize, Serialize};

/// Configuration that persists across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlateConfig {
    /// Selected theme id (e.g., "dark", "light")
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Zero-based column used for the pie chart category counts
    #[serde(default = "default_category_column")]
    pub category_column: usize,

    /// Zero-based numeric column used for the bar chart distribution
    #[serde(default = "default_value_column")]
    pub value_column: usize,

    /// Lower bound of the first bar-chart bucket
    #[serde(default = "default_bucket_start")]
    pub bucket_start: i64,

    /// Width of each bar-chart bucket
    #[serde(default = "default_bucket_width")]
    pub bucket_width: i64,

    /// Number of bar-chart buckets
    #[serde(default = "default_bucket_count")]
    pub bucket_count: usize,
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_category_column() -> usize {
    2
}

fn default_value_column() -> usize {
    6
}

fn default_bucket_start() -> i64 {
    5
}

fn default_bucket_width() -> i64 {
    5
}

fn default_bucket_count() -> usize {
    6
}

impl Default for SlateConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            category_column: default_category_column(),
            value_column: default_value_column(),
            bucket_start: default_bucket_start(),
            bucket_width: default_bucket_width(),
            bucket_count: default_bucket_count(),
        }
    }
}

impl SlateConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SlateConfig::default();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.category_column, 2);
        assert_eq!(config.value_column, 6);
        assert_eq!(config.bucket_count, 6);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: SlateConfig = serde_yaml::from_str("theme: light\n").unwrap();
        assert_eq!(config.theme, "light");
        assert_eq!(config.bucket_start, 5);
        assert_eq!(config.bucket_width, 5);
    }
}
