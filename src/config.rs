use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
}

fn default_width() -> f32 {
    360.0
}

fn default_height() -> f32 {
    640.0
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub theme: ThemeVariant,
    /// Show each section's screen-reader description as a hover tooltip
    #[serde(default)]
    pub show_descriptions: bool,
    /// Zero-based page shown as selected in the location indicator
    #[serde(default)]
    pub selected_index: usize,
    /// Number of location pages the indicator advertises
    #[serde(default = "default_page_count")]
    pub page_count: usize,
}

fn default_page_count() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            theme: ThemeVariant::default(),
            show_descriptions: false,
            selected_index: 0,
            page_count: default_page_count(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_count == 0 {
            return Err(ConfigError::Validation(
                "page_count must be at least 1".to_string(),
            ));
        }
        if self.selected_index >= self.page_count {
            return Err(ConfigError::Validation(format!(
                "selected_index {} is out of range for {} pages",
                self.selected_index, self.page_count
            )));
        }
        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            return Err(ConfigError::Validation(format!(
                "window size {}x{} must be positive",
                self.window.width, self.window.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = Config::parse("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.window.width, 360.0);
        assert_eq!(config.window.height, 640.0);
        assert_eq!(config.page_count, 5);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
window:
  width: 412
theme: dark
show_descriptions: true
selected_index: 2
"#;
        let config = Config::parse(yaml).unwrap();
        assert_eq!(config.window.width, 412.0);
        assert_eq!(config.window.height, 640.0); // default
        assert_eq!(config.theme, ThemeVariant::Dark);
        assert!(config.show_descriptions);
        assert_eq!(config.selected_index, 2);
    }

    #[test]
    fn test_selected_index_out_of_range() {
        let err = Config::parse("selected_index: 5").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_zero_pages_rejected() {
        let err = Config::parse("page_count: 0").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_non_positive_window_rejected() {
        let err = Config::parse("window:\n  width: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let err = Config::parse("window:\n  height: -640\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let mut config = Config::default();
        config.window.width = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_theme_is_parse_error() {
        let err = Config::parse("theme: sepia").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file("/nonexistent/daily-wx.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
