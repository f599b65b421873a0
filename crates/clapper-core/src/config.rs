//! Configuration system for the Clapper widget

use crate::error::{ClapperError, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Top level configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClapperConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Clap button appearance
    pub widget: WidgetConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level applied to targets without a category override
    pub default_level: String,
    /// Category-specific log levels (category name -> level string)
    pub category_levels: BTreeMap<String, String>,
    /// Colourize terminal output
    pub ansi: bool,
}

/// Appearance of the clap button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Button diameter in pixels
    pub size: f32,
    /// Icon colour while active
    pub active_color: String,
    /// Icon colour while inactive
    pub inactive_color: String,
    /// Resting border colour
    pub border_color: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        let mut category_levels = BTreeMap::new();
        category_levels.insert("core".to_string(), "info".to_string());
        category_levels.insert("state".to_string(), "info".to_string());
        category_levels.insert("ui".to_string(), "info".to_string());
        category_levels.insert("input".to_string(), "warn".to_string());

        Self {
            default_level: "info".to_string(),
            category_levels,
            ansi: true,
        }
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            size: 100.0,
            active_color: "#008000".to_string(),
            inactive_color: "#808080".to_string(),
            border_color: "#cacaca".to_string(),
        }
    }
}

impl ClapperConfig {
    /// Parse a configuration from JSON text; missing sections use defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ClapperConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json).map_err(|err| match err {
            ClapperError::Configuration { message, .. } => ClapperError::configuration_with_context(
                message,
                ErrorContext::new("load", "config").with_metadata("path", path.display().to_string()),
            ),
            other => other,
        })
    }

    /// Serialize to pretty JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the widget cannot render
    pub fn validate(&self) -> Result<()> {
        if !self.widget.size.is_finite() || self.widget.size <= 0.0 {
            return Err(ClapperError::configuration(format!(
                "widget size must be positive, got {}",
                self.widget.size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClapperConfig::default();

        assert_eq!(config.logging.default_level, "info");
        assert_eq!(
            config.logging.category_levels.get("input"),
            Some(&"warn".to_string())
        );
        assert_eq!(config.widget.size, 100.0);
        assert_eq!(config.widget.active_color, "#008000");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ClapperConfig::from_json_str(r#"{ "widget": { "size": 64.0 } }"#).unwrap();

        assert_eq!(config.widget.size, 64.0);
        assert_eq!(config.widget.inactive_color, "#808080");
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_invalid_size_rejected() {
        let err = ClapperConfig::from_json_str(r#"{ "widget": { "size": 0.0 } }"#).unwrap_err();
        assert!(matches!(err, ClapperError::Configuration { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = ClapperConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ClapperError::Json(_)));
    }

    #[test]
    fn test_from_file_reports_path() {
        let path = std::env::temp_dir().join(format!("clapper-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "widget": { "size": -1.0 } }"#).unwrap();

        let err = ClapperConfig::from_file(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        let context = err.context().unwrap();
        assert_eq!(context.operation, "load");
        assert_eq!(
            context.metadata.get("path"),
            Some(&path.display().to_string())
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ClapperConfig::from_file("/nonexistent/clapper.json").unwrap_err();
        assert!(matches!(err, ClapperError::Io(_)));
    }
}
