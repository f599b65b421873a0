//! Logging setup for the Clapper widget
//!
//! Log records are emitted through `tracing`. Each [`LogCategory`] maps to a
//! tracing target so levels can be tuned per category from the
//! [`LoggingConfig`].

use crate::config::LoggingConfig;
use crate::error::{ClapperError, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Log levels supported by the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Convert string to LogLevel
    pub fn parse(s: &str) -> Option<LogLevel> {
        match s.to_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }

    /// Convert LogLevel to string
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Log categories for organizing log messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogCategory {
    Core,
    State,
    UI,
    Input,
}

impl LogCategory {
    /// Category name as used in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            LogCategory::Core => "core",
            LogCategory::State => "state",
            LogCategory::UI => "ui",
            LogCategory::Input => "input",
        }
    }

    /// Look up a category by its configuration name
    pub fn parse(s: &str) -> Option<LogCategory> {
        match s {
            "core" => Some(LogCategory::Core),
            "state" => Some(LogCategory::State),
            "ui" => Some(LogCategory::UI),
            "input" => Some(LogCategory::Input),
            _ => None,
        }
    }

    /// Tracing target for records in this category
    pub fn target(&self) -> &'static str {
        match self {
            LogCategory::Core => targets::CORE,
            LogCategory::State => targets::STATE,
            LogCategory::UI => targets::UI,
            LogCategory::Input => targets::INPUT,
        }
    }
}

impl std::fmt::Display for LogCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tracing targets, usable as `tracing::debug!(target: targets::STATE, ...)`
pub mod targets {
    pub const CORE: &str = "clapper::core";
    pub const STATE: &str = "clapper::state";
    pub const UI: &str = "clapper::ui";
    pub const INPUT: &str = "clapper::input";
}

/// Build the filter directives for a logging configuration
pub fn directives(config: &LoggingConfig) -> Result<Vec<String>> {
    let context = || ErrorContext::new("build_filter", "logging");

    let default_level = LogLevel::parse(&config.default_level).ok_or_else(|| {
        ClapperError::configuration_with_context(
            format!("unknown log level '{}'", config.default_level),
            context(),
        )
    })?;

    let mut directives = vec![default_level.as_str().to_string()];
    for (name, level) in &config.category_levels {
        let category = LogCategory::parse(name).ok_or_else(|| {
            ClapperError::configuration_with_context(
                format!("unknown log category '{}'", name),
                context(),
            )
        })?;
        let level = LogLevel::parse(level).ok_or_else(|| {
            ClapperError::configuration_with_context(
                format!("unknown log level '{}'", level),
                context().with_metadata("category", name.clone()),
            )
        })?;
        directives.push(format!("{}={}", category.target(), level));
    }
    Ok(directives)
}

/// Build an `EnvFilter`, honouring `RUST_LOG` when it is set
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    // Config is validated even when RUST_LOG overrides it.
    let directives = directives(config)?.join(",");

    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
    }

    EnvFilter::try_new(&directives).map_err(|e| {
        ClapperError::configuration_with_context(
            format!("invalid filter '{}': {}", directives, e),
            ErrorContext::new("build_filter", "logging"),
        )
    })
}

/// Install the global tracing subscriber
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.ansi)
        .with_target(true)
        .try_init()
        .map_err(|e| ClapperError::initialization(format!("Failed to install subscriber: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(LogLevel::parse("info"), Some(LogLevel::Info));
        assert_eq!(LogLevel::parse("INFO"), Some(LogLevel::Info));
        assert_eq!(LogLevel::parse("invalid"), None);

        assert_eq!(LogLevel::Info.as_str(), "info");
        assert!(LogLevel::Debug < LogLevel::Warn);
    }

    #[test]
    fn test_default_directives() {
        let directives = directives(&LoggingConfig::default()).unwrap();
        assert_eq!(
            directives,
            vec![
                "info".to_string(),
                "clapper::core=info".to_string(),
                "clapper::input=warn".to_string(),
                "clapper::state=info".to_string(),
                "clapper::ui=info".to_string(),
            ]
        );
    }

    #[test]
    fn test_unknown_category_rejected() {
        let mut category_levels = BTreeMap::new();
        category_levels.insert("vulkan".to_string(), "debug".to_string());
        let config = LoggingConfig {
            category_levels,
            ..LoggingConfig::default()
        };

        let err = directives(&config).unwrap_err();
        assert!(err.to_string().contains("vulkan"));
    }

    #[test]
    fn test_unknown_level_rejected() {
        let config = LoggingConfig {
            default_level: "loud".to_string(),
            ..LoggingConfig::default()
        };
        assert!(directives(&config).is_err());
    }
}
