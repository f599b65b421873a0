//! Error types for the Clapper widget
//!
//! The toggle machine itself never fails. These errors cover the ambient
//! surfaces around it: configuration loading, logging setup and style
//! validation.

use std::collections::BTreeMap;
use thiserror::Error;

/// Context information attached to an error to aid in debugging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Operation that was being performed when the error occurred
    pub operation: String,
    /// Component or module where the error occurred
    pub component: String,
    /// Additional contextual data
    pub metadata: BTreeMap<String, String>,
}

impl ErrorContext {
    /// Create a new error context
    pub fn new(operation: impl Into<String>, component: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            component: component.into(),
            metadata: BTreeMap::new(),
        }
    }

    /// Add metadata to the context
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Format context for logging
    pub fn format_for_log(&self) -> String {
        let mut parts = vec![
            format!("operation={}", self.operation),
            format!("component={}", self.component),
        ];

        if !self.metadata.is_empty() {
            let metadata_str = self
                .metadata
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join(", ");
            parts.push(format!("metadata=[{}]", metadata_str));
        }

        parts.join(", ")
    }
}

/// Main error type for Clapper operations
#[derive(Debug, Error)]
pub enum ClapperError {
    #[error("Widget error: {message}")]
    Widget {
        message: String,
        context: Option<ErrorContext>,
    },

    #[error("Initialization error: {message}")]
    Initialization {
        message: String,
        context: Option<ErrorContext>,
    },

    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        context: Option<ErrorContext>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClapperError {
    /// Create an initialization error from a string
    pub fn initialization<S: Into<String>>(msg: S) -> Self {
        Self::Initialization {
            message: msg.into(),
            context: None,
        }
    }

    /// Create a configuration error from a string
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Self::Configuration {
            message: msg.into(),
            context: None,
        }
    }

    /// Create a widget error with context
    pub fn widget_with_context<S: Into<String>>(msg: S, context: ErrorContext) -> Self {
        Self::Widget {
            message: msg.into(),
            context: Some(context),
        }
    }

    /// Create a configuration error with context
    pub fn configuration_with_context<S: Into<String>>(msg: S, context: ErrorContext) -> Self {
        Self::Configuration {
            message: msg.into(),
            context: Some(context),
        }
    }

    /// Get the error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::Widget { context, .. }
            | Self::Initialization { context, .. }
            | Self::Configuration { context, .. } => context.as_ref(),
            Self::Io(_) | Self::Json(_) => None,
        }
    }

    /// Format error with context for logging
    pub fn format_for_log(&self) -> String {
        let base_msg = self.to_string();
        if let Some(context) = self.context() {
            format!("{} [{}]", base_msg, context.format_for_log())
        } else {
            base_msg
        }
    }
}

/// Result type alias for Clapper operations
pub type Result<T> = std::result::Result<T, ClapperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_with_context() {
        let context = ErrorContext::new("load", "config").with_metadata("path", "clapper.json");
        let err = ClapperError::configuration_with_context("missing widget section", context);

        assert_eq!(
            err.format_for_log(),
            "Configuration error: missing widget section \
             [operation=load, component=config, metadata=[path=clapper.json]]"
        );
    }

    #[test]
    fn test_io_error_has_no_context() {
        let err: ClapperError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.context().is_none());
        assert_eq!(err.format_for_log(), "IO error: gone");
    }
}
