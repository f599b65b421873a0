//! Core functionality for the Clapper widget
//!
//! This crate provides the toggle state machine behind the clap button along
//! with the reactive state, event, configuration and logging plumbing the
//! widget layer is built on.

pub mod config;
pub mod error;
pub mod event;
pub mod logging;
pub mod machine;
pub mod state;
pub mod types;
pub mod vdom;

pub use config::{ClapperConfig, LoggingConfig, WidgetConfig};
pub use error::{ClapperError, ErrorContext, Result};
pub use event::{Event, EventResult};
pub use logging::{LogCategory, LogLevel};
pub use machine::{Mode, ToggleEvent, ToggleMachine, ToggleState};
pub use state::Signal;
pub use types::{Color, Point, Rect, Size, Transform};
pub use vdom::VNode;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        config::ClapperConfig,
        error::{ClapperError, Result},
        event::{Event, EventResult, KeyCode, KeyboardEvent, MouseButton, MouseEvent},
        machine::{Mode, ToggleMachine, ToggleState},
        state::Signal,
        types::{Color, Point, Rect, Size},
        vdom::VNode,
    };
}

/// Framework version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging from the given configuration
pub fn init(config: &ClapperConfig) -> Result<()> {
    config.validate()?;
    logging::init(&config.logging)?;

    tracing::info!(target: logging::targets::CORE, "Clapper core v{} initialized", VERSION);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
