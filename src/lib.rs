//! Clapper - a clap button widget backed by a two-state toggle counter
//!
//! The widget flips between inactive and active on every click and counts
//! how many times it has been activated. Rendering produces a virtual node
//! tree that any backend can draw.

pub use clapper_core;
pub use clapper_widgets;

use clapper_core::{ClapperConfig, Result};

/// Unified prelude module that exports all commonly used types
pub mod prelude {
    pub use clapper_core::prelude::*;
    pub use clapper_widgets::prelude::*;
}

/// Initialize logging and the widget layer from a configuration
pub fn init(config: &ClapperConfig) -> Result<()> {
    clapper_core::init(config)?;
    clapper_widgets::init()?;
    tracing::debug!(
        target: clapper_core::logging::targets::CORE,
        size = config.widget.size,
        "clapper ready"
    );
    Ok(())
}

/// Initialize with the default configuration
pub fn init_default() -> Result<()> {
    init(&ClapperConfig::default())
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_init_rejects_invalid_config() {
        let mut config = ClapperConfig::default();
        config.logging.default_level = "chatty".to_string();
        assert!(init(&config).is_err());
    }

    #[test]
    fn test_second_init_is_reported() {
        let first = init_default();
        assert!(first.is_ok());

        let mut config = ClapperConfig::default();
        config.widget.size = 64.0;
        assert!(matches!(
            init(&config),
            Err(clapper_core::ClapperError::Initialization { .. })
        ));
    }
}
