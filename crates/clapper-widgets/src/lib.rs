//! Clapper Widgets - the clap button and the interaction plumbing behind it
//!
//! The [`ClapButton`] owns a toggle counter and renders it into a
//! [`VNode`](clapper_core::vdom::VNode) tree on demand.

pub mod animation;
pub mod clap_button;
pub mod control;
pub mod widget;

pub mod prelude;

pub use clap_button::{ClapButton, ClapButtonStyle, StyleError};
pub use control::{ControlResponse, ControlRole, ControlSemantics, ControlState};
pub use widget::{Widget, WidgetId, WidgetState};

/// Initialize the widgets module
pub fn init() -> clapper_core::Result<()> {
    tracing::info!(target: clapper_core::logging::targets::UI, "Clapper widgets initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_creation() {
        let button = ClapButton::new();
        assert_eq!(button.count(), 0);
        assert!(!button.is_active());
    }
}
