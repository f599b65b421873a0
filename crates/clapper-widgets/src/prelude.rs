//! Prelude module for Clapper widgets
//!
//! `use clapper_widgets::prelude::*;` brings in the widget, its style and the
//! core types needed to drive it.

// Animation
pub use crate::animation::{shockwave, Curve, Keyframes, Transition, Tween, Tweenable};

// Re-export core types that are commonly used with widgets
pub use clapper_core::prelude::*;

// Widget trait and common types
pub use crate::widget::{Widget, WidgetId, WidgetState};

// Controls
pub use crate::clap_button::{ClapButton, ClapButtonStyle};
pub use crate::control::{ControlRole, ControlState};
