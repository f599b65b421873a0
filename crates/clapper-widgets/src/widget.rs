//! Base widget trait and common functionality

use clapper_core::{
    event::{Event, EventResult},
    types::{Point, Rect, Size},
    vdom::VNode,
};
use std::any::Any;
use std::fmt::Debug;

/// Unique widget identifier
pub type WidgetId = u64;

/// Pointer interaction state of a widget; keyboard focus is tracked separately
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetState {
    #[default]
    Normal,
    Hovered,
    Pressed,
    Disabled,
}

/// Base trait for all widgets
pub trait Widget: Debug + Send + Sync {
    /// Get the widget's unique ID
    fn id(&self) -> WidgetId;

    /// Place the widget inside `bounds` and return the size it occupies
    fn layout(&mut self, bounds: Rect) -> Size;

    /// Bounds assigned by the last layout pass
    fn bounds(&self) -> Rect;

    /// Render the widget into a virtual node tree
    fn render(&self) -> VNode;

    /// Handle an event
    fn handle_event(&mut self, _event: &Event) -> EventResult {
        EventResult::Ignored
    }

    /// Advance time-based state
    fn update(&mut self, _delta_time: f32) {}

    /// Check if point is inside widget
    fn hit_test(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }

    /// Get widget as Any for downcasting
    fn as_any(&self) -> &dyn Any;

    /// Get mutable widget as Any for downcasting
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Generate a unique widget ID
pub fn generate_id() -> WidgetId {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = generate_id();
        let b = generate_id();
        assert_ne!(a, b);
    }
}
