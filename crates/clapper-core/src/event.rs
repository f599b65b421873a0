//! Input events delivered to widgets

use glam::Vec2;

/// Result of event handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled, stop propagation
    Handled,
    /// Event was not handled, continue propagation
    Ignored,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Handled)
    }
}

/// Mouse button types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Keys the widgets react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Enter,
    Space,
    Escape,
    Tab,
    Other(u32),
}

/// Mouse event data
#[derive(Debug, Clone, PartialEq)]
pub struct MouseEvent {
    pub position: Vec2,
    pub button: Option<MouseButton>,
}

impl MouseEvent {
    pub fn left(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            button: Some(MouseButton::Left),
        }
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            button: None,
        }
    }
}

/// Keyboard event data
#[derive(Debug, Clone, PartialEq)]
pub struct KeyboardEvent {
    pub key_code: KeyCode,
    pub is_repeat: bool,
}

impl KeyboardEvent {
    pub fn new(key_code: KeyCode) -> Self {
        Self {
            key_code,
            is_repeat: false,
        }
    }
}

/// Main event type
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Mouse button pressed
    MouseDown(MouseEvent),
    /// Mouse button released
    MouseUp(MouseEvent),
    /// Mouse moved
    MouseMove(MouseEvent),
    /// Mouse entered widget
    MouseEnter,
    /// Mouse left widget
    MouseExit,
    /// Key pressed
    KeyDown(KeyboardEvent),
    /// Key released
    KeyUp(KeyboardEvent),
    /// Keyboard focus gained or lost
    Focus(bool),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_constructors() {
        let down = MouseEvent::left(3.0, 4.0);
        assert_eq!(down.position, Vec2::new(3.0, 4.0));
        assert_eq!(down.button, Some(MouseButton::Left));
        assert_eq!(MouseEvent::moved(3.0, 4.0).button, None);
    }

    #[test]
    fn test_event_result() {
        assert!(EventResult::Handled.is_handled());
        assert!(!EventResult::Ignored.is_handled());
    }
}
