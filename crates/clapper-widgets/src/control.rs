//! Common control interaction and accessibility primitives.
//!
//! [`ControlState`] turns raw pointer and keyboard events into hover, press
//! and focus state and reports when a press completes as an activation. It
//! also carries accessibility semantics (role, label, toggled) so controls
//! can expose intent to higher level tooling.

use crate::animation::{Curve, Tween};
use crate::widget::WidgetState;
use clapper_core::event::{Event, EventResult, KeyCode, MouseButton};
use clapper_core::logging::targets;
use clapper_core::state::Signal;
use clapper_core::types::{Point, Rect};

/// The ARIA-like role associated with a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlRole {
    #[default]
    Button,
    Toggle,
    Image,
}

impl ControlRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlRole::Button => "button",
            ControlRole::Toggle => "switch",
            ControlRole::Image => "img",
        }
    }
}

/// Accessibility semantics for a control.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlSemantics {
    pub role: ControlRole,
    pub label: Option<String>,
    pub value: Option<String>,
    pub toggled: Option<bool>,
}

impl ControlSemantics {
    pub fn new(role: ControlRole) -> Self {
        Self {
            role,
            ..Default::default()
        }
    }
}

/// What started the current press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PressSource {
    Pointer,
    Keyboard,
}

/// Outcome of feeding one event to a [`ControlState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlResponse {
    pub result: EventResult,
    /// A press was completed on the control
    pub activated: bool,
}

impl ControlResponse {
    fn ignored() -> Self {
        Self {
            result: EventResult::Ignored,
            activated: false,
        }
    }

    fn handled() -> Self {
        Self {
            result: EventResult::Handled,
            activated: false,
        }
    }

    fn activated() -> Self {
        Self {
            result: EventResult::Handled,
            activated: true,
        }
    }
}

/// Shared interaction state for focusable/pressable controls.
#[derive(Debug, Clone)]
pub struct ControlState {
    state: Signal<WidgetState>,
    focused: bool,
    press_source: Option<PressSource>,
    interaction_progress: f32,
    press_progress: f32,
    semantics: ControlSemantics,
}

impl ControlState {
    /// Create a new control state for the given role.
    pub fn new(role: ControlRole) -> Self {
        Self {
            state: Signal::new(WidgetState::Normal),
            focused: false,
            press_source: None,
            interaction_progress: 0.0,
            press_progress: 0.0,
            semantics: ControlSemantics::new(role),
        }
    }

    /// Current widget state.
    pub fn state(&self) -> WidgetState {
        self.state.get()
    }

    /// Observable handle on the widget state.
    pub fn state_signal(&self) -> &Signal<WidgetState> {
        &self.state
    }

    pub fn is_disabled(&self) -> bool {
        self.state() == WidgetState::Disabled
    }

    /// Whether the control holds keyboard focus. Independent of hover and press.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Mark the control as disabled/enabled.
    pub fn set_disabled(&mut self, disabled: bool) {
        if disabled {
            self.press_source = None;
            self.focused = false;
            self.state.set(WidgetState::Disabled);
        } else if self.is_disabled() {
            self.state.set(WidgetState::Normal);
        }
    }

    /// Update the semantics label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.semantics.label = Some(label.into());
    }

    /// Update the semantics value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.semantics.value = Some(value.into());
    }

    /// Mark whether the control is toggled.
    pub fn set_toggled(&mut self, toggled: bool) {
        self.semantics.toggled = Some(toggled);
    }

    /// Access semantics for inspectors or higher-level layers.
    pub fn semantics(&self) -> &ControlSemantics {
        &self.semantics
    }

    /// Smooth animation progress toward the current state's targets.
    pub fn update(&mut self, delta_time: f32) {
        let target_interaction = match self.state() {
            WidgetState::Pressed => 1.0,
            WidgetState::Hovered => 0.65,
            WidgetState::Normal if self.focused => 0.4,
            WidgetState::Disabled | WidgetState::Normal => 0.0,
        };
        let target_press = if self.state() == WidgetState::Pressed {
            1.0
        } else {
            0.0
        };

        let factor = (delta_time * 8.0).clamp(0.0, 1.0);
        let smooth = |current: f32, target: f32| {
            if factor >= 1.0 {
                target
            } else {
                (current + (target - current) * factor).clamp(0.0, 1.0)
            }
        };

        self.interaction_progress = smooth(self.interaction_progress, target_interaction);
        self.press_progress = smooth(self.press_progress, target_press);
    }

    /// Overall interaction factor used for color/opacity blending.
    pub fn interaction_factor(&self) -> f32 {
        Tween::new(0.0, 1.0)
            .with_curve(Curve::EaseOut)
            .transform(self.interaction_progress)
    }

    /// Raw press animation progress (0.0 to 1.0).
    pub fn press_progress(&self) -> f32 {
        self.press_progress
    }

    /// Update hover state when the cursor enters/leaves the control bounds.
    pub fn hover(&mut self, within: bool) {
        match (within, self.state()) {
            (true, WidgetState::Normal) => self.state.set(WidgetState::Hovered),
            (false, WidgetState::Hovered) => self.state.set(WidgetState::Normal),
            (false, WidgetState::Pressed) if self.press_source == Some(PressSource::Pointer) => {
                // Dragged out while pressed; the release will not activate.
                self.press_source = None;
                self.state.set(WidgetState::Normal);
            }
            _ => {}
        }
    }

    /// Start a press interaction if the point is inside.
    pub fn press(&mut self, point: Point, bounds: Rect) -> bool {
        if self.is_disabled() || !bounds.contains(point) {
            return false;
        }
        self.press_source = Some(PressSource::Pointer);
        self.state.set(WidgetState::Pressed);
        true
    }

    /// Finish a press interaction and report whether activation should occur.
    pub fn release(&mut self, point: Point, bounds: Rect) -> bool {
        if self.press_source != Some(PressSource::Pointer) {
            return false;
        }
        self.press_source = None;
        let inside = bounds.contains(point);
        self.state.set(if inside {
            WidgetState::Hovered
        } else {
            WidgetState::Normal
        });
        inside
    }

    /// Take keyboard focus. Disabled controls cannot be focused.
    pub fn focus(&mut self) {
        if !self.is_disabled() {
            self.focused = true;
        }
    }

    /// Drop keyboard focus, cancelling any keyboard press in flight.
    pub fn blur(&mut self) {
        self.focused = false;
        if self.press_source == Some(PressSource::Keyboard) {
            self.press_source = None;
            self.state.set(WidgetState::Normal);
        }
    }

    /// Keyboard activations for accessible triggers. Only a focused control
    /// responds.
    pub fn handle_keyboard_activation(&mut self, event: &Event) -> ControlResponse {
        if self.is_disabled() || !self.focused {
            return ControlResponse::ignored();
        }
        match event {
            Event::KeyDown(key) if matches!(key.key_code, KeyCode::Enter | KeyCode::Space) => {
                if self.press_source.is_none() {
                    self.press_source = Some(PressSource::Keyboard);
                    self.state.set(WidgetState::Pressed);
                }
                ControlResponse::handled()
            }
            Event::KeyUp(key) if matches!(key.key_code, KeyCode::Enter | KeyCode::Space) => {
                if self.press_source == Some(PressSource::Keyboard) {
                    self.press_source = None;
                    self.state.set(WidgetState::Normal);
                    return ControlResponse::activated();
                }
                ControlResponse::ignored()
            }
            _ => ControlResponse::ignored(),
        }
    }

    /// Pointer-based interaction dispatcher.
    pub fn handle_pointer_event(&mut self, event: &Event, bounds: Rect) -> ControlResponse {
        if self.is_disabled() {
            return ControlResponse::ignored();
        }
        match event {
            Event::MouseMove(mouse) => {
                self.hover(bounds.contains(Point::from(mouse.position)));
                ControlResponse::ignored()
            }
            Event::MouseEnter => {
                self.hover(true);
                ControlResponse::ignored()
            }
            Event::MouseExit => {
                self.hover(false);
                ControlResponse::ignored()
            }
            Event::MouseDown(mouse) if mouse.button == Some(MouseButton::Left) => {
                if self.press(Point::from(mouse.position), bounds) {
                    ControlResponse::handled()
                } else {
                    ControlResponse::ignored()
                }
            }
            Event::MouseUp(mouse) if mouse.button == Some(MouseButton::Left) => {
                if self.release(Point::from(mouse.position), bounds) {
                    ControlResponse::activated()
                } else {
                    ControlResponse::ignored()
                }
            }
            _ => ControlResponse::ignored(),
        }
    }

    /// Route any event through pointer, focus and keyboard handling.
    pub fn handle_event(&mut self, event: &Event, bounds: Rect) -> ControlResponse {
        let response = match event {
            Event::Focus(true) => {
                self.focus();
                ControlResponse::ignored()
            }
            Event::Focus(false) => {
                self.blur();
                ControlResponse::ignored()
            }
            Event::KeyDown(_) | Event::KeyUp(_) => self.handle_keyboard_activation(event),
            _ => self.handle_pointer_event(event, bounds),
        };
        tracing::trace!(
            target: targets::INPUT,
            ?event,
            state = ?self.state(),
            focused = self.focused,
            activated = response.activated,
            "control event"
        );
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clapper_core::event::{KeyboardEvent, MouseEvent};

    fn bounds() -> Rect {
        Rect::new(0.0, 0.0, 100.0, 100.0)
    }

    #[test]
    fn test_click_inside_activates() {
        let mut control = ControlState::new(ControlRole::Button);
        let down = control.handle_event(&Event::MouseDown(MouseEvent::left(50.0, 50.0)), bounds());
        assert_eq!(down, ControlResponse::handled());
        assert_eq!(control.state(), WidgetState::Pressed);

        let up = control.handle_event(&Event::MouseUp(MouseEvent::left(50.0, 50.0)), bounds());
        assert!(up.activated);
        assert_eq!(control.state(), WidgetState::Hovered);
    }

    #[test]
    fn test_release_outside_does_not_activate() {
        let mut control = ControlState::new(ControlRole::Button);
        control.handle_event(&Event::MouseDown(MouseEvent::left(50.0, 50.0)), bounds());
        let up = control.handle_event(&Event::MouseUp(MouseEvent::left(150.0, 50.0)), bounds());
        assert!(!up.activated);
        assert_eq!(control.state(), WidgetState::Normal);
    }

    #[test]
    fn test_drag_out_cancels_press() {
        let mut control = ControlState::new(ControlRole::Button);
        control.handle_event(&Event::MouseDown(MouseEvent::left(50.0, 50.0)), bounds());
        control.handle_event(&Event::MouseMove(MouseEvent::moved(150.0, 50.0)), bounds());
        assert_eq!(control.state(), WidgetState::Normal);

        let up = control.handle_event(&Event::MouseUp(MouseEvent::left(50.0, 50.0)), bounds());
        assert!(!up.activated);
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut control = ControlState::new(ControlRole::Button);
        let up = control.handle_event(&Event::MouseUp(MouseEvent::left(50.0, 50.0)), bounds());
        assert_eq!(up, ControlResponse::ignored());
    }

    #[test]
    fn test_keyboard_activation() {
        let mut control = ControlState::new(ControlRole::Button);
        control.handle_event(&Event::Focus(true), bounds());
        assert!(control.is_focused());
        assert_eq!(control.state(), WidgetState::Normal);

        let down = Event::KeyDown(KeyboardEvent::new(KeyCode::Space));
        assert!(!control.handle_event(&down, bounds()).activated);
        // Auto-repeat keeps the single press alive
        assert!(!control.handle_event(&down, bounds()).activated);

        let up = control.handle_event(&Event::KeyUp(KeyboardEvent::new(KeyCode::Space)), bounds());
        assert!(up.activated);
        assert_eq!(control.state(), WidgetState::Normal);
        assert!(control.is_focused());
    }

    #[test]
    fn test_keyboard_requires_focus() {
        let mut control = ControlState::new(ControlRole::Button);
        let down = Event::KeyDown(KeyboardEvent::new(KeyCode::Enter));
        let up = Event::KeyUp(KeyboardEvent::new(KeyCode::Enter));

        assert_eq!(control.handle_event(&down, bounds()), ControlResponse::ignored());
        assert!(!control.handle_event(&up, bounds()).activated);

        control.handle_event(&Event::Focus(true), bounds());
        control.handle_event(&Event::Focus(false), bounds());
        assert!(!control.is_focused());
        assert_eq!(control.handle_event(&down, bounds()), ControlResponse::ignored());
        assert!(!control.handle_event(&up, bounds()).activated);
    }

    #[test]
    fn test_blur_cancels_keyboard_press() {
        let mut control = ControlState::new(ControlRole::Button);
        control.handle_event(&Event::Focus(true), bounds());
        control.handle_event(&Event::KeyDown(KeyboardEvent::new(KeyCode::Space)), bounds());
        assert_eq!(control.state(), WidgetState::Pressed);

        control.handle_event(&Event::Focus(false), bounds());
        assert_eq!(control.state(), WidgetState::Normal);
        let up = control.handle_event(&Event::KeyUp(KeyboardEvent::new(KeyCode::Space)), bounds());
        assert!(!up.activated);
    }

    #[test]
    fn test_focus_survives_pointer_click() {
        let mut control = ControlState::new(ControlRole::Button);
        control.handle_event(&Event::Focus(true), bounds());
        control.handle_event(&Event::MouseEnter, bounds());
        assert_eq!(control.state(), WidgetState::Hovered);

        control.handle_event(&Event::MouseDown(MouseEvent::left(50.0, 50.0)), bounds());
        let up = control.handle_event(&Event::MouseUp(MouseEvent::left(50.0, 50.0)), bounds());
        assert!(up.activated);
        assert!(control.is_focused());

        let down = Event::KeyDown(KeyboardEvent::new(KeyCode::Enter));
        control.handle_event(&down, bounds());
        let up = control.handle_event(&Event::KeyUp(KeyboardEvent::new(KeyCode::Enter)), bounds());
        assert!(up.activated);
    }

    #[test]
    fn test_disabled_ignores_everything() {
        let mut control = ControlState::new(ControlRole::Button);
        control.handle_event(&Event::Focus(true), bounds());
        control.set_disabled(true);
        assert!(!control.is_focused());
        control.handle_event(&Event::Focus(true), bounds());
        assert!(!control.is_focused());
        control.handle_event(&Event::MouseDown(MouseEvent::left(50.0, 50.0)), bounds());
        let up = control.handle_event(&Event::MouseUp(MouseEvent::left(50.0, 50.0)), bounds());
        assert!(!up.activated);
        assert_eq!(control.state(), WidgetState::Disabled);

        control.set_disabled(false);
        assert_eq!(control.state(), WidgetState::Normal);
    }

    #[test]
    fn test_progress_tracks_state() {
        let mut control = ControlState::new(ControlRole::Button);
        control.press(Point::new(1.0, 1.0), bounds());
        control.update(1.0);
        assert_eq!(control.press_progress(), 1.0);
        assert_eq!(control.interaction_factor(), 1.0);

        control.release(Point::new(1.0, 1.0), bounds());
        control.update(0.0625);
        assert_eq!(control.press_progress(), 0.5);
    }
}
