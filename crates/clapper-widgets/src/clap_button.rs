//! Clap button widget
//!
//! A round button holding a hand icon. Each completed click or keyboard
//! activation sends `Toggle` to the widget's [`ToggleMachine`]; the icon is
//! green while active and gray otherwise. Rendering only reads the current
//! snapshot, interaction state and style.

use crate::animation::{shockwave, Curve, Iterations, Keyframes, Transition, Tween};
use crate::control::{ControlRole, ControlState};
use crate::widget::{generate_id, Widget, WidgetId, WidgetState};
use clapper_core::{
    config::WidgetConfig,
    error::{ClapperError, ErrorContext, Result},
    event::{Event, EventResult},
    logging::targets,
    machine::{ToggleMachine, ToggleState},
    state::{Signal, SubscriptionId},
    types::{Color, Rect, Size, Transform},
    vdom::VNode,
};
use std::any::Any;
use std::time::Duration;
use thiserror::Error;

const ICON_VIEW_BOX: &str = "-549 338 100.1 125";

const ICON_PATHS: [&str; 2] = [
    "M-471.2 366.8c1.2 1.1 1.9 2.6 2.3 4.1.4-.3.8-.5 1.2-.7 1-1.9.7-4.3-1-5.9-2-1.9-5.2-1.9-7.2.1l-.2.2c1.8.1 3.6.9 4.9 2.2zm-28.8 14c.4.9.7 1.9.8 3.1l16.5-16.9c.6-.6 1.4-1.1 2.1-1.5 1-1.9.7-4.4-.9-6-2-1.9-5.2-1.9-7.2.1l-15.5 15.9c2.3 2.2 3.1 3 4.2 5.3zm-38.9 39.7c-.1-8.9 3.2-17.2 9.4-23.6l18.6-19c.7-2 .5-4.1-.1-5.3-.8-1.8-1.3-2.3-3.6-4.5l-20.9 21.4c-10.6 10.8-11.2 27.6-2.3 39.3-.6-2.6-1-5.4-1.1-8.3z",
    "M-527.2 399.1l20.9-21.4c2.2 2.2 2.7 2.6 3.5 4.5.8 1.8 1 5.4-1.6 8l-11.8 12.2c-.5.5-.4 1.2 0 1.7.5.5 1.2.5 1.7 0l34-35c1.9-2 5.2-2.1 7.2-.1 2 1.9 2 5.2.1 7.2l-24.7 25.3c-.5.5-.4 1.2 0 1.7.5.5 1.2.5 1.7 0l28.5-29.3c2-2 5.2-2 7.1-.1 2 1.9 2 5.1.1 7.1l-28.5 29.3c-.5.5-.4 1.2 0 1.7.5.5 1.2.4 1.7 0l24.7-25.3c1.9-2 5.1-2.1 7.1-.1 2 1.9 2 5.2.1 7.2l-24.7 25.3c-.5.5-.4 1.2 0 1.7.5.5 1.2.5 1.7 0l14.6-15c2-2 5.2-2 7.2-.1 2 2 2.1 5.2.1 7.2l-27.6 28.4c-11.6 11.9-30.6 12.2-42.5.6-12-11.7-12.2-30.8-.6-42.7m18.1-48.4l-.7 4.9-2.2-4.4m7.6.9l-3.7 3.4 1.2-4.8m5.5 4.7l-4.8 1.6 3.1-3.9",
];

/// Problems turning a [`WidgetConfig`] into a style
#[derive(Debug, Error, PartialEq)]
pub enum StyleError {
    #[error("invalid color '{value}' for {field}")]
    InvalidColor { field: &'static str, value: String },

    #[error("invalid size {0}")]
    InvalidSize(f32),
}

impl From<StyleError> for ClapperError {
    fn from(err: StyleError) -> Self {
        ClapperError::widget_with_context(
            err.to_string(),
            ErrorContext::new("style_from_config", "clap_button"),
        )
    }
}

/// Styling options for the clap button
#[derive(Debug, Clone, PartialEq)]
pub struct ClapButtonStyle {
    pub size: f32,
    pub border_width: f32,
    pub pressed_border_width: f32,
    pub border_color: Color,
    pub icon_active: Color,
    pub icon_inactive: Color,
    pub count_color: Color,
    pub press_scale: f32,
    pub transition: Transition,
    pub hover_animation: Keyframes,
    pub hover_duration: Duration,
}

impl Default for ClapButtonStyle {
    fn default() -> Self {
        Self {
            size: 100.0,
            border_width: 1.0,
            pressed_border_width: 3.0,
            border_color: Color::rgb(202.0 / 255.0, 202.0 / 255.0, 202.0 / 255.0),
            icon_active: Color::GREEN,
            icon_inactive: Color::GRAY,
            count_color: Color::GRAY,
            press_scale: 1.2,
            transition: Transition::new("all", Duration::from_millis(200), Curve::EaseInOut),
            hover_animation: shockwave(),
            hover_duration: Duration::from_secs(2),
        }
    }
}

impl ClapButtonStyle {
    /// Build a style from configuration, keeping defaults for the rest
    pub fn from_config(config: &WidgetConfig) -> std::result::Result<Self, StyleError> {
        if !config.size.is_finite() || config.size <= 0.0 {
            return Err(StyleError::InvalidSize(config.size));
        }
        let parse = |field: &'static str, value: &str| {
            Color::from_hex(value).ok_or_else(|| StyleError::InvalidColor {
                field,
                value: value.to_string(),
            })
        };

        Ok(Self {
            size: config.size,
            border_color: parse("border_color", &config.border_color)?,
            icon_active: parse("active_color", &config.active_color)?,
            icon_inactive: parse("inactive_color", &config.inactive_color)?,
            ..Self::default()
        })
    }

    fn icon_color(&self, state: ToggleState) -> Color {
        if state.is_active() {
            self.icon_active
        } else {
            self.icon_inactive
        }
    }
}

/// Clickable hand icon backed by a toggle counter
#[derive(Debug)]
pub struct ClapButton {
    id: WidgetId,
    machine: ToggleMachine,
    snapshot: Signal<ToggleState>,
    control: ControlState,
    style: ClapButtonStyle,
    bounds: Rect,
}

impl ClapButton {
    /// Create a new clap button in the inactive state
    pub fn new() -> Self {
        let machine = ToggleMachine::new();
        let style = ClapButtonStyle::default();
        let mut control = ControlState::new(ControlRole::Button);
        control.set_label("clap");
        control.set_toggled(false);
        control.set_value("0");

        Self {
            id: generate_id(),
            snapshot: Signal::new(machine.state()),
            machine,
            control,
            bounds: Rect::new(0.0, 0.0, style.size, style.size),
            style,
        }
    }

    /// Create a button styled from configuration
    pub fn from_config(config: &WidgetConfig) -> Result<Self> {
        Ok(Self::new().style(ClapButtonStyle::from_config(config)?))
    }

    /// Set custom style
    pub fn style(mut self, style: ClapButtonStyle) -> Self {
        self.bounds.width = style.size;
        self.bounds.height = style.size;
        self.style = style;
        self
    }

    /// Set enabled state
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.control.set_disabled(!enabled);
        self
    }

    /// Send `Toggle` to the machine and publish the new snapshot
    pub fn toggle(&mut self) -> ToggleState {
        let state = self.machine.toggle();
        self.control.set_toggled(state.is_active());
        self.control.set_value(state.count.to_string());
        self.snapshot.set(state);
        tracing::info!(target: targets::UI, widget = self.id, %state, "clap");
        state
    }

    /// Current `(mode, count)` snapshot
    pub fn state(&self) -> ToggleState {
        self.machine.state()
    }

    pub fn is_active(&self) -> bool {
        self.machine.is_active()
    }

    pub fn count(&self) -> u64 {
        self.machine.count()
    }

    /// Observable snapshot, updated after every toggle
    pub fn state_signal(&self) -> &Signal<ToggleState> {
        &self.snapshot
    }

    /// Run `callback` with each new snapshot
    pub fn on_change<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&ToggleState) + Send + Sync + 'static,
    {
        self.snapshot.subscribe(callback)
    }

    pub fn control(&self) -> &ControlState {
        &self.control
    }

    pub fn style_ref(&self) -> &ClapButtonStyle {
        &self.style
    }

    fn render_icon(&self, state: ToggleState) -> VNode {
        let paths = ICON_PATHS
            .iter()
            .map(|d| VNode::element("path").attr("d", *d))
            .collect();

        VNode::element("svg")
            .attr("id", "clap--icon")
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("viewBox", ICON_VIEW_BOX)
            .style("width", format!("{}px", self.style.size))
            .style("height", format!("{}px", self.style.size))
            .style("fill", self.style.icon_color(state).to_css())
            .children(paths)
    }

    fn render_button(&self, state: ToggleState, hand: VNode) -> VNode {
        let style = &self.style;
        let mut button = VNode::element("button")
            .attr("class", "clap-button")
            .attr("type", "button")
            .attr("aria-pressed", state.is_active().to_string())
            .attr("data-state", state.mode.as_str())
            .style("display", "flex")
            .style("flex-direction", "column")
            .style("align-items", "center")
            .style("justify-content", "center")
            .style("width", format!("{}px", style.size))
            .style("height", format!("{}px", style.size))
            .style("border-radius", format!("{}px", style.size / 2.0))
            .style(
                "border",
                format!("{}px solid {}", style.border_width, style.border_color.to_css()),
            )
            .style("background", "transparent")
            .style("outline", "none")
            .style("transition", style.transition.to_css());

        match self.control.state() {
            WidgetState::Hovered => {
                button = button
                    .style("box-shadow", format!("0 0 2px {}", style.icon_active.to_css()))
                    .style(
                        "animation",
                        style
                            .hover_animation
                            .animation(style.hover_duration, Iterations::Infinite),
                    );
            }
            WidgetState::Pressed => {
                button = button.style("box-shadow", "none").style(
                    "border",
                    format!(
                        "{}px solid {}",
                        style.pressed_border_width,
                        style.icon_active.to_css()
                    ),
                );
            }
            WidgetState::Disabled => {
                button = button.attr("disabled", "true").style("opacity", "0.5");
            }
            WidgetState::Normal => {}
        }

        if self.control.is_focused() {
            button = button.style(
                "outline",
                format!("2px solid {}", style.icon_active.with_alpha(0.5).to_css()),
            );
        }

        let press = self.control.press_progress();
        if press > 0.0 {
            let scale = Tween::new(1.0, style.press_scale)
                .with_curve(Curve::EaseOut)
                .transform(press);
            button = button.style("transform", Transform::scale(scale).to_css());
        }

        button.child(hand)
    }
}

impl Default for ClapButton {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ClapButton {
    fn id(&self) -> WidgetId {
        self.id
    }

    /// Centers the button inside `bounds`
    fn layout(&mut self, bounds: Rect) -> Size {
        let size = self.style.size;
        self.bounds = Rect::new(
            bounds.x + ((bounds.width - size) / 2.0).max(0.0),
            bounds.y + ((bounds.height - size) / 2.0).max(0.0),
            size,
            size,
        );
        self.bounds.size()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn render(&self) -> VNode {
        let state = self.machine.state();

        let hand = VNode::element("div")
            .attr("class", "clap-hand")
            .attr("role", ControlRole::Image.as_str())
            .attr("aria-label", "clap")
            .attr("data-count", state.count.to_string())
            .style("display", "flex")
            .style("justify-content", "center")
            .style("align-items", "center")
            .child(self.render_icon(state));

        let count = VNode::element("div")
            .attr("class", "clap-count")
            .attr("aria-live", "polite")
            .style("font-size", "12px")
            .style("color", self.style.count_color.to_css())
            .style("padding", "4px")
            .style("margin", "8px")
            .child(VNode::text(state.count.to_string()));

        VNode::element("div")
            .attr("class", "clap-button-wrap")
            .style("display", "flex")
            .style("flex-direction", "column")
            .style("align-items", "center")
            .style("justify-content", "center")
            .style("width", "100%")
            .children(vec![self.render_button(state, hand), count])
    }

    fn handle_event(&mut self, event: &Event) -> EventResult {
        let response = self.control.handle_event(event, self.bounds);
        if response.activated {
            self.toggle();
        }
        response.result
    }

    fn update(&mut self, delta_time: f32) {
        self.control.update(delta_time);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
