//! Animation helpers for widgets
//!
//! Easing curves and tweens drive the press feedback. Keyframes describe the
//! hover shockwave as CSS so renderers can pass it through untouched.

use clapper_core::types::Color;
use std::fmt::Write as _;
use std::time::Duration;

/// Animation curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Curve {
    /// Calculate progress value (0.0 to 1.0) based on curve
    pub fn transform(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Curve::Linear => t,
            Curve::EaseIn => t * t,
            Curve::EaseOut => t * (2.0 - t),
            Curve::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }

    /// CSS timing function name
    pub fn as_css(&self) -> &'static str {
        match self {
            Curve::Linear => "linear",
            Curve::EaseIn => "ease-in",
            Curve::EaseOut => "ease-out",
            Curve::EaseInOut => "ease-in-out",
        }
    }
}

/// Tween interface for interpolating values
pub trait Tweenable: Copy {
    fn lerp(start: Self, end: Self, t: f32) -> Self;
}

impl Tweenable for f32 {
    fn lerp(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }
}

impl Tweenable for Color {
    fn lerp(start: Self, end: Self, t: f32) -> Self {
        Color::rgba(
            f32::lerp(start.r, end.r, t),
            f32::lerp(start.g, end.g, t),
            f32::lerp(start.b, end.b, t),
            f32::lerp(start.a, end.a, t),
        )
    }
}

/// Simple tween object
#[derive(Debug, Clone, Copy)]
pub struct Tween<T: Tweenable> {
    pub begin: T,
    pub end: T,
    pub curve: Curve,
}

impl<T: Tweenable> Tween<T> {
    pub fn new(begin: T, end: T) -> Self {
        Self {
            begin,
            end,
            curve: Curve::Linear,
        }
    }

    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    pub fn transform(&self, t: f32) -> T {
        T::lerp(self.begin, self.end, self.curve.transform(t))
    }
}

fn format_seconds(duration: Duration) -> String {
    format!("{}s", duration.as_secs_f32())
}

/// CSS property transition
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub property: String,
    pub duration: Duration,
    pub curve: Curve,
}

impl Transition {
    pub fn new(property: impl Into<String>, duration: Duration, curve: Curve) -> Self {
        Self {
            property: property.into(),
            duration,
            curve,
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "{} {} {}",
            self.property,
            format_seconds(self.duration),
            self.curve.as_css()
        )
    }
}

/// How often a keyframe animation repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Iterations {
    Count(u32),
    Infinite,
}

/// Named sequence of keyframe stops
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframes {
    name: String,
    stops: Vec<(u8, String)>,
}

impl Keyframes {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stops: Vec::new(),
        }
    }

    /// Add a stop at `percent` (clamped to 100); stops stay ordered
    pub fn stop(mut self, percent: u8, declarations: impl Into<String>) -> Self {
        let percent = percent.min(100);
        let declarations = declarations.into();
        match self.stops.binary_search_by_key(&percent, |(p, _)| *p) {
            Ok(index) => self.stops[index].1 = declarations,
            Err(index) => self.stops.insert(index, (percent, declarations)),
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stops(&self) -> &[(u8, String)] {
        &self.stops
    }

    /// Declarations of the last stop at or before `percent`
    pub fn declarations_at(&self, percent: u8) -> Option<&str> {
        self.stops
            .iter()
            .take_while(|(p, _)| *p <= percent)
            .last()
            .map(|(_, d)| d.as_str())
    }

    /// `@keyframes` rule text
    pub fn to_css(&self) -> String {
        let mut css = format!("@keyframes {} {{", self.name);
        for (percent, declarations) in &self.stops {
            let _ = write!(css, " {}% {{ {}; }}", percent, declarations);
        }
        css.push_str(" }");
        css
    }

    /// `animation` shorthand running these keyframes
    pub fn animation(&self, duration: Duration, iterations: Iterations) -> String {
        let iterations = match iterations {
            Iterations::Count(n) => n.to_string(),
            Iterations::Infinite => "infinite".to_string(),
        };
        format!("{} {} {}", self.name, format_seconds(duration), iterations)
    }
}

/// Pulsing green ring shown while the button is hovered
pub fn shockwave() -> Keyframes {
    Keyframes::new("shockwave")
        .stop(0, "box-shadow:0 0 rgba(0,128,0,0.1)")
        .stop(70, "box-shadow:0 0 5px 10px rgba(0,128,0,0.75)")
        .stop(100, "box-shadow:0 0 0 0 rgba(0,128,0,0.75)")
}
