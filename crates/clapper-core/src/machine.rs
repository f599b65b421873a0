//! Toggle counter state machine
//!
//! Two modes, one event. Entering [`Mode::Active`] increments the counter;
//! leaving it does not. Every transition is looked up in [`TRANSITIONS`].

use crate::logging::targets;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete mode of the toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Inactive,
    Active,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Inactive => "inactive",
            Mode::Active => "active",
        }
    }

    /// Action run when the machine enters this mode
    fn entry_action(&self) -> EntryAction {
        match self {
            Mode::Active => EntryAction::IncrementCount,
            Mode::Inactive => EntryAction::None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Events accepted by the machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ToggleEvent {
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryAction {
    None,
    IncrementCount,
}

/// One row of the transition table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Mode,
    pub event: ToggleEvent,
    pub to: Mode,
}

/// The complete transition table
pub const TRANSITIONS: [Transition; 2] = [
    Transition {
        from: Mode::Inactive,
        event: ToggleEvent::Toggle,
        to: Mode::Active,
    },
    Transition {
        from: Mode::Active,
        event: ToggleEvent::Toggle,
        to: Mode::Inactive,
    },
];

/// Snapshot of the machine: current mode plus activation count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ToggleState {
    pub mode: Mode,
    pub count: u64,
}

impl ToggleState {
    pub fn new(mode: Mode, count: u64) -> Self {
        Self { mode, count }
    }

    pub fn is_active(&self) -> bool {
        self.mode == Mode::Active
    }
}

impl fmt::Display for ToggleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.mode, self.count)
    }
}

/// Two-state toggle with an activation counter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleMachine {
    state: ToggleState,
}

impl ToggleMachine {
    /// Start in `Inactive` with a count of zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot
    pub fn state(&self) -> ToggleState {
        self.state
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn count(&self) -> u64 {
        self.state.count
    }

    pub fn matches(&self, mode: Mode) -> bool {
        self.state.mode == mode
    }

    pub fn is_active(&self) -> bool {
        self.matches(Mode::Active)
    }

    /// The table this machine runs on
    pub fn transitions(&self) -> &'static [Transition] {
        &TRANSITIONS
    }

    /// Flip the mode, counting entries into `Active`
    pub fn toggle(&mut self) -> ToggleState {
        self.send(ToggleEvent::Toggle)
    }

    /// Apply an event and return the resulting snapshot
    pub fn send(&mut self, event: ToggleEvent) -> ToggleState {
        let from = self.state.mode;
        let Some(transition) = TRANSITIONS
            .iter()
            .find(|t| t.from == from && t.event == event)
        else {
            tracing::trace!(target: targets::STATE, %from, ?event, "event ignored");
            return self.state;
        };

        self.state.mode = transition.to;
        match transition.to.entry_action() {
            EntryAction::IncrementCount => {
                self.state.count = self.state.count.saturating_add(1);
            }
            EntryAction::None => {}
        }

        tracing::debug!(
            target: targets::STATE,
            %from,
            to = %self.state.mode,
            count = self.state.count,
            "toggle transition"
        );
        self.state
    }
}
