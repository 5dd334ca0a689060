//! Search mode state and its transition function

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which search input is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Symbol autocomplete
    #[default]
    Symbol,
    /// File/path autocomplete
    File,
    /// Jump to line number
    Line,
    /// Free-text search
    Text,
}

impl SearchMode {
    /// All modes, in radio-button order
    pub const ALL: [Self; 4] = [Self::Symbol, Self::File, Self::Line, Self::Text];

    /// Lowercase name, as used in element ids and config
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Symbol => "symbol",
            Self::File => "file",
            Self::Line => "line",
            Self::Text => "text",
        }
    }

    /// Id of the search input for this mode
    #[must_use]
    pub fn searchbox_id(&self) -> String {
        format!("searchbox-{}", self.as_str())
    }

    /// Id of the radio button selecting this mode
    #[must_use]
    pub fn radio_id(&self) -> String {
        format!("sb-{}", self.as_str())
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error parsing a mode name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown search mode: {0}")]
pub struct UnknownMode(pub String);

impl FromStr for SearchMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownMode(s.to_string()))
    }
}

/// A requested change to the mode state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Remember the active mode, then activate the given one
    Push(SearchMode),
    /// Return to the remembered mode
    Pop,
    /// Forget the remembered mode: remember the active one instead
    Flush,
    /// Activate the given mode without touching the remembered one
    Switch(SearchMode),
}

/// Outcome of applying a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeChange {
    /// Mode active before the transition
    pub from: SearchMode,
    /// Mode active after the transition
    pub to: SearchMode,
}

impl ModeChange {
    /// Whether the visible input has to change
    #[must_use]
    pub fn switches_surface(&self) -> bool {
        self.from != self.to
    }
}

/// Active and previously active mode.
///
/// Fields are private; [`ModeState::apply`] is the only way to change them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeState {
    active: SearchMode,
    previous: SearchMode,
}

impl ModeState {
    /// State with `mode` both active and remembered
    #[must_use]
    pub const fn new(mode: SearchMode) -> Self {
        Self {
            active: mode,
            previous: mode,
        }
    }

    #[must_use]
    pub const fn active(&self) -> SearchMode {
        self.active
    }

    #[must_use]
    pub const fn previous(&self) -> SearchMode {
        self.previous
    }

    /// Apply a transition and report what changed
    pub fn apply(&mut self, transition: Transition) -> ModeChange {
        let from = self.active;
        match transition {
            Transition::Push(mode) => {
                self.previous = self.active;
                self.active = mode;
            }
            Transition::Pop => self.active = self.previous,
            Transition::Flush => self.previous = self.active,
            Transition::Switch(mode) => self.active = mode,
        }
        ModeChange {
            from,
            to: self.active,
        }
    }
}
