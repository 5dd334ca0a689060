//! Common types for the page abstraction layer

use std::fmt;

/// Bounding box of an element.
///
/// Whether the coordinates are viewport-relative or document-relative
/// depends on who produced it; [`crate::locate::LineLocator`] always
/// returns document-relative boxes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Rect {
    /// Create a new rectangle from its four edges
    #[must_use]
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Express this box relative to the origin (top-left corner) of `origin`
    #[must_use]
    pub fn relative_to(&self, origin: &Self) -> Self {
        Self {
            top: self.top - origin.top,
            left: self.left - origin.left,
            bottom: self.bottom - origin.top,
            right: self.right - origin.left,
        }
    }

    /// Height of the box
    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// A keypress delivered by the page.
///
/// Mirrors the DOM `keypress` event closely enough for dispatch: the
/// character produced and a flag recording whether a handler consumed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Character produced by the keypress (`'\r'` for Enter)
    pub code: char,
    default_prevented: bool,
}

impl KeyEvent {
    /// Character code of the Enter key
    pub const ENTER: char = '\r';

    /// Create a keypress for the given character
    #[must_use]
    pub const fn new(code: char) -> Self {
        Self {
            code,
            default_prevented: false,
        }
    }

    /// Create an Enter keypress
    #[must_use]
    pub const fn enter() -> Self {
        Self::new(Self::ENTER)
    }

    /// Whether this is the Enter key
    #[must_use]
    pub const fn is_enter(&self) -> bool {
        self.code == Self::ENTER
    }

    /// Mark the event as consumed so the page skips its default action
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether a handler consumed the event
    #[must_use]
    pub const fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_enter() {
            write!(f, "enter")
        } else {
            write!(f, "{}", self.code)
        }
    }
}

/// Visibility state of a modal overlay (help, about).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    /// Not shown
    #[default]
    Closed,
    /// Shown on top of the page
    Open,
}

impl OverlayState {
    /// The state reached by toggling from this one
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}
