//! Action types for the global key commands.

use crate::mode::SearchMode;

/// Actions a keypress can trigger while browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Toggle the help overlay - ?
    ToggleHelp,
    /// Toggle the about overlay - a
    ToggleAbout,

    /// Jump to a line number - :
    PushLineMode,
    /// Search for a file - f
    PushFileMode,
    /// Search for a symbol - s
    PushSymbolMode,
    /// Free-text search - t
    PushTextMode,

    /// Scroll to the top of the document - g
    ScrollTop,
    /// Scroll to the bottom of the document - G
    ScrollBottom,
    /// Scroll down a tenth of the viewport - j
    ScrollDown,
    /// Scroll up a tenth of the viewport - k
    ScrollUp,
}

/// Grouping used by the help text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    /// Help and about overlays
    Overlays,
    /// Page scrolling
    Scrolling,
    /// Search inputs
    Search,
}

impl KeyAction {
    /// Every action, in help-text order
    pub const ALL: [Self; 10] = [
        Self::ToggleHelp,
        Self::ToggleAbout,
        Self::ScrollDown,
        Self::ScrollUp,
        Self::ScrollTop,
        Self::ScrollBottom,
        Self::PushLineMode,
        Self::PushFileMode,
        Self::PushSymbolMode,
        Self::PushTextMode,
    ];

    /// Identifier used in the config file
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::ToggleHelp => "toggle_help",
            Self::ToggleAbout => "toggle_about",
            Self::PushLineMode => "goto_line",
            Self::PushFileMode => "find_file",
            Self::PushSymbolMode => "find_symbol",
            Self::PushTextMode => "find_text",
            Self::ScrollTop => "scroll_top",
            Self::ScrollBottom => "scroll_bottom",
            Self::ScrollDown => "scroll_down",
            Self::ScrollUp => "scroll_up",
        }
    }

    /// Look an action up by its config identifier
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.id() == id)
    }

    /// Key bound to this action when the config does not override it
    #[must_use]
    pub const fn default_key(&self) -> char {
        match self {
            Self::ToggleHelp => '?',
            Self::ToggleAbout => 'a',
            Self::PushLineMode => ':',
            Self::PushFileMode => 'f',
            Self::PushSymbolMode => 's',
            Self::PushTextMode => 't',
            Self::ScrollTop => 'g',
            Self::ScrollBottom => 'G',
            Self::ScrollDown => 'j',
            Self::ScrollUp => 'k',
        }
    }

    /// Returns a human-readable description of the action.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ToggleHelp => "Toggle the help screen",
            Self::ToggleAbout => "Toggle the about page",
            Self::PushLineMode => "Go to the specified line number (press :, type number, enter)",
            Self::PushFileMode => "Go to the specified file (press f, autocomplete, enter)",
            Self::PushSymbolMode => "Find the specified symbol (press s, autocomplete, enter)",
            Self::PushTextMode => "Find the specified text (press t, write terms, enter)",
            Self::ScrollTop => "Scroll to the top of the file",
            Self::ScrollBottom => "Scroll to the bottom of the file",
            Self::ScrollDown => "Scroll down a few lines",
            Self::ScrollUp => "Scroll up a few lines",
        }
    }

    #[must_use]
    pub const fn category(&self) -> ActionCategory {
        match self {
            Self::ToggleHelp | Self::ToggleAbout => ActionCategory::Overlays,
            Self::ScrollTop | Self::ScrollBottom | Self::ScrollDown | Self::ScrollUp => {
                ActionCategory::Scrolling
            }
            Self::PushLineMode | Self::PushFileMode | Self::PushSymbolMode | Self::PushTextMode => {
                ActionCategory::Search
            }
        }
    }

    /// The search mode this action pushes, if any
    #[must_use]
    pub const fn search_mode(&self) -> Option<SearchMode> {
        match self {
            Self::PushLineMode => Some(SearchMode::Line),
            Self::PushFileMode => Some(SearchMode::File),
            Self::PushSymbolMode => Some(SearchMode::Symbol),
            Self::PushTextMode => Some(SearchMode::Text),
            _ => None,
        }
    }
}
