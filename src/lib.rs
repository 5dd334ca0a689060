//! Srcnav - keyboard-driven search and navigation for a source browser
//!
//! This library holds the interactive core of a code-browsing page: the
//! search-mode state machine, the global key command table, the adapters
//! that turn backend search payloads into autocomplete suggestions, line
//! location for jump-to-line, and the probe-then-fallback tag switch.
//!
//! The page itself (DOM, rendering, animations) is reached through the
//! traits in [`ui`], so every component can be driven headless.

use thiserror::Error;

pub mod autocomplete;
pub mod cli;
pub mod config;
pub mod keybinds;
pub mod labels;
pub mod locate;
pub mod mode;
pub mod session;
pub mod suggest;
pub mod tags;
pub mod ui;

#[cfg(test)]
pub mod testing;

pub use mode::SearchMode;
pub use session::BrowseSession;
pub use suggest::{Suggestion, SuggestionPayload};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum SrcnavError {
    /// Query endpoint error
    #[error("Query error: {0}")]
    ClientError(#[from] autocomplete::ClientError),
    /// Key table error
    #[error("Keybind error: {0}")]
    KeybindError(#[from] keybinds::KeybindError),
    /// Page surface error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an invalid URL
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
