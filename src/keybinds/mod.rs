//! Keyboard commands for browsing.
//!
//! While focus is outside the search inputs, single keys drive the page:
//! toggling overlays, scrolling, and pushing one of the search modes.
//! The key table has defaults and can be overridden from the config file.

pub mod actions;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod help;

pub use actions::{ActionCategory, KeyAction};
pub use config::{KeyBindingConfig, KeyTable, KeybindDef};
pub use dispatcher::{DEFAULT_SCROLL_STEP, BrowsingState, DispatchOutcome, KeyContext, KeyDispatcher, KeyState};
pub use error::KeybindError;
pub use help::generate_help_text;
