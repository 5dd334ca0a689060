//! Keybind configuration errors

use thiserror::Error;

/// Errors building the key table from configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeybindError {
    /// Config names an action that does not exist
    #[error("Unknown key action: {0}")]
    UnknownAction(String),

    /// A binding is not a single character
    #[error("Invalid key '{key}' for {action}: expected a single character")]
    InvalidKey { action: String, key: String },

    /// Two actions share a key
    #[error("Key '{key}' is bound to both {first} and {second}")]
    DuplicateKey {
        key: char,
        first: String,
        second: String,
    },
}
