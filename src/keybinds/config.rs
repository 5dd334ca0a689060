//! Configuration for keybinds.

use super::actions::KeyAction;
use super::error::KeybindError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Overrides for the browsing key table.
///
/// Keys are action ids (see [`KeyAction::id`]); actions not mentioned keep
/// their default key.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct KeyBindingConfig {
    pub keybinds: HashMap<String, KeybindDef>,
}

/// Keybind definition - single key, alternatives, or `"none"` to disable.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum KeybindDef {
    /// Single keybind
    Single(String),
    /// Multiple alternative keybinds for the same action
    Multiple(Vec<String>),
}

impl KeybindDef {
    fn keys(&self) -> Vec<&str> {
        match self {
            Self::Single(key) => vec![key.as_str()],
            Self::Multiple(keys) => keys.iter().map(String::as_str).collect(),
        }
    }
}

/// Resolved key-to-action table. Each key maps to at most one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyTable {
    bindings: HashMap<char, KeyAction>,
}

impl KeyTable {
    /// Action bound to `key`
    #[must_use]
    pub fn get(&self, key: char) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    /// Keys bound to `action`, sorted
    #[must_use]
    pub fn keys_for(&self, action: KeyAction) -> Vec<char> {
        let mut keys = self
            .bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(k, _)| *k)
            .collect::<Vec<_>>();
        keys.sort_unstable();
        keys
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for KeyTable {
    fn default() -> Self {
        Self {
            bindings: KeyAction::ALL
                .into_iter()
                .map(|a| (a.default_key(), a))
                .collect(),
        }
    }
}

fn parse_key(action: KeyAction, key: &str) -> Result<char, KeybindError> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(KeybindError::InvalidKey {
            action: action.id().to_string(),
            key: key.to_string(),
        }),
    }
}

impl KeyBindingConfig {
    /// Check if a keybind is disabled for an action.
    #[must_use]
    pub fn is_disabled(&self, action: KeyAction) -> bool {
        self.keybinds
            .get(action.id())
            .is_some_and(|def| def.keys().iter().all(|k| *k == "none"))
    }

    /// Build the key table: defaults, overridden by this config.
    ///
    /// # Errors
    ///
    /// Returns `KeybindError` if the config names an unknown action, binds
    /// something other than a single character, or binds one key to two
    /// actions.
    pub fn build_table(&self) -> Result<KeyTable, KeybindError> {
        if let Some(unknown) = self
            .keybinds
            .keys()
            .find(|id| KeyAction::from_id(id).is_none())
        {
            return Err(KeybindError::UnknownAction(unknown.clone()));
        }

        let mut bindings = HashMap::new();
        for action in KeyAction::ALL {
            let keys = match self.keybinds.get(action.id()) {
                Some(def) => def
                    .keys()
                    .into_iter()
                    .filter(|k| *k != "none")
                    .map(|k| parse_key(action, k))
                    .collect::<Result<Vec<_>, _>>()?,
                None => vec![action.default_key()],
            };

            for key in keys {
                if let Some(existing) = bindings.insert(key, action)
                    && existing != action
                {
                    return Err(KeybindError::DuplicateKey {
                        key,
                        first: existing.id().to_string(),
                        second: action.id().to_string(),
                    });
                }
            }
        }

        Ok(KeyTable { bindings })
    }
}
