//! Backend payload normalization
//!
//! Both search endpoints answer `{"data": [entry, ...]}`. A missing, null
//! or non-list `data` field means zero results, and an entry that does not
//! have the expected shape is skipped; neither is ever an error.

use super::types::{FileRecord, Suggestion, SuggestionPayload, SymbolEntry, display_value};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Normalized result handed to the autocomplete widget
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdaptedResult {
    pub suggestions: Vec<Suggestion>,
}

impl AdaptedResult {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.suggestions.len()
    }
}

fn entries(raw: &Value) -> &[Value] {
    if let Some(error) = raw.get("error").and_then(Value::as_str) {
        warn!(%error, "backend reported an error, treating as no results");
    }
    raw.get("data")
        .and_then(Value::as_array)
        .map_or(&[][..], Vec::as_slice)
}

fn parse_entry<'a, T: Deserialize<'a>>(entry: &'a Value) -> Option<T> {
    match T::deserialize(entry) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!(error = %e, "skipping malformed result entry");
            None
        }
    }
}

/// Fan a symbol-search payload out into one suggestion per kind record.
///
/// Every record of an entry shares the entry's display value and is tagged
/// with the entry hash and its index in the entry's kind list.
#[must_use]
pub fn adapt_symbol_result(raw: &Value) -> AdaptedResult {
    let mut suggestions = Vec::new();

    for entry in entries(raw) {
        let Some(symbol) = parse_entry::<SymbolEntry>(entry) else {
            continue;
        };
        let value = display_value(
            symbol.name.as_deref(),
            symbol.dir.as_deref(),
            symbol.file.as_deref(),
        );

        for (index, mut kind) in symbol.kinds.into_iter().enumerate() {
            kind.owner_hash.clone_from(&symbol.hash);
            kind.index_within_owner = index;
            suggestions.push(Suggestion {
                display_value: value.clone(),
                payload: SuggestionPayload::Kind(kind),
            });
        }
    }

    debug!(count = suggestions.len(), "adapted symbol result");
    AdaptedResult { suggestions }
}

/// Map a tree-search payload one-to-one into suggestions
#[must_use]
pub fn adapt_file_result(raw: &Value) -> AdaptedResult {
    let suggestions = entries(raw)
        .iter()
        .filter_map(parse_entry::<FileRecord>)
        .map(|file| Suggestion {
            display_value: display_value(
                file.name.as_deref(),
                file.dir.as_deref(),
                file.file.as_deref(),
            ),
            payload: SuggestionPayload::File(file),
        })
        .collect::<Vec<_>>();

    debug!(count = suggestions.len(), "adapted file result");
    AdaptedResult { suggestions }
}
