//! Suggestion adaptation
//!
//! Turns raw symbol-search and file-search payloads into the uniform
//! [`Suggestion`] list the autocomplete widget consumes, and renders
//! highlighted matches for display.
//!
//! Suggestions are built fresh for every response and never cached.

pub mod adapt;
pub mod highlight;
pub mod types;

pub use adapt::{AdaptedResult, adapt_file_result, adapt_symbol_result};
pub use highlight::highlight_match;
pub use types::{FileRecord, KindRecord, Location, ROOT_LABEL, Suggestion, SuggestionPayload};
