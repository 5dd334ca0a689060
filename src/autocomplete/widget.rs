//! Contract of the external autocomplete widget

use crate::suggest::Suggestion;

/// Identifies one query issued by a widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryId(u64);

impl QueryId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

/// The autocomplete widget the adapter is bound to.
///
/// The widget owns debouncing, rendering and request ordering. This crate
/// does not cancel in-flight queries: it relies on the widget dropping any
/// response whose query has since been superseded ("latest query wins").
pub trait AutocompleteWidget {
    /// Start a new query, superseding every earlier one
    fn begin_query(&mut self, query: &str) -> QueryId;

    /// Offer the suggestions for query `id`.
    ///
    /// Returns `false`, leaving the shown suggestions untouched, when `id`
    /// is not the latest query.
    fn accept(&mut self, id: QueryId, suggestions: Vec<Suggestion>) -> bool;

    /// Suggestions currently shown
    fn suggestions(&self) -> &[Suggestion];
}
