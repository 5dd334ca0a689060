//! Binding between the suggestion pipeline and a widget

use super::options::{SearchKind, WidgetOptions};
use super::widget::{AutocompleteWidget, QueryId};
use crate::labels::render_suggestion;
use crate::suggest::{AdaptedResult, Suggestion, adapt_file_result, adapt_symbol_result, highlight_match};
use crate::ui::{self, Navigator};
use serde_json::Value;
use tracing::{debug, info};

/// Normalize a raw response body from the `kind` endpoint
#[must_use]
pub fn adapt(kind: SearchKind, raw: &Value) -> AdaptedResult {
    match kind {
        SearchKind::Symbol => adapt_symbol_result(raw),
        SearchKind::File => adapt_file_result(raw),
    }
}

/// Callbacks the widget invokes for one search input
#[derive(Debug, Clone)]
pub struct AutocompleteAdapter {
    options: WidgetOptions,
}

impl AutocompleteAdapter {
    #[must_use]
    pub const fn new(options: WidgetOptions) -> Self {
        Self { options }
    }

    /// Normalize a raw response body
    #[must_use]
    pub fn transform_result(&self, raw: &Value) -> AdaptedResult {
        adapt(self.options.kind, raw)
    }

    /// HTML for one suggestion row
    #[must_use]
    pub fn format_result(&self, suggestion: &Suggestion, query: &str) -> String {
        match self.options.kind {
            SearchKind::Symbol => render_suggestion(suggestion, query),
            SearchKind::File => highlight_match(suggestion, query),
        }
    }

    /// Hand the response for query `id` to the widget.
    ///
    /// Returns whether the widget kept it; stale responses are dropped.
    pub fn deliver(&self, widget: &mut dyn AutocompleteWidget, id: QueryId, raw: &Value) -> bool {
        let result = self.transform_result(raw);
        let accepted = widget.accept(id, result.suggestions);
        if !accepted {
            debug!(query = id.get(), "dropped response for superseded query");
        }
        accepted
    }

    /// The user picked `suggestion`: navigate to it.
    ///
    /// # Errors
    ///
    /// Returns `UiError` if the navigator fails.
    pub fn on_select(&self, suggestion: &Suggestion, navigator: &mut dyn Navigator) -> ui::Result<()> {
        let target = suggestion.navigation_target();
        info!(%target, "navigate to suggestion");
        navigator.navigate(&target)
    }
}
