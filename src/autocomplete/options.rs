//! Widget options for the two autocomplete inputs

use crate::config::AutocompleteSettings;
use serde_json::json;
use std::time::Duration;
use url::Url;

/// Which backend index a widget queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    /// Symbol index, fans out per kind record
    Symbol,
    /// File tree index, one suggestion per entry
    File,
}

impl SearchKind {
    /// API path segment of the endpoint
    #[must_use]
    pub const fn endpoint(&self) -> &'static str {
        match self {
            Self::Symbol => "symbol",
            Self::File => "tree",
        }
    }
}

/// Fixed configuration handed to the external autocomplete widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetOptions {
    pub kind: SearchKind,
    /// Endpoint queries are POSTed to
    pub service_url: Url,
    /// Debounce before a keystroke turns into a request
    pub defer: Duration,
    /// Highlight the first suggestion automatically
    pub auto_select_first: bool,
    /// Fire selection when the typed text exactly matches a suggestion
    pub trigger_select_on_valid_input: bool,
    /// Show a notice when the backend returns nothing
    pub show_no_suggestion_notice: bool,
    /// Cap on suggestions kept for local lookup
    pub lookup_limit: Option<usize>,
    /// Characters required before querying
    pub min_chars: usize,
}

/// API endpoint for `kind` under `tag`
///
/// # Errors
///
/// Returns `url::ParseError` if the joined URL is invalid.
pub fn api_url(server: &Url, tag: &str, kind: SearchKind) -> Result<Url, url::ParseError> {
    server.join(&format!("/api/{tag}/{}", kind.endpoint()))
}

impl WidgetOptions {
    /// Options for the symbol input
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` if the endpoint URL is invalid.
    pub fn symbol(
        server: &Url,
        tag: &str,
        settings: &AutocompleteSettings,
    ) -> Result<Self, url::ParseError> {
        Ok(Self {
            kind: SearchKind::Symbol,
            service_url: api_url(server, tag, SearchKind::Symbol)?,
            defer: Duration::from_millis(settings.symbol_defer_ms),
            auto_select_first: true,
            trigger_select_on_valid_input: false,
            show_no_suggestion_notice: true,
            lookup_limit: None,
            min_chars: 1,
        })
    }

    /// Options for the file input
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` if the endpoint URL is invalid.
    pub fn file(
        server: &Url,
        tag: &str,
        settings: &AutocompleteSettings,
    ) -> Result<Self, url::ParseError> {
        Ok(Self {
            kind: SearchKind::File,
            service_url: api_url(server, tag, SearchKind::File)?,
            defer: Duration::from_millis(settings.file_defer_ms),
            auto_select_first: false,
            trigger_select_on_valid_input: true,
            show_no_suggestion_notice: true,
            lookup_limit: Some(settings.file_lookup_limit),
            min_chars: settings.file_min_chars,
        })
    }

    /// Request body for `query`
    #[must_use]
    pub fn params(query: &str) -> String {
        json!({ "q": query }).to_string()
    }
}
