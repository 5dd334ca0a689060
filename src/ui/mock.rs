//! Mock page implementations for testing
//!
//! These stand in for the real document so the core can be exercised
//! without a browser. They record what the core asked of them.

use super::error::{Result, UiError};
use super::traits::{Navigator, Overlay, Page, SearchSurfaces};
use super::types::{OverlayState, Rect};
use crate::autocomplete::{AutocompleteWidget, QueryId};
use crate::mode::SearchMode;
use crate::suggest::Suggestion;
use std::collections::{HashMap, HashSet};
use std::time::Duration;

/// Height of a source line in [`MockPage::with_lines`]
pub const MOCK_LINE_HEIGHT: f64 = 16.0;

/// Document offset of the first line marker in [`MockPage::with_lines`]
pub const MOCK_HEADER_HEIGHT: f64 = 100.0;

/// Mock document
///
/// Marker boxes are stored in document coordinates and reported shifted by
/// the scroll offset, the way a browser reports viewport-relative boxes.
#[derive(Debug, Clone)]
pub struct MockPage {
    /// Whether a text-entry control holds focus
    pub text_entry_focused: bool,
    /// Line-number marker boxes, document-relative
    pub markers: Vec<Rect>,
    /// Current scroll offset
    pub scroll: f64,
    /// Viewport height
    pub viewport: f64,
    /// Document height
    pub document: f64,
    /// Every offset passed to `scroll_to`, in order
    pub scroll_history: Vec<f64>,
    /// Highlight overlays appended, with their fade duration
    pub highlights: Vec<(Rect, Duration)>,
}

impl MockPage {
    /// A page with no line markers (e.g. a directory listing)
    #[must_use]
    pub fn new() -> Self {
        Self {
            text_entry_focused: false,
            markers: Vec::new(),
            scroll: 0.0,
            viewport: 800.0,
            document: 4000.0,
            scroll_history: Vec::new(),
            highlights: Vec::new(),
        }
    }

    /// A source page with `lines` line markers
    #[must_use]
    pub fn with_lines(lines: usize) -> Self {
        let markers = (0..lines)
            .map(|i| {
                let top = MOCK_HEADER_HEIGHT + i as f64 * MOCK_LINE_HEIGHT;
                Rect::new(top, 0.0, top + MOCK_LINE_HEIGHT, 40.0)
            })
            .collect::<Vec<_>>();
        let document = MOCK_HEADER_HEIGHT + lines as f64 * MOCK_LINE_HEIGHT;
        Self {
            markers,
            document,
            ..Self::new()
        }
    }

    fn viewport_shift(&self, rect: Rect) -> Rect {
        Rect::new(
            rect.top - self.scroll,
            rect.left,
            rect.bottom - self.scroll,
            rect.right,
        )
    }
}

impl Default for MockPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for MockPage {
    fn focus_in_text_entry(&self) -> bool {
        self.text_entry_focused
    }

    fn line_marker_count(&self) -> usize {
        self.markers.len()
    }

    fn line_marker_rect(&self, index: usize) -> Option<Rect> {
        self.markers.get(index).map(|r| self.viewport_shift(*r))
    }

    fn body_rect(&self) -> Rect {
        self.viewport_shift(Rect::new(0.0, 0.0, self.document, 1024.0))
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll
    }

    fn viewport_height(&self) -> f64 {
        self.viewport
    }

    fn document_height(&self) -> f64 {
        self.document
    }

    fn scroll_to(&mut self, y: f64) {
        self.scroll_history.push(y);
        self.scroll = y;
    }

    fn show_highlight(&mut self, rect: Rect, fade: Duration) {
        self.highlights.push((rect, fade));
    }
}

/// Mock search inputs
#[derive(Debug, Clone, Default)]
pub struct MockSurfaces {
    /// Inputs currently visible
    pub visible: HashSet<SearchMode>,
    /// Mode whose radio button is checked
    pub checked: Option<SearchMode>,
    /// Input holding focus, if any
    pub focused: Option<SearchMode>,
    /// Text in each input
    pub values: HashMap<SearchMode, String>,
}

impl MockSurfaces {
    /// Inputs in their page-load state: only the symbol box visible
    #[must_use]
    pub fn new() -> Self {
        let mut visible = HashSet::new();
        visible.insert(SearchMode::Symbol);
        Self {
            visible,
            checked: Some(SearchMode::Symbol),
            ..Default::default()
        }
    }

    /// Set the text of one input
    pub fn set_value(&mut self, mode: SearchMode, value: impl Into<String>) {
        self.values.insert(mode, value.into());
    }

    /// Whether only `mode`'s input is visible
    #[must_use]
    pub fn only_visible(&self, mode: SearchMode) -> bool {
        self.visible.len() == 1 && self.visible.contains(&mode)
    }
}

impl SearchSurfaces for MockSurfaces {
    fn show(&mut self, mode: SearchMode) {
        self.visible.insert(mode);
    }

    fn hide(&mut self, mode: SearchMode) {
        self.visible.remove(&mode);
        if self.focused == Some(mode) {
            self.focused = None;
        }
    }

    fn check_radio(&mut self, mode: SearchMode) {
        self.checked = Some(mode);
    }

    fn focus_and_select(&mut self, mode: SearchMode) {
        self.focused = Some(mode);
    }

    fn blur(&mut self, mode: SearchMode) {
        if self.focused == Some(mode) {
            self.focused = None;
        }
    }

    fn value(&self, mode: SearchMode) -> String {
        self.values.get(&mode).cloned().unwrap_or_default()
    }
}

/// Mock modal overlay
#[derive(Debug, Clone, Default)]
pub struct MockOverlay {
    /// Current visibility
    pub state: OverlayState,
    /// Number of toggles received
    pub toggles: usize,
}

impl Overlay for MockOverlay {
    fn toggle(&mut self) {
        self.state = self.state.toggled();
        self.toggles += 1;
    }

    fn is_open(&self) -> bool {
        self.state == OverlayState::Open
    }
}

/// Mock navigator that records targets
#[derive(Debug, Clone, Default)]
pub struct MockNavigator {
    /// Every target navigated to, in order
    pub visited: Vec<String>,
    /// Whether to simulate a failing host
    pub should_fail: bool,
}

impl MockNavigator {
    /// Create a navigator that fails every navigation
    #[must_use]
    pub fn failing() -> Self {
        Self {
            visited: Vec::new(),
            should_fail: true,
        }
    }

    /// Last target navigated to
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.visited.last().map(String::as_str)
    }
}

impl Navigator for MockNavigator {
    fn navigate(&mut self, target: &str) -> Result<()> {
        if self.should_fail {
            return Err(UiError::NavigationFailed(target.to_string()));
        }
        self.visited.push(target.to_string());
        Ok(())
    }
}

/// Mock autocomplete widget honouring "latest query wins"
#[derive(Debug, Clone, Default)]
pub struct MockWidget {
    next_id: u64,
    latest: Option<QueryId>,
    query: String,
    suggestions: Vec<Suggestion>,
}

impl MockWidget {
    /// Create an idle widget
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the most recent query
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }
}

impl AutocompleteWidget for MockWidget {
    fn begin_query(&mut self, query: &str) -> QueryId {
        self.next_id += 1;
        let id = QueryId::new(self.next_id);
        self.latest = Some(id);
        self.query = query.to_string();
        id
    }

    fn accept(&mut self, id: QueryId, suggestions: Vec<Suggestion>) -> bool {
        if self.latest != Some(id) {
            return false;
        }
        self.suggestions = suggestions;
        true
    }

    fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }
}
