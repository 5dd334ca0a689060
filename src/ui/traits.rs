//! Core traits for the page abstraction layer

use super::error::Result;
use super::types::Rect;
use crate::mode::SearchMode;
use std::time::Duration;

/// The document the core runs in.
///
/// Implementations wrap whatever actually renders the page. All geometry
/// is in CSS pixels; element boxes are viewport-relative, exactly as the
/// page would report them.
pub trait Page {
    /// Whether the element holding input focus is a text-entry control
    /// (it exposes an input `type` attribute).
    fn focus_in_text_entry(&self) -> bool;

    /// Number of line-number markers in the left column (0 when the page
    /// shows no source file).
    fn line_marker_count(&self) -> usize;

    /// Viewport-relative box of the marker at 0-based `index`
    fn line_marker_rect(&self, index: usize) -> Option<Rect>;

    /// Viewport-relative box of the document body
    fn body_rect(&self) -> Rect;

    /// Current vertical scroll offset
    fn scroll_offset(&self) -> f64;

    /// Height of the viewport
    fn viewport_height(&self) -> f64;

    /// Full scroll height of the document
    fn document_height(&self) -> f64;

    /// Scroll the window to vertical offset `y`
    fn scroll_to(&mut self, y: f64);

    /// Append a highlight overlay at a document-relative box and remove it
    /// once it has faded out over `fade`.
    fn show_highlight(&mut self, rect: Rect, fade: Duration);

    /// Whether the page exposes line-number markers at all
    fn has_line_numbers(&self) -> bool {
        self.line_marker_count() > 0
    }
}

/// The four search inputs and the radio group that selects between them.
pub trait SearchSurfaces {
    /// Make the input for `mode` visible
    fn show(&mut self, mode: SearchMode);

    /// Hide the input for `mode`
    fn hide(&mut self, mode: SearchMode);

    /// Check the radio button for `mode`
    fn check_radio(&mut self, mode: SearchMode);

    /// Move focus into the input for `mode` and select all of its text
    fn focus_and_select(&mut self, mode: SearchMode);

    /// Remove focus from the input for `mode`
    fn blur(&mut self, mode: SearchMode);

    /// Current text of the input for `mode`
    fn value(&self, mode: SearchMode) -> String;
}

/// A modal overlay that can be toggled open and closed (help, about).
pub trait Overlay {
    /// Open the overlay if closed, close it if open
    fn toggle(&mut self);

    /// Whether the overlay is currently shown
    fn is_open(&self) -> bool;
}

/// Changes the page location.
pub trait Navigator {
    /// Navigate to `target`, an absolute or page-relative URL
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot perform the navigation.
    fn navigate(&mut self, target: &str) -> Result<()>;
}
