//! Line location
//!
//! The left column of a source page holds one marker element per line,
//! each at the same height as its line. Locating line `n` means finding the
//! `n`th marker and measuring it against the document body.

use crate::ui::{Page, Rect};
use std::time::Duration;
use tracing::debug;

/// Default time the highlight overlay takes to fade out
pub const DEFAULT_FADE: Duration = Duration::from_millis(2000);

/// Default gap left above a line when scrolling to it
pub const DEFAULT_SCROLL_OFFSET: f64 = 70.0;

/// Maps line numbers to page positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineLocator {
    scroll_offset: f64,
    fade: Duration,
}

impl LineLocator {
    /// Create a locator that scrolls lines to `scroll_offset` pixels below
    /// the top of the viewport and fades highlights over `fade`.
    #[must_use]
    pub const fn new(scroll_offset: f64, fade: Duration) -> Self {
        Self {
            scroll_offset,
            fade,
        }
    }

    /// Clamp a 1-based line number into the markers the page has.
    ///
    /// Returns `None` only when the page has no markers at all.
    #[must_use]
    pub fn clamp(page: &dyn Page, line: usize) -> Option<usize> {
        let count = page.line_marker_count();
        (count > 0).then(|| line.clamp(1, count))
    }

    /// Document-relative box of 1-based `line`.
    ///
    /// Lines past the end resolve to the last line; the result does not
    /// depend on the current scroll position.
    #[must_use]
    pub fn locate(page: &dyn Page, line: usize) -> Option<Rect> {
        let line = Self::clamp(page, line)?;
        let marker = page.line_marker_rect(line - 1)?;
        Some(marker.relative_to(&page.body_rect()))
    }

    /// Put a fading highlight overlay over `line`
    pub fn highlight(&self, page: &mut dyn Page, line: usize) -> Option<Rect> {
        let rect = Self::locate(page, line)?;
        page.show_highlight(rect, self.fade);
        Some(rect)
    }

    /// Scroll so `line` sits just below the top of the viewport, then
    /// highlight it. Returns the clamped line and its box.
    pub fn jump_to_line(&self, page: &mut dyn Page, line: usize) -> Option<(usize, Rect)> {
        let clamped = Self::clamp(page, line)?;
        let rect = Self::locate(page, clamped)?;
        debug!(requested = line, line = clamped, top = rect.top, "jump to line");

        page.scroll_to(rect.top - self.scroll_offset);
        self.highlight(page, clamped)?;
        Some((clamped, rect))
    }
}

impl Default for LineLocator {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_OFFSET, DEFAULT_FADE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mock::{MOCK_HEADER_HEIGHT, MOCK_LINE_HEIGHT, MockPage};

    #[test]
    fn test_locate_is_document_relative() {
        let mut page = MockPage::with_lines(50);
        let before = LineLocator::locate(&page, 20).unwrap();
        page.scroll_to(300.0);
        let after = LineLocator::locate(&page, 20).unwrap();

        assert_eq!(before, after);
        assert_eq!(before.top, MOCK_HEADER_HEIGHT + 19.0 * MOCK_LINE_HEIGHT);
    }

    #[test]
    fn test_locate_past_end_clamps_to_last() {
        let page = MockPage::with_lines(12);
        assert_eq!(LineLocator::locate(&page, 500), LineLocator::locate(&page, 12));
    }

    #[test]
    fn test_locate_zero_clamps_to_first() {
        let page = MockPage::with_lines(12);
        assert_eq!(LineLocator::locate(&page, 0), LineLocator::locate(&page, 1));
    }

    #[test]
    fn test_no_markers() {
        let mut page = MockPage::new();
        assert_eq!(LineLocator::locate(&page, 3), None);
        assert_eq!(LineLocator::default().jump_to_line(&mut page, 3), None);
        assert!(page.scroll_history.is_empty());
    }

    #[test]
    fn test_jump_scrolls_with_offset_and_highlights() {
        let mut page = MockPage::with_lines(100);
        let locator = LineLocator::default();

        let (line, rect) = locator.jump_to_line(&mut page, 40).unwrap();

        assert_eq!(line, 40);
        assert_eq!(page.scroll_history, vec![rect.top - DEFAULT_SCROLL_OFFSET]);
        assert_eq!(page.highlights, vec![(rect, DEFAULT_FADE)]);
    }

    #[test]
    fn test_highlight_only() {
        let mut page = MockPage::with_lines(3);
        let rect = LineLocator::default().highlight(&mut page, 2).unwrap();
        assert_eq!(page.highlights.len(), 1);
        assert_eq!(page.highlights[0].0, rect);
        assert!(page.scroll_history.is_empty());
    }
}
