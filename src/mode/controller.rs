//! Search mode controller
//!
//! Owns the mode state and keeps the page's search inputs in step with it.
//!
//! Transitions are not reentrant. Nothing guards against a transition being
//! started from inside another one (for instance from a surface callback
//! reacting to `show`), and doing so leaves `previous` pointing at an
//! intermediate mode. Surface implementations must not call back into the
//! controller.

use super::state::{ModeChange, ModeState, SearchMode, Transition};
use crate::locate::LineLocator;
use crate::ui::{Page, SearchSurfaces};
use tracing::debug;

/// What a commit in a search input did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Scrolled to and highlighted the given (clamped) line
    JumpedToLine(usize),
    /// The line input did not hold a number, or the page has no lines
    NoLine,
    /// The autocomplete widget owns this mode's commit
    Delegated,
}

/// Tracks the active search mode and drives the inputs.
#[derive(Debug, Clone, Default)]
pub struct ModeController {
    state: ModeState,
}

impl ModeController {
    /// Controller starting in symbol mode
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently active mode
    #[must_use]
    pub const fn active(&self) -> SearchMode {
        self.state.active()
    }

    /// Mode a `pop_mode` would return to
    #[must_use]
    pub const fn previous(&self) -> SearchMode {
        self.state.previous()
    }

    /// Temporarily switch to `mode`, remembering the current one.
    ///
    /// Returns the mode that was active before the call.
    pub fn push_mode(
        &mut self,
        surfaces: &mut dyn SearchSurfaces,
        mode: SearchMode,
        focus: bool,
    ) -> SearchMode {
        let change = self.state.apply(Transition::Push(mode));
        debug!(from = %change.from, to = %change.to, "push search mode");
        surfaces.check_radio(change.to);
        Self::show(surfaces, change, focus);
        change.from
    }

    /// Return to the mode active before the last push
    pub fn pop_mode(&mut self, surfaces: &mut dyn SearchSurfaces, focus: bool) -> ModeChange {
        let change = self.state.apply(Transition::Pop);
        debug!(from = %change.from, to = %change.to, "pop search mode");
        surfaces.check_radio(change.to);
        Self::show(surfaces, change, focus);
        change
    }

    /// Forget the remembered mode so a later pop stays on the active one
    pub fn flush(&mut self) {
        self.state.apply(Transition::Flush);
    }

    /// The user picked `mode` from the radio group: switch and keep it.
    pub fn select_mode(&mut self, surfaces: &mut dyn SearchSurfaces, mode: SearchMode) {
        let change = self.state.apply(Transition::Switch(mode));
        debug!(from = %change.from, to = %change.to, "select search mode");
        Self::show(surfaces, change, true);
        self.flush();
    }

    fn show(surfaces: &mut dyn SearchSurfaces, change: ModeChange, focus: bool) {
        surfaces.hide(change.from);
        surfaces.show(change.to);
        if focus {
            surfaces.focus_and_select(change.to);
        }
    }

    /// The commit key was pressed inside `mode`'s input.
    ///
    /// Runs the mode's commit action, then blurs the input and pops back to
    /// the previous mode without focusing it.
    pub fn commit(
        &mut self,
        mode: SearchMode,
        surfaces: &mut dyn SearchSurfaces,
        page: &mut dyn Page,
        locator: &LineLocator,
    ) -> CommitOutcome {
        let outcome = match mode {
            SearchMode::Line => parse_leading_int(&surfaces.value(mode))
                .and_then(|line| locator.jump_to_line(page, clamp_line(line)))
                .map_or(CommitOutcome::NoLine, |(line, _)| {
                    CommitOutcome::JumpedToLine(line)
                }),
            SearchMode::Symbol | SearchMode::File | SearchMode::Text => CommitOutcome::Delegated,
        };
        debug!(%mode, ?outcome, "commit");

        surfaces.blur(mode);
        self.pop_mode(surfaces, false);
        outcome
    }
}

fn clamp_line(line: i64) -> usize {
    usize::try_from(line.max(1)).unwrap_or(usize::MAX)
}

/// Parse the integer at the start of `text`, ignoring leading whitespace
/// and anything after the digits. Values beyond `i64` saturate.
fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() {
        return None;
    }
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * magnitude)
}
