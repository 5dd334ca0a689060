//! Global keypress dispatch.
//!
//! One dispatcher listens to every keypress on the document. It forwards the
//! press to its current [`KeyState`], which decides what the key means. Only
//! the browsing state exists today; states are swapped through
//! [`KeyDispatcher::set_state`], which runs the exit hook of the old state
//! before the enter hook of the new one.

use super::actions::KeyAction;
use super::config::KeyTable;
use crate::mode::ModeController;
use crate::ui::{KeyEvent, Overlay, Page, SearchSurfaces};
use tracing::debug;

/// Fraction of the viewport height scrolled by `j`/`k`
pub const DEFAULT_SCROLL_STEP: f64 = 0.10;

/// Everything a key state may act on, borrowed for one dispatch.
pub struct KeyContext<'a> {
    pub page: &'a mut dyn Page,
    pub surfaces: &'a mut dyn SearchSurfaces,
    pub modes: &'a mut ModeController,
    pub help: &'a mut dyn Overlay,
    pub about: &'a mut dyn Overlay,
    /// Fraction of the viewport scrolled per step
    pub scroll_step: f64,
}

/// What happened to a keypress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Focus was in a text-entry control; the press was not looked at
    Irrelevant,
    /// No action is bound to the key
    Unbound,
    /// The action ran and the event was consumed
    Handled(KeyAction),
}

/// A modal state of the dispatcher.
pub trait KeyState {
    /// Name used in logs
    fn name(&self) -> &'static str;

    /// Called when the dispatcher switches to this state
    fn on_enter(&mut self, _ctx: &mut KeyContext<'_>) {}

    /// Called when the dispatcher leaves this state
    fn on_exit(&mut self, _ctx: &mut KeyContext<'_>) {}

    /// Handle one keypress
    fn on_press(&mut self, ctx: &mut KeyContext<'_>, event: &mut KeyEvent) -> DispatchOutcome;
}

/// Whether a keypress should be interpreted as a command at all.
///
/// Presses are left alone while the user is typing into a text-entry control.
#[must_use]
pub fn is_relevant(page: &dyn Page) -> bool {
    !page.focus_in_text_entry()
}

/// The default state: single-key commands while reading a page.
#[derive(Debug, Clone, Default)]
pub struct BrowsingState {
    table: KeyTable,
}

impl BrowsingState {
    #[must_use]
    pub const fn new(table: KeyTable) -> Self {
        Self { table }
    }

    #[must_use]
    pub const fn table(&self) -> &KeyTable {
        &self.table
    }

    fn execute(action: KeyAction, ctx: &mut KeyContext<'_>) {
        match action {
            KeyAction::ToggleHelp => ctx.help.toggle(),
            KeyAction::ToggleAbout => ctx.about.toggle(),
            KeyAction::PushLineMode => {
                if ctx.page.has_line_numbers() {
                    ctx.modes.push_mode(ctx.surfaces, crate::SearchMode::Line, true);
                }
            }
            KeyAction::PushFileMode | KeyAction::PushSymbolMode | KeyAction::PushTextMode => {
                if let Some(mode) = action.search_mode() {
                    ctx.modes.push_mode(ctx.surfaces, mode, true);
                }
            }
            KeyAction::ScrollTop => ctx.page.scroll_to(0.0),
            KeyAction::ScrollBottom => {
                let bottom = ctx.page.document_height();
                ctx.page.scroll_to(bottom);
            }
            KeyAction::ScrollDown | KeyAction::ScrollUp => {
                let step = ctx.page.viewport_height() * ctx.scroll_step;
                let delta = if action == KeyAction::ScrollDown { step } else { -step };
                let target = ctx.page.scroll_offset() + delta;
                ctx.page.scroll_to(target);
            }
        }
    }
}

impl KeyState for BrowsingState {
    fn name(&self) -> &'static str {
        "browsing"
    }

    fn on_press(&mut self, ctx: &mut KeyContext<'_>, event: &mut KeyEvent) -> DispatchOutcome {
        if !is_relevant(ctx.page) {
            return DispatchOutcome::Irrelevant;
        }
        let Some(action) = self.table.get(event.code) else {
            return DispatchOutcome::Unbound;
        };

        debug!(key = %event, ?action, "key command");
        Self::execute(action, ctx);
        event.prevent_default();
        DispatchOutcome::Handled(action)
    }
}

/// Routes document keypresses to the current key state.
#[derive(Default)]
pub struct KeyDispatcher {
    state: Option<Box<dyn KeyState>>,
}

impl KeyDispatcher {
    /// Dispatcher with no state; every press is unbound until one is set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the current state
    #[must_use]
    pub fn state_name(&self) -> Option<&'static str> {
        self.state.as_ref().map(|s| s.name())
    }

    /// Replace the current state, running its exit hook and then the new
    /// state's enter hook. `None` detaches the dispatcher.
    pub fn set_state(&mut self, ctx: &mut KeyContext<'_>, state: Option<Box<dyn KeyState>>) {
        if let Some(old) = self.state.as_mut() {
            old.on_exit(ctx);
        }
        self.state = state;
        if let Some(new) = self.state.as_mut() {
            debug!(state = new.name(), "enter key state");
            new.on_enter(ctx);
        }
    }

    /// Handle one document keypress
    pub fn handle_press(&mut self, ctx: &mut KeyContext<'_>, event: &mut KeyEvent) -> DispatchOutcome {
        match self.state.as_mut() {
            Some(state) => state.on_press(ctx, event),
            None => DispatchOutcome::Unbound,
        }
    }
}

impl std::fmt::Debug for KeyDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyDispatcher")
            .field("state", &self.state_name())
            .finish()
    }
}
