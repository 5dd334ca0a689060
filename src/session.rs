//! Page-lifetime browsing session
//!
//! One `BrowseSession` is created when a page loads and shut down when it
//! unloads. It owns every piece of mutable interaction state (the active
//! search mode, the key dispatcher and its state, the tag picker) together
//! with the page handles, and every page event is routed through it.
//!
//! # Event flow
//!
//! ```text
//! document keypress ──→ handle_keypress ──→ KeyDispatcher ──→ BrowsingState
//!                                                               ├─ overlays
//!                                                               ├─ scrolling
//!                                                               └─ push_mode
//! keypress in a search input ──→ handle_search_key ──→ commit ──→ pop_mode
//! mode radio clicked ──→ select_mode (switch + flush)
//! suggestion picked ──→ select_suggestion ──→ Navigator
//! tag picked ──→ switch_tag ──→ probe ──→ Navigator
//! ```

use crate::SrcnavError;
use crate::config::SrcnavConfig;
use crate::keybinds::{BrowsingState, DispatchOutcome, KeyContext, KeyDispatcher, KeybindError};
use crate::locate::LineLocator;
use crate::mode::{CommitOutcome, ModeController, SearchMode};
use crate::suggest::Suggestion;
use crate::tags::{ResourceProbe, TagPicker, TagProbeResult, TagSwitcher};
use crate::ui::{KeyEvent, Navigator, Overlay, Page, SearchSurfaces};
use tracing::{debug, info};
use url::Url;

/// Page handles a session drives
pub struct PageParts<P, S, O, N> {
    pub page: P,
    pub surfaces: S,
    pub help: O,
    pub about: O,
    pub navigator: N,
}

/// Interaction state for one loaded page
pub struct BrowseSession<P, S, O, N> {
    page: P,
    surfaces: S,
    help: O,
    about: O,
    navigator: N,
    modes: ModeController,
    keys: KeyDispatcher,
    locator: LineLocator,
    scroll_step: f64,
    picker: Option<TagPicker>,
}

impl<P, S, O, N> BrowseSession<P, S, O, N>
where
    P: Page,
    S: SearchSurfaces,
    O: Overlay,
    N: Navigator,
{
    /// Start a session on a freshly loaded page.
    ///
    /// The dispatcher enters the browsing state immediately.
    ///
    /// # Errors
    ///
    /// Returns `KeybindError` if the configured key overrides are invalid.
    pub fn new(parts: PageParts<P, S, O, N>, config: &SrcnavConfig) -> Result<Self, KeybindError> {
        let table = config.keys.build_table()?;
        let picker = TagPicker::build(config.project.as_deref(), &config.tag, &config.tags);

        let mut session = Self {
            page: parts.page,
            surfaces: parts.surfaces,
            help: parts.help,
            about: parts.about,
            navigator: parts.navigator,
            modes: ModeController::new(),
            keys: KeyDispatcher::new(),
            locator: config.navigation.locator(),
            scroll_step: config.navigation.scroll_step_fraction,
            picker,
        };
        session.with_keys(|keys, ctx| keys.set_state(ctx, Some(Box::new(BrowsingState::new(table)))));
        debug!(tag = %config.tag, "browse session started");
        Ok(session)
    }

    fn with_keys<R>(&mut self, f: impl FnOnce(&mut KeyDispatcher, &mut KeyContext<'_>) -> R) -> R {
        let mut ctx = KeyContext {
            page: &mut self.page,
            surfaces: &mut self.surfaces,
            modes: &mut self.modes,
            help: &mut self.help,
            about: &mut self.about,
            scroll_step: self.scroll_step,
        };
        f(&mut self.keys, &mut ctx)
    }

    /// A key was pressed anywhere on the document
    pub fn handle_keypress(&mut self, event: &mut KeyEvent) -> DispatchOutcome {
        self.with_keys(|keys, ctx| keys.handle_press(ctx, event))
    }

    /// A key was pressed inside `mode`'s search input.
    ///
    /// Enter commits the input; the event is consumed and `None` is
    /// returned for every other key.
    pub fn handle_search_key(&mut self, mode: SearchMode, event: &mut KeyEvent) -> Option<CommitOutcome> {
        if !event.is_enter() {
            return None;
        }
        let outcome = self
            .modes
            .commit(mode, &mut self.surfaces, &mut self.page, &self.locator);
        event.prevent_default();
        Some(outcome)
    }

    /// The user picked `mode` from the mode radio group
    pub fn select_mode(&mut self, mode: SearchMode) {
        self.modes.select_mode(&mut self.surfaces, mode);
    }

    /// Push `mode` on top of the active one
    pub fn push_mode(&mut self, mode: SearchMode, focus: bool) -> SearchMode {
        self.modes.push_mode(&mut self.surfaces, mode, focus)
    }

    /// Return to the mode active before the last push
    pub fn pop_mode(&mut self, focus: bool) -> SearchMode {
        self.modes.pop_mode(&mut self.surfaces, focus).to
    }

    /// The user picked a suggestion from either autocomplete list
    ///
    /// # Errors
    ///
    /// Returns `SrcnavError::UiError` if navigation fails.
    pub fn select_suggestion(&mut self, suggestion: &Suggestion) -> Result<(), SrcnavError> {
        let target = suggestion.navigation_target();
        info!(%target, "suggestion selected");
        self.navigator.navigate(&target)?;
        Ok(())
    }

    /// The user picked `tag` in the tag menu while on `current`
    ///
    /// # Errors
    ///
    /// Returns `SrcnavError` if the URL cannot be rewritten or navigation fails.
    pub async fn switch_tag<R: ResourceProbe>(
        &mut self,
        switcher: &TagSwitcher<R>,
        current: &Url,
        tag: &str,
    ) -> Result<TagProbeResult, SrcnavError> {
        switcher.switch(current, tag, &mut self.navigator).await
    }

    /// Tear the session down on page unload
    pub fn shutdown(&mut self) {
        self.with_keys(|keys, ctx| keys.set_state(ctx, None));
        debug!("browse session shut down");
    }

    #[must_use]
    pub const fn active_mode(&self) -> SearchMode {
        self.modes.active()
    }

    #[must_use]
    pub const fn modes(&self) -> &ModeController {
        &self.modes
    }

    #[must_use]
    pub fn key_state(&self) -> Option<&'static str> {
        self.keys.state_name()
    }

    #[must_use]
    pub const fn tag_picker(&self) -> Option<&TagPicker> {
        self.picker.as_ref()
    }

    #[must_use]
    pub const fn page(&self) -> &P {
        &self.page
    }

    pub const fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    #[must_use]
    pub const fn surfaces(&self) -> &S {
        &self.surfaces
    }

    pub const fn surfaces_mut(&mut self) -> &mut S {
        &mut self.surfaces
    }

    #[must_use]
    pub const fn help(&self) -> &O {
        &self.help
    }

    #[must_use]
    pub const fn about(&self) -> &O {
        &self.about
    }

    #[must_use]
    pub const fn navigator(&self) -> &N {
        &self.navigator
    }
}
