//! Page abstraction layer
//!
//! The core never touches a document directly. It talks to the page
//! through a handful of traits, so a browser binding, a terminal front end
//! or the mocks in [`mock`] can host it without changing any logic.
//!
//! # Core Traits
//!
//! - **`Page`** - focus, line markers, geometry, scrolling, highlight overlay
//! - **`SearchSurfaces`** - the four search inputs and their radio group
//! - **`Overlay`** - toggleable modals (help, about)
//! - **`Navigator`** - location changes
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Core                               │
//! │   (mode, keybinds, locate, tags)        │
//! └────────────────┬────────────────────────┘
//!                  │ Uses traits
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │      Page Trait Abstraction             │
//! │  (Page, SearchSurfaces, Overlay, ...)   │
//! └────────────────┬────────────────────────┘
//!                  │ Implemented by
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ Host binding  │  │ Mocks (tests)     │
//! └───────────────┘  └───────────────────┘
//! ```

pub mod error;
pub mod mock;
pub mod traits;
pub mod types;

pub use error::{Result, UiError};
pub use traits::{Navigator, Overlay, Page, SearchSurfaces};
pub use types::{KeyEvent, OverlayState, Rect};
