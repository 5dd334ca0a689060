//! Autocomplete wiring
//!
//! The widget itself (debounce, dropdown, keyboard selection) is external.
//! This module supplies what it needs: fixed [`WidgetOptions`], the
//! [`AutocompleteAdapter`] callbacks and a [`QueryClient`] for talking to
//! the backend directly.

pub mod adapter;
pub mod client;
pub mod error;
pub mod options;
pub mod widget;

pub use adapter::{AutocompleteAdapter, adapt};
pub use client::QueryClient;
pub use error::ClientError;
pub use options::{SearchKind, WidgetOptions, api_url};
pub use widget::{AutocompleteWidget, QueryId};
