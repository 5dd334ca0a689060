//! Search modes
//!
//! Four inputs share one slot on the page: symbol, file, line and text
//! search. Exactly one is active. Keyboard shortcuts *push* a mode
//! temporarily and *pop* back once the single query it was opened for has
//! been consumed; picking a mode from the radio group is persistent and
//! re-baselines what a pop returns to.

pub mod controller;
pub mod state;

pub use controller::{CommitOutcome, ModeController};
pub use state::{ModeChange, ModeState, SearchMode, Transition, UnknownMode};
