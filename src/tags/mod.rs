//! Tag picker and tag switching
//!
//! Choosing another tag rewrites the current page URL to the same
//! directory and file under the new tag, probes it, and navigates there or
//! to the new tag's root index.

pub mod path;
pub mod picker;
pub mod probe;
pub mod switcher;

pub use path::{TagPaths, tag_paths};
pub use picker::{PICKER_GROUP, TagEntry, TagPicker};
pub use probe::{HttpProbe, ResourceProbe};
pub use switcher::{TagProbeResult, TagSwitcher};
