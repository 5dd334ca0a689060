//! Human-readable labels for symbol results
//!
//! Kind, linkage and access codes from the index are mapped to phrases
//! through [`DefaultingLookup`] tables. Unknown codes never fail: kinds
//! echo the raw code lower-cased, linkage and access resolve to an empty
//! string which callers treat as "omit".

pub mod lookup;
pub mod render;

pub use lookup::{DefaultingLookup, Fallback, HUMAN_ACCESS, HUMAN_KIND, HUMAN_LINKAGE, Resolved};
pub use render::{compose_label, kind_label, render_suggestion};
