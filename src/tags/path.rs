//! Path rewriting for tag switches
//!
//! Source pages live at `/<tag>/sources/<dir>/<file>`. Switching tag keeps
//! the last two segments and swaps the tag; the fallback is the new tag's
//! root index.

use url::Url;

/// Where a tag switch should go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPaths {
    /// Same directory and file under the new tag
    pub candidate: Url,
    /// The new tag's root index
    pub fallback: Url,
}

/// Compute the candidate and fallback locations for switching the page at
/// `current` to `tag`.
///
/// Missing trailing segments are treated as empty.
///
/// # Errors
///
/// Returns `url::ParseError` if `current` cannot serve as a base URL.
pub fn tag_paths(current: &Url, tag: &str) -> Result<TagPaths, url::ParseError> {
    let segments = current
        .path_segments()
        .map(|s| s.collect::<Vec<_>>())
        .unwrap_or_default();
    let tail = |from_end: usize| {
        segments
            .len()
            .checked_sub(from_end)
            .and_then(|i| segments.get(i))
            .copied()
            .unwrap_or_default()
    };
    let (dir, file) = (tail(2), tail(1));

    let candidate = current.join(&format!("../../../{tag}/sources/{dir}/{file}"))?;
    let fallback = current.join(&format!("../../../{tag}/sources/meta/index.html"))?;
    Ok(TagPaths {
        candidate,
        fallback,
    })
}
