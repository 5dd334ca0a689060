//! Match highlighting for suggestion rows

use super::types::Suggestion;
use regex::RegexBuilder;
use tracing::warn;

pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn restore_markers(text: &str) -> String {
    text.replace("&lt;strong&gt;", "<strong>")
        .replace("&lt;/strong&gt;", "</strong>")
}

/// Render a suggestion's display value with every case-insensitive match of
/// `query` wrapped in `<strong>`, HTML-escaped.
///
/// The query is used as a pattern, not as literal text. Markers are inserted
/// first, the whole string is escaped, then escaped `strong` tags are turned
/// back into markers. A display value that already contains the literal text
/// `<strong>` therefore comes out unescaped. An invalid pattern leaves the
/// value untouched.
#[must_use]
pub fn highlight_match(suggestion: &Suggestion, query: &str) -> String {
    if query.is_empty() {
        return suggestion.display_value.clone();
    }

    let pattern = match RegexBuilder::new(&format!("({query})"))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern,
        Err(e) => {
            warn!(query, error = %e, "query is not a valid pattern, skipping highlight");
            return suggestion.display_value.clone();
        }
    };

    let marked = pattern.replace_all(&suggestion.display_value, "<strong>${1}</strong>");
    let escaped = escape_html(&marked);
    restore_markers(&escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggest::types::{FileRecord, SuggestionPayload};

    fn suggestion(value: &str) -> Suggestion {
        Suggestion {
            display_value: value.to_string(),
            payload: SuggestionPayload::File(FileRecord::default()),
        }
    }

    #[test]
    fn test_empty_query_returns_value_unchanged() {
        let s = suggestion("a<b & c");
        assert_eq!(highlight_match(&s, ""), "a<b & c");
    }

    #[test]
    fn test_case_insensitive_match_is_wrapped() {
        let s = suggestion("PushBack");
        assert_eq!(highlight_match(&s, "back"), "Push<strong>Back</strong>");
    }

    #[test]
    fn test_all_occurrences_are_wrapped() {
        let s = suggestion("abcABC");
        assert_eq!(
            highlight_match(&s, "abc"),
            "<strong>abc</strong><strong>ABC</strong>"
        );
    }

    #[test]
    fn test_surrounding_text_is_escaped_markers_are_not() {
        let s = suggestion(r#"a<b & "Foo""#);
        assert_eq!(
            highlight_match(&s, "foo"),
            "a&lt;b &amp; &quot;<strong>Foo</strong>&quot;"
        );
    }

    #[test]
    fn test_no_match_still_escapes() {
        let s = suggestion("operator<");
        assert_eq!(highlight_match(&s, "zzz"), "operator&lt;");
    }

    #[test]
    fn test_invalid_pattern_fails_open() {
        let s = suggestion("vector<int>");
        assert_eq!(highlight_match(&s, "vector("), "vector<int>");
        assert_eq!(highlight_match(&s, "[unclosed"), "vector<int>");
    }

    #[test]
    fn test_query_is_a_pattern() {
        let s = suggestion("get_size");
        assert_eq!(highlight_match(&s, "g.t"), "<strong>get</strong>_size");
    }

    #[test]
    fn test_literal_marker_text_in_value_is_not_escaped() {
        // Marker normalization cannot tell inserted tags from existing ones.
        let s = suggestion("<strong>x");
        assert_eq!(highlight_match(&s, "zzz"), "<strong>x");
    }
}
