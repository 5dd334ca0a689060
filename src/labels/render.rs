//! Label composition and suggestion row rendering

use super::lookup::{DefaultingLookup, HUMAN_ACCESS, HUMAN_KIND, HUMAN_LINKAGE};
use crate::suggest::highlight::escape_html;
use crate::suggest::{KindRecord, Location, Suggestion, highlight_match};
use std::borrow::Cow;
use std::fmt::Write;

fn code_label(lookup: &DefaultingLookup<i64>, code: Option<i64>) -> Cow<'static, str> {
    code.map_or(Cow::Borrowed(""), |c| lookup.get(&c))
}

/// Compose the label for a kind record: the kind phrase, then
/// `(linkage access)` if either of those resolved to something.
///
/// ```
/// use srcnav::labels::compose_label;
///
/// assert_eq!(compose_label("Var", Some(3), Some(9)), "variable (global)");
/// assert_eq!(compose_label("Foo", None, None), "foo");
/// ```
#[must_use]
pub fn compose_label(kind: &str, linkage: Option<i64>, access: Option<i64>) -> String {
    let mut label = HUMAN_KIND.get(kind).into_owned();

    let qualifiers = [
        code_label(&HUMAN_LINKAGE, linkage),
        code_label(&HUMAN_ACCESS, access),
    ]
    .into_iter()
    .filter(|q| !q.is_empty())
    .collect::<Vec<_>>();

    if !qualifiers.is_empty() {
        let _ = write!(label, " ({})", qualifiers.join(" "));
    }
    label
}

/// Label for a kind record
#[must_use]
pub fn kind_label(kind: &KindRecord) -> String {
    compose_label(&kind.kind, kind.linkage, kind.access)
}

fn push_locations(out: &mut String, heading: &str, locations: &[Location]) {
    for loc in locations {
        let _ = write!(
            out,
            " <li>{heading}: <a href=\"{}\">{}</a></li>",
            escape_html(&loc.href),
            escape_html(&loc.human_position)
        );
    }
}

/// Render one row of the symbol autocomplete list as HTML.
///
/// The highlighted name and kind label come first, followed by a list of
/// definitions and then prototypes. File suggestions render as just the
/// highlighted match.
#[must_use]
pub fn render_suggestion(suggestion: &Suggestion, query: &str) -> String {
    let matched = highlight_match(suggestion, query);
    let Some(kind) = suggestion.kind() else {
        return matched;
    };

    let mut out = format!(
        "<span>{matched} - <i font='smaller'>{}</i></span>",
        kind_label(kind)
    );
    out.push_str("<ul>");
    push_locations(&mut out, "Definition", &kind.definitions);
    push_locations(&mut out, "Prototype", &kind.declarations);
    out.push_str("</ul>");
    out
}
