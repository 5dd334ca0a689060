//! Suggestion data model

use serde::{Deserialize, Serialize};

/// Display value used when an entry has no name, directory or file
pub const ROOT_LABEL: &str = "(project root)";

/// A navigable reference with the text shown for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Location {
    #[serde(default)]
    pub href: String,
    /// Human-readable position, e.g. `src/main.cc:12`
    #[serde(default, rename = "location")]
    pub human_position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

/// One linkage/access/definition grouping of a symbol.
///
/// Overloads and redeclarations of the same name each get their own record.
/// `owner_hash` and `index_within_owner` are filled in by the adapter from
/// the enclosing entry and the record's position in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct KindRecord {
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub linkage: Option<i64>,
    #[serde(default)]
    pub access: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, rename = "defs", deserialize_with = "null_as_empty")]
    pub definitions: Vec<Location>,
    #[serde(default, rename = "decls", deserialize_with = "null_as_empty")]
    pub declarations: Vec<Location>,
    #[serde(skip)]
    pub owner_hash: String,
    #[serde(skip)]
    pub index_within_owner: usize,
}

impl KindRecord {
    /// In-page anchor target for this record on its symbol page
    #[must_use]
    pub fn anchor(&self) -> String {
        format!("../symbol/{}#SL{}", self.owner_hash, self.index_within_owner)
    }
}

/// A file or directory match from the tree search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FileRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default)]
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

/// A symbol match from the symbol search, before fan-out
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub(crate) struct SymbolEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub dir: Option<String>,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub hash: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub kinds: Vec<KindRecord>,
}

/// What a suggestion points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionPayload {
    Kind(KindRecord),
    File(FileRecord),
}

/// One row offered by the autocomplete widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Text the query is matched and highlighted against; never empty
    pub display_value: String,
    pub payload: SuggestionPayload,
}

impl Suggestion {
    /// Where selecting this suggestion navigates to
    #[must_use]
    pub fn navigation_target(&self) -> String {
        match &self.payload {
            SuggestionPayload::Kind(kind) => kind.anchor(),
            SuggestionPayload::File(file) => file.href.clone(),
        }
    }

    /// The kind record, for symbol suggestions
    #[must_use]
    pub const fn kind(&self) -> Option<&KindRecord> {
        match &self.payload {
            SuggestionPayload::Kind(kind) => Some(kind),
            SuggestionPayload::File(_) => None,
        }
    }
}

/// Pick the display value: name, else directory, else file, else the root label.
///
/// Empty strings count as absent.
#[must_use]
pub fn display_value(name: Option<&str>, dir: Option<&str>, file: Option<&str>) -> String {
    [name, dir, file]
        .into_iter()
        .flatten()
        .find(|v| !v.is_empty())
        .unwrap_or(ROOT_LABEL)
        .to_string()
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_value_precedence() {
        assert_eq!(display_value(Some("main"), Some("src"), Some("a.c")), "main");
        assert_eq!(display_value(None, Some("src"), Some("a.c")), "src");
        assert_eq!(display_value(Some(""), None, Some("a.c")), "a.c");
        assert_eq!(display_value(None, None, None), ROOT_LABEL);
    }

    #[test]
    fn test_kind_anchor() {
        let kind = KindRecord {
            owner_hash: "abc123".to_string(),
            index_within_owner: 2,
            ..Default::default()
        };
        assert_eq!(kind.anchor(), "../symbol/abc123#SL2");
    }

    #[test]
    fn test_kind_record_tolerates_null_lists() {
        let kind: KindRecord =
            serde_json::from_str(r#"{"kind":"Var","defs":null,"decls":null}"#).unwrap();
        assert!(kind.definitions.is_empty());
        assert!(kind.declarations.is_empty());
        assert_eq!(kind.linkage, None);
    }

    #[test]
    fn test_location_field_names() {
        let loc: Location =
            serde_json::from_str(r#"{"href":"/a#L3","location":"a.cc:3","snippet":"int x;"}"#)
                .unwrap();
        assert_eq!(loc.human_position, "a.cc:3");
        assert_eq!(loc.snippet.as_deref(), Some("int x;"));
    }
}
