//! Tag picker model
//!
//! One radio entry per known tag, plus a default label naming the tag the
//! page belongs to. With no known tags the picker stays hidden.

use serde::Serialize;

/// Radio group name shared by every entry
pub const PICKER_GROUP: &str = "tp";

/// One selectable tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagEntry {
    /// Element id, `etr-<index>`
    pub id: String,
    /// Radio group name
    pub name: &'static str,
    /// The tag itself
    pub value: String,
    /// Text shown next to the radio button
    pub label: String,
}

/// Entries and default label for the tag menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagPicker {
    pub current: String,
    pub entries: Vec<TagEntry>,
}

impl TagPicker {
    /// Build the picker for `tags`.
    ///
    /// Returns `None` when there is nothing to pick from.
    #[must_use]
    pub fn build(project: Option<&str>, current: &str, tags: &[String]) -> Option<Self> {
        if tags.is_empty() {
            return None;
        }

        let prefix = project.filter(|p| !p.is_empty());
        let entries = tags
            .iter()
            .enumerate()
            .map(|(i, tag)| TagEntry {
                id: format!("etr-{i}"),
                name: PICKER_GROUP,
                value: tag.clone(),
                label: prefix.map_or_else(|| tag.clone(), |p| format!("{p} {tag}")),
            })
            .collect();

        Some(Self {
            current: current.to_string(),
            entries,
        })
    }

    /// Label of the closed menu
    #[must_use]
    pub fn default_label(&self) -> &str {
        &self.current
    }

    /// Entry holding `tag`, if any
    #[must_use]
    pub fn entry(&self, tag: &str) -> Option<&TagEntry> {
        self.entries.iter().find(|e| e.value == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tags() -> Vec<String> {
        vec!["v1".into(), "v2".into()]
    }

    #[test]
    fn test_entries_with_project() {
        let picker = TagPicker::build(Some("kernel"), "v1", &tags()).unwrap();
        assert_eq!(
            picker.entries[1],
            TagEntry {
                id: "etr-1".into(),
                name: "tp",
                value: "v2".into(),
                label: "kernel v2".into(),
            }
        );
        assert_eq!(picker.default_label(), "v1");
    }

    #[test]
    fn test_entries_without_project() {
        let picker = TagPicker::build(None, "v2", &tags()).unwrap();
        assert_eq!(picker.entries[0].label, "v1");
        assert_eq!(picker.entry("v2").map(|e| e.id.as_str()), Some("etr-1"));
    }

    #[test]
    fn test_hidden_without_tags() {
        assert!(TagPicker::build(Some("kernel"), "v1", &[]).is_none());
    }
}
