//! Help text generation from the key table

use crate::keybinds::actions::{ActionCategory, KeyAction};
use crate::keybinds::config::KeyTable;
use std::fmt::Write;

/// Generate the key reference shown by the help overlay and `srcnav keys`
#[must_use]
pub fn generate_help_text(table: &KeyTable) -> String {
    let mut output = String::new();

    output.push_str("KEY BINDINGS\n\n");
    output.push_str("  ESC           Close this help screen\n");

    for category in [
        ActionCategory::Overlays,
        ActionCategory::Scrolling,
        ActionCategory::Search,
    ] {
        let actions = KeyAction::ALL
            .into_iter()
            .filter(|a| a.category() == category)
            .filter_map(|a| {
                let keys = table.keys_for(a);
                (!keys.is_empty()).then_some((a, keys))
            })
            .collect::<Vec<_>>();

        if actions.is_empty() {
            continue;
        }

        if category != ActionCategory::Overlays {
            let _ = writeln!(output, "\n{}:", category_name(category));
        }
        for (action, keys) in actions {
            let keys = keys.iter().map(char::to_string).collect::<Vec<_>>().join("/");
            let _ = writeln!(output, "  {:<14}{}", keys, action.description());
        }
    }

    output
}

/// Get category display name
const fn category_name(category: ActionCategory) -> &'static str {
    match category {
        ActionCategory::Overlays => "OVERLAYS",
        ActionCategory::Scrolling => "SCROLLING",
        ActionCategory::Search => "SEARCH",
    }
}
