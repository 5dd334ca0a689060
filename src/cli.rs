//! Command-line interface definitions and terminal output
//!
//! The `srcnav` binary talks to the same backend the page does. It can run
//! symbol and file queries, resolve tag switches, and print the key table.
//!
//! # Commands
//!
//! - **symbol**: Query the symbol index and print suggestions
//! - **file**: Query the file tree and print suggestions
//! - **switch-tag**: Resolve where a page moves to under another tag
//! - **tags**: Show the tag picker for the configured project
//! - **keys**: Print the key command help
//! - **config**: Show, locate or change the configuration
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use srcnav::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["srcnav", "-v", "symbol", "push_back"]);
//! assert!(matches!(cli.command, Commands::Symbol { .. }));
//! assert_eq!(cli.log_filter(), "debug");
//! ```

use crate::labels::kind_label;
use crate::suggest::{Suggestion, highlight_match};
use crate::ui::{self, Navigator};
use clap::{Parser, Subcommand};
use colored::Colorize;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "srcnav")]
#[command(about = "Search and navigate an indexed source browser", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log debug output to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Backend base URL (overrides config)
    #[arg(long = "server", global = true, value_name = "URL")]
    pub server: Option<String>,

    /// Tag to query (overrides config)
    #[arg(long = "tag", global = true, value_name = "TAG")]
    pub tag: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Search symbols
    #[command(visible_alias = "s")]
    Symbol {
        /// Text to search for
        query: String,
    },

    /// Search files and directories
    #[command(visible_alias = "f")]
    File {
        /// Text to search for
        query: String,
    },

    /// Resolve the page a tag switch lands on
    #[command(name = "switch-tag")]
    SwitchTag {
        /// URL of the page currently shown
        #[arg(value_name = "PAGE_URL")]
        page_url: String,

        /// Tag to switch to
        tag: String,
    },

    /// Show the tag picker entries
    Tags,

    /// Print the key command help
    Keys,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the config file location
    Path,

    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., tag=v2)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Default log filter when `RUST_LOG` is not set
    #[must_use]
    pub const fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

/// Navigator for the terminal: prints the target instead of opening it
#[derive(Debug, Default)]
pub struct PrintNavigator {
    pub quiet: bool,
}

impl Navigator for PrintNavigator {
    fn navigate(&mut self, target: &str) -> ui::Result<()> {
        if self.quiet {
            println!("{target}");
        } else {
            println!("{} {}", "→".green().bold(), target.cyan());
        }
        Ok(())
    }
}

fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}

/// Highlighted match for a terminal: the matched text in bold yellow
/// instead of HTML markers.
#[must_use]
pub fn terminal_match(suggestion: &Suggestion, query: &str) -> String {
    let marked = highlight_match(suggestion, query);
    let mut out = String::new();
    for (i, piece) in marked.split("<strong>").enumerate() {
        if i == 0 {
            out.push_str(&unescape_html(piece));
            continue;
        }
        let (strong, rest) = piece.split_once("</strong>").unwrap_or((piece, ""));
        out.push_str(&unescape_html(strong).yellow().bold().to_string());
        out.push_str(&unescape_html(rest));
    }
    out
}

/// Lines printed for one suggestion
#[must_use]
pub fn format_suggestion(suggestion: &Suggestion, query: &str) -> Vec<String> {
    let matched = terminal_match(suggestion, query);
    let Some(kind) = suggestion.kind() else {
        return vec![format!("{matched}  {}", suggestion.navigation_target().dimmed())];
    };

    let mut lines = vec![format!("{matched} - {}", kind_label(kind).italic())];
    lines.extend(
        kind.definitions
            .iter()
            .map(|d| format!("    Definition: {}", d.human_position.cyan())),
    );
    lines.extend(
        kind.declarations
            .iter()
            .map(|d| format!("    Prototype: {}", d.human_position.cyan())),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggest::{adapt_file_result, adapt_symbol_result};
    use crate::testing::{file_payload, symbol_payload};

    #[test]
    fn test_parse_switch_tag() {
        let cli = Cli::parse_from(["srcnav", "switch-tag", "http://x/v1/sources/a/b.c", "v2"]);
        match cli.command {
            Commands::SwitchTag { page_url, tag } => {
                assert_eq!(page_url, "http://x/v1/sources/a/b.c");
                assert_eq!(tag, "v2");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_overrides_after_subcommand() {
        let cli = Cli::parse_from(["srcnav", "f", "main", "--tag", "v3", "-q"]);
        assert_eq!(cli.tag.as_deref(), Some("v3"));
        assert!(cli.quiet);
        assert_eq!(cli.log_filter(), "warn");
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["srcnav", "-q", "-v", "keys"]).is_err());
    }

    #[test]
    fn test_terminal_match_has_no_markup() {
        colored::control::set_override(false);
        let result = adapt_file_result(&file_payload());
        assert_eq!(terminal_match(&result.suggestions[1], "main"), "main.cc");
    }

    #[test]
    fn test_format_symbol_lists_locations() {
        colored::control::set_override(false);
        let result = adapt_symbol_result(&symbol_payload());
        let lines = format_suggestion(&result.suggestions[0], "push");
        assert_eq!(
            lines,
            vec![
                "push_back - method (global public)".to_string(),
                "    Definition: vector.h:40".to_string(),
                "    Prototype: vector.h:12".to_string(),
            ]
        );
    }
}
