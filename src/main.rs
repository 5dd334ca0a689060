//! Srcnav CLI application entry point
//!
//! Queries the code browser's search backend from the terminal using the
//! same endpoints, adaptation and labels as the page.
//!
//! # Usage
//!
//! ```bash
//! # Search symbols and files in the configured tag
//! srcnav symbol push_back
//! srcnav file main.cc --tag v2
//!
//! # Where would the tag picker take this page?
//! srcnav switch-tag http://localhost:9000/v1/sources/proj/file.cpp v2
//!
//! # Key commands, configuration
//! srcnav keys
//! srcnav config show
//! ```
//!
//! # Configuration
//!
//! Stored in the user's config directory (`~/.config/srcnav/config.toml` on
//! Linux) and created with defaults on first run. `SRCNAV_*` environment
//! variables override file values.

use colored::Colorize;
use srcnav::{
    SrcnavError,
    autocomplete::{ClientError, QueryClient, SearchKind},
    cli::{Cli, Commands, ConfigCommands, PrintNavigator, format_suggestion},
    config::SrcnavConfig,
    keybinds::generate_help_text,
    tags::{HttpProbe, TagPicker, TagProbeResult, TagSwitcher},
};
use tracing_subscriber::EnvFilter;
use url::Url;

type Result<T> = std::result::Result<T, SrcnavError>;

fn init_tracing(cli: &Cli) {
    let filter = if cli.verbose {
        EnvFilter::new(cli.log_filter())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();
    init_tracing(&cli);

    if let Err(e) = run(cli).await {
        eprintln!("{} {e}", "Error:".red().bold());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = SrcnavConfig::load()?;
    // Flag overrides apply to this run only; `config set` must not persist them.
    if !matches!(cli.command, Commands::Config { .. }) {
        if let Some(server) = &cli.server {
            config.server.clone_from(server);
        }
        if let Some(tag) = &cli.tag {
            config.tag.clone_from(tag);
        }
    }

    match &cli.command {
        Commands::Symbol { query } => handle_search(&config, SearchKind::Symbol, query, cli.quiet).await,
        Commands::File { query } => handle_search(&config, SearchKind::File, query, cli.quiet).await,
        Commands::SwitchTag { page_url, tag } => handle_switch_tag(page_url, tag, cli.quiet).await,
        Commands::Tags => {
            handle_tags(&config, cli.quiet);
            Ok(())
        }
        Commands::Keys => {
            let table = config.keys.build_table()?;
            print!("{}", generate_help_text(&table));
            Ok(())
        }
        Commands::Config { command } => handle_config_command(config, command, cli.quiet),
    }
}

async fn handle_search(config: &SrcnavConfig, kind: SearchKind, query: &str, quiet: bool) -> Result<()> {
    if config.tag.is_empty() {
        return Err(SrcnavError::InvalidInput(
            "No tag configured. Use 'srcnav config set tag=<tag>' or pass --tag.".into(),
        ));
    }

    let client = QueryClient::new(config.server_url()?, config.tag.clone())?;
    let result = client.search(kind, query).await?;

    if result.is_empty() {
        if !quiet {
            println!("{}", "No results".yellow());
        }
        return Ok(());
    }

    for suggestion in &result.suggestions {
        for line in format_suggestion(suggestion, query) {
            println!("{line}");
        }
    }
    if !quiet {
        println!("\n{} results", result.len().to_string().bold());
    }
    Ok(())
}

async fn handle_switch_tag(page_url: &str, tag: &str, quiet: bool) -> Result<()> {
    let current = Url::parse(page_url)?;
    let probe = HttpProbe::new().map_err(ClientError::from)?;
    let switcher = TagSwitcher::new(probe);
    let mut navigator = PrintNavigator { quiet };

    let result = switcher.switch(&current, tag, &mut navigator).await?;
    if !quiet && matches!(result, TagProbeResult::NotFound { .. }) {
        eprintln!(
            "{} {} has no equivalent page, using its root",
            "ℹ".blue().bold(),
            tag.cyan()
        );
    }
    Ok(())
}

fn handle_tags(config: &SrcnavConfig, quiet: bool) {
    let Some(picker) = TagPicker::build(config.project.as_deref(), &config.tag, &config.tags) else {
        if !quiet {
            println!("{}", "No tags configured".yellow());
        }
        return;
    };

    if !quiet {
        println!("{} {}", "Current:".bold(), picker.default_label().cyan());
    }
    for entry in &picker.entries {
        let marker = if entry.value == picker.current { "*" } else { " " };
        println!("{marker} {}", entry.label);
    }
}

fn handle_config_command(mut config: SrcnavConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let text = toml::to_string_pretty(&config)
                .map_err(|e| SrcnavError::InvalidInput(format!("Failed to serialize config: {e}")))?;
            print!("{text}");
        }
        ConfigCommands::Path => {
            println!("{}", SrcnavConfig::config_path()?.display());
        }
        ConfigCommands::Set { setting } => {
            let Some((key, value)) = setting.split_once('=') else {
                return Err(SrcnavError::InvalidInput(
                    "Invalid format. Use: srcnav config set key=value".into(),
                ));
            };
            let (key, value) = (key.trim(), value.trim());

            match key {
                "server" => {
                    Url::parse(value)?;
                    config.server = value.to_string();
                }
                "tag" => config.tag = value.to_string(),
                "project" => config.project = (!value.is_empty()).then(|| value.to_string()),
                "tags" => {
                    config.tags = value
                        .split(',')
                        .map(str::trim)
                        .filter(|t| !t.is_empty())
                        .map(String::from)
                        .collect();
                }
                _ => {
                    return Err(SrcnavError::InvalidInput(format!(
                        "Unknown configuration key: '{key}'. Available keys: server, tag, project, tags"
                    )));
                }
            }
            config.save()?;
            if !quiet {
                println!("Set {key} = {value}");
            }
        }
    }
    Ok(())
}
