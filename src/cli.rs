// CLI module - command-line argument parsing and handlers
//
// Without a subcommand folio runs the viewer. Subcommands:
// - config --show|--reset|--edit|--path: manage ~/.config/folio/config.toml
// - content [--json]: print the resolved portfolio content
// - trace [--steps N] [--speed MS] [--pause MS]: print the typewriter schedule

use crate::config::{Config, VERSION};
use crate::content::Portfolio;
use crate::typewriter::trace::trace;
use crate::typewriter::Timing;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;
use std::process::Command;

/// folio - a developer portfolio hero for the terminal
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version = VERSION)]
#[command(about = "Typewriter portfolio hero for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },

    /// Print the portfolio content that would be shown
    Content {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the typewriter schedule without waiting for it
    Trace {
        /// Number of timer firings to print
        #[arg(long, default_value_t = 40)]
        steps: usize,

        /// Typing speed in ms (default: config)
        #[arg(long)]
        speed: Option<u64>,

        /// Pause at full text in ms (default: config)
        #[arg(long)]
        pause: Option<u64>,
    },
}

/// Handle a subcommand. Returns Ok(true) if one ran (exit after).
///
/// Runs before the config file is loaded: `config --path|--reset|--edit`
/// must keep working when that file is broken.
pub fn handle_cli(cli: &Cli) -> Result<bool> {
    match &cli.command {
        Some(Commands::Config {
            show,
            reset,
            edit,
            path,
        }) => {
            if *path {
                handle_config_path()?;
            } else if *show {
                handle_config_show(&Config::load()?);
            } else if *reset {
                handle_config_reset()?;
            } else if *edit {
                handle_config_edit()?;
            } else {
                println!("Usage: folio config [--show|--reset|--edit|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --edit    Open config file in $EDITOR");
                println!("  --path    Show config file path");
            }
        }
        Some(Commands::Content { json }) => {
            let portfolio = Portfolio::resolve(&Config::load()?)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&portfolio)?);
            } else {
                print!("{}", content_summary(&portfolio));
            }
        }
        Some(Commands::Trace {
            steps,
            speed,
            pause,
        }) => {
            let config = Config::load()?;
            let portfolio = Portfolio::resolve(&config)?;
            let base = config.animation.timing();
            let timing = Timing::new(
                speed.map_or(base.typing_speed, std::time::Duration::from_millis),
                pause.map_or(base.pause_end, std::time::Duration::from_millis),
            );
            for entry in trace(portfolio.typewriter(timing)?, *steps) {
                println!("{}", entry);
            }
        }
        None => return Ok(false),
    }
    Ok(true)
}

fn config_path() -> Result<std::path::PathBuf> {
    Config::config_path().context("Could not determine config path")
}

fn handle_config_path() -> Result<()> {
    println!("{}", config_path()?.display());
    Ok(())
}

fn handle_config_show(config: &Config) {
    println!("# Effective configuration (env > file > defaults)");
    println!("# enable_tui = {} (FOLIO_NO_TUI)", config.enable_tui);
    println!();
    print!("{}", config.to_toml());
}

fn handle_config_reset() -> Result<()> {
    let path = config_path()?;

    if path.exists() {
        print!("Overwrite {} with defaults? [y/N] ", path.display());
        std::io::stdout().flush()?;
        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    reset_config_file(&path)?;
    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

/// Overwrite a config file with the default template, whatever it held
fn reset_config_file(path: &Path) -> Result<()> {
    Config::default()
        .save_to(path)
        .with_context(|| format!("Failed to write {}", path.display()))
}

fn handle_config_edit() -> Result<()> {
    let path = config_path()?;

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    let status = Command::new(&editor).arg(&path).status().with_context(|| {
        format!(
            "Failed to launch editor '{}' (set $EDITOR to your preferred editor)",
            editor
        )
    })?;
    if !status.success() {
        bail!("Editor exited with status: {}", status);
    }
    Ok(())
}

/// Human-readable listing for `folio content`
fn content_summary(portfolio: &Portfolio) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", portfolio.name);
    if !portfolio.tagline.is_empty() {
        let _ = writeln!(out, "{}", portfolio.tagline);
    }
    if !portfolio.roles.is_empty() {
        let _ = writeln!(out, "\nRoles: {}", portfolio.roles.join(" · "));
    }

    let _ = writeln!(out, "\nSnippets:");
    for (i, snippet) in portfolio.snippets.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {:<12} {:>4} chars, {} lines",
            i + 1,
            snippet.label,
            snippet.len(),
            snippet.text.lines().count()
        );
    }

    if !portfolio.contacts.is_empty() {
        let _ = writeln!(out, "\nContacts:");
        for (i, contact) in portfolio.contacts.iter().enumerate() {
            let _ = writeln!(out, "  [{}] {:<10} {}", i + 1, contact.label, contact.href);
        }
    }
    out
}
