// folio - a developer portfolio hero for the terminal
//
// Shows a name, a rotating role line and a code window where a typewriter
// types out, holds and deletes a series of snippets in a loop.
//
// Architecture:
// - Typewriter: pure state machine, driven by a Timer, drawn on a Surface
// - Rotator: cycles the hero role line on its own timer
// - Content: built-in portfolio or a TOML content file
// - TUI (ratatui): hero, code window, contacts, logs panel
// - Headless: the typewriter alone on stdout
// - Timers: one-shot tokio sleeps that report back over mpsc channels

mod cli;
mod config;
mod content;
mod headless;
mod logging;
mod rotator;
mod startup;
mod theme;
mod tui;
mod typewriter;

use anyhow::Result;
use clap::Parser;
use config::Config;
use content::Portfolio;
use logging::LogBuffer;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Subcommands (config, content, trace) exit early
    if cli::handle_cli(&cli)? {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // A broken config file is reported, not silently replaced with defaults
    let config = Config::load()?;

    // TUI mode: logs go to the in-app panel. Headless: stderr.
    // The guard must live until exit so file logs flush.
    let log_buffer = LogBuffer::new();
    let _file_guard = logging::init(&config, &log_buffer);

    let portfolio = Portfolio::resolve(&config)?;

    startup::print_startup(&config, &portfolio);
    startup::log_startup(&config, &portfolio);

    if config.enable_tui {
        tui::run_tui(portfolio, config, log_buffer).await
    } else {
        headless::run_headless(portfolio, config).await
    }
}
