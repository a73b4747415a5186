// Startup module - banner and module status
//
// Printed to stderr before the TUI takes over the screen, so headless stdout
// carries nothing but typewriter frames. The same list goes to the logs panel.

use crate::config::{Config, VERSION};
use crate::content::Portfolio;

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const MAGENTA: &str = "\x1b[35m";
}

pub struct ModuleStatus {
    pub name: &'static str,
    pub enabled: bool,
    pub description: String,
}

pub fn print_startup(config: &Config, portfolio: &Portfolio) {
    use colors::*;

    eprintln!();
    eprintln!("  {BOLD}{CYAN}folio{RESET} {DIM}v{VERSION}{RESET}");
    eprintln!("  {DIM}{}{RESET}", portfolio.name);
    eprintln!();

    if let Some(path) = Config::config_path() {
        if path.exists() {
            eprintln!("  {DIM}Config:{RESET}  {GREEN}✓{RESET} {}", path.display());
        } else {
            eprintln!("  {DIM}Config:{RESET}  {DIM}(using defaults){RESET}");
        }
    }
    eprintln!("  {DIM}Content:{RESET} {}", content_source(config));
    eprintln!();

    for module in module_status(config, portfolio) {
        let (icon, style) = if module.enabled {
            (format!("{GREEN}✓{RESET}"), "")
        } else {
            (format!("{DIM}○{RESET}"), DIM)
        };
        eprintln!(
            "    {icon} {style}{:<12}{RESET} {DIM}{}{RESET}",
            module.name, module.description
        );
    }
    eprintln!();

    if config.enable_tui {
        eprintln!("  {MAGENTA}▸{RESET} Press {BOLD}?{RESET} for keys, {BOLD}q{RESET} to quit");
    } else {
        eprintln!("  {MAGENTA}▸{RESET} Headless mode, {BOLD}Ctrl+C{RESET} to stop");
    }
    eprintln!();
}

/// Same list, into the logs panel
pub fn log_startup(config: &Config, portfolio: &Portfolio) {
    tracing::info!("folio v{} - {}", VERSION, portfolio.name);
    tracing::info!("Content: {}", content_source(config));
    for module in module_status(config, portfolio) {
        let icon = if module.enabled { "✓" } else { "○" };
        tracing::info!("  {} {} - {}", icon, module.name, module.description);
    }
}

fn content_source(config: &Config) -> String {
    match &config.content_path {
        Some(path) => path.display().to_string(),
        None => "built-in".to_string(),
    }
}

fn module_status(config: &Config, portfolio: &Portfolio) -> Vec<ModuleStatus> {
    let animation = &config.animation;
    vec![
        ModuleStatus {
            name: "typewriter",
            enabled: true,
            description: format!(
                "{} snippets, {}ms/char, {}ms pause",
                portfolio.snippets.len(),
                animation.typing_speed_ms,
                animation.pause_end_ms
            ),
        },
        ModuleStatus {
            name: "roles",
            enabled: config.features.role_rotation && portfolio.roles.len() > 1,
            description: format!(
                "{} roles every {}ms",
                portfolio.roles.len(),
                animation.role_interval_ms
            ),
        },
        ModuleStatus {
            name: "tui",
            enabled: config.enable_tui,
            description: format!("Terminal interface ({})", config.theme),
        },
        ModuleStatus {
            name: "file-logs",
            enabled: config.logging.file_enabled,
            description: config.logging.file_dir.display().to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_role_disables_rotation() {
        let mut portfolio = Portfolio::builtin();
        portfolio.roles.truncate(1);
        let modules = module_status(&Config::default(), &portfolio);
        let roles = modules.iter().find(|m| m.name == "roles").unwrap();
        assert!(!roles.enabled);
    }

    #[test]
    fn typewriter_line_reports_timing() {
        let modules = module_status(&Config::default(), &Portfolio::builtin());
        assert_eq!(modules[0].description, "5 snippets, 30ms/char, 2000ms pause");
    }
}
