//! Config serialization: the TOML template doubles as documentation

use super::Config;
use std::path::Path;

/// Quote a string as a TOML basic string
fn quote(s: &str) -> String {
    toml::Value::String(s.to_string()).to_string()
}

impl Config {
    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        let content_line = match &self.content_path {
            Some(path) => format!("content_path = {}", quote(&path.display().to_string())),
            None => "# content_path = \"~/portfolio.toml\"".to_string(),
        };

        format!(
            r#"# folio configuration

# Theme: Neon, Auto, Dracula, Nord, Gruvbox (press 't' in the TUI to cycle)
theme = {theme}

# Portfolio content file (name, roles, [[snippets]], [[contacts]])
# Leave unset to use the built-in portfolio
{content_line}

# Animation timing in milliseconds
[animation]
# Delay between typed characters (deleting runs twice as fast)
typing_speed_ms = {typing_speed}
# Hold time once a snippet is fully typed
pause_end_ms = {pause_end}
# Interval between hero role changes
role_interval_ms = {role_interval}
# Caret blink half-period
caret_blink_ms = {caret_blink}

# Feature flags
[features]
role_rotation = {role_rotation}
logs_panel = {logs_panel}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {log_level}
# File logging (in addition to TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = {log_file_prefix}
"#,
            theme = quote(&self.theme),
            content_line = content_line,
            typing_speed = self.animation.typing_speed_ms,
            pause_end = self.animation.pause_end_ms,
            role_interval = self.animation.role_interval_ms,
            caret_blink = self.animation.caret_blink_ms,
            role_rotation = self.features.role_rotation,
            logs_panel = self.features.logs_panel,
            log_level = quote(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = quote(&self.logging.file_dir.display().to_string()),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = quote(&self.logging.file_prefix),
        )
    }

    /// Write the template to a config file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml())
    }
}
