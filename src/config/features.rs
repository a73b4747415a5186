//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for optional panels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Features {
    /// Rotate the hero role line (off = first role only)
    pub role_rotation: bool,

    /// Show the system logs panel at startup (toggle with 'l')
    pub logs_panel: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            role_rotation: true,
            logs_panel: false,
        }
    }
}

/// Feature flags as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileFeatures {
    pub role_rotation: Option<bool>,
    pub logs_panel: Option<bool>,
}

impl Features {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileFeatures>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            role_rotation: file.role_rotation.unwrap_or(defaults.role_rotation),
            logs_panel: file.logs_panel.unwrap_or(defaults.logs_panel),
        }
    }
}
