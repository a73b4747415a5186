// Theme support for the TUI
//
// "Neon" reproduces the site's cyan/magenta look in true color.
// "Auto" uses the terminal's ANSI palette, the rest are true color (RGB).

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Theme names in cycle order
pub const THEME_NAMES: &[&str] = &["Neon", "Auto", "Dracula", "Nord", "Gruvbox"];

/// Color palette for the TUI
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,

    // Hero
    pub title: Color,
    pub accent: Color,
    pub secondary: Color,

    // Code window
    pub code: Color,
    pub caret: Color,
    pub label: Color,

    // Chrome
    pub border: Color,
    pub highlight: Color,
    pub status_bar: Color,
    pub muted: Color,
    pub background: Color,
    pub border_type: BorderType,

    // Logs panel
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
}

impl Theme {
    /// Load theme by name (case-insensitive); unknown names fall back to Neon
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "auto" => Self::auto(),
            "dracula" => Self::dracula(),
            "nord" => Self::nord(),
            "gruvbox" => Self::gruvbox(),
            _ => Self::neon(),
        }
    }

    /// The theme after this one in [`THEME_NAMES`]
    pub fn next(&self) -> Self {
        let current = THEME_NAMES
            .iter()
            .position(|n| n.eq_ignore_ascii_case(&self.name))
            .unwrap_or(0);
        Self::by_name(THEME_NAMES[(current + 1) % THEME_NAMES.len()])
    }

    /// Site colors: cyan accent, magenta secondary
    pub fn neon() -> Self {
        Self {
            name: "Neon".to_string(),
            title: Color::Rgb(0x00, 0xd4, 0xff),     // cyan
            accent: Color::Rgb(0x00, 0xd4, 0xff),    // cyan
            secondary: Color::Rgb(0xff, 0x00, 0xff), // magenta
            code: Color::Rgb(0xe6, 0xe6, 0xe6),
            caret: Color::Rgb(0x00, 0xd4, 0xff),
            label: Color::Rgb(0xff, 0x00, 0xff),
            border: Color::Rgb(0x3a, 0x3f, 0x5c),
            highlight: Color::Rgb(0xff, 0x00, 0xff),
            status_bar: Color::Rgb(0x00, 0xd4, 0xff),
            muted: Color::Rgb(0x7a, 0x7f, 0x9a),
            background: Color::Rgb(0x0a, 0x0e, 0x27),
            border_type: BorderType::Rounded,
            log_error: Color::Rgb(0xff, 0x4d, 0x6d),
            log_warn: Color::Rgb(0xff, 0xd1, 0x66),
            log_info: Color::Rgb(0x00, 0xd4, 0xff),
            log_debug: Color::Rgb(0x7a, 0x7f, 0x9a),
        }
    }

    /// Terminal ANSI palette
    pub fn auto() -> Self {
        Self {
            name: "Auto".to_string(),
            title: Color::Cyan,
            accent: Color::Cyan,
            secondary: Color::Magenta,
            code: Color::White,
            caret: Color::Cyan,
            label: Color::Magenta,
            border: Color::White,
            highlight: Color::Yellow,
            status_bar: Color::Green,
            muted: Color::DarkGray,
            background: Color::Reset,
            border_type: BorderType::Plain,
            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Green,
            log_debug: Color::DarkGray,
        }
    }

    /// Dracula theme - https://draculatheme.com
    pub fn dracula() -> Self {
        Self {
            name: "Dracula".to_string(),
            title: Color::Rgb(0x8b, 0xe9, 0xfd),     // cyan
            accent: Color::Rgb(0x8b, 0xe9, 0xfd),    // cyan
            secondary: Color::Rgb(0xff, 0x79, 0xc6), // pink
            code: Color::Rgb(0xf8, 0xf8, 0xf2),      // foreground
            caret: Color::Rgb(0x50, 0xfa, 0x7b),     // green
            label: Color::Rgb(0xbd, 0x93, 0xf9),     // purple
            border: Color::Rgb(0x62, 0x72, 0xa4),    // comment
            highlight: Color::Rgb(0xf1, 0xfa, 0x8c), // yellow
            status_bar: Color::Rgb(0x50, 0xfa, 0x7b),
            muted: Color::Rgb(0x62, 0x72, 0xa4),
            background: Color::Rgb(0x28, 0x2a, 0x36),
            border_type: BorderType::Rounded,
            log_error: Color::Rgb(0xff, 0x55, 0x55),
            log_warn: Color::Rgb(0xff, 0xb8, 0x6c),
            log_info: Color::Rgb(0x50, 0xfa, 0x7b),
            log_debug: Color::Rgb(0x62, 0x72, 0xa4),
        }
    }

    /// Nord theme - https://www.nordtheme.com
    pub fn nord() -> Self {
        Self {
            name: "Nord".to_string(),
            title: Color::Rgb(0x88, 0xc0, 0xd0),     // nord8
            accent: Color::Rgb(0x88, 0xc0, 0xd0),    // nord8
            secondary: Color::Rgb(0xb4, 0x8e, 0xad), // nord15
            code: Color::Rgb(0xe5, 0xe9, 0xf0),      // nord5
            caret: Color::Rgb(0xa3, 0xbe, 0x8c),     // nord14
            label: Color::Rgb(0x81, 0xa1, 0xc1),     // nord9
            border: Color::Rgb(0x4c, 0x56, 0x6a),    // nord3
            highlight: Color::Rgb(0xeb, 0xcb, 0x8b), // nord13
            status_bar: Color::Rgb(0xa3, 0xbe, 0x8c),
            muted: Color::Rgb(0x4c, 0x56, 0x6a),
            background: Color::Rgb(0x2e, 0x34, 0x40),
            border_type: BorderType::Plain,
            log_error: Color::Rgb(0xbf, 0x61, 0x6a),
            log_warn: Color::Rgb(0xeb, 0xcb, 0x8b),
            log_info: Color::Rgb(0xa3, 0xbe, 0x8c),
            log_debug: Color::Rgb(0x4c, 0x56, 0x6a),
        }
    }

    /// Gruvbox dark theme
    pub fn gruvbox() -> Self {
        Self {
            name: "Gruvbox".to_string(),
            title: Color::Rgb(0x83, 0xa5, 0x98),     // aqua
            accent: Color::Rgb(0x8e, 0xc0, 0x7c),    // aqua bright
            secondary: Color::Rgb(0xd3, 0x86, 0x9b), // purple
            code: Color::Rgb(0xeb, 0xdb, 0xb2),      // fg
            caret: Color::Rgb(0xfa, 0xbd, 0x2f),     // yellow
            label: Color::Rgb(0xfe, 0x80, 0x19),     // orange
            border: Color::Rgb(0x66, 0x5c, 0x54),    // bg3
            highlight: Color::Rgb(0xfa, 0xbd, 0x2f),
            status_bar: Color::Rgb(0xb8, 0xbb, 0x26), // green
            muted: Color::Rgb(0x92, 0x83, 0x74),      // gray
            background: Color::Rgb(0x28, 0x28, 0x28),
            border_type: BorderType::Thick,
            log_error: Color::Rgb(0xfb, 0x49, 0x34),
            log_warn: Color::Rgb(0xfa, 0xbd, 0x2f),
            log_info: Color::Rgb(0xb8, 0xbb, 0x26),
            log_debug: Color::Rgb(0x92, 0x83, 0x74),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::neon()
    }
}
