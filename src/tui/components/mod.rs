// Components - one module per screen region
//
// - Title bar: name, rotating role, tagline, bio
// - Code window: the typewriter
// - Contacts bar: numbered links
// - Logs panel: system log entries
// - Status bar: uptime, snippet, phase, theme
// - Toast: transient notifications

pub mod code_window;
pub mod contacts_bar;
pub mod logs_panel;
pub mod scrollbar;
pub mod status_bar;
pub mod title_bar;
pub mod toast;
