//! Logs panel: system log entries captured from tracing
//!
//! Reads from the shared `LogBuffer` each frame. Scroll position lives in
//! `App::logs_scroll` and follows the newest entry unless the user scrolls up.

use super::scrollbar::render_scrollbar;
use crate::logging::{LogEntry, LogLevel};
use crate::theme::Theme;
use crate::tui::app::App;
use crate::typewriter::Timer;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn render<T: Timer>(f: &mut Frame, area: Rect, app: &mut App<T>) {
    let entries = app.log_buffer.get_all();
    let height = area.height.saturating_sub(2) as usize;
    app.logs_scroll.update_dimensions(entries.len(), height);

    let (start, end) = app.logs_scroll.visible_range();
    let items: Vec<ListItem> = entries[start..end]
        .iter()
        .map(|entry| ListItem::new(format_entry(entry)).style(level_style(entry.level, &app.theme)))
        .collect();

    let title = if app.logs_scroll.auto_follow {
        " System Logs "
    } else {
        " System Logs [scroll] "
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border))
            .title(title),
    );

    f.render_widget(list, area);
    render_scrollbar(f, area, &app.logs_scroll);
}

fn format_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {:5} {}: {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        short_target(&entry.target),
        entry.message
    )
}

/// Module path without the crate prefix: "folio::tui::app" -> "tui::app"
fn short_target(target: &str) -> &str {
    target.strip_prefix("folio::").unwrap_or(target)
}

fn level_style(level: LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default()
            .fg(theme.log_error)
            .add_modifier(Modifier::BOLD),
        LogLevel::Warn => Style::default().fg(theme.log_warn),
        LogLevel::Info => Style::default().fg(theme.log_info),
        LogLevel::Debug | LogLevel::Trace => Style::default().fg(theme.log_debug),
    }
}
