// Status bar: uptime, snippet position, phase, progress, theme
//
// Narrow terminals get the compact form.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use crate::typewriter::Timer;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render<T: Timer>(f: &mut Frame, area: Rect, app: &App<T>) {
    let status = Paragraph::new(status_text(app, Breakpoint::from_width(area.width)))
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}

fn status_text<T: Timer>(app: &App<T>, bp: Breakpoint) -> String {
    let (k, n) = app.snippet_position();
    let label = &app.typewriter.surface().label;
    let phase = if app.paused {
        "paused (space)"
    } else {
        app.phase().as_str()
    };
    let percent = (app.progress() * 100.0).round() as u32;

    if bp.at_least(Breakpoint::Wide) {
        format!(
            " {} │ {}/{} {} │ {} │ {:>3}% │ 🎨 {} │ ?:help q:quit",
            app.uptime(),
            k,
            n,
            label,
            phase,
            percent,
            app.theme.name
        )
    } else {
        format!(" {} │ {}/{} │ {} │ {}%", app.uptime(), k, n, phase, percent)
    }
}
