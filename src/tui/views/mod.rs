// Screen rendering - called once per loop iteration
//
// Lays out the hero, code window, contacts, optional logs and status bar,
// then draws overlays (help modal, toast) on top.

use super::app::App;
use super::components::{code_window, contacts_bar, logs_panel, status_bar, title_bar};
use super::layout;
use super::modal::{Modal, HELP_ROWS};
use crate::typewriter::Timer;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn draw<T: Timer>(f: &mut Frame, app: &mut App<T>) {
    let bg = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg, f.area());

    let screen = layout::split(f.area(), app.show_logs);

    title_bar::render(f, screen.title, app);
    code_window::render(f, screen.code, app);
    if let Some(area) = screen.logs {
        logs_panel::render(f, area, app);
    }
    contacts_bar::render(f, screen.contacts, app);
    status_bar::render(f, screen.status, app);

    if let Some(modal) = app.modal {
        render_modal(f, app, modal);
    }

    if let Some(toast) = &app.toast {
        let area = f.area();
        toast.render(f, area, &app.theme);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn render_modal<T: Timer>(f: &mut Frame, app: &App<T>, modal: Modal) {
    let theme = &app.theme;
    let key_style = Style::default().fg(theme.accent);
    let desc_style = Style::default().fg(theme.code);

    let mut lines = vec![Line::raw("")];
    lines.extend(HELP_ROWS.iter().map(|(key, desc)| {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{:<14}", key), key_style),
            Span::styled(*desc, desc_style),
        ])
    }));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "  Esc or ? to close",
        Style::default().fg(theme.muted),
    )));

    let area = centered_rect(52, lines.len() as u16 + 2, f.area());
    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD),
            )
            .title(modal.title())
            .style(Style::default().bg(theme.background)),
    );

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}
