// Title bar: the hero header
//
// Name on the first line, the rotating role under it, then tagline and bio.

use crate::tui::app::App;
use crate::typewriter::Timer;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render<T: Timer>(f: &mut Frame, area: Rect, app: &App<T>) {
    let theme = &app.theme;

    let mut lines = vec![Line::from(Span::styled(
        app.portfolio.name.clone(),
        Style::default()
            .fg(theme.title)
            .add_modifier(Modifier::BOLD),
    ))];

    if let Some(role) = app.current_role() {
        lines.push(Line::from(vec![
            Span::styled("> ", Style::default().fg(theme.secondary)),
            Span::styled(role.to_string(), Style::default().fg(theme.accent)),
        ]));
    }

    if !app.portfolio.tagline.is_empty() {
        lines.push(Line::from(Span::styled(
            app.portfolio.tagline.clone(),
            Style::default().fg(theme.code),
        )));
    }

    if !app.portfolio.bio.is_empty() {
        lines.push(Line::from(Span::styled(
            app.portfolio.bio.clone(),
            Style::default()
                .fg(theme.muted)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    let hero = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.title))
                .title_top(Line::from(" ? ").right_aligned()),
        );

    f.render_widget(hero, area);
}
