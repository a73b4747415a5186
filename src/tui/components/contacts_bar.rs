// Contacts bar: numbered links, copied with the matching digit key

use crate::content::Contact;
use crate::tui::app::App;
use crate::typewriter::Timer;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Only 1-9 have keys
const MAX_NUMBERED: usize = 9;

pub fn render<T: Timer>(f: &mut Frame, area: Rect, app: &App<T>) {
    let theme = &app.theme;
    let mut spans = Vec::new();

    for (n, contact) in numbered(&app.portfolio.contacts) {
        if !spans.is_empty() {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            format!("[{}] ", n),
            Style::default().fg(theme.secondary),
        ));
        spans.push(Span::styled(
            contact.label.clone(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let bar = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border))
                .title(" Contact "),
        );

    f.render_widget(bar, area);
}

fn numbered(contacts: &[Contact]) -> impl Iterator<Item = (usize, &Contact)> {
    contacts.iter().take(MAX_NUMBERED).enumerate().map(|(i, c)| (i + 1, c))
}
