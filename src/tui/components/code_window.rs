// Code window: the typewriter's surface on screen
//
// Header mimics an editor window (three dots + language label). The body is
// the visible text with a blinking caret after the last character. When the
// text outgrows the window, the bottom stays in view.

use crate::tui::app::App;
use crate::typewriter::Timer;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CARET: &str = "▌";

pub fn render<T: Timer>(f: &mut Frame, area: Rect, app: &App<T>) {
    let theme = &app.theme;
    let buffer = app.typewriter.surface();

    let header = Line::from(vec![
        Span::raw(" "),
        Span::styled("●", Style::default().fg(Color::Rgb(0xff, 0x5f, 0x56))),
        Span::raw(" "),
        Span::styled("●", Style::default().fg(Color::Rgb(0xff, 0xbd, 0x2e))),
        Span::raw(" "),
        Span::styled("●", Style::default().fg(Color::Rgb(0x27, 0xc9, 0x3f))),
        Span::raw("  "),
        Span::styled(format!("{} ", buffer.label), Style::default().fg(theme.label)),
    ]);

    let caret = if app.caret_visible() { CARET } else { " " };
    let lines = code_lines(&buffer.text, caret, theme.code, theme.caret);

    // Keep the caret line visible
    let inner_height = area.height.saturating_sub(2) as usize;
    let overflow = lines.len().saturating_sub(inner_height);

    let body = Paragraph::new(lines)
        .scroll((overflow.min(u16::MAX as usize) as u16, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border))
                .title(header),
        );

    f.render_widget(body, area);
}

/// Split visible text into lines, caret appended to the last one
fn code_lines(text: &str, caret: &str, code: Color, caret_color: Color) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = text
        .split('\n')
        .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(code))))
        .collect();

    if let Some(last) = lines.last_mut() {
        last.spans
            .push(Span::styled(caret.to_string(), Style::default().fg(caret_color)));
    }
    lines
}
