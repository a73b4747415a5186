//! Screen layout: breakpoints and the hero/logs split
//!
//! Width thresholds live here so render code has no magic numbers.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 60 cols: split pane, minimal terminal
    Compact,
    /// 60-99 cols
    Normal,
    /// 100+ cols: room for logs beside the hero
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    pub fn at_least(&self, min: Breakpoint) -> bool {
        *self >= min
    }
}

/// Rectangles for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub code: Rect,
    pub contacts: Rect,
    pub logs: Option<Rect>,
    pub status: Rect,
}

/// Split the screen; logs sit to the right on wide terminals, below otherwise
pub fn split(area: Rect, show_logs: bool) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // name, role, tagline, bio
            Constraint::Min(6),    // code window (+ logs)
            Constraint::Length(3), // contacts
            Constraint::Length(2), // status
        ])
        .split(area);

    let (code, logs) = if !show_logs {
        (rows[1], None)
    } else if Breakpoint::from_width(area.width).at_least(Breakpoint::Wide) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);
        (cols[0], Some(cols[1]))
    } else {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);
        (parts[0], Some(parts[1]))
    };

    ScreenLayout {
        title: rows[0],
        code,
        contacts: rows[2],
        logs,
        status: rows[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(60), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(99), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(100), Breakpoint::Wide);
        assert!(Breakpoint::Wide.at_least(Breakpoint::Normal));
        assert!(!Breakpoint::Compact.at_least(Breakpoint::Normal));
    }

    #[test]
    fn logs_hidden_gives_full_width_code() {
        let layout = split(Rect::new(0, 0, 120, 40), false);
        assert!(layout.logs.is_none());
        assert_eq!(layout.code.width, 120);
        assert_eq!(layout.title.height, 6);
        assert_eq!(layout.status.y, 38);
    }

    #[test]
    fn logs_beside_code_when_wide_below_when_narrow() {
        let wide = split(Rect::new(0, 0, 120, 40), true);
        let logs = wide.logs.unwrap();
        assert_eq!(logs.y, wide.code.y);
        assert!(logs.x > wide.code.x);

        let narrow = split(Rect::new(0, 0, 80, 40), true);
        let logs = narrow.logs.unwrap();
        assert_eq!(logs.x, narrow.code.x);
        assert!(logs.y > narrow.code.y);
    }
}
