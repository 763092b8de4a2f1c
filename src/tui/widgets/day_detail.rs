//! Readout for the selected day

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::services::SelectedDay;
use crate::tui::theme::Theme;

/// Rows used by the readout: header, values
pub const DAY_DETAIL_HEIGHT: u16 = 2;

/// Long date header, e.g. "Saturday, March 04, 2023"
pub fn format_day(day: &SelectedDay) -> String {
    day.date.format("%A, %B %d, %Y").to_string()
}

/// Date header plus the selected cell's values
pub struct DayDetail {
    day: SelectedDay,
    theme: Theme,
}

impl DayDetail {
    pub fn new(day: SelectedDay, theme: Theme) -> Self {
        Self { day, theme }
    }
}

impl Widget for DayDetail {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // 0: Date header
            Constraint::Length(1), // 1: Values
        ])
        .split(area);

        let header = Line::from(Span::styled(
            format_day(&self.day),
            Style::default()
                .fg(self.theme.date())
                .add_modifier(Modifier::BOLD),
        ));
        Paragraph::new(header).render(chunks[0], buf);

        let label = Style::default().fg(self.theme.muted());
        let value = Style::default().fg(self.theme.text());
        let values = Line::from(vec![
            Span::styled("Value: ", label),
            Span::styled(format!("{}", self.day.cell.actual), value),
            Span::styled("  Normalized: ", label),
            Span::styled(format!("{:.2}", self.day.cell.normalized), value),
        ]);
        Paragraph::new(values).render(chunks[1], buf);
    }
}
