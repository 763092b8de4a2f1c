//! Help popup widget - displays keyboard shortcuts

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::tui::theme::Theme;

/// Version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Width and height of the help popup
const POPUP_WIDTH: u16 = 42;
const POPUP_HEIGHT: u16 = 17;

/// Sections of (key, description) pairs
const SECTIONS: [(&str, &[(&str, &str)]); 3] = [
    (
        "Navigation",
        &[
            ("Up / k", "Previous day"),
            ("Down / j", "Next day"),
            ("Left / h", "Previous week"),
            ("Right / l", "Next week"),
        ],
    ),
    ("Entries", &[("Enter / Space", "Add entry on day")]),
    (
        "General",
        &[("q / Esc / Ctrl+C", "Quit"), ("?", "Toggle help")],
    ),
];

/// Help popup widget showing keyboard shortcuts
pub struct HelpPopup {
    theme: Theme,
}

impl HelpPopup {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Calculate centered popup area
    pub fn centered_area(area: Rect) -> Rect {
        let x = area.x + (area.width.saturating_sub(POPUP_WIDTH)) / 2;
        let y = area.y + (area.height.saturating_sub(POPUP_HEIGHT)) / 2;
        Rect {
            x,
            y,
            width: POPUP_WIDTH.min(area.width),
            height: POPUP_HEIGHT.min(area.height),
        }
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let header_style = Style::default()
            .fg(self.theme.date())
            .add_modifier(Modifier::BOLD);
        let sep = "─".repeat(width as usize);

        let mut lines = Vec::new();
        for (title, bindings) in SECTIONS {
            lines.push(Line::from(Span::styled(title, header_style)));
            lines.push(Line::from(Span::styled(
                sep.clone(),
                Style::default().fg(self.theme.muted()),
            )));
            for (key, desc) in bindings {
                lines.push(keybinding_line(key, desc, self.theme));
            }
        }
        lines
    }
}

impl Default for HelpPopup {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl Widget for HelpPopup {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Clear the area first (for overlay effect)
        Clear.render(area, buf);

        let title = format!(" heatcal v{} ", VERSION);
        let block = Block::default()
            .title(title)
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent()));

        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.lines(inner.width)).render(inner, buf);

        // Close hint on the last inner row
        if inner.height > 0 {
            let hint_area = Rect {
                y: inner.y + inner.height - 1,
                height: 1,
                ..inner
            };
            Paragraph::new(Span::styled(
                "Press ? to close",
                Style::default().fg(self.theme.muted()),
            ))
            .alignment(Alignment::Center)
            .render(hint_area, buf);
        }
    }
}

/// A single keybinding line
fn keybinding_line(key: &str, desc: &str, theme: Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<18}", key), Style::default().fg(theme.accent())),
        Span::styled(desc.to_string(), Style::default().fg(theme.text())),
    ])
}
