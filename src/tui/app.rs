//! Application state and event loop

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
    DefaultTerminal, Frame,
};
use tracing::info;

use crate::services::HeatmapModel;
use crate::types::Command;

use super::theme::Theme;
use super::widgets::{
    day_detail::{DayDetail, DAY_DETAIL_HEIGHT},
    heatmap::{required_width, Heatmap, HEATMAP_HEIGHT},
    help::HelpPopup,
};

/// Map a key to a model command
pub fn command_for_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(Command::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::Down),
        KeyCode::Left | KeyCode::Char('h') => Some(Command::Left),
        KeyCode::Right | KeyCode::Char('l') => Some(Command::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Commit),
        _ => None,
    }
}

fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Main application
pub struct App {
    model: HeatmapModel,
    theme: Theme,
    show_help: bool,
    should_quit: bool,
}

impl App {
    pub fn new(model: HeatmapModel, theme: Theme) -> Self {
        Self {
            model,
            theme,
            show_help: false,
            should_quit: false,
        }
    }

    /// Handle keyboard events
    pub fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }

        if is_quit_key(&key) {
            self.should_quit = true;
            return;
        }

        // Any key dismisses the help popup
        if self.show_help {
            self.show_help = false;
            return;
        }

        if key.code == KeyCode::Char('?') {
            self.show_help = true;
        } else if let Some(command) = command_for_key(key.code) {
            self.model.handle_command(command);
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn model(&self) -> &HeatmapModel {
        &self.model
    }

    /// Draw the application
    pub fn draw(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.area());
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let key = Style::default().fg(self.theme.accent());
        let text = Style::default().fg(self.theme.muted());
        let line = Line::from(vec![
            Span::styled("hjkl/arrows", key),
            Span::styled(" move  ", text),
            Span::styled("enter", key),
            Span::styled(" add  ", text),
            Span::styled("?", key),
            Span::styled(" help  ", text),
            Span::styled("q", key),
            Span::styled(" quit", text),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let content_width = required_width(self.model.weeks()).min(area.width);
        let x_offset = area.width.saturating_sub(content_width) / 2;
        let content = Rect {
            x: area.x + x_offset,
            width: content_width,
            ..area
        };

        let chunks = Layout::vertical([
            Constraint::Length(1),                 // 0: Top padding
            Constraint::Length(DAY_DETAIL_HEIGHT), // 1: Selected day
            Constraint::Length(1),                 // 2: Padding
            Constraint::Length(HEATMAP_HEIGHT),    // 3: Heatmap
            Constraint::Fill(1),                   // 4: Remaining
        ])
        .split(content);

        DayDetail::new(self.model.selected_day(), self.theme).render(chunks[1], buf);
        Heatmap::new(self.model.current_view(), self.theme).render(chunks[3], buf);

        if area.height > 0 {
            let footer = Rect {
                y: area.y + area.height - 1,
                height: 1,
                ..area
            };
            self.render_footer(footer, buf);
        }

        if self.show_help {
            let popup_area = HelpPopup::centered_area(area);
            HelpPopup::new(self.theme).render(popup_area, buf);
        }
    }
}

/// Run the TUI application until the user quits
pub fn run(model: HeatmapModel, theme: Theme) -> anyhow::Result<()> {
    let mut app = App::new(model, theme);
    let mut terminal = ratatui::init();
    info!("terminal initialised");
    let result = run_app(&mut terminal, &mut app);
    ratatui::restore();
    info!(entries = app.model().data_points().len(), "session ended");
    result
}

fn run_app(terminal: &mut DefaultTerminal, app: &mut App) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| app.draw(frame))?;

        if app.should_quit() {
            break;
        }

        // One event processed to completion per redraw
        let ev = event::read()?;
        app.handle_event(ev);
    }

    Ok(())
}
