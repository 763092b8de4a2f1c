//! Contribution heatmap widget

use std::ops::Range;

use chrono::Datelike;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::services::HeatmapView;
use crate::tui::theme::{ColorScale, Theme};
use crate::types::{GridCoordinate, DAYS_PER_WEEK};

/// Cell dimensions: 1 glyph + 1 gap
const CELL_WIDTH: u16 = 2;
const LABEL_WIDTH: u16 = 2; // "S " prefix

/// Rows used by the widget: month labels, 7 days, blank, legend
pub const HEATMAP_HEIGHT: u16 = 10;

const CELL_GLYPH: &str = "■";

/// Weekday labels, Sunday first
const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["S", "M", "T", "W", "T", "F", "S"];

const MONTH_NAMES: [&str; 13] = [
    "", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Width needed to show every column of a `weeks`-wide grid
pub fn required_width(weeks: usize) -> u16 {
    let columns = u16::try_from(weeks).unwrap_or(u16::MAX);
    columns.saturating_mul(CELL_WIDTH).saturating_add(LABEL_WIDTH)
}

/// Columns that fit in `width` cells, shifted so `selected` stays visible
pub fn visible_columns(weeks: usize, width: u16, selected: usize) -> Range<usize> {
    let fit = (width.saturating_sub(LABEL_WIDTH) / CELL_WIDTH) as usize;
    if weeks <= fit {
        return 0..weeks;
    }
    let start = (weeks - fit).min(selected);
    start..start + fit
}

/// Heatmap widget for ratatui
pub struct Heatmap<'a> {
    view: HeatmapView<'a>,
    theme: Theme,
    scale: ColorScale,
}

impl<'a> Heatmap<'a> {
    pub fn new(view: HeatmapView<'a>, theme: Theme) -> Self {
        Self {
            view,
            theme,
            scale: theme.heatmap_scale(),
        }
    }

    /// Replace the theme's default palette
    pub fn with_scale(mut self, scale: ColorScale) -> Self {
        self.scale = scale;
        self
    }

    /// Calculate x_offset for centering the heatmap
    fn calculate_x_offset(&self, area: Rect, columns: usize) -> u16 {
        let heatmap_width = LABEL_WIDTH + columns as u16 * CELL_WIDTH;
        area.width.saturating_sub(heatmap_width) / 2
    }

    /// Month label above the first column whose Saturday starts a new month.
    /// The column after a label stays empty so labels never overlap.
    fn render_month_labels(&self, buf: &mut Buffer, x: u16, y: u16, columns: Range<usize>) {
        let style = Style::default().fg(self.theme.muted());
        let mut last_month = None;
        let mut skip_next = false;

        for (idx, col) in columns.enumerate() {
            if skip_next {
                skip_next = false;
                continue;
            }
            let Some(saturday) = self
                .view
                .date_at(GridCoordinate::new(col as i64, DAYS_PER_WEEK as i64 - 1))
            else {
                continue;
            };
            let month = saturday.month();
            if last_month != Some(month) {
                last_month = Some(month);
                let cell_x = x + idx as u16 * CELL_WIDTH;
                buf.set_string(cell_x, y, MONTH_NAMES[month as usize], style);
                skip_next = true;
            }
        }
    }

    /// Render one weekday row: label then one glyph per visible week
    fn render_day_row(&self, buf: &mut Buffer, x: u16, y: u16, row: usize, columns: Range<usize>) {
        buf.set_string(
            x,
            y,
            WEEKDAY_LABELS[row],
            Style::default().fg(self.theme.muted()),
        );

        let start_x = x + LABEL_WIDTH;
        for (idx, col) in columns.enumerate() {
            let coord = GridCoordinate::new(col as i64, row as i64);
            let cell_x = start_x + idx as u16 * CELL_WIDTH;

            if coord == self.view.selection {
                let normalized = self.view.grid.cell(coord).map_or(0.0, |c| c.normalized);
                let style = Style::default()
                    .fg(self.scale.color(normalized))
                    .bg(self.theme.selection())
                    .add_modifier(Modifier::BOLD);
                buf.set_string(cell_x, y, CELL_GLYPH, style);
            } else if self.view.is_future(coord) {
                // Nothing to show after the reference date
                continue;
            } else if let Some(cell) = self.view.grid.cell(coord) {
                let style = Style::default().fg(self.scale.color(cell.normalized));
                buf.set_string(cell_x, y, CELL_GLYPH, style);
            }
        }
    }

    /// Render "Less ■ ■ ■ ■ ■ More"
    fn render_legend(&self, buf: &mut Buffer, x: u16, y: u16, max_x: u16) {
        let muted = Style::default().fg(self.theme.muted());
        let mut cursor = x;
        buf.set_string(cursor, y, "Less", muted);
        cursor += 5;
        for color in self.scale.colors() {
            if cursor + CELL_WIDTH > max_x {
                return;
            }
            buf.set_string(cursor, y, CELL_GLYPH, Style::default().fg(*color));
            cursor += CELL_WIDTH;
        }
        if cursor + 4 <= max_x {
            buf.set_string(cursor, y, "More", muted);
        }
    }
}

impl Widget for Heatmap<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width <= LABEL_WIDTH || area.height == 0 {
            return;
        }

        let columns = visible_columns(
            self.view.weeks,
            area.width,
            self.view.selection.column.max(0) as usize,
        );
        let x = area.x + self.calculate_x_offset(area, columns.len());
        let max_y = area.y + area.height;

        self.render_month_labels(buf, x + LABEL_WIDTH, area.y, columns.clone());

        for row in 0..DAYS_PER_WEEK {
            let y = area.y + 1 + row as u16;
            if y >= max_y {
                return;
            }
            self.render_day_row(buf, x, y, row, columns.clone());
        }

        let legend_y = area.y + HEATMAP_HEIGHT - 1;
        if legend_y < max_y {
            self.render_legend(buf, x + LABEL_WIDTH, legend_y, area.x + area.width);
        }
    }
}
