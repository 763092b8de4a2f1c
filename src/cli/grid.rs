//! Non-interactive grid output

use chrono::NaiveDate;
use serde::Serialize;

use crate::services::HeatmapModel;
use crate::types::{GridCoordinate, DAYS_PER_WEEK};

/// Palette size assumed by the text output (buckets 0..=4)
const TEXT_BUCKETS: f64 = 4.0;

const WEEKDAYS: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Serialize)]
struct GridExport {
    reference_date: NaiveDate,
    weeks: usize,
    cells: Vec<CellExport>,
}

#[derive(Debug, Serialize)]
struct CellExport {
    date: NaiveDate,
    column: i64,
    row: i64,
    actual: f64,
    normalized: f64,
}

fn text_bucket(normalized: f64) -> u8 {
    (normalized * TEXT_BUCKETS).floor().clamp(0.0, TEXT_BUCKETS) as u8
}

/// One line per weekday: bucket digit per week, `.` after the reference date
pub fn render_text(model: &HeatmapModel) -> String {
    let view = model.current_view();
    let mut lines = Vec::with_capacity(DAYS_PER_WEEK);

    for (row, label) in WEEKDAYS.iter().enumerate() {
        let mut line = format!("{} ", label);
        for column in 0..view.weeks {
            let coord = GridCoordinate::new(column as i64, row as i64);
            let symbol = match view.grid.cell(coord) {
                Some(_) if view.is_future(coord) => '.',
                Some(cell) => char::from(b'0' + text_bucket(cell.normalized)),
                None => ' ',
            };
            line.push(symbol);
        }
        lines.push(line);
    }

    lines.join("\n")
}

/// Every non-future cell as pretty JSON, column by column
pub fn render_json(model: &HeatmapModel) -> anyhow::Result<String> {
    let view = model.current_view();
    let cells = view
        .grid
        .iter()
        .filter(|(coord, _)| !view.is_future(*coord))
        .filter_map(|(coord, cell)| {
            Some(CellExport {
                date: view.date_at(coord)?,
                column: coord.column,
                row: coord.row,
                actual: cell.actual,
                normalized: cell.normalized,
            })
        })
        .collect();

    let export = GridExport {
        reference_date: view.reference_date,
        weeks: view.weeks,
        cells,
    };
    Ok(serde_json::to_string_pretty(&export)?)
}
