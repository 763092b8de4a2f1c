mod grid;
mod logging;
mod settings;

use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use crate::services::{data_loader::parse_date, HeatmapModel};
use crate::tui::{self, Theme};

pub use settings::Settings;

/// GitHub-style contribution heatmap for the terminal
#[derive(Parser)]
#[command(name = "heatcal")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON data file [default: ~/.heatcal/data.json]
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Number of weeks to show
    #[arg(short, long, default_value_t = 52, global = true,
          value_parser = clap::value_parser!(u16).range(1..))]
    weeks: u16,

    /// Reference date (YYYY-MM-DD) [default: today]
    #[arg(long, global = true, value_parser = parse_reference_date)]
    date: Option<NaiveDate>,

    /// Color theme [default: detected from the terminal]
    #[arg(long, value_enum, global = true)]
    theme: Option<ThemeArg>,

    /// Write logs to this file (filter with HEATCAL_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch interactive TUI (default)
    Tui,

    /// Print the aggregated grid
    Grid {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => Theme::Dark,
            ThemeArg::Light => Theme::Light,
        }
    }
}

fn parse_reference_date(raw: &str) -> Result<NaiveDate, String> {
    parse_date(raw).map_err(|e| e.to_string())
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        if let Some(path) = &self.log_file {
            logging::init(path)?;
        }

        let settings = Settings::resolve(&self)?;
        info!(
            weeks = settings.weeks,
            reference = %settings.reference_date,
            data = %settings.data_path.display(),
            "starting"
        );

        let points = settings.load_data_points()?;
        let model = HeatmapModel::new(points, settings.reference_date, settings.weeks)
            .context("failed to build heatmap")?;

        match self.command {
            None | Some(Commands::Tui) => {
                // Detect before raw mode takes over the terminal
                let theme = settings.theme.unwrap_or_else(Theme::detect);
                tui::run(model, theme)
            }
            Some(Commands::Grid { json }) => {
                let output = if json {
                    grid::render_json(&model)?
                } else {
                    grid::render_text(&model)
                };
                println!("{}", output);
                Ok(())
            }
        }
    }
}
