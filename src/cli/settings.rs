//! Resolved run settings
//!
//! Every command line option is folded into one `Settings` value before the
//! model is built, filling in defaults for the data path and reference date.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use directories::BaseDirs;

use super::Cli;
use crate::services::DataLoader;
use crate::tui::Theme;
use crate::types::{DataPoint, HeatcalError, Result};

/// Data file used when `--data` is not given, relative to the home directory
const DEFAULT_DATA_FILE: &str = ".heatcal/data.json";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub data_path: PathBuf,
    /// Whether `data_path` was named explicitly (missing file is then an error)
    pub data_explicit: bool,
    pub weeks: usize,
    pub reference_date: NaiveDate,
    /// `None` means detect from the terminal
    pub theme: Option<Theme>,
}

impl Settings {
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let (data_path, data_explicit) = match &cli.data {
            Some(path) => (path.clone(), true),
            None => (default_data_path()?, false),
        };

        Ok(Self {
            data_path,
            data_explicit,
            weeks: cli.weeks as usize,
            reference_date: cli.date.unwrap_or_else(|| Local::now().date_naive()),
            theme: cli.theme.map(Theme::from),
        })
    }

    /// Load the configured data file
    pub fn load_data_points(&self) -> Result<Vec<DataPoint>> {
        if self.data_explicit {
            DataLoader::load(&self.data_path)
        } else {
            DataLoader::load_or_empty(&self.data_path)
        }
    }
}

/// `~/.heatcal/data.json`
pub fn default_data_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new()
        .ok_or_else(|| HeatcalError::Config("Cannot determine home directory".into()))?;
    Ok(base_dirs.home_dir().join(Path::new(DEFAULT_DATA_FILE)))
}
