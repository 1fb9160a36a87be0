//! Run configuration models and loaders for the Keplerian planet locator.

use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use kepler_core::time::{centuries_from_date, centuries_from_year_day};
use kepler_orbits::{Planet, PropagationError};
use serde::Deserialize;
use thiserror::Error;

/// A batch of epochs and planets to locate, parsed from YAML or TOML.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RunConfig {
    #[serde(default)]
    pub epochs: Vec<EpochConfig>,
    /// Planet names or table indices; empty means all nine.
    #[serde(default)]
    pub planets: Vec<String>,
    #[serde(default)]
    pub format: OutputFormat,
    /// Output path; `-` or absent writes to stdout.
    #[serde(default)]
    pub output: Option<String>,
}

/// One epoch, given either directly in centuries or as a calendar date.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum EpochConfig {
    Centuries { centuries: f64 },
    YearDay { year: i32, day_of_year: f64 },
    Date { date: String },
}

/// Report format for located positions.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid date `{date}` (expected YYYY-MM-DD)")]
    InvalidDate { date: String },
    #[error("unsupported config extension for {path}")]
    UnsupportedExtension { path: String },
    #[error(transparent)]
    Planet(#[from] PropagationError),
}

impl EpochConfig {
    /// Julian centuries past J2000 for this epoch.
    pub fn centuries(&self) -> Result<f64, ConfigError> {
        match self {
            EpochConfig::Centuries { centuries } => Ok(*centuries),
            EpochConfig::YearDay { year, day_of_year } => {
                Ok(centuries_from_year_day(*year, *day_of_year))
            }
            EpochConfig::Date { date } => parse_date(date).map(centuries_from_date),
        }
    }

    /// Human-readable label for reports.
    pub fn label(&self) -> String {
        match self {
            EpochConfig::Centuries { centuries } => format!("T{centuries:+}"),
            EpochConfig::YearDay { year, day_of_year } => format!("{year} day {day_of_year}"),
            EpochConfig::Date { date } => date.clone(),
        }
    }
}

impl RunConfig {
    /// Resolve the configured planet list, defaulting to every planet.
    pub fn planets(&self) -> Result<Vec<Planet>, ConfigError> {
        if self.planets.is_empty() {
            return Ok(Planet::ALL.to_vec());
        }
        self.planets
            .iter()
            .map(|name| name.parse::<Planet>().map_err(ConfigError::from))
            .collect()
    }

    /// Resolve every epoch to Julian centuries, preserving order.
    pub fn epoch_centuries(&self) -> Result<Vec<f64>, ConfigError> {
        self.epochs.iter().map(EpochConfig::centuries).collect()
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(date: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|_| ConfigError::InvalidDate {
        date: date.to_string(),
    })
}

/// Load a run configuration from a `.yaml`/`.yml` or `.toml` file.
pub fn load_run_config<P: AsRef<Path>>(path: P) -> Result<RunConfig, ConfigError> {
    let path = path.as_ref();
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => {
            let contents = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&contents)?)
        }
        Some("yaml") | Some("yml") => {
            let reader = File::open(path)?;
            Ok(serde_yaml::from_reader(reader)?)
        }
        _ => Err(ConfigError::UnsupportedExtension {
            path: path.display().to_string(),
        }),
    }
}
