//! Batch location of planets across epochs and rendering in the configured format.

use std::io::Write;

use kepler_config::{ConfigError, OutputFormat, RunConfig};
use kepler_export::{ExportError, PositionRecord, json, table, text};
use kepler_orbits::{Planet, PropagationError, locate};
use thiserror::Error;

/// Label printed above the sample-epoch block.
pub const SAMPLE_EPOCH_LABEL: &str = "mid November 2013";

/// Errors raised while building or writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Propagation(#[from] PropagationError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// A labelled epoch in Julian centuries past J2000.
#[derive(Debug, Clone, PartialEq)]
pub struct Epoch {
    pub label: String,
    pub centuries: f64,
}

impl Epoch {
    pub fn new(label: impl Into<String>, centuries: f64) -> Self {
        Self {
            label: label.into(),
            centuries,
        }
    }

    /// The demonstration epoch, mid November 2013.
    pub fn sample() -> Self {
        Self::new(SAMPLE_EPOCH_LABEL, kepler_core::time::MID_NOVEMBER_2013)
    }
}

/// All planets located at one epoch.
#[derive(Debug, Clone)]
pub struct EpochBlock {
    pub epoch: Epoch,
    pub records: Vec<PositionRecord>,
}

/// Epochs resolved from a [`RunConfig`], in file order.
pub fn epochs_from_config(config: &RunConfig) -> Result<Vec<Epoch>, ReportError> {
    config
        .epochs
        .iter()
        .map(|epoch| -> Result<Epoch, ReportError> {
            Ok(Epoch::new(epoch.label(), epoch.centuries()?))
        })
        .collect()
}

/// Locate every planet at every epoch, epoch-major and in the given planet order.
pub fn build_report(epochs: &[Epoch], planets: &[Planet]) -> Result<Vec<EpochBlock>, ReportError> {
    epochs
        .iter()
        .map(|epoch| -> Result<EpochBlock, ReportError> {
            let records = planets
                .iter()
                .map(|&planet| {
                    locate(planet, epoch.centuries)
                        .map(|position| PositionRecord::new(epoch.centuries, planet, &position))
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(EpochBlock {
                epoch: epoch.clone(),
                records,
            })
        })
        .collect()
}

/// Render report blocks to `writer`.
///
/// Text output prints each epoch label followed by its rows; CSV and JSON
/// flatten all blocks into a single table.
pub fn write_report(
    writer: &mut dyn Write,
    format: OutputFormat,
    blocks: &[EpochBlock],
) -> Result<(), ReportError> {
    match format {
        OutputFormat::Text => {
            for block in blocks {
                text::write_epoch_header(writer, &block.epoch.label)?;
                for record in &block.records {
                    text::write_row(writer, record)?;
                }
            }
        }
        OutputFormat::Csv => table::write_records(writer, &flatten(blocks))?,
        OutputFormat::Json => json::write_records(writer, &flatten(blocks))?,
    }
    writer.flush()?;
    Ok(())
}

fn flatten(blocks: &[EpochBlock]) -> Vec<PositionRecord> {
    blocks
        .iter()
        .flat_map(|block| block.records.iter().cloned())
        .collect()
}
