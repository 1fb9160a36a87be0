//! Export helpers for located planet positions: plain text, CSV, and JSON.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use kepler_orbits::{Planet, Position};
use serde::Serialize;
use thiserror::Error;

/// Errors raised while writing reports.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

/// One located planet at one epoch, flattened for tabular output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionRecord {
    pub epoch_centuries: f64,
    pub planet: &'static str,
    pub index: usize,
    pub x_au: f64,
    pub y_au: f64,
    pub z_au: f64,
    pub distance_au: f64,
    pub angle_deg: f64,
}

impl PositionRecord {
    pub fn new(epoch_centuries: f64, planet: Planet, position: &Position) -> Self {
        Self {
            epoch_centuries,
            planet: planet.name(),
            index: planet.index(),
            x_au: position.x,
            y_au: position.y,
            z_au: position.z,
            distance_au: position.distance(),
            angle_deg: position.angle_from_x_axis_deg(),
        }
    }
}

/// Tab-separated console layout: `name<TAB>angle°<TAB>(x:…  y:…  z:…)`.
pub mod text {
    use std::io::{self, Write};

    use super::PositionRecord;

    /// Write the line that introduces one epoch's block of rows.
    pub fn write_epoch_header(writer: &mut dyn Write, label: &str) -> io::Result<()> {
        writeln!(writer, "{label}")
    }

    /// Write one row; the angle is truncated toward zero to whole degrees.
    pub fn write_row(writer: &mut dyn Write, record: &PositionRecord) -> io::Result<()> {
        writeln!(
            writer,
            "{}\t{}°\t(x:{:.3}  y:{:.3}  z:{:.3})",
            record.planet,
            record.angle_deg.trunc() as i64,
            record.x_au,
            record.y_au,
            record.z_au
        )
    }
}

/// CSV output with a header row derived from [`PositionRecord`].
pub mod table {
    use std::io::Write;

    use super::{ExportError, PositionRecord};

    pub const HEADER: &str =
        "epoch_centuries,planet,index,x_au,y_au,z_au,distance_au,angle_deg";

    /// Serialize all records, header first.
    pub fn write_records(
        writer: &mut dyn Write,
        records: &[PositionRecord],
    ) -> Result<(), ExportError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        if records.is_empty() {
            csv_writer.write_record(HEADER.split(','))?;
        }
        for record in records {
            csv_writer.serialize(record)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// Pretty-printed JSON array output.
pub mod json {
    use std::io::Write;

    use serde_json::to_writer_pretty;

    use super::{ExportError, PositionRecord};

    pub fn write_records(
        writer: &mut dyn Write,
        records: &[PositionRecord],
    ) -> Result<(), ExportError> {
        to_writer_pretty(&mut *writer, records)?;
        writeln!(writer)?;
        Ok(())
    }
}
