//! Merged-cell preview of a windowed dataset.

use std::io::{self, Write};
use windowing::SampleSet;

pub mod layout;
mod render;

pub use layout::{build_table, build_table_limited, Cell, DisplayTable, HEADER_ROWS};

#[derive(thiserror::Error, Debug)]
pub enum TableError {
    #[error("cannot display an empty dataset")]
    EmptyDataset,
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Prints the `n = .., T = ..` summary and the sample table to stdout,
/// showing at most `limit` samples when one is given.
pub fn display_samples(samples: &SampleSet, limit: Option<usize>) -> Result<(), TableError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_samples(&mut out, samples, limit)
}

/// Writes the summary line and a table of at most `limit` samples.
pub fn write_samples<W: Write>(
    out: &mut W,
    samples: &SampleSet,
    limit: Option<usize>,
) -> Result<(), TableError> {
    let table = build_table_limited(samples, limit.unwrap_or(samples.len()))?;
    writeln!(out, "n = {}, T = {}", samples.len(), samples.window())?;
    writeln!(out, "{}", table.render())?;
    Ok(())
}
