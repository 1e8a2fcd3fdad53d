use crate::TableError;
use std::collections::BTreeMap;
use std::fmt;
use windowing::SampleSet;

/// Rows taken by the two-level header.
pub const HEADER_ROWS: usize = 2;
pub const COLUMNS: usize = 4;

pub type Position = (usize, usize);

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    /// One-based sample number.
    Index(usize),
    Price(f32),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(text) => f.write_str(text),
            Cell::Index(index) => write!(f, "{index}"),
            Cell::Price(price) => write!(f, "{price}"),
        }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_string())
    }
}

/// Grid of cells where `None` marks a cell covered by a neighbour's span.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayTable {
    rows: Vec<Vec<Option<Cell>>>,
    col_spans: BTreeMap<Position, usize>,
    row_spans: BTreeMap<Position, usize>,
}

impl DisplayTable {
    pub fn rows(&self) -> &[Vec<Option<Cell>>] {
        &self.rows
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row)?.get(col)?.as_ref()
    }

    pub fn col_spans(&self) -> &BTreeMap<Position, usize> {
        &self.col_spans
    }

    pub fn row_spans(&self) -> &BTreeMap<Position, usize> {
        &self.row_spans
    }

    fn push_row(&mut self, row: [Option<Cell>; COLUMNS]) {
        self.rows.push(row.into());
    }
}

pub fn build_table(samples: &SampleSet) -> Result<DisplayTable, TableError> {
    build_table_limited(samples, samples.len())
}

/// Lays out the first `limit` samples: one block of `T` body rows per sample,
/// with the sample number and target written once and spanned over the block.
pub fn build_table_limited(samples: &SampleSet, limit: usize) -> Result<DisplayTable, TableError> {
    if samples.is_empty() {
        return Err(TableError::EmptyDataset);
    }
    let window = samples.window();
    let shown = limit.min(samples.len());

    let mut table = DisplayTable::default();
    table.push_row([
        Some("Sample".into()),
        Some("Inputs".into()),
        None,
        Some("Outputs".into()),
    ]);
    table.push_row([
        None,
        Some("Day".into()),
        Some("Price".into()),
        Some("Price".into()),
    ]);
    table.col_spans.insert((0, 1), 2);
    table.row_spans.insert((0, 0), 2);

    for sample in 0..shown {
        let block_start = HEADER_ROWS + window * sample;
        for step in 0..window {
            let first = step == 0;
            table.push_row([
                first.then_some(Cell::Index(sample + 1)),
                Some(Cell::Text(format!("Day_{}", step + 1))),
                Some(Cell::Price(samples.input_at(sample, step))),
                first.then(|| Cell::Price(samples.target_at(sample))),
            ]);
        }
        table.row_spans.insert((block_start, 0), window);
        table.row_spans.insert((block_start, 3), window);
    }

    log::debug!(
        "laid out {shown} of {} samples in {} rows",
        samples.len(),
        table.rows.len()
    );
    Ok(table)
}
