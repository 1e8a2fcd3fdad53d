use crate::{LoaderConfig, LoaderError};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::path::Path;

/// Cell contents read as a missing price rather than a parse failure.
pub const MISSING_VALUE_TOKENS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Reads the configured value column for rows whose symbol column equals
/// `config.symbol`, in file order.
pub fn load_series<P: AsRef<Path>>(path: P, config: &LoaderConfig) -> Result<Vec<f64>, LoaderError> {
    config.validate()?;
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .delimiter(config.delimiter_byte())
        .from_reader(file);

    let headers = reader.headers()?.clone();
    let symbol_idx = column_index(&headers, &config.symbol_column)?;
    let value_idx = column_index(&headers, &config.value_column)?;

    let mut series = Vec::new();
    let mut rows = 0usize;
    for record in reader.records() {
        let record = record?;
        rows += 1;
        if record.get(symbol_idx) != Some(config.symbol.as_str()) {
            continue;
        }
        let raw = record.get(value_idx).unwrap_or_default();
        let value = parse_value(raw).ok_or_else(|| LoaderError::InvalidValue {
            line: record.position().map(|pos| pos.line()).unwrap_or_default(),
            value: raw.to_string(),
        })?;
        series.push(value);
    }

    log::info!(
        "{}: {rows} rows read, {} matched {}='{}'",
        path.display(),
        series.len(),
        config.symbol_column,
        config.symbol
    );
    Ok(series)
}

/// Missing-value tokens become NaN; anything else must parse as a float.
pub fn parse_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if MISSING_VALUE_TOKENS.contains(&trimmed) {
        return Some(f64::NAN);
    }
    trimmed.parse::<f64>().ok()
}

fn column_index(headers: &StringRecord, name: &str) -> Result<usize, LoaderError> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| LoaderError::MissingColumn(name.to_string()))
}
