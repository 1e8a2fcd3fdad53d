//! Loads one symbol's price column from a delimited file and windows it.

use std::path::Path;
use windowing::{make_samples, SampleSet, WindowError};

pub mod config;
pub mod series;

pub use config::LoaderConfig;
pub use series::load_series;

#[derive(thiserror::Error, Debug)]
pub enum LoaderError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("config parse error: {0}")]
    TomlDe(#[from] toml::de::Error),
    #[error("config write error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("missing column '{0}'")]
    MissingColumn(String),
    #[error("line {line}: '{value}' is not a number")]
    InvalidValue { line: u64, value: String },
    #[error("window error: {0}")]
    Window(#[from] WindowError),
}

/// Windowed `YHOO` highs from the file at `path`, five observations per sample.
pub fn get_data<P: AsRef<Path>>(path: P) -> Result<SampleSet, LoaderError> {
    get_data_with(path, &LoaderConfig::default())
}

pub fn get_data_with<P: AsRef<Path>>(
    path: P,
    config: &LoaderConfig,
) -> Result<SampleSet, LoaderError> {
    let series = load_series(path, config)?;
    Ok(make_samples(&series, config.window)?)
}
