use crate::LoaderError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use windowing::DEFAULT_WINDOW;

pub const DEFAULT_SYMBOL: &str = "YHOO";
pub const DEFAULT_SYMBOL_COLUMN: &str = "symbol";
pub const DEFAULT_VALUE_COLUMN: &str = "high";

/// Which rows to keep, which column to project and how long each window is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub symbol: String,
    pub symbol_column: String,
    pub value_column: String,
    pub window: usize,
    pub delimiter: char,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            symbol: DEFAULT_SYMBOL.to_string(),
            symbol_column: DEFAULT_SYMBOL_COLUMN.to_string(),
            value_column: DEFAULT_VALUE_COLUMN.to_string(),
            window: DEFAULT_WINDOW,
            delimiter: ',',
        }
    }
}

impl LoaderConfig {
    pub fn validate(&self) -> Result<(), LoaderError> {
        if self.window == 0 {
            return Err(LoaderError::InvalidConfig(
                "window must be at least 1".to_string(),
            ));
        }
        if self.symbol_column.trim().is_empty() {
            return Err(LoaderError::InvalidConfig(
                "symbol_column must not be empty".to_string(),
            ));
        }
        if self.value_column.trim().is_empty() {
            return Err(LoaderError::InvalidConfig(
                "value_column must not be empty".to_string(),
            ));
        }
        if !self.delimiter.is_ascii() {
            return Err(LoaderError::InvalidConfig(format!(
                "delimiter '{}' is not a single-byte character",
                self.delimiter
            )));
        }
        Ok(())
    }

    pub fn delimiter_byte(&self) -> u8 {
        // validate() rejects non-ASCII delimiters
        self.delimiter as u8
    }

    pub fn to_toml_string(&self) -> Result<String, LoaderError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), LoaderError> {
        let data = self.to_toml_string()?;
        fs::write(path, data)?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let data = fs::read_to_string(path)?;
        let config: LoaderConfig = toml::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_select_yahoo_highs() {
        let config = LoaderConfig::default();
        assert_eq!(config.symbol, "YHOO");
        assert_eq!(config.symbol_column, "symbol");
        assert_eq!(config.value_column, "high");
        assert_eq!(config.window, 5);
        assert_eq!(config.delimiter, ',');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: LoaderConfig = toml::from_str("symbol = \"GOOG\"\nwindow = 3\n").unwrap();
        assert_eq!(config.symbol, "GOOG");
        assert_eq!(config.window, 3);
        assert_eq!(config.value_column, "high");
    }

    #[test]
    fn zero_window_fails_validation() {
        let config = LoaderConfig {
            window: 0,
            ..LoaderConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LoaderError::InvalidConfig(_))
        ));
    }

    #[test]
    fn wide_delimiter_fails_validation() {
        let config = LoaderConfig {
            delimiter: '¦',
            ..LoaderConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
