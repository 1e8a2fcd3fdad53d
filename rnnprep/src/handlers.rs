use crate::commands::*;
use crate::output::*;
use price_loader::{get_data_with, LoaderConfig, LoaderError};
use sample_table::display_samples;

pub fn handle_command(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Preview { source, limit } => handle_preview(&source, limit)?,
        Commands::Shape { source } => handle_shape(&source)?,
        Commands::Config { output } => {
            let config = LoaderConfig::default();
            match output {
                Some(path) => {
                    config.save_to_file(&path)?;
                    print_info(&format!("Config written to {}", path.display()));
                }
                None => print_config(&config.to_toml_string()?),
            }
        }
    }
    Ok(())
}

fn handle_preview(
    source: &SourceArgs,
    limit: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = loader_config(source)?;
    let samples = get_data_with(&source.path, &config)?;
    if samples.is_empty() {
        print_no_samples(&config);
        return Ok(());
    }
    display_samples(&samples, limit)?;
    Ok(())
}

fn handle_shape(source: &SourceArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = loader_config(source)?;
    let samples = get_data_with(&source.path, &config)?;
    print_shape(&samples);
    Ok(())
}

fn loader_config(source: &SourceArgs) -> Result<LoaderConfig, LoaderError> {
    let mut config = match &source.config {
        Some(path) => LoaderConfig::load_from_file(path)?,
        None => LoaderConfig::default(),
    };
    if let Some(symbol) = &source.symbol {
        config.symbol = symbol.clone();
    }
    if let Some(column) = &source.column {
        config.value_column = column.clone();
    }
    if let Some(window) = source.window {
        config.window = window;
    }
    config.validate()?;
    log::debug!("loader config: {config:?}");
    Ok(config)
}
