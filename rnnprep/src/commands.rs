use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rnnprep",
    version,
    about = "Sliding-window sample preparation for price series"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the samples as a merged-cell table
    Preview {
        #[command(flatten)]
        source: SourceArgs,
        /// Show at most this many samples
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print the shapes of X and y
    Shape {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Print the default loader config as TOML
    Config {
        /// Write the config to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
pub struct SourceArgs {
    /// Delimited file with a header row
    pub path: PathBuf,
    /// TOML loader config; flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub symbol: Option<String>,
    /// Column holding the price to window
    #[arg(long)]
    pub column: Option<String>,
    #[arg(long)]
    pub window: Option<usize>,
}
