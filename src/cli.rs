use std::path::PathBuf;

use clap::Parser;

/// Command line arguments for the querybar demo shell.
#[derive(Debug, Default, Parser)]
#[command(
    name = "querybar",
    version,
    about = "Interactive search-input controller demo"
)]
pub(crate) struct CliArgs {
    /// Path to a TOML configuration file.
    #[arg(long, env = "QUERYBAR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the suggestion debounce interval, in milliseconds.
    #[arg(long)]
    pub debounce_ms: Option<u64>,

    /// JSON file holding the demo corpus of result items.
    #[arg(long)]
    pub seed: Option<PathBuf>,

    /// JSON file the search history is loaded from and saved to.
    #[arg(long)]
    pub history_file: Option<PathBuf>,

    /// Print the effective configuration before starting.
    #[arg(long)]
    pub print_config: bool,
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
    CliArgs::parse()
}
