use std::path::PathBuf;

use clap::Parser;

/// Terminal editor for a product's descriptive parameters
#[derive(Parser, Debug, Clone)]
#[command(name = "paramedit")]
#[command(version)]
#[command(about = "Edit product parameters in the terminal", long_about = None)]
pub struct Cli {
    /// JSON file with `params` and `model`; the built-in demo data when omitted
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Config file to use instead of the per-user one
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); overrides the config
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the final model as JSON after leaving the editor
    #[arg(long, default_value_t = false)]
    pub dump_model: bool,
}
