use crate::services::tree::DEFAULT_MAX_LEVEL;
use clap::Parser;
use std::path::PathBuf;

/// Print a directory tree, limited to a maximum depth.
#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(version)]
#[command(about, long_about = None)]
pub struct Cli {
    /// Directory to start from
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Maximum depth to descend (1 = direct children only)
    #[arg(short = 'L', long = "level", default_value_t = DEFAULT_MAX_LEVEL)]
    pub max_level: u32,
}
