use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "statsheet")]
#[command(about = "Flatten a Minecraft stats folder into one CSV spreadsheet")]
#[command(version)]
pub struct CliArgs {
    /// Path to the world's stats folder (the directory holding the
    /// per-player <uuid>.json files, e.g. world/stats)
    #[arg(value_name = "STATS_DIR")]
    pub stats_dir: PathBuf,

    /// Where to write the CSV spreadsheet
    #[arg(long, short = 'o', value_name = "FILE", default_value = "stats.csv")]
    pub output: PathBuf,

    /// Skip Mojang name lookups and label columns with raw UUIDs
    /// (useful on air-gapped servers)
    #[arg(long)]
    pub offline: bool,

    /// Maximum number of name lookups in flight at once
    #[arg(long, value_name = "N", default_value = "8")]
    pub concurrency: usize,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.concurrency == 0 {
            return Err("--concurrency must be at least 1".to_string());
        }

        if self.output.as_os_str().is_empty() {
            return Err("--output path must not be empty".to_string());
        }

        Ok(())
    }
}
