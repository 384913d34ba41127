//! CLI entry point for grid cell analysis

use cellstat::io::cli::{Cli, FileProcessor};
use clap::Parser;

fn main() -> cellstat::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.run()
}
