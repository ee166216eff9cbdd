use anyhow::Context;
use clap::Parser;
use grade_book::storage::DEFAULT_DATA_FILE;
use grade_book::{Config, CLI};
use std::path::PathBuf;

/// Interactive student grade book backed by a JSON file
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File the roster is saved to after every change
    #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
    file: PathBuf,

    /// Load the roster from the file before showing the menu
    #[arg(long)]
    load: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = Config::new(args.file).with_load_on_start(args.load);

    let mut cli = CLI::stdio(config.clone())
        .with_context(|| format!("Failed to load {}", config.data_file.display()))?;
    cli.run()?;
    Ok(())
}
