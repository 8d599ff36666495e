use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod files;
mod parse;
mod paths;
mod pipeline;
mod record;

use pipeline::Config;

#[derive(Parser, Debug)]
#[command(
    name = "csv2json",
    version,
    about = "Convert a headered CSV file into a pretty-printed JSON array"
)]
struct Cli {
    /// CSV file to read, resolved against the base directory
    #[arg(long, value_name = "PATH", default_value = pipeline::DEFAULT_INPUT)]
    input: PathBuf,

    /// JSON file to write; an existing file is never overwritten
    #[arg(long, value_name = "PATH", default_value = pipeline::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Directory relative paths resolve against (default: the executable's directory)
    #[arg(long, value_name = "DIR")]
    base_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config {
        base_dir: cli.base_dir,
        input: cli.input,
        output: cli.output,
    };

    let summary = pipeline::run(&config)?;
    println!(
        "Wrote {} records to {}",
        summary.record_count,
        summary.output.display()
    );
    Ok(())
}
