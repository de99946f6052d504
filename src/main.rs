use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use louver::IteratorWindows;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "louver", about = "Windowed and chunked views over line-delimited input")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Emit sliding windows over the input records.
    Windows {
        /// Input file (one record per line).
        input: PathBuf,
        /// Window length.
        #[arg(long)]
        size: usize,
        /// Offset between the starts of consecutive windows.
        #[arg(long, default_value_t = 1)]
        step: usize,
        /// Emit the trailing windows even when shorter than the window length.
        #[arg(long)]
        partial: bool,
    },
    /// Emit disjoint chunks of the input records, remainder included.
    Chunks {
        /// Input file (one record per line).
        input: PathBuf,
        /// Chunk length.
        #[arg(long)]
        size: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Windows {
            input,
            size,
            step,
            partial,
        } => run_windows(input, size, step, partial)?,
        Commands::Chunks { input, size } => run_chunks(input, size)?,
    }

    Ok(())
}

fn run_windows(input: PathBuf, size: usize, step: usize, partial: bool) -> Result<()> {
    let records = read_records(&input)?;
    let windows = records
        .into_iter()
        .windowed(size, step, partial)
        .with_context(|| format!("invalid window shape (size={size}, step={step})"))?;

    for (idx, window) in windows.enumerate() {
        println!("window {}\t{}", idx + 1, window.join("\t"));
    }

    Ok(())
}

fn run_chunks(input: PathBuf, size: usize) -> Result<()> {
    let records = read_records(&input)?;
    let chunks = records
        .into_iter()
        .chunked(size)
        .with_context(|| format!("invalid chunk size {size}"))?;

    for (idx, chunk) in chunks.enumerate() {
        println!("chunk {}\t{}", idx + 1, chunk.join("\t"));
    }

    Ok(())
}

fn read_records(path: &PathBuf) -> Result<Vec<String>> {
    let reader = BufReader::new(
        File::open(path).with_context(|| format!("failed to open input {}", path.display()))?,
    );

    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(line);
    }
    Ok(records)
}
