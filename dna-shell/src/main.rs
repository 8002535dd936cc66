use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use dna_radix::RandomConfig;

mod command;
mod render;
mod shell;

use shell::Shell;

/// Interactive shell over a radix tree of DNA sequences
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for random sequence generation (default: from entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Insert this many random sequences before reading commands
    #[arg(long, default_value_t = 0)]
    fill: usize,

    /// Shortest random sequence
    #[arg(long, default_value_t = 10)]
    min_len: usize,

    /// Longest random sequence
    #[arg(long, default_value_t = 100)]
    max_len: usize,

    /// Read commands from this file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Verbose/info output (default: warnings only)
    #[arg(long, short = 'v', alias = "info")]
    verbose: bool,

    /// Debug output
    #[arg(long)]
    debug: bool,

    /// Trace output
    #[arg(long)]
    trace: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.trace {
        "trace"
    } else if args.debug {
        "debug"
    } else if args.verbose {
        "info"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = RandomConfig::new(args.min_len, args.max_len)
        .context("invalid random sequence length bounds")?;
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(
        "random sequences of {}..={} bases, seed {:?}",
        config.min_len(),
        config.max_len(),
        args.seed
    );

    let stdin = io::stdin();
    let mut shell = Shell::new(rng, config).with_prompt(args.script.is_none() && stdin.is_terminal());

    if args.fill > 0 {
        let added = shell.fill(args.fill);
        info!("pre-filled {} sequences ({} new)", args.fill, added);
    }

    let stdout = io::stdout().lock();
    match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            shell.run(BufReader::new(file), stdout)
        }
        None => shell.run(stdin.lock(), stdout),
    }
}
