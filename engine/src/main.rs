use std::{io::Write, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use engine::{
    Engine, EngineConfig,
    constants::{NAME, NETWORK_PATH, THREADS, TT_SIZE, VERSION, ZOBRIST_SEED},
    uci,
};

#[derive(Parser, Debug)]
#[command(version, about = "UCI chess engine", long_about = None)]
struct Args {
    /// Transposition table size in MiB
    #[arg(long, default_value_t = TT_SIZE)]
    hash: usize,

    /// Search threads, the main thread included
    #[arg(long, default_value_t = THREADS)]
    threads: usize,

    /// Evaluation network file
    #[arg(long, default_value = NETWORK_PATH)]
    network: PathBuf,

    /// Zobrist key seed
    #[arg(long, default_value_t = ZOBRIST_SEED)]
    seed: u64,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

impl From<Args> for EngineConfig {
    fn from(args: Args) -> Self {
        Self {
            hash_mb: args.hash,
            threads: args.threads,
            network_path: args.network,
            zobrist_seed: args.seed,
        }
    }
}

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "info" };

    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .write_style(env_logger::WriteStyle::Never)
    .target(env_logger::Target::Stderr)
    .init();
}

fn run(args: Args) -> Result<()> {
    let mut engine = Engine::bootstrap(args.into()).context("bootstrap failed")?;

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    uci::run(&mut engine, stdin, stdout).context("command loop failed")?;

    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.debug);

    log::info!("{NAME} {VERSION}");

    if let Err(err) = run(args) {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}
