//! detrand CLI - print deterministic sample streams
//!
//! ```text
//! detrand --seed 42 --count 4                 # raw u64 values
//! detrand --seed 0x2a --kind i32 --min -5 --max 5
//! DETRAND_SEED=7 detrand --kind float
//! ```
//!
//! Without `--seed` the seed follows `DETRAND_SEED` (or OS entropy); the
//! resolved seed is logged so the run can be replayed. Set `RUST_LOG=info`
//! to see it.

use std::fmt::Display;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use detrand::{RandomEngine, SeedPolicy, SharedConfig};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Deterministic xorshift64* sample generator
#[derive(Parser)]
#[command(name = "detrand")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed: decimal, 0x-prefixed hex, or "entropy"
    #[arg(short, long, value_parser = SeedPolicy::parse)]
    seed: Option<SeedPolicy>,

    /// What to sample
    #[arg(short, long, value_enum, default_value_t = Kind::Raw)]
    kind: Kind,

    /// Lower bound (inclusive), defaults to the type minimum
    #[arg(long, allow_hyphen_values = true)]
    min: Option<String>,

    /// Upper bound (inclusive for integers, exclusive for floats), defaults to the type maximum
    #[arg(long, allow_hyphen_values = true)]
    max: Option<String>,

    /// Number of values to print
    #[arg(short = 'n', long, default_value = "4")]
    count: usize,

    /// Print values as hex (integer kinds only)
    #[arg(long)]
    hex: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    /// Raw 64-bit output
    Raw,
    U32,
    U64,
    I32,
    I64,
    /// Any i64 (raw bits reinterpreted)
    Int,
    /// f32 in [min, max), default [0, 1)
    Float,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match cli.seed {
        Some(seed) => SharedConfig { seed },
        None => SharedConfig::from_env().context("reading DETRAND_SEED")?,
    };
    config.validate()?;
    let seed = config.seed.resolve();
    info!(seed, policy = ?config.seed, "Seeded engine");

    let mut rng = RandomEngine::new(seed);
    let min = cli.min.as_deref();
    let max = cli.max.as_deref();

    match cli.kind {
        Kind::Raw => emit(cli.count, cli.hex, || rng.next_uint64()),
        Kind::Int => emit(cli.count, cli.hex, || rng.next_i64()),
        Kind::U32 => {
            let (lo, hi) = (bound(min, "min", 0u32)?, bound(max, "max", u32::MAX)?);
            emit(cli.count, cli.hex, || rng.next_uint(lo, hi))
        }
        Kind::U64 => {
            let (lo, hi) = (bound(min, "min", 0u64)?, bound(max, "max", u64::MAX)?);
            emit(cli.count, cli.hex, || rng.next_uint(lo, hi))
        }
        Kind::I32 => {
            let (lo, hi) = (bound(min, "min", i32::MIN)?, bound(max, "max", i32::MAX)?);
            emit(cli.count, cli.hex, || rng.next_int(lo, hi))
        }
        Kind::I64 => {
            let (lo, hi) = (bound(min, "min", i64::MIN)?, bound(max, "max", i64::MAX)?);
            emit(cli.count, cli.hex, || rng.next_int(lo, hi))
        }
        Kind::Float => {
            let (lo, hi) = (bound(min, "min", 0.0f32)?, bound(max, "max", 1.0f32)?);
            for _ in 0..cli.count {
                println!("{}", rng.next_float_in(lo, hi));
            }
        }
    }

    debug!(state = rng.state(), "Final engine state");
    Ok(())
}

fn bound<T>(value: Option<&str>, name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(text) => text
            .parse()
            .with_context(|| format!("invalid --{} {:?}", name, text)),
        None => Ok(default),
    }
}

fn emit<T: Display + std::fmt::LowerHex>(count: usize, hex: bool, mut next: impl FnMut() -> T) {
    for _ in 0..count {
        let value = next();
        if hex {
            println!("{:#x}", value);
        } else {
            println!("{}", value);
        }
    }
}
