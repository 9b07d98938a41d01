use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use toggle_set::driver::{self, OverflowPolicy};
use toggle_set::find_input;
use toggle_set::report::{DEFAULT_EMPTY, Report};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Toggle integers in and out of a four-slot set",
    long_about = None
)]
struct Args {
    /// Read the count and values from this file instead of standard input
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Number an empty slot sorts and prints as
    #[arg(long, default_value_t = DEFAULT_EMPTY, allow_hyphen_values = true)]
    empty: i32,

    /// Fail instead of dropping a value when all slots are taken
    #[arg(long)]
    strict: bool,

    /// Log every toggle to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let policy = if args.strict { OverflowPolicy::Fail } else { OverflowPolicy::Drop };

    let source = find_input(args.input.as_deref());
    let reader = source.open()?;
    let outcome = driver::run(reader, policy).context("failed to process input")?;

    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", Report::with_empty(&outcome.set, args.empty))?;
    out.flush()?;

    Ok(())
}
