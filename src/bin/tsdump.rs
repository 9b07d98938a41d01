use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use toggle_set::driver::{self, OverflowPolicy};
use toggle_set::{CAPACITY, Toggle, find_input};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Parser, Debug)]
#[command(version, about = "Replay toggle input and print every step", long_about = None)]
struct Args {
    /// Read from this file instead of standard input
    #[arg(short, long)]
    input: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,
}

fn color_choice(mode: ColorMode) -> ColorChoice {
    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto => {
            if atty::is(atty::Stream::Stdout) {
                ColorChoice::Auto
            } else {
                ColorChoice::Never
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut out = StandardStream::stdout(color_choice(args.color));
    let reader = find_input(args.input.as_deref()).open()?;

    let outcome = driver::run_with(reader, OverflowPolicy::Drop, |step, set| {
        let (label, color) = match step.outcome {
            Toggle::Inserted { slot } => (format!("inserted@{}", slot), Color::Green),
            Toggle::Removed { slot } => (format!("removed@{}", slot), Color::Yellow),
            Toggle::Dropped => ("dropped".to_string(), Color::Red),
        };
        write!(out, "#{} {} -> ", step.index + 1, step.value)?;
        out.set_color(ColorSpec::new().set_fg(Some(color)))?;
        write!(out, "{}", label)?;
        out.reset()?;
        writeln!(out, " {}", set)
    })
    .context("failed to replay input")?;

    println!("Slots ({}/{}):", outcome.set.len(), CAPACITY);
    for (i, s) in outcome.set.slots().iter().enumerate() {
        match s {
            Some(v) => println!("  {}: {}", i, v),
            None => println!("  {}: empty", i),
        }
    }
    println!("Toggles: {} ({} dropped)", outcome.toggles, outcome.dropped);
    println!("Report: {}", outcome.report);

    Ok(())
}
