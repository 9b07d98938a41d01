pub mod toggle_set;
pub mod input;
pub mod report;
pub mod driver;

pub use toggle_set::{CAPACITY, Toggle, ToggleSet};

use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::Context;

/// Environment variable naming a default input file.
pub const INPUT_ENV: &str = "TOGGLESET_INPUT";

/// Where the count and values are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

/// Pick the input using the following priority:
/// 1. An explicit path from the command line
/// 2. TOGGLESET_INPUT, if it names an existing file
/// 3. Standard input
pub fn find_input(explicit: Option<&Path>) -> InputSource {
    if let Some(p) = explicit {
        return InputSource::File(p.to_path_buf());
    }

    if let Ok(env_path) = env::var(INPUT_ENV).map(|p| p.trim().to_string()) {
        if Path::new(&env_path).is_file() {
            return InputSource::File(PathBuf::from(env_path));
        }
        if !env_path.is_empty() {
            log::warn!("{}={:?} is not a file, reading standard input", INPUT_ENV, env_path);
        }
    }

    InputSource::Stdin
}

impl InputSource {
    pub fn open(&self) -> anyhow::Result<Box<dyn BufRead>> {
        match self {
            InputSource::File(p) => {
                let file = File::open(p)
                    .with_context(|| format!("failed to open input {}", p.display()))?;
                Ok(Box::new(BufReader::new(file)))
            }
            InputSource::Stdin => {
                if atty::is(atty::Stream::Stdin) {
                    log::info!("reading values from the terminal; end with EOF");
                }
                Ok(Box::new(io::stdin().lock()))
            }
        }
    }
}
