use crate::config::TidyConfig;
use crate::core::{capostrophe, frac, hms, nullify_json};
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::io::Read;

#[derive(Debug, Clone, Parser)]
#[command(name = "tidy")]
#[command(about = "Normalize field values, durations, fractions and names")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Format elapsed seconds as HH:MM:SS[.ff]
    Hms {
        #[arg(allow_negative_numbers = true)]
        seconds: f64,
        #[arg(short, long)]
        decimals: Option<u32>,
    },
    /// Print the fractional part of a number
    Frac {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        #[arg(short, long)]
        decimals: Option<u32>,
    },
    /// Fix capitalization after an apostrophe in a name
    Capostrophe {
        name: String,
        /// Print the name unchanged when there is nothing to fix
        #[arg(long)]
        keep: bool,
    },
    /// Replace blank values with null in a JSON object or array of objects
    Nullify {
        /// Input file; reads stdin when omitted
        file: Option<String>,
    },
}

/// What a command produced: text for stdout and the process exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: Option<String>,
    pub exit_code: i32,
}

impl Outcome {
    fn printed(output: String) -> Self {
        Self {
            output: Some(output),
            exit_code: 0,
        }
    }
}

impl Command {
    /// Runs the command. `stdin` is only read by `nullify` without a file.
    pub fn execute<R: Read>(&self, config: &TidyConfig, mut stdin: R) -> Result<Outcome> {
        match self {
            Command::Hms { seconds, decimals } => {
                let decimals = decimals.unwrap_or_else(|| config.duration_decimals());
                Ok(Outcome::printed(hms(*seconds, decimals)?))
            }
            Command::Frac { value, decimals } => {
                let decimals = decimals.unwrap_or_else(|| config.fraction_decimals());
                Ok(Outcome::printed(frac(*value, decimals)?.to_string()))
            }
            Command::Capostrophe { name, keep } => match capostrophe(name) {
                Some(fixed) => Ok(Outcome::printed(fixed)),
                None if *keep => Ok(Outcome::printed(name.clone())),
                None => {
                    tracing::debug!("Nothing to correct in '{}'", name);
                    Ok(Outcome {
                        output: None,
                        exit_code: 1,
                    })
                }
            },
            Command::Nullify { file } => {
                let content = match file {
                    Some(path) => {
                        tracing::debug!("Reading JSON from {}", path);
                        std::fs::read_to_string(path)?
                    }
                    None => {
                        let mut buffer = String::new();
                        stdin.read_to_string(&mut buffer)?;
                        buffer
                    }
                };
                let value: serde_json::Value = serde_json::from_str(&content)?;
                let normalized = nullify_json(value);
                Ok(Outcome::printed(serde_json::to_string_pretty(&normalized)?))
            }
        }
    }
}
