use anyhow::Context;
use clap::Parser;
use tidy_fields::utils::{logger, validation::Validate};
use tidy_fields::{CliConfig, TidyConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match &cli.config {
        Some(path) => TidyConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path))?,
        None => TidyConfig::default(),
    };

    if config.json_logs() {
        logger::init_json_logger(cli.verbose, config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        return Err(e.into());
    }

    tracing::debug!("Running command: {:?}", cli.command);

    let outcome = match cli.command.execute(&config, std::io::stdin().lock()) {
        Ok(outcome) => outcome,
        Err(e) => {
            if e.is_input_error() {
                tracing::warn!("Rejected input: {}", e);
            } else {
                tracing::error!("Command failed: {}", e);
            }
            return Err(e.into());
        }
    };

    if let Some(output) = outcome.output {
        println!("{}", output);
    }

    if outcome.exit_code != 0 {
        std::process::exit(outcome.exit_code);
    }

    Ok(())
}
