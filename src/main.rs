use clap::Parser;
use tracing::{debug, error};

use oddsmath::cli::{self, output, Cli};
use oddsmath::config::Config;

fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let loaded = if cli.uses_default_config() {
        Config::load_or_default(&cli.config)
    } else {
        Config::load(&cli.config)
    };
    let config = match loaded {
        Ok(c) => c,
        Err(e) => {
            output::error(&format!("Failed to load config: {e}"));
            std::process::exit(1);
        }
    };

    config
        .logging
        .clone()
        .with_overrides(cli.log_level.as_deref(), cli.json_logs)
        .init();
    debug!(config = %cli.config.display(), command = ?cli.command, "oddsmath starting");

    if let Err(e) = cli::execute(&cli, &config) {
        error!(error = %e, "Command failed");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
