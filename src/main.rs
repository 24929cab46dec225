mod cli;
mod config;
mod error;
mod model;

use clap::Parser;
use cli::Cli;
use config::Config;
use error::{Error, Result};
use model::{HttpFetcher, ModelRegistry};
use std::process::ExitCode;

fn setup() -> Result<(Config, HttpFetcher)> {
    let config = Config::from_env()?;
    let fetcher = HttpFetcher::new(&config)?;
    Ok((config, fetcher))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = ModelRegistry::default();

    let stdout = std::io::stdout();
    match cli::run(&cli, &registry, &mut stdout.lock(), setup) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match &e {
                Error::UnknownModel(_) => {
                    tracing::error!("{} Known models: {}", e, registry.names().join(", "))
                }
                Error::DestinationExists(path) => {
                    tracing::debug!("Refusing to overwrite {:?}", path);
                    println!("{}", e);
                }
                _ => tracing::error!("{}", e),
            }
            ExitCode::from(e.exit_code())
        }
    }
}
