use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{
    CustomType, CustomUserError, Text,
    validator::Validation,
};
use weather_core::{Config, WeatherLookupService};

use crate::shell::{self, AppState};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for a city, via wttr.in")]
pub struct Cli {
    /// Defaults to `interactive` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Edit provider URL, timeout, cache TTL and default city.
    Configure,

    /// Show current weather for a city once.
    Show {
        /// City name; falls back to the configured default city.
        city: Option<String>,
    },

    /// Prompt for city names until cancelled.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let config = Config::load()?;

        match self.command.unwrap_or(Command::Interactive) {
            Command::Configure => {
                configure(config)?;
                Ok(ExitCode::SUCCESS)
            }
            Command::Show { city } => {
                let service = WeatherLookupService::from_config(&config)?;
                let mut state = AppState::new(config.default_city.clone());
                let submission = state.submit(city.unwrap_or(config.default_city));

                let outcome = shell::handle(&service, submission).await;
                outcome.print();

                Ok(if outcome.is_report() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
            }
            Command::Interactive => {
                let service = WeatherLookupService::from_config(&config)?;
                let mut state = AppState::new(config.default_city);
                shell::run(&service, &mut state).await?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

fn configure(current: Config) -> anyhow::Result<()> {
    let provider_url = Text::new("Provider URL:")
        .with_default(&current.provider_url)
        .prompt()
        .context("Failed to read provider URL")?;

    let timeout_secs = CustomType::<u64>::new("Request timeout (seconds):")
        .with_default(current.timeout_secs)
        .with_error_message("Please enter a whole number of seconds")
        .with_validator(non_zero_seconds)
        .prompt()
        .context("Failed to read request timeout")?;

    let cache_ttl_secs = CustomType::<u64>::new("Cache lifetime (seconds):")
        .with_default(current.cache_ttl_secs)
        .with_error_message("Please enter a whole number of seconds")
        .prompt()
        .context("Failed to read cache lifetime")?;

    let default_city = Text::new("Default city:")
        .with_default(&current.default_city)
        .prompt()
        .context("Failed to read default city")?;

    let updated = Config { provider_url, timeout_secs, cache_ttl_secs, default_city };

    // Fail early on a URL the provider would reject at lookup time.
    weather_core::provider_from_config(&updated)?;

    updated.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

fn non_zero_seconds(secs: &u64) -> Result<Validation, CustomUserError> {
    if *secs == 0 {
        Ok(Validation::Invalid("The timeout must be at least one second".into()))
    } else {
        Ok(Validation::Valid)
    }
}
