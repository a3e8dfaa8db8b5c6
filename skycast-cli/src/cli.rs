use std::sync::Arc;

use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode};
use skycast_core::{Config, OpenWeatherClient, WeatherSource};

use crate::{interactive, output};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "City weather lookup with live suggestions")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Show current weather for a city and exit.
    Show {
        /// City name, e.g. "Paris".
        city: String,
    },

    /// Interactive lookup with live suggestions. The default when no
    /// subcommand is given.
    Search,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Show { city }) => show(&city).await,
            Some(Command::Search) | None => search().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;

    config.set_api_key(key.trim().to_string());
    config.save()?;

    println!("Saved API key to {}", Config::config_file_path()?.display());
    Ok(())
}

fn client_from_config() -> anyhow::Result<OpenWeatherClient> {
    let config = Config::load()?;
    let api_key = config.resolve_api_key()?;
    Ok(OpenWeatherClient::new(api_key))
}

async fn show(city: &str) -> anyhow::Result<()> {
    let client = client_from_config()?;

    match client.current(city).await {
        Ok(record) => {
            println!("{}", output::render(&record));
            Ok(())
        }
        Err(err) => anyhow::bail!("Could not fetch weather for '{city}': {err}"),
    }
}

async fn search() -> anyhow::Result<()> {
    let client = client_from_config()?;
    let source: Arc<dyn WeatherSource> = Arc::new(client);
    interactive::run(source).await
}
