use anyhow::Result;
use chrono::Local;
use citycast_core::{Config, TempScale, WeatherView, filter_cities, provider_from_config, render};
use clap::{Parser, Subcommand};
use inquire::{Select, Text};
use tracing::debug;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "citycast", version, about = "City weather viewer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name; when omitted, pick one from the configured list.
        city: Option<String>,

        /// Temperature scale: celsius, fahrenheit or kelvin.
        #[arg(long)]
        scale: Option<String>,
    },

    /// List the selectable cities, optionally narrowed by a label substring.
    Cities {
        /// Case-insensitive substring to match labels against.
        filter: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, scale } => show(city, scale).await,
            Command::Cities { filter } => cities(filter),
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = Text::new("OpenWeather API key:").prompt()?;
    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(city: Option<String>, scale: Option<String>) -> Result<()> {
    let config = Config::load()?;

    let scale = match scale {
        Some(value) => TempScale::try_from(value.as_str())?,
        None => config.scale(),
    };

    let provider = provider_from_config(&config)?;

    let query = match city {
        Some(city) => city,
        None => pick_city(&config)?,
    };

    let offset = *Local::now().offset();
    let mut view = WeatherView::new();

    print!("{}", render(view.state(), scale, offset));

    if let Some(conditions) = view.on_query_changed(provider.as_ref(), &query).await {
        if let Some(url) = conditions.icon_url(config.icon_base()) {
            debug!(url = %url, "condition icon");
        }
    }

    print!("{}", render(view.state(), scale, offset));

    Ok(())
}

/// Interactive selector over the configured city list. Typing narrows the
/// list by case-insensitive label substring.
fn pick_city(config: &Config) -> Result<String> {
    let options = config.cities();

    let selected = Select::new("City:", options)
        .with_scorer(&|input, option, _value, _idx| option.matches(input).then_some(0))
        .prompt()?;

    Ok(selected.value)
}

fn cities(filter: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let all = config.cities();

    let shown = match filter.as_deref() {
        Some(input) => filter_cities(&all, input),
        None => all,
    };

    for city in shown {
        println!("{}\t{}", city.label, city.value);
    }

    Ok(())
}
