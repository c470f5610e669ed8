use clap::{Parser, Subcommand};
use inquire::{Select, Text};

use skycast_core::{
    Config, Store, Units, WeatherApiFetcher, WeatherError, WeatherService,
    model::{DailySummary, WeatherSnapshot},
};

/// Location shown when nothing is configured and IP geolocation fails.
const FALLBACK_LOCATION: &str = "New Delhi";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Weather dashboard CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com key and preferences interactively.
    Configure,

    /// Show current conditions, air quality and the daily forecast.
    Show {
        /// City name or "lat,lon". When absent, the location is resolved by
        /// IP, falling back to the configured default location.
        location: Option<String>,

        /// Unit system, "metric" or "imperial". Overrides the configured one.
        #[arg(long)]
        units: Option<String>,

        /// Forecast days after today.
        #[arg(long, default_value_t = 5)]
        days: usize,
    },

    /// List recent searches, newest first.
    History,

    /// Manage favorite locations.
    Favorite {
        #[command(subcommand)]
        action: FavoriteAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum FavoriteAction {
    /// Add a location to the favorites list.
    Add { location: String },

    /// Remove a location from the favorites list.
    Remove { location: String },

    /// List favorite locations.
    List,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { location, units, days } => show(location, units, days).await,
            Command::History => history(),
            Command::Favorite { action } => favorite(action),
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Text::new("WeatherAPI.com API key:")
        .with_help_message("Create one for free at https://www.weatherapi.com")
        .prompt()?;
    config.api_key = Some(api_key.trim().to_string());

    let units = Select::new("Preferred units:", vec!["metric", "imperial"]).prompt()?;
    config.units = Some(Units::try_from(units)?);

    let default_location = Text::new("Default location:")
        .with_default(config.default_location.as_deref().unwrap_or(FALLBACK_LOCATION))
        .prompt()?;
    config.default_location = Some(default_location.trim().to_string());

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

async fn show(location: Option<String>, units: Option<String>, days: usize) -> anyhow::Result<()> {
    let config = Config::load()?;
    let units = match units {
        Some(s) => Units::try_from(s.as_str())?,
        None => config.units_or_default(),
    };

    let service =
        WeatherService::new(Box::new(WeatherApiFetcher::new(config.api_key()?.to_string())));

    let snapshot = match &location {
        Some(query) => service.snapshot(query, units).await,
        None => match service.locate_snapshot(units).await {
            Err(err @ WeatherError::GeolocationDenied) => {
                let fallback = config
                    .default_location
                    .clone()
                    .unwrap_or_else(|| FALLBACK_LOCATION.to_string());
                eprintln!("{}", err.user_message());
                service.snapshot(&fallback, units).await
            }
            other => other,
        },
    };
    let snapshot = snapshot.map_err(|e| anyhow::anyhow!(e.user_message()))?;

    let mut store = Store::load();
    store.record_search(&snapshot.location_name);
    store.save();

    print_snapshot(&snapshot, units);

    // Air quality and the forecast are secondary: a failure there leaves the
    // snapshot on screen instead of failing the whole command.
    match service.air_quality(snapshot.coordinates).await {
        Ok(aqi) => println!("Air quality: {aqi}"),
        Err(e) => eprintln!("{}", e.user_message()),
    }

    match service.daily_forecast(&snapshot.coordinates.to_string(), units, days).await {
        Ok(summaries) => print_daily(&summaries, units),
        Err(e) => eprintln!("{}", e.user_message()),
    }

    Ok(())
}

fn history() -> anyhow::Result<()> {
    let store = Store::load();

    if store.history.is_empty() {
        println!("No searches yet.");
    } else {
        for entry in &store.history {
            println!("{entry}");
        }
    }

    Ok(())
}

fn favorite(action: FavoriteAction) -> anyhow::Result<()> {
    let mut store = Store::load();

    match action {
        FavoriteAction::Add { location } => {
            if store.add_favorite(&location) {
                store.save();
                println!("Added '{location}' to favorites.");
            } else {
                println!("'{location}' is already a favorite.");
            }
        }
        FavoriteAction::Remove { location } => {
            if store.remove_favorite(&location) {
                store.save();
                println!("Removed '{location}' from favorites.");
            } else {
                println!("'{location}' is not a favorite.");
            }
        }
        FavoriteAction::List => {
            if store.favorites.is_empty() {
                println!("No favorite locations yet.");
            } else {
                for entry in &store.favorites {
                    println!("{entry}");
                }
            }
        }
    }

    Ok(())
}

fn print_snapshot(snapshot: &WeatherSnapshot, units: Units) {
    let deg = units.degrees();

    println!("{}, {}", snapshot.location_name, snapshot.country_code);
    println!(
        "{}, {:.1}{deg} (feels like {:.1}{deg}, about {:.1}{deg} to {:.1}{deg})",
        snapshot.condition_description,
        snapshot.temperature,
        snapshot.feels_like,
        snapshot.temperature_min,
        snapshot.temperature_max,
    );
    println!(
        "Humidity {}%, pressure {:.0} hPa, wind {:.1} m/s, visibility {:.1} km",
        snapshot.humidity_pct,
        snapshot.pressure_hpa,
        snapshot.wind_speed_mps,
        snapshot.visibility_m / 1000.0,
    );
    println!("Last updated: {}", chrono::Local::now().format("%d-%m-%Y %H:%M"));
}

fn print_daily(summaries: &[DailySummary], units: Units) {
    if summaries.is_empty() {
        println!("No daily forecast available.");
        return;
    }

    let deg = units.degrees();

    println!();
    println!("Next {} days:", summaries.len());
    for summary in summaries {
        println!(
            "  {}  {:>6.1}{deg} / {:>6.1}{deg}  {}",
            summary.date.format("%a %d %b"),
            summary.temperature_max,
            summary.temperature_min,
            summary.condition_main,
        );
    }
}
