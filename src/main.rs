use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use weatherwear::{
    FjallStore, GeoPoint, NominatimGeocoder, OutfitSuggestion, PinChange, WeatherWear,
    WeatherWearConfig, logging,
};

/// WeatherWear: saved places, forecasts and what to wear
#[derive(Debug, Parser)]
#[command(name = "weatherwear", version, about)]
struct Cli {
    /// Path to a config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Manage saved pins
    #[command(subcommand)]
    Pins(PinsCommand),
    /// Choose the location to show the forecast for
    Choose(Coordinates),
    /// Show the chosen location
    Chosen,
    /// Suggest clothing for a temperature in degrees Celsius
    Outfit {
        #[arg(allow_negative_numbers = true)]
        temperature: f64,
    },
}

#[derive(Debug, Subcommand)]
enum PinsCommand {
    /// List saved pins with their place names
    List,
    /// Save a pin
    Add(Coordinates),
    /// Delete a pin
    Remove(Coordinates),
}

#[derive(Debug, clap::Args)]
struct Coordinates {
    #[arg(allow_negative_numbers = true)]
    latitude: f64,
    #[arg(allow_negative_numbers = true)]
    longitude: f64,
}

impl Coordinates {
    fn point(&self) -> Result<GeoPoint> {
        Ok(GeoPoint::new(self.latitude, self.longitude)?)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = WeatherWearConfig::load_from_path(cli.config.clone())?;
    logging::init(&config.logging, cli.verbose)?;

    if let Command::Outfit { temperature } = cli.command {
        print_outfit(&OutfitSuggestion::for_temperature(temperature));
        return Ok(());
    }

    let storage_path = config.storage_path();
    std::fs::create_dir_all(&storage_path).with_context(|| {
        format!(
            "Failed to create storage directory: {}",
            storage_path.display()
        )
    })?;
    let storage = FjallStore::open(&storage_path)?;
    let geocoder = NominatimGeocoder::new(&config.geocoding)?;
    let mut session = WeatherWear::open(storage, geocoder);

    match cli.command {
        Command::Pins(PinsCommand::List) => {
            session.restore_metadata().await;
            let pins = session.pins().snapshot();
            if pins.is_empty() {
                println!("No saved pins");
            }
            for pin in pins {
                println!(
                    "{}  {} ({})",
                    pin.point.format_coordinates(),
                    pin.title(),
                    pin.locality()
                );
            }
        }
        Command::Pins(PinsCommand::Add(coordinates)) => {
            let point = coordinates.point()?;
            let change = session.drop_pin(point).await;
            report(&change, "Saved", "Already saved", point);
        }
        Command::Pins(PinsCommand::Remove(coordinates)) => {
            let point = coordinates.point()?;
            let change = session.delete_pin(point);
            report(&change, "Removed", "No pin at", point);
        }
        Command::Choose(coordinates) => {
            let point = coordinates.point()?;
            session.choose(point)?;
            println!("Forecast location set to {}", point.format_coordinates());
        }
        Command::Chosen => match session.chosen() {
            Some(point) => println!("{}", point.format_coordinates()),
            None => println!("No location chosen"),
        },
        Command::Outfit { .. } => {}
    }

    Ok(())
}

fn report(change: &PinChange, changed: &str, unchanged: &str, point: GeoPoint) {
    let verb = if change.changed { changed } else { unchanged };
    println!("{verb} {}", point.format_coordinates());
    if let Some(warning) = &change.warning {
        eprintln!("Warning: {}", warning.user_message());
    }
}

fn print_outfit(suggestion: &OutfitSuggestion) {
    println!("{} C: {}", suggestion.celsius, suggestion.season);
    for item in &suggestion.items {
        println!("  - {item}");
    }
}
