//! nalssi CLI
//!
//! Command-line interface for the Korean weather-query assistant.

#![allow(clippy::print_stdout)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use application::{QueryParser, WeatherQueryService};
use clap::{Parser, Subcommand};
use infrastructure::{AppConfig, GeocodingAdapter, RuleRecognizer, WeatherAdapter};
use tracing_subscriber::EnvFilter;

/// nalssi CLI
#[derive(Parser)]
#[command(name = "nalssi-cli")]
#[command(author, version, about = "Korean weather query assistant", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "nalssi.toml", env = "NALSSI_CONFIG")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a natural-language weather query
    ///
    /// Example: nalssi-cli ask "내일 서울의 날씨는 어때"
    Ask {
        /// The query text
        query: String,
    },

    /// Parse a query and print the extracted fields as JSON
    ///
    /// Shows the (date, raw location, coordinates) triple without
    /// fetching any weather data.
    Parse {
        /// The query text
        query: String,
    },
}

fn build_service(config: &AppConfig) -> anyhow::Result<WeatherQueryService> {
    let recognizer =
        RuleRecognizer::new(&config.recognizer.extra_locations).context("build recognizer")?;
    let geocoder =
        GeocodingAdapter::new(config.geocoding.clone()).context("build geocoding client")?;
    let weather = WeatherAdapter::new(config.weather.clone()).context("build weather client")?;

    let parser = QueryParser::new(Arc::new(recognizer), Arc::new(geocoder));
    Ok(WeatherQueryService::new(parser, Arc::new(weather)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("warn,application=info,infrastructure=info")
        }))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("load configuration from {}", cli.config.display()))?;
    let service = build_service(&config)?;

    match cli.command {
        Commands::Ask { query } => {
            let answer = service.answer(&query).await;
            println!("{answer}");
        }
        Commands::Parse { query } => {
            let parsed = service.parse(&query).await;
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }
    }

    Ok(())
}
