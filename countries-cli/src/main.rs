//! Countries CLI
//!
//! Command-line interface for country currency and capital lookups.

use std::fmt;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use countries_client::{
    ClientConfig, CountryInfo, LocalCurrency, LookupError, LookupService, config::DEFAULT_BASE_URL,
};

#[derive(Parser)]
#[command(name = "countries")]
#[command(author, version, about = "Country currency and capital lookups", long_about = None)]
struct Cli {
    /// Base URL of the countries API
    #[arg(long, env = "COUNTRIES_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Request timeout in seconds (0 disables it)
    #[arg(long, env = "COUNTRIES_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    /// Use the blocking client instead of the async one
    #[arg(long)]
    blocking: bool,

    /// Print the record as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up the local currency of a country
    Currency {
        /// ISO 3166-1 alpha-2 or alpha-3 country code
        code: Option<String>,
    },
    /// Look up country information by capital city
    Capital {
        /// Capital city name
        name: Option<String>,
    },
}

impl Commands {
    // A missing argument is validated like an empty one.
    fn argument(&self) -> &str {
        match self {
            Commands::Currency { code } => code.as_deref().unwrap_or_default(),
            Commands::Capital { name } => name.as_deref().unwrap_or_default(),
        }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum Record {
    Currency(LocalCurrency),
    Country(CountryInfo),
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Currency(currency) => fmt::Display::fmt(currency, f),
            Record::Country(info) => write!(f, "{} {}", info, info.flag),
        }
    }
}

fn lookup_blocking(service: &LookupService, command: &Commands) -> Result<Record, LookupError> {
    let argument = command.argument();
    match command {
        Commands::Currency { .. } => service.local_currency_by_code(argument).map(Record::Currency),
        Commands::Capital { .. } => service.country_info_by_capital(argument).map(Record::Country),
    }
}

async fn lookup_async(
    service: &LookupService,
    command: &Commands,
    cancel: &CancellationToken,
) -> Result<Record, LookupError> {
    let argument = command.argument();
    match command {
        Commands::Currency { .. } => service
            .local_currency_by_code_async(argument, cancel)
            .await
            .map(Record::Currency),
        Commands::Capital { .. } => service
            .country_info_by_capital_async(argument, cancel)
            .await
            .map(Record::Country),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,countries_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env()?;
    config.base_url = cli.api_url;
    config.timeout = match cli.timeout_secs {
        0 => None,
        secs => Some(Duration::from_secs(secs)),
    };
    let service = LookupService::from_config(&config)?;

    let record = if cli.blocking {
        // The blocking transport must stay off the runtime's worker threads.
        let command = cli.command;
        tokio::task::spawn_blocking(move || lookup_blocking(&service, &command)).await??
    } else {
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("Interrupted, cancelling lookup");
                trigger.cancel();
            }
        });
        lookup_async(&service, &cli.command, &cancel).await?
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{}", record);
    }

    Ok(())
}
