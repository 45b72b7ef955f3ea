use std::{net::SocketAddr, sync::Arc};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tokio::{net::TcpListener, signal};
use tracing::{error, info, warn};
use wrd_dns::{
    AppState, SharedState, api,
    config::{ApiCredentials, DomainFilter, ProviderConfig},
    provider::WrdProvider,
    wrd::client::{DEFAULT_ENDPOINT, WrdClient},
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about, rename_all = "kebab-case")]
struct Cli {
    /// Zone the provider may manage (repeat for multiple values)
    #[arg(
        long = "domain-filter",
        value_name = "ZONE",
        env = "WRD_DOMAIN_FILTER",
        value_delimiter = ',',
        required = true
    )]
    domain_filter: Vec<String>,
    /// Dry run level; any non-zero value disables all API calls
    #[arg(long, value_name = "N", env = "WRD_DRY_RUN", default_value_t = 0)]
    dry_run: u32,
    /// DNS API endpoint URL
    #[arg(long, value_name = "URL", env = "WRD_API_URL", default_value = DEFAULT_ENDPOINT)]
    api_url: String,
    /// Customer number used to log in to the DNS API
    #[arg(long, value_name = "NUMBER", env = "WRD_CUSTOMER_NUMBER", default_value = "")]
    customer_number: String,
    /// DNS API key
    #[arg(long, value_name = "KEY", env = "WRD_API_KEY", default_value = "", hide_env_values = true)]
    api_key: String,
    /// DNS API password
    #[arg(long, value_name = "PASSWORD", env = "WRD_API_PASSWORD", default_value = "", hide_env_values = true)]
    api_password: String,
    /// Listen address for the webhook server
    #[arg(long, value_name = "ADDR", env = "WRD_LISTEN", default_value = "127.0.0.1:8888")]
    listen: SocketAddr,
    /// Log output format
    #[arg(long, value_enum, env = "WRD_LOG_FORMAT", default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    let config = build_provider_config(&cli)?;
    let state = init_shared_state(&cli, config);
    let app = api::create_router(state);

    let listener = TcpListener::bind(cli.listen)
        .await
        .with_context(|| format!("failed to bind to {}", cli.listen))?;

    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server exited with error")?;

    Ok(())
}

fn init_shared_state(cli: &Cli, config: ProviderConfig) -> SharedState {
    let client = WrdClient::new(
        &cli.api_url,
        ApiCredentials {
            customer_number: cli.customer_number.clone(),
            api_key: cli.api_key.clone(),
            api_password: cli.api_password.clone(),
        },
    );

    Arc::new(AppState {
        provider: WrdProvider::new(config, Box::new(client)),
    })
}

fn build_provider_config(cli: &Cli) -> Result<ProviderConfig> {
    let domain_filter =
        DomainFilter::new(&cli.domain_filter).context("invalid --domain-filter configuration")?;

    if cli.dry_run > 0 {
        info!(zones = ?domain_filter.zones(), "starting in dry-run mode");
    } else if cli.customer_number.is_empty() || cli.api_key.is_empty() || cli.api_password.is_empty() {
        warn!("DNS API credentials are incomplete; login will likely fail");
    }

    Ok(ProviderConfig::new(domain_filter, cli.dry_run))
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        error!("failed to install CTRL+C handler: {err}");
    }
    info!("shutdown signal received");
}

fn init_tracing(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=info".into());
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
