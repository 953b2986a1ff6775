use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use reqwest::Client;
use tracing::{info, warn};

use aps_token_service::cache::token_cache::TokenCache;
use aps_token_service::config::settings::Settings;
use aps_token_service::exchange::exchanger::TokenExchanger;
use aps_token_service::server::server::{self, AppState};
use aps_token_service::utils::constants::{APS_SCOPES, APS_TOKEN_URL, DEFAULT_HTTP_TIMEOUT_SECS};
use aps_token_service::utils::logging::{self, LogFormat, LogLevel};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// OAuth client identifier; validated per request, not at startup
    #[arg(long, env = "APS_CLIENT_ID", default_value = "", hide_env_values = true)]
    client_id: String,
    /// OAuth client secret
    #[arg(long, env = "APS_CLIENT_SECRET", default_value = "", hide_env_values = true)]
    client_secret: String,
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
    #[arg(long, env = "LOG_FORMAT", value_enum)]
    log_format: Option<LogFormat>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Read env / args, init logging
    // -------------------------------

    let args = Args::parse();
    logging::run(args.log_level, args.log_format)?;

    // -------------------------------
    // 2. Build settings
    // -------------------------------

    let settings = Arc::new(Settings::new(
        args.client_id,
        args.client_secret,
        args.host,
        args.port,
    ));
    if !settings.has_credentials() {
        warn!("APS_CLIENT_ID/APS_CLIENT_SECRET not set; /api/token will answer 500 until both are provided");
    }

    // -------------------------------
    // 3. Create request client and exchanger
    // -------------------------------

    let client = Client::builder()
        .timeout(Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS))
        .build()?;
    let exchanger = TokenExchanger::new(
        client,
        APS_TOKEN_URL,
        APS_SCOPES,
        settings.client_id.clone(),
        settings.client_secret.clone(),
    );

    // -------------------------------
    // 4. Start http server with token cache
    // -------------------------------

    let state = AppState::new(settings.clone(), TokenCache::new(), exchanger).await;

    info!("Service starting...");
    server::start(&settings, state).await
}
