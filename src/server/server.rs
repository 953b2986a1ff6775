use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::cache::token_cache::TokenCache;
use crate::config::settings::Settings;
use crate::exchange::exchanger::TokenExchanger;
use crate::observability::metrics::get_metrics;
use crate::observability::routes::MetricsState;
use crate::utils::constants::TOKEN_PATH;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub cache: TokenCache,
    pub exchanger: TokenExchanger,
    pub metrics_state: MetricsState,
}

impl AppState {
    pub async fn new(settings: Arc<Settings>, cache: TokenCache, exchanger: TokenExchanger) -> Self {
        let metrics = get_metrics().await;
        Self {
            settings,
            cache,
            exchanger,
            metrics_state: MetricsState::new(metrics.registry.clone()),
        }
    }
}

/// Build the service router: the token endpoint plus the metrics route,
/// behind a permissive CORS layer for the frontend.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(TOKEN_PATH, get(get_token))
        .merge(state.metrics_state.router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the Axum server and block until shutdown.
pub async fn start(settings: &Settings, state: AppState) -> Result<()> {
    let app = router(state);

    let bind_addr = &settings.server.host;
    let port = settings.server.port;
    info!("address: {}, port: {}", bind_addr, port);
    let listener = tokio::net::TcpListener::bind(format!("{}:{}", bind_addr, port)).await?;
    get_metrics().await.up.set(1);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await?;

    Ok(())
}

/// `GET /api/token` — serve the cached two-legged token, refreshing it
/// through the exchanger when absent or inside the safety margin.
async fn get_token(State(state): State<AppState>) -> Response {
    let metrics = get_metrics().await;
    metrics.token_requests.inc();

    // Checked per request so a misconfigured service never calls upstream.
    if !state.settings.has_credentials() {
        return error_response("missing APS_CLIENT_ID/APS_CLIENT_SECRET");
    }

    if let Some((token, remaining)) = state.cache.get_valid().await {
        metrics.cache_hits.inc();
        return token_response(token, remaining);
    }

    metrics.exchange_requests.inc();
    match state.exchanger.fetch_token().await {
        Ok(fresh) => {
            state.cache.store(fresh.access_token.clone(), fresh.expires_in).await;
            token_response(fresh.access_token, fresh.expires_in)
        }
        Err(e) => {
            metrics.exchange_failures.inc();
            error!("token exchange failed: {e}");
            error_response(&e.to_string())
        }
    }
}

fn token_response(access_token: String, expires_in: u64) -> Response {
    (
        [(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))],
        Json(json!({ "access_token": access_token, "expires_in": expires_in })),
    )
        .into_response()
}

fn error_response(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message })),
    )
        .into_response()
}
