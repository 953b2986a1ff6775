use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Upstream response contract: only these two fields are read, anything
/// else the provider returns is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: u64,
}

#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("auth request failed: {status} {body}")]
    Auth { status: u16, body: String },
    #[error("auth request transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("auth response parse error: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Performs the outbound client-credentials exchange against a fixed
/// token endpoint.
#[derive(Debug, Clone)]
pub struct TokenExchanger {
    client: Client,
    token_url: String,
    scope: String,
    client_id: String,
    client_secret: String,
}

impl TokenExchanger {
    pub fn new(
        client: Client,
        token_url: impl Into<String>,
        scope: impl Into<String>,
        client_id: String,
        client_secret: String,
    ) -> Self {
        Self {
            client,
            token_url: token_url.into(),
            scope: scope.into(),
            client_id,
            client_secret,
        }
    }

    /// Issue one form-encoded POST for a two-legged token. No retries;
    /// the caller surfaces failures synchronously.
    pub async fn fetch_token(&self) -> Result<TokenResponse, ExchangeError> {
        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("scope", self.scope.as_str()),
        ];

        debug!("requesting two-legged token from {}", self.token_url);
        let response = self.client.post(&self.token_url).form(&form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("token exchange rejected: {} {}", status, body);
            return Err(ExchangeError::Auth { status: status.as_u16(), body });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(ExchangeError::Parse)
    }
}
