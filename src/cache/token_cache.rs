use std::sync::Arc;
use tokio::sync::RwLock;

use crate::cache::token::Token;
use crate::helpers::time::now_i64;
use crate::utils::constants::SAFETY_MARGIN_SECONDS;

/// Single-entry token cache shared by every inbound request.
///
/// The process holds at most one token at a time: either absent (never
/// fetched) or the most recently obtained one. Concurrent misses may each
/// perform a redundant exchange; the last `store` wins.
#[derive(Debug, Clone, Default)]
pub struct TokenCache {
    inner: Arc<RwLock<Option<Token>>>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self { inner: Arc::new(RwLock::new(None)) }
    }

    /// Get the cached token and its remaining lifetime in seconds.
    ///
    /// Returns `None` once `now >= expires_at - SAFETY_MARGIN_SECONDS`,
    /// signaling the caller to refresh. The remaining lifetime is counted
    /// against the real expiry, not the margin.
    pub async fn get_valid(&self) -> Option<(String, u64)> {
        let guard = self.inner.read().await;
        let token = guard.as_ref()?;
        let now = now_i64();
        if now < token.expires_at - SAFETY_MARGIN_SECONDS as i64 {
            Some((token.value.clone(), (token.expires_at - now) as u64))
        } else {
            None
        }
    }

    /// Replace the cached entry with a freshly obtained token.
    pub async fn store(&self, value: String, expires_in_seconds: u64) {
        let token = Token::new(value, now_i64() + expires_in_seconds as i64);
        let mut guard = self.inner.write().await;
        *guard = Some(token);
    }
}
