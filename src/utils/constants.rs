//! Shared constants and invariants

/// Buffer subtracted from token expiry so callers never receive a token
/// that expires mid-use.
pub const SAFETY_MARGIN_SECONDS: u64 = 60;

pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Fixed APS two-legged token endpoint.
pub const APS_TOKEN_URL: &str = "https://developer.api.autodesk.com/authentication/v2/token";

/// Fixed space-separated scope list requested on every exchange.
pub const APS_SCOPES: &str = "data:read bucket:read viewables:read";

pub const TOKEN_PATH: &str = "/api/token";
pub const METRICS_PATH: &str = "/metrics";
