/// ================================
/// Global service-wide settings
/// ================================
///
/// Built once at startup from environment-backed CLI arguments and shared
/// by reference; credentials are validated per request, not at startup, so
/// the service can boot and report the misconfiguration over HTTP.
#[derive(Debug, Clone)]
pub struct Settings {
    pub client_id: String,
    pub client_secret: String,
    pub server: ServerConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Settings {
    pub fn new(client_id: String, client_secret: String, host: String, port: u16) -> Self {
        Self { client_id, client_secret, server: ServerConfig { host, port } }
    }

    /// Both credential halves must be non-empty before any exchange.
    pub fn has_credentials(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}
