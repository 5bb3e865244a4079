use serde::Deserialize;

/// Configuration options of the Academia service.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Socket address the HTTP server binds to.
    pub bind_address: String,
    /// SQLite database location.
    pub database_url: String,
    /// Session cookie signing key, at least 64 bytes.
    pub secret_key: String,
}
