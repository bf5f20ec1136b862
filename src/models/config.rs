//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    pub assets_dir: String,
    /// Signs both the session cookie and the identity token. Must be at
    /// least 64 bytes.
    pub secret: String,
}
