//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings the server needs at startup.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Glob handed to Tera, e.g. `templates/**/*`.
    pub templates_dir: String,
    pub assets_dir: String,
    /// Signing key for the flash message cookie, at least 64 bytes.
    pub secret: String,
}
