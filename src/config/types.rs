// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub content: ContentConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Absolute base URL used as the QR payload prefix, e.g.
    /// "https://qr.example.com". When unset, the request Host header is
    /// used instead, so QR codes keep working behind whatever name the
    /// deployment has.
    #[serde(default)]
    pub public_url: Option<String>,
    pub workers: Option<usize>,
}

/// Remote content configuration
///
/// The content page is built from these values; all of them can be changed
/// per deployment without a rebuild.
#[derive(Debug, Deserialize, Clone)]
pub struct ContentConfig {
    /// Publicly reachable image link embedded in the content page
    pub image_url: String,
    /// Publicly reachable plain-text export link
    pub text_url: String,
    /// Fallback shown when the text fetch fails
    pub default_text: String,
    /// Per-request fetch timeout in seconds
    pub fetch_timeout: u64,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}
