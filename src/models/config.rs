//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    pub assets_dir: String,
    /// Cookie signing key for flash messages, at least 64 bytes.
    pub secret: String,
    /// Serve the bundled fixture instead of calling the remote API.
    pub use_mock_data: bool,
    pub api_base_url: String,
    pub fixture_path: String,
    pub request_timeout_secs: u64,
    pub items_per_page: usize,
    /// Download name for exports, without extension.
    pub export_file_name: String,
}
