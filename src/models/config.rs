//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across the report tooling.
pub struct AppConfig {
    /// Directory CSV exports are written to.
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    /// Artificial delay per repository call, in milliseconds. Zero disables
    /// the simulation.
    #[serde(default)]
    pub simulated_latency_ms: u64,
    /// How far ahead the dashboard warns about expiring documents.
    #[serde(default = "default_expiry_window_days")]
    pub expiry_window_days: i64,
}

fn default_export_dir() -> String {
    "exports".to_string()
}

fn default_expiry_window_days() -> i64 {
    30
}
