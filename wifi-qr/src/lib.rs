//! WiFi QR code generator with optional logo branding.
//!
//! Wires configuration, CLI arguments and the branding pipeline together
//! on top of the `qr-render` and `wifi-payload` crates.

pub mod cli;
pub mod config;
pub mod pipeline;

pub use config::AppConfig;

/// Load .env from multiple candidate paths.
fn load_dotenv() {
    let candidates = [".env", "../.env", "../../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::info!("No .env file found, using system environment variables");
}

/// Load .env and build the runtime configuration.
pub fn init_config() -> AppConfig {
    load_dotenv();
    let config = AppConfig::load();
    tracing::info!(
        "Settings loaded (size={}, logo={})",
        config.size,
        config.logo_path.display()
    );
    config
}
