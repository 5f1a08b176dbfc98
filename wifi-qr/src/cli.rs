//! Command-line arguments. Flags override configuration values.

use std::path::PathBuf;

use clap::Parser;
use qr_render::{ComposeOptions, QrOptions};
use wifi_payload::{NetworkType, WifiCredentials};

use crate::config::AppConfig;
use crate::config::defaults::{MAX_SIZE, MIN_SIZE, env_help};
use crate::pipeline::BrandingJob;

#[derive(Parser, Debug)]
#[command(
    name = "wifi-qr",
    version,
    about = "Generate a scan-to-join WiFi QR code, optionally branded with a logo",
    after_help = env_help()
)]
pub struct Args {
    /// WiFi network name (SSID)
    #[arg(long)]
    pub ssid: String,

    /// WiFi password; may be omitted for open networks
    #[arg(long, default_value = "")]
    pub password: String,

    /// Network type: WPA, WEP or nopass (case-insensitive)
    #[arg(long = "type", default_value = "WPA")]
    pub network_type: NetworkType,

    /// Logo to place at the center [env: WIFI_QR_LOGO]
    #[arg(long)]
    pub logo: Option<PathBuf>,

    /// Output PNG path [env: WIFI_QR_OUTPUT]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also save the unbranded QR code here [env: WIFI_QR_PLAIN_OUTPUT]
    #[arg(long)]
    pub plain_output: Option<PathBuf>,

    /// Image side length in pixels [env: WIFI_QR_SIZE]
    #[arg(long, value_parser = clap::value_parser!(u32).range(i64::from(MIN_SIZE)..=i64::from(MAX_SIZE)))]
    pub size: Option<u32>,

    /// Omit the light border around the symbol
    #[arg(long)]
    pub no_quiet_zone: bool,
}

impl Args {
    /// Merge the arguments over `config` into a runnable job.
    pub fn into_job(self, config: AppConfig) -> anyhow::Result<BrandingJob> {
        let credentials = WifiCredentials::new(&self.ssid, &self.password, self.network_type)?;

        let qr = QrOptions::new()
            .with_size(self.size.unwrap_or(config.size))
            .with_quiet_zone(config.quiet_zone && !self.no_quiet_zone);
        let compose = ComposeOptions::new()
            .with_logo_scale(config.logo_scale)
            .with_margin_scale(config.margin_scale);

        Ok(BrandingJob {
            credentials,
            qr,
            compose,
            logo_path: Some(self.logo.unwrap_or(config.logo_path)),
            output_path: self.output.unwrap_or(config.output_path),
            plain_output: self.plain_output.or(config.plain_output),
        })
    }
}
