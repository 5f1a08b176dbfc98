//! Command-line entry point.
//!
//! Renders the WiFi QR code, brands it when a logo is available, and reports
//! where the image was written.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use wifi_qr_lib::cli::Args;
use wifi_qr_lib::pipeline::{self, Outcome};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = wifi_qr_lib::init_config();
    let job = args.into_job(config)?;

    let outcome = pipeline::run(&job)?;
    if let Outcome::Plain(_) = outcome {
        println!("No logo found. QR code generated without branding.");
    }
    println!("QR code generated successfully: {}", outcome.path().display());
    Ok(())
}
