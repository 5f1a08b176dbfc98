//! Branding pipeline: render the WiFi QR code, add the logo if one exists, save.

use std::path::{Path, PathBuf};

use anyhow::Context;
use image::RgbaImage;
use qr_render::{ComposeOptions, QrOptions, composite_with, load_image, render_qr, save_png};
use wifi_payload::WifiCredentials;

/// Everything needed to produce one branded QR image.
#[derive(Debug, Clone)]
pub struct BrandingJob {
    pub credentials: WifiCredentials,
    pub qr: QrOptions,
    pub compose: ComposeOptions,
    /// Logo to composite. `None` or a missing file produces a plain QR code.
    pub logo_path: Option<PathBuf>,
    pub output_path: PathBuf,
    /// Where to keep a copy of the unbranded code, if anywhere.
    pub plain_output: Option<PathBuf>,
}

/// What [`run`] wrote to the output path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Branded(PathBuf),
    Plain(PathBuf),
}

impl Outcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Branded(p) | Self::Plain(p) => p,
        }
    }
}

/// Composite `logo` onto `qr`, or pass `qr` through unchanged when there is no logo.
pub fn apply_logo(
    qr: &RgbaImage,
    logo: Option<&RgbaImage>,
    opts: &ComposeOptions,
) -> qr_render::Result<RgbaImage> {
    match logo {
        Some(logo) => composite_with(qr, logo, opts),
        None => Ok(qr.clone()),
    }
}

/// Run a branding job end to end.
pub fn run(job: &BrandingJob) -> anyhow::Result<Outcome> {
    let payload = job.credentials.payload();
    let qr = render_qr(&payload, &job.qr).context("failed to generate QR code")?;
    tracing::info!(
        ssid = job.credentials.ssid(),
        size = qr.width(),
        "QR code generated"
    );

    if let Some(path) = &job.plain_output {
        save(&qr, path)?;
        tracing::info!("Saved unbranded QR code to {}", path.display());
    }

    let Some(logo_path) = existing_logo(job.logo_path.as_deref()) else {
        tracing::info!("No logo found, writing QR code without branding");
        save(&qr, &job.output_path)?;
        return Ok(Outcome::Plain(job.output_path.clone()));
    };

    let logo = load_image(logo_path)
        .with_context(|| format!("failed to load logo {}", logo_path.display()))?;
    let branded = apply_logo(&qr, Some(&logo), &job.compose).context("failed to add logo")?;
    save(&branded, &job.output_path)?;
    tracing::info!(
        "Branded QR code written to {} (logo {})",
        job.output_path.display(),
        logo_path.display()
    );

    Ok(Outcome::Branded(job.output_path.clone()))
}

fn existing_logo(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| !p.as_os_str().is_empty() && p.exists())
}

fn save(img: &RgbaImage, path: &Path) -> anyhow::Result<()> {
    save_png(img, path).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use wifi_payload::NetworkType;

    fn test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("wifi-qr-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn job(dir: &Path, logo_path: Option<PathBuf>) -> BrandingJob {
        BrandingJob {
            credentials: WifiCredentials::new("HomeNet", "hunter22", NetworkType::Wpa).unwrap(),
            qr: QrOptions::new().with_size(256),
            compose: ComposeOptions::default(),
            logo_path,
            output_path: dir.join("wifi-qr-branded.png"),
            plain_output: None,
        }
    }

    #[test]
    fn test_apply_logo_without_logo_passes_through() {
        let qr = RgbaImage::from_pixel(64, 64, Rgba([0, 0, 0, 255]));
        let out = apply_logo(&qr, None, &ComposeOptions::default()).unwrap();
        assert_eq!(out, qr);
    }

    #[test]
    fn test_apply_logo_composites() {
        let qr = RgbaImage::from_pixel(64, 64, Rgba([0, 0, 0, 255]));
        let logo = RgbaImage::from_pixel(8, 8, Rgba([255, 0, 0, 255]));
        let out = apply_logo(&qr, Some(&logo), &ComposeOptions::default()).unwrap();
        assert_eq!(out.dimensions(), (64, 64));
        assert_ne!(out, qr);
    }

    #[test]
    fn test_run_without_logo_writes_plain_qr() {
        let dir = test_dir("plain");
        let job = job(&dir, Some(dir.join("missing-logo.png")));

        let outcome = run(&job).unwrap();
        assert_eq!(outcome, Outcome::Plain(job.output_path.clone()));

        let written = load_image(&job.output_path).unwrap();
        let expected = render_qr(&job.credentials.payload(), &job.qr).unwrap();
        assert_eq!(written, expected);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_run_with_logo_writes_branded_qr() {
        let dir = test_dir("branded");
        let logo_path = dir.join("logo.png");
        save_png(&RgbaImage::from_pixel(40, 20, Rgba([255, 0, 0, 255])), &logo_path).unwrap();

        let mut job = job(&dir, Some(logo_path));
        job.plain_output = Some(dir.join("wifi-qr.png"));

        let outcome = run(&job).unwrap();
        assert_eq!(outcome, Outcome::Branded(job.output_path.clone()));

        let plain = load_image(&dir.join("wifi-qr.png")).unwrap();
        let branded = load_image(&job.output_path).unwrap();
        assert_eq!(branded.dimensions(), (256, 256));
        assert_ne!(branded, plain);
        // The center is covered by the red logo.
        let center = branded.get_pixel(128, 128);
        assert!(center[0] > 200 && center[1] < 30, "center {center:?}");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_run_brands_with_extensionless_logo() {
        let dir = test_dir("noext");
        let logo_path = dir.join("logo");
        let logo = RgbaImage::from_pixel(20, 20, Rgba([255, 0, 0, 255]));
        std::fs::write(&logo_path, qr_render::encode_png(&logo).unwrap()).unwrap();

        let job = job(&dir, Some(logo_path));
        let outcome = run(&job).unwrap();
        assert_eq!(outcome, Outcome::Branded(job.output_path.clone()));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_run_with_corrupt_logo_fails() {
        let dir = test_dir("corrupt");
        let logo_path = dir.join("logo.png");
        std::fs::write(&logo_path, b"not a png").unwrap();

        let job = job(&dir, Some(logo_path));
        let err = run(&job).unwrap_err();
        assert!(err.to_string().contains("failed to load logo"));
        assert!(!job.output_path.exists());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
