//! Logo composition: overlay a logo onto the center of a QR code.
//!
//! The logo is scaled to a fraction of the QR side and drawn over a solid
//! circular pad, so the covered modules are recovered by error correction
//! instead of colliding visually with the logo.

use image::imageops;
use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::resize::{fit_dimensions, resize_logo};
use crate::{RenderError, Result};

/// Largest logo dimension as a fraction of the QR side length.
pub const LOGO_SCALE: f64 = 0.20;

/// Pad diameter as a multiple of the largest logo dimension.
pub const MARGIN_SCALE: f64 = 1.4;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Tunable factors for logo composition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComposeOptions {
    /// Largest logo dimension relative to the QR side, in `(0, 1]`.
    pub logo_scale: f64,

    /// Pad diameter relative to the largest logo dimension.
    pub margin_scale: f64,

    /// Fill color of the circular pad.
    pub pad_color: Rgba<u8>,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            logo_scale: LOGO_SCALE,
            margin_scale: MARGIN_SCALE,
            pad_color: WHITE,
        }
    }
}

impl ComposeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the logo scale.
    pub fn with_logo_scale(mut self, val: f64) -> Self {
        self.logo_scale = val;
        self
    }

    /// Builder: set the pad margin scale.
    pub fn with_margin_scale(mut self, val: f64) -> Self {
        self.margin_scale = val;
        self
    }

    /// Builder: set the pad color.
    pub fn with_pad_color(mut self, val: Rgba<u8>) -> Self {
        self.pad_color = val;
        self
    }

    fn validate(&self) -> Result<()> {
        if !(self.logo_scale > 0.0 && self.logo_scale <= 1.0) {
            return Err(RenderError::InvalidInput(format!(
                "logo scale must be in (0, 1], got {}",
                self.logo_scale
            )));
        }
        if !(self.margin_scale.is_finite() && self.margin_scale > 0.0) {
            return Err(RenderError::InvalidInput(format!(
                "margin scale must be positive, got {}",
                self.margin_scale
            )));
        }
        Ok(())
    }
}

/// Geometry of a logo placed on a QR canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoPlacement {
    /// Resized logo width in pixels.
    pub width: u32,
    /// Resized logo height in pixels.
    pub height: u32,
    /// Left edge of the logo on the canvas.
    pub x: i64,
    /// Top edge of the logo on the canvas.
    pub y: i64,
    /// Center of the pad (and of the logo).
    pub center: (f64, f64),
    /// Radius of the circular pad.
    pub pad_radius: f64,
}

/// Plan where a `logo_width` x `logo_height` logo lands on a square QR of side `qr_size`.
pub fn plan_placement(
    qr_size: u32,
    logo_width: u32,
    logo_height: u32,
    opts: &ComposeOptions,
) -> Result<LogoPlacement> {
    opts.validate()?;

    if logo_width == 0 || logo_height == 0 {
        return Err(RenderError::InvalidInput(format!(
            "logo must have non-zero dimensions, got {logo_width}x{logo_height}"
        )));
    }

    let max_logo_size = f64::from(qr_size) * opts.logo_scale;
    let (width, height) = fit_dimensions(logo_width, logo_height, max_logo_size);

    if width.max(height) == 0 {
        return Err(RenderError::InvalidInput(format!(
            "QR code of {qr_size}px is too small to hold a logo"
        )));
    }
    // The smaller side of a very skewed logo can truncate to zero.
    let (width, height) = (width.max(1), height.max(1));

    let center = f64::from(qr_size) / 2.0;
    let x = (center - f64::from(width) / 2.0) as i64;
    let y = (center - f64::from(height) / 2.0) as i64;
    let pad_radius = max_logo_size * opts.margin_scale / 2.0;

    debug!(
        qr_size,
        logo_width,
        logo_height,
        width,
        height,
        x,
        y,
        pad_radius,
        "Planned logo placement"
    );

    Ok(LogoPlacement {
        width,
        height,
        x,
        y,
        center: (center, center),
        pad_radius,
    })
}

/// Composite `logo` onto the center of `qr` using the default options.
pub fn composite(qr: &RgbaImage, logo: &RgbaImage) -> Result<RgbaImage> {
    composite_with(qr, logo, &ComposeOptions::default())
}

/// Composite `logo` onto the center of `qr`.
///
/// The result has the same size as `qr`. Neither input is modified.
/// Fails with [`RenderError::InvalidInput`] before drawing anything if `qr` is
/// not square, either image is empty, or `opts` is out of range.
pub fn composite_with(
    qr: &RgbaImage,
    logo: &RgbaImage,
    opts: &ComposeOptions,
) -> Result<RgbaImage> {
    let (qr_w, qr_h) = qr.dimensions();
    if qr_w != qr_h {
        return Err(RenderError::InvalidInput(format!(
            "QR code must be square, got {qr_w}x{qr_h}"
        )));
    }
    if qr_w == 0 {
        return Err(RenderError::InvalidInput("QR code is empty".into()));
    }

    let placement = plan_placement(qr_w, logo.width(), logo.height(), opts)?;
    let resized = resize_logo(logo, placement.width, placement.height);

    let mut canvas = qr.clone();
    fill_disk(&mut canvas, placement.center, placement.pad_radius, opts.pad_color);
    imageops::overlay(&mut canvas, &resized, placement.x, placement.y);

    debug!(size = qr_w, "Logo composited onto QR code");
    Ok(canvas)
}

/// Fill every pixel whose center lies within `radius` of `center`.
fn fill_disk(img: &mut RgbaImage, center: (f64, f64), radius: f64, color: Rgba<u8>) {
    let (cx, cy) = center;
    let r2 = radius * radius;
    let x0 = (cx - radius).floor().max(0.0) as u32;
    let y0 = (cy - radius).floor().max(0.0) as u32;
    let x1 = ((cx + radius).ceil().max(0.0) as u32).min(img.width());
    let y1 = ((cy + radius).ceil().max(0.0) as u32).min(img.height());

    for y in y0..y1 {
        let dy = f64::from(y) + 0.5 - cy;
        for x in x0..x1 {
            let dx = f64::from(x) + 0.5 - cx;
            if dx * dx + dy * dy <= r2 {
                img.put_pixel(x, y, color);
            }
        }
    }
}
