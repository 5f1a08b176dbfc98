//! QR code rendering into square RGBA bitmaps.

use image::{Rgba, RgbaImage};
use qrcode::{Color, EcLevel, QrCode};
use tracing::debug;

use crate::Result;

/// Width of the quiet zone around the symbol, in modules.
pub const QUIET_ZONE_MODULES: u32 = 4;

/// Default output side length in pixels.
pub const DEFAULT_SIZE: u32 = 512;

/// Rendering options for [`render_qr`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QrOptions {
    /// Requested side length in pixels. Grows to the module count if smaller.
    pub size: u32,

    /// Surround the symbol with a light border of [`QUIET_ZONE_MODULES`] modules.
    pub quiet_zone: bool,

    pub dark: Rgba<u8>,
    pub light: Rgba<u8>,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            quiet_zone: true,
            dark: Rgba([0, 0, 0, 255]),
            light: Rgba([255, 255, 255, 255]),
        }
    }
}

impl QrOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the output size.
    pub fn with_size(mut self, val: u32) -> Self {
        self.size = val;
        self
    }

    /// Builder: enable or disable the quiet zone.
    pub fn with_quiet_zone(mut self, val: bool) -> Self {
        self.quiet_zone = val;
        self
    }
}

/// Encode `payload` at high error correction and render it as a square bitmap.
///
/// Modules are scaled by a whole number of pixels; any leftover is split
/// around the symbol as light padding so the output is exactly `size` pixels.
pub fn render_qr(payload: &str, opts: &QrOptions) -> Result<RgbaImage> {
    let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::H)?;
    let colors = code.to_colors();
    let symbol = code.width() as u32;

    let border = if opts.quiet_zone { QUIET_ZONE_MODULES } else { 0 };
    let modules = symbol + 2 * border;
    let side = opts.size.max(modules);
    let scale = side / modules;
    let offset = (side - modules * scale) / 2 + border * scale;

    debug!(
        version = ?code.version(),
        symbol,
        side,
        scale,
        "Rendering QR code"
    );

    let mut img = RgbaImage::from_pixel(side, side, opts.light);
    for (i, color) in colors.iter().enumerate() {
        if *color != Color::Dark {
            continue;
        }
        let mx = (i as u32) % symbol;
        let my = (i as u32) / symbol;
        let (px, py) = (offset + mx * scale, offset + my * scale);
        for dy in 0..scale {
            for dx in 0..scale {
                img.put_pixel(px + dx, py + dy, opts.dark);
            }
        }
    }

    Ok(img)
}
