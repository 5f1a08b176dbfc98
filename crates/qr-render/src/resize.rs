//! Logo resizing utilities.
//!
//! Provides aspect-ratio-preserving fitting and Lanczos3 resampling.

use image::RgbaImage;
use image::imageops::{self, FilterType};
use tracing::debug;

/// Fit `width` x `height` into a square of side `max_side`, keeping the aspect ratio.
///
/// The larger dimension becomes `max_side`, the other one is scaled by the
/// aspect ratio. Both results are truncated to whole pixels and may be zero
/// when `max_side` is small. Callers must pass a non-zero `height`.
pub fn fit_dimensions(width: u32, height: u32, max_side: f64) -> (u32, u32) {
    let aspect_ratio = f64::from(width) / f64::from(height);

    if aspect_ratio > 1.0 {
        (max_side as u32, (max_side / aspect_ratio) as u32)
    } else {
        ((max_side * aspect_ratio) as u32, max_side as u32)
    }
}

/// Resize an image to exactly `width` x `height`.
///
/// Uses Lanczos3 filtering to avoid aliasing on small logos.
/// Returns a copy of the original if it already has the target size.
pub fn resize_logo(img: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let (orig_w, orig_h) = img.dimensions();

    if (orig_w, orig_h) == (width, height) {
        debug!(width, height, "Logo already at target size, skipping resize");
        return img.clone();
    }

    debug!(
        orig_w,
        orig_h,
        new_width = width,
        new_height = height,
        "Resizing logo"
    );

    imageops::resize(img, width, height, FilterType::Lanczos3)
}
