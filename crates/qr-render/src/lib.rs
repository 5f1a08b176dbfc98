//! QR code rendering and logo branding.
//!
//! Renders payloads into square RGBA bitmaps, composites a logo on a white
//! circular pad at the center, and reads/writes PNG files.

pub mod codec;
pub mod compose;
pub mod qr;
pub mod resize;

// Re-exports for convenience
pub use codec::{decode_png, encode_png, load_image, save_png};
pub use compose::{
    ComposeOptions, LOGO_SCALE, LogoPlacement, MARGIN_SCALE, composite, composite_with,
    plan_placement,
};
pub use qr::{QrOptions, render_qr};
pub use resize::{fit_dimensions, resize_logo};

/// Errors that can occur while rendering or branding a QR code.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("QR encode error: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error(transparent)]
    Codec(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for qr-render operations.
pub type Result<T> = std::result::Result<T, RenderError>;
