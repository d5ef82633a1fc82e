//! QR raster renderer.
//!
//! A pure, deterministic function of the transport string: the payload goes
//! through QR symbol generation at medium error correction and comes out as
//! a grayscale PNG sized toward a 256-pixel square. Rendering failure is
//! always non-fatal to the rest of the pipeline: the transport string
//! remains usable without an image.
//!
//! Two independent Base64 layers exist around a QR code: the payload
//! transport (what the symbol carries) and the PNG embedding for HTML
//! (`render_png_base64`). They must never be conflated.

use std::io::Cursor;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{GrayImage, ImageFormat, Luma};
use qrcodegen::{QrCode, QrCodeEcc};

use crate::core::QrError;

/// Edge length the rendered symbol is scaled toward, in pixels.
pub const TARGET_PIXELS: u32 = 256;

/// Quiet-zone width on each side, in modules.
const QUIET_ZONE: u32 = 4;

/// Render a transport string into PNG image bytes.
pub fn render_png(payload: &str) -> Result<Vec<u8>, QrError> {
    let qr = QrCode::encode_text(payload, QrCodeEcc::Medium)
        .map_err(|e| QrError::RenderFailed(e.to_string()))?;

    let size = qr.size() as u32;
    let modules = size + 2 * QUIET_ZONE;
    let scale = (TARGET_PIXELS / modules).max(1);
    let dim = modules * scale;

    let mut img = GrayImage::from_pixel(dim, dim, Luma([0xFF]));
    for y in 0..size {
        for x in 0..size {
            if !qr.get_module(x as i32, y as i32) {
                continue;
            }
            let px = (x + QUIET_ZONE) * scale;
            let py = (y + QUIET_ZONE) * scale;
            for dy in 0..scale {
                for dx in 0..scale {
                    img.put_pixel(px + dx, py + dy, Luma([0x00]));
                }
            }
        }
    }

    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| QrError::RenderFailed(e.to_string()))?;
    Ok(png)
}

/// Render a transport string into a Base64-encoded PNG for HTML embedding
/// (`<img src="data:image/png;base64,...">`).
pub fn render_png_base64(payload: &str) -> Result<String, QrError> {
    Ok(STANDARD.encode(render_png(payload)?))
}
