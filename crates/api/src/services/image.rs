//! Image normalization pipeline.
//!
//! Turns an arbitrary uploaded image into a bounded, compressed,
//! embeddable representation: decode, cap the width at 1200px (scaling
//! height proportionally), re-encode as JPEG at quality 80, and wrap the
//! result as a base64 data URL.
//!
//! The pipeline is a pure function of its input: no I/O, no retries. A
//! decode failure is terminal and surfaced to the caller.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, imageops::FilterType};
use thiserror::Error;

use ladle_core::EmbeddedImage;

/// Maximum accepted upload size in bytes (5 MiB), checked before decoding.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Maximum output width in pixels. Wider images are scaled down.
pub const MAX_WIDTH: u32 = 1200;

/// JPEG re-encode quality (out of 100).
const JPEG_QUALITY: u8 = 80;

/// Errors that can occur normalizing an upload.
#[derive(Debug, Error)]
pub enum ImagePipelineError {
    /// The upload exceeds [`MAX_UPLOAD_BYTES`]. Reported before any decode
    /// attempt.
    #[error("upload of {size} bytes exceeds the 5 MiB limit")]
    PayloadTooLarge {
        /// Size of the rejected upload.
        size: usize,
    },

    /// The bytes could not be decoded as an image.
    #[error("could not decode image: {0}")]
    InvalidImage(String),
}

/// Normalize raw uploaded image bytes into an embeddable representation.
///
/// # Errors
///
/// Returns `PayloadTooLarge` if the upload exceeds 5 MiB (before any
/// decode attempt), or `InvalidImage` if the bytes cannot be decoded or
/// re-encoded.
pub fn normalize(bytes: &[u8]) -> Result<EmbeddedImage, ImagePipelineError> {
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(ImagePipelineError::PayloadTooLarge { size: bytes.len() });
    }

    let decoded = image::load_from_memory(bytes)
        .map_err(|e| ImagePipelineError::InvalidImage(e.to_string()))?;

    let bounded = bound_width(decoded);

    // JPEG has no alpha channel; flatten before encoding.
    let raster = bounded.to_rgb8();

    let mut encoded = Vec::new();
    JpegEncoder::new_with_quality(&mut encoded, JPEG_QUALITY)
        .encode_image(&raster)
        .map_err(|e| ImagePipelineError::InvalidImage(e.to_string()))?;

    Ok(EmbeddedImage::from_encoded("jpeg", &BASE64.encode(&encoded)))
}

/// Scale the image down to [`MAX_WIDTH`] if it is wider, preserving aspect
/// ratio. Images already within bounds keep their original dimensions.
fn bound_width(image: DynamicImage) -> DynamicImage {
    match scaled_dimensions(image.width(), image.height()) {
        Some((width, height)) => image.resize_exact(width, height, FilterType::Triangle),
        None => image,
    }
}

/// The target dimensions for an over-wide image, or `None` when the image
/// is already within bounds.
fn scaled_dimensions(width: u32, height: u32) -> Option<(u32, u32)> {
    if width <= MAX_WIDTH {
        return None;
    }

    let scaled = u64::from(height) * u64::from(MAX_WIDTH) / u64::from(width);
    let scaled = u32::try_from(scaled).unwrap_or(u32::MAX);

    Some((MAX_WIDTH, scaled.max(1)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([200, 80, 40])));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    fn decode_output(image: &EmbeddedImage) -> DynamicImage {
        let bytes = BASE64.decode(image.payload()).unwrap();
        image::load_from_memory(&bytes).unwrap()
    }

    #[test]
    fn test_wide_image_is_scaled_to_max_width() {
        let output = normalize(&png_bytes(2400, 900)).unwrap();
        let decoded = decode_output(&output);

        assert_eq!(decoded.width(), 1200);
        assert_eq!(decoded.height(), 450);
    }

    #[test]
    fn test_narrow_image_keeps_dimensions() {
        let output = normalize(&png_bytes(800, 600)).unwrap();
        let decoded = decode_output(&output);

        assert_eq!(decoded.width(), 800);
        assert_eq!(decoded.height(), 600);
    }

    #[test]
    fn test_output_is_a_jpeg_data_url() {
        let output = normalize(&png_bytes(10, 10)).unwrap();
        assert!(output.as_str().starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_alpha_is_flattened() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            20,
            20,
            Rgba([200, 80, 40, 128]),
        ));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();

        assert!(normalize(&out.into_inner()).is_ok());
    }

    #[test]
    fn test_oversized_payload_rejected_before_decode() {
        // Not an image at all - the size gate must fire first.
        let too_big = vec![0_u8; MAX_UPLOAD_BYTES + 1];
        assert!(matches!(
            normalize(&too_big),
            Err(ImagePipelineError::PayloadTooLarge { size }) if size == MAX_UPLOAD_BYTES + 1
        ));
    }

    #[test]
    fn test_undecodable_bytes_are_invalid() {
        assert!(matches!(
            normalize(b"definitely not an image"),
            Err(ImagePipelineError::InvalidImage(_))
        ));
    }

    #[test]
    fn test_idempotent_for_identical_input() {
        let input = png_bytes(1500, 1000);
        assert_eq!(normalize(&input).unwrap(), normalize(&input).unwrap());
    }

    #[test]
    fn test_scaled_dimensions_rounding() {
        assert_eq!(scaled_dimensions(1200, 900), None);
        assert_eq!(scaled_dimensions(2400, 901), Some((1200, 450)));
        assert_eq!(scaled_dimensions(100_000, 1), Some((1200, 1)));
    }
}
