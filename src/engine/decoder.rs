// src/engine/decoder.rs
//
// The decode boundary: uploaded bytes in, canonical RGB8 buffer out.
// The dispatcher never sees anything but 8-bit, 3-channel RGB.

use std::io::Cursor;

use image::{ImageFormat, ImageReader, RgbImage};
use tracing::debug;

use crate::engine::{MAX_DIMENSION, MAX_PIXELS};
use crate::error::{Result, TransformError};

/// Reject dimensions that would make downstream transforms allocate
/// unreasonable buffers. Applied right after the header is parsed, before
/// any pixel data is decoded into a full-size buffer we then transform.
pub fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width > MAX_DIMENSION {
        return Err(TransformError::dimension_exceeds_limit(width, MAX_DIMENSION));
    }
    if height > MAX_DIMENSION {
        return Err(TransformError::dimension_exceeds_limit(
            height,
            MAX_DIMENSION,
        ));
    }
    let pixels = u64::from(width) * u64::from(height);
    if pixels > MAX_PIXELS {
        return Err(TransformError::pixel_count_exceeds_limit(
            pixels, MAX_PIXELS,
        ));
    }
    Ok(())
}

/// Decode an uploaded JPEG or PNG into the canonical RGB8 representation.
///
/// The upload widget accepts only these two container formats; anything
/// else that still carries a recognizable magic number is refused by name,
/// unrecognizable bytes are refused as undecodable. Alpha and grayscale
/// sources are normalized to RGB so every operation sees the same layout.
pub fn decode_rgb(data: &[u8]) -> Result<RgbImage> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| TransformError::decode_failed(format!("failed to read image header: {e}")))?;

    let format = reader
        .format()
        .ok_or_else(|| TransformError::decode_failed("content is not a recognizable image"))?;
    match format {
        ImageFormat::Jpeg | ImageFormat::Png => {}
        other => {
            return Err(TransformError::unsupported_format(
                format!("{other:?}").to_lowercase(),
            ))
        }
    }

    let decoded = reader
        .decode()
        .map_err(|e| TransformError::decode_failed(format!("decode failed: {e}")))?;
    check_dimensions(decoded.width(), decoded.height())?;

    debug!(
        target: "pixlab::decode",
        width = decoded.width(),
        height = decoded.height(),
        format = ?format,
        "decoded upload"
    );

    Ok(decoded.to_rgb8())
}
