// src/engine/geometry.rs
//
// Canvas-shape transforms: rotate, resize, flip, crop.
// Resize rides fast_image_resize with the image crate as fallback.

use fast_image_resize::{self as fir, PixelType, ResizeOptions};
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use imageproc::geometric_transformations::{rotate_about_center, Interpolation};

use crate::error::{Result, TransformError};
use crate::ops::FlipAxis;

/// Affine rotation about the image center, scale 1.0, bilinear sampling.
///
/// The output canvas keeps the input dimensions; content leaving the frame
/// is clipped and uncovered corners fill black. Positive angles turn
/// counter-clockwise, which is why theta is negated for the underlying
/// clockwise-rotating routine.
pub fn rotate(image: &RgbImage, degrees: i32) -> RgbImage {
    let theta = -(degrees as f32).to_radians();
    rotate_about_center(image, theta, Interpolation::Bilinear, Rgb([0, 0, 0]))
}

/// Interpolated resize to the target dimensions. `None` keeps the
/// corresponding original dimension (the UI pre-fills the fields with the
/// upload's size). Zero targets are refused here, before any library call.
pub fn resize(image: &RgbImage, width: Option<u32>, height: Option<u32>) -> Result<RgbImage> {
    let target_w = width.unwrap_or(image.width());
    let target_h = height.unwrap_or(image.height());
    if target_w == 0 || target_h == 0 {
        return Err(TransformError::invalid_resize_dimensions(target_w, target_h));
    }
    if (target_w, target_h) == image.dimensions() {
        return Ok(image.clone());
    }
    Ok(fast_resize(image, target_w, target_h))
}

// Bilinear resize through fast_image_resize, falling back to the image
// crate when the source buffer fails fir's alignment requirements.
fn fast_resize(image: &RgbImage, dst_width: u32, dst_height: u32) -> RgbImage {
    let (src_width, src_height) = image.dimensions();
    let mut src_pixels = image.as_raw().clone();

    let options =
        ResizeOptions::new().resize_alg(fir::ResizeAlg::Convolution(fir::FilterType::Bilinear));

    let fir_result = fir::images::Image::from_slice_u8(
        src_width,
        src_height,
        src_pixels.as_mut_slice(),
        PixelType::U8x3,
    )
    .ok()
    .and_then(|src_image| {
        let mut dst_image = fir::images::Image::new(dst_width, dst_height, PixelType::U8x3);
        let mut resizer = fir::Resizer::new();
        resizer.resize(&src_image, &mut dst_image, &options).ok()?;
        RgbImage::from_raw(dst_width, dst_height, dst_image.into_vec())
    });

    match fir_result {
        Some(resized) => resized,
        None => imageops::resize(image, dst_width, dst_height, FilterType::Triangle),
    }
}

/// Mirror along the requested axis; dimensions are unchanged and the
/// transform is its own inverse.
pub fn flip(image: &RgbImage, axis: FlipAxis) -> RgbImage {
    match axis {
        FlipAxis::Vertical => imageops::flip_vertical(image),
        FlipAxis::Horizontal => imageops::flip_horizontal(image),
    }
}

/// Bounds-validated rectangular extraction. `None` extents run to the
/// image edge, so the all-default crop returns the full image.
///
/// Out-of-range rectangles are an error, never a silent clamp.
pub fn crop(
    image: &RgbImage,
    x: u32,
    y: u32,
    width: Option<u32>,
    height: Option<u32>,
) -> Result<RgbImage> {
    let (img_w, img_h) = image.dimensions();
    let width = width.unwrap_or_else(|| img_w.saturating_sub(x));
    let height = height.unwrap_or_else(|| img_h.saturating_sub(y));

    if width == 0 || height == 0 {
        return Err(TransformError::invalid_crop_dimensions(width, height));
    }
    if u64::from(x) + u64::from(width) > u64::from(img_w)
        || u64::from(y) + u64::from(height) > u64::from(img_h)
    {
        return Err(TransformError::invalid_crop_bounds(
            x, y, width, height, img_w, img_h,
        ));
    }

    Ok(imageops::crop_imm(image, x, y, width, height).to_image())
}
