// src/engine/filter.rs
//
// Fixed-parameter convolution and threshold transforms.

use image::{GrayImage, RgbImage};
use imageproc::contrast::{threshold, ThresholdType};
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;

use crate::engine::color;

/// Side length of the fixed Gaussian kernel.
pub const BLUR_KERNEL: u32 = 5;

/// Canny hysteresis thresholds.
pub const CANNY_LOW: f32 = 100.0;
pub const CANNY_HIGH: f32 = 200.0;

/// Binary threshold cut point; samples above it map to 255.
pub const BINARY_THRESHOLD: u8 = 127;

// Sigma the underlying library would derive for a given kernel size when
// told to pick one itself: 0.3 * ((k - 1) * 0.5 - 1) + 0.8.
fn derived_sigma(kernel: u32) -> f32 {
    0.3 * ((kernel - 1) as f32 * 0.5 - 1.0) + 0.8
}

/// Gaussian smoothing with the fixed 5x5 kernel and auto-derived sigma.
pub fn blur(image: &RgbImage) -> RgbImage {
    gaussian_blur_f32(image, derived_sigma(BLUR_KERNEL))
}

/// Two-threshold Canny edge map over the grayscale image. The result is a
/// single-channel buffer holding only 0 and 255.
pub fn detect_edges(image: &RgbImage) -> GrayImage {
    canny(&color::grayscale(image), CANNY_LOW, CANNY_HIGH)
}

/// Grayscale then binary threshold at [`BINARY_THRESHOLD`].
pub fn threshold_binary(image: &RgbImage) -> GrayImage {
    threshold(
        &color::grayscale(image),
        BINARY_THRESHOLD,
        ThresholdType::Binary,
    )
}
