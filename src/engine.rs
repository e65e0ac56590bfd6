// src/engine.rs
//
// The core of pixlab. One upload, one decode, one dispatched transform,
// one result handed back for display. Nothing is retained across calls.
//
// This file is a facade that delegates to the decomposed modules in engine/

// =============================================================================
// SECURITY LIMITS
// =============================================================================

/// Maximum allowed image dimension (width or height).
/// Images larger than 32768x32768 are rejected to prevent decompression bombs.
pub const MAX_DIMENSION: u32 = 32768;

/// Maximum allowed total pixels (width * height).
/// 100 megapixels = 300MB uncompressed RGB. Beyond this is likely malicious.
pub const MAX_PIXELS: u64 = 100_000_000;

// =============================================================================
// MODULE DECOMPOSITION
// =============================================================================

mod color;
mod decoder;
mod dispatch;
mod filter;
mod geometry;
mod histogram;
mod outline;

// Re-export commonly used types and functions
pub use color::{adjust_brightness_contrast, grayscale, hsv_to_rgb, rgb_to_hsv};
pub use decoder::{check_dimensions, decode_rgb};
pub use dispatch::{apply, Output};
pub use filter::{blur, detect_edges, threshold_binary, BINARY_THRESHOLD, CANNY_HIGH, CANNY_LOW};
pub use geometry::{crop, flip, resize, rotate};
pub use histogram::{Histogram, HISTOGRAM_BINS};
pub use outline::{annotate_contours, trace_contours, CONTOUR_COLOR};
