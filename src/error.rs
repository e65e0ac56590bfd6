// src/error.rs
//
// Unified error handling for pixlab
// Uses thiserror for simple, type-safe error handling
//
// Error Taxonomy:
// - InvalidInput: uploaded content is not usable as an image
// - InvalidParameter: a parameter violates an operation's precondition
// - Unsupported: a selector entry with no registered handler

use std::borrow::Cow;
use thiserror::Error;

/// Error taxonomy exposed to the UI shell.
///
/// Every error is terminal for the current interaction and none is fatal
/// to the process; the category tells the shell how to phrase the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Uploaded content is not decodable or not an accepted format
    InvalidInput,
    /// A parameter value violates an operation's precondition
    InvalidParameter,
    /// Operation identifier with no registered handler
    Unsupported,
}

/// pixlab error types
///
/// All errors are type-safe and provide clear, actionable messages.
/// No numeric error codes - just clear error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    // Decode-boundary errors
    #[error("Unsupported image format: {format}. Upload a JPEG or PNG")]
    UnsupportedFormat { format: Cow<'static, str> },

    #[error("Failed to decode image: {message}")]
    DecodeFailed { message: Cow<'static, str> },

    #[error("Image dimension {dimension} exceeds maximum {max}")]
    DimensionExceedsLimit { dimension: u32, max: u32 },

    #[error("Image pixel count {pixels} exceeds maximum {max}")]
    PixelCountExceedsLimit { pixels: u64, max: u64 },

    // Operation parameter errors
    #[error("Crop bounds ({x}+{width}, {y}+{height}) exceed image dimensions ({img_width}x{img_height})")]
    InvalidCropBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        img_width: u32,
        img_height: u32,
    },

    #[error("Invalid crop dimensions: width={width}, height={height}")]
    InvalidCropDimensions { width: u32, height: u32 },

    #[error("Invalid resize dimensions: width={width}, height={height}. Both must be positive")]
    InvalidResizeDimensions { width: u32, height: u32 },

    #[error("Unsupported rotation angle: {degrees}. Expected a value in [-180, 360]")]
    InvalidRotationAngle { degrees: i32 },

    #[error("Invalid value for {name}: {value}. Expected a value in [{min}, {max}]")]
    InvalidAdjustment {
        name: Cow<'static, str>,
        value: i32,
        min: i32,
        max: i32,
    },

    // Dispatch errors
    #[error("No handler registered for operation '{name}'")]
    UnsupportedOperation { name: Cow<'static, str> },
}

// Constructor Helpers
impl TransformError {
    pub fn unsupported_format(format: impl Into<Cow<'static, str>>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }

    pub fn decode_failed(message: impl Into<Cow<'static, str>>) -> Self {
        Self::DecodeFailed {
            message: message.into(),
        }
    }

    pub fn dimension_exceeds_limit(dimension: u32, max: u32) -> Self {
        Self::DimensionExceedsLimit { dimension, max }
    }

    pub fn pixel_count_exceeds_limit(pixels: u64, max: u64) -> Self {
        Self::PixelCountExceedsLimit { pixels, max }
    }

    pub fn invalid_crop_bounds(
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        img_width: u32,
        img_height: u32,
    ) -> Self {
        Self::InvalidCropBounds {
            x,
            y,
            width,
            height,
            img_width,
            img_height,
        }
    }

    pub fn invalid_crop_dimensions(width: u32, height: u32) -> Self {
        Self::InvalidCropDimensions { width, height }
    }

    pub fn invalid_resize_dimensions(width: u32, height: u32) -> Self {
        Self::InvalidResizeDimensions { width, height }
    }

    pub fn invalid_rotation_angle(degrees: i32) -> Self {
        Self::InvalidRotationAngle { degrees }
    }

    pub fn invalid_adjustment(
        name: impl Into<Cow<'static, str>>,
        value: i32,
        min: i32,
        max: i32,
    ) -> Self {
        Self::InvalidAdjustment {
            name: name.into(),
            value,
            min,
            max,
        }
    }

    pub fn unsupported_operation(name: impl Into<Cow<'static, str>>) -> Self {
        Self::UnsupportedOperation { name: name.into() }
    }

    /// Check if this error is recoverable (user can fix it)
    ///
    /// Parameter errors are recoverable by adjusting a widget; input errors
    /// by uploading a different file. An unsupported operation needs a
    /// different selector entry.
    pub fn is_recoverable(&self) -> bool {
        match self.category() {
            ErrorCategory::InvalidInput | ErrorCategory::InvalidParameter => true,
            ErrorCategory::Unsupported => false,
        }
    }

    /// Get the error category for this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnsupportedFormat { .. }
            | Self::DecodeFailed { .. }
            | Self::DimensionExceedsLimit { .. }
            | Self::PixelCountExceedsLimit { .. } => ErrorCategory::InvalidInput,

            Self::InvalidCropBounds { .. }
            | Self::InvalidCropDimensions { .. }
            | Self::InvalidResizeDimensions { .. }
            | Self::InvalidRotationAngle { .. }
            | Self::InvalidAdjustment { .. } => ErrorCategory::InvalidParameter,

            Self::UnsupportedOperation { .. } => ErrorCategory::Unsupported,
        }
    }
}

// Result type alias
pub type Result<T> = std::result::Result<T, TransformError>;
