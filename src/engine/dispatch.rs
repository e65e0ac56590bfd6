// src/engine/dispatch.rs
//
// The option-dispatch contract: one selected operation, one borrowed RGB
// buffer, one result. Validation happens here, before any library call,
// so a bad parameter is an error value and never a library fault.

use image::{GrayImage, RgbImage};
use tracing::debug;

use crate::engine::histogram::Histogram;
use crate::engine::{color, filter, geometry, outline};
use crate::error::{Result, TransformError};
use crate::ops::{Operation, OutputKind, ADJUST_MAX, ADJUST_MIN, ANGLE_MAX, ANGLE_MIN};

/// Result of one dispatched operation, ready for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    /// Three-channel image (RGB samples, or HSV samples for the
    /// color-space conversion)
    Color(RgbImage),
    /// Single-channel image
    Gray(GrayImage),
    /// 256-bin intensity histogram
    Chart(Histogram),
}

impl Output {
    /// Which renderer the UI shell should hand this to.
    pub fn kind(&self) -> OutputKind {
        match self {
            Output::Color(_) => OutputKind::Color,
            Output::Gray(_) => OutputKind::Gray,
            Output::Chart(_) => OutputKind::Chart,
        }
    }

    /// Pixel dimensions for image outputs, `None` for charts.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        match self {
            Output::Color(img) => Some(img.dimensions()),
            Output::Gray(img) => Some(img.dimensions()),
            Output::Chart(_) => None,
        }
    }
}

/// Apply one operation to a borrowed RGB buffer.
///
/// Pure in its inputs: the buffer is only read, every result is freshly
/// allocated, and no state survives the call. Errors are terminal for the
/// interaction; the caller keeps whatever it was displaying before.
pub fn apply(image: &RgbImage, op: &Operation) -> Result<Output> {
    let contract = op.contract();
    debug!(
        target: "pixlab::dispatch",
        op = contract.name,
        width = image.width(),
        height = image.height(),
        "applying transform"
    );

    match *op {
        Operation::RgbToHsv => Ok(Output::Color(color::rgb_to_hsv(image))),

        Operation::Histogram => Ok(Output::Chart(Histogram::measure(image))),

        Operation::BrightnessContrast {
            brightness,
            contrast,
        } => {
            validate_adjustment("brightness", brightness)?;
            validate_adjustment("contrast", contrast)?;
            Ok(Output::Color(color::adjust_brightness_contrast(
                image, brightness, contrast,
            )))
        }

        Operation::Contour => Ok(Output::Color(outline::annotate_contours(image))),

        Operation::Grayscale => Ok(Output::Gray(color::grayscale(image))),

        Operation::Blur => Ok(Output::Color(filter::blur(image))),

        Operation::EdgeDetection => Ok(Output::Gray(filter::detect_edges(image))),

        Operation::Threshold => Ok(Output::Gray(filter::threshold_binary(image))),

        Operation::Rotate { degrees } => {
            if !(ANGLE_MIN..=ANGLE_MAX).contains(&degrees) {
                return Err(TransformError::invalid_rotation_angle(degrees));
            }
            if degrees == 0 {
                // identity rotation, skip the resampling pass
                return Ok(Output::Color(image.clone()));
            }
            Ok(Output::Color(geometry::rotate(image, degrees)))
        }

        Operation::Resize { width, height } => {
            geometry::resize(image, width, height).map(Output::Color)
        }

        Operation::Flip { axis } => Ok(Output::Color(geometry::flip(image, axis))),

        Operation::Crop {
            x,
            y,
            width,
            height,
        } => geometry::crop(image, x, y, width, height).map(Output::Color),

        Operation::RemoveBackground => Err(TransformError::unsupported_operation(contract.name)),
    }
}

fn validate_adjustment(name: &'static str, value: i32) -> Result<()> {
    if (ADJUST_MIN..=ADJUST_MAX).contains(&value) {
        Ok(())
    } else {
        Err(TransformError::invalid_adjustment(
            name, value, ADJUST_MIN, ADJUST_MAX,
        ))
    }
}
