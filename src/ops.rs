// src/ops.rs
//
// The operation selector as a closed enum.
// Each variant carries its own parameters - nothing persists between calls.

use bitflags::bitflags;

/// Inclusive bounds of the brightness and contrast sliders.
pub const ADJUST_MIN: i32 = -100;
pub const ADJUST_MAX: i32 = 100;

/// Inclusive bounds of the rotation slider, in degrees.
pub const ANGLE_MIN: i32 = -180;
pub const ANGLE_MAX: i32 = 360;

/// A single selected transformation.
///
/// Design principle: one variant per selector entry, matched exhaustively.
/// Adding or removing an entry is a compile-time-checked change, and there
/// is no hidden widget state - the UI rebuilds the value on every call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Reinterpret the RGB channels as hue/saturation/value
    RgbToHsv,

    /// 256-bin frequency distribution of the first channel
    Histogram,

    /// Linear tone map `v * (1 + contrast/127) + brightness`, saturated
    BrightnessContrast { brightness: i32, contrast: i32 },

    /// Trace boundaries of the binarized image and draw them over a copy
    Contour,

    /// Luminance conversion to a single channel
    Grayscale,

    /// Gaussian smoothing with the fixed 5x5 kernel
    Blur,

    /// Canny edge map with fixed thresholds 100/200
    EdgeDetection,

    /// Binary threshold at 127 on the grayscale image
    Threshold,

    /// Affine rotation about the center; same canvas, corners fill black
    Rotate { degrees: i32 },

    /// Interpolated resize; `None` keeps the original dimension
    Resize {
        width: Option<u32>,
        height: Option<u32>,
    },

    /// Mirror along one axis
    Flip { axis: FlipAxis },

    /// Rectangular extraction; `None` extends to the image edge
    Crop {
        x: u32,
        y: u32,
        width: Option<u32>,
        height: Option<u32>,
    },

    /// Listed in the selector but has no handler; always refused
    RemoveBackground,
}

/// Mirror axis for [`Operation::Flip`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipAxis {
    /// Top-bottom mirror
    Vertical,
    /// Left-right mirror
    Horizontal,
}

/// What kind of buffer an operation hands back, so the UI shell can pick
/// a renderer without inspecting the result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputKind {
    /// Three-channel image
    Color,
    /// Single-channel image
    Gray,
    /// 256-bin histogram, rendered as a bar chart
    Chart,
}

bitflags! {
    /// Static facts about what an operation does to the buffer.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct OperationEffect: u8 {
        /// Converts to single-channel internally (the caller's buffer is untouched)
        const GRAYSCALES = 1 << 0;
        /// Output dimensions may differ from the input's
        const RESIZES_CANVAS = 1 << 1;
        /// Draws an overlay onto a working copy of the input
        const ANNOTATES = 1 << 2;
    }
}

/// Per-operation metadata consumed by dispatch logging and the UI shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperationContract {
    /// Selector display name
    pub name: &'static str,
    pub output: OutputKind,
    pub effects: OperationEffect,
}

impl Operation {
    /// Static contract for this variant.
    pub fn contract(&self) -> OperationContract {
        match self {
            Operation::RgbToHsv => OperationContract {
                name: "RGB to HSV",
                output: OutputKind::Color,
                effects: OperationEffect::empty(),
            },
            Operation::Histogram => OperationContract {
                name: "Histogram",
                output: OutputKind::Chart,
                effects: OperationEffect::empty(),
            },
            Operation::BrightnessContrast { .. } => OperationContract {
                name: "Brightness and Contrast",
                output: OutputKind::Color,
                effects: OperationEffect::empty(),
            },
            Operation::Contour => OperationContract {
                name: "Contour",
                output: OutputKind::Color,
                effects: OperationEffect::GRAYSCALES.union(OperationEffect::ANNOTATES),
            },
            Operation::Grayscale => OperationContract {
                name: "Grayscale",
                output: OutputKind::Gray,
                effects: OperationEffect::GRAYSCALES,
            },
            Operation::Blur => OperationContract {
                name: "Blur",
                output: OutputKind::Color,
                effects: OperationEffect::empty(),
            },
            Operation::EdgeDetection => OperationContract {
                name: "Edge Detection",
                output: OutputKind::Gray,
                effects: OperationEffect::GRAYSCALES,
            },
            Operation::Threshold => OperationContract {
                name: "Thresholding",
                output: OutputKind::Gray,
                effects: OperationEffect::GRAYSCALES,
            },
            Operation::Rotate { .. } => OperationContract {
                name: "Rotate",
                output: OutputKind::Color,
                effects: OperationEffect::empty(),
            },
            Operation::Resize { .. } => OperationContract {
                name: "Resize",
                output: OutputKind::Color,
                effects: OperationEffect::RESIZES_CANVAS,
            },
            Operation::Flip { .. } => OperationContract {
                name: "Flip",
                output: OutputKind::Color,
                effects: OperationEffect::empty(),
            },
            Operation::Crop { .. } => OperationContract {
                name: "Crop",
                output: OutputKind::Color,
                effects: OperationEffect::RESIZES_CANVAS,
            },
            Operation::RemoveBackground => OperationContract {
                name: "Remove Background",
                output: OutputKind::Color,
                effects: OperationEffect::empty(),
            },
        }
    }

    /// Selector display name.
    pub fn name(&self) -> &'static str {
        self.contract().name
    }
}
