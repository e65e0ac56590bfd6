// src/engine/histogram.rs
//
// 256-bin intensity histogram of the first channel, no masking.

use image::RgbImage;

/// Number of intensity bins; one per representable 8-bit value.
pub const HISTOGRAM_BINS: usize = 256;

/// Frequency distribution of the first (red) channel over the full image.
///
/// Bins always sum to width * height of the measured image. The UI shell
/// renders this as a bar chart over the 256 bins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram {
    bins: [u64; HISTOGRAM_BINS],
}

impl Histogram {
    /// Measure an image.
    pub fn measure(image: &RgbImage) -> Self {
        let mut bins = [0u64; HISTOGRAM_BINS];
        for pixel in image.pixels() {
            bins[pixel.0[0] as usize] += 1;
        }
        Histogram { bins }
    }

    /// The ordered bin counts.
    pub fn bins(&self) -> &[u64; HISTOGRAM_BINS] {
        &self.bins
    }

    /// Total count across all bins; equals width * height.
    pub fn total(&self) -> u64 {
        self.bins.iter().sum()
    }

    /// Largest single bin, for chart normalization.
    pub fn peak(&self) -> u64 {
        self.bins.iter().copied().max().unwrap_or(0)
    }
}
