// src/engine/color.rs
//
// Channel-space conversions and the linear tone map.

use image::{GrayImage, Rgb, RgbImage};
use palette::{FromColor, Hsv, Srgb};

/// Convert RGB channels to the 8-bit HSV convention: hue halved into
/// [0, 180], saturation and value scaled to [0, 255].
///
/// The output is a 3-channel buffer of identical dimensions with
/// reinterpreted channel semantics; displaying it raw gives the familiar
/// false-color rendering.
pub fn rgb_to_hsv(image: &RgbImage) -> RgbImage {
    let mut out = RgbImage::new(image.width(), image.height());
    for (src, dst) in image.pixels().zip(out.pixels_mut()) {
        let Rgb([r, g, b]) = *src;
        let hsv = Hsv::from_color(Srgb::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        ));
        *dst = Rgb([
            (hsv.hue.into_positive_degrees() / 2.0).round() as u8,
            (hsv.saturation * 255.0).round() as u8,
            (hsv.value * 255.0).round() as u8,
        ]);
    }
    out
}

/// Inverse of [`rgb_to_hsv`]: interpret the channels as 8-bit HSV and
/// convert back to RGB.
pub fn hsv_to_rgb(image: &RgbImage) -> RgbImage {
    let mut out = RgbImage::new(image.width(), image.height());
    for (src, dst) in image.pixels().zip(out.pixels_mut()) {
        let Rgb([h, s, v]) = *src;
        let rgb = Srgb::from_color(Hsv::new(
            f32::from(h) * 2.0,
            f32::from(s) / 255.0,
            f32::from(v) / 255.0,
        ));
        *dst = Rgb([
            (rgb.red * 255.0).round() as u8,
            (rgb.green * 255.0).round() as u8,
            (rgb.blue * 255.0).round() as u8,
        ]);
    }
    out
}

/// Luminance conversion to a single channel.
pub fn grayscale(image: &RgbImage) -> GrayImage {
    image::imageops::grayscale(image)
}

/// Linear tone map `v * alpha + beta` with `alpha = 1 + contrast/127` and
/// `beta = brightness`, rounded and saturated into [0, 255] per sample.
///
/// Callers validate the slider ranges; at (0, 0) this is the identity.
pub fn adjust_brightness_contrast(image: &RgbImage, brightness: i32, contrast: i32) -> RgbImage {
    let alpha = 1.0 + contrast as f32 / 127.0;
    let beta = brightness as f32;
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        for sample in &mut pixel.0 {
            *sample = (f32::from(*sample) * alpha + beta)
                .round()
                .clamp(0.0, 255.0) as u8;
        }
    }
    out
}
