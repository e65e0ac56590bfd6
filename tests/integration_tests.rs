// tests/integration_tests.rs
//
// End-to-end scenarios: uploaded bytes through decode and dispatch,
// the way the UI shell drives the crate.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use pixlab::{apply, decode_rgb, ErrorCategory, FlipAxis, Operation, Output, TransformError};

// Helper function to create test images
fn create_test_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    })
}

fn png_bytes(img: RgbImage) -> Vec<u8> {
    let mut buf = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();
    buf
}

fn jpeg_bytes(img: RgbImage) -> Vec<u8> {
    let mut buf = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Jpeg)
        .unwrap();
    buf
}

fn as_color(out: Output) -> RgbImage {
    match out {
        Output::Color(img) => img,
        other => panic!("expected color output, got {:?}", other.kind()),
    }
}

mod upload_scenarios {
    use super::*;

    #[test]
    fn grayscale_of_solid_red_upload() {
        let red = RgbImage::from_pixel(100, 100, Rgb([255, 0, 0]));
        let decoded = decode_rgb(&png_bytes(red)).unwrap();
        let out = apply(&decoded, &Operation::Grayscale).unwrap();

        let Output::Gray(gray) = out else {
            panic!("expected single-channel output");
        };
        assert_eq!(gray.dimensions(), (100, 100));

        // constant at whatever the luminance weighting assigns pure red
        let expected = DynamicImage::ImageRgb8(RgbImage::from_pixel(1, 1, Rgb([255, 0, 0])))
            .to_luma8()
            .get_pixel(0, 0)[0];
        assert!(expected > 0 && expected < 100);
        assert!(gray.pixels().all(|p| p[0] == expected));
    }

    #[test]
    fn thresholding_produces_only_binary_values() {
        let decoded = decode_rgb(&png_bytes(create_test_image(64, 48))).unwrap();
        let out = apply(&decoded, &Operation::Threshold).unwrap();
        let Output::Gray(bin) = out else {
            panic!("expected single-channel output");
        };
        assert!(bin.pixels().all(|p| p[0] == 0 || p[0] == 255));
    }

    #[test]
    fn edge_detection_on_flat_upload_is_empty() {
        let flat = RgbImage::from_pixel(64, 64, Rgb([120, 50, 200]));
        let decoded = decode_rgb(&png_bytes(flat)).unwrap();
        let out = apply(&decoded, &Operation::EdgeDetection).unwrap();
        let Output::Gray(edges) = out else {
            panic!("expected single-channel output");
        };
        assert!(edges.pixels().all(|p| p[0] == 0));
    }

    #[test]
    fn jpeg_uploads_are_accepted_too() {
        let decoded = decode_rgb(&jpeg_bytes(create_test_image(40, 30))).unwrap();
        assert_eq!(decoded.dimensions(), (40, 30));
        assert!(apply(&decoded, &Operation::Histogram).is_ok());
    }

    #[test]
    fn contour_overlays_a_working_copy() {
        let img = RgbImage::from_fn(30, 30, |x, y| {
            if (8..22).contains(&x) && (8..22).contains(&y) {
                Rgb([255, 255, 255])
            } else {
                Rgb([0, 0, 0])
            }
        });
        let decoded = decode_rgb(&png_bytes(img.clone())).unwrap();
        let annotated = as_color(apply(&decoded, &Operation::Contour).unwrap());

        assert_eq!(annotated.dimensions(), decoded.dimensions());
        assert!(annotated.pixels().any(|p| *p == Rgb([0, 255, 0])));
        // the decoded buffer the UI holds is untouched
        assert_eq!(decoded, img);
    }

    #[test]
    fn histogram_of_upload_sums_to_pixel_count() {
        let decoded = decode_rgb(&png_bytes(create_test_image(37, 21))).unwrap();
        let Output::Chart(hist) = apply(&decoded, &Operation::Histogram).unwrap() else {
            panic!("expected chart output");
        };
        assert_eq!(hist.bins().len(), 256);
        assert_eq!(hist.total(), 37 * 21);
    }
}

mod color_space {
    use super::*;

    #[test]
    fn rgb_to_hsv_keeps_dimensions() {
        let img = create_test_image(17, 11);
        let hsv = as_color(apply(&img, &Operation::RgbToHsv).unwrap());
        assert_eq!(hsv.dimensions(), (17, 11));
    }

    #[test]
    fn hsv_round_trip_reconstructs_within_tolerance() {
        let img = create_test_image(16, 16);
        let hsv = as_color(apply(&img, &Operation::RgbToHsv).unwrap());
        let back = pixlab::engine::hsv_to_rgb(&hsv);
        for (orig, rt) in img.pixels().zip(back.pixels()) {
            for c in 0..3 {
                let diff = (i16::from(orig[c]) - i16::from(rt[c])).abs();
                assert!(diff <= 8, "channel {c} drifted by {diff}");
            }
        }
    }
}

mod geometry_scenarios {
    use super::*;

    #[test]
    fn flip_round_trip_both_axes() {
        let img = create_test_image(23, 17);
        for axis in [FlipAxis::Vertical, FlipAxis::Horizontal] {
            let once = as_color(apply(&img, &Operation::Flip { axis }).unwrap());
            let twice = as_color(apply(&once, &Operation::Flip { axis }).unwrap());
            assert_eq!(twice, img);
        }
    }

    #[test]
    fn full_frame_crop_returns_the_image_unchanged() {
        let img = create_test_image(50, 40);
        let out = as_color(
            apply(
                &img,
                &Operation::Crop {
                    x: 0,
                    y: 0,
                    width: Some(50),
                    height: Some(40),
                },
            )
            .unwrap(),
        );
        assert_eq!(out, img);
    }

    #[test]
    fn oversized_crop_is_an_invalid_parameter() {
        let img = create_test_image(50, 40);
        let err = apply(
            &img,
            &Operation::Crop {
                x: 0,
                y: 0,
                width: Some(51),
                height: Some(40),
            },
        )
        .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::InvalidParameter);
    }

    #[test]
    fn zero_resize_is_an_invalid_parameter() {
        let img = create_test_image(50, 40);
        let err = apply(
            &img,
            &Operation::Resize {
                width: Some(0),
                height: Some(100),
            },
        )
        .unwrap_err();
        assert!(matches!(err, TransformError::InvalidResizeDimensions { .. }));
        assert_eq!(err.category(), ErrorCategory::InvalidParameter);
    }

    #[test]
    fn resize_changes_canvas_to_target() {
        let img = create_test_image(64, 64);
        let out = as_color(
            apply(
                &img,
                &Operation::Resize {
                    width: Some(32),
                    height: Some(48),
                },
            )
            .unwrap(),
        );
        assert_eq!(out.dimensions(), (32, 48));
    }

    #[test]
    fn rotate_keeps_canvas_and_zero_is_identity() {
        let img = create_test_image(31, 19);
        let out = as_color(apply(&img, &Operation::Rotate { degrees: 0 }).unwrap());
        assert_eq!(out, img);
        let out = as_color(apply(&img, &Operation::Rotate { degrees: 90 }).unwrap());
        assert_eq!(out.dimensions(), (31, 19));
    }
}

mod error_policy {
    use super::*;

    #[test]
    fn remove_background_has_no_handler() {
        let img = create_test_image(8, 8);
        let err = apply(&img, &Operation::RemoveBackground).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Unsupported);
        assert!(!err.is_recoverable());
    }

    #[test]
    fn undecodable_upload_is_rejected_before_any_transform() {
        let err = decode_rgb(b"not an image at all").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::InvalidInput);
    }

    #[test]
    fn unaccepted_container_is_named_in_the_error() {
        let mut gif = b"GIF89a".to_vec();
        gif.extend_from_slice(&[0u8; 32]);
        let err = decode_rgb(&gif).unwrap_err();
        assert!(matches!(err, TransformError::UnsupportedFormat { .. }));
        assert!(err.to_string().contains("gif"));
    }
}
