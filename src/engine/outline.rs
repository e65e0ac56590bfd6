// src/engine/outline.rs
//
// Contour tracing over the binarized image and overlay drawing.

use image::{Rgb, RgbImage};
use imageproc::contours::find_contours;
use imageproc::drawing::draw_line_segment_mut;
use imageproc::geometry::approximate_polygon_dp;
use imageproc::point::Point;

use crate::engine::filter;

/// Highlight color for contour polylines.
pub const CONTOUR_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

/// Closed boundary polylines of the thresholded image.
///
/// The image is grayscale-converted and binarized at the fixed cut point,
/// then borders are followed with tree retrieval: outer boundaries and the
/// boundaries of nested holes are both reported. Runs of collinear points
/// are elided from each polyline.
pub fn trace_contours(image: &RgbImage) -> Vec<Vec<Point<i32>>> {
    let mask = filter::threshold_binary(image);
    find_contours::<i32>(&mask)
        .into_iter()
        .map(|contour| approximate_polygon_dp(&contour.points, 0.0, true))
        .filter(|points| !points.is_empty())
        .collect()
}

/// Draw every traced contour onto a working copy of the input and return
/// the annotated copy. The caller's buffer is never touched.
pub fn annotate_contours(image: &RgbImage) -> RgbImage {
    let mut canvas = image.clone();
    for polyline in trace_contours(image) {
        draw_closed_polyline(&mut canvas, &polyline);
    }
    canvas
}

fn draw_closed_polyline(canvas: &mut RgbImage, points: &[Point<i32>]) {
    match points {
        [] => {}
        [only] => {
            // degenerate single-point border
            canvas.put_pixel(only.x as u32, only.y as u32, CONTOUR_COLOR);
        }
        _ => {
            for pair in points.windows(2) {
                draw_segment(canvas, pair[0], pair[1]);
            }
            // close the loop
            draw_segment(canvas, points[points.len() - 1], points[0]);
        }
    }
}

fn draw_segment(canvas: &mut RgbImage, from: Point<i32>, to: Point<i32>) {
    draw_line_segment_mut(
        canvas,
        (from.x as f32, from.y as f32),
        (to.x as f32, to.y as f32),
        CONTOUR_COLOR,
    );
}
