//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{CurveSegments, PlotDimensions, PlotPoint, PlotViewport, MAX_PLOT_POINTS, PLOT_HEIGHT_RESOLUTION, PLOT_WIDTH_RESOLUTION};

/// Slices the full liquidity curve into the three render-ready series:
/// below the selected range, inside it and above it, each clipped to the
/// visible price window and downsampled when oversized.
///
/// `range_left`/`range_right` are the selected boundaries in display price
/// units (either order; callers swap them with the trade direction). The
/// curve must be ascending in `x`, as produced by the curve builder.
///
/// Boundary and viewport-edge points are synthesized by carrying the
/// nearest step value forward, never by interpolating between neighbors.
pub fn clip_curve_to_viewport(
    curve: &[PlotPoint],
    range_left: f64,
    range_right: f64,
    viewport: PlotViewport,
    dimensions: PlotDimensions,
) -> CurveSegments {
    if curve.is_empty() {
        return CurveSegments::default();
    }
    let (left, right) = if range_left <= range_right { (range_left, range_right) } else { (range_right, range_left) };
    let start = curve[0].x;
    let end = curve[curve.len() - 1].x;

    CurveSegments {
        below: slice_segment(curve, start, left, viewport, dimensions),
        in_range: slice_segment(curve, left, right, viewport, dimensions),
        above: slice_segment(curve, right, end, viewport, dimensions),
    }
}

fn slice_segment(curve: &[PlotPoint], lower: f64, upper: f64, viewport: PlotViewport, dimensions: PlotDimensions) -> Vec<PlotPoint> {
    let lower = lower.max(viewport.min).max(curve[0].x);
    let upper = upper.min(viewport.max).min(curve[curve.len() - 1].x);
    if lower > upper {
        return Vec::new();
    }

    let mut points: Vec<PlotPoint> = curve.iter().filter(|point| point.x >= lower && point.x <= upper).copied().collect();

    if points.first().map_or(true, |point| point.x > lower) {
        points.insert(0, carried_point(curve, lower));
    }
    if points.last().map_or(true, |point| point.x < upper) {
        points.push(carried_point(curve, upper));
    }

    downsample_plot_points(&points, dimensions)
}

/// The synthesized point at `x`: the last curve value at or before `x`
/// carried forward (or the first curve value when `x` precedes the data).
fn carried_point(curve: &[PlotPoint], x: f64) -> PlotPoint {
    let after = curve.partition_point(|point| point.x <= x);
    let source = if after == 0 { &curve[0] } else { &curve[after - 1] };
    PlotPoint { x, ..*source }
}

/// Thins a segment that exceeds [`MAX_PLOT_POINTS`] for the chart library.
///
/// The first and last point always survive. An interior point survives only
/// if it moved far enough from the previously kept one: horizontally more
/// than `width / 100_000` of the segment's price span, or vertically more
/// than `height / 1_000` of the segment's liquidity peak. Both thresholds
/// stay below one render pixel.
pub fn downsample_plot_points(points: &[PlotPoint], dimensions: PlotDimensions) -> Vec<PlotPoint> {
    if points.len() <= MAX_PLOT_POINTS {
        return points.to_vec();
    }

    let x_span = points[points.len() - 1].x - points[0].x;
    let max_y = points.iter().map(|point| point.y).fold(0.0, f64::max);
    let x_threshold = dimensions.width / PLOT_WIDTH_RESOLUTION;
    let y_threshold = dimensions.height / PLOT_HEIGHT_RESOLUTION;

    let mut kept = Vec::with_capacity(MAX_PLOT_POINTS);
    kept.push(points[0]);
    for point in &points[1..points.len() - 1] {
        let last = kept[kept.len() - 1];
        let x_moved = x_span > 0.0 && (point.x - last.x).abs() / x_span > x_threshold;
        let y_moved = max_y > 0.0 && (point.y - last.y).abs() / max_y > y_threshold;
        if x_moved || y_moved {
            kept.push(*point);
        }
    }
    kept.push(points[points.len() - 1]);
    kept
}
