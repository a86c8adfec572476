//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

/// Segments longer than this are downsampled before they reach the chart library.
pub const MAX_PLOT_POINTS: usize = 1000;

/// Divisor turning the container width into the horizontal keep threshold
/// of the downsampler (normalized over the segment's price span).
pub const PLOT_WIDTH_RESOLUTION: f64 = 100_000.0;

/// Divisor turning the container height into the vertical keep threshold
/// of the downsampler (normalized over the segment's liquidity peak).
pub const PLOT_HEIGHT_RESOLUTION: f64 = 1_000.0;
