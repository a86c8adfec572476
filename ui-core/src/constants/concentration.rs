//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

/// Scale factor of the concentration curve displayed by the range slider.
pub const CONCENTRATION_FACTOR: f64 = 2.0;

/// Base width, in tick-spacing steps, of the protected zone around the
/// lattice extremes that a concentration range may not enter.
pub const RANGE_EDGE_GUARD_TICKS: i32 = 2;
