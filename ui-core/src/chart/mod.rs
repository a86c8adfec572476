//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

#[cfg(feature = "floats")]
mod curve;
#[cfg(feature = "floats")]
mod viewport;

#[cfg(feature = "floats")]
pub use curve::*;
#[cfg(feature = "floats")]
pub use viewport::*;
