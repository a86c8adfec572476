//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

mod tick;

#[cfg(feature = "floats")]
mod concentration;
#[cfg(feature = "floats")]
mod price;

pub use tick::*;

#[cfg(feature = "floats")]
pub use concentration::*;
#[cfg(feature = "floats")]
pub use price::*;
