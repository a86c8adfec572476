//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

mod chart;
mod constants;
mod math;
mod quote;
mod types;

pub use chart::*;
pub use constants::*;
pub use math::*;
pub use quote::*;
pub use types::*;
