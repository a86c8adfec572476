//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

mod chart;
mod concentration;
mod error;
mod swap;
mod tick;

pub use chart::*;
pub use concentration::*;
pub use error::*;
pub use swap::*;
pub use tick::*;
