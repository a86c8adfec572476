//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

mod plot;
mod pool;
mod position;
mod swap;
mod tick;
mod token;

pub use plot::*;
pub use pool::*;
pub use position::*;
pub use swap::*;
pub use tick::*;
pub use token::*;
