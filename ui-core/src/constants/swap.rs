//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

pub const FEE_RATE_MUL_VALUE: u32 = 1_000_000;

pub const MIN_SQRT_PRICE: u128 = 4295048016;
pub const MAX_SQRT_PRICE: u128 = 79226673515401279992447579055;

/// How many initialized ticks a single swap instruction can cross.
/// A route that needs more crossings than this is not atomically executable.
pub const MAX_TICK_CROSSES_PER_IX: u16 = 19;

/// Crossing budget for a whole transaction. Routes that touch the wrapped
/// native mint get the transaction to themselves and are simulated under
/// this larger budget.
pub const MAX_TICK_CROSSES_PER_TX: u16 = 34;

/// Budget for uninitialized (virtual) tick-spacing steps inside one swap.
pub const MAX_VIRTUAL_CROSSES: u16 = 10;

/// The default slippage tolerance, expressed in basis points. Value of 100 is equivalent to 1%.
pub const DEFAULT_SLIPPAGE_TOLERANCE_BPS: u16 = 100;
