//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

pub type CoreError = &'static str;

pub const INVALID_ADDRESS: CoreError = "Invalid address";

pub const ARITHMETIC_OVERFLOW: CoreError = "Arithmetic over- or underflow";

pub const PRICE_LIMIT_REACHED: CoreError = "Price limit reached";

pub const SWAP_STEP_LIMIT_REACHED: CoreError = "Swap step limit reached";

pub const NO_GAIN_SWAP: CoreError = "No gain swap";

pub const TICK_CROSS_LIMIT_EXCEEDED: CoreError = "Tick cross limit exceeded";

pub const TICKS_NOT_AVAILABLE: CoreError = "Ticks not available for pool";
