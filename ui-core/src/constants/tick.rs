//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

/// The minimum tick index.
pub const MIN_TICK_INDEX: i32 = -443636;

/// The maximum tick index.
pub const MAX_TICK_INDEX: i32 = 443636;
