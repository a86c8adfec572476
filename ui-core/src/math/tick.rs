//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{TickRange, MAX_TICK_INDEX, MIN_TICK_INDEX};

/// Orders two tick indexes so that the lower one comes first.
pub fn order_tick_indexes(tick_index_1: i32, tick_index_2: i32) -> TickRange {
    if tick_index_1 < tick_index_2 {
        TickRange {
            tick_lower_index: tick_index_1,
            tick_upper_index: tick_index_2,
        }
    } else {
        TickRange {
            tick_lower_index: tick_index_2,
            tick_upper_index: tick_index_1,
        }
    }
}

/// The lowest usable tick index for a pool with the given tick spacing:
/// the smallest spacing multiple not below [`MIN_TICK_INDEX`].
pub fn min_tick_for_spacing(tick_spacing: u16) -> i32 {
    let spacing = (tick_spacing as i32).max(1);
    (MIN_TICK_INDEX / spacing) * spacing
}

/// The highest usable tick index for a pool with the given tick spacing:
/// the largest spacing multiple not above [`MAX_TICK_INDEX`].
pub fn max_tick_for_spacing(tick_spacing: u16) -> i32 {
    let spacing = (tick_spacing as i32).max(1);
    (MAX_TICK_INDEX / spacing) * spacing
}
