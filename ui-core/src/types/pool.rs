//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::Address;

/// Snapshot of the pool fields the UI math reads. Token X sorts before
/// token Y under the canonical mint ordering, which is what lets
/// [`PoolFacade::is_x_to_y`] infer the swap direction from the input mint.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolFacade {
    pub token_mint_x: Address,
    pub token_mint_y: Address,
    pub fee_rate: u16,
    pub tick_spacing: u16,
    pub liquidity: u128,
    pub sqrt_price: u128,
    pub tick_current_index: i32,
}

impl PoolFacade {
    /// True when swapping `input_mint` into this pool moves the price from
    /// token X toward token Y.
    pub fn is_x_to_y(&self, input_mint: &Address) -> bool {
        self.token_mint_x == *input_mint
    }

    /// True when either side of the pool is the given mint.
    pub fn involves(&self, mint: &Address) -> bool {
        self.token_mint_x == *mint || self.token_mint_y == *mint
    }
}
