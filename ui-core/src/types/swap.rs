//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{Address, CoreError, LiquidityTick, PoolFacade, DEFAULT_SLIPPAGE_TOLERANCE_BPS};

/// Fetched tick state for one candidate pool: the initialized ticks plus the
/// raw tickmap words. Both are opaque to this crate and passed through to
/// the protocol simulator.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolTickData {
    pub ticks: Vec<LiquidityTick>,
    pub tickmap: Vec<u64>,
}

/// One pool competing for a swap: its address, state snapshot and, if the
/// fetch has completed, its tick data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteCandidate {
    pub address: Address,
    pub pool: PoolFacade,
    pub tick_data: Option<PoolTickData>,
}

/// Arguments handed to the protocol swap simulator for a single pool.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapSimulationParams {
    pub x_to_y: bool,
    pub by_amount_in: bool,
    pub swap_amount: u64,
    pub slippage_tolerance_bps: u16,
    pub max_crosses: u16,
    pub max_virtual_crosses: u16,
}

/// What the protocol simulator reports for a single pool. `status` is `None`
/// for a clean run; a reported failure keeps its partial amounts so the UI
/// can still show the closest-to-viable route.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SwapSimulation {
    pub status: Option<CoreError>,
    pub accumulated_amount_in: u64,
    pub accumulated_amount_out: u64,
    pub accumulated_fee: u64,
    pub sqrt_price_after_swap: u128,
    pub min_received: u64,
    pub price_impact: f64,
    pub crossed_tick_indexes: Vec<i32>,
    pub amount_per_tick: Vec<u64>,
}

/// The aggregated outcome of routing one swap across all candidate pools.
///
/// `amount_out` is the counter-amount of the swap: the estimated output for
/// exact-in quotes, the required input for exact-out quotes.
/// `amount_out_with_fee` additionally includes the swap fee when the fee is
/// not already part of `amount_out`.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteQuote {
    pub amount_out: u64,
    pub amount_out_with_fee: u64,
    pub pool_index: Option<usize>,
    pub sqrt_price_after_swap: u128,
    pub minimum_received: u64,
    pub price_impact: f64,
    pub errors: Vec<String>,
}

/// Caller-supplied routing configuration. Passed explicitly so the crate
/// holds no process-wide state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteConfig {
    /// Mint of the network's wrapped native token; routes touching it are
    /// simulated under the transaction-wide crossing budget.
    pub native_mint: Address,
    /// Slippage tolerance in basis points, forwarded to the simulator.
    pub slippage_tolerance_bps: u16,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            native_mint: Address::default(),
            slippage_tolerance_bps: DEFAULT_SLIPPAGE_TOLERANCE_BPS,
        }
    }
}
