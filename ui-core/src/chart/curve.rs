//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{max_tick_for_spacing, min_tick_for_spacing, tick_index_to_price, LiquidityTick, PlotPoint, PositionFacade};
use std::collections::BTreeMap;

/// Builds the step-function liquidity curve of a pool from its initialized
/// ticks, as a list of display-price plot points covering the full lattice.
///
/// The accumulator is the prefix sum of `liquidity_net` over ascending
/// ticks. Gaps wider than one tick spacing get an explicit flat point one
/// spacing before the next tick so the chart renders a step instead of a
/// slope. An empty tick set yields exactly the two zero-liquidity boundary
/// points. For `x_to_y == false` the list is reversed, keeping `x`
/// ascending in display units.
///
/// `ticks` must be sorted ascending by index; on-chain data arrives that way.
pub fn build_liquidity_curve(ticks: &[LiquidityTick], tick_spacing: u16, x_to_y: bool, decimals_x: u8, decimals_y: u8) -> Vec<PlotPoint> {
    debug_assert!(ticks.windows(2).all(|pair| pair[0].tick_index <= pair[1].tick_index));

    let spacing = (tick_spacing as i32).max(1);
    let min_tick = min_tick_for_spacing(tick_spacing);
    let max_tick = max_tick_for_spacing(tick_spacing);
    let plot_point = |tick_index: i32, y: f64| PlotPoint {
        x: tick_index_to_price(tick_index, x_to_y, decimals_x, decimals_y),
        y,
        index: tick_index,
    };

    let mut points: Vec<PlotPoint> = Vec::with_capacity(ticks.len() * 2 + 2);

    if ticks.first().map_or(true, |tick| tick.tick_index > min_tick) {
        points.push(plot_point(min_tick, 0.0));
    }

    let mut liquidity: i128 = 0;
    for (i, tick) in ticks.iter().enumerate() {
        if i == 0 {
            if tick.tick_index - spacing > min_tick {
                points.push(plot_point(tick.tick_index - spacing, 0.0));
            }
        } else if tick.tick_index - spacing > ticks[i - 1].tick_index {
            points.push(plot_point(tick.tick_index - spacing, display_liquidity(liquidity)));
        }
        liquidity += tick.liquidity_net;
        points.push(plot_point(tick.tick_index, display_liquidity(liquidity)));
    }

    match ticks.last() {
        None => points.push(plot_point(max_tick, 0.0)),
        Some(last) if last.tick_index < max_tick => {
            let tail = display_liquidity(liquidity);
            if max_tick - last.tick_index > spacing {
                points.push(plot_point(last.tick_index + spacing, tail));
            }
            points.push(plot_point(max_tick, tail));
        }
        Some(_) => {}
    }

    if !x_to_y {
        points.reverse();
    }
    points
}

/// Builds the same curve from position records instead of tick accounts,
/// for the "your positions" overlay. Each position contributes
/// `+liquidity` at its lower tick and `-liquidity` at its upper tick;
/// deltas that cancel out are dropped before the curve is emitted.
pub fn build_liquidity_curve_from_positions(
    positions: &[PositionFacade],
    tick_spacing: u16,
    x_to_y: bool,
    decimals_x: u8,
    decimals_y: u8,
) -> Vec<PlotPoint> {
    let mut deltas: BTreeMap<i32, i128> = BTreeMap::new();
    for position in positions {
        let liquidity = position.liquidity as i128;
        *deltas.entry(position.tick_lower_index).or_default() += liquidity;
        *deltas.entry(position.tick_upper_index).or_default() -= liquidity;
    }

    let ticks: Vec<LiquidityTick> = deltas
        .into_iter()
        .filter(|(_, liquidity_net)| *liquidity_net != 0)
        .map(|(tick_index, liquidity_net)| LiquidityTick { tick_index, liquidity_net })
        .collect();

    build_liquidity_curve(&ticks, tick_spacing, x_to_y, decimals_x, decimals_y)
}

fn display_liquidity(liquidity: i128) -> f64 {
    liquidity.max(0) as f64
}
