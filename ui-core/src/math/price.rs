//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{max_tick_for_spacing, min_tick_for_spacing};

pub(super) const PRICE_LOG_BASE: f64 = 1.0001;

const Q64_RESOLUTION: f64 = 18446744073709551616.0;

/// Stand-in for `1 / 0` when a forward price underflows to zero before the
/// direction inversion.
const INVERTED_ZERO_PRICE: f64 = 1.0e38;

fn decimal_scale(decimals_x: u8, decimals_y: u8) -> f64 {
    libm::pow(10.0, decimals_x as f64 - decimals_y as f64)
}

/// Display price of a tick index.
///
/// Computes `sqrt_price = 1.0001^(tick/2)`, squares it and rescales by the
/// token decimal difference. With `x_to_y` unset the result is inverted so
/// the chart always quotes the price of the token the user is selling.
pub fn tick_index_to_price(tick_index: i32, x_to_y: bool, decimals_x: u8, decimals_y: u8) -> f64 {
    let sqrt_price = libm::pow(PRICE_LOG_BASE, tick_index as f64 / 2.0);
    let price = sqrt_price * sqrt_price * decimal_scale(decimals_x, decimals_y);
    if x_to_y {
        price
    } else if price == 0.0 {
        INVERTED_ZERO_PRICE
    } else {
        1.0 / price
    }
}

fn raw_tick_from_price(price: f64, x_to_y: bool, decimals_x: u8, decimals_y: u8) -> f64 {
    let directed = if x_to_y { price } else { 1.0 / price };
    let primary_units = directed / decimal_scale(decimals_x, decimals_y);
    libm::log(primary_units) / libm::log(PRICE_LOG_BASE)
}

/// Tick index whose price is closest to `price`.
///
/// Out-of-domain prices never fail: the saturating float-to-int conversion
/// plus the clamp below map them to the nearest lattice bound.
pub fn price_to_tick_index(price: f64, tick_spacing: u16, x_to_y: bool, decimals_x: u8, decimals_y: u8) -> i32 {
    let tick_index = libm::round(raw_tick_from_price(price, x_to_y, decimals_x, decimals_y)) as i32;
    tick_index.clamp(min_tick_for_spacing(tick_spacing), max_tick_for_spacing(tick_spacing))
}

/// Like [`price_to_tick_index`], but snapped to the tick-spacing lattice:
/// the nearest of the surrounding spacing multiples, ties toward the floor
/// side.
pub fn nearest_tick_index(price: f64, tick_spacing: u16, x_to_y: bool, decimals_x: u8, decimals_y: u8) -> i32 {
    let raw_tick = raw_tick_from_price(price, x_to_y, decimals_x, decimals_y);
    let spacing = (tick_spacing.max(1)) as f64;
    let floor_tick = libm::floor(raw_tick / spacing) * spacing;
    let ceil_tick = floor_tick + spacing;
    let snapped = if raw_tick - floor_tick <= ceil_tick - raw_tick { floor_tick } else { ceil_tick };
    (snapped as i32).clamp(min_tick_for_spacing(tick_spacing), max_tick_for_spacing(tick_spacing))
}

/// Converts a Q64.64 sqrt price to a display price.
pub fn sqrt_price_to_price(sqrt_price: u128, decimals_x: u8, decimals_y: u8) -> f64 {
    let sqrt_price = sqrt_price as f64 / Q64_RESOLUTION;
    sqrt_price * sqrt_price * decimal_scale(decimals_x, decimals_y)
}

/// Converts a display price to a Q64.64 sqrt price.
pub fn price_to_sqrt_price(price: f64, decimals_x: u8, decimals_y: u8) -> u128 {
    let primary_units = price / decimal_scale(decimals_x, decimals_y);
    (libm::sqrt(primary_units) * Q64_RESOLUTION) as u128
}
