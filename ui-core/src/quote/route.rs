//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{
    Address, CoreError, PoolFacade, PoolTickData, RouteCandidate, RouteConfig, RouteQuote, SwapSimulation, SwapSimulationParams,
    MAX_TICK_CROSSES_PER_IX, MAX_TICK_CROSSES_PER_TX, MAX_VIRTUAL_CROSSES, TICKS_NOT_AVAILABLE, TICK_CROSS_LIMIT_EXCEEDED,
};

/// Deterministic single-pool swap simulator, supplied by the protocol SDK.
///
/// `Ok` with a `status` still set means the simulator finished but the swap
/// is not viable (price limit, step limit, no gain); the partial amounts are
/// kept for diagnostics. `Err` means the simulation itself blew up on that
/// pool's data and produced nothing.
pub trait SwapSimulator {
    fn simulate_swap(&self, pool: &PoolFacade, tick_data: &PoolTickData, params: &SwapSimulationParams) -> Result<SwapSimulation, CoreError>;
}

/// Picks the best executable swap for `amount` of `input_mint` across all
/// candidate pools of a token pair.
///
/// Candidates are evaluated lowest fee first; on equal amounts the earlier
/// (cheaper) pool wins. One broken candidate never aborts the others: its
/// error is recorded and evaluation moves on. When every candidate fails
/// the quote carries the best failed candidate's numbers together with all
/// collected error strings, so the UI can explain what went wrong.
///
/// Routes touching the wrapped native mint are simulated under the larger
/// per-transaction crossing budget, but executability is still judged
/// against the single-instruction budget: a swap needing more crossings
/// than one instruction can hold cannot settle atomically and is reported
/// as failed even when numerically feasible.
pub fn route_best_swap<S: SwapSimulator>(
    simulator: &S,
    candidates: &[RouteCandidate],
    input_mint: &Address,
    amount: u64,
    by_amount_in: bool,
    config: &RouteConfig,
) -> RouteQuote {
    if amount == 0 {
        return RouteQuote::default();
    }

    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by_key(|&index| candidates[index].pool.fee_rate);

    let mut errors: Vec<String> = Vec::new();
    let mut best_success: Option<(usize, SwapSimulation)> = None;
    let mut best_failure: Option<(usize, SwapSimulation)> = None;

    for index in order {
        let candidate = &candidates[index];
        let Some(tick_data) = candidate.tick_data.as_ref() else {
            errors.push(format!("{} {}", TICKS_NOT_AVAILABLE, candidate.address));
            continue;
        };

        let max_crosses = if candidate.pool.involves(&config.native_mint) {
            MAX_TICK_CROSSES_PER_TX
        } else {
            MAX_TICK_CROSSES_PER_IX
        };
        let params = SwapSimulationParams {
            x_to_y: candidate.pool.is_x_to_y(input_mint),
            by_amount_in,
            swap_amount: amount,
            slippage_tolerance_bps: config.slippage_tolerance_bps,
            max_crosses,
            max_virtual_crosses: MAX_VIRTUAL_CROSSES,
        };

        let simulation = match simulator.simulate_swap(&candidate.pool, tick_data, &params) {
            Ok(simulation) => simulation,
            Err(code) => {
                log::debug!("swap simulation failed for pool {}: {}", candidate.address, code);
                errors.push(code.to_string());
                continue;
            }
        };

        let executable = simulation.crossed_tick_indexes.len() <= MAX_TICK_CROSSES_PER_IX as usize;
        match simulation.status {
            None if executable => update_best(&mut best_success, index, simulation, by_amount_in),
            None => {
                errors.push(TICK_CROSS_LIMIT_EXCEEDED.to_string());
                update_best(&mut best_failure, index, simulation, by_amount_in);
            }
            Some(status) => {
                errors.push(status.to_string());
                update_best(&mut best_failure, index, simulation, by_amount_in);
            }
        }
    }

    match (best_success, best_failure) {
        (Some((index, simulation)), _) => quote_from_simulation(index, &simulation, by_amount_in, Vec::new()),
        (None, Some((index, simulation))) => quote_from_simulation(index, &simulation, by_amount_in, errors),
        (None, None) => RouteQuote {
            errors,
            ..RouteQuote::default()
        },
    }
}

/// The quantity candidates compete on: estimated output for exact-in,
/// fee-inclusive required input for exact-out.
fn counter_amount(simulation: &SwapSimulation, by_amount_in: bool) -> u64 {
    if by_amount_in {
        simulation.accumulated_amount_out
    } else {
        simulation.accumulated_amount_in.saturating_add(simulation.accumulated_fee)
    }
}

fn update_best(best: &mut Option<(usize, SwapSimulation)>, index: usize, simulation: SwapSimulation, by_amount_in: bool) {
    let amount = counter_amount(&simulation, by_amount_in);
    let improves = match best.as_ref() {
        None => amount > 0,
        Some((_, current)) => {
            if by_amount_in {
                amount > counter_amount(current, true)
            } else {
                amount > 0 && amount < counter_amount(current, false)
            }
        }
    };
    if improves {
        *best = Some((index, simulation));
    }
}

fn quote_from_simulation(pool_index: usize, simulation: &SwapSimulation, by_amount_in: bool, errors: Vec<String>) -> RouteQuote {
    let amount_out = if by_amount_in {
        simulation.accumulated_amount_out
    } else {
        simulation.accumulated_amount_in
    };
    let amount_out_with_fee = if by_amount_in {
        amount_out
    } else {
        amount_out.saturating_add(simulation.accumulated_fee)
    };
    RouteQuote {
        amount_out,
        amount_out_with_fee,
        pool_index: Some(pool_index),
        sqrt_price_after_swap: simulation.sqrt_price_after_swap,
        minimum_received: simulation.min_received,
        price_impact: simulation.price_impact,
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ARITHMETIC_OVERFLOW, NO_GAIN_SWAP, PRICE_LIMIT_REACHED};
    use std::cell::RefCell;
    use std::collections::HashMap;

    // Keyed by fee rate, which the tests keep unique per candidate.
    struct StubSimulator {
        results: HashMap<u16, Result<SwapSimulation, CoreError>>,
        seen_params: RefCell<Vec<SwapSimulationParams>>,
    }

    impl StubSimulator {
        fn new(results: impl IntoIterator<Item = (u16, Result<SwapSimulation, CoreError>)>) -> Self {
            Self {
                results: results.into_iter().collect(),
                seen_params: RefCell::new(Vec::new()),
            }
        }
    }

    impl SwapSimulator for StubSimulator {
        fn simulate_swap(&self, pool: &PoolFacade, _tick_data: &PoolTickData, params: &SwapSimulationParams) -> Result<SwapSimulation, CoreError> {
            self.seen_params.borrow_mut().push(*params);
            self.results[&pool.fee_rate].clone()
        }
    }

    fn test_candidate(fee_rate: u16, with_ticks: bool) -> RouteCandidate {
        let mut address = [0u8; 32];
        address[0] = fee_rate as u8;
        RouteCandidate {
            address: Address::new(address),
            pool: PoolFacade {
                token_mint_x: Address::new([101; 32]),
                token_mint_y: Address::new([102; 32]),
                fee_rate,
                tick_spacing: 2,
                ..PoolFacade::default()
            },
            tick_data: with_ticks.then(PoolTickData::default),
        }
    }

    fn success(amount_out: u64) -> Result<SwapSimulation, CoreError> {
        Ok(SwapSimulation {
            accumulated_amount_out: amount_out,
            accumulated_amount_in: 1000,
            accumulated_fee: 3,
            sqrt_price_after_swap: 1 << 64,
            min_received: amount_out - amount_out / 100,
            ..SwapSimulation::default()
        })
    }

    fn failure(status: CoreError, amount_out: u64) -> Result<SwapSimulation, CoreError> {
        Ok(SwapSimulation {
            status: Some(status),
            accumulated_amount_out: amount_out,
            accumulated_amount_in: 1000,
            ..SwapSimulation::default()
        })
    }

    fn input_mint() -> Address {
        Address::new([101; 32])
    }

    #[test]
    fn test_zero_amount_short_circuits() {
        let simulator = StubSimulator::new([]);
        let quote = route_best_swap(&simulator, &[test_candidate(100, true)], &input_mint(), 0, true, &RouteConfig::default());
        assert_eq!(quote, RouteQuote::default());
        assert!(simulator.seen_params.borrow().is_empty());
    }

    #[test]
    fn test_successful_candidate_wins_over_failed() {
        let simulator = StubSimulator::new([(100, success(100)), (200, failure(PRICE_LIMIT_REACHED, 120))]);
        let candidates = [test_candidate(100, true), test_candidate(200, true)];
        let quote = route_best_swap(&simulator, &candidates, &input_mint(), 1000, true, &RouteConfig::default());
        assert_eq!(quote.pool_index, Some(0));
        assert_eq!(quote.amount_out, 100);
        assert!(quote.errors.is_empty());
    }

    #[test]
    fn test_all_failed_returns_best_failure_with_all_errors() {
        let simulator = StubSimulator::new([(100, failure(PRICE_LIMIT_REACHED, 80)), (200, failure(NO_GAIN_SWAP, 90))]);
        let candidates = [test_candidate(100, true), test_candidate(200, true)];
        let quote = route_best_swap(&simulator, &candidates, &input_mint(), 1000, true, &RouteConfig::default());
        assert_eq!(quote.pool_index, Some(1));
        assert_eq!(quote.amount_out, 90);
        assert_eq!(quote.errors, vec![PRICE_LIMIT_REACHED.to_string(), NO_GAIN_SWAP.to_string()]);
    }

    #[test]
    fn test_missing_tick_data_is_reported_per_pool() {
        let simulator = StubSimulator::new([]);
        let candidates = [test_candidate(100, false), test_candidate(200, false)];
        let quote = route_best_swap(&simulator, &candidates, &input_mint(), 1000, true, &RouteConfig::default());
        assert_eq!(quote.pool_index, None);
        assert_eq!(quote.amount_out, 0);
        assert_eq!(quote.errors.len(), 2);
        assert!(quote.errors[0].starts_with(TICKS_NOT_AVAILABLE));
        assert!(quote.errors[0].contains(&candidates[0].address.to_string()));
        assert!(quote.errors[1].contains(&candidates[1].address.to_string()));
    }

    #[test]
    fn test_simulator_error_does_not_abort_other_candidates() {
        let simulator = StubSimulator::new([(100, Err(ARITHMETIC_OVERFLOW)), (200, success(70))]);
        let candidates = [test_candidate(100, true), test_candidate(200, true)];
        let quote = route_best_swap(&simulator, &candidates, &input_mint(), 1000, true, &RouteConfig::default());
        assert_eq!(quote.pool_index, Some(1));
        assert_eq!(quote.amount_out, 70);
        assert!(quote.errors.is_empty());
    }

    #[test]
    fn test_candidates_are_evaluated_in_fee_order() {
        let simulator = StubSimulator::new([(200, success(100)), (100, success(100))]);
        // Higher fee listed first; equal outputs must fall to the cheaper pool.
        let candidates = [test_candidate(200, true), test_candidate(100, true)];
        let quote = route_best_swap(&simulator, &candidates, &input_mint(), 1000, true, &RouteConfig::default());
        assert_eq!(quote.pool_index, Some(1));
    }

    #[test]
    fn test_exact_out_minimizes_the_required_input() {
        let mut cheap = success(0).unwrap();
        cheap.accumulated_amount_in = 90;
        cheap.accumulated_fee = 1;
        let mut rich = success(0).unwrap();
        rich.accumulated_amount_in = 100;
        rich.accumulated_fee = 1;
        let simulator = StubSimulator::new([(100, Ok(rich)), (200, Ok(cheap))]);
        let candidates = [test_candidate(100, true), test_candidate(200, true)];
        let quote = route_best_swap(&simulator, &candidates, &input_mint(), 1000, false, &RouteConfig::default());
        assert_eq!(quote.pool_index, Some(1));
        assert_eq!(quote.amount_out, 90);
        assert_eq!(quote.amount_out_with_fee, 91);
        assert!(quote.errors.is_empty());
    }

    #[test]
    fn test_native_routes_use_the_transaction_budget_but_ix_classification() {
        let mut simulation = success(100).unwrap();
        // Feasible under the transaction budget, not in one instruction.
        simulation.crossed_tick_indexes = (0..25).collect();
        let simulator = StubSimulator::new([(100, Ok(simulation))]);
        let candidates = [test_candidate(100, true)];
        let config = RouteConfig {
            native_mint: Address::new([101; 32]),
            ..RouteConfig::default()
        };
        let quote = route_best_swap(&simulator, &candidates, &input_mint(), 1000, true, &config);

        let params = simulator.seen_params.borrow();
        assert_eq!(params[0].max_crosses, MAX_TICK_CROSSES_PER_TX);
        // Downgraded to failed: the quote is served as fallback data only.
        assert_eq!(quote.pool_index, Some(0));
        assert_eq!(quote.amount_out, 100);
        assert_eq!(quote.errors, vec![TICK_CROSS_LIMIT_EXCEEDED.to_string()]);
    }

    #[test]
    fn test_non_native_routes_use_the_instruction_budget() {
        let simulator = StubSimulator::new([(100, success(100))]);
        let candidates = [test_candidate(100, true)];
        route_best_swap(&simulator, &candidates, &input_mint(), 1000, true, &RouteConfig::default());
        assert_eq!(simulator.seen_params.borrow()[0].max_crosses, MAX_TICK_CROSSES_PER_IX);
    }

    #[test]
    fn test_direction_follows_the_input_mint() {
        let simulator = StubSimulator::new([(100, success(100))]);
        let candidates = [test_candidate(100, true)];
        route_best_swap(&simulator, &candidates, &Address::new([102; 32]), 1000, true, &RouteConfig::default());
        assert!(!simulator.seen_params.borrow()[0].x_to_y);
    }
}
