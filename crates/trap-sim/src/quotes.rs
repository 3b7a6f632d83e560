use crate::config::SimulationConfig;
use crate::generators::QuoteShockGenerator;

pub const PRICE_TICK: f64 = 0.01;
/// Largest per-step bid cut after the trap, as a fraction of the initial bid.
pub const MAX_BID_STEP_FRACTION: f64 = 0.10;
/// Largest quote drift when the buyer did not take the bait.
pub const MAX_DRIFT_FRACTION: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quotes {
    pub bid: f64,
    pub ask: f64,
}

/// The tight, attractive market the algo shows before and at the buyer's arrival.
pub fn fake_liquidity(config: &SimulationConfig) -> Quotes {
    let ask = round_to_tick(config.initial_ask);
    Quotes {
        bid: keep_below_ask(config.initial_bid, ask),
        ask,
    }
}

/// A buy order at or through the ask gets filled by the algo.
pub fn crosses_ask(order_price: f64, ask: f64) -> bool {
    order_price >= ask
}

/// Post-trap quotes: the ask is withdrawn to the restored level and the bid
/// walks away from the buyer who now holds the option.
pub fn reset_after_trap(
    config: &SimulationConfig,
    previous_bid: f64,
    shocks: &mut QuoteShockGenerator,
) -> Quotes {
    let ask = round_to_tick(config.restored_ask);
    let cut = shocks.adverse_move(config.initial_bid * MAX_BID_STEP_FRACTION);

    Quotes {
        bid: keep_below_ask(previous_bid - cut, ask),
        ask,
    }
}

/// Quotes after an arrival that did not cross the ask.
pub fn drift_untriggered(config: &SimulationConfig, shocks: &mut QuoteShockGenerator) -> Quotes {
    let ask = round_to_tick(
        config.initial_ask + shocks.symmetric_jitter(config.initial_ask * MAX_DRIFT_FRACTION),
    );
    let widen = shocks.adverse_move(config.initial_bid * MAX_DRIFT_FRACTION);

    Quotes {
        bid: keep_below_ask(config.initial_bid - widen, ask),
        ask,
    }
}

pub fn round_to_tick(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}

fn keep_below_ask(bid: f64, ask: f64) -> f64 {
    round_to_tick(bid)
        .max(PRICE_TICK)
        .min(round_to_tick(ask - PRICE_TICK))
}
