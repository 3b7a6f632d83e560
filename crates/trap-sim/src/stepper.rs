use tracing::{debug, info, warn};

use crate::config::SimulationConfig;
use crate::error::SimError;
use crate::generators::QuoteShockGenerator;
use crate::quotes::{self, Quotes};
use crate::state::{MarketState, Phase, SimulationResult, Trade, TradeSide};

/// Steps the trap scenario once for `config`. The output depends only on
/// the config; the seeded generator lives and dies inside this call.
pub fn run(config: &SimulationConfig) -> Result<SimulationResult, SimError> {
    config.validate()?;
    if !config.is_trap_meaningful() {
        warn!(
            restored_ask = config.restored_ask,
            fair_price = config.fair_price,
            "restored ask does not exceed fair price; the trap costs the buyer nothing"
        );
    }

    let mut shocks = QuoteShockGenerator::new(config.random_seed, config.algo_aggression);
    let arrival = config.arrival_index();
    let mut states = Vec::with_capacity(config.num_steps as usize);
    let mut trapped = false;
    let mut bid = quotes::fake_liquidity(config).bid;

    for step_index in 0..config.num_steps {
        let state = if step_index < arrival {
            quoted_state(
                step_index,
                Phase::FakeLiquidity,
                quotes::fake_liquidity(config),
                false,
                None,
            )
        } else if step_index == arrival {
            let quoted = quotes::fake_liquidity(config);
            let last_trade = if quotes::crosses_ask(config.human_order_price, quoted.ask) {
                trapped = true;
                info!(
                    step = step_index,
                    fill_price = quoted.ask,
                    order_price = config.human_order_price,
                    "algo filled the buyer; trap triggered"
                );
                Some(Trade {
                    price: quoted.ask,
                    side: TradeSide::AlgoSell,
                })
            } else {
                None
            };
            quoted_state(step_index, Phase::BuyerArrival, quoted, true, last_trade)
        } else if trapped {
            let quoted = quotes::reset_after_trap(config, bid, &mut shocks);
            bid = quoted.bid;
            quoted_state(step_index, Phase::QuotesReset, quoted, true, None)
        } else {
            let quoted = quotes::drift_untriggered(config, &mut shocks);
            quoted_state(step_index, Phase::Drifting, quoted, true, None)
        };

        debug!(
            step = state.step_index,
            phase = state.phase.as_str(),
            bid = state.current_bid,
            ask = state.current_ask,
            "market state"
        );
        states.push(state);
    }

    Ok(SimulationResult::new(*config, states))
}

fn quoted_state(
    step_index: u32,
    phase: Phase,
    quoted: Quotes,
    buyer_present: bool,
    last_trade: Option<Trade>,
) -> MarketState {
    MarketState {
        step_index,
        phase,
        current_bid: quoted.bid,
        current_ask: quoted.ask,
        buyer_present,
        last_trade,
    }
}
