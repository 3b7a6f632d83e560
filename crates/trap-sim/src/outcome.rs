use serde::Serialize;

use crate::state::SimulationResult;

/// What the trap did to the buyer, measured at the end of the run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrapOutcome {
    pub trap_step: u32,
    pub fill_price: f64,
    pub fair_price: f64,
    /// Amount paid above fair value.
    pub premium_over_fair: f64,
    pub final_bid: f64,
    /// Buyer P&L if they sold into the final bid. Negative is a loss.
    pub buyer_mark_to_market: f64,
    /// Buyer P&L measured against fair value.
    pub buyer_pnl_vs_fair: f64,
}

impl TrapOutcome {
    pub fn from_result(result: &SimulationResult) -> Option<Self> {
        let trap = result.trap_step()?;
        let trade = trap.last_trade?;
        let final_bid = result.final_state()?.current_bid;
        let fair_price = result.config().fair_price;

        Some(Self {
            trap_step: trap.step_index,
            fill_price: trade.price,
            fair_price,
            premium_over_fair: trade.price - fair_price,
            final_bid,
            buyer_mark_to_market: final_bid - trade.price,
            buyer_pnl_vs_fair: fair_price - trade.price,
        })
    }

    pub fn buyer_lost(&self) -> bool {
        self.buyer_mark_to_market < 0.0
    }
}
