use serde::Serialize;

use crate::config::SimulationConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeSide {
    AlgoSell,
    AlgoBuy,
}

impl TradeSide {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AlgoSell => "ALGO_SELL",
            Self::AlgoBuy => "ALGO_BUY",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trade {
    pub price: f64,
    pub side: TradeSide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Algo quotes both sides with nobody there to trade.
    FakeLiquidity,
    BuyerArrival,
    /// The trap fired; the ask has been pulled back to the restored level.
    QuotesReset,
    /// The buyer arrived without crossing the ask.
    Drifting,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FakeLiquidity => "fake_liquidity",
            Self::BuyerArrival => "buyer_arrival",
            Self::QuotesReset => "quotes_reset",
            Self::Drifting => "drifting",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarketState {
    pub step_index: u32,
    pub phase: Phase,
    pub current_bid: f64,
    pub current_ask: f64,
    pub buyer_present: bool,
    pub last_trade: Option<Trade>,
}

impl MarketState {
    pub fn spread(&self) -> f64 {
        self.current_ask - self.current_bid
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    config: SimulationConfig,
    states: Vec<MarketState>,
}

impl SimulationResult {
    pub(crate) fn new(config: SimulationConfig, states: Vec<MarketState>) -> Self {
        Self { config, states }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn states(&self) -> &[MarketState] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MarketState> {
        self.states.iter()
    }

    /// The state in which the algo sold to the buyer, if the trap fired.
    pub fn trap_step(&self) -> Option<&MarketState> {
        self.states.iter().find(|state| {
            matches!(
                state.last_trade,
                Some(Trade {
                    side: TradeSide::AlgoSell,
                    ..
                })
            )
        })
    }

    pub fn final_state(&self) -> Option<&MarketState> {
        self.states.last()
    }
}

impl<'a> IntoIterator for &'a SimulationResult {
    type Item = &'a MarketState;
    type IntoIter = std::slice::Iter<'a, MarketState>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}
