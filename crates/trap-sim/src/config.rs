use serde::{Deserialize, Serialize};

use crate::error::ConfigViolation;

/// Inclusive bounds for one price-like input of the parameter form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRange {
    pub field: &'static str,
    pub min: u32,
    pub max: u32,
}

pub const FAIR_PRICE_RANGE: PriceRange = PriceRange {
    field: "fair_price",
    min: 10.0,
    max: 200.0,
};
pub const INITIAL_BID_RANGE: PriceRange = PriceRange {
    field: "initial_bid",
    min: 1.0,
    max: 100.0,
};
pub const INITIAL_ASK_RANGE: PriceRange = PriceRange {
    field: "initial_ask",
    min: 50.0,
    max: 200.0,
};
pub const RESTORED_ASK_RANGE: PriceRange = PriceRange {
    field: "restored_ask",
    min: 50.0,
    max: 200.0,
};
pub const HUMAN_ORDER_PRICE_RANGE: PriceRange = PriceRange {
    field: "human_order_price",
    min: 1.0,
    max: 200.0,
};

pub const PRICE_RANGES: [PriceRange; 5] = [
    FAIR_PRICE_RANGE,
    INITIAL_BID_RANGE,
    INITIAL_ASK_RANGE,
    RESTORED_ASK_RANGE,
    HUMAN_ORDER_PRICE_RANGE,
];

pub const BUYER_ARRIVAL_STEP_RANGE: StepRange = StepRange {
    field: "buyer_arrival_step",
    min: 1,
    max: 50,
};
pub const NUM_STEPS_RANGE: StepRange = StepRange {
    field: "num_steps",
    min: 10,
    max: 100,
};

pub const MAX_RANDOM_SEED: u64 = 9_999;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub fair_price: f64,
    pub initial_bid: f64,
    pub initial_ask: f64,
    pub restored_ask: f64,
    pub human_order_price: f64,
    pub buyer_arrival_step: u32,
    pub num_steps: u32,
    pub algo_aggression: f64,
    pub random_seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            fair_price: 40.0,
            initial_bid: 20.0,
            initial_ask: 80.0,
            restored_ask: 100.0,
            human_order_price: 21.0,
            buyer_arrival_step: 18,
            num_steps: 25,
            algo_aggression: 0.8,
            random_seed: 0,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigViolation> {
        let prices = [
            (FAIR_PRICE_RANGE, self.fair_price),
            (INITIAL_BID_RANGE, self.initial_bid),
            (INITIAL_ASK_RANGE, self.initial_ask),
            (RESTORED_ASK_RANGE, self.restored_ask),
            (HUMAN_ORDER_PRICE_RANGE, self.human_order_price),
        ];
        for (range, value) in prices {
            check_price(range, value)?;
        }

        check_steps(BUYER_ARRIVAL_STEP_RANGE, self.buyer_arrival_step)?;
        check_steps(NUM_STEPS_RANGE, self.num_steps)?;

        if !self.algo_aggression.is_finite() {
            return Err(ConfigViolation::NonFinite {
                field: "algo_aggression",
            });
        }
        if !(0.0..=1.0).contains(&self.algo_aggression) {
            return Err(ConfigViolation::AggressionOutOfRange(self.algo_aggression));
        }

        if self.random_seed > MAX_RANDOM_SEED {
            return Err(ConfigViolation::SeedOutOfRange {
                value: self.random_seed,
                max: MAX_RANDOM_SEED,
            });
        }

        if self.initial_ask <= self.initial_bid {
            return Err(ConfigViolation::CrossedQuotes {
                bid: self.initial_bid,
                ask: self.initial_ask,
            });
        }

        if self.buyer_arrival_step > self.num_steps {
            return Err(ConfigViolation::ArrivalAfterEnd {
                arrival: self.buyer_arrival_step,
                num_steps: self.num_steps,
            });
        }

        Ok(())
    }

    /// A trap only costs the buyer when the algo restores its ask above fair value.
    pub fn is_trap_meaningful(&self) -> bool {
        self.restored_ask > self.fair_price
    }

    /// Index of the step the buyer shows up in. An arrival equal to
    /// `num_steps` lands on the final step.
    pub fn arrival_index(&self) -> u32 {
        self.buyer_arrival_step.min(self.num_steps.saturating_sub(1))
    }
}

fn check_price(range: PriceRange, value: f64) -> Result<(), ConfigViolation> {
    if !value.is_finite() {
        return Err(ConfigViolation::NonFinite { field: range.field });
    }
    if value < range.min || value > range.max {
        return Err(ConfigViolation::PriceOutOfRange {
            field: range.field,
            value,
            min: range.min,
            max: range.max,
        });
    }
    Ok(())
}

fn check_steps(range: StepRange, value: u32) -> Result<(), ConfigViolation> {
    if value < range.min || value > range.max {
        return Err(ConfigViolation::StepOutOfRange {
            field: range.field,
            value,
            min: range.min,
            max: range.max,
        });
    }
    Ok(())
}
