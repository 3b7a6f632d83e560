mod config;
mod error;
mod generators;
mod outcome;
pub mod quotes;
mod state;
mod stepper;

pub use config::{
    PriceRange, SimulationConfig, StepRange, BUYER_ARRIVAL_STEP_RANGE, MAX_RANDOM_SEED,
    NUM_STEPS_RANGE, PRICE_RANGES,
};
pub use error::{ConfigViolation, SimError};
pub use generators::QuoteShockGenerator;
pub use outcome::TrapOutcome;
pub use state::{MarketState, Phase, SimulationResult, Trade, TradeSide};
pub use stepper::run;
