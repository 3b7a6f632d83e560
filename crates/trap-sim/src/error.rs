use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigViolation),
}

/// Which configuration rule a rejected config broke.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigViolation {
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },

    #[error("{field}={value} is outside [{min}, {max}]")]
    PriceOutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field}={value} is outside [{min}, {max}]")]
    StepOutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("algo_aggression={0} is outside [0, 1]")]
    AggressionOutOfRange(f64),

    #[error("random_seed={value} exceeds {max}")]
    SeedOutOfRange { value: u64, max: u64 },

    #[error("initial_ask ({ask}) must be above initial_bid ({bid})")]
    CrossedQuotes { bid: f64, ask: f64 },

    #[error("buyer_arrival_step ({arrival}) must not exceed num_steps ({num_steps})")]
    ArrivalAfterEnd { arrival: u32, num_steps: u32 },
}
