use thiserror::Error;
use trap_sim::{SimError, SimulationConfig};

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("malformed configuration record: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    Rejected(#[from] SimError),
}

/// Reads a form record as JSON. Missing fields take the form defaults, and
/// the result is validated before it is handed back.
pub fn parse_config(input: &str) -> Result<SimulationConfig, IntakeError> {
    let config: SimulationConfig = serde_json::from_str(input)?;
    config.validate().map_err(SimError::from)?;
    Ok(config)
}
