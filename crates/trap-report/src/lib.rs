pub mod intake;
pub mod logging;
pub mod narrative;
pub mod replay;

pub use intake::{parse_config, IntakeError};
pub use logging::{
    timeline, write_timeline, InMemoryRunLogWriter, RunLogEvent, RunLogEventKind, RunLogWriter,
    TracingRunLogWriter,
};
pub use narrative::narrate;
pub use replay::{ReplayCsvWriter, REPLAY_CSV_HEADER};
