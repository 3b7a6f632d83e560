use serde::Serialize;
use trap_sim::{Phase, SimulationResult, TradeSide};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunLogEventKind {
    FakeLiquidityQuoted,
    BuyerArrived,
    TrapTriggered,
    QuotesReset,
    AdverseBidMove,
    QuotesDrifted,
    ReplayArtifactWritten,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunLogEvent {
    pub step: u32,
    pub kind: RunLogEventKind,
    pub price: Option<f64>,
}

impl RunLogEvent {
    pub fn new(step: u32, kind: RunLogEventKind, price: Option<f64>) -> Self {
        Self { step, kind, price }
    }
}

pub trait RunLogWriter {
    fn write(&mut self, event: RunLogEvent);
}

#[derive(Debug, Default)]
pub struct InMemoryRunLogWriter {
    events: Vec<RunLogEvent>,
}

impl InMemoryRunLogWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[RunLogEvent] {
        &self.events
    }
}

impl RunLogWriter for InMemoryRunLogWriter {
    fn write(&mut self, event: RunLogEvent) {
        self.events.push(event);
    }
}

/// Forwards run-log events to whatever `tracing` subscriber the host installed.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingRunLogWriter;

impl RunLogWriter for TracingRunLogWriter {
    fn write(&mut self, event: RunLogEvent) {
        match event.kind {
            RunLogEventKind::TrapTriggered => tracing::info!(
                step = event.step,
                price = event.price,
                kind = ?event.kind,
                "run log"
            ),
            _ => tracing::debug!(
                step = event.step,
                price = event.price,
                kind = ?event.kind,
                "run log"
            ),
        }
    }
}

/// Phase transitions of a run, in step order. Quiet steps (same phase, no
/// quote change) produce nothing.
pub fn timeline(result: &SimulationResult) -> Vec<RunLogEvent> {
    let mut events = Vec::new();
    let mut previous: Option<&trap_sim::MarketState> = None;

    for state in result {
        let step = state.step_index;
        match state.phase {
            Phase::FakeLiquidity => {
                if previous.is_none() {
                    events.push(RunLogEvent::new(
                        step,
                        RunLogEventKind::FakeLiquidityQuoted,
                        Some(state.current_ask),
                    ));
                }
            }
            Phase::BuyerArrival => {
                events.push(RunLogEvent::new(
                    step,
                    RunLogEventKind::BuyerArrived,
                    Some(state.current_ask),
                ));
                if let Some(trade) = state.last_trade {
                    if trade.side == TradeSide::AlgoSell {
                        events.push(RunLogEvent::new(
                            step,
                            RunLogEventKind::TrapTriggered,
                            Some(trade.price),
                        ));
                    }
                }
            }
            Phase::QuotesReset => {
                let prev_phase = previous.map(|prev| prev.phase);
                if prev_phase != Some(Phase::QuotesReset) {
                    events.push(RunLogEvent::new(
                        step,
                        RunLogEventKind::QuotesReset,
                        Some(state.current_ask),
                    ));
                }
                if let Some(prev) = previous {
                    if state.current_bid < prev.current_bid {
                        events.push(RunLogEvent::new(
                            step,
                            RunLogEventKind::AdverseBidMove,
                            Some(state.current_bid),
                        ));
                    }
                }
            }
            Phase::Drifting => {
                let moved = previous.is_some_and(|prev| {
                    prev.current_bid != state.current_bid || prev.current_ask != state.current_ask
                });
                if moved {
                    events.push(RunLogEvent::new(
                        step,
                        RunLogEventKind::QuotesDrifted,
                        Some(state.current_ask),
                    ));
                }
            }
        }
        previous = Some(state);
    }

    events
}

pub fn write_timeline(result: &SimulationResult, writer: &mut dyn RunLogWriter) {
    for event in timeline(result) {
        writer.write(event);
    }
}
