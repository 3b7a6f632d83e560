use trap_sim::{SimulationResult, TrapOutcome};

use crate::logging::{timeline, RunLogEvent, RunLogEventKind};

/// Step-by-step story of a run, one line per run-log event followed by a
/// closing line about the buyer.
pub fn narrate(result: &SimulationResult) -> Vec<String> {
    let mut lines: Vec<String> = timeline(result).iter().map(describe).collect();

    let closing = match TrapOutcome::from_result(result) {
        Some(outcome) => format!(
            "Buyer paid {:.2} for an option worth {:.2} and can only exit at {:.2} (P&L {:+.2}).",
            outcome.fill_price,
            outcome.fair_price,
            outcome.final_bid,
            outcome.buyer_mark_to_market
        ),
        None => "Buyer never crossed the ask; no trade took place.".to_string(),
    };
    lines.push(closing);
    lines
}

fn describe(event: &RunLogEvent) -> String {
    let price = event.price.unwrap_or_default();
    match event.kind {
        RunLogEventKind::FakeLiquidityQuoted => {
            format!("Step {}: algo shows an attractive ask at {price:.2}.", event.step)
        }
        RunLogEventKind::BuyerArrived => {
            format!("Step {}: buyer arrives facing an ask of {price:.2}.", event.step)
        }
        RunLogEventKind::TrapTriggered => {
            format!("Step {}: algo sells to the buyer at {price:.2}.", event.step)
        }
        RunLogEventKind::QuotesReset => {
            format!("Step {}: algo pulls its ask back to {price:.2}.", event.step)
        }
        RunLogEventKind::AdverseBidMove => {
            format!("Step {}: bid drops to {price:.2}.", event.step)
        }
        RunLogEventKind::QuotesDrifted => {
            format!("Step {}: ask drifts to {price:.2}.", event.step)
        }
        RunLogEventKind::ReplayArtifactWritten => {
            format!("Step {}: replay table written.", event.step)
        }
    }
}
