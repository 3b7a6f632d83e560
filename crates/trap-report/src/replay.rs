use std::io::{self, Write};

use trap_sim::{MarketState, SimulationResult};

use crate::logging::{RunLogEvent, RunLogEventKind, RunLogWriter};

pub const REPLAY_CSV_HEADER: &str =
    "step,phase,bid,ask,buyer_present,trade_side,trade_price\n";

pub struct ReplayCsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> ReplayCsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_header(&mut self) -> io::Result<()> {
        self.writer.write_all(REPLAY_CSV_HEADER.as_bytes())
    }

    pub fn append_states(&mut self, states: &[MarketState]) -> io::Result<()> {
        for state in states {
            let (side, price) = match state.last_trade {
                Some(trade) => (trade.side.as_str(), format!("{:.2}", trade.price)),
                None => ("", String::new()),
            };
            writeln!(
                self.writer,
                "{},{},{:.2},{:.2},{},{side},{price}",
                state.step_index,
                state.phase.as_str(),
                state.current_bid,
                state.current_ask,
                state.buyer_present
            )?;
        }
        Ok(())
    }

    /// Writes the whole table, flushes, and only then records the artifact
    /// in the run log.
    pub fn write_result_and_log(
        &mut self,
        result: &SimulationResult,
        run_log_writer: &mut dyn RunLogWriter,
    ) -> io::Result<()> {
        self.write_header()?;
        self.append_states(result.states())?;
        self.writer.flush()?;

        let last_step = result
            .final_state()
            .map(|state| state.step_index)
            .unwrap_or_default();
        run_log_writer.write(RunLogEvent::new(
            last_step,
            RunLogEventKind::ReplayArtifactWritten,
            None,
        ));
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, io, rc::Rc};

    use trap_sim::{run, SimulationConfig};

    use crate::logging::{InMemoryRunLogWriter, RunLogEvent, RunLogEventKind, RunLogWriter};

    use super::{ReplayCsvWriter, REPLAY_CSV_HEADER};

    struct TrackingWriter {
        bytes: Vec<u8>,
        flush_called: Rc<Cell<bool>>,
        flush_fails: bool,
    }

    impl TrackingWriter {
        fn new(flush_called: Rc<Cell<bool>>, flush_fails: bool) -> Self {
            Self {
                bytes: Vec::new(),
                flush_called,
                flush_fails,
            }
        }
    }

    impl io::Write for TrackingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.bytes.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flush_called.set(true);
            if self.flush_fails {
                return Err(io::Error::other("flush failed"));
            }
            Ok(())
        }
    }

    struct FlushAssertingLogWriter {
        flush_called: Rc<Cell<bool>>,
    }

    impl RunLogWriter for FlushAssertingLogWriter {
        fn write(&mut self, _event: RunLogEvent) {
            assert!(
                self.flush_called.get(),
                "expected writer flush before logging"
            );
        }
    }

    fn trap_config() -> SimulationConfig {
        SimulationConfig {
            human_order_price: 90.0,
            buyer_arrival_step: 5,
            num_steps: 10,
            ..SimulationConfig::default()
        }
    }

    fn write_csv_for_test(config: &SimulationConfig) -> io::Result<String> {
        let result = run(config).expect("config should be valid");
        let mut output = Vec::new();
        let mut writer = ReplayCsvWriter::new(&mut output);
        writer.write_header()?;
        writer.append_states(result.states())?;
        Ok(String::from_utf8(output).expect("csv output should be utf8"))
    }

    #[test]
    fn replay_has_header_and_one_row_per_step() {
        let csv = write_csv_for_test(&trap_config()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(format!("{}\n", lines[0]), REPLAY_CSV_HEADER);
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[1], "0,fake_liquidity,20.00,80.00,false,,");
        assert_eq!(lines[6], "5,buyer_arrival,20.00,80.00,true,ALGO_SELL,80.00");
        assert!(lines[7].starts_with("6,quotes_reset,"));
        assert!(lines[7].contains(",100.00,true,,"));
    }

    #[test]
    fn every_row_has_seven_plain_fields() {
        let csv = write_csv_for_test(&SimulationConfig::default()).unwrap();

        for line in csv.lines() {
            assert_eq!(line.split(',').count(), 7, "{line}");
            assert!(!line.contains('"'), "{line}");
        }
    }

    #[test]
    fn write_result_and_log_flushes_before_emitting_log() {
        let flush_called = Rc::new(Cell::new(false));
        let writer = TrackingWriter::new(Rc::clone(&flush_called), false);
        let mut replay_writer = ReplayCsvWriter::new(writer);
        let mut log_writer = FlushAssertingLogWriter { flush_called };
        let result = run(&trap_config()).unwrap();

        replay_writer
            .write_result_and_log(&result, &mut log_writer)
            .expect("replay write should flush and log");
        assert!(!replay_writer.into_inner().bytes.is_empty());
    }

    #[test]
    fn write_result_and_log_propagates_flush_errors() {
        let flush_called = Rc::new(Cell::new(false));
        let writer = TrackingWriter::new(Rc::clone(&flush_called), true);
        let mut replay_writer = ReplayCsvWriter::new(writer);
        let mut log_writer = InMemoryRunLogWriter::new();
        let result = run(&trap_config()).unwrap();

        let err = replay_writer
            .write_result_and_log(&result, &mut log_writer)
            .expect_err("flush failure should be returned");

        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert_eq!(log_writer.events().len(), 0);
    }

    #[test]
    fn write_result_and_log_records_final_step() {
        let mut output = Vec::new();
        let mut replay_writer = ReplayCsvWriter::new(&mut output);
        let mut log_writer = InMemoryRunLogWriter::new();
        let result = run(&trap_config()).unwrap();

        replay_writer
            .write_result_and_log(&result, &mut log_writer)
            .expect("replay write should succeed");

        assert!(String::from_utf8(output).unwrap().starts_with(REPLAY_CSV_HEADER));
        assert_eq!(log_writer.events().len(), 1);
        assert_eq!(log_writer.events()[0].step, 9);
        assert_eq!(
            log_writer.events()[0].kind,
            RunLogEventKind::ReplayArtifactWritten
        );
    }
}
