//! `OutputObserver<W>` — bridges `AutomatonObserver` to an `OutputWriter`.

use evac_agent::PedestrianStore;
use evac_core::Tick;
use evac_sim::{AutomatonConfig, AutomatonObserver, TickReport};

use crate::row::{PositionRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// An [`AutomatonObserver`] that writes positions and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After `run()` returns, check for errors with
/// [`take_error`][Self::take_error].
///
/// `run` and `run_while` finish the writer through `on_run_end`; after
/// `run_ticks` call [`finish`][Self::finish] yourself.
pub struct OutputObserver<W: OutputWriter> {
    writer:           W,
    seconds_per_tick: f64,
    last_error:       Option<OutputError>,
}

impl<W: OutputWriter> OutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` for the
    /// tick-to-seconds conversion.
    pub fn new(writer: W, config: &AutomatonConfig) -> Self {
        Self {
            writer,
            seconds_per_tick: config.seconds_per_tick,
            last_error:       None,
        }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.writer.finish()
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> AutomatonObserver for OutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, report: &TickReport) {
        let row = TickSummaryRow {
            tick:         tick.0,
            elapsed_secs: tick.as_secs(self.seconds_per_tick),
            moved:        report.moved as u64,
            stayed:       report.stayed as u64,
            conflicts:    report.conflicts as u64,
            evacuated:    report.evacuated as u64,
            active:       report.active as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, pedestrians: &PedestrianStore) {
        let mut rows: Vec<PositionRow> = pedestrians
            .active()
            .iter()
            .map(|p| PositionRow {
                agent_id: p.id().into(),
                tick:     tick.0,
                row:      p.location().row,
                col:      p.location().col,
            })
            .collect();
        // The active set is reshuffled every tick.
        rows.sort_unstable_by_key(|r| r.agent_id);
        let result = self.writer.write_positions(tick.0, &rows);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
