//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, PositionRow, TickSummaryRow};

/// Trait implemented by the CSV and JSON trace writers.
///
/// Errors are stored by [`OutputObserver`][crate::OutputObserver] and
/// retrieved with [`take_error`][crate::OutputObserver::take_error].
pub trait OutputWriter {
    /// Write every active pedestrian's position at `tick`.  `rows` may be
    /// empty once everyone has left.
    fn write_positions(&mut self, tick: u64, rows: &[PositionRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Two writers driven as one.  Both always receive every call; the first
/// error is returned.
pub struct FanOut<A, B> {
    pub first:  A,
    pub second: B,
}

impl<A: OutputWriter, B: OutputWriter> FanOut<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: OutputWriter, B: OutputWriter> OutputWriter for FanOut<A, B> {
    fn write_positions(&mut self, tick: u64, rows: &[PositionRow]) -> OutputResult<()> {
        let a = self.first.write_positions(tick, rows);
        let b = self.second.write_positions(tick, rows);
        a.and(b)
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        let a = self.first.write_tick_summary(row);
        let b = self.second.write_tick_summary(row);
        a.and(b)
    }

    fn finish(&mut self) -> OutputResult<()> {
        let a = self.first.finish();
        let b = self.second.finish();
        a.and(b)
    }
}
