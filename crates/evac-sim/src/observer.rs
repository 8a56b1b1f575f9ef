//! Automaton observer trait for progress reporting and data collection.

use evac_agent::PedestrianStore;
use evac_core::Tick;

use crate::TickReport;

/// Callbacks invoked by the `run*` methods of
/// [`Automaton`][crate::Automaton] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl AutomatonObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, report: &TickReport) {
///         println!("{tick}: {} moved, {} out", report.moved, report.evacuated);
///     }
/// }
/// ```
pub trait AutomatonObserver {
    /// Called before the step that computes `tick`.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the step.  `tick` is the tick that was just computed;
    /// the automaton's clock already reads `tick + 1`.
    fn on_tick_end(&mut self, _tick: Tick, _report: &TickReport) {}

    /// Called every `config.output_interval_ticks` ticks with the settled
    /// state at `tick`, including tick 0 before the first step.
    ///
    /// Active pedestrians are the ones on the grid; evacuated pedestrians
    /// are kept for completeness.
    fn on_snapshot(&mut self, _tick: Tick, _pedestrians: &PedestrianStore) {}

    /// Called once when a `run` or `run_while` loop stops.
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// An [`AutomatonObserver`] that does nothing.
pub struct NoopObserver;

impl AutomatonObserver for NoopObserver {}
