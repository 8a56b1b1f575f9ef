//! `evac-output` — output writers for the evacuation automaton.
//!
//! Two backends are provided:
//!
//! | Backend            | Files created                             |
//! |--------------------|-------------------------------------------|
//! | [`CsvWriter`]      | `positions.csv`, `tick_summaries.csv`     |
//! | [`JsonTraceWriter`]| one JSON trace file                       |
//!
//! Both implement [`OutputWriter`] and are driven by [`OutputObserver`],
//! which implements `evac_sim::AutomatonObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use evac_output::{CsvWriter, OutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = OutputObserver::new(writer, automaton.config());
//! automaton.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use json::{Coordinates, JsonTraceWriter, TraceAgent, TraceFrame};
pub use observer::OutputObserver;
pub use row::{PositionRow, TickSummaryRow};
pub use writer::{FanOut, OutputWriter};
