//! JSON trace backend.
//!
//! The whole run is buffered and written as one array when
//! [`finish`](OutputWriter::finish) is called:
//!
//! ```json
//! [
//!   { "timestamp": 0.0,
//!     "agents": [ { "id": 0, "domain": "grid", "coordinates": { "x": 0.4, "y": 1.2 } } ] },
//!   ...
//! ]
//! ```
//!
//! `timestamp` is simulated seconds; `x` is `col * cell_size_m` and `y` is
//! `row * cell_size_m`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::writer::OutputWriter;
use crate::{OutputResult, PositionRow, TickSummaryRow};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceAgent {
    pub id:          u32,
    pub domain:      String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceFrame {
    pub timestamp: f64,
    pub agents:    Vec<TraceAgent>,
}

/// Buffers snapshot frames and writes them as a JSON array on finish.
pub struct JsonTraceWriter {
    file:             Option<BufWriter<File>>,
    domain:           String,
    seconds_per_tick: f64,
    cell_size_m:      f64,
    frames:           Vec<TraceFrame>,
}

impl JsonTraceWriter {
    pub const DEFAULT_DOMAIN: &'static str = "grid";

    /// Create (truncate) `path` now so path errors surface before the run.
    pub fn new(path: &Path, seconds_per_tick: f64, cell_size_m: f64) -> OutputResult<Self> {
        Ok(Self {
            file:   Some(BufWriter::new(File::create(path)?)),
            domain: Self::DEFAULT_DOMAIN.to_owned(),
            seconds_per_tick,
            cell_size_m,
            frames: Vec::new(),
        })
    }

    /// Tag written into every agent entry.
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Frames buffered so far.
    pub fn frames(&self) -> &[TraceFrame] {
        &self.frames
    }
}

impl OutputWriter for JsonTraceWriter {
    fn write_positions(&mut self, tick: u64, rows: &[PositionRow]) -> OutputResult<()> {
        let agents = rows
            .iter()
            .map(|r| TraceAgent {
                id:          r.agent_id,
                domain:      self.domain.clone(),
                coordinates: Coordinates {
                    x: r.col as f64 * self.cell_size_m,
                    y: r.row as f64 * self.cell_size_m,
                },
            })
            .collect();
        self.frames.push(TraceFrame {
            timestamp: tick as f64 * self.seconds_per_tick,
            agents,
        });
        Ok(())
    }

    fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        let Some(mut file) = self.file.take() else {
            return Ok(());
        };
        serde_json::to_writer_pretty(&mut file, &self.frames)?;
        file.flush()?;
        Ok(())
    }
}
