//! Integration tests for evac-output.

use tempfile::TempDir;

use crate::row::{PositionRow, TickSummaryRow};

fn tmp() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

fn pos_row(agent_id: u32, tick: u64) -> PositionRow {
    let id = agent_id as usize;
    PositionRow { agent_id, tick, row: id + 1, col: 2 * id }
}

fn summary_row(tick: u64) -> TickSummaryRow {
    TickSummaryRow {
        tick,
        elapsed_secs: tick as f64 * 0.5,
        moved:        3,
        stayed:       2,
        conflicts:    1,
        evacuated:    tick,
        active:       5 - tick,
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use super::*;
    use crate::csv::CsvWriter;
    use crate::writer::OutputWriter;

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("positions.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("positions.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["agent_id", "tick", "row", "col"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers2,
            ["tick", "elapsed_secs", "moved", "stayed", "conflicts", "evacuated", "active"]
        );
    }

    #[test]
    fn csv_positions_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_positions(4, &[pos_row(0, 4), pos_row(1, 4), pos_row(2, 4)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("positions.csv")).unwrap();
        let records: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 3);
        assert_eq!(&records[2][0], "2");
        assert_eq!(&records[2][1], "4");
        assert_eq!(&records[2][2], "3");
        assert_eq!(&records[2][3], "4");
    }

    #[test]
    fn csv_positions_keep_wide_coordinates() {
        let dir = tmp();
        let wide = u32::MAX as usize + 5;
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_positions(0, &[PositionRow { agent_id: 0, tick: 0, row: wide, col: 1 }]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("positions.csv")).unwrap();
        let rec = rdr.records().next().unwrap().unwrap();
        assert_eq!(&rec[2], wide.to_string());
    }

    #[test]
    fn csv_tick_summary_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        for t in 0..3 {
            w.write_tick_summary(&summary_row(t)).unwrap();
        }
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let records: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 3);
        assert_eq!(&records[1][1], "0.5");
        assert_eq!(&records[2][6], "3");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_missing_dir_errors() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("nope")).is_err());
    }
}

// ── JSON trace ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod json_tests {
    use super::*;
    use crate::json::{JsonTraceWriter, TraceFrame};
    use crate::writer::OutputWriter;

    #[test]
    fn trace_shape() {
        let dir = tmp();
        let path = dir.path().join("trace.json");
        let mut w = JsonTraceWriter::new(&path, 0.5, 0.4).unwrap().with_domain("hall");
        w.write_positions(0, &[pos_row(1, 0)]).unwrap();
        w.write_positions(2, &[]).unwrap();
        w.finish().unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let agent = &value[0]["agents"][0];
        assert_eq!(agent["id"], 1);
        assert_eq!(agent["domain"], "hall");
        assert!((agent["coordinates"]["x"].as_f64().unwrap() - 0.8).abs() < 1e-12);
        assert!((agent["coordinates"]["y"].as_f64().unwrap() - 0.8).abs() < 1e-12);
        assert_eq!(value[1]["timestamp"], 1.0);
        assert_eq!(value[1]["agents"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn frames_deserialize() {
        let dir = tmp();
        let path = dir.path().join("trace.json");
        let mut w = JsonTraceWriter::new(&path, 1.0, 1.0).unwrap();
        w.write_positions(3, &[pos_row(0, 3), pos_row(2, 3)]).unwrap();
        w.finish().unwrap();

        let frames: Vec<TraceFrame> =
            serde_json::from_reader(std::fs::File::open(&path).unwrap()).unwrap();
        assert_eq!(frames, w.frames());
        assert_eq!(frames[0].agents[1].domain, JsonTraceWriter::DEFAULT_DOMAIN);
    }

    #[test]
    fn finish_twice_writes_once() {
        let dir = tmp();
        let path = dir.path().join("trace.json");
        let mut w = JsonTraceWriter::new(&path, 1.0, 1.0).unwrap();
        w.finish().unwrap();
        w.write_positions(1, &[pos_row(0, 1)]).unwrap();
        w.finish().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap().trim(), "[]");
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;
    use evac_agent::PedestrianParams;
    use evac_behavior::FloorFieldModel;
    use evac_core::{GridScenario, Location, Tick};
    use evac_sim::{AutomatonBuilder, AutomatonConfig, AutomatonObserver, TickReport};
    use evac_space::Neighbourhood;

    use crate::{CsvWriter, FanOut, JsonTraceWriter, OutputError, OutputObserver, OutputResult};
    use crate::writer::OutputWriter;

    struct Failing;

    impl OutputWriter for Failing {
        fn write_positions(&mut self, _t: u64, _r: &[PositionRow]) -> OutputResult<()> {
            Err(std::io::Error::other("disk full").into())
        }
        fn write_tick_summary(&mut self, _r: &TickSummaryRow) -> OutputResult<()> {
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn first_error_kept() {
        let mut obs = OutputObserver::new(Failing, &AutomatonConfig::default());
        let store = evac_agent::PedestrianStore::new();
        obs.on_snapshot(Tick(0), &store);
        obs.on_snapshot(Tick(1), &store);
        obs.on_tick_end(Tick(0), &TickReport::new(Tick(0)));
        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
    }

    #[derive(Default)]
    struct Collect(Vec<PositionRow>);

    impl OutputWriter for Collect {
        fn write_positions(&mut self, _t: u64, r: &[PositionRow]) -> OutputResult<()> {
            self.0.extend_from_slice(r);
            Ok(())
        }
        fn write_tick_summary(&mut self, _r: &TickSummaryRow) -> OutputResult<()> {
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn snapshot_rows_carry_untruncated_locations() {
        let wide = u32::MAX as usize + 1;
        let mut store = evac_agent::PedestrianStore::new();
        store.spawn(Location::new(wide, wide + 2), PedestrianParams::default());

        let mut obs = OutputObserver::new(Collect::default(), &AutomatonConfig::default());
        obs.on_snapshot(Tick(0), &store);
        assert!(obs.take_error().is_none());
        let rows = &obs.into_writer().0;
        assert_eq!((rows[0].row, rows[0].col), (wide, wide + 2));
    }

    #[test]
    fn integration_csv_and_trace() {
        let dir = tmp();
        let scenario = GridScenario::parse("#####\n#...E\n#####\n").unwrap();
        let config = AutomatonConfig {
            neighbourhood:         Neighbourhood::VonNeumann,
            seconds_per_tick:      1.0,
            cell_size_m:           0.5,
            output_interval_ticks: 1,
            seed:                  3,
            ..AutomatonConfig::default()
        };
        let mut automaton = AutomatonBuilder::new(config, scenario, FloorFieldModel)
            .build()
            .unwrap();
        automaton.add_pedestrian(1, 1, PedestrianParams::default()).unwrap();

        let writer = FanOut::new(
            CsvWriter::new(dir.path()).unwrap(),
            JsonTraceWriter::new(&dir.path().join("trace.json"), 1.0, 0.5).unwrap(),
        );
        let mut obs = OutputObserver::new(writer, automaton.config());
        automaton.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let ticks = automaton.tick().0 as usize;
        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(rdr.records().count(), ticks);

        // One position row per snapshot while the walker is on the grid.
        let mut rdr = csv::Reader::from_path(dir.path().join("positions.csv")).unwrap();
        let first = rdr.records().next().unwrap().unwrap();
        assert_eq!((&first[0], &first[1], &first[2], &first[3]), ("0", "0", "1", "1"));

        let trace = obs.into_writer().second;
        assert_eq!(trace.frames().len(), ticks + 1);
        assert!(trace.frames().last().unwrap().agents.is_empty());
        assert_eq!(trace.frames()[0].agents[0].coordinates.x, 0.5);
    }
}
