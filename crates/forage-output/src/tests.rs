//! Integration tests for forage-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{TickSummaryRow, TrailSnapshotRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(x: i32, tick: u64) -> TrailSnapshotRow {
        TrailSnapshotRow { tick, x, y: x + 1, intensity: 0.5 }
    }

    fn summary_row(tick: u64) -> TickSummaryRow {
        TickSummaryRow { tick, deliveries: tick, collections: tick + 1, dead_ends: 0, laden_foragers: 2 }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("trail_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("trail_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["tick", "x", "y", "intensity"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["tick", "deliveries", "collections", "dead_ends", "laden_foragers"]);
    }

    #[test]
    fn csv_snapshot_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![snap_row(0, 5), snap_row(1, 5), snap_row(2, 5)];
        w.write_trail_snapshots(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("trail_snapshots.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 3);
        assert_eq!(&read_rows[0][0], "5"); // tick
        assert_eq!(&read_rows[0][1], "0"); // x
        assert_eq!(&read_rows[1][1], "1");
        assert_eq!(&read_rows[2][2], "3"); // y = x + 1
    }

    #[test]
    fn csv_tick_summary_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][0], "3"); // tick
        assert_eq!(&read_rows[0][1], "3"); // deliveries
        assert_eq!(&read_rows[0][2], "4"); // collections
        assert_eq!(&read_rows[0][4], "2"); // laden_foragers
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_trail_snapshots(&[]).unwrap(); // should return Ok(())
    }

    #[test]
    fn integration_csv() {
        use forage_core::{ForagerParams, Position};
        use forage_sim::{ColonyBuilder, ColonyConfig};

        use crate::observer::ColonyOutputObserver;

        let config = ColonyConfig {
            rows:                    8,
            cols:                    8,
            neighbours:              4,
            torus:                   false,
            total_ticks:             20,
            seed:                    1,
            snapshot_interval_ticks: 5,
            params:                  ForagerParams::default(),
        };

        let mut colony = ColonyBuilder::new(config).build().unwrap();
        let home = colony.grid.place_home(Some(Position::new(3, 3))).unwrap();
        colony.grid.place_resource(Some(Position::new(6, 6)), 50).unwrap();
        colony.spawn_forager(home, None).unwrap();
        colony.spawn_forager(home, None).unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = ColonyOutputObserver::new(writer);
        colony.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        // One summary row per tick.
        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 20, "expected one summary row per tick, got {}", rows.len());
    }
}
