//! `ColonyOutputObserver<W>` — bridges `ColonyObserver` to an `OutputWriter`.

use forage_agent::Forager;
use forage_core::Tick;
use forage_grid::Grid;
use forage_sim::{ColonyObserver, TickSummary};

use crate::row::{TickSummaryRow, TrailSnapshotRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`ColonyObserver`] that writes trail snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `ColonyObserver`
/// methods have no return value.  After `colony.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct ColonyOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> ColonyOutputObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `colony.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> ColonyObserver for ColonyOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        let row = TickSummaryRow {
            tick:           tick.0,
            deliveries:     summary.deliveries,
            collections:    summary.collections,
            dead_ends:      summary.dead_ends,
            laden_foragers: summary.laden_foragers as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, grid: &Grid, _foragers: &[Forager]) {
        let rows: Vec<TrailSnapshotRow> = grid
            .cells()
            .filter_map(|cell| {
                cell.trail().map(|marker| TrailSnapshotRow {
                    tick:      tick.0,
                    x:         cell.pos().x,
                    y:         cell.pos().y,
                    intensity: marker.intensity(),
                })
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_trail_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
