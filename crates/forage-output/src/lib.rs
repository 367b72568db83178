//! `forage-output` — simulation output writers for the forage simulation.
//!
//! One CSV backend is provided; it creates two files:
//!
//! | File                  | Contents                                       |
//! |-----------------------|------------------------------------------------|
//! | `tick_summaries.csv`  | one row per tick: deliveries, collections, dead ends, laden foragers |
//! | `trail_snapshots.csv` | one row per marked cell per snapshot tick: position and intensity |
//!
//! The backend implements [`OutputWriter`] and is driven by
//! [`ColonyOutputObserver`], which implements
//! `forage_sim::ColonyObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use forage_output::{CsvWriter, ColonyOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = ColonyOutputObserver::new(writer);
//! colony.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::ColonyOutputObserver;
pub use row::{TickSummaryRow, TrailSnapshotRow};
pub use writer::OutputWriter;
