//! `forage-sim` — the tick-loop orchestrator of the forage simulation.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`config`]   | `ColonyConfig` — dimensions, boundary, seed, run length    |
//! | [`builder`]  | `ColonyBuilder` — validation and colony construction       |
//! | [`colony`]   | `Colony` — per-tick stepping, decay pass, spawn entry point |
//! | [`observer`] | `ColonyObserver` trait, `NoopObserver`, `TickSummary`      |
//! | [`error`]    | `SimError`, `SimResult<T>`                                 |
//!
//! # Tick anatomy
//!
//! The model is discrete-tick, single-threaded, and cooperative.  Each tick:
//!
//! 1. Every forager steps once, in ascending spawn order.  A step reads the
//!    grid's neighbourhood query, picks or constructs the next cell, and
//!    mutates cell/resource/trail state through the grid's public
//!    operations.
//! 2. Every trail marker not reinforced during phase 1 decays once.
//! 3. Observer hooks fire (`on_tick_end`, optionally `on_snapshot`).
//!
//! Determinism: grid placement and each forager's decisions draw from
//! independent streams derived from the one configured seed, so identical
//! seeds reproduce identical runs.

pub mod builder;
pub mod colony;
pub mod config;
pub mod error;
pub mod observer;


pub use builder::ColonyBuilder;
pub use colony::Colony;
pub use config::ColonyConfig;
pub use error::{SimError, SimResult};
pub use observer::{ColonyObserver, NoopObserver, TickSummary};
