//! `forage-grid` — the passive world model of the forage simulation.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                      |
//! |-----------|---------------------------------------------------------------|
//! | [`grid`]  | `Grid`, `Neighbourhood`, `Boundary` — adjacency and placement |
//! | [`cell`]  | `Cell`, `Occupant` — per-cell occupancy plus trail slot       |
//! | [`site`]  | `ResourceSite`, `HomeSite`                                    |
//! | [`trail`] | `TrailMarker`, `TrailExtrema`                                 |
//! | [`error`] | `GridError`, `GridResult<T>`                                  |
//!
//! # Design notes
//!
//! The grid and its entities are passive data holders with narrow mutation
//! contracts: they never initiate agent movement.  A cell holds at most one
//! occupant (resource site, home site, or obstacle — a tagged enum, so "two
//! occupancies at once" is unrepresentable) and, independently, at most one
//! trail marker.
//!
//! Random placement itself holds no RNG: a seeded
//! [`ColonyRng`][forage_core::ColonyRng] shuffles the traversal order once
//! at construction, and placements scan that fixed order, so identical
//! seeds reproduce identical placements.

pub mod cell;
pub mod error;
pub mod grid;
pub mod site;
pub mod trail;


pub use cell::{Cell, Occupant};
pub use error::{GridError, GridResult};
pub use grid::{Boundary, Grid, Neighbourhood};
pub use site::{HomeSite, ResourceSite};
pub use trail::{TrailExtrema, TrailMarker};
