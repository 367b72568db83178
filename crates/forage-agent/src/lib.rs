//! `forage-agent` — the decision/movement engine of the forage simulation.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`forager`] | `Forager` state machine and the per-tick step procedure      |
//! | [`policy`]  | `SelectionPolicy` trait, the default trail-and-distance score, weighted sampling |
//! | [`error`]   | `AgentError`, `AgentResult<T>`                               |
//!
//! # Behavior sketch
//!
//! A forager is either `Exploring` (mandible empty) or `Returning`
//! (mandible full).  Exploring, it walks a self-avoiding path through the
//! grid, each step drawn from a categorical distribution over unvisited,
//! unobstructed neighbour cells weighted by trail intensity and inverse
//! distance.  The moment it collects a resource unit it starts popping its
//! visited stack, reinforcing the trail marker under it each tick, until
//! the pop lands on its own home site and the unit is deposited.

pub mod error;
pub mod forager;
pub mod policy;

#[cfg(test)]
mod tests;

pub use error::{AgentError, AgentResult};
pub use forager::{Forager, ForagerState, StepEvent, StepReport};
pub use policy::{SelectionPolicy, TrailDistanceWeighted, probabilities};
