//! `forage-core` — foundational types for the forage ant-colony simulation.
//!
//! This crate is a dependency of every other `forage-*` crate.  It
//! intentionally has no `forage-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`ids`]      | `ForagerId`, `HomeId`                             |
//! | [`position`] | `Position`, Euclidean distance                    |
//! | [`time`]     | `Tick`                                            |
//! | [`rng`]      | `ColonyRng` (grid-level), `ForagerRng` (per-agent)|
//! | [`params`]   | `ForagerParams` — gamma/alpha/beta/rho            |
//! | [`error`]    | `CoreError`, `CoreResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod params;
pub mod position;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{ForagerId, HomeId};
pub use params::ForagerParams;
pub use position::Position;
pub use rng::{ColonyRng, ForagerRng};
pub use time::Tick;
