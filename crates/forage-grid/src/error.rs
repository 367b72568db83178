//! Grid error taxonomy.
//!
//! All grid errors are local and synchronous.  None are retried by this
//! crate — a caller that wants "somewhere valid" retries with a different
//! position — and none are fatal to the simulation as a whole.

use forage_core::Position;
use thiserror::Error;

/// Errors raised by grid, cell, and site operations.
#[derive(Debug, Error)]
pub enum GridError {
    /// Position outside the field in bounded mode.  Torus lookups never
    /// raise this: they are pre-wrapped.
    #[error("position {0} out of bounds")]
    OutOfBounds(Position),

    /// Placement onto a cell that already hosts a resource, home, or
    /// obstacle.
    #[error("cell {0} is already occupied")]
    CellOccupied(Position),

    /// Trail placement onto a cell that already carries a marker.  Distinct
    /// from [`CellOccupied`][GridError::CellOccupied]: the trail slot is
    /// orthogonal to occupancy.
    #[error("cell {0} already has a trail marker")]
    TrailOccupied(Position),

    /// No unoccupied cell left for a random placement.
    #[error("no unoccupied cell left on the grid")]
    GridFull,

    /// Accessor used without checking the matching predicate first.
    #[error("cell {pos} has no {entity}")]
    MissingEntity {
        pos:    Position,
        entity: &'static str,
    },

    /// Collection attempt against a depleted resource site.  Expected and
    /// recoverable: the forager simply stays in its exploring state.
    #[error("resource site is empty")]
    ResourceEmpty,
}

/// Shorthand result type for `forage-grid`.
pub type GridResult<T> = Result<T, GridError>;
