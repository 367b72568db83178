//! Integer grid coordinates.

use std::fmt;
use std::ops::Add;

/// Additive constant under the square root in [`Position::distance`].
/// Keeps the selection score's `1/dist` term finite when a candidate cell
/// coincides with the decision target.
const DISTANCE_EPSILON: f64 = 1e-7;

/// A grid coordinate pair.
///
/// Value type: equality and hashing are by coordinate, addition is vector
/// addition.  Coordinates are signed so that neighbourhood offsets can be
/// applied before boundary handling; the grid decides whether a negative or
/// out-of-range result is invalid (bounded mode) or wraps (torus mode).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between cell centres.
    ///
    /// A small constant is added under the root so the result is always
    /// strictly positive, even for `self == other`.
    pub fn distance(self, other: Position) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy + DISTANCE_EPSILON).sqrt()
    }
}

impl Add for Position {
    type Output = Position;

    #[inline]
    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
