//! The rectangular field: adjacency queries, boundary handling, placement.

use forage_core::{ColonyRng, ForagerParams, HomeId, Position};

use crate::{Cell, GridError, GridResult, HomeSite, ResourceSite, TrailExtrema};

// ── Neighbourhood ─────────────────────────────────────────────────────────────

/// Offsets applied by [`Grid::visible_from`], clockwise from west.
const VON_NEUMANN_OFFSETS: [Position; 4] = [
    Position::new(-1, 0),
    Position::new(0, 1),
    Position::new(1, 0),
    Position::new(0, -1),
];

const MOORE_OFFSETS: [Position; 8] = [
    Position::new(-1, 0),
    Position::new(-1, 1),
    Position::new(0, 1),
    Position::new(1, 1),
    Position::new(1, 0),
    Position::new(1, -1),
    Position::new(0, -1),
    Position::new(-1, -1),
];

/// The adjacency rule set, fixed for the grid's lifetime.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Neighbourhood {
    /// Four axis-aligned neighbours.
    VonNeumann,
    /// Eight neighbours, axis plus diagonal.
    Moore,
}

impl Neighbourhood {
    /// Resolve a requested neighbour count: `<= 4` selects the von Neumann
    /// rule set, anything larger the Moore rule set.
    pub fn from_count(count: u8) -> Self {
        if count <= 4 {
            Neighbourhood::VonNeumann
        } else {
            Neighbourhood::Moore
        }
    }

    /// The position offsets of this rule set.
    pub fn offsets(&self) -> &'static [Position] {
        match self {
            Neighbourhood::VonNeumann => &VON_NEUMANN_OFFSETS,
            Neighbourhood::Moore => &MOORE_OFFSETS,
        }
    }

    /// Number of offsets in the rule set.
    pub fn count(&self) -> usize {
        self.offsets().len()
    }
}

// ── Boundary ──────────────────────────────────────────────────────────────────

/// Boundary policy chosen at grid construction.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Boundary {
    /// Out-of-range positions are invalid.
    Bounded,
    /// Out-of-range positions wrap modulo the grid dimensions.
    Torus,
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// The rectangular array of cells, row-major, dimensions fixed at
/// construction.
///
/// Besides the cells themselves the grid owns the pre-shuffled traversal
/// order behind random placement, the home ID counter, and the
/// [`TrailExtrema`] bookkeeping.
pub struct Grid {
    rows:          usize,
    cols:          usize,
    neighbourhood: Neighbourhood,
    boundary:      Boundary,
    cells:         Vec<Cell>,
    /// Pre-shuffled cell indices scanned by random placement.
    scan_order:    Vec<usize>,
    extrema:       TrailExtrema,
    next_home:     u32,
}

impl Grid {
    /// Build a `rows × cols` grid.
    ///
    /// `neighbours` selects the rule set (`<= 4` → von Neumann, otherwise
    /// Moore); `torus` the boundary policy.  The seed drives the placement
    /// shuffle, so identical seeds reproduce identical random placements.
    pub fn new(rows: usize, cols: usize, neighbours: u8, torus: bool, seed: u64) -> Self {
        let cells: Vec<Cell> = (0..rows * cols)
            .map(|i| Cell::new(Position::new((i % cols) as i32, (i / cols) as i32)))
            .collect();

        let mut rng = ColonyRng::new(seed);
        let mut scan_order: Vec<usize> = (0..cells.len()).collect();
        rng.shuffle(&mut scan_order);

        Self {
            rows,
            cols,
            neighbourhood: Neighbourhood::from_count(neighbours),
            boundary: if torus { Boundary::Torus } else { Boundary::Bounded },
            cells,
            scan_order,
            extrema: TrailExtrema::default(),
            next_home: 0,
        }
    }

    // ── Geometry ──────────────────────────────────────────────────────────

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn neighbourhood(&self) -> Neighbourhood {
        self.neighbourhood
    }

    #[inline]
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Is `pos` inside `[0, cols) × [0, rows)`?
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && (pos.x as usize) < self.cols && pos.y >= 0 && (pos.y as usize) < self.rows
    }

    /// Map any position back into range modulo the grid dimensions.
    pub fn wrap(&self, pos: Position) -> Position {
        Position::new(
            pos.x.rem_euclid(self.cols as i32),
            pos.y.rem_euclid(self.rows as i32),
        )
    }

    // ── Adjacency ─────────────────────────────────────────────────────────

    /// Positions of the cells visible from `pos` under the fixed rule set.
    ///
    /// Torus mode wraps every offset back into range, so the result always
    /// has exactly the rule-set count.  Bounded mode drops offsets landing
    /// outside the field, so edges and corners see fewer cells.
    pub fn visible_from(&self, pos: Position) -> Vec<Position> {
        let offsets = self.neighbourhood.offsets();
        match self.boundary {
            Boundary::Torus => offsets.iter().map(|&o| self.wrap(pos + o)).collect(),
            Boundary::Bounded => offsets
                .iter()
                .map(|&o| pos + o)
                .filter(|&p| self.contains(p))
                .collect(),
        }
    }

    // ── Cell lookup ───────────────────────────────────────────────────────

    /// The cell at `pos`.
    ///
    /// Bounded mode fails with [`GridError::OutOfBounds`] for positions
    /// outside the field; torus mode pre-wraps and therefore never fails.
    pub fn cell(&self, pos: Position) -> GridResult<&Cell> {
        let idx = self.index_of(pos)?;
        Ok(&self.cells[idx])
    }

    /// Mutable access to the cell at `pos`, same boundary rules as
    /// [`cell`][Grid::cell].
    pub fn cell_mut(&mut self, pos: Position) -> GridResult<&mut Cell> {
        let idx = self.index_of(pos)?;
        Ok(&mut self.cells[idx])
    }

    /// Iterate all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    // ── Placement ─────────────────────────────────────────────────────────
    //
    // With an explicit position, placement fails with `OutOfBounds` for an
    // invalid position or `CellOccupied` for a taken cell.  Without one, the
    // pre-shuffled traversal order is scanned for the first unoccupied cell;
    // `GridFull` if none remains.

    /// Place a resource site with `capacity` units.  Returns the chosen
    /// position.
    pub fn place_resource(&mut self, at: Option<Position>, capacity: u32) -> GridResult<Position> {
        let idx = self.placement_index(at)?;
        self.cells[idx].place_resource(ResourceSite::new(capacity))?;
        Ok(self.cells[idx].pos())
    }

    /// Place a home site.  Returns the chosen position.
    pub fn place_home(&mut self, at: Option<Position>) -> GridResult<Position> {
        let idx = self.placement_index(at)?;
        let site = HomeSite::new(HomeId(self.next_home));
        self.cells[idx].place_home(site)?;
        self.next_home += 1;
        Ok(self.cells[idx].pos())
    }

    /// Place an obstacle.  Returns the chosen position.
    pub fn place_obstacle(&mut self, at: Option<Position>) -> GridResult<Position> {
        let idx = self.placement_index(at)?;
        self.cells[idx].place_obstacle()?;
        Ok(self.cells[idx].pos())
    }

    // ── Trail bookkeeping ─────────────────────────────────────────────────

    /// Reinforce the trail marker at `pos`, creating one at
    /// `params.gamma` first if the cell has none.
    ///
    /// A non-positive `path_length` leaves the intensity untouched (see
    /// [`TrailMarker::reinforce`]); the extrema only fold in values an
    /// actual reinforcement produced.  Returns the marker's intensity.
    pub fn reinforce_trail(
        &mut self,
        pos: Position,
        path_length: f64,
        params: &ForagerParams,
    ) -> GridResult<f64> {
        let idx = self.index_of(pos)?;
        let cell = &mut self.cells[idx];
        if !cell.has_trail() {
            cell.place_trail(params.gamma)?;
        }
        let Some(marker) = cell.trail_mut() else {
            return Err(GridError::MissingEntity {
                pos:    cell.pos(),
                entity: "trail marker",
            });
        };
        match marker.reinforce(params.rho, path_length) {
            Some(intensity) => {
                self.extrema.observe(intensity);
                Ok(intensity)
            }
            None => Ok(marker.intensity()),
        }
    }

    /// Positions of every cell currently carrying a trail marker.
    ///
    /// O(cells) scan; rebuilt by the driver once per tick for the decay
    /// pass and for pull-based monitoring.
    pub fn trail_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|c| c.has_trail())
            .map(|c| c.pos())
            .collect()
    }

    /// Historical intensity extrema, for display scaling only.
    #[inline]
    pub fn trail_extrema(&self) -> TrailExtrema {
        self.extrema
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn index_of(&self, pos: Position) -> GridResult<usize> {
        let pos = match self.boundary {
            Boundary::Torus => self.wrap(pos),
            Boundary::Bounded => {
                if !self.contains(pos) {
                    return Err(GridError::OutOfBounds(pos));
                }
                pos
            }
        };
        Ok(pos.y as usize * self.cols + pos.x as usize)
    }

    fn placement_index(&mut self, at: Option<Position>) -> GridResult<usize> {
        match at {
            Some(pos) => self.index_of(pos),
            None => self
                .scan_order
                .iter()
                .copied()
                .find(|&i| !self.cells[i].occupied())
                .ok_or(GridError::GridFull),
        }
    }
}
