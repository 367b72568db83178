//! One grid location: exclusive occupancy plus an independent trail slot.

use forage_core::Position;

use crate::{GridError, GridResult, HomeSite, ResourceSite, TrailMarker};

/// The exclusive occupant of a cell.
///
/// A tagged enum rather than three nullable fields: a cell hosting two
/// occupancy kinds at once is unrepresentable.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Occupant {
    Resource(ResourceSite),
    Home(HomeSite),
    Obstacle,
}

/// One grid location.
///
/// Holds at most one [`Occupant`] and, orthogonally, at most one
/// [`TrailMarker`] — a cell may carry a marker while hosting a site, or
/// while empty.  Cells are created once when the grid is built; occupancy
/// and trail are attached and detached by external request or by the agent
/// engine, never by the cell itself.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pos:      Position,
    occupant: Option<Occupant>,
    trail:    Option<TrailMarker>,
}

impl Cell {
    pub(crate) fn new(pos: Position) -> Self {
        Self {
            pos,
            occupant: None,
            trail: None,
        }
    }

    /// The cell's fixed grid position.
    #[inline]
    pub fn pos(&self) -> Position {
        self.pos
    }

    // ── Predicates ────────────────────────────────────────────────────────

    pub fn has_resource(&self) -> bool {
        matches!(self.occupant, Some(Occupant::Resource(_)))
    }

    pub fn has_home(&self) -> bool {
        matches!(self.occupant, Some(Occupant::Home(_)))
    }

    pub fn has_obstacle(&self) -> bool {
        matches!(self.occupant, Some(Occupant::Obstacle))
    }

    pub fn has_trail(&self) -> bool {
        self.trail.is_some()
    }

    /// Any occupancy kind present (obstacle counts as occupied).
    pub fn occupied(&self) -> bool {
        self.occupant.is_some()
    }

    // ── Accessors ─────────────────────────────────────────────────────────
    //
    // Correct usage checks the matching predicate first; a failed accessor
    // is a programming-contract violation surfaced as `MissingEntity`.

    pub fn resource(&self) -> GridResult<&ResourceSite> {
        match &self.occupant {
            Some(Occupant::Resource(site)) => Ok(site),
            _ => Err(self.missing("resource site")),
        }
    }

    pub fn resource_mut(&mut self) -> GridResult<&mut ResourceSite> {
        match &mut self.occupant {
            Some(Occupant::Resource(site)) => Ok(site),
            _ => Err(GridError::MissingEntity {
                pos:    self.pos,
                entity: "resource site",
            }),
        }
    }

    pub fn home(&self) -> GridResult<&HomeSite> {
        match &self.occupant {
            Some(Occupant::Home(site)) => Ok(site),
            _ => Err(self.missing("home site")),
        }
    }

    pub fn home_mut(&mut self) -> GridResult<&mut HomeSite> {
        match &mut self.occupant {
            Some(Occupant::Home(site)) => Ok(site),
            _ => Err(GridError::MissingEntity {
                pos:    self.pos,
                entity: "home site",
            }),
        }
    }

    /// Unlike the occupant accessors, the trail accessors return `Option`
    /// rather than `MissingEntity`: an unmarked cell is the normal case —
    /// exploration substitutes the baseline `gamma` for it — not a broken
    /// caller contract.
    pub fn trail(&self) -> Option<&TrailMarker> {
        self.trail.as_ref()
    }

    pub fn trail_mut(&mut self) -> Option<&mut TrailMarker> {
        self.trail.as_mut()
    }

    // ── Placement ─────────────────────────────────────────────────────────

    pub fn place_resource(&mut self, site: ResourceSite) -> GridResult<()> {
        self.place(Occupant::Resource(site))
    }

    pub fn place_home(&mut self, site: HomeSite) -> GridResult<()> {
        self.place(Occupant::Home(site))
    }

    pub fn place_obstacle(&mut self) -> GridResult<()> {
        self.place(Occupant::Obstacle)
    }

    /// Attach a fresh trail marker at the baseline intensity `gamma`.
    ///
    /// Consults only the trail slot, not the occupancy flag.
    pub fn place_trail(&mut self, gamma: f64) -> GridResult<&mut TrailMarker> {
        if self.trail.is_some() {
            return Err(GridError::TrailOccupied(self.pos));
        }
        Ok(self.trail.insert(TrailMarker::new(gamma)))
    }

    // ── Removal — clears a matching slot, never fails ─────────────────────

    pub fn remove_resource(&mut self) {
        if self.has_resource() {
            self.occupant = None;
        }
    }

    pub fn remove_home(&mut self) {
        if self.has_home() {
            self.occupant = None;
        }
    }

    pub fn remove_obstacle(&mut self) {
        if self.has_obstacle() {
            self.occupant = None;
        }
    }

    pub fn remove_trail(&mut self) {
        self.trail = None;
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn place(&mut self, occupant: Occupant) -> GridResult<()> {
        if self.occupied() {
            return Err(GridError::CellOccupied(self.pos));
        }
        self.occupant = Some(occupant);
        Ok(())
    }

    fn missing(&self, entity: &'static str) -> GridError {
        GridError::MissingEntity {
            pos: self.pos,
            entity,
        }
    }
}
