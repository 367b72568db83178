//! The forager state machine and per-tick step procedure.

use forage_core::{ForagerId, ForagerParams, ForagerRng, Position};
use forage_grid::Grid;

use crate::policy::{SelectionPolicy, sample};
use crate::AgentResult;

/// The two behavioral states, derived from the mandible.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ForagerState {
    /// Mandible empty: self-avoiding weighted exploration.
    Exploring,
    /// Mandible full: backtracking homeward along the visited stack,
    /// reinforcing trail markers on the way.
    Returning,
}

/// What a single step did, reported to the driver.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StepEvent {
    /// Moved to a freshly selected candidate cell.
    Advanced,
    /// Moved onto a resource site and collected one unit.
    Collected,
    /// Popped one position off the visited stack while returning.
    Backtracked,
    /// Backtracked onto the own home site and deposited the carried unit.
    Delivered,
    /// No unvisited, unobstructed candidate remained; jumped back to the
    /// trail origin and cleared the trail.
    DeadEnd,
    /// Nothing to do: returning with an empty stack, or exploring with
    /// neither candidates nor a trail to retreat along.
    Stalled,
}

/// Per-step output consumed by the tick loop.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct StepReport {
    pub event: StepEvent,
    /// Cell whose trail marker was reinforced this step, if any.  The tick
    /// loop collects these so the decay pass skips them.
    pub reinforced: Option<Position>,
}

impl StepReport {
    fn new(event: StepEvent) -> Self {
        Self {
            event,
            reinforced: None,
        }
    }
}

// ── Forager ───────────────────────────────────────────────────────────────────

/// One mobile agent.
///
/// Created through a home site (see the colony's spawn operation), destroyed
/// only by external removal.  Carries its visited trail, mandible, and
/// accumulated path length across ticks.  The trail never exceeds the grid's
/// cell count: exploration excludes visited cells, so each cell is pushed at
/// most once between resets.
#[derive(Clone, PartialEq, Debug)]
pub struct Forager {
    id:          ForagerId,
    home:        Position,
    pos:         Position,
    trail:       Vec<Position>,
    mandible:    u8,
    path_length: f64,
    params:      ForagerParams,
}

impl Forager {
    /// Construct a forager bound to the home site at `home`.
    ///
    /// Callers go through the colony's spawn operation, which checks that a
    /// home site exists there and registers the forager with it.
    pub fn new(id: ForagerId, home: Position, params: ForagerParams) -> Self {
        Self {
            id,
            home,
            pos: home,
            trail: Vec::new(),
            mandible: 0,
            path_length: 0.0,
            params,
        }
    }

    #[inline]
    pub fn id(&self) -> ForagerId {
        self.id
    }

    #[inline]
    pub fn pos(&self) -> Position {
        self.pos
    }

    #[inline]
    pub fn home(&self) -> Position {
        self.home
    }

    #[inline]
    pub fn params(&self) -> &ForagerParams {
        &self.params
    }

    /// Carried units (0 or 1).
    #[inline]
    pub fn mandible(&self) -> u8 {
        self.mandible
    }

    /// `true` while carrying a unit.
    #[inline]
    pub fn is_laden(&self) -> bool {
        self.mandible > 0
    }

    pub fn state(&self) -> ForagerState {
        if self.is_laden() {
            ForagerState::Returning
        } else {
            ForagerState::Exploring
        }
    }

    /// The visited stack, oldest first.
    pub fn trail(&self) -> &[Position] {
        &self.trail
    }

    /// Straight-line length accumulated along the current outbound path.
    #[inline]
    pub fn path_length(&self) -> f64 {
        self.path_length
    }

    #[cfg(test)]
    pub(crate) fn set_trail(&mut self, trail: Vec<Position>) {
        self.trail = trail;
    }

    #[cfg(test)]
    pub(crate) fn load_mandible(&mut self, path_length: f64) {
        self.mandible = 1;
        self.path_length = path_length;
    }

    // ── Per-tick step ─────────────────────────────────────────────────────

    /// Advance the forager by one tick.
    ///
    /// `visible` is the neighbourhood the driver obtained from
    /// [`Grid::visible_from`] for the forager's current position.  The
    /// forager mutates its own position and, through the grid's public
    /// operations, cell/resource/trail state.
    pub fn step<P: SelectionPolicy>(
        &mut self,
        visible: &[Position],
        grid: &mut Grid,
        policy: &P,
        rng: &mut ForagerRng,
    ) -> AgentResult<StepReport> {
        match self.state() {
            ForagerState::Returning => self.step_returning(grid),
            ForagerState::Exploring => self.step_exploring(visible, grid, policy, rng),
        }
    }

    /// Returning: reinforce the marker underfoot, pop the most recent
    /// position, move there, deposit if that cell is the own home.
    fn step_returning(&mut self, grid: &mut Grid) -> AgentResult<StepReport> {
        grid.reinforce_trail(self.pos, self.path_length, &self.params)?;
        let reinforced = Some(self.pos);

        let Some(to) = self.trail.pop() else {
            return Ok(StepReport {
                event: StepEvent::Stalled,
                reinforced,
            });
        };
        self.pos = to;

        let mut event = StepEvent::Backtracked;
        let cell = grid.cell_mut(to)?;
        if cell.has_home() {
            let home = cell.home_mut()?;
            if home.is_member(self.id) {
                home.deliver(self.mandible as u32);
                self.mandible = 0;
                self.path_length = 0.0;
                event = StepEvent::Delivered;
            }
        }

        Ok(StepReport { event, reinforced })
    }

    /// Exploring: weighted selection over unvisited, unobstructed
    /// neighbours; dead ends retreat to the trail origin.
    fn step_exploring<P: SelectionPolicy>(
        &mut self,
        visible: &[Position],
        grid: &mut Grid,
        policy: &P,
        rng: &mut ForagerRng,
    ) -> AgentResult<StepReport> {
        let mut allowed = Vec::with_capacity(visible.len());
        for &pos in visible {
            if self.trail.contains(&pos) {
                continue;
            }
            if grid.cell(pos)?.has_obstacle() {
                continue;
            }
            allowed.push(pos);
        }

        if allowed.is_empty() {
            // Dead end: back out to the trail origin and restart the search.
            let Some(&origin) = self.trail.first() else {
                return Ok(StepReport::new(StepEvent::Stalled));
            };
            self.trail.clear();
            self.path_length = 0.0;
            self.pos = origin;
            return Ok(StepReport::new(StepEvent::DeadEnd));
        }

        let target = self.pos;
        let mut scores = Vec::with_capacity(allowed.len());
        for &pos in &allowed {
            let intensity = grid
                .cell(pos)?
                .trail()
                .map(|m| m.intensity())
                .unwrap_or(self.params.gamma);
            scores.push(policy.score(intensity, pos.distance(target), &self.params));
        }

        let to = allowed[sample(&scores, rng)];
        self.trail.push(self.pos);
        self.path_length += self.pos.distance(to);
        self.pos = to;

        let mut event = StepEvent::Advanced;
        let cell = grid.cell_mut(to)?;
        if cell.has_resource() && !cell.resource()?.is_empty() {
            self.mandible += cell.resource_mut()?.collect()? as u8;
            event = StepEvent::Collected;
        }

        Ok(StepReport::new(event))
    }
}
