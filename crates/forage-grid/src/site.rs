//! Resource and home sites.

use forage_core::{ForagerId, HomeId};

use crate::{GridError, GridResult};

// ── ResourceSite ──────────────────────────────────────────────────────────────

/// A finite stock of collectible units.
///
/// Each successful collection hands out exactly one unit.  Once the stock
/// is exhausted the site reports empty and further collection attempts fail
/// with [`GridError::ResourceEmpty`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceSite {
    capacity:  u32,
    remaining: u32,
}

impl ResourceSite {
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            remaining: capacity,
        }
    }

    /// Take one unit from the stock.
    pub fn collect(&mut self) -> GridResult<u32> {
        if self.remaining == 0 {
            return Err(GridError::ResourceEmpty);
        }
        self.remaining -= 1;
        Ok(1)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    #[inline]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }
}

// ── HomeSite ──────────────────────────────────────────────────────────────────

/// A deposit point for collected units.
///
/// Tracks the running total of delivered units and the set of foragers
/// spawned from it, so "is this forager home" queries resolve against
/// membership rather than mere co-location.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HomeSite {
    id:        HomeId,
    delivered: u64,
    members:   Vec<ForagerId>,
}

impl HomeSite {
    pub fn new(id: HomeId) -> Self {
        Self {
            id,
            delivered: 0,
            members: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> HomeId {
        self.id
    }

    /// Accumulate delivered units.
    pub fn deliver(&mut self, units: u32) {
        self.delivered += units as u64;
    }

    /// Total units delivered to this site so far.
    #[inline]
    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    /// Record a forager as belonging to this site.
    pub fn register(&mut self, forager: ForagerId) {
        if !self.members.contains(&forager) {
            self.members.push(forager);
        }
    }

    /// Does `forager` belong to this site?
    pub fn is_member(&self, forager: ForagerId) -> bool {
        self.members.contains(&forager)
    }

    #[inline]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}
