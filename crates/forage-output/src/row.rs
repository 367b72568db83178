//! Plain data row types written by output backends.

/// The intensity of one trail marker at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSnapshotRow {
    pub tick:      u64,
    pub x:         i32,
    pub y:         i32,
    pub intensity: f64,
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:           u64,
    pub deliveries:     u64,
    pub collections:    u64,
    pub dead_ends:      u64,
    pub laden_foragers: u64,
}
