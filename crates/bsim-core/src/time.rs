//! Simulation time model.
//!
//! # Design
//!
//! Broadcast schedules are continuous: every beacon fires at its own offset
//! plus a random jitter, so time is carried as `f64` seconds since the start
//! of the scan rather than as an integer tick.
//!
//! `SimTime` orders with [`f64::total_cmp`], which gives the event heap the
//! total order it needs.  Configuration validation keeps NaN and infinities
//! out of every schedule, so the total order agrees with the numeric one.

use std::cmp::Ordering;
use std::fmt;

/// How long one advertisement occupies the channel (1 ms).  Two broadcasts
/// whose windows overlap are lost together.
pub const BROADCAST_DURATION: f64 = 0.001;

/// Upper bound (exclusive) of the uniform timing jitter added to every
/// broadcast, in seconds.
pub const JITTER_MAX: f64 = 0.01;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute simulated time, in seconds since the start of the scan.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    #[inline]
    pub fn secs(self) -> f64 {
        self.0
    }

    /// `true` if a broadcast starting at `self` is still on the air at `other`.
    #[inline]
    pub fn overlaps(self, other: SimTime) -> bool {
        self.0 + BROADCAST_DURATION > other.0
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}
