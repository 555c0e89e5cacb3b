//! One scheduled advertisement from one beacon.

use std::cmp::Ordering;
use std::fmt;

use bsim_core::{BeaconId, SimTime};

/// A single pending broadcast.
///
/// Ordered by `scheduled_at`, then by `beacon_id` so that exact ties resolve
/// the same way on every run with the same seed.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BeaconBroadcast {
    pub beacon_id:    BeaconId,
    /// Seconds between this beacon's successive broadcasts.
    pub interval:     f64,
    pub scheduled_at: SimTime,
}

impl BeaconBroadcast {
    pub fn new(beacon_id: BeaconId, interval: f64, scheduled_at: SimTime) -> Self {
        Self { beacon_id, interval, scheduled_at }
    }

    /// `true` if this broadcast is still on the air when `other` starts.
    #[inline]
    pub fn collides_with(&self, other: &BeaconBroadcast) -> bool {
        self.scheduled_at.overlaps(other.scheduled_at)
    }
}

impl PartialEq for BeaconBroadcast {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BeaconBroadcast {}

impl PartialOrd for BeaconBroadcast {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BeaconBroadcast {
    fn cmp(&self, other: &Self) -> Ordering {
        self.scheduled_at
            .cmp(&other.scheduled_at)
            .then(self.beacon_id.cmp(&other.beacon_id))
    }
}

impl fmt::Display for BeaconBroadcast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.beacon_id.0, self.scheduled_at)
    }
}
