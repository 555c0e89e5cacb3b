//! The set of distinct beacons the scanner has registered.

use bsim_core::BeaconId;

#[cfg(feature = "fx-hash")]
type IdSet = rustc_hash::FxHashSet<BeaconId>;
#[cfg(not(feature = "fx-hash"))]
type IdSet = std::collections::HashSet<BeaconId>;

/// Grows monotonically over a run; never shrinks.
#[derive(Clone, Debug, Default)]
pub struct NoticedSet {
    ids: IdSet,
}

impl NoticedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `beacon`.  Returns `true` if it had not been noticed before.
    #[inline]
    pub fn insert(&mut self, beacon: BeaconId) -> bool {
        self.ids.insert(beacon)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = BeaconId> + '_ {
        self.ids.iter().copied()
    }
}
