//! `BroadcastScheduler` — the global future-event set.
//!
//! # Why a heap
//!
//! The driver only ever needs the single earliest pending broadcast.  A
//! binary min-heap gives O(log B) insert and pop for B beacons, so a run of E
//! broadcasts costs O(E log B) instead of comparing timestamps pairwise.
//!
//! # Invariant
//!
//! Outside a collision-chain scan the scheduler holds exactly one pending
//! broadcast per beacon, except for the one broadcast the driver is
//! currently holding.  [`BroadcastScheduler::pop_and_replace`] retires one
//! broadcast and learns the new minimum in a single step, so the driver never
//! composes raw push/pop and cannot forget to reinsert a successor.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::ops::Range;

use bsim_core::config::check_interval;
use bsim_core::{BeaconId, BsimError, SimRng, SimTime};
use tracing::debug;

use crate::{BeaconBroadcast, ScheduleError, ScheduleResult};

/// Min-priority queue of pending broadcasts, keyed by `scheduled_at`.
pub struct BroadcastScheduler {
    heap: BinaryHeap<Reverse<BeaconBroadcast>>,
    /// Source of initial offsets and per-broadcast jitter.
    rng: SimRng,
    /// Number of beacons ever added; also the next id to hand out.
    beacon_count: usize,
}

impl BroadcastScheduler {
    /// An empty scheduler drawing its randomness from `rng`.
    pub fn new(rng: SimRng) -> Self {
        Self {
            heap: BinaryHeap::new(),
            rng,
            beacon_count: 0,
        }
    }

    /// Create `beacon_count` beacons with ids `[0, beacon_count)`, all
    /// broadcasting every `interval` seconds from a random initial offset.
    pub fn initialize(beacon_count: usize, interval: f64, rng: SimRng) -> ScheduleResult<Self> {
        if beacon_count < 1 {
            return Err(BsimError::NoBeacons.into());
        }
        let mut scheduler = Self::new(rng);
        scheduler.add_beacons(beacon_count, interval)?;
        Ok(scheduler)
    }

    /// Append `count` beacons with the given interval.  Ids continue from the
    /// beacons already present.  Returns the range of ids assigned.
    pub fn add_beacons(&mut self, count: usize, interval: f64) -> ScheduleResult<Range<BeaconId>> {
        check_interval(interval)?;
        let total = self.beacon_count + count;
        let first = BeaconId::try_from(self.beacon_count)
            .map_err(|_| ScheduleError::TooManyBeacons(total))?;
        let end = BeaconId::try_from(total).map_err(|_| ScheduleError::TooManyBeacons(total))?;

        self.heap.reserve(count);
        for raw in first.0..end.0 {
            let at = self.rng.uniform_below(interval) + self.rng.jitter();
            self.heap.push(Reverse(BeaconBroadcast::new(BeaconId(raw), interval, SimTime(at))));
        }
        self.beacon_count = total;

        debug!(count, interval, first = first.0, "beacons added");
        Ok(first..end)
    }

    /// Append a single beacon.
    pub fn add_beacon(&mut self, interval: f64) -> ScheduleResult<BeaconId> {
        Ok(self.add_beacons(1, interval)?.start)
    }

    /// Remove and return the earliest pending broadcast.
    pub fn pop_earliest(&mut self) -> ScheduleResult<BeaconBroadcast> {
        self.heap
            .pop()
            .map(|Reverse(event)| event)
            .ok_or(ScheduleError::Exhausted)
    }

    /// Insert a pending broadcast.
    pub fn push(&mut self, event: BeaconBroadcast) {
        self.heap.push(Reverse(event));
    }

    /// Push `event`, then pop the minimum, as one operation.
    ///
    /// If `event` is no later than every pending broadcast it comes straight
    /// back and the heap is untouched; otherwise it takes the old minimum's
    /// slot and the old minimum is returned.  Never fails: the pushed event
    /// is always available to return.
    pub fn pop_and_replace(&mut self, event: BeaconBroadcast) -> BeaconBroadcast {
        if let Some(mut top) = self.heap.peek_mut() {
            if top.0 < event {
                return std::mem::replace(&mut top.0, event);
            }
        }
        event
    }

    /// The same beacon's next broadcast: `interval` later plus fresh jitter.
    pub fn successor_of(&mut self, event: &BeaconBroadcast) -> BeaconBroadcast {
        let at = event.scheduled_at + event.interval + self.rng.jitter();
        BeaconBroadcast::new(event.beacon_id, event.interval, at)
    }

    /// The earliest pending broadcast, without removing it.
    pub fn peek(&self) -> Option<&BeaconBroadcast> {
        self.heap.peek().map(|Reverse(event)| event)
    }

    /// All pending broadcasts, in no particular order.
    pub fn pending(&self) -> impl Iterator<Item = &BeaconBroadcast> {
        self.heap.iter().map(|Reverse(event)| event)
    }

    /// Number of beacons ever added to this scheduler.
    pub fn beacon_count(&self) -> usize {
        self.beacon_count
    }

    /// Number of broadcasts currently pending.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
