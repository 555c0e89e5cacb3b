//! Unit tests for bsim-schedule.

use bsim_core::{BeaconId, SimRng, SimTime};

use crate::{BeaconBroadcast, BroadcastScheduler};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn bcast(id: u32, at: f64) -> BeaconBroadcast {
    BeaconBroadcast::new(BeaconId(id), 1.0, SimTime(at))
}

/// Scheduler with no beacons; events are pushed by hand.
fn empty() -> BroadcastScheduler {
    BroadcastScheduler::new(SimRng::new(42))
}

// ── BeaconBroadcast ───────────────────────────────────────────────────────────

#[cfg(test)]
mod broadcast {
    use super::*;

    #[test]
    fn orders_by_time_then_id() {
        assert!(bcast(9, 1.0) < bcast(0, 2.0));
        assert!(bcast(0, 1.0) < bcast(1, 1.0));
        assert_eq!(bcast(3, 1.5), bcast(3, 1.5));
    }

    #[test]
    fn collision_window() {
        let a = bcast(0, 10.0);
        assert!(a.collides_with(&bcast(1, 10.0005)));
        assert!(!a.collides_with(&bcast(1, 10.002)));
    }

    #[test]
    fn display() {
        assert_eq!(bcast(4, 1.5).to_string(), "4: 1.500");
    }
}

// ── BroadcastScheduler ────────────────────────────────────────────────────────

#[cfg(test)]
mod scheduler {
    use bsim_core::{BsimError, JITTER_MAX};

    use super::*;
    use crate::ScheduleError;

    #[test]
    fn initialize_one_event_per_beacon() {
        let s = BroadcastScheduler::initialize(25, 1.0, SimRng::new(1)).unwrap();
        assert_eq!(s.len(), 25);
        assert_eq!(s.beacon_count(), 25);

        let mut ids: Vec<u32> = s.pending().map(|e| e.beacon_id.0).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..25).collect::<Vec<_>>());
    }

    #[test]
    fn initial_offsets_within_interval_plus_jitter() {
        let interval = 0.5;
        let s = BroadcastScheduler::initialize(1_000, interval, SimRng::new(3)).unwrap();
        for e in s.pending() {
            assert!(e.scheduled_at.secs() >= 0.0);
            assert!(e.scheduled_at.secs() < interval + JITTER_MAX, "offset {}", e.scheduled_at);
            assert_eq!(e.interval, interval);
        }
    }

    #[test]
    fn initialize_rejects_empty_population() {
        let result = BroadcastScheduler::initialize(0, 1.0, SimRng::new(1));
        assert_eq!(result.err(), Some(ScheduleError::Config(BsimError::NoBeacons)));
    }

    #[test]
    fn initialize_rejects_bad_interval() {
        assert!(BroadcastScheduler::initialize(3, 0.0, SimRng::new(1)).is_err());
        assert!(BroadcastScheduler::initialize(3, -1.0, SimRng::new(1)).is_err());
        assert!(BroadcastScheduler::initialize(3, f64::NAN, SimRng::new(1)).is_err());
    }

    #[test]
    fn add_beacons_continues_ids() {
        let mut s = BroadcastScheduler::initialize(3, 1.0, SimRng::new(1)).unwrap();
        let ids = s.add_beacons(2, 0.1).unwrap();
        assert_eq!(ids, BeaconId(3)..BeaconId(5));
        assert_eq!(s.add_beacon(2.0).unwrap(), BeaconId(5));
        assert_eq!(s.beacon_count(), 6);
        assert_eq!(s.len(), 6);

        let fast: Vec<_> = s.pending().filter(|e| e.interval == 0.1).collect();
        assert_eq!(fast.len(), 2);
    }

    #[test]
    fn pop_earliest_yields_ascending_times() {
        let mut s = BroadcastScheduler::initialize(200, 1.0, SimRng::new(9)).unwrap();
        let mut last = SimTime(f64::NEG_INFINITY);
        while let Ok(e) = s.pop_earliest() {
            assert!(e.scheduled_at >= last);
            last = e.scheduled_at;
        }
        assert!(s.is_empty());
    }

    #[test]
    fn pop_earliest_on_empty_is_exhausted() {
        let mut s = empty();
        assert_eq!(s.pop_earliest().err(), Some(ScheduleError::Exhausted));
    }

    #[test]
    fn push_restores_order() {
        let mut s = empty();
        s.push(bcast(0, 3.0));
        s.push(bcast(1, 1.0));
        s.push(bcast(2, 2.0));
        assert_eq!(s.peek().map(|e| e.beacon_id), Some(BeaconId(1)));
        assert_eq!(s.pop_earliest().unwrap().beacon_id, BeaconId(1));
        assert_eq!(s.pop_earliest().unwrap().beacon_id, BeaconId(2));
        assert_eq!(s.pop_earliest().unwrap().beacon_id, BeaconId(0));
    }

    #[test]
    fn pop_and_replace_returns_earlier_pending() {
        let mut s = empty();
        s.push(bcast(0, 1.0));
        s.push(bcast(1, 2.0));

        let out = s.pop_and_replace(bcast(2, 1.5));
        assert_eq!(out.beacon_id, BeaconId(0));
        assert_eq!(s.len(), 2);
        assert_eq!(s.pop_earliest().unwrap().beacon_id, BeaconId(2));
        assert_eq!(s.pop_earliest().unwrap().beacon_id, BeaconId(1));
    }

    #[test]
    fn pop_and_replace_returns_event_itself_when_earliest() {
        let mut s = empty();
        s.push(bcast(0, 5.0));

        let out = s.pop_and_replace(bcast(1, 4.0));
        assert_eq!(out.beacon_id, BeaconId(1));
        assert_eq!(s.len(), 1);
        assert_eq!(s.peek().map(|e| e.beacon_id), Some(BeaconId(0)));
    }

    #[test]
    fn pop_and_replace_on_empty_returns_event() {
        let mut s = empty();
        let out = s.pop_and_replace(bcast(7, 1.0));
        assert_eq!(out.beacon_id, BeaconId(7));
        assert!(s.is_empty());
    }

    #[test]
    fn successor_advances_by_interval_plus_jitter() {
        let mut s = empty();
        let e = BeaconBroadcast::new(BeaconId(4), 0.25, SimTime(10.0));
        for _ in 0..1_000 {
            let next = s.successor_of(&e);
            assert_eq!(next.beacon_id, BeaconId(4));
            assert_eq!(next.interval, 0.25);
            let step = next.scheduled_at - e.scheduled_at;
            assert!((0.25..=0.25 + JITTER_MAX).contains(&step), "step {step}");
        }
    }

    #[test]
    fn equal_interval_beacons_drift_apart() {
        // Two beacons that start 0.1 ms apart with identical intervals.  Without
        // jitter the gap would stay constant forever.
        let mut s = empty();
        let mut a = BeaconBroadcast::new(BeaconId(0), 1.0, SimTime(0.5));
        let mut b = BeaconBroadcast::new(BeaconId(1), 1.0, SimTime(0.5001));

        let mut gaps = Vec::new();
        for _ in 0..10 {
            gaps.push(b.scheduled_at - a.scheduled_at);
            a = s.successor_of(&a);
            b = s.successor_of(&b);
        }
        let first = gaps[0];
        assert!(
            gaps.iter().any(|g| (g - first).abs() > 1e-6),
            "gap stayed constant: {gaps:?}",
        );
    }

    #[test]
    fn same_seed_same_schedule() {
        let a = BroadcastScheduler::initialize(50, 1.0, SimRng::new(77)).unwrap();
        let b = BroadcastScheduler::initialize(50, 1.0, SimRng::new(77)).unwrap();
        let mut xs: Vec<_> = a.pending().copied().collect();
        let mut ys: Vec<_> = b.pending().copied().collect();
        xs.sort();
        ys.sort();
        assert_eq!(xs, ys);
    }
}
