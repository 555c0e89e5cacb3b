//! The `Sim` struct and its event loop.

use bsim_core::{SimConfig, SimRng, SimTime};
use bsim_schedule::{BeaconBroadcast, BroadcastScheduler};
use tracing::{debug, trace};

use crate::{NoticedSet, SimError, SimObserver, SimReport, SimResult};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim` owns the scan-decision RNG, the noticed-beacon set and the clock;
/// the [`BroadcastScheduler`] owns every pending broadcast.  Each step:
///
/// 1. **Retire**: replace the current broadcast with its successor and learn
///    the new earliest pending broadcast in one scheduler call.
/// 2. **Chain**: while the last broadcast in the group is still on the air
///    when the candidate starts, the candidate joins the group and is itself
///    retired.
/// 3. **Decide**: a lone broadcast is registered with probability
///    `scan_prob`; a group of two or more is lost entirely.
/// 4. **Advance**: the candidate becomes the current broadcast and the clock
///    jumps to its start.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Run parameters (duration, scan probability, seed).
    pub config: SimConfig,

    /// Pending broadcasts, one per beacon between steps.
    pub scheduler: BroadcastScheduler,

    /// Scan-decision draws.  Separate from the scheduler's jitter stream.
    pub(crate) rng: SimRng,

    pub(crate) noticed: NoticedSet,

    pub(crate) clock: SimTime,

    /// Reused collision-group buffer.
    pub(crate) group: Vec<BeaconBroadcast>,

    pub(crate) finished: bool,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the scan from time 0 until the clock reaches `config.end_time()`.
    ///
    /// A `Sim` runs once; a second call returns [`SimError::AlreadyRun`].
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimReport> {
        if self.finished {
            return Err(SimError::AlreadyRun);
        }
        let end = self.config.end_time();
        let beacons = self.scheduler.beacon_count();

        debug!(
            beacons,
            duration_secs = self.config.duration_secs,
            scan_prob = self.config.scan_prob,
            seed = self.config.seed,
            "scan started"
        );
        observer.on_run_start(beacons, end);

        let mut broadcasts: u64 = 0;
        let mut collisions: u64 = 0;

        let mut current = self.scheduler.pop_earliest()?;
        while self.clock < end {
            let next = self.collect_group(current, end);
            broadcasts += self.group.len() as u64;
            if self.group.len() > 1 {
                collisions += 1;
            }
            self.resolve_group(observer);

            current = next;
            self.clock = current.scheduled_at;
        }

        // Hand the held broadcast's slot back so the scheduler again holds one
        // pending broadcast per beacon.
        let successor = self.scheduler.successor_of(&current);
        self.scheduler.push(successor);
        self.finished = true;

        let report = self.report();
        debug!(
            noticed = report.noticed,
            beacons,
            broadcasts,
            collisions,
            end_time = report.end_time.secs(),
            "scan finished"
        );
        observer.on_run_end(&report);
        Ok(report)
    }

    /// Snapshot of the tally so far.
    pub fn report(&self) -> SimReport {
        SimReport {
            noticed:       self.noticed.len(),
            total_beacons: self.scheduler.beacon_count(),
            end_time:      self.clock,
        }
    }

    /// Distinct beacons registered so far.
    pub fn noticed(&self) -> &NoticedSet {
        &self.noticed
    }

    /// Simulated time of the broadcast currently being processed.
    pub fn clock(&self) -> SimTime {
        self.clock
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    // ── Core step processing ──────────────────────────────────────────────

    /// Fill `self.group` with `first` and every broadcast chained to it by
    /// overlapping windows.  Returns the broadcast that becomes the next
    /// current broadcast.
    ///
    /// Every overlapping candidate joins the group.  Once a member starting
    /// at or after `end` has joined and been retired, the scan stops: the
    /// outer loop ends there anyway, and in a saturated population the chain
    /// would otherwise never break.
    fn collect_group(&mut self, first: BeaconBroadcast, end: SimTime) -> BeaconBroadcast {
        self.group.clear();
        self.group.push(first);

        let successor = self.scheduler.successor_of(&first);
        let mut candidate = self.scheduler.pop_and_replace(successor);
        let mut last = first;
        while last.collides_with(&candidate) {
            self.group.push(candidate);
            last = candidate;
            let successor = self.scheduler.successor_of(&candidate);
            candidate = self.scheduler.pop_and_replace(successor);
            if last.scheduled_at >= end {
                break;
            }
        }
        candidate
    }

    /// Apply the scan decision to the group collected by `collect_group`.
    fn resolve_group<O: SimObserver>(&mut self, observer: &mut O) {
        let group = std::mem::take(&mut self.group);
        match group.as_slice() {
            [lone] => {
                if self.rng.random::<f64>() < self.config.scan_prob {
                    observer.on_broadcast_heard(lone);
                    if self.noticed.insert(lone.beacon_id) {
                        let noticed = self.noticed.len();
                        debug!(at = %lone.scheduled_at, beacon = lone.beacon_id.0, noticed, "beacon noticed");
                        observer.on_beacon_noticed(lone.scheduled_at, lone.beacon_id, noticed);
                    }
                } else {
                    observer.on_broadcast_missed(lone);
                }
            }
            colliding => {
                trace!(at = %colliding[0].scheduled_at, size = colliding.len(), "collision");
                observer.on_collision(colliding);
            }
        }
        self.group = group;
    }
}
