//! Fluent builder for constructing a [`Sim`].

use bsim_core::config::check_interval;
use bsim_core::{BsimError, SimConfig, SimRng, SimTime};
use bsim_schedule::BroadcastScheduler;

use crate::{NoticedSet, Sim, SimResult};

/// RNG stream offsets, one per consumer of the root seed.
const SCHEDULE_STREAM: u64 = 0;
const SCAN_STREAM:     u64 = 1;

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — duration, scan probability, seed
/// - at least one `.beacons(count, interval)` group with `count > 0`
///
/// Groups are numbered in the order they are added: the first group gets ids
/// `0..count`, the next continues from there.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::new(60.0, 0.25, 7))
///     .beacons(40, 1.0)   // ids 0..40, 1 s interval
///     .beacons(10, 0.1)   // ids 40..50, 100 ms interval
///     .build()?;
/// let report = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    groups: Vec<(usize, f64)>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, groups: Vec::new() }
    }

    /// Add `count` beacons that broadcast every `interval` seconds.
    pub fn beacons(mut self, count: usize, interval: f64) -> Self {
        self.groups.push((count, interval));
        self
    }

    /// Validate inputs, seed the scheduler, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        for &(_, interval) in &self.groups {
            check_interval(interval)?;
        }

        // ── Split the root seed into independent streams ─────────────────
        let mut root = SimRng::new(self.config.seed);
        let schedule_rng = root.child(SCHEDULE_STREAM);
        let scan_rng = root.child(SCAN_STREAM);

        // ── Populate the scheduler ───────────────────────────────────────
        let mut groups = self.groups.into_iter().filter(|&(count, _)| count > 0);
        let Some((count, interval)) = groups.next() else {
            return Err(BsimError::NoBeacons.into());
        };
        let mut scheduler = BroadcastScheduler::initialize(count, interval, schedule_rng)?;
        for (count, interval) in groups {
            scheduler.add_beacons(count, interval)?;
        }

        Ok(Sim {
            config:   self.config,
            scheduler,
            rng:      scan_rng,
            noticed:  NoticedSet::new(),
            clock:    SimTime::ZERO,
            group:    Vec::new(),
            finished: false,
        })
    }
}
