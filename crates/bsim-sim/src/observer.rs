//! Simulation observer trait for progress reporting.

use bsim_core::{BeaconId, SimTime};
use bsim_schedule::BeaconBroadcast;

use crate::SimReport;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// event loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_beacon_noticed(&mut self, at: SimTime, _beacon: BeaconId, noticed: usize) {
///         println!("{at}: noticed: {noticed}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first broadcast is processed.
    fn on_run_start(&mut self, _beacons: usize, _end: SimTime) {}

    /// Called for every group of two or more overlapping broadcasts.  None of
    /// them is registered.
    fn on_collision(&mut self, _group: &[BeaconBroadcast]) {}

    /// A clean broadcast that the scanner registered, whether or not its
    /// beacon had been noticed before.
    fn on_broadcast_heard(&mut self, _broadcast: &BeaconBroadcast) {}

    /// A clean broadcast that the scanner failed to register.
    fn on_broadcast_missed(&mut self, _broadcast: &BeaconBroadcast) {}

    /// Called each time the noticed set grows.  `noticed` is the new size.
    fn on_beacon_noticed(&mut self, _at: SimTime, _beacon: BeaconId, _noticed: usize) {}

    /// Called once after the loop ends.
    fn on_run_end(&mut self, _report: &SimReport) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
