//! Run-level simulation parameters.

use crate::{BsimError, BsimResult, SimTime};

/// Scan probability used when the caller does not supply one.  Not backed by
/// any measurement; it is a placeholder chance that a clean broadcast is heard.
pub const DEFAULT_SCAN_PROB: f64 = 0.25;

/// Top-level simulation configuration.
///
/// The beacon population itself is declared on the simulation builder, since
/// it may mix several broadcast intervals.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Length of the observation window in simulated seconds.
    pub duration_secs: f64,

    /// Chance that a non-colliding broadcast is registered by the scanner.
    pub scan_prob: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl SimConfig {
    pub fn new(duration_secs: f64, scan_prob: f64, seed: u64) -> Self {
        Self { duration_secs, scan_prob, seed }
    }

    /// The time at which the scan stops (exclusive upper bound).
    #[inline]
    pub fn end_time(&self) -> SimTime {
        SimTime(self.duration_secs)
    }

    /// Reject parameters the event loop cannot run with.
    pub fn validate(&self) -> BsimResult<()> {
        if !self.duration_secs.is_finite() || self.duration_secs < 0.0 {
            return Err(BsimError::InvalidDuration(self.duration_secs));
        }
        if !(0.0..=1.0).contains(&self.scan_prob) {
            return Err(BsimError::InvalidScanProb(self.scan_prob));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new(0.0, DEFAULT_SCAN_PROB, 0)
    }
}

/// A broadcast interval must be a finite, strictly positive number of seconds.
pub fn check_interval(interval: f64) -> BsimResult<()> {
    if interval.is_finite() && interval > 0.0 {
        Ok(())
    } else {
        Err(BsimError::InvalidInterval(interval))
    }
}
