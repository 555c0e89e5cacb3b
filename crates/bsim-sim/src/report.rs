//! Final tally of a run.

use std::fmt;

use bsim_core::SimTime;

/// How many distinct beacons the scanner registered out of the population.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimReport {
    pub noticed:       usize,
    pub total_beacons: usize,
    /// Simulated time of the first broadcast at or past the end of the scan.
    pub end_time:      SimTime,
}

impl SimReport {
    /// `noticed / total_beacons`, or `0.0` for an empty population.
    pub fn fraction(&self) -> f64 {
        if self.total_beacons == 0 {
            0.0
        } else {
            self.noticed as f64 / self.total_beacons as f64
        }
    }

    pub fn percentage(&self) -> f64 {
        100.0 * self.fraction()
    }
}

impl fmt::Display for SimReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "noticed {} of {} beacons ({:.1}%)",
            self.noticed,
            self.total_beacons,
            self.percentage(),
        )
    }
}
