//! `bsim-schedule` — beacon broadcast events and the event scheduler.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`broadcast`]  | `BeaconBroadcast` (one scheduled advertisement)          |
//! | [`scheduler`]  | `BroadcastScheduler` (min-heap of pending broadcasts)    |
//! | [`error`]      | `ScheduleError`, `ScheduleResult<T>`                     |
//!
//! # Schedule model (summary)
//!
//! Every beacon has exactly one pending broadcast.  When it fires, it is
//! replaced by its successor:
//!
//! ```text
//! first_at = U[0, interval) + U[0, JITTER_MAX)
//! next_at  = at + interval  + U[0, JITTER_MAX)
//! ```
//!
//! The jitter keeps beacons with identical intervals from staying in
//! lock-step forever.

pub mod broadcast;
pub mod error;
pub mod scheduler;

#[cfg(test)]
mod tests;

pub use broadcast::BeaconBroadcast;
pub use error::{ScheduleError, ScheduleResult};
pub use scheduler::BroadcastScheduler;
