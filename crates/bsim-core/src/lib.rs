//! `bsim-core` — foundational types for the beacon broadcast simulator.
//!
//! This crate is a dependency of every other `bsim-*` crate.  It has no
//! `bsim-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `BeaconId`                                            |
//! | [`time`]        | `SimTime`, `BROADCAST_DURATION`, `JITTER_MAX`         |
//! | [`config`]      | `SimConfig`, `DEFAULT_SCAN_PROB`                      |
//! | [`rng`]         | `SimRng`                                              |
//! | [`error`]       | `BsimError`, `BsimResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DEFAULT_SCAN_PROB, SimConfig};
pub use error::{BsimError, BsimResult};
pub use ids::BeaconId;
pub use rng::SimRng;
pub use time::{BROADCAST_DURATION, JITTER_MAX, SimTime};
