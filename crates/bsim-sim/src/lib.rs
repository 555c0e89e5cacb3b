//! `bsim-sim` — the simulation driver.
//!
//! # Event loop
//!
//! ```text
//! current = pop_earliest()
//! while time < duration:
//!   ① Retire   — candidate = pop_and_replace(successor_of(current))
//!   ② Chain    — while last overlaps candidate: group += candidate,
//!                 candidate = pop_and_replace(successor_of(candidate))
//!   ③ Decide   — group of one: noticed with probability scan_prob
//!                 group of two or more: all lost
//!   ④ Advance  — current = candidate, time = current.scheduled_at
//! push(successor_of(current))
//! ```
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                  |
//! |-----------|---------------------------------------------------------|
//! | `fx-hash` | Uses `FxHashSet` for the noticed-beacon set.            |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use bsim_core::SimConfig;
//! use bsim_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::new(100.0, 0.25, 42))
//!     .beacons(50, 1.0)
//!     .build()?;
//! let report = sim.run(&mut NoopObserver)?;
//! println!("{report}");
//! ```

pub mod builder;
pub mod error;
pub mod noticed;
pub mod observer;
pub mod report;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use noticed::NoticedSet;
pub use observer::{NoopObserver, SimObserver};
pub use report::SimReport;
pub use sim::Sim;
