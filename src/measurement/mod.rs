//! Measurement infrastructure for comparisons.
//!
//! This module provides:
//! - A [`Clock`] seam with the wall-clock [`MonotonicClock`] and a scripted [`ManualClock`]
//! - The [`Workload`] trait and closure adapters
//! - Per-phase trial collection with mean computation

mod clock;
mod collector;
mod workload;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use collector::{measure_once, run_trials, Collector};
pub use workload::{
    from_fn, repeat, try_from_fn, BoxedWorkload, FromFn, Repeat, TryFromFn, Workload,
};
