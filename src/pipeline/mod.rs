// src/pipeline/mod.rs
//! Pipeline entry points for the monitor.
//!
//! - `calculate_diff`: Compare a feed snapshot with the saved marker
//! - `run_cycle`: One fetch/diff/notify/persist pass
//! - `run_watch`: The polling loop around `run_cycle`

pub mod diff;
pub mod poll;

pub use diff::{DiffOutcome, calculate_diff};
pub use poll::{CycleOutcome, run_check, run_cycle, run_watch};
