// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state that is not tracked on the trail.
//!
//! Counters only ever grow, so backtracking leaves them alone.

pub mod statistics;

pub use statistics::{Counters, Statistics};
