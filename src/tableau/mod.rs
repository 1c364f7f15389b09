// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tableau data model.
//!
//! - Shape: rectangular dimensions, validated
//! - Cell: a (row, col) coordinate
//! - Weight: value -> count content of a filling
//! - Tableau: an immutable semistandard filling

pub mod grid;
pub mod shape;
pub mod weight;

pub use grid::Tableau;
pub use shape::{Cell, Shape};
pub use weight::Weight;
