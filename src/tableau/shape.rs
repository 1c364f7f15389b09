// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rectangular shapes and grid coordinates.

use crate::error::{CrystalError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rectangular tableau shape with `rows` rows of `cols` cells each.
///
/// Both dimensions are at least one; this is checked on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Shape {
    rows: usize,
    cols: usize,
}

impl Shape {
    /// Create a shape, rejecting zero dimensions.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(CrystalError::InvalidShape { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(self) -> usize {
        self.rows
    }

    pub fn cols(self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(self) -> usize {
        self.rows * self.cols
    }

    /// Cell at the given row-major position.
    pub fn cell_at(self, position: usize) -> Cell {
        debug_assert!(position < self.cell_count(), "position {} out of bounds", position);
        Cell::new(position / self.cols, position % self.cols)
    }

    /// Row-major position of a cell.
    pub fn position_of(self, cell: Cell) -> usize {
        cell.row * self.cols + cell.col
    }

    /// Cells in reading order: bottom row first, left to right within a row.
    pub fn reading_order(self) -> impl Iterator<Item = Cell> {
        let cols = self.cols;
        (0..self.rows)
            .rev()
            .flat_map(move |row| (0..cols).map(move |col| Cell::new(row, col)))
    }
}

impl TryFrom<(usize, usize)> for Shape {
    type Error = CrystalError;

    fn try_from((rows, cols): (usize, usize)) -> Result<Self> {
        Shape::new(rows, cols)
    }
}

impl From<Shape> for (usize, usize) {
    fn from(shape: Shape) -> Self {
        (shape.rows, shape.cols)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// A grid coordinate; row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
