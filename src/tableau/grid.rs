// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The `Tableau` value type.
//!
//! A tableau is a rectangular grid of positive integers stored row-major.
//! Tableaux built through the public API are always semistandard: rows weakly
//! increase to the right, columns strictly increase downwards.
//!
//! Equality and hashing are structural (shape plus cells), so tableaux built
//! independently by the generator and by a crystal operator compare equal
//! whenever their grids do. This makes `Tableau` usable directly as a map key.
//!
//! # Examples
//!
//! ```
//! use crystal_search::tableau::Tableau;
//!
//! let t = Tableau::try_from(vec![vec![1, 1], vec![2, 2]]).unwrap();
//! assert_eq!(t.encode(), "[[1,1],[2,2]]");
//! assert!(Tableau::try_from(vec![vec![2, 1]]).is_err());
//! ```

use crate::error::{CrystalError, Result};
use crate::tableau::{Cell, Shape, Weight};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde::Deserialize;
use std::fmt;

/// A semistandard Young tableau of rectangular shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "Vec<Vec<u32>>")]
pub struct Tableau {
    shape: Shape,
    cells: Vec<u32>,
}

impl Tableau {
    /// Wrap a row-major grid without checking it.
    ///
    /// Used by the generator (whose placement rules already guarantee the
    /// semistandard property) and by the operator before its own re-check.
    pub(crate) fn from_cells_unchecked(shape: Shape, cells: Vec<u32>) -> Self {
        debug_assert_eq!(cells.len(), shape.cell_count());
        Self { shape, cells }
    }

    /// Build a tableau from row-major cells, checking the semistandard rules.
    pub fn from_cells(shape: Shape, cells: Vec<u32>) -> Result<Self> {
        if cells.len() != shape.cell_count() {
            return Err(CrystalError::RaggedTableau);
        }
        if let Some(&value) = cells.iter().find(|&&v| v == 0) {
            return Err(CrystalError::InvalidEntry { value });
        }
        let tableau = Self { shape, cells };
        if !tableau.is_semistandard() {
            return Err(CrystalError::NotSemistandard {
                tableau: tableau.encode(),
            });
        }
        Ok(tableau)
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn get(&self, cell: Cell) -> u32 {
        self.cells[self.shape.position_of(cell)]
    }

    /// Row-major cells.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.shape.cols())
    }

    /// Nested-row copy of the grid.
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.rows().map(<[u32]>::to_vec).collect()
    }

    /// Largest entry.
    pub fn max_entry(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Check weak row increase and strict column increase over the whole grid.
    pub fn is_semistandard(&self) -> bool {
        is_semistandard(self.shape, &self.cells)
    }

    /// The content of this tableau over an alphabet of `alphabet_size` values.
    ///
    /// Entries larger than the alphabet are not counted.
    pub fn weight(&self, alphabet_size: u32) -> Result<Weight> {
        let mut counts = vec![0u32; alphabet_size as usize];
        for &value in &self.cells {
            if let Some(slot) = counts.get_mut((value - 1) as usize) {
                *slot += 1;
            }
        }
        Weight::new(counts)
    }

    /// Canonical nested-row encoding, e.g. `[[1,1],[2,2]]`.
    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Copy with one cell replaced. The result is not checked.
    pub(crate) fn with_cell(&self, cell: Cell, value: u32) -> Self {
        let mut cells = self.cells.clone();
        cells[self.shape.position_of(cell)] = value;
        Self::from_cells_unchecked(self.shape, cells)
    }
}

/// Semistandard check over a row-major grid.
pub(crate) fn is_semistandard(shape: Shape, cells: &[u32]) -> bool {
    let cols = shape.cols();
    let rows_ok = cells
        .chunks(cols)
        .all(|row| row.windows(2).all(|pair| pair[0] <= pair[1]));
    let cols_ok = cells
        .windows(cols + 1)
        .all(|window| window[0] < window[cols]);
    rows_ok && cols_ok
}

impl TryFrom<Vec<Vec<u32>>> for Tableau {
    type Error = CrystalError;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != cols) {
            return Err(CrystalError::RaggedTableau);
        }
        let shape = Shape::new(rows.len(), cols).map_err(|_| CrystalError::RaggedTableau)?;
        Tableau::from_cells(shape, rows.into_iter().flatten().collect())
    }
}

impl Serialize for Tableau {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.shape.rows()))?;
        for row in self.rows() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}

impl fmt::Display for Tableau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                write!(f, ",")?;
            }
            write!(f, "[")?;
            for (c, value) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}", value)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
