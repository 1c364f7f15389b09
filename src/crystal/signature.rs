// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reading words, signatures and bracket cancellation.

use crate::tableau::{Cell, Tableau};
use std::fmt;

/// The entries of a tableau read bottom row to top row, left to right
/// within each row, each tagged with the cell it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingWord {
    letters: Vec<(u32, Cell)>,
}

impl ReadingWord {
    pub fn of(tableau: &Tableau) -> Self {
        let letters = tableau
            .shape()
            .reading_order()
            .map(|cell| (tableau.get(cell), cell))
            .collect();
        Self { letters }
    }

    /// Letter values in reading order.
    pub fn values(&self) -> impl Iterator<Item = u32> + '_ {
        self.letters.iter().map(|&(value, _)| value)
    }

    pub fn letters(&self) -> &[(u32, Cell)] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// A letter equal to `i`.
    Plus,
    /// A letter equal to `i + 1`.
    Minus,
}

/// The `i`-signature of a reading word: its letters `i` (`+`) and `i + 1`
/// (`-`) in reading order, others dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    symbols: Vec<(Sign, Cell)>,
}

impl Signature {
    pub fn new(word: &ReadingWord, index: u32) -> Self {
        let symbols = word
            .letters()
            .iter()
            .filter_map(|&(value, cell)| {
                if value == index {
                    Some((Sign::Plus, cell))
                } else if value == index + 1 {
                    Some((Sign::Minus, cell))
                } else {
                    None
                }
            })
            .collect();
        Self { symbols }
    }

    pub fn symbols(&self) -> &[(Sign, Cell)] {
        &self.symbols
    }

    /// Cells of the `+` symbols left after bracket cancellation, in reading
    /// order.
    ///
    /// Scanning left to right, each `-` cancels the most recent uncancelled
    /// `+`; a `-` with nothing to cancel is skipped.
    pub fn uncancelled_plus(&self) -> Vec<Cell> {
        let mut stack = Vec::new();
        for &(sign, cell) in &self.symbols {
            match sign {
                Sign::Plus => stack.push(cell),
                Sign::Minus => {
                    stack.pop();
                }
            }
        }
        stack
    }

    /// The cell `f_i` changes: the rightmost uncancelled `+`.
    pub fn rightmost_uncancelled_plus(&self) -> Option<Cell> {
        self.uncancelled_plus().last().copied()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (sign, _) in &self.symbols {
            let symbol = match sign {
                Sign::Plus => '+',
                Sign::Minus => '-',
            };
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}
