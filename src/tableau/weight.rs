// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Weights: how many times each value of the alphabet appears in a filling.
//!
//! A weight over an alphabet of size K is stored as K counts, where index
//! `v - 1` holds the count of value `v`.
//!
//! ```
//! use crystal_search::tableau::Weight;
//!
//! let weight: Weight = "2,2".parse().unwrap();
//! assert_eq!(weight.count(1), 2);
//! assert_eq!(weight.total(), 4);
//! assert_eq!(weight.alphabet_size(), 2);
//! ```

use crate::error::{CrystalError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Occurrence counts for the values `1..=alphabet_size`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct Weight {
    counts: Vec<u32>,
}

impl Weight {
    /// Create a weight from a count vector; the alphabet is its length.
    pub fn new(counts: Vec<u32>) -> Result<Self> {
        if counts.is_empty() {
            return Err(CrystalError::EmptyAlphabet);
        }
        Ok(Self { counts })
    }

    /// Create a weight from a count vector, padded with zeros to `alphabet_size`.
    pub fn with_alphabet(counts: Vec<u32>, alphabet_size: u32) -> Result<Self> {
        let mut weight = Self::new(counts)?;
        weight.pad_to(alphabet_size)?;
        Ok(weight)
    }

    /// Create a weight from a `value -> count` map over `1..=alphabet_size`.
    pub fn from_map(map: &BTreeMap<u32, u32>, alphabet_size: u32) -> Result<Self> {
        if alphabet_size == 0 {
            return Err(CrystalError::EmptyAlphabet);
        }
        let mut counts = vec![0; alphabet_size as usize];
        for (&value, &count) in map {
            if value == 0 || value > alphabet_size {
                return Err(CrystalError::ValueOutsideAlphabet {
                    value,
                    alphabet_size,
                });
            }
            counts[(value - 1) as usize] = count;
        }
        Ok(Self { counts })
    }

    /// Extend the alphabet to `alphabet_size`, padding with zero counts.
    pub fn pad_to(&mut self, alphabet_size: u32) -> Result<()> {
        let len = self.counts.len();
        if len > alphabet_size as usize {
            return Err(CrystalError::WeightExceedsAlphabet { len, alphabet_size });
        }
        self.counts.resize(alphabet_size as usize, 0);
        Ok(())
    }

    pub fn alphabet_size(&self) -> u32 {
        self.counts.len() as u32
    }

    /// Count of `value`; zero for values outside the alphabet.
    pub fn count(&self, value: u32) -> u32 {
        match value {
            0 => 0,
            v => self.counts.get((v - 1) as usize).copied().unwrap_or(0),
        }
    }

    /// Number of entries this weight places.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// The weight obtained by moving one entry from `index` to `index + 1`.
    ///
    /// This is the weight of `f_index(T)` for any tableau `T` of this weight.
    /// Returns `None` when the move is impossible.
    pub fn lowered(&self, index: u32) -> Option<Weight> {
        let i = index.checked_sub(1)? as usize;
        if i + 1 >= self.counts.len() || self.counts[i] == 0 {
            return None;
        }
        let mut counts = self.counts.clone();
        counts[i] -= 1;
        counts[i + 1] += 1;
        Some(Weight { counts })
    }
}

impl TryFrom<Vec<u32>> for Weight {
    type Error = CrystalError;

    fn try_from(counts: Vec<u32>) -> Result<Self> {
        Weight::new(counts)
    }
}

impl From<Weight> for Vec<u32> {
    fn from(weight: Weight) -> Self {
        weight.counts
    }
}

impl FromStr for Weight {
    type Err = CrystalError;

    /// Parse a comma-separated count list such as `1,2,1,1,0,0,1,2,1,1,1,1`.
    /// Surrounding brackets are accepted.
    fn from_str(input: &str) -> Result<Self> {
        let trimmed = input
            .trim()
            .trim_start_matches('[')
            .trim_end_matches(']');
        let counts = trimmed
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<u32>().map_err(|e| CrystalError::InvalidWeight {
                    input: input.to_string(),
                    reason: format!("{:?}: {}", part, e),
                })
            })
            .collect::<Result<Vec<u32>>>()?;
        Weight::new(counts)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, count) in self.counts.iter().enumerate() {
            if idx > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", count)?;
        }
        write!(f, "]")
    }
}
