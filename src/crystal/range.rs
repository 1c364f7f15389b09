// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Contiguous ranges of operator indices.

use crate::crystal::CrystalOperator;
use crate::error::{CrystalError, Result};

/// The operators `f_first ..= f_last` over an alphabet of `alphabet_size` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorRange {
    first: u32,
    last: u32,
    alphabet_size: u32,
}

impl OperatorRange {
    /// Every operator of the alphabet, `f_1 ..= f_{K-1}`.
    pub fn full(alphabet_size: u32) -> Result<Self> {
        Self::new(1, alphabet_size.saturating_sub(1), alphabet_size)
    }

    pub fn new(first: u32, last: u32, alphabet_size: u32) -> Result<Self> {
        if alphabet_size == 0 {
            return Err(CrystalError::EmptyAlphabet);
        }
        if first > last {
            return Err(CrystalError::InvalidOperatorRange { first, last });
        }
        // Both ends must name real operators.
        CrystalOperator::new(first, alphabet_size)?;
        CrystalOperator::new(last, alphabet_size)?;
        Ok(Self {
            first,
            last,
            alphabet_size,
        })
    }

    pub fn first(&self) -> u32 {
        self.first
    }

    pub fn last(&self) -> u32 {
        self.last
    }

    pub fn alphabet_size(&self) -> u32 {
        self.alphabet_size
    }

    pub fn len(&self) -> usize {
        (self.last - self.first + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.first > self.last
    }

    pub fn operators(&self) -> impl Iterator<Item = CrystalOperator> {
        (self.first..=self.last).map(CrystalOperator::checked)
    }
}
