// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run configuration.
//!
//! Shape, alphabet, weights and operator range are explicit parameters of
//! every entry point; this struct gathers them for the command-line driver.
//! A configuration can be read from a JSON file, where every field is
//! optional:
//!
//! ```json
//! { "rows": 2, "cols": 2, "alphabet_size": 4, "weights": [[1, 1, 1, 1]] }
//! ```
//!
//! Values are stored raw and validated by the accessors, so an invalid file
//! is reported as a [`CrystalError`] when its values are first used.

use crate::crystal::OperatorRange;
use crate::error::{CrystalError, Result};
use crate::graph::CrystalGraphBuilder;
use crate::tableau::{Shape, Weight};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// Defaults
pub const DEFAULT_ROWS: usize = 3;
pub const DEFAULT_COLS: usize = 4;
pub const DEFAULT_ALPHABET_SIZE: u32 = 12;
pub const DEFAULT_WEIGHT: [u32; 12] = [1, 2, 1, 1, 0, 0, 1, 2, 1, 1, 1, 1];
pub const DEFAULT_OUTPUT: &str = "crystal_graph.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CrystalConfig {
    pub rows: usize,
    pub cols: usize,
    pub alphabet_size: u32,
    /// Count vectors; shorter vectors are padded to the alphabet.
    pub weights: Vec<Vec<u32>>,
    pub first_operator: u32,
    /// Defaults to `alphabet_size - 1`.
    pub last_operator: Option<u32>,
    pub output: PathBuf,
}

impl Default for CrystalConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            alphabet_size: DEFAULT_ALPHABET_SIZE,
            weights: vec![DEFAULT_WEIGHT.to_vec()],
            first_operator: 1,
            last_operator: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl CrystalConfig {
    /// Read a configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn shape(&self) -> Result<Shape> {
        Shape::new(self.rows, self.cols)
    }

    /// Configured weights, padded to the alphabet.
    pub fn weights(&self) -> Result<Vec<Weight>> {
        if self.alphabet_size == 0 {
            return Err(CrystalError::EmptyAlphabet);
        }
        self.weights
            .iter()
            .map(|counts| Weight::with_alphabet(counts.clone(), self.alphabet_size))
            .collect()
    }

    pub fn operators(&self) -> Result<OperatorRange> {
        let last = self
            .last_operator
            .unwrap_or_else(|| self.alphabet_size.saturating_sub(1));
        OperatorRange::new(self.first_operator, last, self.alphabet_size)
    }

    pub fn builder(&self) -> Result<CrystalGraphBuilder> {
        Ok(CrystalGraphBuilder::new(self.shape()?, self.operators()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CrystalConfig::default();
        assert_eq!(config.shape().unwrap().to_string(), "3x4");
        let weights = config.weights().unwrap();
        assert_eq!(weights.len(), 1);
        assert_eq!(weights[0].total(), 12);
        let operators = config.operators().unwrap();
        assert_eq!((operators.first(), operators.last()), (1, 11));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = CrystalConfig::from_json(r#"{"rows": 2, "cols": 2, "alphabet_size": 4, "weights": [[2, 2]]}"#)
            .unwrap();
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(config.weights().unwrap()[0].counts(), &[2, 2, 0, 0]);
        assert_eq!(config.operators().unwrap().last(), 3);
    }

    #[test]
    fn test_invalid_values_reported() {
        assert!(matches!(
            CrystalConfig::from_json(r#"{"weights": [[1, -1]]}"#),
            Err(CrystalError::Json(_))
        ));
        assert!(CrystalConfig::from_json(r#"{"colour": 3}"#).is_err());

        let config = CrystalConfig::from_json(r#"{"rows": 0}"#).unwrap();
        assert!(matches!(config.shape(), Err(CrystalError::InvalidShape { .. })));

        let config = CrystalConfig::from_json(r#"{"last_operator": 12}"#).unwrap();
        assert!(matches!(
            config.operators(),
            Err(CrystalError::OperatorOutOfRange { index: 12, max: 11 })
        ));

        let config = CrystalConfig::from_json(r#"{"alphabet_size": 3}"#).unwrap();
        assert!(matches!(
            config.weights(),
            Err(CrystalError::WeightExceedsAlphabet { len: 12, alphabet_size: 3 })
        ));
    }
}
