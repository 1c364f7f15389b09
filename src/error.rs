// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for contract violations.
//!
//! Data conditions (an infeasible weight, an undefined operator, an edge whose
//! target is not a node) are ordinary results and never appear here. These
//! variants are reserved for malformed input handed to the library.

use thiserror::Error;

/// Errors raised when a caller breaks a construction contract.
#[derive(Debug, Error)]
pub enum CrystalError {
    /// Shape with a zero dimension.
    #[error("shape must have at least one row and one column, got {rows}x{cols}")]
    InvalidShape { rows: usize, cols: usize },

    #[error("alphabet must contain at least one value")]
    EmptyAlphabet,

    /// Weight mentions more values than the alphabet holds.
    #[error("weight has {len} entries but the alphabet has only {alphabet_size} values")]
    WeightExceedsAlphabet { len: usize, alphabet_size: u32 },

    #[error("value {value} is outside the alphabet 1..={alphabet_size}")]
    ValueOutsideAlphabet { value: u32, alphabet_size: u32 },

    /// Weight text that could not be parsed.
    #[error("invalid weight {input:?}: {reason}")]
    InvalidWeight { input: String, reason: String },

    /// Operator index outside `1..=max`.
    #[error("operator index {index} is outside 1..={max}")]
    OperatorOutOfRange { index: u32, max: u32 },

    #[error("operator range {first}..={last} is empty")]
    InvalidOperatorRange { first: u32, last: u32 },

    #[error("tableau rows must be non-empty and all of the same length")]
    RaggedTableau,

    #[error("tableau entries must be positive, found {value}")]
    InvalidEntry { value: u32 },

    #[error("tableau {tableau} is not semistandard")]
    NotSemistandard { tableau: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CrystalError>;
