// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Kashiwara lowering operators.
//!
//! Applying `f_i` to a tableau takes four steps:
//!
//! 1. Read the tableau bottom row to top row, left to right (`ReadingWord`)
//! 2. Keep the letters `i` (`+`) and `i + 1` (`-`) (`Signature`)
//! 3. Cancel each `-` against the most recent unmatched `+`
//! 4. Raise the rightmost surviving `+` from `i` to `i + 1`, keeping the
//!    result only if it is still semistandard
//!
//! The rightmost (not leftmost) surviving `+` determines the graph's
//! topology and must not change.

pub mod operator;
pub mod range;
pub mod signature;

pub use operator::{CrystalOperator, OperatorOutcome, UndefinedReason};
pub use range::OperatorRange;
pub use signature::{ReadingWord, Sign, Signature};
