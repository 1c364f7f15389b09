// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The Kashiwara lowering operator `f_i` on tableaux.

use crate::crystal::signature::{ReadingWord, Signature};
use crate::error::{CrystalError, Result};
use crate::tableau::{Cell, Tableau};
use std::fmt;

/// Why `f_i` is undefined on a tableau.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndefinedReason {
    /// Bracket cancellation left no `+`.
    NoUncancelledPlus,
    /// Changing the selected cell from `i` to `i + 1` broke the semistandard rules.
    BreaksSemistandard,
}

impl fmt::Display for UndefinedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UndefinedReason::NoUncancelledPlus => write!(f, "no uncancelled +"),
            UndefinedReason::BreaksSemistandard => {
                write!(f, "the changed cell breaks the semistandard rules")
            }
        }
    }
}

/// Result of applying `f_i` to a tableau.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperatorOutcome {
    /// A new tableau, differing from the input only at `cell`.
    Lowered { tableau: Tableau, cell: Cell },
    Undefined(UndefinedReason),
}

impl OperatorOutcome {
    pub fn is_defined(&self) -> bool {
        matches!(self, OperatorOutcome::Lowered { .. })
    }

    pub fn tableau(&self) -> Option<&Tableau> {
        match self {
            OperatorOutcome::Lowered { tableau, .. } => Some(tableau),
            OperatorOutcome::Undefined(_) => None,
        }
    }

    pub fn into_tableau(self) -> Option<Tableau> {
        match self {
            OperatorOutcome::Lowered { tableau, .. } => Some(tableau),
            OperatorOutcome::Undefined(_) => None,
        }
    }
}

/// The lowering operator `f_i` over an alphabet `1..=K`, with `1 <= i < K`.
///
/// # Example
///
/// ```
/// use crystal_search::crystal::{CrystalOperator, OperatorOutcome};
/// use crystal_search::tableau::{Cell, Tableau};
///
/// let f1 = CrystalOperator::new(1, 3).unwrap();
/// let t = Tableau::try_from(vec![vec![1, 1]]).unwrap();
/// match f1.apply(&t) {
///     OperatorOutcome::Lowered { tableau, cell } => {
///         assert_eq!(tableau.encode(), "[[1,2]]");
///         assert_eq!(cell, Cell::new(0, 1));
///     }
///     other => panic!("expected a tableau, got {:?}", other),
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrystalOperator {
    index: u32,
}

impl CrystalOperator {
    /// Create `f_index` for an alphabet of `alphabet_size` values.
    pub fn new(index: u32, alphabet_size: u32) -> Result<Self> {
        let max = alphabet_size.saturating_sub(1);
        if index == 0 || index > max {
            return Err(CrystalError::OperatorOutOfRange { index, max });
        }
        Ok(Self { index })
    }

    /// Operator with an index already checked against its alphabet.
    pub(crate) const fn checked(index: u32) -> Self {
        Self { index }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    /// Label used in exported graphs, e.g. `f_3`.
    pub fn label(&self) -> String {
        format!("f_{}", self.index)
    }

    /// Apply `f_i` to `tableau`.
    ///
    /// The cell changed is the rightmost `+` surviving bracket cancellation
    /// of the `i`-signature of the reading word. Its value becomes `i + 1`,
    /// and the result stands only if the whole grid is still semistandard.
    /// The input is never modified.
    pub fn apply(&self, tableau: &Tableau) -> OperatorOutcome {
        let word = ReadingWord::of(tableau);
        let signature = Signature::new(&word, self.index);

        let Some(cell) = signature.rightmost_uncancelled_plus() else {
            return OperatorOutcome::Undefined(UndefinedReason::NoUncancelledPlus);
        };

        debug_assert_eq!(tableau.get(cell), self.index);
        let lowered = tableau.with_cell(cell, self.index + 1);
        if lowered.is_semistandard() {
            OperatorOutcome::Lowered {
                tableau: lowered,
                cell,
            }
        } else {
            OperatorOutcome::Undefined(UndefinedReason::BreaksSemistandard)
        }
    }
}

impl fmt::Display for CrystalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f_{}", self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tableau(rows: Vec<Vec<u32>>) -> Tableau {
        Tableau::try_from(rows).unwrap()
    }

    #[test]
    fn test_index_range_checked() {
        assert!(CrystalOperator::new(1, 12).is_ok());
        assert!(CrystalOperator::new(11, 12).is_ok());
        assert!(matches!(
            CrystalOperator::new(12, 12),
            Err(CrystalError::OperatorOutOfRange { index: 12, max: 11 })
        ));
        assert!(CrystalOperator::new(0, 12).is_err());
        assert!(CrystalOperator::new(1, 1).is_err());
        assert!(CrystalOperator::new(1, 0).is_err());
    }

    #[test]
    fn test_two_by_two_concrete_case_is_undefined() {
        // Signature --++ leaves both plus signs; raising (0,1) to 2 puts a 2
        // above a 2.
        let t = tableau(vec![vec![1, 1], vec![2, 2]]);
        let f1 = CrystalOperator::new(1, 2).unwrap();
        assert_eq!(
            f1.apply(&t),
            OperatorOutcome::Undefined(UndefinedReason::BreaksSemistandard)
        );
    }

    #[test]
    fn test_no_uncancelled_plus() {
        let t = tableau(vec![vec![1, 2], vec![2, 3]]);
        let f1 = CrystalOperator::new(1, 3).unwrap();
        let f2 = CrystalOperator::new(2, 3).unwrap();
        // Reading word 2,3,1,2. For i=1 the signature is -+- and the plus is
        // cancelled.
        assert_eq!(
            f1.apply(&t),
            OperatorOutcome::Undefined(UndefinedReason::NoUncancelledPlus)
        );
        // For i=2 it is +-+; raising the surviving plus at (0,1) puts a 3
        // above a 3.
        assert_eq!(
            f2.apply(&t),
            OperatorOutcome::Undefined(UndefinedReason::BreaksSemistandard)
        );
    }

    #[test]
    fn test_rightmost_plus_is_changed() {
        let t = tableau(vec![vec![1, 1, 2], vec![2, 3, 4]]);
        let f2 = CrystalOperator::new(2, 4).unwrap();
        let outcome = f2.apply(&t);
        assert_eq!(
            outcome,
            OperatorOutcome::Lowered {
                tableau: tableau(vec![vec![1, 1, 3], vec![2, 3, 4]]),
                cell: Cell::new(0, 2),
            }
        );
        // Input untouched.
        assert_eq!(t.to_rows(), vec![vec![1, 1, 2], vec![2, 3, 4]]);
    }

    #[test]
    fn test_label() {
        let f = CrystalOperator::new(7, 12).unwrap();
        assert_eq!(f.label(), "f_7");
        assert_eq!(f.to_string(), "f_7");
        assert_eq!(f.index(), 7);
    }
}
