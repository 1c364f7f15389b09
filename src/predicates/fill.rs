// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! FillCellPredicate - fills the grid one cell at a time in row-major order.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};

/// FillCellPredicate places one value per round.
///
/// Round `r` fills the cell at row-major position `r`. On the round after
/// the last cell the grid is complete and the predicate succeeds, handing
/// the filling to the next predicate in the program.
///
/// # Choices
///
/// The choices for a round are the distinct values still available that
/// respect the row rule (at least the left neighbour) and the column rule
/// (greater than the upper neighbour), in increasing order. Trying each
/// distinct value once per cell is what keeps equal entries from producing
/// the same tableau along different branches.
///
/// The candidate list of a round is computed in `try_pred` and consulted by
/// `retry_pred`. Deeper rounds keep their own lists, so backtracking into a
/// round finds its list intact.
#[derive(Debug, Default)]
pub struct FillCellPredicate {
    candidates: Vec<Vec<u32>>,
}

impl FillCellPredicate {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Predicate for FillCellPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        if round == ctx.shape().cell_count() {
            return PredicateResult::Success;
        }

        let candidates = ctx.candidates(round);
        if candidates.is_empty() {
            return PredicateResult::Failure;
        }

        if self.candidates.len() <= round {
            self.candidates.resize_with(round + 1, Vec::new);
        }
        let count = candidates.len();
        self.candidates[round] = candidates;
        PredicateResult::Choices(count)
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        let value = self.candidates[round][choice];
        ctx.place(round, value);
        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "FillCell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tableau::{Shape, Weight};

    #[test]
    fn test_try_pred_offers_distinct_values() {
        let weight = Weight::new(vec![2, 1, 1]).unwrap();
        let mut ctx = SearchContext::new(Shape::new(2, 2).unwrap(), &weight);
        let mut pred = FillCellPredicate::new();

        // Two 1s available, but 1 is offered once.
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Choices(3));
    }

    #[test]
    fn test_retry_pred_places_value() {
        let weight = Weight::new(vec![2, 2]).unwrap();
        let mut ctx = SearchContext::new(Shape::new(2, 2).unwrap(), &weight);
        let mut pred = FillCellPredicate::new();

        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Choices(2));
        assert_eq!(pred.retry_pred(&mut ctx, 0, 1), PredicateResult::SuccessSamePredicate);
        assert_eq!(ctx.state.cell(0), 2);
        assert_eq!(ctx.state.remaining(2), 1);

        // Only 2 fits to the right of a 2.
        assert_eq!(pred.try_pred(&mut ctx, 1), PredicateResult::Choices(1));
        pred.retry_pred(&mut ctx, 1, 0);

        // Below a 2 nothing is larger: dead end.
        assert_eq!(pred.try_pred(&mut ctx, 2), PredicateResult::Failure);
    }

    #[test]
    fn test_final_round_succeeds() {
        let weight = Weight::new(vec![1]).unwrap();
        let mut ctx = SearchContext::new(Shape::new(1, 1).unwrap(), &weight);
        let mut pred = FillCellPredicate::new();

        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Choices(1));
        pred.retry_pred(&mut ctx, 0, 0);
        assert_eq!(pred.try_pred(&mut ctx, 1), PredicateResult::Success);
    }
}
