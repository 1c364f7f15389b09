// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! This module contains the predicates used by the tableau search.
//!
//! # Organization
//!
//! - `fill`: FillCellPredicate, one round per grid cell
//! - Built-in terminal predicates: `FailPredicate`, `SuspendPredicate`
//!
//! The counting predicate lives with the counters in `state::statistics`.

pub mod fill;

pub use fill::FillCellPredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// Always fails, forcing the engine to backtrack into every remaining
/// alternative. A program ending in `FailPredicate` explores the whole
/// search space and is useful when the predicates before it record results
/// as side effects (for example a counting predicate).
///
/// # Example
///
/// ```
/// use crystal_search::context::SearchContext;
/// use crystal_search::engine::EngineBuilder;
/// use crystal_search::predicates::{FailPredicate, FillCellPredicate};
/// use crystal_search::state::{Counters, Statistics};
/// use crystal_search::tableau::{Shape, Weight};
///
/// let weight = Weight::new(vec![1, 1, 1]).unwrap();
/// let mut ctx = SearchContext::new(Shape::new(1, 3).unwrap(), &weight);
/// let engine = EngineBuilder::new()
///     .add(Box::new(FillCellPredicate::new()))
///     .add(Statistics::counting_predicate(Counters::Tableaux, None))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// assert!(engine.search(&mut ctx).is_none());
/// assert_eq!(ctx.statistics.get(Counters::Tableaux), 1);
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

impl TerminalPredicate for FailPredicate {}

/// Predicate that suspends execution.
///
/// The engine returns to its caller with the search state intact; the
/// caller inspects the context and resumes the engine to continue.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
