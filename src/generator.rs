// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of semistandard tableaux with a fixed shape and weight.
//!
//! The enumeration is a search program run by the engine:
//!
//! ```text
//! FillCellPredicate   one round per cell, one choice per distinct admissible value
//! SuspendPredicate    hand each completed filling to the caller
//! ```
//!
//! `Tableaux` resumes the engine on every `next()`, so fillings are produced
//! lazily. `count` swaps the suspension for a counting predicate followed by
//! `FailPredicate`, which walks the whole space without copying any grid.
//!
//! A weight whose total differs from the number of cells admits no filling;
//! the enumeration is then empty, not an error.

use crate::context::SearchContext;
use crate::engine::{EngineBuilder, SearchEngine};
use crate::predicates::{FailPredicate, FillCellPredicate, SuspendPredicate};
use crate::state::{Counters, Statistics};
use crate::tableau::{Shape, Tableau, Weight};
use log::debug;
use std::iter::FusedIterator;

/// Every semistandard tableau of `shape` with content `weight`.
///
/// Each valid filling appears exactly once.
pub fn generate(weight: &Weight, shape: Shape) -> Vec<Tableau> {
    let tableaux: Vec<Tableau> = Tableaux::new(weight, shape).collect();
    debug!(
        "generated {} tableaux of shape {} and weight {}",
        tableaux.len(),
        shape,
        weight
    );
    tableaux
}

/// Number of semistandard tableaux of `shape` with content `weight`.
pub fn count(weight: &Weight, shape: Shape) -> u64 {
    if !is_feasible(weight, shape) {
        return 0;
    }

    let mut ctx = SearchContext::new(shape, weight);
    let engine = EngineBuilder::new()
        .add(Box::new(FillCellPredicate::new()))
        .add(Statistics::counting_predicate(Counters::Tableaux, None))
        .terminal(Box::new(FailPredicate))
        .build();

    let suspended = engine.search(&mut ctx);
    debug_assert!(suspended.is_none(), "a FAIL-terminated search never suspends");
    ctx.statistics.get(Counters::Tableaux)
}

fn is_feasible(weight: &Weight, shape: Shape) -> bool {
    let feasible = weight.total() == shape.cell_count();
    if !feasible {
        debug!(
            "weight {} places {} entries but shape {} has {} cells",
            weight,
            weight.total(),
            shape,
            shape.cell_count()
        );
    }
    feasible
}

/// Lazy iterator over the semistandard tableaux of a shape and weight.
///
/// # Example
///
/// ```
/// use crystal_search::generator::Tableaux;
/// use crystal_search::tableau::{Shape, Weight};
///
/// let weight = Weight::new(vec![1, 1, 1]).unwrap();
/// let rows: Vec<String> = Tableaux::new(&weight, Shape::new(1, 3).unwrap())
///     .map(|t| t.encode())
///     .collect();
/// assert_eq!(rows, vec!["[[1,2,3]]"]);
/// ```
pub struct Tableaux {
    /// `None` once the search is exhausted.
    engine: Option<SearchEngine>,
    ctx: SearchContext,
}

impl Tableaux {
    pub fn new(weight: &Weight, shape: Shape) -> Self {
        let engine = is_feasible(weight, shape).then(|| {
            EngineBuilder::new()
                .add(Box::new(FillCellPredicate::new()))
                .terminal(Box::new(SuspendPredicate))
                .build()
        });
        Self {
            engine,
            ctx: SearchContext::new(shape, weight),
        }
    }

    /// Fillings produced so far.
    pub fn produced(&self) -> u64 {
        self.ctx.statistics.get(Counters::Tableaux)
    }

    /// Engine (try_count, retry_count), or `None` once exhausted.
    pub fn engine_statistics(&self) -> Option<(u64, u64)> {
        self.engine.as_ref().map(SearchEngine::statistics)
    }
}

impl Iterator for Tableaux {
    type Item = Tableau;

    fn next(&mut self) -> Option<Tableau> {
        let engine = self.engine.take()?;
        self.engine = engine.search(&mut self.ctx);
        if self.engine.is_none() {
            return None;
        }
        self.ctx.statistics.increment(Counters::Tableaux);
        Some(self.ctx.snapshot())
    }
}

impl FusedIterator for Tableaux {}
