// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the search context and in each crystal graph.
//! They can be incremented by a counting predicate placed in a search
//! program, or directly by the graph builder.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

#[derive(Debug, EnumCountMacro, EnumIter, Display, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counters {
    /// Completed fillings.
    Tableaux,
    /// Operator applications that produced a tableau.
    Lowered,
    /// Applications left with no uncancelled `+`.
    NoUncancelledPlus,
    /// Applications whose single-cell change broke the semistandard rules.
    BreaksSemistandard,
    /// Lowered results that matched no node.
    UnresolvedTargets,
    Edges,
}

const COUNT: usize = Counters::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// A predicate that will increment the given counter, whenever a condition holds (or always).
    pub fn counting_predicate(
        counter: Counters,
        filter: Option<fn(&SearchContext) -> bool>,
    ) -> Box<dyn Predicate> {
        Box::new(CountingPredicate {
            filter: filter.unwrap_or(|_ctxt| true),
            counter,
        })
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// All counters with their values, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Counters, u64)> + '_ {
        Counters::iter().map(move |counter| (counter, self.get(counter)))
    }
}

#[derive(Debug)]
struct CountingPredicate {
    filter: fn(&SearchContext) -> bool,
    counter: Counters,
}

impl Predicate for CountingPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        if (self.filter)(ctx) {
            ctx.statistics.increment(self.counter);
        }
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Counting"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_and_iter() {
        let mut stats = Statistics::new();
        stats.increment(Counters::Edges);
        stats.increment(Counters::Edges);
        stats.increment(Counters::Lowered);

        assert_eq!(stats.get(Counters::Edges), 2);
        assert_eq!(stats.get(Counters::Tableaux), 0);

        let listed: Vec<(String, u64)> = stats
            .iter()
            .map(|(counter, value)| (counter.to_string(), value))
            .collect();
        assert_eq!(listed.len(), Counters::COUNT);
        assert_eq!(listed[0], ("tableaux".to_string(), 0));
        assert_eq!(listed[1], ("lowered".to_string(), 1));
        assert_eq!(listed[5], ("edges".to_string(), 2));
    }
}
