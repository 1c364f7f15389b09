// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context for one tableau enumeration.
//!
//! The SearchContext combines:
//! - the fixed parameters of the search (shape and alphabet)
//! - the working grid and the multiset of values not yet placed
//! - the trail recording every change to that working state
//! - counters incremented by counting predicates
//!
//! Each enumeration owns its own context, so independent enumerations never
//! share mutable state. Completed fillings leave the context only as
//! snapshots (fresh `Tableau` copies).

use crate::state::Statistics;
use crate::tableau::{Shape, Tableau, Weight};
use crate::trail::{Slot, Trail};

/// Mutable search state, tracked on the trail.
#[derive(Debug)]
pub struct FillingState {
    /// Row-major working grid; 0 marks an empty cell.
    cells: Vec<u32>,
    /// Remaining count of each value; index `v - 1` holds value `v`.
    remaining: Vec<u32>,
}

impl FillingState {
    fn new(shape: Shape, weight: &Weight) -> Self {
        Self {
            cells: vec![0; shape.cell_count()],
            remaining: weight.counts().to_vec(),
        }
    }

    /// Value at a row-major position, 0 if empty.
    pub fn cell(&self, position: usize) -> u32 {
        self.cells[position]
    }

    /// Number of copies of `value` not yet placed.
    pub fn remaining(&self, value: u32) -> u32 {
        self.remaining[(value - 1) as usize]
    }

    fn restore(&mut self, slot: Slot, old_value: u32) {
        match slot {
            Slot::Cell(position) => self.cells[position] = old_value,
            Slot::Remaining(value) => self.remaining[(value - 1) as usize] = old_value,
        }
    }
}

/// Search context combining fixed parameters, trailed state and counters.
#[derive(Debug)]
pub struct SearchContext {
    shape: Shape,
    alphabet_size: u32,
    /// Trail for backtracking
    pub trail: Trail,
    /// Working grid and remaining values
    pub state: FillingState,
    pub statistics: Statistics,
}

impl SearchContext {
    /// Create a context with an empty grid and every entry of `weight` unplaced.
    pub fn new(shape: Shape, weight: &Weight) -> Self {
        Self {
            shape,
            alphabet_size: weight.alphabet_size(),
            trail: Trail::with_capacity(2 * shape.cell_count()),
            state: FillingState::new(shape, weight),
            statistics: Statistics::new(),
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn alphabet_size(&self) -> u32 {
        self.alphabet_size
    }

    /// Undo every placement recorded after `checkpoint`.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        let state = &mut self.state;
        self.trail
            .rewind_to(checkpoint, |slot, old_value| state.restore(slot, old_value));
    }

    /// Whether `value` may go at `position` given the cells already filled.
    ///
    /// Cells are filled in row-major order, so only the left neighbour
    /// (weak row increase) and the upper neighbour (strict column increase)
    /// constrain the choice.
    pub fn admits(&self, position: usize, value: u32) -> bool {
        let cell = self.shape.cell_at(position);
        if cell.col > 0 && value < self.state.cell(position - 1) {
            return false;
        }
        if cell.row > 0 && value <= self.state.cell(position - self.shape.cols()) {
            return false;
        }
        true
    }

    /// Distinct values that can be placed at `position`, in increasing order.
    ///
    /// Each value appears once however many copies remain, so equal entries
    /// never yield the same filling twice.
    pub fn candidates(&self, position: usize) -> Vec<u32> {
        (1..=self.alphabet_size)
            .filter(|&value| self.state.remaining(value) > 0)
            .filter(|&value| self.admits(position, value))
            .collect()
    }

    /// Place `value` at `position`, recording the change on the trail.
    ///
    /// # Panics
    ///
    /// Panics if no copy of `value` remains.
    pub fn place(&mut self, position: usize, value: u32) {
        let remaining = self.state.remaining(value);
        assert!(remaining > 0, "no copy of {} left to place", value);

        self.trail
            .record_change(Slot::Cell(position), self.state.cells[position]);
        self.state.cells[position] = value;

        self.trail.record_change(Slot::Remaining(value), remaining);
        self.state.remaining[(value - 1) as usize] = remaining - 1;
    }

    /// Whether every cell holds a value.
    pub fn is_complete(&self) -> bool {
        self.state.cells.iter().all(|&v| v != 0)
    }

    /// Copy the completed working grid out as a tableau.
    pub fn snapshot(&self) -> Tableau {
        debug_assert!(self.is_complete(), "snapshot of a partial filling");
        Tableau::from_cells_unchecked(self.shape, self.state.cells.clone())
    }
}
