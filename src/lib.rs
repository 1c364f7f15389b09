// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Semistandard Young tableaux and their crystal graphs.
//!
//! The crate enumerates every semistandard tableau of a rectangular shape
//! with a given content (weight), applies the Kashiwara lowering operators
//! `f_i` to them, and links the results into a crystal graph.
//!
//! # Architecture
//!
//! ## Enumeration
//!
//! Tableaux are produced by a backtracking search engine that runs a
//! program of predicates:
//! - `FillCellPredicate` fills one cell per round, in row-major order, with
//!   one choice per distinct admissible value
//! - a terminal predicate either suspends (yielding one tableau to the
//!   caller) or fails (exploring everything, e.g. for counting)
//!
//! All changes to the working grid are recorded on a trail, so backtracking
//! restores the previous state without copying the grid.
//!
//! ## Operators
//!
//! `CrystalOperator` computes the reading word and signature of a tableau,
//! cancels brackets, raises the rightmost surviving `i` to `i + 1` and
//! re-checks the result.
//!
//! ## Graphs
//!
//! `CrystalGraphBuilder` enumerates the nodes for one or more weights, then
//! applies every operator in its range to every node.
//!
//! # Example
//!
//! ```
//! use crystal_search::crystal::OperatorRange;
//! use crystal_search::generator::generate;
//! use crystal_search::graph::CrystalGraphBuilder;
//! use crystal_search::tableau::{Shape, Weight};
//!
//! let shape = Shape::new(2, 2)?;
//! let weight = Weight::new(vec![2, 2])?;
//! let tableaux = generate(&weight, shape);
//! assert_eq!(tableaux[0].encode(), "[[1,1],[2,2]]");
//!
//! let graph = CrystalGraphBuilder::new(shape, OperatorRange::full(2)?).build(&weight)?;
//! assert_eq!(graph.nodes().len(), 1);
//! # Ok::<(), crystal_search::CrystalError>(())
//! ```

pub mod config;
pub mod context;
pub mod crystal;
pub mod engine;
pub mod error;
pub mod generator;
pub mod graph;
pub mod predicates;
pub mod state;
pub mod tableau;
pub mod trail;

// Re-export commonly used types
pub use context::SearchContext;
pub use crystal::{CrystalOperator, OperatorOutcome, OperatorRange};
pub use engine::{EngineBuilder, Predicate, PredicateResult, SearchEngine};
pub use error::{CrystalError, Result};
pub use graph::{CrystalGraph, CrystalGraphBuilder};
pub use tableau::{Shape, Tableau, Weight};
pub use trail::Trail;
