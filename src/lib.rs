// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Brute-force census of the finite groups of a given order.
//!
//! Every `n × n` table over `{0, .., n-1}` is enumerated, those satisfying
//! the group axioms are kept, and one representative per isomorphism class
//! is reported.
//!
//! # Architecture
//!
//! The search is a program of predicates run by a backtracking engine:
//!
//! 1. **FillTablePredicate**: fills the table cell by cell in row-major order,
//!    trying every value. For prime and prime-square orders, where every group
//!    is abelian, cells below the diagonal must mirror the cell above it.
//! 2. **Axiom predicates**: closure, commutativity (abelian runs), identity,
//!    inverses, then the `O(n³)` associativity check.
//! 3. **NewClassPredicate**: computes the table's canonical form (the
//!    lexicographically smallest relabeling fixing the identity to 0) and
//!    keeps the table only if that form is new to the registry.
//! 4. **ReportPredicate**: writes the new representative to the report sink.
//! 5. **FailPredicate**: forces backtracking into the next table.
//!
//! All run state lives in a [`SearchContext`]: the working table, the
//! registry of canonical forms and the counters. Nothing is global.
//!
//! # Cost
//!
//! The fill visits up to `n^(n²)` tables and canonicalization walks `(n-1)!`
//! relabelings per group found. Orders up to 4 finish quickly by brute
//! force; orders 5 and 6 need eager pruning
//! ([`SearchConfig::with_eager_pruning`]), which applies the cancellation
//! law and associativity to partially filled tables.

pub mod arith;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod predicates;
pub mod registry;
pub mod search;
pub mod state;
pub mod symmetry;
pub mod table;

// Re-export commonly used types
pub use config::SearchConfig;
pub use context::SearchContext;
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use error::GroupSearchError;
pub use search::{Census, GroupSearch};
pub use table::Table;
