// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! This module contains the predicates used in the search algorithm.
//! Each predicate represents a choice point or a check in the search.
//!
//! # Organization
//!
//! - `fill`: FillTablePredicate, the cell-by-cell table generator
//! - `axioms`: closure, commutativity, identity, inverse and associativity checks
//! - `classify`: NewClassPredicate, deduplication up to isomorphism
//! - `report`: ReportPredicate, writes each new class to the sink
//! - Built-in predicates: `FailPredicate`, `SuspendPredicate`

pub mod axioms;
pub mod classify;
pub mod fill;
pub mod report;

// Re-export main predicates for convenience
pub use classify::NewClassPredicate;
pub use fill::FillTablePredicate;
pub use report::ReportPredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. Ending a program with
/// it makes the engine visit every table, which is how the census runs.
///
/// # Example
///
/// ```
/// use group_census::config::SearchConfig;
/// use group_census::context::SearchContext;
/// use group_census::engine::EngineBuilder;
/// use group_census::predicates::{FailPredicate, FillTablePredicate};
///
/// let mut ctx = SearchContext::new(SearchConfig::new(2).unwrap()).unwrap();
/// let engine = EngineBuilder::new()
///     .add(Box::new(FillTablePredicate))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// // Engine will exhaust all fills then fail
/// let result = engine.search(&mut ctx);
/// assert!(result.is_none()); // Failed - engine consumed
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

/// FailPredicate is a terminal predicate (like Prolog's fail.).
impl TerminalPredicate for FailPredicate {}

/// Built-in suspend predicate.
///
/// Always suspends, handing control back to the caller with the solution
/// in the context. Resuming the engine backtracks from here.
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
