// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (for predicates that execute multiple times)
//! - Choice mode state (whether we're trying alternatives)
//! - Current choice index (when in choice mode)
//!
//! The engine follows a WAM-like execution model:
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to previous stack entry
//! 6. If Suspend: pause and return control to caller
//!
//! A predicate that succeeded without offering choices has no alternatives,
//! so backtracking into it continues straight past it.
//!
//! # Example
//!
//! ```
//! use group_census::config::SearchConfig;
//! use group_census::context::SearchContext;
//! use group_census::engine::EngineBuilder;
//! use group_census::predicates::{FailPredicate, FillTablePredicate, NewClassPredicate};
//! use group_census::predicates::axioms::{AssociativityPredicate, IdentityPredicate, InversePredicate};
//!
//! let mut ctx = SearchContext::new(SearchConfig::new(3).unwrap()).unwrap();
//! let engine = EngineBuilder::new()
//!     .add(Box::new(FillTablePredicate))
//!     .add(Box::new(IdentityPredicate))
//!     .add(Box::new(InversePredicate))
//!     .add(Box::new(AssociativityPredicate))
//!     .add(Box::new(NewClassPredicate))
//!     .terminal(Box::new(FailPredicate))
//!     .build();
//!
//! // FailPredicate forces every table to be visited; the engine is consumed.
//! assert!(engine.search(&mut ctx).is_none());
//! assert_eq!(ctx.registry.len(), 1);
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;

/// Initial capacity of the predicate stack. The stack grows by one entry per
/// filled cell, so small orders never reallocate.
const INITIAL_STACK_CAPACITY: usize = 64;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Current choice being tried (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,
}

impl StackEntry {
    fn new(predicate_index: usize, round: usize) -> Self {
        Self {
            predicate_index,
            round,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
        }
    }

    /// Mark a deterministic success: on backtrack there is nothing left to try.
    fn exhaust(&mut self) {
        self.in_choice_mode = true;
        self.current_choice = 0;
        self.num_choices = 0;
    }
}

/// Search engine that coordinates predicate execution and backtracking.
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Whether the last call to search() ended on a Suspend.
    suspended: bool,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls (backtracks).
    retry_count: u64,
}

impl std::fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("predicates", &self.predicates.iter().map(|p| p.name()).collect::<Vec<_>>())
            .field("depth", &self.stack.len())
            .field("suspended", &self.suspended)
            .finish()
    }
}

impl SearchEngine {
    /// Create a new search engine with the given predicates.
    ///
    /// Predicates will be tried in the order given. Prefer [`EngineBuilder`],
    /// which guarantees the sequence ends with a terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::with_capacity(INITIAL_STACK_CAPACITY),
            suspended: false,
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search until the next suspension or until it is exhausted.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if suspended - call search() again to resume
    /// - `None` if exhausted (backtracked past first predicate) - search is complete
    ///
    /// Solutions are communicated through side effects on `ctx`, not by the
    /// return value: programs never "complete", they either fail or suspend.
    /// Resuming treats the suspending predicate as failed and backtracks from it.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence is invalid (reaches the end without FAIL or SUSPEND).
    pub fn search(mut self, ctx: &mut SearchContext) -> Option<Self> {
        if self.predicates.is_empty() {
            return None; // Empty is exhausted
        }

        if self.suspended {
            self.suspended = false;
            self.stack.pop();
        } else {
            self.stack.clear();
            self.try_count = 0;
            self.retry_count = 0;
            self.stack.push(StackEntry::new(0, 0));
        }

        // Main execution loop
        loop {
            // Check if we've backtracked past the first predicate
            let Some(entry) = self.stack.last_mut() else {
                log::debug!(
                    "search exhausted after {} tries, {} retries",
                    self.try_count,
                    self.retry_count
                );
                return None; // Search exhausted (all choices failed)
            };

            if !entry.in_choice_mode {
                // Call mode: try_pred
                self.try_count += 1;
                let result = self.predicates[entry.predicate_index].try_pred(ctx, entry.round);

                match result {
                    PredicateResult::Success => {
                        entry.exhaust();
                        self.push_next_predicate();
                    }
                    PredicateResult::SuccessSamePredicate => {
                        entry.exhaust();
                        self.push_same_predicate();
                    }
                    PredicateResult::Failure => {
                        self.stack.pop();
                    }
                    PredicateResult::Choices(n) => {
                        entry.in_choice_mode = true;
                        entry.current_choice = 0;
                        entry.num_choices = n;
                    }
                    PredicateResult::Suspend => {
                        // Pause execution, return engine for resumption
                        self.suspended = true;
                        return Some(self);
                    }
                }
            } else {
                // Choice mode: retry_pred
                if entry.current_choice >= entry.num_choices {
                    // Backtrack
                    self.stack.pop();
                    continue;
                }

                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;
                let result =
                    self.predicates[entry.predicate_index].retry_pred(ctx, entry.round, choice);

                match result {
                    PredicateResult::Success => self.push_next_predicate(),
                    PredicateResult::SuccessSamePredicate => self.push_same_predicate(),
                    PredicateResult::Failure => {
                        // Try next choice (loop continues)
                    }
                    PredicateResult::Choices(_) | PredicateResult::Suspend => {
                        // Invalid: retry_pred cannot return Choices or Suspend
                        panic!("retry_pred returned invalid result: {:?}", result);
                    }
                }
            }
        }
    }

    /// Push a new stack entry for the next predicate in sequence.
    ///
    /// Panics if we've reached the end of the predicate sequence, as this indicates
    /// an invalid program (all valid programs must end with FAIL or SUSPEND).
    fn push_next_predicate(&mut self) {
        let Some(current) = self.stack.last() else {
            unreachable!("push_next_predicate with empty stack");
        };
        let next_index = current.predicate_index + 1;

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All programs must terminate with a FAIL or SUSPEND predicate."
            );
        }

        self.stack.push(StackEntry::new(next_index, 0));
    }

    /// Push a new stack entry for the same predicate with incremented round.
    fn push_same_predicate(&mut self) {
        let Some(current) = self.stack.last() else {
            unreachable!("push_same_predicate with empty stack");
        };
        let entry = StackEntry::new(current.predicate_index, current.round + 1);
        self.stack.push(entry);
    }

    /// Get statistics about the search.
    ///
    /// Returns (try_count, retry_count) showing how many times predicates
    /// were tried and retried.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Builds a [`SearchEngine`] whose program is guaranteed to end with a
/// [`TerminalPredicate`].
#[derive(Debug, Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate to the program.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Append a predicate only when `condition` holds.
    pub fn add_if(self, condition: bool, predicate: Box<dyn Predicate>) -> Self {
        if condition {
            self.add(predicate)
        } else {
            self
        }
    }

    /// End the program with a terminal predicate.
    pub fn terminal<T: TerminalPredicate + 'static>(mut self, predicate: Box<T>) -> TerminatedBuilder {
        self.predicates.push(predicate);
        TerminatedBuilder {
            predicates: self.predicates,
        }
    }
}

/// An [`EngineBuilder`] whose program has been terminated.
#[derive(Debug)]
pub struct TerminatedBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl TerminatedBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}
