// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Axiom predicates, run on each complete table.
//!
//! Each predicate is deterministic: it either succeeds, handing the table to
//! the next check, or fails and bumps the matching rejection counter. The
//! program runs them cheapest first: closure, commutativity (abelian runs
//! only), identity, inverses, associativity.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::statistics::Counters;
use crate::table::axioms;

/// Rejects and counts when `holds` is false.
fn check(ctx: &mut SearchContext, holds: bool, counter: Counters) -> PredicateResult {
    if holds {
        PredicateResult::Success
    } else {
        ctx.statistics.increment_counter(counter);
        PredicateResult::Failure
    }
}

/// Every entry is a valid element index.
#[derive(Debug)]
pub struct ClosurePredicate;

impl Predicate for ClosurePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let holds = axioms::is_closed(ctx.table());
        check(ctx, holds, Counters::OutOfRange)
    }

    fn name(&self) -> &str {
        "Closure"
    }
}

/// The table is symmetric. Only part of the program when abelian pruning is on,
/// where the fill already mirrors the upper triangle.
#[derive(Debug)]
pub struct CommutativityPredicate;

impl Predicate for CommutativityPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let holds = axioms::is_commutative(ctx.table());
        check(ctx, holds, Counters::NotCommutative)
    }

    fn name(&self) -> &str {
        "Commutativity"
    }
}

/// Finds the identity and records it in the state for the later predicates.
#[derive(Debug)]
pub struct IdentityPredicate;

impl Predicate for IdentityPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        ctx.state.identity = axioms::find_identity(ctx.table());
        let holds = ctx.state.identity.is_some();
        check(ctx, holds, Counters::NoIdentity)
    }

    fn name(&self) -> &str {
        "Identity"
    }
}

/// Every element has a two-sided inverse with respect to the recorded identity.
#[derive(Debug)]
pub struct InversePredicate;

impl Predicate for InversePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        // IdentityPredicate runs first and fails the branch when there is none.
        let Some(identity) = ctx.state.identity else {
            return PredicateResult::Failure;
        };
        let holds = axioms::has_inverses(ctx.table(), identity);
        check(ctx, holds, Counters::MissingInverse)
    }

    fn name(&self) -> &str {
        "Inverse"
    }
}

/// `(a · b) · c == a · (b · c)` for every triple.
#[derive(Debug)]
pub struct AssociativityPredicate;

impl Predicate for AssociativityPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let holds = axioms::is_associative(ctx.table());
        check(ctx, holds, Counters::NotAssociative)
    }

    fn name(&self) -> &str {
        "Associativity"
    }
}
