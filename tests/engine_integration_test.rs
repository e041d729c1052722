// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the search engine running group programs.
//!
//! These tests validate that the engine correctly:
//! - Drives the multi-round fill through every table
//! - Backtracks from axiom failures into the fill
//! - Suspends on request and resumes where it left off
//! - Accepts user predicates between the built-in ones

mod common;

use group_census::context::SearchContext;
use group_census::engine::EngineBuilder;
use group_census::predicates::axioms::{
    AssociativityPredicate, ClosurePredicate, CommutativityPredicate, IdentityPredicate,
    InversePredicate,
};
use group_census::predicates::{
    FailPredicate, FillTablePredicate, NewClassPredicate, SuspendPredicate,
};
use group_census::state::statistics::{Counters, Statistics};
use group_census::table::axioms;
use group_census::{GroupSearch, Predicate, PredicateResult, SearchConfig, SearchEngine};

fn context(n: usize) -> SearchContext {
    SearchContext::new(SearchConfig::new(n).unwrap()).unwrap()
}

/// The census program with the final fail replaced by a suspend.
fn suspending_program() -> SearchEngine {
    EngineBuilder::new()
        .add(Box::new(FillTablePredicate))
        .add(Box::new(ClosurePredicate))
        .add(Box::new(CommutativityPredicate))
        .add(Box::new(IdentityPredicate))
        .add(Box::new(InversePredicate))
        .add(Box::new(AssociativityPredicate))
        .add(Box::new(NewClassPredicate))
        .terminal(Box::new(SuspendPredicate))
        .build()
}

/// Only lets through groups whose identity is element 0.
#[derive(Debug)]
struct IdentityAtZero;

impl Predicate for IdentityAtZero {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        if ctx.state.identity == Some(0) {
            PredicateResult::Success
        } else {
            PredicateResult::Failure
        }
    }

    fn name(&self) -> &str {
        "IdentityAtZero"
    }
}

#[test]
fn test_suspend_at_each_new_class() {
    let mut ctx = context(4);
    let mut engine = Some(suspending_program());
    let mut suspensions = 0;

    while let Some(suspended) = engine.take().and_then(|e| e.search(&mut ctx)) {
        suspensions += 1;
        // The working table is the group that was just classified.
        assert!(axioms::is_group(ctx.table()));
        assert_eq!(ctx.registry.len(), suspensions);
        let (tries, retries) = suspended.statistics();
        assert!(tries > 0 && retries > 0);
        engine = Some(suspended);
    }

    assert_eq!(suspensions, 2);
    assert_eq!(ctx.statistics.get(Counters::Classes), 2);
    assert!(ctx.failure.is_none());
}

#[test]
fn test_first_group_in_fill_order() {
    let mut ctx = context(4);
    let engine = suspending_program().search(&mut ctx);
    assert!(engine.is_some());
    // Row-major fill from 0 upwards reaches the xor table before Z4.
    assert_eq!(ctx.table(), &common::klein());
}

#[test]
fn test_user_predicate_filters_labelings() {
    let mut ctx = context(4);
    let engine = EngineBuilder::new()
        .add(Box::new(FillTablePredicate))
        .add(Box::new(ClosurePredicate))
        .add(Box::new(IdentityPredicate))
        .add(Box::new(InversePredicate))
        .add(Box::new(AssociativityPredicate))
        .add(Box::new(IdentityAtZero))
        .add(Box::new(NewClassPredicate))
        .terminal(Box::new(FailPredicate))
        .build();

    assert!(engine.search(&mut ctx).is_none());
    assert_eq!(ctx.registry.len(), 2);
    // Three labelings of Z4 and one of the Klein group fix 0 as identity.
    assert_eq!(ctx.statistics.get(Counters::DuplicateClasses), 2);
}

#[test]
fn test_counting_predicate_in_program() {
    let mut ctx = context(3);
    let engine = EngineBuilder::new()
        .add(Box::new(FillTablePredicate))
        .add(Statistics::counting_predicate(Counters::CompletedTables, None))
        .add(Box::new(IdentityPredicate))
        .add(Statistics::counting_predicate(
            Counters::Classes,
            Some(|ctx| ctx.state.identity == Some(0)),
        ))
        .terminal(Box::new(FailPredicate))
        .build();

    assert!(engine.search(&mut ctx).is_none());
    // Abelian pruning on order 3 leaves six free cells.
    assert_eq!(ctx.statistics.get(Counters::CompletedTables), 729);
    // Every table with identity 0 is fixed in row 0 and column 0, leaving
    // the 3 free cells (1,1), (1,2), (2,2).
    assert_eq!(ctx.statistics.get(Counters::Classes), 27);
}

#[test]
fn test_program_matches_driver() {
    let config = SearchConfig::new(3).unwrap().with_report_tables(false);
    let mut ctx = SearchContext::new(config).unwrap();
    assert!(GroupSearch::program(&config).search(&mut ctx).is_none());

    let census = GroupSearch::new(config).unwrap().run().unwrap();
    assert_eq!(ctx.statistics, census.statistics);
    assert_eq!(ctx.registry.len() as u64, census.count());
}
