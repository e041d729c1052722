// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! FillTablePredicate - Fills the working table one cell at a time.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::table::axioms;

/// FillTablePredicate enumerates every value for every cell of the table.
///
/// Runs for `n²` rounds; round `k` fills cell `(k / n, k % n)`, so cells are
/// visited in row-major order. Round `n²` is the terminal state: the table
/// is complete and the predicate succeeds, handing over to the axiom checks.
///
/// # Choices
///
/// Each cell has `n` choices; choice `v` writes the value `v`. Backtracking
/// needs no undo because the next retry overwrites the same cell.
///
/// # Pruning
///
/// - Abelian pruning: for a cell strictly below the diagonal (`col < row`)
///   only the value already at `(col, row)` is accepted; all other choices
///   fail without descending.
/// - Eager pruning: after writing, the filled prefix must still pass
///   [`axioms::partial_fill_consistent`].
#[derive(Debug)]
pub struct FillTablePredicate;

impl Predicate for FillTablePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        if round == ctx.config.cells() {
            PredicateResult::Success
        } else {
            PredicateResult::Choices(ctx.order())
        }
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        let n = ctx.order();
        debug_assert!(choice < n, "choice {} out of range for order {}", choice, n);
        let (row, col) = (round / n, round % n);

        if ctx.config.abelian_pruning() && col < row && ctx.table().get(col, row) != choice {
            return PredicateResult::Failure;
        }

        ctx.state.table.set_cell(round, choice);

        if ctx.config.eager_pruning() && !axioms::partial_fill_consistent(ctx.table(), round + 1) {
            return PredicateResult::Failure;
        }

        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "FillTable"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;

    fn context(config: SearchConfig) -> SearchContext {
        SearchContext::new(config).unwrap()
    }

    #[test]
    fn test_try_pred_offers_every_value() {
        let mut ctx = context(SearchConfig::new(3).unwrap());
        let mut pred = FillTablePredicate;
        for round in 0..9 {
            assert_eq!(pred.try_pred(&mut ctx, round), PredicateResult::Choices(3));
        }
        assert_eq!(pred.try_pred(&mut ctx, 9), PredicateResult::Success);
    }

    #[test]
    fn test_retry_writes_row_major_cell() {
        let mut ctx = context(SearchConfig::new(3).unwrap());
        let mut pred = FillTablePredicate;
        assert_eq!(
            pred.retry_pred(&mut ctx, 5, 2),
            PredicateResult::SuccessSamePredicate
        );
        assert_eq!(ctx.table().get(1, 2), 2);
    }

    #[test]
    fn test_abelian_pruning_forces_lower_triangle() {
        let mut ctx = context(SearchConfig::new(3).unwrap());
        let mut pred = FillTablePredicate;
        ctx.state.table.set(0, 1, 2);

        // Cell (1, 0) must mirror (0, 1).
        assert_eq!(pred.retry_pred(&mut ctx, 3, 0), PredicateResult::Failure);
        assert_eq!(pred.retry_pred(&mut ctx, 3, 1), PredicateResult::Failure);
        assert_eq!(
            pred.retry_pred(&mut ctx, 3, 2),
            PredicateResult::SuccessSamePredicate
        );
        // Upper triangle and diagonal are free.
        assert_eq!(
            pred.retry_pred(&mut ctx, 4, 0),
            PredicateResult::SuccessSamePredicate
        );
    }

    #[test]
    fn test_no_abelian_pruning_for_composite_order() {
        let mut ctx = context(SearchConfig::new(6).unwrap());
        let mut pred = FillTablePredicate;
        ctx.state.table.set(0, 1, 2);
        assert_eq!(
            pred.retry_pred(&mut ctx, 6, 5),
            PredicateResult::SuccessSamePredicate
        );
    }

    #[test]
    fn test_eager_pruning_rejects_row_repeat() {
        let mut ctx = context(SearchConfig::new(3).unwrap().with_eager_pruning(true));
        let mut pred = FillTablePredicate;
        assert_eq!(
            pred.retry_pred(&mut ctx, 0, 1),
            PredicateResult::SuccessSamePredicate
        );
        assert_eq!(pred.retry_pred(&mut ctx, 1, 1), PredicateResult::Failure);
    }
}
