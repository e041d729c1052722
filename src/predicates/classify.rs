// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! NewClassPredicate - Deduplicates groups up to isomorphism.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::statistics::Counters;
use crate::symmetry::canonical_form;
use crate::table::Table;

/// NewClassPredicate succeeds only for the first group of each isomorphism class.
///
/// Runs after the axiom predicates, so the working table is a group and
/// `ctx.state.identity` holds its identity. The table's canonical form is
/// looked up in the registry:
/// - already present: the class was reported before, fail (a duplicate);
/// - absent: store the form, keep a copy of the table in its original
///   labeling as the class representative, bump the class counter, succeed.
///
/// Allocation failure is fatal: the error is stored in the context and the
/// predicate suspends the engine.
#[derive(Debug)]
pub struct NewClassPredicate;

impl Predicate for NewClassPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let Some(identity) = ctx.state.identity else {
            return PredicateResult::Failure;
        };

        let form = match canonical_form(ctx.table(), identity) {
            Ok(form) => form,
            Err(err) => {
                ctx.fail_with(err);
                return PredicateResult::Suspend;
            }
        };

        if ctx.registry.contains(&form) {
            log::trace!("duplicate class:\n{}", ctx.table());
            ctx.statistics.increment_counter(Counters::DuplicateClasses);
            return PredicateResult::Failure;
        }

        if let Err(err) = ctx.registry.insert(form) {
            ctx.fail_with(err);
            return PredicateResult::Suspend;
        }
        if let Err(err) = keep_representative(ctx) {
            ctx.fail_with(err);
            return PredicateResult::Suspend;
        }

        ctx.statistics.increment_counter(Counters::Classes);
        log::debug!(
            "class #{} found (identity {})",
            ctx.statistics.get(Counters::Classes),
            identity
        );
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "NewClass"
    }
}

fn keep_representative(ctx: &mut SearchContext) -> crate::error::Result<()> {
    let mut representative = Table::new(ctx.order())?;
    representative.copy_from(ctx.table());
    ctx.state.representatives.try_reserve(1)?;
    ctx.state.representatives.push(representative);
    Ok(())
}
