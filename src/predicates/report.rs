// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ReportPredicate - Writes each new class representative to the report sink.

use std::io::{self, Write};

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::statistics::Counters;
use crate::table::Table;

/// Write one discovered group:
///
/// ```text
/// Valid group #<sequence>:
/// <n lines of n space-separated integers>
///
/// ```
pub fn write_group(writer: &mut dyn Write, sequence: u64, table: &Table) -> io::Result<()> {
    writeln!(writer, "Valid group #{}:", sequence)?;
    write!(writer, "{}", table)?;
    writeln!(writer)
}

/// Writes the working table under the current class count.
///
/// Placed right after [`super::NewClassPredicate`], so the table is the
/// representative just recorded, in its original labeling. Does nothing when
/// no sink is attached. A write error is fatal and suspends the engine.
#[derive(Debug)]
pub struct ReportPredicate;

impl Predicate for ReportPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let sequence = ctx.statistics.get(Counters::Classes);
        let Some(writer) = ctx.state.output.as_deref_mut() else {
            return PredicateResult::Success;
        };

        match write_group(writer, sequence, &ctx.state.table) {
            Ok(()) => PredicateResult::Success,
            Err(err) => {
                ctx.fail_with(err);
                PredicateResult::Suspend
            }
        }
    }

    fn name(&self) -> &str {
        "Report"
    }
}
