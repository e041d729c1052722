// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The group census: program construction and the run driver.

use std::io::Write;

use crate::config::SearchConfig;
use crate::context::SearchContext;
use crate::engine::{EngineBuilder, SearchEngine};
use crate::error::Result;
use crate::predicates::axioms::{
    AssociativityPredicate, ClosurePredicate, CommutativityPredicate, IdentityPredicate,
    InversePredicate,
};
use crate::predicates::{FailPredicate, FillTablePredicate, NewClassPredicate, ReportPredicate};
use crate::state::statistics::{Counters, Statistics};
use crate::symmetry::CanonicalForm;
use crate::table::Table;

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct Census {
    /// The configuration the run used.
    pub config: SearchConfig,
    /// First table found in each class, original labeling, discovery order.
    pub representatives: Vec<Table>,
    /// Canonical form of each class, same order as `representatives`.
    pub canonical_forms: Vec<CanonicalForm>,
    /// Run counters.
    pub statistics: Statistics,
}

impl Census {
    /// Number of distinct isomorphism classes found.
    pub fn count(&self) -> u64 {
        self.statistics.get(Counters::Classes)
    }
}

/// One run of the search for all groups of a given order.
///
/// # Example
///
/// ```
/// use group_census::{GroupSearch, SearchConfig};
///
/// let census = GroupSearch::new(SearchConfig::new(4).unwrap()).unwrap().run().unwrap();
/// assert_eq!(census.count(), 2); // cyclic and Klein four
/// ```
#[derive(Debug)]
pub struct GroupSearch {
    ctx: SearchContext,
}

impl GroupSearch {
    pub fn new(config: SearchConfig) -> Result<Self> {
        Ok(Self {
            ctx: SearchContext::new(config)?,
        })
    }

    /// Attach a sink that receives every new class as it is found.
    pub fn with_output(mut self, output: Box<dyn Write>) -> Self {
        self.ctx.state.output = Some(output);
        self
    }

    /// The predicate program for a configuration.
    ///
    /// Fill the table, then on each complete table: count it, check closure,
    /// symmetry (abelian runs only), identity, inverses and associativity,
    /// deduplicate, report, and fail to move on to the next table.
    pub fn program(config: &SearchConfig) -> SearchEngine {
        EngineBuilder::new()
            .add(Box::new(FillTablePredicate))
            .add(Statistics::counting_predicate(Counters::CompletedTables, None))
            .add(Box::new(ClosurePredicate))
            .add_if(config.abelian_pruning(), Box::new(CommutativityPredicate))
            .add(Box::new(IdentityPredicate))
            .add(Box::new(InversePredicate))
            .add(Box::new(AssociativityPredicate))
            .add(Box::new(NewClassPredicate))
            .add_if(config.report_tables(), Box::new(ReportPredicate))
            .terminal(Box::new(FailPredicate))
            .build()
    }

    /// Enumerate every table and return the census.
    pub fn run(mut self) -> Result<Census> {
        let config = self.ctx.config;
        log::info!(
            "searching groups of order {} (abelian pruning: {}, eager pruning: {})",
            config.order(),
            config.abelian_pruning(),
            config.eager_pruning()
        );
        if config.abelian_pruning() {
            log::info!(
                "{} is prime or a prime square, so every group of this order is abelian",
                config.order()
            );
        }

        // The program ends in FailPredicate, so it only suspends on a fatal
        // error. A suspension without one is resumed.
        let mut engine = Some(Self::program(&config));
        while let Some(suspended) = engine.take().and_then(|e| e.search(&mut self.ctx)) {
            if let Some(failure) = self.ctx.failure.take() {
                return Err(failure);
            }
            engine = Some(suspended);
        }

        if let Some(output) = self.ctx.state.output.as_mut() {
            output.flush()?;
        }

        let SearchContext {
            config,
            state,
            registry,
            statistics,
            ..
        } = self.ctx;

        log::info!(
            "found {} groups of order {} among {} complete tables",
            statistics.get(Counters::Classes),
            config.order(),
            statistics.get(Counters::CompletedTables)
        );
        log::debug!("statistics: {}", statistics);

        Ok(Census {
            config,
            representatives: state.representatives,
            canonical_forms: registry.into_forms(),
            statistics,
        })
    }
}
