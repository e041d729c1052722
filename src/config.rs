// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-run search configuration.

use crate::arith;
use crate::error::{GroupSearchError, Result};
use crate::table::cell_count;

/// What to search for and how hard to prune.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    order: usize,
    abelian_pruning: bool,
    eager_pruning: bool,
    report_tables: bool,
}

impl SearchConfig {
    /// Configuration for groups of order `order`.
    ///
    /// Abelian pruning is on whenever the order is prime or a prime square;
    /// eager pruning is off; tables are reported.
    pub fn new(order: usize) -> Result<Self> {
        if order == 0 {
            return Err(GroupSearchError::InvalidOrder { order });
        }
        cell_count(order)?;
        Ok(Self {
            order,
            abelian_pruning: arith::must_be_abelian(order),
            eager_pruning: false,
            report_tables: true,
        })
    }

    /// Allow switching abelian pruning off. It cannot be forced on for
    /// orders where it would be unsound.
    pub fn with_abelian_pruning(mut self, enabled: bool) -> Self {
        self.abelian_pruning = enabled && arith::must_be_abelian(self.order);
        self
    }

    /// Reject partial tables that already violate cancellation or
    /// associativity, instead of waiting for the table to be complete.
    pub fn with_eager_pruning(mut self, enabled: bool) -> Self {
        self.eager_pruning = enabled;
        self
    }

    /// Whether each new representative is written to the report sink.
    pub fn with_report_tables(mut self, enabled: bool) -> Self {
        self.report_tables = enabled;
        self
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn abelian_pruning(&self) -> bool {
        self.abelian_pruning
    }

    pub fn eager_pruning(&self) -> bool {
        self.eager_pruning
    }

    pub fn report_tables(&self) -> bool {
        self.report_tables
    }

    /// Number of cells the generator fills, `order²`.
    pub fn cells(&self) -> usize {
        // Checked in `new`.
        self.order * self.order
    }
}
