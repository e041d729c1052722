// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable per-run search state.
//!
//! - The working table, overwritten in place by the fill predicate
//! - The identity found for the current complete table
//! - Representatives of each class found, in their original labeling
//! - The report sink
//!
//! Backtracking needs no trail: every retry of a cell overwrites it, and
//! every later predicate recomputes what it reads from the table.

pub mod statistics;

use std::fmt;
use std::io::Write;

use crate::error::Result;
use crate::table::Table;

pub struct DynamicState {
    /// The candidate table being filled, row-major.
    pub table: Table,

    /// Identity of `table`, set by the identity predicate once the table is complete.
    pub identity: Option<usize>,

    /// First table found in each isomorphism class, in discovery order.
    pub representatives: Vec<Table>,

    /// Where newly discovered groups are written, if anywhere.
    pub output: Option<Box<dyn Write>>,
}

impl DynamicState {
    pub fn new(order: usize) -> Result<Self> {
        Ok(Self {
            table: Table::new(order)?,
            identity: None,
            representatives: Vec::new(),
            output: None,
        })
    }
}

impl fmt::Debug for DynamicState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicState")
            .field("table", &self.table)
            .field("identity", &self.identity)
            .field("representatives", &self.representatives.len())
            .field("output", &self.output.is_some())
            .finish()
    }
}
