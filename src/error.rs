// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the group search.
//!
//! Only conditions that stop a run are errors. A candidate table failing an
//! axiom, or landing in an isomorphism class already seen, is an ordinary
//! search outcome and is recorded in the statistics instead.

use std::collections::TryReserveError;
use std::io;
use thiserror::Error;

/// Errors that abort a group search.
#[derive(Error, Debug)]
pub enum GroupSearchError {
    /// The requested group order is not a positive integer.
    #[error("group order must be a positive integer, got {order}")]
    InvalidOrder {
        /// The rejected order
        order: usize,
    },

    /// An `order × order` table cannot be addressed on this platform.
    #[error("a table of order {order} has too many cells to address")]
    TableTooLarge {
        /// The rejected order
        order: usize,
    },

    /// Rows handed to [`crate::table::Table::from_rows`] do not form a square.
    #[error("row {row} has {found} entries, expected {expected}")]
    NotSquare {
        /// Index of the offending row
        row: usize,
        /// Number of rows, which every row length must match
        expected: usize,
        /// Actual length of the row
        found: usize,
    },

    /// A table, working buffer or registry entry could not be allocated.
    #[error("memory allocation failed: {0}")]
    Allocation(#[from] TryReserveError),

    /// Writing a discovered group to the report sink failed.
    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GroupSearchError>;
