// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context: everything one run owns.
//!
//! The SearchContext is passed to every predicate. It holds the run
//! configuration, the mutable search state, the isomorphism registry and
//! the statistics. Nothing is global: two contexts are two independent runs,
//! and the registry is dropped with its context.
//!
//! # Memory Model
//!
//! ```text
//! SearchContext {
//!     config: SearchConfig,           // fixed for the run
//!     state: DynamicState,            // working table, identity, representatives, sink
//!     registry: IsomorphismRegistry,  // append-only, lives for the run
//!     statistics: Statistics,         // counters
//!     failure: Option<GroupSearchError>,
//! }
//! ```

use crate::config::SearchConfig;
use crate::error::{GroupSearchError, Result};
use crate::registry::IsomorphismRegistry;
use crate::state::statistics::Statistics;
use crate::state::DynamicState;
use crate::table::Table;

#[derive(Debug)]
pub struct SearchContext {
    /// Run configuration
    pub config: SearchConfig,
    /// Mutable search state
    pub state: DynamicState,
    /// Canonical forms of every class found so far
    pub registry: IsomorphismRegistry,
    /// Run counters
    pub statistics: Statistics,
    /// Fatal error raised by a predicate. A predicate that sets this
    /// suspends the engine, and the driver reports it.
    pub failure: Option<GroupSearchError>,
}

impl SearchContext {
    /// Create a context with a zeroed working table of the configured order.
    pub fn new(config: SearchConfig) -> Result<Self> {
        Ok(Self {
            state: DynamicState::new(config.order())?,
            config,
            registry: IsomorphismRegistry::new(),
            statistics: Statistics::new(),
            failure: None,
        })
    }

    /// The working table.
    pub fn table(&self) -> &Table {
        &self.state.table
    }

    /// Number of elements being searched over.
    pub fn order(&self) -> usize {
        self.config.order()
    }

    /// Record a fatal error. The first one wins.
    pub fn fail_with(&mut self, error: impl Into<GroupSearchError>) {
        if self.failure.is_none() {
            self.failure = Some(error.into());
        }
    }
}
