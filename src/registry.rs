// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Registry of isomorphism classes seen during one run.
//!
//! Append-only: a class is new iff its canonical form is not yet stored.
//! The registry owns its copies, independent of the generator's working
//! table, and is dropped with the search context.

use std::collections::TryReserveError;

use crate::symmetry::CanonicalForm;

/// Canonical forms of every class discovered so far, in discovery order.
#[derive(Debug, Default, Clone)]
pub struct IsomorphismRegistry {
    forms: Vec<CanonicalForm>,
}

impl IsomorphismRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a class with this canonical form was already recorded.
    ///
    /// Linear scan with element-wise comparison.
    pub fn contains(&self, form: &CanonicalForm) -> bool {
        self.forms.iter().any(|seen| seen == form)
    }

    /// Record a new class. Callers check [`IsomorphismRegistry::contains`] first.
    pub fn insert(&mut self, form: CanonicalForm) -> Result<(), TryReserveError> {
        debug_assert!(!self.contains(&form), "class recorded twice");
        self.forms.try_reserve(1)?;
        self.forms.push(form);
        Ok(())
    }

    /// Number of classes recorded.
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CanonicalForm> {
        self.forms.iter()
    }

    /// Consume the registry, yielding the canonical forms in discovery order.
    pub fn into_forms(self) -> Vec<CanonicalForm> {
        self.forms
    }
}
