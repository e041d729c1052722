// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Canonical forms of group tables under identity-fixing relabeling.
//!
//! Two group tables are isomorphic iff one can be relabeled into the other.
//! Fixing the identity to label 0 leaves `(n-1)!` relabelings of the other
//! elements; the canonical form is the lexicographically smallest flattened
//! table among them. Isomorphic tables have identical canonical forms, so
//! deduplication reduces to equality of flattened tables.
//!
//! The computation walks the whole relabeling orbit, which is exact but
//! exponential in `n`.

use std::mem;

use super::permutation::next_permutation;
use crate::error::Result;
use crate::table::{axioms, try_buffer, Table};

/// A flattened table in canonical labeling.
///
/// Ordering is lexicographic over the row-major cells, so the `Ord`
/// derived here is the order the canonical form minimises.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalForm {
    order: usize,
    cells: Box<[usize]>,
}

impl CanonicalForm {
    /// Canonical form of a table, locating its identity first.
    ///
    /// A table without an identity cannot be relabeled meaningfully, so its
    /// flattening is returned unchanged.
    pub fn of(table: &Table) -> Result<Self> {
        match axioms::find_identity(table) {
            Some(identity) => canonical_form(table, identity),
            None => {
                let mut cells = try_buffer(table.len())?;
                cells.extend_from_slice(table.as_flat());
                Ok(Self {
                    order: table.order(),
                    cells: cells.into_boxed_slice(),
                })
            }
        }
    }

    /// Number of elements of the underlying table.
    pub fn order(&self) -> usize {
        self.order
    }

    /// The canonical flattened table.
    pub fn as_flat(&self) -> &[usize] {
        &self.cells
    }

    /// The canonical labeling as a [`Table`]; its identity is element 0.
    pub fn to_table(&self) -> Result<Table> {
        let mut table = Table::new(self.order)?;
        for (index, &value) in self.cells.iter().enumerate() {
            table.set_cell(index, value);
        }
        Ok(table)
    }
}

/// Compute the canonical form of a group table with identity `identity`.
///
/// For every permutation `perm` of `0..n-1` (in lexicographic order), the
/// relabeling sends `identity -> 0` and the `i`-th non-identity element (in
/// ascending order) to `perm[i] + 1`. The smallest relabeled flattening wins;
/// ties keep the first one found.
pub fn canonical_form(table: &Table, identity: usize) -> Result<CanonicalForm> {
    let n = table.order();
    debug_assert!(identity < n, "identity {} out of range for order {}", identity, n);

    let mut others = try_buffer(n.saturating_sub(1))?;
    others.extend((0..n).filter(|&a| a != identity));

    let mut perm = try_buffer(others.len())?;
    perm.extend(0..others.len());

    let mut map = try_buffer(n)?;
    map.resize(n, 0);

    let mut best = try_buffer(table.len())?;
    best.resize(table.len(), 0);
    let mut candidate = try_buffer(table.len())?;
    candidate.resize(table.len(), 0);
    let mut best_set = false;

    loop {
        map[identity] = 0;
        for (&old, &label) in others.iter().zip(perm.iter()) {
            map[old] = label + 1;
        }

        table.relabel_into(&map, &mut candidate);
        if !best_set || candidate < best {
            mem::swap(&mut best, &mut candidate);
            best_set = true;
        }

        if !next_permutation(&mut perm) {
            break;
        }
    }

    Ok(CanonicalForm {
        order: n,
        cells: best.into_boxed_slice(),
    })
}
