// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cayley tables.
//!
//! A [`Table`] maps each ordered pair of element indices `(a, b)` in
//! `[0, n)²` to a result index. Cells are stored row-major, so the backing
//! slice is also the flattened table used for storage and lexicographic
//! comparison: cell `(a, b)` lives at `a * n + b`.
//!
//! The generator owns one `Table` per run and overwrites it in place while
//! backtracking. Anything that must outlive a search step (a reported
//! representative, a canonical form) is copied out.

pub mod axioms;

use std::collections::TryReserveError;
use std::fmt;

use crate::error::{GroupSearchError, Result};

/// An `order × order` binary operation table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Table {
    order: usize,
    cells: Vec<usize>,
}

impl Table {
    /// Create a zero-filled table of the given order.
    ///
    /// Order 0 is accepted here (an empty table); the search rejects it
    /// earlier through [`crate::config::SearchConfig::new`].
    pub fn new(order: usize) -> Result<Self> {
        let len = cell_count(order)?;
        let mut cells = try_buffer(len)?;
        cells.resize(len, 0);
        Ok(Self { order, cells })
    }

    /// Build a table from explicit rows.
    ///
    /// Every row must have exactly as many entries as there are rows. Values
    /// are not range-checked; see [`axioms::is_closed`].
    pub fn from_rows<R: AsRef<[usize]>>(rows: &[R]) -> Result<Self> {
        let order = rows.len();
        let len = cell_count(order)?;
        let mut cells = try_buffer(len)?;
        for (row, entries) in rows.iter().enumerate() {
            let entries = entries.as_ref();
            if entries.len() != order {
                return Err(GroupSearchError::NotSquare {
                    row,
                    expected: order,
                    found: entries.len(),
                });
            }
            cells.extend_from_slice(entries);
        }
        Ok(Self { order, cells })
    }

    /// Number of elements `n`.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of cells, `n²`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for the order-0 table.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The product `a · b`.
    #[inline]
    pub fn get(&self, a: usize, b: usize) -> usize {
        self.cells[a * self.order + b]
    }

    /// Set the product `a · b`.
    #[inline]
    pub fn set(&mut self, a: usize, b: usize, value: usize) {
        self.cells[a * self.order + b] = value;
    }

    /// Cell at a row-major index.
    #[inline]
    pub fn cell(&self, index: usize) -> usize {
        self.cells[index]
    }

    /// Set the cell at a row-major index.
    #[inline]
    pub fn set_cell(&mut self, index: usize, value: usize) {
        self.cells[index] = value;
    }

    /// The flattened, row-major view of the table.
    pub fn as_flat(&self) -> &[usize] {
        &self.cells
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[usize]> {
        // chunks(0) panics, and the order-0 table has no rows anyway.
        self.cells.chunks(self.order.max(1))
    }

    /// Write the table relabeled by `map` into `out`.
    ///
    /// `map[old] = new` is applied to both axes and to every entry:
    /// `out[map[a] * n + map[b]] = map[a · b]`. `map` must be a permutation
    /// of `0..n` and `out` must hold `n²` cells.
    pub fn relabel_into(&self, map: &[usize], out: &mut [usize]) {
        debug_assert_eq!(map.len(), self.order);
        debug_assert_eq!(out.len(), self.cells.len());
        let n = self.order;
        for (a, row) in self.rows().enumerate() {
            let new_a = map[a];
            for (b, &value) in row.iter().enumerate() {
                out[new_a * n + map[b]] = map[value];
            }
        }
    }

    /// A copy of the table relabeled by `map` (see [`Table::relabel_into`]).
    pub fn relabeled(&self, map: &[usize]) -> Result<Table> {
        let mut relabeled = Table::new(self.order)?;
        self.relabel_into(map, &mut relabeled.cells);
        Ok(relabeled)
    }

    /// Copy another table of the same order into this one.
    pub fn copy_from(&mut self, other: &Table) {
        debug_assert_eq!(self.order, other.order);
        self.cells.copy_from_slice(&other.cells);
    }
}

/// Rows of space-separated integers, one line per row.
impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (i, value) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// `order²`, or an error if that does not fit a `usize`.
pub(crate) fn cell_count(order: usize) -> Result<usize> {
    order
        .checked_mul(order)
        .ok_or(GroupSearchError::TableTooLarge { order })
}

/// An empty buffer with room for `len` cells, reporting allocation failure
/// instead of aborting.
pub(crate) fn try_buffer(len: usize) -> std::result::Result<Vec<usize>, TryReserveError> {
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(len)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn z3() -> Table {
        Table::from_rows(&[[0, 1, 2], [1, 2, 0], [2, 0, 1]]).unwrap()
    }

    #[test]
    fn test_new_is_zero_filled() {
        let table = Table::new(3).unwrap();
        assert_eq!(table.order(), 3);
        assert_eq!(table.len(), 9);
        assert!(table.as_flat().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_row_major_layout() {
        let table = z3();
        assert_eq!(table.as_flat(), &[0, 1, 2, 1, 2, 0, 2, 0, 1]);
        assert_eq!(table.get(1, 2), 0);
        assert_eq!(table.cell(5), 0);
        assert_eq!(table.rows().nth(2), Some(&[2, 0, 1][..]));
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let err = Table::from_rows(&[vec![0, 1], vec![1]]).unwrap_err();
        assert!(matches!(
            err,
            GroupSearchError::NotSquare {
                row: 1,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_too_large_order() {
        assert!(matches!(
            Table::new(usize::MAX),
            Err(GroupSearchError::TableTooLarge { .. })
        ));
    }

    #[test]
    fn test_relabel_by_automorphism_is_identity() {
        // x -> x⁻¹ is an automorphism of Z3.
        assert_eq!(z3().relabeled(&[0, 2, 1]).unwrap(), z3());
    }

    #[test]
    fn test_relabel_moves_entries() {
        let z4 = Table::from_rows(&[[0, 1, 2, 3], [1, 2, 3, 0], [2, 3, 0, 1], [3, 0, 1, 2]])
            .unwrap();
        // Swap labels 1 and 2: the element of order 2 becomes 1.
        let relabeled = z4.relabeled(&[0, 2, 1, 3]).unwrap();
        assert_eq!(relabeled.get(1, 1), 0);
        assert_eq!(relabeled.get(2, 2), 1);
        assert_eq!(relabeled.get(2, 3), 0);
        assert_ne!(relabeled, z4);
    }

    #[test]
    fn test_display() {
        assert_eq!(z3().to_string(), "0 1 2\n1 2 0\n2 0 1\n");
        assert_eq!(Table::new(0).unwrap().to_string(), "");
    }
}
