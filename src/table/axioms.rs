// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Group axiom checks over a completed table.
//!
//! All functions are pure and report failure as `false` (or `None`); a table
//! failing an axiom is an ordinary pruning outcome, not an error. The cheap
//! checks come first: the generator runs closure, identity and inverses
//! before the `O(n³)` associativity scan.
//!
//! [`partial_fill_consistent`] applies the same axioms to a table that is
//! only filled up to some row-major cell, for eager pruning.

use super::Table;

/// Every entry lies in `[0, n)`.
///
/// The generator only ever writes values in range, so this holds by
/// construction for generated tables.
pub fn is_closed(table: &Table) -> bool {
    let n = table.order();
    table.as_flat().iter().all(|&value| value < n)
}

/// `a · b == b · a` for all `a`, `b`.
pub fn is_commutative(table: &Table) -> bool {
    let n = table.order();
    (0..n).all(|a| (a + 1..n).all(|b| table.get(a, b) == table.get(b, a)))
}

/// `e` is a two-sided identity: `i · e == i` and `e · i == i` for all `i`.
pub fn is_identity(table: &Table, e: usize) -> bool {
    (0..table.order()).all(|i| table.get(i, e) == i && table.get(e, i) == i)
}

/// The lowest-indexed identity element, if there is one.
pub fn find_identity(table: &Table) -> Option<usize> {
    (0..table.order()).find(|&e| is_identity(table, e))
}

/// Every element `a` has some `b` with `a · b == b · a == identity`.
pub fn has_inverses(table: &Table, identity: usize) -> bool {
    let n = table.order();
    (0..n).all(|a| (0..n).any(|b| table.get(a, b) == identity && table.get(b, a) == identity))
}

/// `(a · b) · c == a · (b · c)` for all `n³` ordered triples.
pub fn is_associative(table: &Table) -> bool {
    let n = table.order();
    for a in 0..n {
        for b in 0..n {
            let ab = table.get(a, b);
            for c in 0..n {
                if table.get(ab, c) != table.get(a, table.get(b, c)) {
                    return false;
                }
            }
        }
    }
    true
}

/// All group axioms, in the order the generator applies them.
pub fn is_group(table: &Table) -> bool {
    if !is_closed(table) {
        return false;
    }
    match find_identity(table) {
        Some(e) => has_inverses(table, e) && is_associative(table),
        None => false,
    }
}

/// Whether a partially filled table can still be completed to a group table.
///
/// Cells with row-major index below `filled` are defined; the rest hold
/// stale values and are ignored. The check assumes every shorter prefix was
/// already accepted, and looks for:
///
/// - the newest cell repeating a value earlier in its row or column (every
///   row and column of a group table is a permutation, by cancellation);
/// - a triple `(a, b, c)` whose four lookups are all defined but which
///   violates associativity.
pub fn partial_fill_consistent(table: &Table, filled: usize) -> bool {
    let n = table.order();
    if filled == 0 {
        return true;
    }
    debug_assert!(filled <= table.len());

    let newest = filled - 1;
    let (row, col) = (newest / n, newest % n);
    let value = table.cell(newest);
    if (0..col).any(|c| table.get(row, c) == value) || (0..row).any(|r| table.get(r, col) == value) {
        return false;
    }

    let defined = |a: usize, b: usize| a * n + b < filled;
    // Only rows 0..=row hold defined cells, so `a` and `b` are bounded by it.
    for a in 0..=row {
        for b in 0..n {
            if !defined(a, b) {
                break;
            }
            let ab = table.get(a, b);
            if b > row {
                continue;
            }
            for c in 0..n {
                if !defined(b, c) {
                    break;
                }
                let bc = table.get(b, c);
                if defined(ab, c) && defined(a, bc) && table.get(ab, c) != table.get(a, bc) {
                    return false;
                }
            }
        }
    }
    true
}
