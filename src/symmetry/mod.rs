// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Relabeling symmetry of group tables.
//!
//! ## Module Structure
//!
//! - `permutation`: lexicographic next-permutation, which drives the orbit walk
//! - `canonical`: canonical forms under relabelings that fix the identity to 0
//! - `mod`: Public API and re-exports

pub mod canonical;
pub mod permutation;

pub use canonical::{canonical_form, CanonicalForm};
pub use permutation::next_permutation;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Table;
    use quickcheck_macros::quickcheck;

    /// Z2 × Z3 written with 0 as identity, elements `(x, y) -> 3x + y`.
    fn z2_z3() -> Table {
        let mut rows = vec![vec![0; 6]; 6];
        for a in 0..6 {
            for b in 0..6 {
                let x = (a / 3 + b / 3) % 2;
                let y = (a % 3 + b % 3) % 3;
                rows[a][b] = 3 * x + y;
            }
        }
        Table::from_rows(&rows).unwrap()
    }

    /// Relabeling fixing 0, derived from arbitrary sort keys for 1..n.
    fn relabeling_from_keys(n: usize, keys: &[u8]) -> Vec<usize> {
        let mut others: Vec<usize> = (1..n).collect();
        others.sort_by_key(|&a| keys.get(a).copied().unwrap_or(0));
        let mut map = vec![0; n];
        for (label, &old) in others.iter().enumerate() {
            map[old] = label + 1;
        }
        map
    }

    #[quickcheck]
    fn canonical_form_ignores_relabeling(keys: Vec<u8>) -> bool {
        let table = z2_z3();
        let map = relabeling_from_keys(table.order(), &keys);
        let relabeled = table.relabeled(&map).unwrap();
        canonical_form(&table, 0).unwrap() == canonical_form(&relabeled, 0).unwrap()
    }

    #[test]
    fn test_canonical_form_is_minimal_over_orbit() {
        let table = z2_z3();
        let form = canonical_form(&table, 0).unwrap();

        let mut perm: Vec<usize> = (0..5).collect();
        loop {
            let mut map = vec![0];
            map.extend(perm.iter().map(|&p| p + 1));
            let relabeled = table.relabeled(&map).unwrap();
            assert!(form.as_flat() <= relabeled.as_flat());
            if !next_permutation(&mut perm) {
                break;
            }
        }
    }
}
