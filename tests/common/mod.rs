// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use group_census::{Census, GroupSearch, SearchConfig, Table};

/// Cyclic group `Z_n` under addition mod `n`.
pub fn cyclic(n: usize) -> Table {
    let rows: Vec<Vec<usize>> = (0..n)
        .map(|a| (0..n).map(|b| (a + b) % n).collect())
        .collect();
    Table::from_rows(&rows).unwrap()
}

/// Klein four-group, `Z_2 × Z_2`, with xor as the operation.
pub fn klein() -> Table {
    let rows: Vec<Vec<usize>> = (0..4)
        .map(|a| (0..4).map(|b| a ^ b).collect())
        .collect();
    Table::from_rows(&rows).unwrap()
}

/// Symmetric group on three points.
///
/// 0 = id, 1 = (123), 2 = (132), 3 = (12), 4 = (13), 5 = (23).
pub fn s3() -> Table {
    Table::from_rows(&[
        [0, 1, 2, 3, 4, 5],
        [1, 2, 0, 4, 5, 3],
        [2, 0, 1, 5, 3, 4],
        [3, 5, 4, 0, 2, 1],
        [4, 3, 5, 1, 0, 2],
        [5, 4, 3, 2, 1, 0],
    ])
    .unwrap()
}

/// Relabel so that element `a` becomes element `b` and vice versa.
pub fn swap_labels(table: &Table, a: usize, b: usize) -> Table {
    let mut map: Vec<usize> = (0..table.order()).collect();
    map.swap(a, b);
    table.relabeled(&map).unwrap()
}

/// Rotate every label by one, moving the identity off 0.
pub fn rotate_labels(table: &Table) -> Table {
    let n = table.order();
    let map: Vec<usize> = (0..n).map(|x| (x + 1) % n).collect();
    table.relabeled(&map).unwrap()
}

/// Run a census, quietly.
pub fn census(config: SearchConfig) -> Census {
    GroupSearch::new(config).unwrap().run().unwrap()
}

/// Run a census of order `n` with eager pruning.
pub fn eager_census(n: usize) -> Census {
    census(SearchConfig::new(n).unwrap().with_eager_pruning(true))
}
