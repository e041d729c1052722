// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! In-place lexicographic permutation stepping.

/// Advance `arr` to the next permutation in strict lexicographic order.
///
/// Returns `false`, leaving `arr` unchanged, when `arr` is already the last
/// (non-increasing) permutation. Starting from a sorted slice and calling
/// this until it returns `false` visits every permutation exactly once.
///
/// Algorithm:
/// 1. Find the pivot: the last `i` with `arr[i] < arr[i + 1]`.
/// 2. Find the last `j` with `arr[j] > arr[pivot]` and swap the two.
/// 3. Reverse the suffix after the pivot.
pub fn next_permutation<T: Ord>(arr: &mut [T]) -> bool {
    if arr.len() < 2 {
        return false;
    }

    let Some(pivot) = (0..arr.len() - 1).rev().find(|&i| arr[i] < arr[i + 1]) else {
        return false;
    };

    // The suffix after the pivot is non-increasing and arr[pivot + 1] is
    // larger than the pivot, so a successor always exists.
    let successor = (pivot + 1..arr.len())
        .rev()
        .find(|&j| arr[j] > arr[pivot])
        .unwrap_or(pivot + 1);

    arr.swap(pivot, successor);
    arr[pivot + 1..].reverse();
    true
}
