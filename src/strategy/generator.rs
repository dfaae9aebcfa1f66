//! Combination generator.
//!
//! Enumerates every order-preserving r-subset of a slice, in
//! lexicographic order of the original indices, and counts C(n, r) for
//! the size selector.

use crate::types::SizeOption;

// ---------------------------------------------------------------------------
// Enumeration
// ---------------------------------------------------------------------------

/// All r-element subsets of `items`, each keeping the items' relative order.
///
/// Returns an empty list when `r` is 0 or larger than `items.len()`.
pub fn generate<T: Clone>(items: &[T], r: usize) -> Vec<Vec<T>> {
    if r == 0 || r > items.len() {
        return Vec::new();
    }
    if r == 1 {
        return items.iter().map(|item| vec![item.clone()]).collect();
    }
    if r == items.len() {
        return vec![items.to_vec()];
    }

    let mut combinations = Vec::new();
    for i in 0..=items.len() - r {
        let head = &items[i];
        for tail in generate(&items[i + 1..], r - 1) {
            let mut combo = Vec::with_capacity(r);
            combo.push(head.clone());
            combo.extend(tail);
            combinations.push(combo);
        }
    }
    combinations
}

// ---------------------------------------------------------------------------
// Counting
// ---------------------------------------------------------------------------

/// Binomial coefficient C(n, r). Saturates at `u64::MAX`.
pub fn combination_count(n: usize, r: usize) -> u64 {
    if r > n {
        return 0;
    }
    // C(n, r) == C(n, n - r); iterate over the smaller side.
    let r = r.min(n - r) as u128;
    let n = n as u128;
    let mut acc: u128 = 1;
    for i in 0..r {
        // acc * (n - i) is always divisible by (i + 1) at this point.
        acc = match acc.checked_mul(n - i) {
            Some(v) => v / (i + 1),
            None => return u64::MAX,
        };
        if acc > u64::MAX as u128 {
            return u64::MAX;
        }
    }
    acc as u64
}

/// Combination sizes offered for `team_count` teams: 2 up to (but not
/// including) the team count, each with its combination count.
pub fn available_sizes(team_count: usize) -> Vec<SizeOption> {
    (2..team_count)
        .map(|size| SizeOption {
            size,
            count: combination_count(team_count, size),
        })
        .collect()
}

/// Pull a chosen size back into the available range after the team list
/// shrank. Falls back to 2 when no size is available.
pub fn clamp_size(size: usize, team_count: usize) -> usize {
    match available_sizes(team_count).last() {
        Some(largest) => size.clamp(2, largest.size),
        None => 2,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
