//! Sprague-Grundy analysis of heap positions.
//!
//! Nim positions are impartial, so every position has a Grundy value: the
//! mex of the values of its successors. A position is lost for the player to
//! move exactly when its value is zero. For Nim the value equals the
//! nim-sum; [`grundy_value`] computes it the slow way so the shortcut used by
//! the Expert strategy can be checked against first principles.

use rustc_hash::FxHashMap;

use crate::core::{HeapState, Heaps};

/// Minimum excludant: the smallest non-negative integer not in `values`.
///
/// ```
/// use rust_nim::analysis::mex;
///
/// assert_eq!(mex([0, 1, 3]), 2);
/// assert_eq!(mex([1, 2]), 0);
/// ```
pub fn mex(values: impl IntoIterator<Item = u32>) -> u32 {
    let mut seen: Vec<u32> = values.into_iter().collect();
    seen.sort_unstable();
    seen.dedup();

    seen.iter()
        .enumerate()
        .find(|&(i, &v)| v != i as u32)
        .map_or(seen.len() as u32, |(i, _)| i as u32)
}

/// True if the player to move loses against perfect play.
#[must_use]
pub fn is_losing_position(state: &HeapState) -> bool {
    state.nim_sum() == 0
}

/// Grundy value by exhaustive search over all successor positions.
///
/// Exponential in the heap sizes; meant for the small layouts this game
/// deals, not for arbitrary positions.
#[must_use]
pub fn grundy_value(state: &HeapState) -> u32 {
    let mut memo = FxHashMap::default();
    grundy_memo(canonical(state.heaps()), &mut memo)
}

/// Heap order and empty heaps do not affect the value.
fn canonical(heaps: &[u32]) -> Heaps {
    let mut key: Heaps = heaps.iter().copied().filter(|&h| h > 0).collect();
    key.sort_unstable();
    key
}

fn grundy_memo(key: Heaps, memo: &mut FxHashMap<Heaps, u32>) -> u32 {
    if let Some(&value) = memo.get(&key) {
        return value;
    }

    let mut successors = Vec::new();
    for (i, &h) in key.iter().enumerate() {
        for take in 1..=h {
            let mut next = key.clone();
            next[i] = h - take;
            successors.push(grundy_memo(canonical(&next), memo));
        }
    }

    let value = mex(successors);
    memo.insert(key, value);
    value
}
