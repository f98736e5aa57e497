//! Property-based tests for heap mutation and the computer strategies.

use proptest::prelude::*;

use rust_nim::analysis::grundy_value;
use rust_nim::core::{GameRng, HeapState, Move};
use rust_nim::error::MoveError;
use rust_nim::strategy::{Expert, Novice, Strategy as ComputerStrategy};

/// Strategy: 1-5 heaps of 0-15 items.
fn heaps_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0..=15u32, 1..=5)
}

/// Strategy: heaps with at least one item left.
fn live_heaps_strategy() -> impl Strategy<Value = Vec<u32>> {
    heaps_strategy().prop_filter("at least one non-empty heap", |h| h.iter().any(|&x| x > 0))
}

proptest! {
    // 1. A valid move shrinks exactly one heap by exactly `count`
    #[test]
    fn apply_changes_one_heap(heaps in live_heaps_strategy(), pick in any::<prop::sample::Index>(), frac in 0.0..1.0f64) {
        let state = HeapState::from_heaps(&heaps);
        let live = state.non_empty_heaps();
        let (heap, size) = live[pick.index(live.len())];
        let count = 1 + ((size - 1) as f64 * frac) as u32;

        let mut after = state.clone();
        after.apply(Move::new(heap, count)).unwrap();

        for (i, (&before, &now)) in state.heaps().iter().zip(after.heaps()).enumerate() {
            if i == heap {
                prop_assert_eq!(now, before - count);
            } else {
                prop_assert_eq!(now, before);
            }
        }
    }

    // 2. Out-of-range heaps are rejected and nothing changes
    #[test]
    fn apply_rejects_bad_heap(heaps in heaps_strategy(), extra in 0..10usize, count in 0..20u32) {
        let mut state = HeapState::from_heaps(&heaps);
        let heap = heaps.len() + extra;

        let err = state.apply(Move::new(heap, count)).unwrap_err();
        prop_assert_eq!(err, MoveError::HeapOutOfRange { heap, heap_count: heaps.len() });
        prop_assert_eq!(state.heaps(), heaps.as_slice());
    }

    // 3. Counts outside 1..=size are rejected and nothing changes
    #[test]
    fn apply_rejects_bad_count(heaps in heaps_strategy(), pick in any::<prop::sample::Index>(), over in 1..10u32, zero in any::<bool>()) {
        let mut state = HeapState::from_heaps(&heaps);
        let heap = pick.index(heaps.len());
        let count = if zero { 0 } else { heaps[heap] + over };

        let rejected = state.apply(Move::new(heap, count));
        let is_count_error = matches!(rejected, Err(MoveError::RemoveCountOutOfRange { .. }));
        prop_assert!(is_count_error);
        prop_assert_eq!(state.heaps(), heaps.as_slice());
    }

    // 4. Expert always moves to a zero nim-sum when it can
    #[test]
    fn expert_zeroes_nim_sum(heaps in live_heaps_strategy(), seed in any::<u64>()) {
        let mut state = HeapState::from_heaps(&heaps);
        prop_assume!(state.nim_sum() != 0);

        let decision = Expert.choose_move(&state, &mut GameRng::new(seed)).unwrap();
        prop_assert!(!decision.fallback);
        state.apply(decision.mv).unwrap();
        prop_assert_eq!(state.nim_sum(), 0);
    }

    // 5. Expert picks the lowest qualifying heap
    #[test]
    fn expert_picks_lowest_heap(heaps in live_heaps_strategy()) {
        let state = HeapState::from_heaps(&heaps);
        let s = state.nim_sum();
        prop_assume!(s != 0);

        let decision = Expert.choose_move(&state, &mut GameRng::new(0)).unwrap();
        let first = heaps.iter().position(|&h| (h ^ s) < h).unwrap();
        prop_assert_eq!(decision.mv.heap, first);
    }

    // 6. Both strategies only produce legal moves
    #[test]
    fn strategies_are_legal(heaps in live_heaps_strategy(), seed in any::<u64>()) {
        let state = HeapState::from_heaps(&heaps);
        let mut rng = GameRng::new(seed);

        let novice = Novice.choose_move(&state, &mut rng).unwrap();
        prop_assert!(state.validate(novice.mv).is_ok());

        let expert = Expert.choose_move(&state, &mut rng).unwrap();
        prop_assert!(state.validate(expert.mv).is_ok());
        prop_assert_eq!(expert.fallback, state.nim_sum() == 0);
    }

    // 7. The nim-sum shortcut agrees with exhaustive Grundy search
    #[test]
    fn grundy_equals_nim_sum(heaps in prop::collection::vec(0..=6u32, 1..=3)) {
        let state = HeapState::from_heaps(&heaps);
        prop_assert_eq!(grundy_value(&state), state.nim_sum());
    }
}
