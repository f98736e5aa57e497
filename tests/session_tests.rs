//! End-to-end game tests through the turn controller.

use rust_nim::core::{GameMode, GameRng, HeapState, Move, Side};
use rust_nim::session::{GameSession, Outcome, TurnPhase};
use rust_nim::strategy::{Novice, Strategy, StrategyChoice};

// =============================================================================
// Fixed positions
// =============================================================================

#[test]
fn test_single_heap_human_wins_without_computer_turn() {
    let mut session = GameSession::from_state(
        HeapState::from_heaps(&[1]),
        StrategyChoice::Expert,
        GameRng::new(0),
    );

    assert_eq!(session.submit_human_move(0, 1), Ok(Outcome::HumanWon));
    assert_eq!(session.state().heaps(), &[0]);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_expert_reply_on_three_four_five() {
    // The human's move leaves [3, 4, 5] for the computer.
    let mut session = GameSession::from_state(
        HeapState::from_heaps(&[3, 4, 6]),
        StrategyChoice::Expert,
        GameRng::new(0),
    );

    session.submit_human_move(2, 1).unwrap();
    assert_eq!(session.state().heaps(), &[3, 4, 5]);

    let turn = session.computer_turn().unwrap();
    assert_eq!(turn.mv, Move::new(0, 2));
    assert!(!turn.fallback);
    assert_eq!(session.state().heaps(), &[1, 4, 5]);
    assert_eq!(session.state().nim_sum(), 0);
    assert_eq!(session.phase(), TurnPhase::AwaitingHumanMove);
}

#[test]
fn test_expert_falls_back_when_losing() {
    let mut session = GameSession::from_state(
        HeapState::from_heaps(&[1, 2, 3, 4]),
        StrategyChoice::Expert,
        GameRng::new(0),
    );

    // Leaves [1, 2, 3, 0]: nim-sum 0 for the computer.
    session.submit_human_move(3, 4).unwrap();
    let before = session.state().clone();

    let turn = session.computer_turn().unwrap();
    assert!(turn.fallback);
    assert!(before.validate(turn.mv).is_ok());
    assert_eq!(session.state().total_items(), before.total_items() - turn.mv.count);
}

// =============================================================================
// Full games
// =============================================================================

/// Play a whole game with the human side driven by `human`.
fn play_out(
    mut session: GameSession,
    human: &dyn Strategy,
    rng: &mut GameRng,
) -> (Outcome, GameSession) {
    loop {
        let decision = human.choose_move(session.state(), rng).unwrap();
        let outcome = session.submit_human_move(decision.mv.heap, decision.mv.count).unwrap();
        if outcome.is_over() {
            return (outcome, session);
        }

        let turn = session.computer_turn().unwrap();
        if turn.outcome.is_over() {
            return (turn.outcome, session);
        }
    }
}

#[test]
fn test_games_always_terminate_with_last_mover_winning() {
    for seed in 0..50 {
        for mode in [GameMode::Single, GameMode::Multi] {
            for strategy in [StrategyChoice::Expert, StrategyChoice::Novice] {
                let session = GameSession::new_game(mode, strategy, GameRng::new(seed));
                let start_items = session.state().total_items();
                let mut rng = GameRng::new(seed + 1000);

                let (outcome, session) = play_out(session, &Novice, &mut rng);

                assert!(session.state().is_terminal());
                let last = session.history().last().unwrap();
                assert_eq!(outcome.winner(), Some(last.side));
                assert!(session.history().len() as u32 <= start_items);
            }
        }
    }
}

#[test]
fn test_expert_never_loses_from_winning_position() {
    // The human moves first, so the computer is winning whenever the
    // human's move leaves a non-zero nim-sum. Start from zero nim-sum
    // positions: every human move hands the computer a win.
    let starts: [&[u32]; 4] = [&[1, 2, 3], &[4, 4], &[5, 6, 3], &[7, 2, 5]];

    for (i, heaps) in starts.iter().enumerate() {
        for seed in 0..20 {
            let session = GameSession::from_state(
                HeapState::from_heaps(heaps),
                StrategyChoice::Expert,
                GameRng::new(seed),
            );
            let mut rng = GameRng::new(seed * 31 + i as u64);

            let (outcome, _) = play_out(session, &Novice, &mut rng);
            assert_eq!(outcome, Outcome::ComputerWon, "start {heaps:?} seed {seed}");
        }
    }
}

#[test]
fn test_moves_alternate_sides() {
    let session = GameSession::new_game(GameMode::Multi, StrategyChoice::Novice, GameRng::new(7));
    let (_, session) = play_out(session, &Novice, &mut GameRng::new(8));

    for (i, record) in session.history().iter().enumerate() {
        let expected = if i % 2 == 0 { Side::Human } else { Side::Computer };
        assert_eq!(record.side, expected);
        assert_eq!(record.ply, i as u32 + 1);
    }
}

#[test]
fn test_same_seed_replays_same_game() {
    let run = |seed| {
        let session = GameSession::new_game(GameMode::Multi, StrategyChoice::Novice, GameRng::new(seed));
        let (outcome, session) = play_out(session, &Novice, &mut GameRng::new(seed));
        (outcome, session.history().iter().copied().collect::<Vec<_>>())
    };

    assert_eq!(run(12345), run(12345));
}
