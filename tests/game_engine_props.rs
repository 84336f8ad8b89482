use othello::{GameEngine, GameStatus, NUM_CELLS};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn random_engine(seed: u64, max_moves: usize) -> GameEngine {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut engine = GameEngine::new();
    for _ in 0..max_moves {
        let moves = engine.valid_moves();
        if moves.is_empty() {
            break;
        }
        let (r, c) = moves[rng.random_range(0..moves.len())];
        engine.submit_move(r, c).unwrap();
    }
    engine
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Each accepted move adds exactly one disc to the board.
    #[test]
    fn disc_count_tracks_moves(seed in any::<u64>(), max_moves in 0..70usize) {
        let engine = random_engine(seed, max_moves);
        let score = engine.score();
        prop_assert_eq!(score.total(), 4 + engine.moves_played());
        prop_assert_eq!(score.total() + score.empty(), NUM_CELLS);
    }

    /// The side to move can always move; a finished game has no movers.
    #[test]
    fn status_matches_available_moves(seed in any::<u64>(), max_moves in 0..70usize) {
        let engine = random_engine(seed, max_moves);
        let board = engine.board();
        match engine.status() {
            GameStatus::InProgress => {
                prop_assert!(board.has_any_valid_move(engine.current_player()));
                prop_assert!(engine.outcome().is_none());
            }
            GameStatus::Over => {
                prop_assert!(!board.has_any_valid_move(engine.current_player()));
                prop_assert!(!board.has_any_valid_move(!engine.current_player()));
                prop_assert_eq!(engine.outcome(), Some(engine.score().outcome()));
            }
        }
    }

    /// A full random game always terminates.
    #[test]
    fn playouts_finish(seed in any::<u64>()) {
        let engine = random_engine(seed, 64);
        prop_assert_eq!(engine.status(), GameStatus::Over);
        prop_assert!(engine.moves_played() <= 60);
    }

    #[test]
    fn reset_is_idempotent(seed in any::<u64>(), max_moves in 0..70usize) {
        let mut engine = random_engine(seed, max_moves);
        engine.reset();
        prop_assert_eq!(&engine, &GameEngine::new());
        engine.reset();
        prop_assert_eq!(&engine, &GameEngine::new());
    }

    #[test]
    fn state_restores_engine(seed in any::<u64>(), max_moves in 0..70usize) {
        let engine = random_engine(seed, max_moves);
        let restored = GameEngine::from_state(engine.state()).unwrap();
        prop_assert_eq!(&restored, &engine);
        prop_assert_eq!(restored.valid_moves(), engine.valid_moves());
    }
}
