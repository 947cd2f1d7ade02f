//! Uniform random move selection, used when a search produces no answer.

use rand::Rng;

use crate::game_state::chess_types::ChessMove;

/// Picks a move uniformly from `legal_moves` using the thread-local RNG.
///
/// # Panics
///
/// Panics if `legal_moves` is empty; callers must check for a terminal
/// position first.
pub fn find_random_move(legal_moves: &[ChessMove]) -> ChessMove {
    find_random_move_with(&mut rand::rng(), legal_moves)
}

pub fn find_random_move_with<R: Rng + ?Sized>(rng: &mut R, legal_moves: &[ChessMove]) -> ChessMove {
    assert!(
        !legal_moves.is_empty(),
        "random fallback requires at least one legal move"
    );
    legal_moves[rng.random_range(0..legal_moves.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::GameState;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn picks_only_from_the_given_moves() {
        let mut game = GameState::new_game();
        let moves = game.legal_moves();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = HashSet::new();

        for _ in 0..400 {
            let mv = find_random_move_with(&mut rng, &moves);
            assert!(moves.contains(&mv));
            seen.insert(mv);
        }
        // 400 uniform draws over 20 moves miss one with negligible probability.
        assert_eq!(seen.len(), moves.len());
    }

    #[test]
    fn single_move_is_always_chosen() {
        let mut game = GameState::from_fen("k7/8/8/8/8/8/1r6/K7 w - - 0 1")
            .expect("FEN should parse");
        let moves = game.legal_moves();
        assert_eq!(moves.len(), 1);
        assert_eq!(find_random_move(&moves), moves[0]);
    }

    #[test]
    #[should_panic(expected = "at least one legal move")]
    fn empty_move_list_is_a_contract_violation() {
        find_random_move(&[]);
    }
}
