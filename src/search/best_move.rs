//! Single entry point that runs the configured search algorithm on a private
//! copy of the position.

use std::time::Instant;

use log::debug;

use crate::game_state::chess_types::*;
use crate::search::board_scoring::PositionalScorer;
use crate::search::search_config::{SearchAlgorithm, SearchConfig};
use crate::search::search_control::{SearchContext, SearchControl};
use crate::search::{minimax, negamax};

/// Best move among `legal_moves` for the side to move in `game_state`.
///
/// Returns `None` when `legal_moves` is empty or `control` was stopped before
/// the search finished. `game_state` itself is never touched.
pub fn find_best_move(
    game_state: &GameState,
    legal_moves: &[ChessMove],
    config: SearchConfig,
    control: &SearchControl,
) -> Option<ChessMove> {
    if legal_moves.is_empty() {
        return None;
    }

    let started = Instant::now();
    let mut scratch = game_state.copy();
    let ctx = SearchContext::new(&PositionalScorer, control, config.alpha_beta);

    let best = match config.algorithm {
        SearchAlgorithm::Minimax => {
            minimax::find_best_move(&mut scratch, legal_moves, config.depth, &ctx)
        }
        SearchAlgorithm::Negamax => {
            negamax::find_best_move(&mut scratch, legal_moves, config.depth, &ctx)
        }
    };

    debug!(
        "{} depth {} alpha_beta {} nodes {} elapsed {:?} best {}",
        config.algorithm,
        config.depth,
        config.alpha_beta,
        control.nodes(),
        started.elapsed(),
        best.map_or_else(|| "none".to_owned(), |mv| mv.to_string()),
    );

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::search_config::Difficulty;

    const KIWIPETE_FEN: &str =
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const POSITION_3_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
    const POSITION_4_FEN: &str = "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1";

    fn search(fen: &str, config: SearchConfig) -> Option<ChessMove> {
        let mut game = GameState::from_fen(fen).expect("FEN should parse");
        let moves = game.legal_moves();
        let control = SearchControl::new();
        find_best_move(&game, &moves, config, &control)
    }

    #[test]
    fn minimax_and_negamax_choose_the_same_move() {
        let cases = [
            (crate::game_state::chess_rules::STARTING_POSITION_FEN, 3),
            (POSITION_3_FEN, 3),
            (KIWIPETE_FEN, 2),
            (POSITION_4_FEN, 2),
        ];

        for (fen, depth) in cases {
            let mut chosen = Vec::new();
            for algorithm in [SearchAlgorithm::Minimax, SearchAlgorithm::Negamax] {
                for alpha_beta in [true, false] {
                    let config = SearchConfig::new(algorithm, Difficulty::Easy)
                        .with_depth(depth)
                        .with_alpha_beta(alpha_beta);
                    chosen.push(search(fen, config).expect("a move should be found"));
                }
            }
            assert!(
                chosen.windows(2).all(|pair| pair[0] == pair[1]),
                "{fen}: {chosen:?}"
            );
        }
    }

    #[test]
    fn result_is_one_of_the_legal_moves() {
        let mut game = GameState::from_fen(KIWIPETE_FEN).expect("kiwipete should parse");
        let moves = game.legal_moves();
        let control = SearchControl::new();
        let config = SearchConfig::new(SearchAlgorithm::Negamax, Difficulty::Easy);
        let best = find_best_move(&game, &moves, config, &control).expect("a move should be found");
        assert!(moves.contains(&best));
        assert!(control.nodes() > 0);
    }

    #[test]
    fn empty_legal_set_returns_none_without_searching() {
        let game = GameState::new_game();
        let control = SearchControl::new();
        assert_eq!(find_best_move(&game, &[], SearchConfig::default(), &control), None);
        assert_eq!(control.nodes(), 0);
    }

    #[test]
    fn depth_zero_is_treated_as_one_ply() {
        let config = SearchConfig::default().with_depth(0);
        let best = search("4k3/8/8/3q4/8/8/8/3QK3 w - - 0 1", config);
        assert_eq!(best.map(|mv| mv.to_string()).as_deref(), Some("d1d5"));
    }
}
