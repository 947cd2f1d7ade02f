//! Fixed-depth negamax: one recursion that always maximizes for the side to
//! move and negates child scores.
//!
//! Leaf and terminal scores come from the same white-relative functions as
//! `minimax`, multiplied by the mover's sign, so both searches agree on every
//! value and therefore on the chosen move.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves_in_place;
use crate::search::board_scoring::{terminal_score, BoardScorer, SCORE_INFINITY};
use crate::search::search_control::SearchContext;

pub fn find_best_move<S: BoardScorer>(
    game_state: &mut GameState,
    moves: &[ChessMove],
    depth: u8,
    ctx: &SearchContext<'_, S>,
) -> Option<ChessMove> {
    let child_depth = depth.max(1) - 1;
    let mut best: Option<(ChessMove, i32)> = None;

    for &mv in moves {
        let alpha = match best {
            Some((_, score)) if ctx.alpha_beta => score,
            _ => -SCORE_INFINITY,
        };

        make_move(game_state, mv);
        let score = negamax(game_state, child_depth, -SCORE_INFINITY, -alpha, ctx);
        unmake_move(game_state);
        let score = -score?;

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }

    best.map(|(mv, _)| mv)
}

/// Value of `game_state` for the side to move, or `None` once stopped.
pub fn negamax<S: BoardScorer>(
    game_state: &mut GameState,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    ctx: &SearchContext<'_, S>,
) -> Option<i32> {
    if ctx.control.should_stop() {
        return None;
    }
    ctx.control.add_node();

    let side = game_state.side_to_move;
    if depth == 0 {
        return Some(side.sign() * ctx.scorer.score(&game_state.board));
    }

    let moves = generate_legal_moves_in_place(game_state);
    if moves.is_empty() {
        let in_check = is_king_in_check(&game_state.board, side);
        return Some(side.sign() * terminal_score(in_check, side, depth));
    }

    let mut best = -SCORE_INFINITY;
    for mv in moves {
        make_move(game_state, mv);
        let score = negamax(game_state, depth - 1, -beta, -alpha, ctx);
        unmake_move(game_state);
        best = best.max(-score?);
        if ctx.alpha_beta {
            alpha = alpha.max(best);
            if alpha >= beta {
                break;
            }
        }
    }
    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::board_scoring::PositionalScorer;
    use crate::search::minimax;
    use crate::search::search_control::SearchControl;

    const KIWIPETE_FEN: &str =
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

    #[test]
    fn value_is_minimax_value_seen_from_the_mover() {
        let fens = [
            KIWIPETE_FEN,
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1",
        ];
        let control = SearchControl::new();
        let ctx = SearchContext::new(&PositionalScorer, &control, false);

        for fen in fens {
            let mut game = GameState::from_fen(fen).expect("FEN should parse");
            let sign = game.side_to_move().sign();
            let nega = negamax(&mut game, 2, -SCORE_INFINITY, SCORE_INFINITY, &ctx);
            let mini = minimax::minimax(&mut game, 2, -SCORE_INFINITY, SCORE_INFINITY, &ctx);
            assert_eq!(nega, mini.map(|score| sign * score), "{fen}");
        }
    }

    #[test]
    fn pruning_keeps_the_root_value() {
        let mut game = GameState::new_game();
        let full_control = SearchControl::new();
        let pruned_control = SearchControl::new();
        let full = SearchContext::new(&PositionalScorer, &full_control, false);
        let pruned = SearchContext::new(&PositionalScorer, &pruned_control, true);

        let full_score = negamax(&mut game, 3, -SCORE_INFINITY, SCORE_INFINITY, &full);
        let pruned_score = negamax(&mut game, 3, -SCORE_INFINITY, SCORE_INFINITY, &pruned);
        assert_eq!(full_score, pruned_score);
        assert!(pruned_control.nodes() < full_control.nodes());
    }

    #[test]
    fn black_to_move_takes_the_queen() {
        let mut game = GameState::from_fen("3qk3/8/8/8/3Q4/8/8/4K3 b - - 0 1")
            .expect("FEN should parse");
        let moves = game.legal_moves();
        let control = SearchControl::new();
        let ctx = SearchContext::new(&PositionalScorer, &control, true);
        let best = find_best_move(&mut game, &moves, 3, &ctx).expect("a move should be found");
        assert_eq!(best.to_string(), "d8d4");
    }

    #[test]
    fn empty_move_list_has_no_best_move() {
        let mut game = GameState::new_game();
        let control = SearchControl::new();
        let ctx = SearchContext::new(&PositionalScorer, &control, true);
        assert_eq!(find_best_move(&mut game, &[], 2, &ctx), None);
    }
}
