//! Fixed-depth minimax: white maximizes, black minimizes, scores stay
//! white-relative throughout.
//!
//! With `alpha_beta` enabled the walk is fail-soft alpha-beta. The root keeps
//! the first move with a strictly better score, and a pruned sibling can only
//! report a bound that does not beat the current best, so the chosen move is
//! the same as with the full tree.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves_in_place;
use crate::search::board_scoring::{terminal_score, BoardScorer, SCORE_INFINITY};
use crate::search::search_control::SearchContext;

/// Best root move among `moves`, or `None` if the list is empty or the search
/// was stopped. `game_state` is restored before returning.
pub fn find_best_move<S: BoardScorer>(
    game_state: &mut GameState,
    moves: &[ChessMove],
    depth: u8,
    ctx: &SearchContext<'_, S>,
) -> Option<ChessMove> {
    let maximizing = game_state.side_to_move == Color::White;
    let child_depth = depth.max(1) - 1;
    let mut best: Option<(ChessMove, i32)> = None;

    for &mv in moves {
        let (alpha, beta) = match best {
            Some((_, score)) if ctx.alpha_beta && maximizing => (score, SCORE_INFINITY),
            Some((_, score)) if ctx.alpha_beta => (-SCORE_INFINITY, score),
            _ => (-SCORE_INFINITY, SCORE_INFINITY),
        };

        make_move(game_state, mv);
        let score = minimax(game_state, child_depth, alpha, beta, ctx);
        unmake_move(game_state);
        let score = score?;

        let improves = match best {
            None => true,
            Some((_, best_score)) if maximizing => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if improves {
            best = Some((mv, score));
        }
    }

    best.map(|(mv, _)| mv)
}

/// White-relative minimax value of `game_state` searched to `depth`.
///
/// Returns `None` once the stop flag is raised.
pub fn minimax<S: BoardScorer>(
    game_state: &mut GameState,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    ctx: &SearchContext<'_, S>,
) -> Option<i32> {
    if ctx.control.should_stop() {
        return None;
    }
    ctx.control.add_node();

    if depth == 0 {
        return Some(ctx.scorer.score(&game_state.board));
    }

    let side = game_state.side_to_move;
    let moves = generate_legal_moves_in_place(game_state);
    if moves.is_empty() {
        let in_check = is_king_in_check(&game_state.board, side);
        return Some(terminal_score(in_check, side, depth));
    }

    if side == Color::White {
        let mut best = -SCORE_INFINITY;
        for mv in moves {
            make_move(game_state, mv);
            let score = minimax(game_state, depth - 1, alpha, beta, ctx);
            unmake_move(game_state);
            best = best.max(score?);
            if ctx.alpha_beta {
                alpha = alpha.max(best);
                if alpha >= beta {
                    break;
                }
            }
        }
        Some(best)
    } else {
        let mut best = SCORE_INFINITY;
        for mv in moves {
            make_move(game_state, mv);
            let score = minimax(game_state, depth - 1, alpha, beta, ctx);
            unmake_move(game_state);
            best = best.min(score?);
            if ctx.alpha_beta {
                beta = beta.min(best);
                if alpha >= beta {
                    break;
                }
            }
        }
        Some(best)
    }
}
