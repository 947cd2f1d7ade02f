//! Full legal move generation pipeline.
//!
//! Phase one emits pseudo-legal moves for every piece of the side to move, in
//! ascending square order. Phase two plays each candidate on the state,
//! discards it if the mover's king is attacked afterwards, and unplays it.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_pieces::generate_piece_moves;

pub fn generate_pseudo_legal_moves(game_state: &GameState) -> Vec<ChessMove> {
    let mut out = Vec::with_capacity(64);
    for (from, piece) in game_state.board.pieces(game_state.side_to_move) {
        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(game_state, from, &mut out),
            PieceKind::King => generate_king_moves(game_state, from, &mut out),
            kind => generate_piece_moves(game_state, from, kind, &mut out),
        }
    }
    out
}

/// Legal moves, using `game_state` itself as the scratch board.
///
/// The state is returned unchanged: every trial move is unmade before the
/// next one is tried.
pub fn generate_legal_moves_in_place(game_state: &mut GameState) -> Vec<ChessMove> {
    let mover = game_state.side_to_move;
    let mut moves = generate_pseudo_legal_moves(game_state);
    moves.retain(|&mv| {
        make_move(game_state, mv);
        let safe = !is_king_in_check(&game_state.board, mover);
        unmake_move(game_state);
        safe
    });
    moves
}

/// Legal moves computed on a scratch copy of `game_state`.
pub fn generate_legal_moves(game_state: &GameState) -> Vec<ChessMove> {
    let mut scratch = game_state.copy();
    generate_legal_moves_in_place(&mut scratch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_piece_cannot_leave_the_pin_line() {
        // The e2 knight is pinned against the e1 king by the e8 rook.
        let game = GameState::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1")
            .expect("FEN should parse");
        let legal = generate_legal_moves(&game);
        assert!(!legal.iter().any(|m| m.from == 12));
        assert!(generate_pseudo_legal_moves(&game).iter().any(|m| m.from == 12));
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let game = GameState::from_fen("3rk3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let legal = generate_legal_moves(&game);
        assert!(!legal.iter().any(|m| m.to == 3 || m.to == 11));
        assert_eq!(legal.len(), 3);
    }

    #[test]
    fn check_must_be_answered() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/3PPP2/r3K3 w - - 0 1")
            .expect("FEN should parse");
        let legal = generate_legal_moves(&game);
        // Own pawns box the king in and nothing can block or capture on rank 1.
        assert!(legal.is_empty());
    }

    #[test]
    fn in_place_generation_leaves_state_untouched() {
        let mut game = GameState::new_game();
        let before = game.copy();
        let moves = generate_legal_moves_in_place(&mut game);
        assert_eq!(moves.len(), 20);
        assert_eq!(game, before);
    }

    #[test]
    fn enumeration_order_is_deterministic() {
        let game = GameState::new_game();
        assert_eq!(generate_legal_moves(&game), generate_legal_moves(&game));
        let first = generate_legal_moves(&game)[0];
        assert_eq!(first.to_string(), "b1a3");
    }
}
