//! Pseudo-legal knight and slider (bishop, rook, queen) moves.

use crate::game_state::board::SquareIter;
use crate::game_state::chess_types::*;
use crate::moves::attack_tables::{bishop_attacks, knight_attacks, queen_attacks, rook_attacks};

pub fn generate_piece_moves(
    game_state: &GameState,
    from: Square,
    kind: PieceKind,
    out: &mut Vec<ChessMove>,
) {
    let occupied = game_state.board.occupied();
    let attacks = match kind {
        PieceKind::Knight => knight_attacks(from),
        PieceKind::Bishop => bishop_attacks(from, occupied),
        PieceKind::Rook => rook_attacks(from, occupied),
        PieceKind::Queen => queen_attacks(from, occupied),
        PieceKind::Pawn | PieceKind::King => return,
    };
    push_attack_targets(game_state, from, kind, attacks, out);
}

/// Emits one move per attacked square not occupied by the mover's own pieces.
pub fn push_attack_targets(
    game_state: &GameState,
    from: Square,
    kind: PieceKind,
    attacks: u64,
    out: &mut Vec<ChessMove>,
) {
    let side = game_state.side_to_move;
    let moved = Piece::new(side, kind);
    let board = &game_state.board;

    for to in SquareIter(attacks & !board.occupancy(side)) {
        out.push(ChessMove::new(from, to, moved, board.piece_at(to)));
    }
}
