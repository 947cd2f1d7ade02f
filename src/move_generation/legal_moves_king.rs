//! Pseudo-legal king steps plus castling.

use crate::game_state::chess_rules::castle_path;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_moves_pieces::push_attack_targets;
use crate::moves::attack_tables::king_attacks;

pub fn generate_king_moves(game_state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    push_attack_targets(game_state, from, PieceKind::King, king_attacks(from), out);
    generate_castling_moves(game_state, from, out);
}

/// Castling requires the right, an empty path, the rook on its corner, and a
/// king that is not in check and does not pass through or land on an
/// attacked square.
fn generate_castling_moves(game_state: &GameState, king_from: Square, out: &mut Vec<ChessMove>) {
    let side = game_state.side_to_move;
    let enemy = side.opposite();
    let board = &game_state.board;
    let king = Piece::new(side, PieceKind::King);
    let rook = Piece::new(side, PieceKind::Rook);

    let mut checked_origin = false;
    for castle_side in [CastleSide::KingSide, CastleSide::QueenSide] {
        let path = castle_path(side, castle_side);
        if game_state.castling_rights & path.right == 0
            || king_from != path.king_from
            || board.piece_at(path.rook_from) != Some(rook)
            || board.occupied() & path.empty_mask != 0
        {
            continue;
        }

        if !checked_origin {
            if is_square_attacked(board, king_from, enemy) {
                return;
            }
            checked_origin = true;
        }

        if is_square_attacked(board, path.king_transit, enemy)
            || is_square_attacked(board, path.king_to, enemy)
        {
            continue;
        }

        out.push(
            ChessMove::new(king_from, path.king_to, king, None)
                .with_special(SpecialMove::Castle(castle_side)),
        );
    }
}
