//! Make/unmake pair operating on a single mutable `GameState`.
//!
//! `unmake_move` is the exact inverse of `make_move`: board, castling rights,
//! en-passant target, clocks and side to move are restored bit-for-bit.

use crate::game_state::chess_rules::{castle_path, rights_touched_by};
use crate::game_state::chess_types::*;

/// Applies a move without validating it.
pub fn make_move(game_state: &mut GameState, mv: ChessMove) {
    let mover = mv.moved.color;

    game_state.undo_stack.push(UndoState {
        prev_castling_rights: game_state.castling_rights,
        prev_en_passant_square: game_state.en_passant_square,
        prev_halfmove_clock: game_state.halfmove_clock,
    });

    let board = &mut game_state.board;
    board.take(mv.from);
    if mv.is_capture() {
        board.take(mv.capture_square());
    }
    let placed = Piece::new(mover, mv.promotion.unwrap_or(mv.moved.kind));
    board.put(mv.to, placed);

    if let SpecialMove::Castle(side) = mv.special {
        let path = castle_path(mover, side);
        if let Some(rook) = board.take(path.rook_from) {
            board.put(path.rook_to, rook);
        }
    }

    game_state.castling_rights &= !(rights_touched_by(mv.from) | rights_touched_by(mv.to));
    game_state.en_passant_square = match mv.special {
        SpecialMove::DoublePawnPush => Some((mv.from + mv.to) / 2),
        _ => None,
    };

    if mv.moved.kind == PieceKind::Pawn || mv.is_capture() {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
    }
    if mover == Color::Black {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }

    game_state.side_to_move = mover.opposite();
    game_state.move_log.push(mv);
    game_state.checkmate = false;
    game_state.stalemate = false;
}

/// Reverts the most recent move; returns `None` when the log is empty.
pub fn unmake_move(game_state: &mut GameState) -> Option<ChessMove> {
    let mv = game_state.move_log.pop()?;
    let undo = game_state.undo_stack.pop()?;
    let mover = mv.moved.color;

    let board = &mut game_state.board;
    if let SpecialMove::Castle(side) = mv.special {
        let path = castle_path(mover, side);
        if let Some(rook) = board.take(path.rook_to) {
            board.put(path.rook_from, rook);
        }
    }

    board.take(mv.to);
    board.put(mv.from, mv.moved);
    if let Some(captured) = mv.captured {
        board.put(mv.capture_square(), captured);
    }

    game_state.castling_rights = undo.prev_castling_rights;
    game_state.en_passant_square = undo.prev_en_passant_square;
    game_state.halfmove_clock = undo.prev_halfmove_clock;
    if mover == Color::Black {
        game_state.fullmove_number = game_state.fullmove_number.saturating_sub(1);
    }

    game_state.side_to_move = mover;
    game_state.checkmate = false;
    game_state.stalemate = false;

    Some(mv)
}
