//! Canonical chess-rule constants and castling geometry.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Squares involved in one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlePath {
    pub right: CastlingRights,
    pub king_from: Square,
    pub king_to: Square,
    /// Square the king crosses between `king_from` and `king_to`.
    pub king_transit: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares that must be empty between king and rook.
    pub empty_mask: u64,
}

pub const fn castle_path(color: Color, side: CastleSide) -> CastlePath {
    let base: Square = match color {
        Color::White => 0,
        Color::Black => 56,
    };
    match side {
        CastleSide::KingSide => CastlePath {
            right: match color {
                Color::White => CASTLE_WHITE_KINGSIDE,
                Color::Black => CASTLE_BLACK_KINGSIDE,
            },
            king_from: base + 4,
            king_to: base + 6,
            king_transit: base + 5,
            rook_from: base + 7,
            rook_to: base + 5,
            empty_mask: (1u64 << (base + 5)) | (1u64 << (base + 6)),
        },
        CastleSide::QueenSide => CastlePath {
            right: match color {
                Color::White => CASTLE_WHITE_QUEENSIDE,
                Color::Black => CASTLE_BLACK_QUEENSIDE,
            },
            king_from: base + 4,
            king_to: base + 2,
            king_transit: base + 3,
            rook_from: base,
            rook_to: base + 3,
            empty_mask: (1u64 << (base + 1)) | (1u64 << (base + 2)) | (1u64 << (base + 3)),
        },
    }
}

/// Rights forfeited when a move starts on or lands on `square`.
///
/// Moving the king off its home square drops both of its rights; moving a rook
/// off, or capturing a rook on, its corner drops that side's right.
#[inline]
pub const fn rights_touched_by(square: Square) -> CastlingRights {
    match square {
        0 => CASTLE_WHITE_QUEENSIDE,
        4 => CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE,
        7 => CASTLE_WHITE_KINGSIDE,
        56 => CASTLE_BLACK_QUEENSIDE,
        60 => CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE,
        63 => CASTLE_BLACK_KINGSIDE,
        _ => 0,
    }
}
