//! Static position scoring.
//!
//! Scores are centipawns from white's point of view: positive favours white,
//! negative favours black. Search code converts to side-relative scores where
//! it needs them (see `negamax`).

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// Base score for a side with no legal moves while in check.
///
/// Search adds the remaining depth so shorter mates rank above longer ones.
pub const MATE_SCORE: i32 = 100_000;
pub const SCORE_INFINITY: i32 = 1_000_000;

pub trait BoardScorer: Send + Sync {
    /// White-relative score of `board`.
    fn score(&self, board: &Board) -> i32;
}

#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 300,
        PieceKind::Bishop => 300,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 0,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board) -> i32 {
        board
            .iter()
            .map(|(_, piece)| piece.color.sign() * piece_value(piece.kind))
            .sum()
    }
}

/// Material plus piece-square bonuses.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalScorer;

impl PositionalScorer {
    /// Tables are laid out as seen from white's side: index 0 is a8.
    #[inline]
    fn square_bonus(piece: Piece, square: Square) -> i32 {
        let idx = match piece.color {
            Color::White => square ^ 56,
            Color::Black => square,
        } as usize;
        match piece.kind {
            PieceKind::Pawn => PAWN_TABLE[idx],
            PieceKind::Knight => KNIGHT_TABLE[idx],
            PieceKind::Bishop => BISHOP_TABLE[idx],
            PieceKind::Rook => ROOK_TABLE[idx],
            PieceKind::Queen => QUEEN_TABLE[idx],
            PieceKind::King => KING_TABLE[idx],
        }
    }
}

impl BoardScorer for PositionalScorer {
    fn score(&self, board: &Board) -> i32 {
        board
            .iter()
            .map(|(square, piece)| {
                piece.color.sign() * (piece_value(piece.kind) + Self::square_bonus(piece, square))
            })
            .sum()
    }
}

/// The default evaluator used by every search entry point.
#[inline]
pub fn evaluate(board: &Board) -> i32 {
    PositionalScorer.score(board)
}

/// White-relative score for a node where `side_to_move` has no legal moves.
#[inline]
pub const fn terminal_score(in_check: bool, side_to_move: Color, depth: u8) -> i32 {
    if in_check {
        -side_to_move.sign() * (MATE_SCORE + depth as i32)
    } else {
        0
    }
}

#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
     -5,  0,  5,  5,  5,  5,  0, -5,
      0,  0,  5,  5,  5,  5,  0, -5,
    -10,  5,  5,  5,  5,  5,  0,-10,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_TABLE: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     20, 20,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0, 10, 30, 20,
];
