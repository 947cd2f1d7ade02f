//! Long algebraic move text (`e2e4`, `e7e8q`) to legal moves.
//!
//! Text is resolved against the legal move set of the position, so a parsed
//! move always carries the right capture, castle and en-passant details.
//! The reverse direction is `ChessMove`'s `Display`.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

/// Resolves `text` to a legal move of `game_state`.
///
/// A missing promotion suffix selects a queen. The position is not mutated.
pub fn parse_long_algebraic(text: &str, game_state: &GameState) -> ChessResult<ChessMove> {
    let text = text.trim();
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(ChessError::NoMatchingMove(text.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    let promotion = text[4..]
        .chars()
        .next()
        .map(parse_promotion_letter)
        .transpose()?;

    game_state
        .find_legal_move(from, to, promotion)
        .ok_or_else(|| ChessError::NoMatchingMove(text.to_owned()))
}

fn parse_promotion_letter(letter: char) -> ChessResult<PieceKind> {
    PieceKind::from_letter(letter)
        .filter(|kind| PieceKind::PROMOTIONS.contains(kind))
        .ok_or(ChessError::InvalidPromotion(letter))
}
