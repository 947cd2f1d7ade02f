//! Immutable record of one ply.

use std::fmt;

use crate::game_state::chess_types::*;
use crate::utils::algebraic::square_to_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

/// Special-case metadata carried by a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpecialMove {
    #[default]
    Normal,
    /// Pawn advanced two squares; opens an en-passant target for one ply.
    DoublePawnPush,
    /// Pawn captured "through" the passed square; the victim is not on `to`.
    EnPassant,
    Castle(CastleSide),
}

/// One ply. Two moves are equal iff every field matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub moved: Piece,
    pub captured: Option<Piece>,
    pub promotion: Option<PieceKind>,
    pub special: SpecialMove,
}

impl ChessMove {
    #[inline]
    pub const fn new(from: Square, to: Square, moved: Piece, captured: Option<Piece>) -> Self {
        Self {
            from,
            to,
            moved,
            captured,
            promotion: None,
            special: SpecialMove::Normal,
        }
    }

    #[inline]
    pub const fn with_promotion(mut self, kind: PieceKind) -> Self {
        self.promotion = Some(kind);
        self
    }

    #[inline]
    pub const fn with_special(mut self, special: SpecialMove) -> Self {
        self.special = special;
        self
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        matches!(self.special, SpecialMove::Castle(_))
    }

    /// Square of the captured piece; differs from `to` only for en passant.
    #[inline]
    pub fn capture_square(&self) -> Square {
        match self.special {
            SpecialMove::EnPassant => {
                (self.to as i8 - self.moved.color.pawn_push()) as Square
            }
            _ => self.to,
        }
    }
}

/// Long algebraic notation, e.g. `e2e4` or `e7e8q`.
impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let from = square_to_algebraic(self.from).map_err(|_| fmt::Error)?;
        let to = square_to_algebraic(self.to).map_err(|_| fmt::Error)?;
        write!(f, "{from}{to}")?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE_PAWN: Piece = Piece::new(Color::White, PieceKind::Pawn);
    const BLACK_PAWN: Piece = Piece::new(Color::Black, PieceKind::Pawn);

    #[test]
    fn renders_long_algebraic() {
        let push = ChessMove::new(12, 28, WHITE_PAWN, None).with_special(SpecialMove::DoublePawnPush);
        assert_eq!(push.to_string(), "e2e4");

        let promo = ChessMove::new(52, 60, WHITE_PAWN, None).with_promotion(PieceKind::Knight);
        assert_eq!(promo.to_string(), "e7e8n");
    }

    #[test]
    fn equality_covers_every_field() {
        let plain = ChessMove::new(52, 60, WHITE_PAWN, None);
        assert_ne!(plain, plain.with_promotion(PieceKind::Queen));
        assert_ne!(
            plain.with_promotion(PieceKind::Queen),
            plain.with_promotion(PieceKind::Rook)
        );
        assert_eq!(plain, ChessMove::new(52, 60, WHITE_PAWN, None));
    }

    #[test]
    fn en_passant_capture_square_is_behind_target() {
        let white_ep = ChessMove::new(36, 43, WHITE_PAWN, Some(BLACK_PAWN))
            .with_special(SpecialMove::EnPassant);
        assert_eq!(white_ep.capture_square(), 35);

        let black_ep = ChessMove::new(27, 20, BLACK_PAWN, Some(WHITE_PAWN))
            .with_special(SpecialMove::EnPassant);
        assert_eq!(black_ep.capture_square(), 28);
    }
}
