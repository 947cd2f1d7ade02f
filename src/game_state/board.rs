//! 8x8 mailbox board with per-color occupancy bitboards.
//!
//! Every square always exists and holds at most one piece. All mutation goes
//! through [`Board::put`] and [`Board::take`], which keep the occupancy masks
//! in step with the mailbox.

use crate::game_state::chess_types::*;

/// Iterator over the set bits of a bitboard, lowest square first.
#[derive(Debug, Clone, Copy)]
pub struct SquareIter(pub u64);

impl Iterator for SquareIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let square = self.0.trailing_zeros() as Square;
        self.0 &= self.0 - 1;
        Some(square)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
    occupancy: [u64; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [None; 64],
            occupancy: [0; 2],
        }
    }

    pub fn starting_position() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Self::empty();
        for (file, kind) in BACK_RANK.into_iter().enumerate() {
            let file = file as Square;
            board.put(file, Piece::new(Color::White, kind));
            board.put(8 + file, Piece::new(Color::White, PieceKind::Pawn));
            board.put(48 + file, Piece::new(Color::Black, PieceKind::Pawn));
            board.put(56 + file, Piece::new(Color::Black, kind));
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square as usize]
    }

    #[inline]
    pub fn is_empty_square(&self, square: Square) -> bool {
        self.squares[square as usize].is_none()
    }

    /// Places `piece` on `square`, replacing whatever stood there.
    pub fn put(&mut self, square: Square, piece: Piece) {
        self.take(square);
        self.squares[square as usize] = Some(piece);
        self.occupancy[piece.color.index()] |= 1u64 << square;
    }

    /// Removes and returns the piece on `square`, if any.
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        let removed = self.squares[square as usize].take();
        if let Some(piece) = removed {
            self.occupancy[piece.color.index()] &= !(1u64 << square);
        }
        removed
    }

    #[inline]
    pub fn occupancy(&self, color: Color) -> u64 {
        self.occupancy[color.index()]
    }

    #[inline]
    pub fn occupied(&self) -> u64 {
        self.occupancy[0] | self.occupancy[1]
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        SquareIter(self.occupancy(color)).find(|&square| {
            self.piece_at(square)
                .is_some_and(|piece| piece.kind == PieceKind::King)
        })
    }

    /// Pieces of one color in ascending square order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        SquareIter(self.occupancy(color))
            .filter_map(move |square| self.piece_at(square).map(|piece| (square, piece)))
    }

    /// Every occupied square in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        SquareIter(self.occupied())
            .filter_map(move |square| self.piece_at(square).map(|piece| (square, piece)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_has_thirty_two_pieces() {
        let board = Board::starting_position();
        assert_eq!(board.occupied().count_ones(), 32);
        assert_eq!(board.occupancy(Color::White), 0xFFFF);
        assert_eq!(board.occupancy(Color::Black), 0xFFFF << 48);
        assert_eq!(board.king_square(Color::White), Some(4));
        assert_eq!(board.king_square(Color::Black), Some(60));
    }

    #[test]
    fn put_replaces_and_take_clears_occupancy() {
        let mut board = Board::empty();
        board.put(27, Piece::new(Color::White, PieceKind::Knight));
        board.put(27, Piece::new(Color::Black, PieceKind::Rook));

        assert_eq!(board.occupancy(Color::White), 0);
        assert_eq!(board.occupancy(Color::Black), 1u64 << 27);

        let removed = board.take(27);
        assert_eq!(removed, Some(Piece::new(Color::Black, PieceKind::Rook)));
        assert_eq!(board.occupied(), 0);
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn pieces_iterate_in_square_order() {
        let board = Board::starting_position();
        let squares: Vec<Square> = board.pieces(Color::White).map(|(sq, _)| sq).collect();
        assert_eq!(squares, (0..16).collect::<Vec<_>>());
        assert_eq!(board.iter().count(), 32);
    }
}
