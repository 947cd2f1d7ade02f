//! Authoritative game model.
//!
//! `GameState` owns the board, side to move, castling/en-passant bookkeeping
//! and the move log. It is mutated only through [`GameState::execute_move`]
//! and [`GameState::undo_move`]; the two are exact inverses, so replaying the
//! log from the initial position always reproduces the current board.

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves_in_place;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_square: Option<Square>,
    pub(crate) halfmove_clock: u16,
    pub(crate) fullmove_number: u16,

    // Parallel stacks: entry `i` of `undo_stack` belongs to `move_log[i]`.
    pub(crate) move_log: Vec<ChessMove>,
    pub(crate) undo_stack: Vec<UndoState>,

    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// A position with no pieces, white to move and no rights.
    pub fn new_empty() -> Self {
        Self {
            board: Board::empty(),
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            move_log: Vec::new(),
            undo_stack: Vec::new(),
            checkmate: false,
            stalemate: false,
        }
    }

    /// The standard initial position.
    pub fn new_game() -> Self {
        Self {
            board: Board::starting_position(),
            castling_rights: CASTLE_ALL,
            ..Self::new_empty()
        }
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Independent deep copy; mutating either side never affects the other.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    #[inline]
    pub fn move_log(&self) -> &[ChessMove] {
        &self.move_log
    }

    #[inline]
    pub fn last_move(&self) -> Option<&ChessMove> {
        self.move_log.last()
    }

    /// Set by the most recent [`GameState::legal_moves`] call.
    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    /// Set by the most recent [`GameState::legal_moves`] call.
    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    /// Whether the side to move is currently attacked on its king square.
    #[inline]
    pub fn in_check(&self) -> bool {
        is_king_in_check(&self.board, self.side_to_move)
    }

    /// Applies `mv`, which must come from the current legal move set.
    pub fn execute_move(&mut self, mv: ChessMove) {
        make_move(self, mv);
    }

    /// Reverses the last move. No-op on an empty log.
    pub fn undo_move(&mut self) -> Option<ChessMove> {
        unmake_move(self)
    }

    /// All legal moves for the side to move, in deterministic order.
    ///
    /// Also recomputes the terminal flags: checkmate iff there are no moves
    /// and the king is attacked, stalemate iff no moves and it is not.
    pub fn legal_moves(&mut self) -> Vec<ChessMove> {
        let moves = generate_legal_moves_in_place(self);
        let in_check = self.in_check();
        self.checkmate = moves.is_empty() && in_check;
        self.stalemate = moves.is_empty() && !in_check;
        moves
    }

    /// Matches user-selected endpoints against the legal set.
    ///
    /// Promotions default to a queen when `promotion` is `None`. Returns `None`
    /// when nothing matches; the position is left untouched either way.
    pub fn find_legal_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Option<ChessMove> {
        let wanted = promotion.unwrap_or(PieceKind::Queen);
        let mut scratch = self.copy();
        generate_legal_moves_in_place(&mut scratch)
            .into_iter()
            .find(|mv| mv.from == from && mv.to == to && mv.promotion.is_none_or(|p| p == wanted))
    }
}
