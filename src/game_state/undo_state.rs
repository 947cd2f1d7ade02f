use crate::game_state::chess_types::*;

/// Irreversible state captured before a move so `undo_move` can restore it.
///
/// Board contents are not stored: the move itself records the moved and
/// captured pieces, which is enough to rebuild the prior board exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
    pub prev_halfmove_clock: u16,
}
