//! King-safety primitives shared by move filtering, castling and scoring.

use crate::game_state::board::{Board, SquareIter};
use crate::game_state::chess_types::*;
use crate::moves::attack_tables::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks,
};

#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.king_square(color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

/// Whether any piece of `attacker_color` attacks `square`.
///
/// Each attack pattern is cast outward from the target; an attacker of the
/// matching kind sitting on that pattern attacks the target by symmetry.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    !attackers_to_square(board, square, attacker_color, true).is_empty()
}

/// Attacking pieces of `attacker_color` on `square`, stopping at the first one
/// when `first_only` is set.
pub fn attackers_to_square(
    board: &Board,
    square: Square,
    attacker_color: Color,
    first_only: bool,
) -> Vec<(Square, PieceKind)> {
    let occupied = board.occupied();
    let theirs = board.occupancy(attacker_color);
    let patterns: [(u64, &[PieceKind]); 5] = [
        (
            pawn_attacks(attacker_color.opposite(), square),
            &[PieceKind::Pawn],
        ),
        (knight_attacks(square), &[PieceKind::Knight]),
        (
            bishop_attacks(square, occupied),
            &[PieceKind::Bishop, PieceKind::Queen],
        ),
        (
            rook_attacks(square, occupied),
            &[PieceKind::Rook, PieceKind::Queen],
        ),
        (king_attacks(square), &[PieceKind::King]),
    ];

    let mut attackers = Vec::new();
    for (mask, kinds) in patterns {
        for from in SquareIter(mask & theirs) {
            let Some(piece) = board.piece_at(from) else {
                continue;
            };
            if kinds.contains(&piece.kind) {
                attackers.push((from, piece.kind));
                if first_only {
                    return attackers;
                }
            }
        }
    }
    attackers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_is_quiet() {
        let game = GameState::new_game();
        assert!(!is_king_in_check(game.board(), Color::White));
        assert!(!is_king_in_check(game.board(), Color::Black));
        // e3 is covered by the d2 and f2 pawns.
        assert!(is_square_attacked(game.board(), 20, Color::White));
        assert!(!is_square_attacked(game.board(), 28, Color::White));
    }

    #[test]
    fn double_check_lists_both_attackers() {
        let game = GameState::from_fen("4k3/8/3N4/8/8/8/8/4R1K1 b - - 0 1")
            .expect("FEN should parse");
        let attackers = attackers_to_square(game.board(), 60, Color::White, false);
        assert_eq!(attackers.len(), 2);
        assert!(attackers.contains(&(43, PieceKind::Knight)));
        assert!(attackers.contains(&(4, PieceKind::Rook)));
    }

    #[test]
    fn blocked_slider_does_not_attack() {
        let game = GameState::from_fen("4k3/4p3/8/8/8/8/8/4R1K1 b - - 0 1")
            .expect("FEN should parse");
        assert!(!is_king_in_check(game.board(), Color::Black));
    }

    #[test]
    fn missing_king_is_never_in_check() {
        let game = GameState::new_empty();
        assert!(!is_king_in_check(game.board(), Color::White));
    }
}
