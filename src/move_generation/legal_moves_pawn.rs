//! Pseudo-legal pawn moves: pushes, double steps, captures, en passant and
//! promotions (one move per promotion piece, queen first).

use crate::game_state::chess_types::*;
use crate::game_state::board::SquareIter;
use crate::moves::attack_tables::pawn_attacks;

pub fn generate_pawn_moves(game_state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    let side = game_state.side_to_move;
    let pawn = Piece::new(side, PieceKind::Pawn);
    let board = &game_state.board;

    let one_step = from as i8 + side.pawn_push();
    if (0..64).contains(&one_step) && board.is_empty_square(one_step as Square) {
        let to = one_step as Square;
        push_pawn_move(ChessMove::new(from, to, pawn, None), side, out);

        if square_rank(from) == side.pawn_start_rank() {
            let two_step = (one_step + side.pawn_push()) as Square;
            if board.is_empty_square(two_step) {
                out.push(
                    ChessMove::new(from, two_step, pawn, None)
                        .with_special(SpecialMove::DoublePawnPush),
                );
            }
        }
    }

    for to in SquareIter(pawn_attacks(side, from)) {
        match board.piece_at(to) {
            Some(victim) if victim.color != side => {
                push_pawn_move(ChessMove::new(from, to, pawn, Some(victim)), side, out);
            }
            None if game_state.en_passant_square == Some(to) => {
                let victim = Piece::new(side.opposite(), PieceKind::Pawn);
                let mv = ChessMove::new(from, to, pawn, Some(victim))
                    .with_special(SpecialMove::EnPassant);
                // The double-pushed pawn must still be standing behind the target.
                if board.piece_at(mv.capture_square()) == Some(victim) {
                    out.push(mv);
                }
            }
            _ => {}
        }
    }
}

fn push_pawn_move(mv: ChessMove, side: Color, out: &mut Vec<ChessMove>) {
    if square_rank(mv.to) == side.promotion_rank() {
        for kind in PieceKind::PROMOTIONS {
            out.push(mv.with_promotion(kind));
        }
    } else {
        out.push(mv);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pawn_moves(fen: &str, from: Square) -> Vec<ChessMove> {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&game, from, &mut out);
        out
    }

    #[test]
    fn start_pawn_has_single_and_double_push() {
        let moves = pawn_moves(crate::game_state::chess_rules::STARTING_POSITION_FEN, 12);
        assert_eq!(moves.len(), 2);
        assert_eq!(moves[1].special, SpecialMove::DoublePawnPush);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let moves = pawn_moves("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1", 12);
        assert!(moves.is_empty());
    }

    #[test]
    fn capture_promotions_expand_to_four_choices() {
        let moves = pawn_moves("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1", 48);
        assert_eq!(moves.len(), 8);
        assert_eq!(moves.iter().filter(|m| m.is_capture()).count(), 4);
        assert_eq!(moves[0].promotion, Some(PieceKind::Queen));
    }

    #[test]
    fn black_en_passant_targets_third_rank() {
        let moves = pawn_moves("4k3/8/8/8/3pP3/8/8/4K3 b - e3 0 1", 27);
        let ep: Vec<_> = moves
            .iter()
            .filter(|m| m.special == SpecialMove::EnPassant)
            .collect();
        assert_eq!(ep.len(), 1);
        assert_eq!(ep[0].to, 20);
        assert_eq!(ep[0].capture_square(), 28);
    }

    #[test]
    fn en_passant_needs_a_pawn_behind_the_target() {
        let mut game = GameState::from_fen("4k3/8/8/3Pp3/8/8/8/4K3 w - e6 0 1")
            .expect("FEN should parse");
        // Take the black pawn away while keeping the stale target square.
        game.board.take(36);

        let mut out = Vec::new();
        generate_pawn_moves(&game, 35, &mut out);
        assert!(out.iter().all(|m| m.special != SpecialMove::EnPassant));

        let before = game.copy();
        game.legal_moves();
        assert_eq!(game, before);
    }
}
