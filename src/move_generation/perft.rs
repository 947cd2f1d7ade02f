//! Move-path enumeration used to validate the generator against reference
//! counts.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves_in_place;

/// Leaf statistics; every counter except `nodes` classifies the last ply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
}

impl PerftCounts {
    fn record_leaf(&mut self, mv: ChessMove, gives_check: bool) {
        self.nodes += 1;
        if mv.is_capture() {
            self.captures += 1;
        }
        if mv.special == SpecialMove::EnPassant {
            self.en_passant += 1;
        }
        if mv.is_castle() {
            self.castles += 1;
        }
        if mv.promotion.is_some() {
            self.promotions += 1;
        }
        if gives_check {
            self.checks += 1;
        }
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }

    let mut scratch = game_state.copy();
    perft_recurse(&mut scratch, depth, &mut counts);
    counts
}

/// Node count below each root move, in generation order.
pub fn perft_divide(game_state: &GameState, depth: u8) -> Vec<(ChessMove, usize)> {
    let mut scratch = game_state.copy();
    let root_moves = generate_legal_moves_in_place(&mut scratch);
    let mut out = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        make_move(&mut scratch, mv);
        let nodes = perft(&scratch, depth.saturating_sub(1)).nodes;
        unmake_move(&mut scratch);
        out.push((mv, nodes));
    }

    out
}

fn perft_recurse(game_state: &mut GameState, depth: u8, counts: &mut PerftCounts) {
    for mv in generate_legal_moves_in_place(game_state) {
        make_move(game_state, mv);
        if depth == 1 {
            let gives_check = is_king_in_check(&game_state.board, game_state.side_to_move);
            counts.record_leaf(mv, gives_check);
        } else {
            perft_recurse(game_state, depth - 1, counts);
        }
        unmake_move(game_state);
    }
}
