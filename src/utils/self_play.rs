//! Synchronous look-ahead self-play.
//!
//! Both sides are played by the engine on a private copy of the position, so
//! the caller can preview the likely continuation without touching the live
//! game.

use log::debug;

use crate::game_state::chess_types::*;
use crate::search::best_move::find_best_move;
use crate::search::search_config::SearchConfig;
use crate::search::search_control::SearchControl;

/// Default number of plies played by a simulation.
pub const SIMULATION_PLIES: usize = 5;

#[derive(Debug, Clone)]
pub struct SimulationStep {
    pub chess_move: ChessMove,
    /// Position after `chess_move` was played.
    pub state: GameState,
}

/// Plays up to `plies` engine moves from `game_state`.
///
/// Stops early at checkmate or stalemate, or when the search yields nothing.
pub fn simulate_line(game_state: &GameState, config: SearchConfig, plies: usize) -> Vec<SimulationStep> {
    let mut line = game_state.copy();
    let mut steps = Vec::with_capacity(plies);

    for ply in 0..plies {
        let legal_moves = line.legal_moves();
        if legal_moves.is_empty() {
            debug!("simulation reached a terminal position after {ply} plies");
            break;
        }

        let control = SearchControl::new();
        let Some(chess_move) = find_best_move(&line, &legal_moves, config, &control) else {
            break;
        };

        line.execute_move(chess_move);
        steps.push(SimulationStep {
            chess_move,
            state: line.copy(),
        });
    }

    steps
}
