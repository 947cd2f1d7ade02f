//! Asynchronous search: a worker thread owns a copy of the position and
//! reports exactly once over a one-slot channel.
//!
//! The caller polls without blocking. Cancellation raises the worker's stop
//! flag; the live `GameState` is never shared with the worker, so nothing the
//! worker does is observable on it.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Receiver, TryRecvError};
use log::{info, warn};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::search::best_move::find_best_move;
use crate::search::search_config::SearchConfig;
use crate::search::search_control::SearchControl;
use crate::utils::self_play::{simulate_line, SimulationStep};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPoll {
    Pending,
    Found(ChessMove),
    /// Cancelled, stopped, or started with no legal moves.
    NoResult,
}

#[derive(Debug)]
pub struct SearchHandle {
    control: Arc<SearchControl>,
    receiver: Receiver<Option<ChessMove>>,
    worker: Option<JoinHandle<()>>,
    outcome: Option<SearchPoll>,
}

impl SearchHandle {
    fn finished(outcome: SearchPoll) -> Self {
        let (_, receiver) = bounded(1);
        Self {
            control: SearchControl::new(),
            receiver,
            worker: None,
            outcome: Some(outcome),
        }
    }

    /// Non-blocking check for the worker's answer.
    ///
    /// Once a result has been observed the same result is returned on every
    /// later call.
    pub fn poll(&mut self) -> SearchPoll {
        if let Some(outcome) = self.outcome {
            return outcome;
        }

        let outcome = match self.receiver.try_recv() {
            Ok(Some(mv)) => SearchPoll::Found(mv),
            Ok(None) | Err(TryRecvError::Disconnected) => SearchPoll::NoResult,
            Err(TryRecvError::Empty) => return SearchPoll::Pending,
        };
        self.settle(outcome);
        outcome
    }

    /// Stops the worker; its answer, if any arrives, is discarded.
    pub fn cancel(&mut self) {
        if self.outcome.is_none() {
            info!("cancelling search after {} nodes", self.control.nodes());
        }
        self.control.request_stop();
        self.settle(SearchPoll::NoResult);
    }

    /// Blocks until the worker reports.
    pub fn wait(&mut self) -> SearchPoll {
        if let Some(outcome) = self.outcome {
            return outcome;
        }

        let outcome = match self.receiver.recv() {
            Ok(Some(mv)) => SearchPoll::Found(mv),
            Ok(None) | Err(_) => SearchPoll::NoResult,
        };
        self.settle(outcome);
        outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn nodes(&self) -> u64 {
        self.control.nodes()
    }

    fn settle(&mut self, outcome: SearchPoll) {
        if self.outcome.is_none() {
            self.outcome = Some(outcome);
        }
        if let Some(worker) = self.worker.take() {
            if !worker.is_finished() {
                // Detach; the stop flag ends it at the next node.
                return;
            }
            if worker.join().is_err() {
                warn!("search worker panicked");
            }
        }
    }
}

impl Drop for SearchHandle {
    fn drop(&mut self) {
        self.control.request_stop();
    }
}

/// Starts a search on a worker thread and returns immediately.
///
/// An empty `legal_moves` yields a handle that already reports
/// [`SearchPoll::NoResult`].
pub fn start_search(
    game_state: &GameState,
    legal_moves: &[ChessMove],
    config: SearchConfig,
) -> SearchHandle {
    if legal_moves.is_empty() {
        return SearchHandle::finished(SearchPoll::NoResult);
    }

    let control = SearchControl::new();
    let (sender, receiver) = bounded(1);
    let worker_state = game_state.copy();
    let worker_moves = legal_moves.to_vec();
    let worker_control = Arc::clone(&control);

    info!(
        "starting {} search at depth {} over {} moves",
        config.algorithm,
        config.depth,
        legal_moves.len()
    );

    let spawned = thread::Builder::new()
        .name("search-worker".to_owned())
        .spawn(move || {
            let best = find_best_move(&worker_state, &worker_moves, config, &worker_control);
            let answer = if worker_control.should_stop() { None } else { best };
            // The receiver may already be gone after a cancel.
            let _ = sender.send(answer);
        });

    match spawned {
        Ok(worker) => SearchHandle {
            control,
            receiver,
            worker: Some(worker),
            outcome: None,
        },
        Err(err) => {
            warn!("failed to spawn search worker: {err}");
            SearchHandle::finished(SearchPoll::NoResult)
        }
    }
}

/// Owner of the live game's single in-flight search.
#[derive(Debug, Default)]
pub struct SearchHost {
    in_flight: Option<SearchHandle>,
}

impl SearchHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a search unless one is still outstanding.
    pub fn start(
        &mut self,
        game_state: &GameState,
        legal_moves: &[ChessMove],
        config: SearchConfig,
    ) -> ChessResult<()> {
        if self.is_searching() {
            return Err(ChessError::SearchInFlight);
        }
        self.in_flight = Some(start_search(game_state, legal_moves, config));
        Ok(())
    }

    /// Polls the outstanding search; a finished result is handed out once and
    /// the host becomes idle.
    pub fn poll(&mut self) -> Option<SearchPoll> {
        let handle = self.in_flight.as_mut()?;
        match handle.poll() {
            SearchPoll::Pending => Some(SearchPoll::Pending),
            outcome => {
                self.in_flight = None;
                Some(outcome)
            }
        }
    }

    pub fn cancel(&mut self) {
        if let Some(mut handle) = self.in_flight.take() {
            handle.cancel();
        }
    }

    pub fn is_searching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Plays a synchronous look-ahead line, refused while a search is
    /// outstanding so the two never compete for the live position.
    pub fn simulate(
        &self,
        game_state: &GameState,
        config: SearchConfig,
        plies: usize,
    ) -> ChessResult<Vec<SimulationStep>> {
        if self.is_searching() {
            return Err(ChessError::SearchInFlight);
        }
        Ok(simulate_line(game_state, config, plies))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::search_config::{Difficulty, SearchAlgorithm};
    use std::time::{Duration, Instant};

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

    #[test]
    fn empty_move_list_reports_no_result_immediately() {
        let game = GameState::new_game();
        let mut handle = start_search(&game, &[], SearchConfig::default());
        assert!(handle.is_finished());
        assert_eq!(handle.poll(), SearchPoll::NoResult);
    }

    #[test]
    fn worker_answers_with_a_legal_move() {
        let mut game = GameState::new_game();
        let moves = game.legal_moves();
        let config = SearchConfig::new(SearchAlgorithm::Negamax, Difficulty::Easy);
        let mut handle = start_search(&game, &moves, config);

        match handle.wait() {
            SearchPoll::Found(mv) => assert!(moves.contains(&mv)),
            other => panic!("expected a move, got {other:?}"),
        }
        assert_eq!(handle.poll(), handle.wait());
    }

    #[test]
    fn cancel_leaves_live_state_untouched() {
        let mut game = GameState::from_fen(KIWIPETE).expect("kiwipete should parse");
        let before = game.copy();
        let moves = game.legal_moves();

        let config = SearchConfig::new(SearchAlgorithm::Minimax, Difficulty::Hard);
        let mut handle = start_search(&game, &moves, config);
        handle.cancel();

        assert_eq!(handle.poll(), SearchPoll::NoResult);
        assert_eq!(handle.wait(), SearchPoll::NoResult);
        assert_eq!(game, before);
    }

    #[test]
    fn host_allows_one_search_at_a_time() {
        let mut game = GameState::new_game();
        let moves = game.legal_moves();
        let config = SearchConfig::new(SearchAlgorithm::Minimax, Difficulty::Hard);
        let mut host = SearchHost::new();

        host.start(&game, &moves, config).expect("first search should start");
        assert_eq!(
            host.start(&game, &moves, config),
            Err(ChessError::SearchInFlight)
        );

        host.cancel();
        assert!(!host.is_searching());
        assert_eq!(host.poll(), None);
        host.start(&game, &moves, config.with_depth(1))
            .expect("search should start after cancel");

        let outcome = loop {
            match host.poll() {
                Some(SearchPoll::Pending) => thread::yield_now(),
                Some(outcome) => break outcome,
                None => panic!("host lost its search"),
            }
        };
        assert!(matches!(outcome, SearchPoll::Found(mv) if moves.contains(&mv)));
        assert!(!host.is_searching());
    }

    #[test]
    fn cancel_mid_search_stops_the_worker() {
        let mut game = GameState::from_fen(KIWIPETE).expect("kiwipete should parse");
        let before = game.copy();
        let moves = game.legal_moves();

        let config =
            SearchConfig::new(SearchAlgorithm::Minimax, Difficulty::Hard).with_alpha_beta(false);
        let mut handle = start_search(&game, &moves, config);

        let deadline = Instant::now() + Duration::from_secs(10);
        while handle.nodes() == 0 {
            assert!(Instant::now() < deadline, "worker never started searching");
            thread::yield_now();
        }
        assert!(!handle.is_finished());

        handle.cancel();
        assert_eq!(handle.wait(), SearchPoll::NoResult);

        // The worker notices the stop flag at its next node and visits no more.
        thread::sleep(Duration::from_millis(50));
        let settled = handle.nodes();
        thread::sleep(Duration::from_millis(50));
        assert_eq!(handle.nodes(), settled);
        assert_eq!(game, before);
    }

    #[test]
    fn simulation_is_refused_while_searching() {
        let mut game = GameState::new_game();
        let moves = game.legal_moves();
        let config = SearchConfig::new(SearchAlgorithm::Minimax, Difficulty::Hard);
        let mut host = SearchHost::new();

        host.start(&game, &moves, config).expect("search should start");
        assert!(matches!(
            host.simulate(&game, config.with_depth(1), 2),
            Err(ChessError::SearchInFlight)
        ));
        assert!(host.is_searching());

        host.cancel();
        let steps = host
            .simulate(&game, config.with_depth(1), 2)
            .expect("idle host should simulate");
        assert_eq!(steps.len(), 2);
        assert_eq!(game, GameState::new_game());
    }
}
