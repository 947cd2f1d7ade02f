use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use crossbeam_channel::{unbounded, RecvTimeoutError};
use log::{info, warn};

use duel_chess::errors::ChessResult;
use duel_chess::game_state::chess_types::*;
use duel_chess::search::random_fallback::find_random_move;
use duel_chess::search::search_config::{Difficulty, SearchAlgorithm, SearchConfig};
use duel_chess::search::search_host::{SearchHost, SearchPoll};
use duel_chess::utils::long_algebraic::parse_long_algebraic;
use duel_chess::utils::render_game_state::render_game_state;
use duel_chess::utils::self_play::SIMULATION_PLIES;

const POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Controller {
    Human,
    Engine,
}

/// Play chess in the terminal against the built-in engine.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Search algorithm used by the engine (minimax or negamax).
    #[arg(long, default_value = "minimax")]
    algorithm: SearchAlgorithm,

    /// Engine strength: easy, medium or hard (search depth 2, 3 or 4).
    #[arg(long, default_value = "medium")]
    difficulty: Difficulty,

    /// Start from this FEN instead of the standard position.
    #[arg(long)]
    fen: Option<String>,

    #[arg(long, value_enum, default_value_t = Controller::Human)]
    white: Controller,

    #[arg(long, value_enum, default_value_t = Controller::Engine)]
    black: Controller,

    /// Search the full tree instead of using alpha-beta pruning.
    #[arg(long)]
    no_pruning: bool,
}

struct Session {
    initial: GameState,
    game: GameState,
    legal_moves: Vec<ChessMove>,
    config: SearchConfig,
    white: Controller,
    black: Controller,
    host: SearchHost,
}

impl Session {
    fn new(initial: GameState, cli: &Cli) -> Self {
        let config = SearchConfig::new(cli.algorithm, cli.difficulty).with_alpha_beta(!cli.no_pruning);
        let mut session = Self {
            game: initial.copy(),
            initial,
            legal_moves: Vec::new(),
            config,
            white: cli.white,
            black: cli.black,
            host: SearchHost::new(),
        };
        session.refresh();
        session
    }

    fn controller_to_move(&self) -> Controller {
        match self.game.side_to_move() {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    fn has_human(&self) -> bool {
        self.white == Controller::Human || self.black == Controller::Human
    }

    fn refresh(&mut self) {
        self.legal_moves = self.game.legal_moves();
    }

    fn is_over(&self) -> bool {
        self.legal_moves.is_empty()
    }

    fn play(&mut self, mv: ChessMove) {
        println!("{:?} plays {mv}", self.game.side_to_move());
        self.game.execute_move(mv);
        self.refresh();
        self.show();
    }

    fn show(&self) {
        println!("{}", render_game_state(&self.game));
        if self.game.is_checkmate() {
            println!("Checkmate, {:?} wins.", self.game.side_to_move().opposite());
        } else if self.game.is_stalemate() {
            println!("Stalemate.");
        } else {
            let check = if self.game.in_check() { " (check)" } else { "" };
            println!("{:?} to move{check}", self.game.side_to_move());
        }
        print!("> ");
        io::stdout().flush().ok();
    }

    /// Starts, polls or finishes the engine's search when it is on move.
    fn tick_engine(&mut self) -> ChessResult<()> {
        if self.is_over() || self.controller_to_move() != Controller::Engine {
            return Ok(());
        }

        match self.host.poll() {
            None => self.host.start(&self.game, &self.legal_moves, self.config)?,
            Some(SearchPoll::Pending) => {}
            Some(SearchPoll::Found(mv)) => self.play(mv),
            Some(SearchPoll::NoResult) => {
                warn!("search produced no move, playing a random one");
                let mv = find_random_move(&self.legal_moves);
                self.play(mv);
            }
        }
        Ok(())
    }

    /// Returns `false` when the user asked to quit.
    fn handle_command(&mut self, line: &str) -> bool {
        match line.trim() {
            "" => {}
            "quit" | "exit" => return false,
            "help" => {
                println!("moves: e2e4, e7e8q | commands: undo restart sim board moves quit");
            }
            "board" => self.show(),
            "moves" => {
                let listed: Vec<String> = self.legal_moves.iter().map(ToString::to_string).collect();
                println!("{}", listed.join(" "));
            }
            "undo" => {
                self.host.cancel();
                self.game.undo_move();
                // Step back to the human's turn when playing against the engine.
                while self.has_human()
                    && self.controller_to_move() == Controller::Engine
                    && self.game.undo_move().is_some()
                {}
                self.refresh();
                self.show();
            }
            "restart" => {
                self.host.cancel();
                info!("restarting game");
                self.game = self.initial.copy();
                self.refresh();
                self.show();
            }
            "sim" => {
                let steps = match self.host.simulate(&self.game, self.config, SIMULATION_PLIES) {
                    Ok(steps) => steps,
                    Err(err) => {
                        println!("{err}; wait for the engine's move");
                        return true;
                    }
                };
                let line: Vec<String> = steps.iter().map(|s| s.chess_move.to_string()).collect();
                println!("engine line: {}", line.join(" "));
                if let Some(last) = steps.last() {
                    println!("{}", render_game_state(&last.state));
                }
            }
            text if self.controller_to_move() == Controller::Human && !self.is_over() => {
                match parse_long_algebraic(text, &self.game) {
                    Ok(mv) => self.play(mv),
                    Err(err) => println!("{err}"),
                }
            }
            _ => println!("not your move"),
        }
        true
    }
}

fn run(cli: Cli) -> ChessResult<()> {
    let initial = match &cli.fen {
        Some(fen) => GameState::from_fen(fen)?,
        None => GameState::new_game(),
    };
    let mut session = Session::new(initial, &cli);

    let (line_tx, line_rx) = unbounded::<String>();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    session.show();
    loop {
        session.tick_engine()?;

        match line_rx.recv_timeout(POLL_INTERVAL) {
            Ok(line) => {
                if !session.handle_command(&line) {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    session.host.cancel();
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
