//! Search configuration threaded explicitly into every search call.

use std::fmt;
use std::str::FromStr;

use crate::errors::ChessError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchAlgorithm {
    #[default]
    Minimax,
    Negamax,
}

impl FromStr for SearchAlgorithm {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" => Ok(Self::Minimax),
            "negamax" => Ok(Self::Negamax),
            _ => Err(ChessError::UnknownOption {
                kind: "algorithm",
                value: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Minimax => "minimax",
            Self::Negamax => "negamax",
        })
    }
}

/// Difficulty presets; the discriminant is the search depth in plies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy = 2,
    #[default]
    Medium = 3,
    Hard = 4,
}

impl Difficulty {
    #[inline]
    pub const fn depth(self) -> u8 {
        self as u8
    }
}

impl FromStr for Difficulty {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(ChessError::UnknownOption {
                kind: "difficulty",
                value: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
    pub algorithm: SearchAlgorithm,
    /// Score-preserving pruning; the chosen move is identical either way.
    pub alpha_beta: bool,
}

impl SearchConfig {
    pub const fn new(algorithm: SearchAlgorithm, difficulty: Difficulty) -> Self {
        Self {
            depth: difficulty.depth(),
            algorithm,
            alpha_beta: true,
        }
    }

    pub const fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    pub const fn with_alpha_beta(mut self, enabled: bool) -> Self {
        self.alpha_beta = enabled;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(SearchAlgorithm::default(), Difficulty::default())
    }
}
