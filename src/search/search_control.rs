//! Shared cancellation and node accounting for a single search.

use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc,
};

use crate::search::board_scoring::BoardScorer;

/// Stop flag plus node counter, shared between a worker and its owner.
///
/// The search polls `should_stop` on entry to every node, so a stop request
/// takes effect within one node expansion.
#[derive(Debug, Default)]
pub struct SearchControl {
    stop: AtomicBool,
    nodes_visited: AtomicU64,
}

impl SearchControl {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    #[inline]
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn should_stop(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn add_node(&self) {
        self.add_nodes(1);
    }

    #[inline]
    pub fn add_nodes(&self, n: u64) {
        self.nodes_visited.fetch_add(n, Ordering::Relaxed);
    }

    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes_visited.load(Ordering::Relaxed)
    }
}

/// Everything a recursive search needs besides the position itself.
pub struct SearchContext<'a, S: BoardScorer> {
    pub scorer: &'a S,
    pub control: &'a SearchControl,
    pub alpha_beta: bool,
}

impl<'a, S: BoardScorer> SearchContext<'a, S> {
    pub fn new(scorer: &'a S, control: &'a SearchControl, alpha_beta: bool) -> Self {
        Self {
            scorer,
            control,
            alpha_beta,
        }
    }
}
