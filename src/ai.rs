//! Heuristic AI move selection.
//!
//! No search tree: both variants look one placement ahead at most. The
//! player never owns or mutates a live board; it reads the given snapshot
//! and trial-applies candidates to disposable clones.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::board::Board;
use crate::error::{Error, Result};
use crate::types::{Position, Stone};

/// Move-picking strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    /// Uniform-random choice among the legal moves.
    Monkey,
    /// Greedy: the legal move whose trial application gains the most
    /// stones. Ties go to the earliest candidate in row-major order.
    Chimpanzee,
}

/// A computer opponent for one color.
///
/// Stateless with respect to the game: every decision is a function of
/// the snapshot, the color and the RNG stream. Seed it with
/// [`AiPlayer::with_seed`] to make a whole game reproducible.
#[derive(Debug, Clone)]
pub struct AiPlayer {
    heuristic: Heuristic,
    rng: ChaCha8Rng,
}

impl AiPlayer {
    pub fn new(heuristic: Heuristic) -> Self {
        Self {
            heuristic,
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    pub fn with_seed(heuristic: Heuristic, seed: u64) -> Self {
        Self {
            heuristic,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// Picks one legal move for `stone` on the given snapshot.
    ///
    /// Fails with [`Error::NoLegalMove`] when the color cannot move; the
    /// caller decides whether that means a pass or game over.
    pub fn select_move(&mut self, board: &Board, stone: Stone) -> Result<Position> {
        let legal: Vec<Position> = board.legal_moves(stone).collect();

        let pos = match self.heuristic {
            Heuristic::Monkey => legal.choose(&mut self.rng).copied(),
            Heuristic::Chimpanzee => greediest(board, &legal, stone),
        }
        .ok_or(Error::NoLegalMove)?;

        debug!(
            heuristic = ?self.heuristic,
            stone = ?stone,
            row = pos.row,
            col = pos.col,
            candidates = legal.len(),
            "move selected"
        );

        Ok(pos)
    }
}

/// Trial-applies every candidate to a clone and keeps the one gaining
/// the most stones. Candidates arrive in row-major order, so a strict
/// `>` comparison is the documented tie-break.
fn greediest(board: &Board, legal: &[Position], stone: Stone) -> Option<Position> {
    let mut best: Option<(Position, usize)> = None;

    for &pos in legal {
        let mut trial = board.clone();
        if trial.place(pos, stone).is_err() {
            continue;
        }
        let gained = trial.stone_count(stone) - board.stone_count(stone);
        if best.is_none_or(|(_, top)| gained > top) {
            best = Some((pos, gained));
        }
    }

    best.map(|(pos, _)| pos)
}
