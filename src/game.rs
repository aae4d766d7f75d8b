//! One game session: a live board plus its history.
//!
//! The board itself does not know whose turn it is; this wrapper applies
//! the turn policy the surrounding application needs. The nominal side
//! comes from move-count parity (even means the first player, black),
//! corrected for a forced pass: when the nominal side is stalled and the
//! opponent is not, the turn goes to the opponent. An [`AiPlayer`] is an
//! alternate move source supplied by the caller, not owned here.

use tracing::debug;

use crate::ai::AiPlayer;
use crate::board::Board;
use crate::error::Result;
use crate::history::GameHistory;
use crate::types::{Position, Stone};

#[derive(Debug)]
pub struct Game {
    board: Board,
    history: GameHistory,
}

impl Game {
    /// Starts a session on a fresh `rows` x `cols` board.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let board = Board::new(rows, cols)?;
        let history = GameHistory::new(board.clone());
        Ok(Self { board, history })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Side to move: move-count parity, corrected for a forced pass.
    pub fn turn(&self) -> Stone {
        let nominal = if self.board.move_count() % 2 == 0 {
            Stone::Black
        } else {
            Stone::White
        };
        if !self.board.has_any_legal_move(nominal)
            && self.board.has_any_legal_move(nominal.opponent())
        {
            nominal.opponent()
        } else {
            nominal
        }
    }

    /// Places a stone for the side on turn and records the snapshot.
    pub fn play(&mut self, pos: Position) -> Result<Vec<Position>> {
        let stone = self.turn();
        let flips = self.board.place(pos, stone)?;
        self.history.record(self.board.clone());
        Ok(flips)
    }

    /// Lets `ai` move for the side on turn and records the snapshot.
    pub fn play_ai(&mut self, ai: &mut AiPlayer) -> Result<(Position, Vec<Position>)> {
        let stone = self.turn();
        let pos = ai.select_move(&self.board, stone)?;
        let flips = self.board.place(pos, stone)?;
        self.history.record(self.board.clone());
        Ok((pos, flips))
    }

    /// Restores the previous snapshot into the live board.
    pub fn undo(&mut self) -> Result<()> {
        self.board = self.history.undo()?.clone();
        debug!(move_count = self.board.move_count(), "undo applied");
        Ok(())
    }

    /// Restores the next snapshot into the live board.
    pub fn redo(&mut self) -> Result<()> {
        self.board = self.history.redo()?.clone();
        debug!(move_count = self.board.move_count(), "redo applied");
        Ok(())
    }

    /// Back to the starting position, dropping all history.
    pub fn reset(&mut self) {
        self.history.reset();
        self.board = self.history.current().clone();
    }

    /// The game ends when neither color has a legal move.
    pub fn is_over(&self) -> bool {
        !self.board.has_any_legal_move(Stone::Black)
            && !self.board.has_any_legal_move(Stone::White)
    }

    /// `(black, white)` stone counts.
    pub fn score(&self) -> (usize, usize) {
        (self.board.black_count(), self.board.white_count())
    }

    /// Majority color, or `None` on a draw. Meaningful once [`Game::is_over`].
    pub fn winner(&self) -> Option<Stone> {
        match self.board.black_count().cmp(&self.board.white_count()) {
            std::cmp::Ordering::Greater => Some(Stone::Black),
            std::cmp::Ordering::Less => Some(Stone::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        let board = Board::default();
        let history = GameHistory::new(board.clone());
        Self { board, history }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn black_opens_and_turns_alternate() {
        let mut game = Game::default();

        assert_eq!(game.turn(), Stone::Black);
        game.play(Position::new(2, 3)).unwrap();
        assert_eq!(game.turn(), Stone::White);
        game.play(Position::new(2, 4)).unwrap();
        assert_eq!(game.turn(), Stone::Black);
    }

    #[test]
    fn play_rejects_illegal_squares_for_the_side_on_turn() {
        let mut game = Game::default();

        let err = game.play(Position::new(0, 0)).unwrap_err();

        assert_eq!(err, Error::IllegalMove(Position::new(0, 0)));
        assert_eq!(game.board().move_count(), 0);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn undo_restores_the_previous_position() {
        let mut game = Game::default();
        let start = game.board().clone();
        game.play(Position::new(2, 3)).unwrap();

        game.undo().unwrap();

        assert_eq!(game.board(), &start);
        assert_eq!(game.turn(), Stone::Black);
    }

    #[test]
    fn redo_after_undo_replays_the_same_position() {
        let mut game = Game::default();
        game.play(Position::new(2, 3)).unwrap();
        let played = game.board().clone();

        game.undo().unwrap();
        game.redo().unwrap();

        assert_eq!(game.board(), &played);
    }

    #[test]
    fn new_move_after_undo_truncates_the_redo_branch() {
        let mut game = Game::default();
        game.play(Position::new(2, 3)).unwrap();
        game.undo().unwrap();

        game.play(Position::new(3, 2)).unwrap();

        assert_eq!(game.redo().unwrap_err(), Error::NoFuture);
    }

    #[test]
    fn reset_returns_to_the_starting_position() {
        let mut game = Game::default();
        game.play(Position::new(2, 3)).unwrap();
        game.play(Position::new(2, 4)).unwrap();

        game.reset();

        assert_eq!(game.score(), (2, 2));
        assert_eq!(game.board().move_count(), 0);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.undo().unwrap_err(), Error::NoHistory);
    }

    #[test]
    fn stalled_nominal_side_passes_the_turn() {
        // 4x4 position with 14 stones (even move count, so black is the
        // nominal side): black's only stone sits at (0,1) and neither
        // empty square closes a line for it, while white can take (0,0).
        let board: Board = serde_json::from_value(serde_json::json!({
            "rows": 4,
            "cols": 4,
            "cells": [
                "Empty", "Black", "White", "White",
                "White", "White", "White", "White",
                "White", "White", "White", "White",
                "White", "White", "White", "Empty",
            ],
            "black_count": 1,
            "white_count": 13,
            "move_count": 10,
        }))
        .unwrap();
        let game = Game {
            history: GameHistory::new(board.clone()),
            board,
        };

        assert_eq!(game.board().move_count() % 2, 0);
        assert!(!game.board().has_any_legal_move(Stone::Black));
        assert!(game.board().has_any_legal_move(Stone::White));
        assert_eq!(game.turn(), Stone::White);
        assert!(!game.is_over());
    }

    #[test]
    fn fresh_game_is_not_over_and_has_no_winner() {
        let game = Game::default();

        assert!(!game.is_over());
        assert_eq!(game.winner(), None);
        assert_eq!(game.score(), (2, 2));
    }

    #[test]
    fn ai_moves_through_the_same_board_interface() {
        use crate::ai::Heuristic;

        let mut game = Game::default();
        game.play(Position::new(2, 3)).unwrap();

        let mut ai = AiPlayer::with_seed(Heuristic::Chimpanzee, 9);
        let (pos, flips) = game.play_ai(&mut ai).unwrap();

        assert!(!flips.is_empty());
        assert!(pos.row < 8 && pos.col < 8);
        assert_eq!(game.board().move_count(), 2);
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.turn(), Stone::Black);
    }
}
