//! Linear undo/redo over board snapshots.
//!
//! One growable sequence of snapshots plus a cursor, rather than two
//! stacks: recording past a rewound cursor truncates the redo branch in
//! one amortized O(1) step.

use tracing::trace;

use crate::board::Board;
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct GameHistory {
    snapshots: Vec<Board>,
    cursor: usize,
}

impl GameHistory {
    /// Starts a history containing only `initial`.
    pub fn new(initial: Board) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
        }
    }

    /// Appends a snapshot after the cursor, discarding any redo branch.
    pub fn record(&mut self, snapshot: Board) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        self.cursor += 1;
        trace!(cursor = self.cursor, len = self.snapshots.len(), "snapshot recorded");
    }

    /// Steps back one snapshot. Fails with [`Error::NoHistory`] at the
    /// initial state.
    pub fn undo(&mut self) -> Result<&Board> {
        if self.cursor == 0 {
            return Err(Error::NoHistory);
        }
        self.cursor -= 1;
        trace!(cursor = self.cursor, "undo");
        Ok(&self.snapshots[self.cursor])
    }

    /// Steps forward one snapshot. Fails with [`Error::NoFuture`] at the
    /// newest one.
    pub fn redo(&mut self) -> Result<&Board> {
        if self.cursor + 1 == self.snapshots.len() {
            return Err(Error::NoFuture);
        }
        self.cursor += 1;
        trace!(cursor = self.cursor, "redo");
        Ok(&self.snapshots[self.cursor])
    }

    /// Drops everything but the initial snapshot.
    pub fn reset(&mut self) {
        self.snapshots.truncate(1);
        self.cursor = 0;
    }

    /// Snapshot under the cursor.
    pub fn current(&self) -> &Board {
        &self.snapshots[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of recorded snapshots, never below 1.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }
}
