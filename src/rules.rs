//! Pure flip-line scanning.
//!
//! A placement is legal iff at least one of the eight directions from the
//! target cell holds a non-empty run of opponent stones immediately
//! adjacent, closed by an own stone before the board edge or an empty
//! cell. These functions never mutate the board; [`crate::Board::place`]
//! calls [`flips_for`] once and commits the result.

use crate::board::Board;
use crate::types::{Position, Stone};

pub(crate) const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Returns every opponent stone flipped by placing `stone` at `pos`.
///
/// An empty result means the placement is illegal, either because the
/// cell is occupied or out of range, or because no direction closes a
/// flip-line.
pub fn flips_for(board: &Board, pos: Position, stone: Stone) -> Vec<Position> {
    if !target_is_empty(board, pos) {
        return Vec::new();
    }

    let mut flips = Vec::new();
    for (dr, dc) in DIRECTIONS {
        collect_line(board, pos, stone, dr, dc, &mut flips);
    }
    flips
}

/// Cheap legality check: stops at the first direction that closes a run.
pub fn is_legal(board: &Board, pos: Position, stone: Stone) -> bool {
    target_is_empty(board, pos)
        && DIRECTIONS
            .iter()
            .any(|&(dr, dc)| closes_run(board, pos, stone, dr, dc))
}

// Bounds are checked in usize before any signed cast: a huge coordinate
// must not alias onto the board through i32 truncation.
fn target_is_empty(board: &Board, pos: Position) -> bool {
    board.cell(pos).is_ok_and(|cell| cell.is_empty())
}

/// Walks one direction and appends the bracketed opponent run to `out`.
fn collect_line(
    board: &Board,
    pos: Position,
    stone: Stone,
    dr: i32,
    dc: i32,
    out: &mut Vec<Position>,
) {
    let opponent = stone.opponent();
    let mut r = pos.row as i32 + dr;
    let mut c = pos.col as i32 + dc;
    let run_start = out.len();

    loop {
        let Some(cell) = board.at(r, c) else {
            // Ran off the board without a closing stone.
            out.truncate(run_start);
            return;
        };

        match cell.stone() {
            Some(color) if color == opponent => {
                out.push(Position::new(r as usize, c as usize));
            }
            Some(_) => {
                // Own stone: the run (possibly empty) is closed; an empty
                // run contributes nothing and nothing was pushed.
                return;
            }
            None => {
                out.truncate(run_start);
                return;
            }
        }

        r += dr;
        c += dc;
    }
}

fn closes_run(board: &Board, pos: Position, stone: Stone, dr: i32, dc: i32) -> bool {
    let opponent = stone.opponent();
    let mut r = pos.row as i32 + dr;
    let mut c = pos.col as i32 + dc;
    let mut run_len = 0usize;

    loop {
        match board.at(r, c).and_then(|cell| cell.stone()) {
            Some(color) if color == opponent => run_len += 1,
            Some(_) => return run_len > 0,
            None => return false,
        }
        r += dr;
        c += dc;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn occupied_target_yields_no_flips() {
        let board = Board::default();

        assert!(flips_for(&board, Position::new(3, 3), Stone::Black).is_empty());
        assert!(!is_legal(&board, Position::new(3, 3), Stone::Black));
    }

    #[test]
    fn out_of_range_target_yields_no_flips() {
        let board = Board::default();

        assert!(flips_for(&board, Position::new(8, 0), Stone::Black).is_empty());
        assert!(!is_legal(&board, Position::new(0, 99), Stone::White));

        // A coordinate past u32::MAX must not wrap onto an in-bounds
        // square through integer truncation.
        let far = Position::new((1usize << 32) + 2, 3);
        assert!(flips_for(&board, far, Stone::Black).is_empty());
        assert!(!is_legal(&board, far, Stone::Black));
    }

    #[test]
    fn unclosed_run_contributes_nothing() {
        let board = Board::default();

        // From (2,2) the diagonal run for black covers the white stones
        // at (3,3) and (4,4) but ends on the empty (5,5), so it never
        // closes. No other direction reaches a stone at all.
        assert!(flips_for(&board, Position::new(2, 2), Stone::Black).is_empty());
        assert!(!is_legal(&board, Position::new(2, 2), Stone::Black));
    }

    #[test]
    fn opening_move_flips_exactly_the_bracketed_stone() {
        let board = Board::default();

        let flips = flips_for(&board, Position::new(2, 3), Stone::Black);

        assert_eq!(flips, vec![Position::new(3, 3)]);
        assert!(is_legal(&board, Position::new(2, 3), Stone::Black));
    }

    #[test]
    fn legality_agrees_with_flip_collection_everywhere() {
        let board = Board::default();

        for row in 0..board.rows() {
            for col in 0..board.cols() {
                let pos = Position::new(row, col);
                for stone in [Stone::Black, Stone::White] {
                    assert_eq!(
                        is_legal(&board, pos, stone),
                        !flips_for(&board, pos, stone).is_empty(),
                        "disagreement at {pos} for {stone:?}"
                    );
                }
            }
        }
    }
}
