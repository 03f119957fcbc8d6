//! Othello position representation and move execution.
//!
//! A [`Position`] is an immutable snapshot: it owns its board, the side
//! to move, and the legal-move set for that side, computed eagerly at
//! construction. Applying a move or a pass builds a fresh successor;
//! no position is ever mutated in place. Successors form a chain during
//! a playout and superseded positions are simply dropped.

use crate::board::{Board, DIRECTIONS, Disc, reversed, step};
use crate::constants::CELLS;

/// An Othello position: board, side to move, and that side's legal moves.
#[derive(Clone)]
pub struct Position {
    board: Board,
    to_move: Disc,
    legal_moves: Vec<usize>,
}

impl Position {
    /// Build a position from a board and the side to move.
    ///
    /// The legal-move set is scanned over all 64 cells and collected in
    /// ascending index order.
    pub fn new(board: Board, to_move: Disc) -> Self {
        let legal_moves = (0..CELLS)
            .filter(|&idx| is_legal_move(&board, idx, to_move))
            .collect();
        Position {
            board,
            to_move,
            legal_moves,
        }
    }

    /// The standard opening position, Black to move.
    pub fn initial() -> Self {
        Position::new(Board::opening(), Disc::Black)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Disc {
        self.to_move
    }

    /// Legal move indices for the side to move, in ascending order.
    pub fn legal_moves(&self) -> &[usize] {
        &self.legal_moves
    }

    /// Apply a move from the legal set and hand the turn to the opponent.
    ///
    /// The mover's disc is placed at `move_index` and every run of
    /// opponent discs bracketed between it and another of the mover's
    /// discs is flipped. The caller handles forced passes; this method
    /// never passes implicitly.
    pub fn apply_move(&self, move_index: usize) -> Position {
        debug_assert!(
            self.legal_moves.contains(&move_index),
            "move {move_index} is not in the legal set"
        );
        let mover = self.to_move;
        let opponent = mover.opponent();
        let mut board = self.board;
        board.place(move_index, mover);

        for dir in DIRECTIONS {
            // Walk outward over discs; only a run terminated by one of
            // the mover's own discs flips.
            let mut idx = move_index;
            loop {
                let Some(next) = step(idx, dir) else { break };
                match board.get(next) {
                    None => break,
                    Some(d) if d == mover => {
                        // Walk back toward the origin, flipping the run.
                        // The walk stops at the first non-opponent cell,
                        // which is the disc just placed.
                        let back = reversed(dir);
                        let mut run = next;
                        while let Some(prev) = step(run, back) {
                            if board.get(prev) != Some(opponent) {
                                break;
                            }
                            board.place(prev, mover);
                            run = prev;
                        }
                        break;
                    }
                    Some(_) => idx = next,
                }
            }
        }

        Position::new(board, opponent)
    }

    /// Forced pass: the same board with the other side to move.
    pub fn pass(&self) -> Position {
        Position::new(self.board, self.to_move.opponent())
    }

    /// True when neither side has a legal move on this board.
    pub fn is_terminal(&self) -> bool {
        self.legal_moves.is_empty() && self.pass().legal_moves.is_empty()
    }

    /// Terminal score of the board, positive favoring Black.
    ///
    /// The winner is credited with every empty cell, so the magnitude is
    /// `64 - 2 * loser`, up to 64 when the loser has no discs. A drawn
    /// board scores zero.
    pub fn value(&self) -> i32 {
        let (black, white) = self.board.counts();
        if black > white {
            CELLS as i32 - 2 * white
        } else if white > black {
            2 * black - CELLS as i32
        } else {
            0
        }
    }
}

/// Test whether `player` may move at `idx`.
///
/// The cell must be empty and at least one direction must hold a
/// contiguous run of opponent discs closed by one of `player`'s own.
pub fn is_legal_move(board: &Board, idx: usize, player: Disc) -> bool {
    if board.get(idx).is_some() {
        return false;
    }
    let opponent = player.opponent();
    for dir in DIRECTIONS {
        let Some(first) = step(idx, dir) else { continue };
        if board.get(first) != Some(opponent) {
            continue;
        }
        let mut i = first;
        while let Some(next) = step(i, dir) {
            match board.get(next) {
                None => break,
                Some(d) if d == player => return true,
                Some(_) => i = next,
            }
        }
    }
    false
}
