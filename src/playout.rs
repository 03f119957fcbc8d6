//! Monte Carlo playouts (random game simulation).
//!
//! A playout plays uniform-random legal moves from a starting position
//! until neither side can move, then scores the final board.

use crate::position::Position;

/// Play one random game to completion and return its terminal value.
///
/// A side with no legal move forfeits its turn; the game ends when both
/// sides are blocked in a row. Every move fills exactly one empty cell,
/// so a game from the opening finishes within 60 moves.
pub fn random_playout(start: &Position, rng: &mut fastrand::Rng) -> i32 {
    let mut state = start.clone();
    loop {
        if state.legal_moves().is_empty() {
            let passed = state.pass();
            if passed.legal_moves().is_empty() {
                return passed.value();
            }
            state = passed;
            continue;
        }
        let moves = state.legal_moves();
        let choice = moves[rng.usize(..moves.len())];
        state = state.apply_move(choice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playout_value_in_range() {
        let opening = Position::initial();
        for seed in 0..20 {
            let mut rng = fastrand::Rng::with_seed(seed);
            let value = random_playout(&opening, &mut rng);
            assert!((-64..=64).contains(&value), "seed {seed} gave {value}");
        }
    }

    #[test]
    fn test_playout_reproducible_under_fixed_seed() {
        let opening = Position::initial();
        let mut a = fastrand::Rng::with_seed(12345);
        let mut b = fastrand::Rng::with_seed(12345);
        assert_eq!(
            random_playout(&opening, &mut a),
            random_playout(&opening, &mut b)
        );
    }

    #[test]
    fn test_playout_from_terminal_position_scores_immediately() {
        use crate::board::{Board, Disc};

        let mut board = Board::empty();
        board.place(0, Disc::Black);
        let terminal = Position::new(board, Disc::White);

        let mut rng = fastrand::Rng::with_seed(0);
        assert_eq!(random_playout(&terminal, &mut rng), 64);
    }
}
