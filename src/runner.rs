//! Aggregation of playout values over a wall-clock budget.
//!
//! The runner repeats independent playouts from the opening position and
//! folds each terminal value into a running mean with the single-pass
//! formula `mean += (value - mean) / playouts`, which never sums the raw
//! values and so cannot overflow over long runs.

use std::time::{Duration, Instant};

use crate::playout::random_playout;
use crate::position::Position;

/// Running tally over completed playouts.
#[derive(Copy, Clone, Debug, Default)]
pub struct RunStats {
    /// Completed playouts.
    pub playouts: u64,
    /// Running mean of the terminal values.
    pub mean: f64,
}

impl RunStats {
    /// Fold one terminal value into the tally.
    #[inline]
    fn record(&mut self, value: i32) {
        self.playouts += 1;
        self.mean += (value as f64 - self.mean) / self.playouts as f64;
    }
}

/// Run playouts from the opening position until `budget` elapses.
///
/// The deadline is checked only between playouts, and only after at
/// least one has completed, so a zero budget still counts one playout
/// and the run overshoots by at most the playout in flight.
pub fn run_for(budget: Duration, rng: &mut fastrand::Rng) -> RunStats {
    let deadline = Instant::now() + budget;
    let opening = Position::initial();
    let mut stats = RunStats::default();
    loop {
        stats.record(random_playout(&opening, rng));
        if Instant::now() >= deadline {
            return stats;
        }
    }
}

/// Run exactly `count` playouts from the opening position.
pub fn run_playouts(count: u64, rng: &mut fastrand::Rng) -> RunStats {
    let opening = Position::initial();
    let mut stats = RunStats::default();
    for _ in 0..count {
        stats.record(random_playout(&opening, rng));
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_budget_still_counts_one_playout() {
        let mut rng = fastrand::Rng::with_seed(7);
        let stats = run_for(Duration::ZERO, &mut rng);
        assert!(stats.playouts >= 1);
        assert!(stats.mean.abs() <= 64.0);
    }

    #[test]
    fn test_mean_after_one_playout_is_exact() {
        let mut rng = fastrand::Rng::with_seed(99);
        let stats = run_playouts(1, &mut rng);

        let mut replay = fastrand::Rng::with_seed(99);
        let value = random_playout(&Position::initial(), &mut replay);

        assert_eq!(stats.playouts, 1);
        assert_eq!(stats.mean, value as f64);
    }

    #[test]
    fn test_running_mean_matches_arithmetic_mean() {
        let mut rng = fastrand::Rng::with_seed(5);
        let stats = run_playouts(50, &mut rng);

        let mut replay = fastrand::Rng::with_seed(5);
        let opening = Position::initial();
        let total: i64 = (0..50)
            .map(|_| random_playout(&opening, &mut replay) as i64)
            .sum();

        let expected = total as f64 / 50.0;
        assert!(
            (stats.mean - expected).abs() < 1e-9,
            "incremental {} vs arithmetic {}",
            stats.mean,
            expected
        );
    }
}
