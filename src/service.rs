//! Line-oriented host service.
//!
//! Each request triggers one silent warm-up run followed by one measured
//! run and answers with a single formatted line, e.g.
//! `48213 playouts with mean value 2.417`. The transport is a plain
//! text loop over stdin/stdout:
//!
//! - `run` (or `estimate`) - perform a warm-up + measured run
//! - `quit` - end the session
//!
//! Blank lines and `#` comments are skipped; anything else is answered
//! with an error line.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use crate::constants::{RUN_MS, WARMUP_MS};
use crate::runner::{RunStats, run_for};

/// Format run statistics in the host's response shape.
pub fn format_stats(stats: &RunStats) -> String {
    format!(
        "{} playouts with mean value {:.3}",
        stats.playouts, stats.mean
    )
}

/// Answers estimate requests with warm-up and measured runs.
pub struct EstimateService {
    warmup: Duration,
    budget: Duration,
    rng: fastrand::Rng,
}

impl Default for EstimateService {
    fn default() -> Self {
        Self::new()
    }
}

impl EstimateService {
    /// Service with the standard budgets: 10 ms warm-up, 1 s measured.
    pub fn new() -> Self {
        Self::with_budgets(
            Duration::from_millis(WARMUP_MS),
            Duration::from_millis(RUN_MS),
        )
    }

    pub fn with_budgets(warmup: Duration, budget: Duration) -> Self {
        EstimateService {
            warmup,
            budget,
            rng: fastrand::Rng::new(),
        }
    }

    /// Seed the playout RNG for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = fastrand::Rng::with_seed(seed);
        self
    }

    /// Answer one estimate request.
    ///
    /// The warm-up run's result is discarded; only the measured run is
    /// reported.
    pub fn estimate(&mut self) -> String {
        let _ = run_for(self.warmup, &mut self.rng);
        let stats = run_for(self.budget, &mut self.rng);
        format_stats(&stats)
    }

    /// Run the request loop, reading commands from `input` and writing
    /// one response line per request to `output`.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match line.to_lowercase().as_str() {
                "run" | "estimate" => writeln!(output, "{}", self.estimate())?,
                "quit" => break,
                other => writeln!(output, "unknown command: {other}")?,
            }
            output.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_service() -> EstimateService {
        EstimateService::with_budgets(Duration::ZERO, Duration::ZERO).with_seed(1)
    }

    #[test]
    fn test_format_stats() {
        let stats = RunStats {
            playouts: 48213,
            mean: 2.4171,
        };
        assert_eq!(format_stats(&stats), "48213 playouts with mean value 2.417");

        let zero = RunStats {
            playouts: 1,
            mean: -64.0,
        };
        assert_eq!(format_stats(&zero), "1 playouts with mean value -64.000");
    }

    #[test]
    fn test_estimate_reports_at_least_one_playout() {
        let mut service = fast_service();
        let response = service.estimate();
        let count: u64 = response
            .split_whitespace()
            .next()
            .and_then(|w| w.parse().ok())
            .expect("response starts with the playout count");
        assert!(count >= 1);
        assert!(response.contains(" playouts with mean value "));
    }

    #[test]
    fn test_run_loop_answers_each_request() {
        let mut service = fast_service();
        let input = b"# comment\n\nrun\nestimate\nquit\nrun\n" as &[u8];
        let mut output = Vec::new();
        service.run(input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        // Two answered requests; nothing after quit.
        assert_eq!(lines.len(), 2);
        for line in lines {
            assert!(
                line.contains(" playouts with mean value "),
                "unexpected line: {line}"
            );
        }
    }

    #[test]
    fn test_run_loop_reports_unknown_commands() {
        let mut service = fast_service();
        let input = b"genmove\nquit\n" as &[u8];
        let mut output = Vec::new();
        service.run(input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.trim(), "unknown command: genmove");
    }
}
