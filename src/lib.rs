//! Othello-MC: a Monte Carlo playout estimator for 8x8 Othello.
//!
//! This crate estimates the expected value of the Othello opening
//! position by playing uniform-random games to completion for a fixed
//! wall-clock budget and reporting the completed-playout count together
//! with the running mean of the terminal values.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions, opening configuration, run budgets
//! - [`board`] - Discs, the 8x8 board, and directional stepping
//! - [`position`] - Immutable game state (legal moves, flips, scoring)
//! - [`playout`] - Random game simulation
//! - [`runner`] - Timed and fixed-count aggregation loops
//! - [`service`] - Line-oriented host service (warm-up + measured run)
//!
//! ## Example
//!
//! ```
//! use othello_mc::position::Position;
//! use othello_mc::runner::run_playouts;
//!
//! // Black opens with exactly four choices.
//! let opening = Position::initial();
//! assert_eq!(opening.legal_moves(), &[19, 26, 37, 44]);
//!
//! // Estimate the opening value from a small fixed sample.
//! let mut rng = fastrand::Rng::with_seed(42);
//! let stats = run_playouts(100, &mut rng);
//! assert_eq!(stats.playouts, 100);
//! assert!(stats.mean.abs() <= 64.0);
//! ```

pub mod board;
pub mod constants;
pub mod playout;
pub mod position;
pub mod runner;
pub mod service;
