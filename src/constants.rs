//! Constants for board dimensions, the opening configuration, and run budgets.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board side length. Othello is always played on an 8x8 board.
pub const N: usize = 8;

/// Total number of cells, indexed 0..64 in row-major order.
pub const CELLS: usize = N * N;

// =============================================================================
// Opening Configuration
// =============================================================================

/// Centre cells holding White discs at the start of the game.
pub const OPENING_WHITE: [usize; 2] = [27, 36];

/// Centre cells holding Black discs at the start of the game.
pub const OPENING_BLACK: [usize; 2] = [28, 35];

/// Upper bound on moves in one game: each move fills exactly one of the
/// 60 cells left empty after the opening.
pub const MAX_GAME_LEN: usize = CELLS - 4;

// =============================================================================
// Run Budgets
// =============================================================================

/// Warm-up run budget in milliseconds. The warm-up result is discarded
/// so that one-time initialization costs stay out of the measured run.
pub const WARMUP_MS: u64 = 10;

/// Measured run budget in milliseconds.
pub const RUN_MS: u64 = 1000;
