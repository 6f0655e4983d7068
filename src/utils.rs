//! Limits, delay bounds and small sizing helpers.
//!
//! The engine itself never refuses work; these values only tell callers when
//! a table is too large to show cell by cell, or too large to allocate at all.

/// Above this many cells a presentation layer should suppress the full grid.
pub const DEFAULT_RENDER_CELL_LIMIT: usize = 250_000;

/// Above this many cells [`crate::solve::solve`] switches to linear space.
///
/// 25M `u32` cells is roughly 100 MiB of table.
pub const DEFAULT_TABLE_CELL_LIMIT: usize = 25_000_000;

/// Minimum number of cells before `compute_all` fills by wavefront.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 65_536;

/// Fastest allowed auto-run cadence, in milliseconds per cell.
pub const MIN_STEP_DELAY_MS: u64 = 10;

/// Slowest allowed auto-run cadence, in milliseconds per cell.
pub const MAX_STEP_DELAY_MS: u64 = 500;

/// Auto-run cadence used when the caller has no preference.
pub const DEFAULT_STEP_DELAY_MS: u64 = 80;

/// Number of fillable cells (`m * n`) for sequences of length `m` and `n`.
///
/// Saturates instead of overflowing so that absurd inputs still compare as
/// "over the limit".
#[inline]
pub fn cell_count(m: usize, n: usize) -> usize {
    m.saturating_mul(n)
}

/// True when an `m × n` grid has cells and more of them than `limit`.
#[inline]
pub fn exceeds_cell_limit(m: usize, n: usize, limit: usize) -> bool {
    m > 0 && n > 0 && cell_count(m, n) > limit
}
