//! Steppable Longest Common Subsequence (LCS)
//!
//! This crate computes the classic O(m·n) LCS table for two character
//! sequences and lets a caller watch it being filled: all at once, one cell
//! per call, or one cell per timer tick. Once the table is complete it
//! reconstructs one LCS, the backtrace path that produced it and the matched
//! positions in each input.
//!
//! ## Core idea
//! 1. Hand two strings to an [`LcsEngine`].
//! 2. Drive it with [`LcsEngine::compute_all`], [`LcsEngine::step`] or an
//!    [`autorun::AutoRunner`].
//! 3. Read snapshots ([`LcsEngine::table`], [`LcsEngine::cursor`],
//!    [`LcsEngine::result`]) to render progress however you like.
//!
//! ## Quick start
//! ```
//! use lcs_stepper::{LcsEngine, Status};
//!
//! let mut engine = LcsEngine::new();
//! engine.initialize("ABCBDAB", "BDCAB");
//! while engine.step() {}
//! assert_eq!(engine.status(), Status::Done);
//! let result = engine.result().unwrap();
//! assert_eq!(result.lcs, "BCAB");
//! assert_eq!(engine.table().corner(), 4);
//! ```
//!
//! ## Large inputs
//! Tables grow as `m × n`. [`LcsEngine::exceeds_render_limit`] tells a UI
//! when to stop drawing the grid, and [`solve::solve`] falls back to the
//! linear-space solver in [`linear`] when a table would not fit in memory.
//!
//! ## Features
//! - `tracing` (default): spans and events via the `tracing` crate.
//! - `parallel`: wavefront fill on rayon for large `compute_all` calls.

pub mod autorun;
pub mod backtrace;
pub mod builder;
pub mod engine;
pub mod error;
pub mod linear;
pub mod solve;
pub mod table;
pub mod utils;

pub use crate::backtrace::{BacktrackCell, Backtrace};
pub use crate::builder::LcsEngineBuilder;
pub use crate::engine::{CellState, Cursor, LcsEngine, Status};
pub use crate::error::LcsError;
pub use crate::solve::{solve, Solution, Strategy};
pub use crate::table::DpTable;
