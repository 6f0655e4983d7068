//! Steppable LCS engine.
//!
//! The engine owns two character sequences, their DP table, a fill cursor and
//! (once the table is complete) the reconstructed result. It can be driven
//! three ways:
//! 1. [`LcsEngine::compute_all`] fills the whole table in one call.
//! 2. [`LcsEngine::step`] fills exactly one cell per call.
//! 3. An external scheduler such as [`crate::autorun::AutoRunner`] calls
//!    `step` on a timer while the engine is [`Status::Running`].
//!
//! All three produce the same table and the same [`Backtrace`].
//!
//! Calls that make no sense in the current state (stepping a finished engine,
//! re-initializing mid-run) are ignored rather than reported, so a UI can
//! forward button presses without guarding them.

use std::time::{Duration, Instant};

use crate::backtrace::{backtrace, Backtrace};
use crate::table::{compute_cell, fill_row_major, DpTable};
use crate::utils::{
    cell_count, exceeds_cell_limit, DEFAULT_PARALLEL_THRESHOLD, DEFAULT_RENDER_CELL_LIMIT,
};

/// Lifecycle of an [`LcsEngine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// No table; sequences may be edited freely.
    Idle,
    /// Table allocated, filled up to the cursor, advanced by explicit steps.
    Stepping,
    /// Like `Stepping`, but a scheduler is advancing the cursor.
    Running,
    /// Table complete and backtrace available.
    Done,
}

impl Status {
    /// True while a partially filled table exists.
    pub fn is_active(self) -> bool {
        matches!(self, Status::Stepping | Status::Running)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::Stepping => "stepping",
            Status::Running => "running",
            Status::Done => "done",
        }
    }
}

/// Next cell to fill. `(m+1, 1)` is the terminal position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

/// How a presentation layer should show one table cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Not yet computed.
    Pending,
    /// Computed, or part of the zero base row/column.
    Filled,
    /// The cell the next step will compute.
    Current,
    /// On the backtrace walk, characters differ.
    OnPath,
    /// On the backtrace walk, characters match.
    Matched,
}

/// Dynamic-programming LCS engine with incremental fill.
#[derive(Clone, Debug)]
pub struct LcsEngine {
    x: Vec<char>,
    y: Vec<char>,
    table: DpTable,
    cursor: Option<Cursor>,
    status: Status,
    result: Option<Backtrace>,
    compute_time: Option<Duration>,
    render_cell_limit: usize,
    parallel_threshold: usize,
}

impl Default for LcsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LcsEngine {
    /// Idle engine with empty sequences and default limits.
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_RENDER_CELL_LIMIT, DEFAULT_PARALLEL_THRESHOLD)
    }

    pub(crate) fn with_limits(render_cell_limit: usize, parallel_threshold: usize) -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
            table: DpTable::default(),
            cursor: None,
            status: Status::Idle,
            result: None,
            compute_time: None,
            render_cell_limit,
            parallel_threshold,
        }
    }

    /// Replace both sequences. Any computation in progress or finished is
    /// discarded first.
    pub fn set_sequences(&mut self, x: &str, y: &str) {
        if self.status != Status::Idle {
            self.reset();
        }
        self.x = x.chars().collect();
        self.y = y.chars().collect();
    }

    /// Start a fresh computation for `x` and `y`.
    ///
    /// Allocates a zeroed table, puts the cursor at `(1,1)` and clears any
    /// previous result. Empty inputs finish immediately with an empty LCS.
    /// Ignored while a computation is `Stepping` or `Running`; returns the
    /// resulting status either way.
    pub fn initialize(&mut self, x: &str, y: &str) -> Status {
        if self.status.is_active() {
            #[cfg(feature = "tracing")]
            tracing::debug!(status = self.status.as_str(), "initialize ignored mid-run");
            return self.status;
        }
        self.x = x.chars().collect();
        self.y = y.chars().collect();
        self.begin();
        self.status
    }

    /// Fill the cell under the cursor and advance it in row-major order.
    ///
    /// Returns `true` while cells remain. When the last cell is filled the
    /// backtrace runs, the engine becomes [`Status::Done`] and `false` is
    /// returned. Outside `Stepping`/`Running` this does nothing and returns
    /// `false`.
    pub fn step(&mut self) -> bool {
        let Some(cursor) = self.cursor.filter(|_| self.status.is_active()) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(status = self.status.as_str(), "step ignored");
            return false;
        };

        compute_cell(&mut self.table, &self.x, &self.y, cursor.row, cursor.col);

        let mut next = Cursor {
            row: cursor.row,
            col: cursor.col + 1,
        };
        if next.col > self.y.len() {
            next.row += 1;
            next.col = 1;
        }
        self.cursor = Some(next);

        if next.row > self.x.len() {
            self.finish();
            false
        } else {
            true
        }
    }

    /// Recompute everything for the current sequences in one call.
    ///
    /// Works from any state; an in-progress step or auto-run is abandoned.
    /// The fill time is available afterwards from [`Self::compute_time`].
    pub fn compute_all(&mut self) {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("compute_all", rows = self.x.len(), cols = self.y.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let started = Instant::now();
        self.table = DpTable::zeroed(self.x.len(), self.y.len());
        self.result = None;
        self.fill_table();
        self.compute_time = Some(started.elapsed());
        self.finish();
    }

    /// Discard the table, cursor, result and timing; return to `Idle`.
    ///
    /// The sequences are kept.
    pub fn reset(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(from = self.status.as_str(), "reset");
        self.table = DpTable::default();
        self.cursor = None;
        self.result = None;
        self.compute_time = None;
        self.status = Status::Idle;
    }

    /// Manual "step" action.
    ///
    /// From `Idle`/`Done` this starts a new computation without filling a
    /// cell. From `Stepping` it fills one cell. From `Running` it pauses and
    /// then fills one cell.
    pub fn advance(&mut self) -> Status {
        match self.status {
            Status::Idle | Status::Done => self.begin(),
            Status::Running => {
                self.pause();
                self.step();
            }
            Status::Stepping => {
                self.step();
            }
        }
        self.status
    }

    /// Hand the cursor to a scheduler.
    ///
    /// From `Idle`/`Done` a new computation is started first. Returns whether
    /// the engine is now `Running`; trivially empty inputs go straight to
    /// `Done` and return `false`.
    pub fn start_auto_run(&mut self) -> bool {
        if matches!(self.status, Status::Idle | Status::Done) {
            self.begin();
        }
        if self.status == Status::Stepping {
            #[cfg(feature = "tracing")]
            tracing::debug!("auto-run started");
            self.status = Status::Running;
        }
        self.status == Status::Running
    }

    /// `Running → Stepping`; no-op otherwise.
    pub fn pause(&mut self) {
        if self.status == Status::Running {
            #[cfg(feature = "tracing")]
            tracing::debug!(cursor = ?self.cursor, "paused");
            self.status = Status::Stepping;
        }
    }

    /// Pause when running, otherwise [`Self::start_auto_run`].
    pub fn toggle_auto_run(&mut self) -> Status {
        if self.status == Status::Running {
            self.pause();
        } else {
            self.start_auto_run();
        }
        self.status
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Current table. Empty while idle.
    pub fn table(&self) -> &DpTable {
        &self.table
    }

    /// Next cell to fill, `None` while idle.
    pub fn cursor(&self) -> Option<Cursor> {
        self.cursor
    }

    /// Backtrace result once `Done`.
    pub fn result(&self) -> Option<&Backtrace> {
        self.result.as_ref()
    }

    /// LCS length once `Done`.
    pub fn lcs_len(&self) -> Option<u32> {
        self.result.as_ref().map(|_| self.table.corner())
    }

    pub fn sequence_x(&self) -> &[char] {
        &self.x
    }

    pub fn sequence_y(&self) -> &[char] {
        &self.y
    }

    /// Wall-clock fill time of the last [`Self::compute_all`]. Stepped and
    /// auto-run fills are paced by the caller and are not timed.
    pub fn compute_time(&self) -> Option<Duration> {
        self.compute_time
    }

    /// Number of cells (excluding the base row/column) in the table.
    pub fn total_cells(&self) -> usize {
        cell_count(self.x.len(), self.y.len())
    }

    /// Number of non-base cells filled so far.
    pub fn filled_cells(&self) -> usize {
        match (self.status, self.cursor) {
            (Status::Done, _) => self.total_cells(),
            (Status::Idle, _) | (_, None) => 0,
            (_, Some(c)) => (c.row - 1) * self.y.len() + (c.col - 1),
        }
    }

    /// True when the table is too large to show cell by cell.
    ///
    /// The engine still computes such tables; this only advises the caller.
    pub fn exceeds_render_limit(&self) -> bool {
        exceeds_cell_limit(self.x.len(), self.y.len(), self.render_cell_limit)
    }

    pub fn render_cell_limit(&self) -> usize {
        self.render_cell_limit
    }

    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Display classification of `(i, j)`, or `None` outside the table.
    pub fn cell_state(&self, i: usize, j: usize) -> Option<CellState> {
        self.table.try_get(i, j)?;
        if let Some(c) = self.cursor {
            if self.status.is_active() && c.row == i && c.col == j {
                return Some(CellState::Current);
            }
        }
        if let Some(result) = self.result.as_ref() {
            if result.matches_at(i, j) {
                return Some(CellState::Matched);
            }
            if result.visits(i, j) {
                return Some(CellState::OnPath);
            }
        }
        Some(if self.is_filled(i, j) {
            CellState::Filled
        } else {
            CellState::Pending
        })
    }

    fn is_filled(&self, i: usize, j: usize) -> bool {
        if self.status == Status::Done || i == 0 || j == 0 {
            return true;
        }
        match self.cursor {
            Some(c) => i < c.row || (i == c.row && j < c.col),
            None => false,
        }
    }

    /// Fresh table from the stored sequences, status `Stepping` (or `Done`
    /// for empty input).
    fn begin(&mut self) {
        let (m, n) = (self.x.len(), self.y.len());
        self.table = DpTable::zeroed(m, n);
        self.result = None;
        self.compute_time = None;
        #[cfg(feature = "tracing")]
        tracing::debug!(rows = m, cols = n, "initialized");
        if m == 0 || n == 0 {
            self.finish();
        } else {
            self.cursor = Some(Cursor { row: 1, col: 1 });
            self.status = Status::Stepping;
        }
    }

    fn fill_table(&mut self) {
        #[cfg(feature = "parallel")]
        {
            if self.total_cells() >= self.parallel_threshold {
                crate::table::fill_wavefront(&mut self.table, &self.x, &self.y);
                return;
            }
        }
        fill_row_major(&mut self.table, &self.x, &self.y);
    }

    fn finish(&mut self) {
        self.cursor = Some(Cursor {
            row: self.x.len() + 1,
            col: 1,
        });
        let result = backtrace(&self.table, &self.x, &self.y);
        #[cfg(feature = "tracing")]
        tracing::debug!(lcs_len = result.len(), path_len = result.path.len(), "done");
        self.result = Some(result);
        self.status = Status::Done;
    }
}
