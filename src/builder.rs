use crate::error::LcsError;
use crate::utils::{DEFAULT_PARALLEL_THRESHOLD, DEFAULT_RENDER_CELL_LIMIT};
use crate::LcsEngine;

/// Configures an [`LcsEngine`] before use.
///
/// ```
/// use lcs_stepper::LcsEngineBuilder;
///
/// let mut engine = LcsEngineBuilder::new()
///     .render_cell_limit(10_000)
///     .build()
///     .unwrap();
/// engine.set_sequences("ABCBDAB", "BDCAB");
/// engine.compute_all();
/// assert_eq!(engine.lcs_len(), Some(4));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LcsEngineBuilder {
    render_cell_limit: Option<usize>,
    parallel_threshold: Option<usize>,
}

impl LcsEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell count above which [`LcsEngine::exceeds_render_limit`] reports true.
    pub fn render_cell_limit(mut self, cells: usize) -> Self {
        self.render_cell_limit = Some(cells);
        self
    }

    /// Cell count from which `compute_all` fills by parallel wavefront.
    /// Only consulted with the `parallel` feature.
    pub fn parallel_threshold(mut self, cells: usize) -> Self {
        self.parallel_threshold = Some(cells);
        self
    }

    pub fn build(self) -> Result<LcsEngine, LcsError> {
        let render = self.render_cell_limit.unwrap_or(DEFAULT_RENDER_CELL_LIMIT);
        if render == 0 {
            return Err(LcsError::ZeroCellLimit {
                name: "render_cell_limit",
            });
        }
        let parallel = self.parallel_threshold.unwrap_or(DEFAULT_PARALLEL_THRESHOLD);
        if parallel == 0 {
            return Err(LcsError::ZeroCellLimit {
                name: "parallel_threshold",
            });
        }
        Ok(LcsEngine::with_limits(render, parallel))
    }
}
