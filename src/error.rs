//! Error types for engine configuration.
//!
//! Engine operations are infallible; only building an engine or a scheduler
//! with nonsensical settings is rejected.

use thiserror::Error;

/// Configuration error raised by [`crate::LcsEngineBuilder`] and
/// [`crate::autorun::AutoRunner`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LcsError {
    /// Auto-run delay outside the supported cadence window
    #[error("step delay {delay_ms}ms is outside {min_ms}..={max_ms}ms")]
    StepDelayOutOfRange {
        delay_ms: u64,
        min_ms: u64,
        max_ms: u64,
    },

    /// A cell limit or threshold was configured as zero
    #[error("{name} must be positive")]
    ZeroCellLimit { name: &'static str },
}

#[cfg(test)]
mod tests {
    use super::LcsError;

    #[test]
    fn messages_name_the_offending_value() {
        let err = LcsError::StepDelayOutOfRange {
            delay_ms: 3,
            min_ms: 10,
            max_ms: 500,
        };
        assert_eq!(err.to_string(), "step delay 3ms is outside 10..=500ms");

        let err = LcsError::ZeroCellLimit {
            name: "render_cell_limit",
        };
        assert_eq!(err.to_string(), "render_cell_limit must be positive");
    }
}
