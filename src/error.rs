//! Error types for curtain construction and lookups.
//!
//! Stepping never fails; these errors come from checked accessors and
//! from [`CurtainConfig::validate`](crate::config::CurtainConfig::validate).

use thiserror::Error;

/// Errors reported by fallible curtain operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurtainError {
    /// A configuration value is outside the range hosts are expected to use.
    #[error("invalid config field `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
    /// Grid coordinate outside the panel.
    #[error("cell ({col}, {row}) out of bounds for a {cols}x{rows} grid")]
    CellOutOfBounds {
        col: usize,
        row: usize,
        cols: usize,
        rows: usize,
    },
    /// Particle index outside the panel's particle list.
    #[error("particle index {index} out of bounds (count: {count})")]
    ParticleOutOfBounds { index: usize, count: usize },
}
