//! Error types for simulation construction and editing.
//!
//! Input events never fail; only operations that create or reshape the
//! world (bodies, goal, world extent, configuration) return these.

/// Errors produced when building or editing a simulation.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SlingshotError {
    #[error("invalid body (mass {mass}, radius {radius}): both must be positive and finite")]
    InvalidBody { mass: f64, radius: f64 },

    #[error("invalid goal radius {radius} (must be positive and finite)")]
    InvalidGoal { radius: f64 },

    #[error("invalid world size {width}x{height} (must be positive and finite)")]
    InvalidWorldSize { width: f64, height: f64 },

    #[error("invalid configuration: {field} = {value}")]
    InvalidConfig { field: &'static str, value: f64 },
}

/// Returns true if `value` is finite and strictly positive.
pub(crate) fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
