use thiserror::Error;

/// Errors that can occur when building a [`SampleGrid`](crate::SampleGrid).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GridError {
    /// A distribution parameter is outside its valid range.
    ///
    /// Raised before any array is allocated, so an empty or reversed
    /// sampling range never reaches the array backend.
    #[error("invalid parameter `{name}` = {value}: must be {requirement}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        requirement: &'static str,
    },

    /// The X, Y, and Z arrays do not share a single shape.
    #[error("grid arrays must share one shape, got x {x:?}, y {y:?}, z {z:?}")]
    ShapeMismatch {
        x: (usize, usize),
        y: (usize, usize),
        z: (usize, usize),
    },
}
