//! Cross-checks the Gaussian surface generator against an independent backend.
//!
//! # Method
//!
//! The same generator runs twice: once on [`NdarrayMath`] (`f64`, Cartesian
//! meshgrid) as the test, and once on [`NalgebraMath`] (`f32`, matrix
//! meshgrid) as the control. The control grids come back transposed, so
//! they are transposed again before comparison.
//!
//! Each axis is then classified on its own:
//!
//! - [`AxisStatus::Equal`] - every element matches exactly
//! - [`AxisStatus::Close`] - every element is within [`Tolerance`]
//! - [`AxisStatus::Differ`] - anything else
//!
//! The check succeeds when no axis differs.

mod compare;
mod report;
mod tensor;

pub use compare::{
    AxisStatus, Tolerance, ToleranceError, all_close, array_equal, compare_arrays, max_abs_diff,
};
pub use report::{Axis, ComparisonResult};
pub use tensor::NalgebraMath;

use bellgrid_core::{
    DistributionParameters, GridError, NdarrayMath, SampleGrid, generate_with,
};

/// Compares a test grid against a control grid of the same orientation.
#[must_use]
pub fn compare(test: &SampleGrid, control: &SampleGrid, tolerance: Tolerance) -> ComparisonResult {
    ComparisonResult {
        x: compare_arrays(test.x(), control.x(), tolerance),
        y: compare_arrays(test.y(), control.y(), tolerance),
        z: compare_arrays(test.z(), control.z(), tolerance),
    }
}

/// Cross-checks the surface for `params` using the default [`Tolerance`].
///
/// # Errors
///
/// Returns an error if either backend fails to produce a grid.
pub fn validate(params: &DistributionParameters) -> Result<ComparisonResult, GridError> {
    validate_with(params, Tolerance::default())
}

/// Cross-checks the surface for `params` using the given tolerance.
///
/// # Errors
///
/// Returns an error if either backend fails to produce a grid.
pub fn validate_with(
    params: &DistributionParameters,
    tolerance: Tolerance,
) -> Result<ComparisonResult, GridError> {
    let test = generate_with(&NdarrayMath, params)?;
    let control = generate_with(&NalgebraMath, params)?.transposed();

    let result = compare(&test, &control, tolerance);
    result.log();

    Ok(result)
}

/// Validates the raw parameters and cross-checks the surface.
///
/// # Errors
///
/// Returns [`GridError::InvalidParameter`] if `domain` or `step` is not
/// strictly positive.
pub fn cross_check(domain: f64, mean: f64, step: f64) -> Result<ComparisonResult, GridError> {
    validate(&DistributionParameters::new(domain, mean, step)?)
}
