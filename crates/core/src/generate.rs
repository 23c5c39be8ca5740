use tracing::debug;

use crate::{DistributionParameters, GridError, GridMath, NdarrayMath, SampleGrid};

/// Height of the surface at its centre, `1 / sqrt(2π)`.
pub const PEAK: f64 = 0.398_942_280_401_432_7;

/// Samples the Gaussian surface with the default [`NdarrayMath`] backend.
///
/// # Errors
///
/// Returns [`GridError::ShapeMismatch`] only if the backend violates the
/// meshgrid contract, which [`NdarrayMath`] does not.
pub fn generate(params: &DistributionParameters) -> Result<SampleGrid, GridError> {
    generate_with(&NdarrayMath, params)
}

/// Validates the raw parameters and samples the surface.
///
/// # Errors
///
/// Returns [`GridError::InvalidParameter`] if `domain` or `step` is not
/// strictly positive, before any array is built.
pub fn bivariate_normal(domain: f64, mean: f64, step: f64) -> Result<SampleGrid, GridError> {
    generate(&DistributionParameters::new(domain, mean, step)?)
}

/// Samples the Gaussian surface using the given array backend.
///
/// Offsets `u` run over `[-domain, domain)` in increments of `step` on both
/// axes. The height at offset `(u, v)` is the standard normal density of the
/// radius `r = sqrt(u² + v²)`:
///
/// ```text
/// z = exp(-r² / 2) / sqrt(2π)
/// ```
///
/// The returned coordinates are `u + mean` and `v + mean`, so the peak lands
/// on `(mean, mean)`. This is a radially symmetric bump, not a normalised
/// 2-D density. The sampled window is `[mean - domain, mean + domain)` on
/// each axis, centred on the peak, rather than the `[2·mean - domain,
/// 2·mean + domain)` window the legacy demo plotted.
///
/// # Errors
///
/// Returns [`GridError::ShapeMismatch`] if the backend's meshgrid produces
/// grids of different shapes.
pub fn generate_with<M: GridMath>(
    math: &M,
    params: &DistributionParameters,
) -> Result<SampleGrid, GridError> {
    let domain = params.domain();
    let mean = params.mean();

    let offsets = math.arange(-domain, domain, params.step());
    let (u, v) = math.meshgrid(&offsets, &offsets);

    let radius = math.sqrt(&math.add(&math.powi(&u, 2), &math.powi(&v, 2)));
    let z = math.scale(&math.exp(&math.scale(&math.powi(&radius, 2), -0.5)), PEAK);

    let grid = SampleGrid::new(
        math.to_array(&math.offset(&u, mean)),
        math.to_array(&math.offset(&v, mean)),
        math.to_array(&z),
    )?;

    debug!(
        domain,
        mean,
        step = params.step(),
        shape = ?grid.shape(),
        "sampled gaussian surface"
    );

    Ok(grid)
}
