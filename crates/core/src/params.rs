use crate::GridError;

/// Parameters of a sampled Gaussian surface.
///
/// Samples cover the half-open square `[mean - domain, mean + domain)` along
/// both axes, spaced `step` apart. The surface peak sits at `(mean, mean)`.
///
/// `step` is a sampling increment, not a statistical variance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionParameters {
    domain: f64,
    mean: f64,
    step: f64,
}

impl DistributionParameters {
    /// The parameters of the demonstration plot.
    pub const DEMO: Self = Self {
        domain: 6.0,
        mean: 4.0,
        step: 0.25,
    };

    /// Creates validated distribution parameters.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidParameter`] if `domain` or `step` is not
    /// finite and strictly positive, or if `mean` is not finite.
    pub fn new(domain: f64, mean: f64, step: f64) -> Result<Self, GridError> {
        check_positive("domain", domain)?;
        if !mean.is_finite() {
            return Err(GridError::InvalidParameter {
                name: "mean",
                value: mean,
                requirement: "finite",
            });
        }
        check_positive("step", step)?;

        Ok(Self { domain, mean, step })
    }

    /// Returns the half-width of the sampled square.
    #[must_use]
    pub fn domain(&self) -> f64 {
        self.domain
    }

    /// Returns the centre of the sampled square along both axes.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Returns the sampling increment.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the number of samples along each axis.
    ///
    /// This is the length of the half-open range `[-domain, domain)` walked
    /// in increments of `step`, i.e. `ceil(2 * domain / step)`.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        arange_len(-self.domain, self.domain, self.step)
    }
}

impl Default for DistributionParameters {
    fn default() -> Self {
        Self::DEMO
    }
}

/// Number of elements in the half-open range `[start, stop)` walked by `step`.
///
/// Returns zero for empty or reversed ranges.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn arange_len(start: f64, stop: f64, step: f64) -> usize {
    let len = ((stop - start) / step).ceil();
    if len.is_finite() && len > 0.0 {
        len as usize
    } else {
        0
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), GridError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GridError::InvalidParameter {
            name,
            value,
            requirement: "finite and strictly positive",
        })
    }
}
