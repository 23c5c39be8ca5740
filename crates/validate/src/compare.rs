use ndarray::{Array2, Zip};
use thiserror::Error;

/// Relative and absolute tolerances for an all-close comparison.
///
/// Two values `a` (test) and `b` (control) are close when
/// `|a - b| <= abs + rel * |b|`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    rel: f64,
    abs: f64,
}

/// Errors that can occur when validating a [`Tolerance`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceError {
    #[error("relative tolerance must be finite and non-negative")]
    Rel,

    #[error("absolute tolerance must be finite and non-negative")]
    Abs,
}

impl Default for Tolerance {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-5, 1e-8).unwrap()
    }
}

impl Tolerance {
    /// Creates a new tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if either tolerance is negative or non-finite.
    pub fn new(rel: f64, abs: f64) -> Result<Self, ToleranceError> {
        if !rel.is_finite() || rel < 0.0 {
            return Err(ToleranceError::Rel);
        }
        if !abs.is_finite() || abs < 0.0 {
            return Err(ToleranceError::Abs);
        }

        Ok(Self { rel, abs })
    }

    #[must_use]
    pub fn rel(&self) -> f64 {
        self.rel
    }

    #[must_use]
    pub fn abs(&self) -> f64 {
        self.abs
    }

    fn accepts(self, a: f64, b: f64) -> bool {
        a == b || (a - b).abs() <= self.abs + self.rel * b.abs()
    }
}

/// Outcome of comparing one axis of two grids.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisStatus {
    /// Every element matches exactly.
    Equal,

    /// Every element is within tolerance.
    Close { max_abs_diff: f64 },

    /// At least one element is out of tolerance, or the shapes differ.
    ///
    /// `max_abs_diff` is NaN when the shapes differ.
    Differ { max_abs_diff: f64 },
}

impl AxisStatus {
    /// Returns `true` for [`Equal`](Self::Equal) and [`Close`](Self::Close).
    #[must_use]
    pub fn is_ok(&self) -> bool {
        !matches!(self, Self::Differ { .. })
    }
}

/// Classifies one axis as equal, close, or differing.
#[must_use]
pub fn compare_arrays(test: &Array2<f64>, control: &Array2<f64>, tolerance: Tolerance) -> AxisStatus {
    if array_equal(test, control) {
        AxisStatus::Equal
    } else if all_close(test, control, tolerance) {
        AxisStatus::Close {
            max_abs_diff: max_abs_diff(test, control),
        }
    } else {
        AxisStatus::Differ {
            max_abs_diff: max_abs_diff(test, control),
        }
    }
}

/// Returns `true` if both arrays have the same shape and identical elements.
#[must_use]
pub fn array_equal(a: &Array2<f64>, b: &Array2<f64>) -> bool {
    a == b
}

/// Returns `true` if both arrays have the same shape and every pair of
/// elements is within `tolerance`.
///
/// NaN is never close to anything, including another NaN.
#[must_use]
pub fn all_close(a: &Array2<f64>, b: &Array2<f64>, tolerance: Tolerance) -> bool {
    a.dim() == b.dim() && Zip::from(a).and(b).all(|&a, &b| tolerance.accepts(a, b))
}

/// Returns the largest elementwise `|a - b|`, or NaN if the shapes differ.
#[must_use]
pub fn max_abs_diff(a: &Array2<f64>, b: &Array2<f64>) -> f64 {
    if a.dim() != b.dim() {
        return f64::NAN;
    }
    Zip::from(a)
        .and(b)
        .fold(0.0, |max: f64, &a, &b| max.max((a - b).abs()))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;

    use super::*;

    #[test]
    fn default_tolerance_matches_allclose_defaults() {
        let tol = Tolerance::default();
        assert_eq!(tol.rel(), 1e-5);
        assert_eq!(tol.abs(), 1e-8);
    }

    #[test]
    fn rejects_invalid_tolerances() {
        assert_eq!(Tolerance::new(-1.0, 0.0), Err(ToleranceError::Rel));
        assert_eq!(Tolerance::new(f64::NAN, 0.0), Err(ToleranceError::Rel));
        assert_eq!(Tolerance::new(0.0, f64::INFINITY), Err(ToleranceError::Abs));
        assert!(Tolerance::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn identical_arrays_are_equal() {
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        assert_eq!(compare_arrays(&a, &a.clone(), Tolerance::default()), AxisStatus::Equal);
    }

    #[test]
    fn rounding_noise_is_close() {
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        let b = array![[1.0, 2.0 + 1e-7], [3.0, 4.0 - 2e-7]];

        let status = compare_arrays(&a, &b, Tolerance::default());

        let AxisStatus::Close { max_abs_diff } = status else {
            panic!("expected close, got {status:?}");
        };
        assert_relative_eq!(max_abs_diff, 2e-7, max_relative = 1e-6);
        assert!(status.is_ok());
    }

    #[test]
    fn tolerance_scales_with_control_magnitude() {
        let tol = Tolerance::default();

        // 1e-5 relative of 1000 is 1e-2.
        assert!(all_close(&array![[1000.009]], &array![[1000.0]], tol));
        assert!(!all_close(&array![[1000.02]], &array![[1000.0]], tol));

        // Near zero only the absolute tolerance applies.
        assert!(all_close(&array![[5e-9]], &array![[0.0]], tol));
        assert!(!all_close(&array![[5e-8]], &array![[0.0]], tol));
    }

    #[test]
    fn large_differences_differ() {
        let a = array![[1.0, 2.0]];
        let b = array![[1.0, 2.5]];

        let status = compare_arrays(&a, &b, Tolerance::default());

        assert_eq!(status, AxisStatus::Differ { max_abs_diff: 0.5 });
        assert!(!status.is_ok());
    }

    #[test]
    fn nan_is_never_close() {
        let a = array![[f64::NAN]];
        assert!(!array_equal(&a, &a));
        assert!(!all_close(&a, &a, Tolerance::default()));
    }

    #[test]
    fn shape_mismatch_differs() {
        let a = Array2::<f64>::zeros((2, 3));
        let b = Array2::<f64>::zeros((3, 2));

        let status = compare_arrays(&a, &b, Tolerance::default());

        assert!(matches!(status, AxisStatus::Differ { max_abs_diff } if max_abs_diff.is_nan()));
    }
}
