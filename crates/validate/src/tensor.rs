use bellgrid_core::GridMath;
use nalgebra::{DMatrix, DVector};
use ndarray::Array2;

/// Single precision backend built on [`nalgebra`].
///
/// Uses matrix (`ij`) meshgrid indexing: rows follow `xs` and columns follow
/// `ys`, so `X[(i, j)] == xs[i]` and `Y[(i, j)] == ys[j]`. Exported grids are
/// therefore the transpose of [`NdarrayMath`](bellgrid_core::NdarrayMath)'s.
#[derive(Debug, Clone, Copy, Default)]
pub struct NalgebraMath;

impl GridMath for NalgebraMath {
    type Vector = DVector<f32>;
    type Grid = DMatrix<f32>;

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    fn arange(&self, start: f64, stop: f64, step: f64) -> Self::Vector {
        let len = ((stop - start) / step).ceil();
        let len = if len.is_finite() && len > 0.0 {
            len as usize
        } else {
            0
        };

        let (start, step) = (start as f32, step as f32);
        DVector::from_fn(len, |i, _| start + step * i as f32)
    }

    fn meshgrid(&self, xs: &Self::Vector, ys: &Self::Vector) -> (Self::Grid, Self::Grid) {
        let x = DMatrix::from_fn(xs.len(), ys.len(), |i, _| xs[i]);
        let y = DMatrix::from_fn(xs.len(), ys.len(), |_, j| ys[j]);
        (x, y)
    }

    fn powi(&self, grid: &Self::Grid, n: i32) -> Self::Grid {
        grid.map(|v| v.powi(n))
    }

    fn sqrt(&self, grid: &Self::Grid) -> Self::Grid {
        grid.map(f32::sqrt)
    }

    fn exp(&self, grid: &Self::Grid) -> Self::Grid {
        grid.map(f32::exp)
    }

    fn add(&self, a: &Self::Grid, b: &Self::Grid) -> Self::Grid {
        a + b
    }

    #[allow(clippy::cast_possible_truncation)]
    fn scale(&self, grid: &Self::Grid, factor: f64) -> Self::Grid {
        grid * factor as f32
    }

    #[allow(clippy::cast_possible_truncation)]
    fn offset(&self, grid: &Self::Grid, offset: f64) -> Self::Grid {
        grid.add_scalar(offset as f32)
    }

    fn to_array(&self, grid: &Self::Grid) -> Array2<f64> {
        Array2::from_shape_fn(grid.shape(), |(i, j)| f64::from(grid[(i, j)]))
    }
}
