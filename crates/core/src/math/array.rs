use ndarray::{Array1, Array2};

use super::GridMath;
use crate::params::arange_len;

/// Double precision backend built on [`ndarray`].
///
/// Uses Cartesian (`xy`) meshgrid indexing: rows follow `ys` and columns
/// follow `xs`, so `X[[i, j]] == xs[j]` and `Y[[i, j]] == ys[i]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NdarrayMath;

impl GridMath for NdarrayMath {
    type Vector = Array1<f64>;
    type Grid = Array2<f64>;

    fn arange(&self, start: f64, stop: f64, step: f64) -> Self::Vector {
        if arange_len(start, stop, step) == 0 {
            return Array1::zeros(0);
        }
        Array1::range(start, stop, step)
    }

    fn meshgrid(&self, xs: &Self::Vector, ys: &Self::Vector) -> (Self::Grid, Self::Grid) {
        let shape = (ys.len(), xs.len());
        let x = Array2::from_shape_fn(shape, |(_, j)| xs[j]);
        let y = Array2::from_shape_fn(shape, |(i, _)| ys[i]);
        (x, y)
    }

    fn powi(&self, grid: &Self::Grid, n: i32) -> Self::Grid {
        grid.mapv(|v| v.powi(n))
    }

    fn sqrt(&self, grid: &Self::Grid) -> Self::Grid {
        grid.mapv(f64::sqrt)
    }

    fn exp(&self, grid: &Self::Grid) -> Self::Grid {
        grid.mapv(f64::exp)
    }

    fn add(&self, a: &Self::Grid, b: &Self::Grid) -> Self::Grid {
        a + b
    }

    fn scale(&self, grid: &Self::Grid, factor: f64) -> Self::Grid {
        grid * factor
    }

    fn offset(&self, grid: &Self::Grid, offset: f64) -> Self::Grid {
        grid + offset
    }

    fn to_array(&self, grid: &Self::Grid) -> Array2<f64> {
        grid.clone()
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn arange_is_half_open() {
        let math = NdarrayMath;
        assert_eq!(math.arange(-1.0, 1.0, 0.5), array![-1.0, -0.5, 0.0, 0.5]);
        assert_eq!(math.arange(-0.1, 0.1, 1.0), array![-0.1]);
        assert!(math.arange(1.0, -1.0, 0.5).is_empty());
    }

    #[test]
    fn meshgrid_uses_cartesian_indexing() {
        let math = NdarrayMath;
        let xs = array![1.0, 2.0, 3.0];
        let ys = array![10.0, 20.0];

        let (x, y) = math.meshgrid(&xs, &ys);

        assert_eq!(x, array![[1.0, 2.0, 3.0], [1.0, 2.0, 3.0]]);
        assert_eq!(y, array![[10.0, 10.0, 10.0], [20.0, 20.0, 20.0]]);
    }

    #[test]
    fn elementwise_operations() {
        let math = NdarrayMath;
        let grid = array![[4.0, 9.0], [0.0, 1.0]];

        assert_eq!(math.sqrt(&grid), array![[2.0, 3.0], [0.0, 1.0]]);
        assert_eq!(math.powi(&grid, 2), array![[16.0, 81.0], [0.0, 1.0]]);
        assert_eq!(math.scale(&grid, 0.5), array![[2.0, 4.5], [0.0, 0.5]]);
        assert_eq!(math.offset(&grid, 1.0), array![[5.0, 10.0], [1.0, 2.0]]);
        assert_eq!(math.add(&grid, &grid), array![[8.0, 18.0], [0.0, 2.0]]);
        assert_eq!(math.exp(&array![[0.0]]), array![[1.0]]);
    }
}
