//! Array capabilities needed to sample a surface.
//!
//! The generator is written once against [`GridMath`]. Each backend decides
//! its own storage, precision, and meshgrid orientation, and exports its
//! results as `Array2<f64>` through [`GridMath::to_array`].

mod array;

use ndarray::Array2;

pub use array::NdarrayMath;

/// Elementwise arithmetic over 1-D coordinate vectors and 2-D grids.
pub trait GridMath {
    /// A 1-D coordinate sequence.
    type Vector;

    /// A 2-D array of samples.
    type Grid;

    /// Returns the half-open range `[start, stop)` in increments of `step`.
    ///
    /// Element `i` is `start + i * step` and the length is
    /// `ceil((stop - start) / step)`, or zero for an empty range.
    fn arange(&self, start: f64, stop: f64, step: f64) -> Self::Vector;

    /// Expands two coordinate sequences into two grids covering every pair.
    ///
    /// The orientation of the returned grids is backend-specific.
    fn meshgrid(&self, xs: &Self::Vector, ys: &Self::Vector) -> (Self::Grid, Self::Grid);

    /// Raises every element to the integer power `n`.
    fn powi(&self, grid: &Self::Grid, n: i32) -> Self::Grid;

    /// Takes the square root of every element.
    fn sqrt(&self, grid: &Self::Grid) -> Self::Grid;

    /// Takes the natural exponential of every element.
    fn exp(&self, grid: &Self::Grid) -> Self::Grid;

    /// Adds two equal-shaped grids.
    fn add(&self, a: &Self::Grid, b: &Self::Grid) -> Self::Grid;

    /// Multiplies every element by `factor`.
    fn scale(&self, grid: &Self::Grid, factor: f64) -> Self::Grid;

    /// Adds `offset` to every element.
    fn offset(&self, grid: &Self::Grid, offset: f64) -> Self::Grid;

    /// Exports a grid as `f64` rows and columns in the backend's orientation.
    fn to_array(&self, grid: &Self::Grid) -> Array2<f64>;
}
