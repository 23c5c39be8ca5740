use ndarray::Array2;

use crate::GridError;

/// A sampled surface: X, Y, and Z arrays of one shared shape.
///
/// `x()[[i, j]]` and `y()[[i, j]]` are the coordinates of grid point `(i, j)`
/// and `z()[[i, j]]` is the surface height there.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    x: Array2<f64>,
    y: Array2<f64>,
    z: Array2<f64>,
}

impl SampleGrid {
    /// Creates a grid from three arrays.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ShapeMismatch`] if the arrays differ in shape.
    pub fn new(x: Array2<f64>, y: Array2<f64>, z: Array2<f64>) -> Result<Self, GridError> {
        if x.dim() != y.dim() || x.dim() != z.dim() {
            return Err(GridError::ShapeMismatch {
                x: x.dim(),
                y: y.dim(),
                z: z.dim(),
            });
        }

        Ok(Self { x, y, z })
    }

    #[must_use]
    pub fn x(&self) -> &Array2<f64> {
        &self.x
    }

    #[must_use]
    pub fn y(&self) -> &Array2<f64> {
        &self.y
    }

    #[must_use]
    pub fn z(&self) -> &Array2<f64> {
        &self.z
    }

    /// Returns the shared `(rows, columns)` shape.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.x.dim()
    }

    /// Returns `true` if the grid holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Swaps the row and column axes of all three arrays.
    #[must_use]
    pub fn transposed(self) -> Self {
        Self {
            x: self.x.reversed_axes(),
            y: self.y.reversed_axes(),
            z: self.z.reversed_axes(),
        }
    }

    /// Consumes the grid and returns `(x, y, z)`.
    #[must_use]
    pub fn into_parts(self) -> (Array2<f64>, Array2<f64>, Array2<f64>) {
        (self.x, self.y, self.z)
    }
}
