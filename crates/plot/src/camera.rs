/// An orthographic view of the unit plot box.
///
/// Angles are in degrees. `azimuth` rotates about the vertical axis and
/// `elevation` tilts the view above the XY plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub azimuth: f64,
    pub elevation: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            azimuth: -60.0,
            elevation: 30.0,
        }
    }
}

impl Camera {
    /// Projects a point of the normalised plot box onto the screen plane.
    #[must_use]
    pub fn project(&self, [x, y, z]: [f64; 3]) -> [f64; 2] {
        let (sin_a, cos_a) = self.azimuth.to_radians().sin_cos();
        let (sin_e, cos_e) = self.elevation.to_radians().sin_cos();

        let depth = x * cos_a + y * sin_a;
        [-x * sin_a + y * cos_a, -depth * sin_e + z * cos_e]
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn top_down_view_keeps_xy() {
        let camera = Camera {
            azimuth: -90.0,
            elevation: 90.0,
        };

        let [sx, sy] = camera.project([0.3, -0.2, 5.0]);

        assert_relative_eq!(sx, 0.3, epsilon = 1e-12);
        assert_relative_eq!(sy, -0.2, epsilon = 1e-12);
    }

    #[test]
    fn side_view_shows_height() {
        let camera = Camera {
            azimuth: 0.0,
            elevation: 0.0,
        };

        let [sx, sy] = camera.project([0.7, 0.1, 0.4]);

        assert_relative_eq!(sx, 0.1, epsilon = 1e-12);
        assert_relative_eq!(sy, 0.4, epsilon = 1e-12);
    }
}
