use bellgrid_core::SampleGrid;
use ndarray::{ArrayView1, Axis, Zip};

use crate::Camera;

/// Height of the plot box relative to its width.
const BOX_HEIGHT: f64 = 0.75;

/// A projected wireframe polyline, tagged with its peak normalised height.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<[f64; 2]>,
    pub height: f64,
}

/// A projected axis line with its label at the far end.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisGuide {
    pub label: &'static str,
    pub from: [f64; 2],
    pub to: [f64; 2],
}

/// Everything needed to draw a surface, already projected to 2-D.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub wireframe: Vec<Polyline>,
    pub axes: Vec<AxisGuide>,
}

/// Maps raw sample coordinates into the unit plot box.
///
/// X and Y are centred and scaled by the larger of their spans; Z is
/// stretched so the surface fills [`BOX_HEIGHT`].
struct Normalizer {
    /// Smallest raw X, Y, and Z.
    min: [f64; 3],
    /// Largest raw X, Y, and Z.
    max: [f64; 3],
    centre: [f64; 2],
    span: f64,
    z_span: f64,
}

impl Normalizer {
    fn new(grid: &SampleGrid) -> Self {
        let (x_min, x_max) = bounds(grid.x().iter());
        let (y_min, y_max) = bounds(grid.y().iter());
        let (z_min, z_max) = bounds(grid.z().iter());

        Self {
            min: [x_min, y_min, z_min],
            max: [x_max, y_max, z_max],
            centre: [(x_min + x_max) / 2.0, (y_min + y_max) / 2.0],
            span: (x_max - x_min).max(y_max - y_min),
            z_span: z_max - z_min,
        }
    }

    fn apply(&self, [x, y, z]: [f64; 3]) -> [f64; 3] {
        let scale = |v: f64, lo: f64, span: f64| if span > 0.0 { (v - lo) / span } else { 0.0 };
        [
            scale(x, self.centre[0], self.span),
            scale(y, self.centre[1], self.span),
            scale(z, self.min[2], self.z_span) * BOX_HEIGHT,
        ]
    }
}

impl Scene {
    /// Builds the wireframe and axis guides for a grid as seen by `camera`.
    #[must_use]
    pub fn new(grid: &SampleGrid, camera: &Camera) -> Self {
        if grid.is_empty() {
            return Self::default();
        }

        let norm = Normalizer::new(grid);
        let project = |x: f64, y: f64, z: f64| camera.project(norm.apply([x, y, z]));

        let mut wireframe = Vec::with_capacity(grid.shape().0 + grid.shape().1);
        for axis in [Axis(0), Axis(1)] {
            let lanes = grid
                .x()
                .lanes(axis)
                .into_iter()
                .zip(grid.y().lanes(axis))
                .zip(grid.z().lanes(axis));

            for ((x, y), z) in lanes {
                wireframe.push(polyline(x, y, z, &norm, &project));
            }
        }

        let [x_min, y_min, z_min] = norm.min;
        let [x_max, y_max, z_max] = norm.max;
        let origin = project(x_min, y_min, z_min);
        let axes = vec![
            AxisGuide {
                label: "X",
                from: origin,
                to: project(x_max, y_min, z_min),
            },
            AxisGuide {
                label: "Y",
                from: origin,
                to: project(x_min, y_max, z_min),
            },
            AxisGuide {
                label: "Z",
                from: origin,
                to: project(x_min, y_min, z_max),
            },
        ];

        Self { wireframe, axes }
    }
}

fn polyline(
    x: ArrayView1<'_, f64>,
    y: ArrayView1<'_, f64>,
    z: ArrayView1<'_, f64>,
    norm: &Normalizer,
    project: impl Fn(f64, f64, f64) -> [f64; 2],
) -> Polyline {
    let mut points = Vec::with_capacity(x.len());
    let mut height: f64 = 0.0;

    Zip::from(&x).and(&y).and(&z).for_each(|&x, &y, &z| {
        points.push(project(x, y, z));
        height = height.max(norm.apply([x, y, z])[2] / BOX_HEIGHT);
    });

    Polyline { points, height }
}

fn bounds<'a>(values: impl Iterator<Item = &'a f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    })
}
