use std::fmt;

use tracing::{info, warn};

use crate::AxisStatus;

/// One of the three arrays in a sample grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        };
        f.write_str(name)
    }
}

/// Per-axis outcome of comparing a test grid against a control grid.
///
/// The [`Display`](fmt::Display) impl renders the operator-facing report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonResult {
    pub x: AxisStatus,
    pub y: AxisStatus,
    pub z: AxisStatus,
}

impl ComparisonResult {
    /// Returns the status of a single axis.
    #[must_use]
    pub fn status(&self, axis: Axis) -> AxisStatus {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Returns `true` if every axis is equal or close.
    #[must_use]
    pub fn success(&self) -> bool {
        Axis::ALL.iter().all(|&axis| self.status(axis).is_ok())
    }

    /// Emits one log event per axis plus a summary.
    pub fn log(&self) {
        for axis in Axis::ALL {
            match self.status(axis) {
                AxisStatus::Equal => info!(%axis, "arrays equal"),
                AxisStatus::Close { max_abs_diff } => {
                    info!(%axis, max_abs_diff, "arrays close");
                }
                AxisStatus::Differ { max_abs_diff } => {
                    warn!(%axis, max_abs_diff, "arrays differ");
                }
            }
        }

        if self.success() {
            info!("numerical array validation succeeded");
        } else {
            warn!("numerical array validation failed");
        }
    }
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " # Numerical array validation test #")?;
        for axis in Axis::ALL {
            match self.status(axis) {
                AxisStatus::Equal => writeln!(f, "   {axis} arrays equal")?,
                AxisStatus::Close { max_abs_diff } => {
                    writeln!(f, "   {axis} arrays close: Max. difference {max_abs_diff:.3e}")?;
                }
                AxisStatus::Differ { .. } => writeln!(f, "   {axis} arrays differ")?,
            }
        }

        let outcome = if self.success() { "SUCCESS" } else { "FAILED" };
        write!(f, " # Numerical array validation test {outcome} #")
    }
}
