//! Core types for sampling a Gaussian surface over a square grid.
//!
//! This crate defines the pieces the validator and renderer build on:
//!
//! - [`DistributionParameters`] - validated domain, mean, and sampling step
//! - [`SampleGrid`] - three equal-shaped 2-D arrays (X, Y, Z)
//! - [`GridMath`] - the array capabilities the generator needs, so the same
//!   algorithm can run on more than one numeric backend
//! - [`NdarrayMath`] - the default `f64` backend built on [`ndarray`]
//! - [`generate`] and [`generate_with`] - the surface generator

mod error;
mod generate;
mod grid;
mod params;

pub mod math;

pub use error::GridError;
pub use generate::{PEAK, bivariate_normal, generate, generate_with};
pub use grid::SampleGrid;
pub use math::{GridMath, NdarrayMath};
pub use params::DistributionParameters;
