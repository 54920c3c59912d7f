//! Preparation and reconstruction of airfoil coordinates around an external smoothing program.
//!
//! The geometric core lives in [`airfoil`]: splitting a contour at its leading edge, cosine spaced
//! sampling, pose normalization, angular resampling and duplicate removal. The [`afsmo`] module
//! handles the smoothing program's file formats and runs it in an isolated scratch directory.

pub mod afsmo;
pub mod airfoil;
pub mod algorithms;
pub mod dat;
pub mod errors;
pub mod geometry;

pub use afsmo::config::{Reconstruction, SmoothingConfig, SummaryColumns};
pub use afsmo::pipeline::Smoother;
pub use dat::AirfoilFile;
pub use errors::{GeometryError, Result, SmoothError};
