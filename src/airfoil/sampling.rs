use crate::algorithms::linspace;
use crate::errors::GeometryError;
use std::f64::consts::PI;

/// The first angle of the resampling grid, in degrees
pub const THETA_START: f64 = 180.0;

/// The last angle of the resampling grid, in degrees
pub const THETA_END: f64 = -180.0;

/// Generates `n` chord fractions between 0.0 and 1.0 using cosine spacing, which clusters the
/// samples towards both the leading and the trailing edge where curvature is highest.
///
/// Each value is `0.5 * (1 + cos(t))` for `t` evenly spaced from pi down to zero, so the sequence
/// is strictly increasing. At least two samples are needed to cover both ends of the chord, and
/// smaller counts are rejected with a `Shape` error.
pub fn cosine_spacing(n: usize) -> Result<Vec<f64>, GeometryError> {
    if n < 2 {
        return Err(GeometryError::Shape(format!(
            "cosine spacing needs at least 2 samples, {} requested",
            n
        )));
    }

    Ok(linspace(PI, 0.0, n)
        .into_iter()
        .map(|t| 0.5 * (1.0 + t.cos()))
        .collect())
}

/// Generates `n` evenly spaced angles running from +180 down to -180 degrees. The grid is always
/// descending, which fixes the traversal direction of a resampled contour, and never has a zero
/// inserted into it unless `n` happens to be odd.
pub fn angular_grid(n: usize) -> Vec<f64> {
    linspace(THETA_START, THETA_END, n)
}
