use super::sampling::angular_grid;
use crate::errors::GeometryError;
use crate::geometry::spline::CubicSpline;
use ncollide2d::na::Point2;

/// Contour coordinates indexed by an angular parameter in degrees, as reported by the smoothing
/// tool's summary. The three sequences always have equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct AngularProfile {
    theta: Vec<f64>,
    x: Vec<f64>,
    y: Vec<f64>,
}

impl AngularProfile {
    pub fn new(theta: Vec<f64>, x: Vec<f64>, y: Vec<f64>) -> Result<AngularProfile, GeometryError> {
        if theta.len() != x.len() || theta.len() != y.len() {
            return Err(GeometryError::Shape(format!(
                "angular profile columns differ in length (theta {}, x {}, y {})",
                theta.len(),
                x.len(),
                y.len()
            )));
        }

        Ok(AngularProfile { theta, x, y })
    }

    pub fn theta(&self) -> &[f64] {
        &self.theta
    }

    pub fn len(&self) -> usize {
        self.theta.len()
    }

    pub fn is_empty(&self) -> bool {
        self.theta.is_empty()
    }

    pub fn points(&self) -> Vec<Point2<f64>> {
        self.x
            .iter()
            .zip(self.y.iter())
            .map(|(x, y)| Point2::new(*x, *y))
            .collect()
    }
}

/// Splines fitted to x(theta) and y(theta) of an angular profile
#[derive(Debug, Clone)]
pub struct AngularResampler {
    x: CubicSpline,
    y: CubicSpline,
}

impl AngularResampler {
    /// # Errors
    ///
    /// * `GeometryError::InsufficientData` when the profile has fewer than four points
    /// * `GeometryError::UnorderedProfile` when theta is not strictly monotonic
    pub fn fit(profile: &AngularProfile) -> Result<AngularResampler, GeometryError> {
        Ok(AngularResampler {
            x: CubicSpline::fit(&profile.theta, &profile.x)?,
            y: CubicSpline::fit(&profile.theta, &profile.y)?,
        })
    }

    pub fn at(&self, theta: f64) -> Point2<f64> {
        Point2::new(self.x.eval(theta), self.y.eval(theta))
    }

    pub fn sample(&self, thetas: &[f64]) -> Vec<Point2<f64>> {
        thetas.iter().map(|t| self.at(*t)).collect()
    }
}

/// Resamples an angular profile onto exactly `n` points, evenly spaced in theta from +180 down to
/// -180 degrees. The output always runs in that direction regardless of the direction of the
/// input profile, and the grid end points may extrapolate slightly past the input range. Fewer
/// than two output points cannot span the grid and are rejected with a `Shape` error.
pub fn resample_profile(
    profile: &AngularProfile,
    n: usize,
) -> Result<Vec<Point2<f64>>, GeometryError> {
    if n < 2 {
        return Err(GeometryError::Shape(format!(
            "resampling needs at least 2 output points, {} requested",
            n
        )));
    }

    let resampler = AngularResampler::fit(profile)?;
    Ok(resampler.sample(&angular_grid(n)))
}
