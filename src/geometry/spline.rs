use crate::algorithms::preceding_index_search;
use crate::errors::GeometryError;
use ncollide2d::na::{DMatrix, DVector};

/// The smallest number of knots for which a not-a-knot cubic is well defined
pub const MIN_KNOTS: usize = 4;

/// A one dimensional interpolating cubic spline with not-a-knot end conditions, meaning the third
/// derivative is continuous across the second and second-to-last knots. With exactly four knots
/// this degenerates to the single cubic through all of them.
///
/// The knot abscissas may be supplied in either strictly increasing or strictly decreasing order;
/// internally they are always stored increasing. Evaluation outside of the knot range extends the
/// first or last polynomial piece rather than failing.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    x: Vec<f64>,
    y: Vec<f64>,
    m: Vec<f64>,
}

impl CubicSpline {
    /// Fit a spline through the knots `(x[i], y[i])`.
    ///
    /// # Errors
    ///
    /// * `ShapeError` if `x` and `y` differ in length
    /// * `InsufficientDataError` for fewer than four knots
    /// * `UnorderedProfileError` if `x` is not strictly monotonic, including repeated or NaN
    /// values, carrying the index in the caller's ordering at which monotonicity first breaks
    pub fn fit(x: &[f64], y: &[f64]) -> Result<CubicSpline, GeometryError> {
        if x.len() != y.len() {
            return Err(GeometryError::Shape(format!(
                "knot arrays differ in length ({} vs {})",
                x.len(),
                y.len()
            )));
        }

        if x.len() < MIN_KNOTS {
            return Err(GeometryError::InsufficientData {
                needed: MIN_KNOTS,
                found: x.len(),
            });
        }

        let increasing = x[1] > x[0];
        for i in 1..x.len() {
            let ordered = if increasing {
                x[i] > x[i - 1]
            } else {
                x[i] < x[i - 1]
            };
            if !ordered {
                return Err(GeometryError::UnorderedProfile { index: i });
            }
        }

        let (mut xs, mut ys) = (x.to_vec(), y.to_vec());
        if !increasing {
            xs.reverse();
            ys.reverse();
        }

        let m = second_derivatives(&xs, &ys)?;
        Ok(CubicSpline { x: xs, y: ys, m })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Evaluate the spline at `t`. Values outside of the knot range are extrapolated from the
    /// nearest end piece.
    pub fn eval(&self, t: f64) -> f64 {
        let last = self.x.len() - 2;
        let i = preceding_index_search(&self.x, t).min(last);

        let h = self.x[i + 1] - self.x[i];
        let a = self.x[i + 1] - t;
        let b = t - self.x[i];

        self.m[i] * a.powi(3) / (6.0 * h)
            + self.m[i + 1] * b.powi(3) / (6.0 * h)
            + (self.y[i] / h - self.m[i] * h / 6.0) * a
            + (self.y[i + 1] / h - self.m[i + 1] * h / 6.0) * b
    }
}

/// Solves for the second derivative of the spline at every knot. Interior rows enforce continuity
/// of the first derivative, while the first and last rows enforce a continuous third derivative at
/// knots 1 and n-2.
fn second_derivatives(x: &[f64], y: &[f64]) -> Result<Vec<f64>, GeometryError> {
    let n = x.len();
    let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();

    let mut a = DMatrix::<f64>::zeros(n, n);
    let mut r = DVector::<f64>::zeros(n);

    a[(0, 0)] = h[1];
    a[(0, 1)] = -(h[0] + h[1]);
    a[(0, 2)] = h[0];

    for i in 1..n - 1 {
        a[(i, i - 1)] = h[i - 1];
        a[(i, i)] = 2.0 * (h[i - 1] + h[i]);
        a[(i, i + 1)] = h[i];
        r[i] = 6.0 * ((y[i + 1] - y[i]) / h[i] - (y[i] - y[i - 1]) / h[i - 1]);
    }

    a[(n - 1, n - 3)] = h[n - 2];
    a[(n - 1, n - 2)] = -(h[n - 3] + h[n - 2]);
    a[(n - 1, n - 1)] = h[n - 3];

    let solved = a.lu().solve(&r).ok_or_else(|| {
        GeometryError::DegenerateGeometry("spline system is singular".to_string())
    })?;

    if solved.iter().any(|v| !v.is_finite()) {
        return Err(GeometryError::DegenerateGeometry(
            "spline coefficients are not finite".to_string(),
        ));
    }

    Ok(solved.iter().copied().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    fn cubic(t: f64) -> f64 {
        0.5 * t.powi(3) - 2.0 * t.powi(2) + t - 3.0
    }

    #[test]
    fn test_reproduces_knots() {
        let x = [0.0, 0.3, 0.9, 1.4, 2.0, 2.2, 3.1];
        let y = [1.0, -0.4, 0.2, 2.5, 1.1, 0.9, -1.3];
        let spline = CubicSpline::fit(&x, &y).unwrap();

        for (xi, yi) in x.iter().zip(y.iter()) {
            assert_relative_eq!(*yi, spline.eval(*xi), epsilon = 1e-10);
        }
    }

    #[test_case(-0.7)]
    #[test_case(0.25)]
    #[test_case(1.6)]
    #[test_case(2.95)]
    #[test_case(4.2)]
    fn test_not_a_knot_recovers_cubic(t: f64) {
        // A not-a-knot spline reproduces any cubic exactly, including when extrapolating
        let x = [0.0, 0.5, 1.2, 2.0, 3.0];
        let y: Vec<f64> = x.iter().map(|v| cubic(*v)).collect();
        let spline = CubicSpline::fit(&x, &y).unwrap();

        assert_relative_eq!(cubic(t), spline.eval(t), epsilon = 1e-9);
    }

    #[test]
    fn test_decreasing_knots_match_increasing() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y = [0.0, 1.0, 0.0, -1.0, 0.0];
        let xr: Vec<f64> = x.iter().rev().copied().collect();
        let yr: Vec<f64> = y.iter().rev().copied().collect();

        let forward = CubicSpline::fit(&x, &y).unwrap();
        let backward = CubicSpline::fit(&xr, &yr).unwrap();

        for t in [0.1, 0.7, 1.5, 2.2, 3.9] {
            assert_relative_eq!(forward.eval(t), backward.eval(t), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_too_few_knots() {
        let result = CubicSpline::fit(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]);
        assert_eq!(
            Err(GeometryError::InsufficientData {
                needed: 4,
                found: 3
            }),
            result.map(|s| s.len())
        );
    }

    #[test_case(&[0.0, 1.0, 1.0, 2.0, 3.0], 2 ; "repeated")]
    #[test_case(&[0.0, 1.0, 2.0, 1.5, 3.0], 3 ; "reversal")]
    #[test_case(&[3.0, 2.0, 2.5, 1.0, 0.0], 2 ; "reversal descending")]
    #[test_case(&[0.0, 1.0, f64::NAN, 2.0, 3.0], 2 ; "nan")]
    fn test_unordered_knots(x: &[f64], index: usize) {
        let y = vec![0.0; x.len()];
        let result = CubicSpline::fit(x, &y);
        assert_eq!(
            Err(GeometryError::UnorderedProfile { index }),
            result.map(|s| s.len())
        );
    }

    #[test]
    fn test_mismatched_lengths() {
        let result = CubicSpline::fit(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 2.0]);
        assert!(matches!(result, Err(GeometryError::Shape(_))));
    }
}
