use super::leading_edge_index;
use crate::errors::GeometryError;
use crate::geometry::distances2::{dist, mid_point};
use ncollide2d::na::{Complex, Point2, Vector2};

/// The similarity transform which places an airfoil contour with its leading edge at the origin
/// and the midpoint of its trailing edge at (1, 0).
///
/// Rather than composing a rotation matrix with a separate scale, the transform treats each
/// translated point as a complex number and multiplies it by a single factor `k = 1 / te`, where
/// `te` is the translated trailing edge midpoint. The argument of `k` performs the rotation and its
/// modulus performs the scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// The leading edge of the contour in its original frame
    pub origin: Point2<f64>,

    /// The trailing edge midpoint of the contour in its original frame
    pub trailing_edge: Point2<f64>,

    /// The complex multiplier applied to leading edge relative coordinates
    pub factor: Complex<f64>,
}

impl Pose {
    /// Estimate the pose of a closed contour. The leading edge is the minimum x point and the
    /// trailing edge is the midpoint between the first and last points of the contour, which
    /// accounts for airfoils whose trailing edge has a finite thickness.
    ///
    /// # Errors
    ///
    /// * `GeometryError::Shape` if the contour is empty
    /// * `GeometryError::DegenerateGeometry` if the trailing edge midpoint coincides with the
    /// leading edge, or if any coordinate involved is not finite
    pub fn estimate(points: &[Point2<f64>]) -> Result<Pose, GeometryError> {
        let le = leading_edge_index(points)
            .ok_or_else(|| GeometryError::Shape("cannot normalize an empty contour".to_string()))?;

        let origin = points[le];
        let trailing_edge = mid_point(&points[0], &points[points.len() - 1]);
        let te = to_complex(&(trailing_edge - origin));

        if te.norm_sqr() == 0.0 {
            return Err(GeometryError::DegenerateGeometry(format!(
                "trailing edge midpoint ({}, {}) coincides with the leading edge",
                trailing_edge.x, trailing_edge.y
            )));
        }

        let factor = Complex::new(1.0, 0.0) / te;
        if !factor.re.is_finite() || !factor.im.is_finite() {
            return Err(GeometryError::DegenerateGeometry(format!(
                "chord from ({}, {}) to ({}, {}) does not produce a finite transform",
                origin.x, origin.y, trailing_edge.x, trailing_edge.y
            )));
        }

        Ok(Pose {
            origin,
            trailing_edge,
            factor,
        })
    }

    /// Maps a point from the original frame into the normalized frame
    pub fn apply(&self, point: &Point2<f64>) -> Point2<f64> {
        let z = to_complex(&(point - self.origin)) * self.factor;
        Point2::new(z.re, z.im)
    }

    /// The chord length of the contour in its original frame
    pub fn chord(&self) -> f64 {
        dist(&self.origin, &self.trailing_edge)
    }

    /// The angle in radians by which the contour is rotated when normalized. A contour whose chord
    /// points up and to the right is rotated clockwise, giving a negative angle.
    pub fn rotation(&self) -> f64 {
        self.factor.im.atan2(self.factor.re)
    }
}

fn to_complex(v: &Vector2<f64>) -> Complex<f64> {
    Complex::new(v.x, v.y)
}

/// Translates, de-rotates and scales a closed contour so that its leading edge lies at the origin
/// and its trailing edge midpoint lies at (1, 0), producing a new contour of unit chord.
///
/// # Errors
///
/// See `Pose::estimate`. No output is produced for a degenerate contour, so NaN or infinite
/// coordinates never escape.
pub fn normalize_pose(points: &[Point2<f64>]) -> Result<Vec<Point2<f64>>, GeometryError> {
    let pose = Pose::estimate(points)?;
    Ok(points.iter().map(|p| pose.apply(p)).collect())
}
