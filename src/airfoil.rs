use itertools::Itertools;
use ncollide2d::na::Point2;
use std::cmp::Ordering;

pub mod dedup;
pub mod pose;
pub mod resample;
pub mod sampling;
pub mod split;

/// The two surfaces of an airfoil, each running from the leading edge to its own trailing edge
/// point. Both surfaces contain the leading edge point.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfacePair {
    pub upper: Vec<Point2<f64>>,
    pub lower: Vec<Point2<f64>>,
}

impl SurfacePair {
    pub fn new(upper: Vec<Point2<f64>>, lower: Vec<Point2<f64>>) -> SurfacePair {
        SurfacePair { upper, lower }
    }

    /// Joins the two surfaces back into a single closed contour running from the upper trailing
    /// edge, through the leading edge, to the lower trailing edge. The leading edge point of the
    /// lower surface is dropped since the upper surface already ends on it.
    pub fn to_contour(&self) -> Vec<Point2<f64>> {
        let mut result: Vec<Point2<f64>> = self.upper.iter().rev().copied().collect();
        result.extend(self.lower.iter().skip(1));
        result
    }
}

/// Finds the index of the leading edge, which is the point with the minimum x coordinate. Ties are
/// broken by the first occurrence. Returns `None` for an empty slice.
pub fn leading_edge_index(points: &[Point2<f64>]) -> Option<usize> {
    points
        .iter()
        .position_min_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn pts(v: &[(f64, f64)]) -> Vec<Point2<f64>> {
        v.iter().map(|(x, y)| Point2::new(*x, *y)).collect()
    }

    #[test_case(&[(1.0, 0.0), (0.5, 0.1), (0.0, 0.0), (0.5, -0.1), (1.0, 0.0)], Some(2))]
    #[test_case(&[(1.0, 0.0), (0.0, 0.1), (0.0, -0.1), (1.0, 0.0)], Some(1) ; "first of tied")]
    #[test_case(&[(0.3, 0.0)], Some(0))]
    #[test_case(&[], None)]
    fn test_leading_edge_index(points: &[(f64, f64)], expected: Option<usize>) {
        assert_eq!(expected, leading_edge_index(&pts(points)));
    }

    #[test]
    fn test_to_contour() {
        let pair = SurfacePair::new(
            pts(&[(0.0, 0.0), (0.5, 0.1), (1.0, 0.0)]),
            pts(&[(0.0, 0.0), (0.5, -0.1), (1.0, 0.0)]),
        );

        let expected = pts(&[
            (1.0, 0.0),
            (0.5, 0.1),
            (0.0, 0.0),
            (0.5, -0.1),
            (1.0, 0.0),
        ]);
        assert_eq!(expected, pair.to_contour());
    }
}
