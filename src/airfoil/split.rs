use super::{leading_edge_index, SurfacePair};
use crate::errors::GeometryError;
use ncollide2d::na::Point2;

/// Splits a closed airfoil contour at its leading edge into an upper and a lower surface, each
/// beginning at the leading edge and ending at that surface's trailing edge point.
///
/// The upper surface is the part of the contour up to and including the leading edge, reversed.
/// The lower surface is the remainder of the contour starting from the leading edge, in original
/// order. The leading edge point appears in both.
///
/// # Errors
///
/// Returns `GeometryError::Shape` if the contour has fewer than two points.
pub fn split_at_leading_edge(points: &[Point2<f64>]) -> Result<SurfacePair, GeometryError> {
    if points.len() < 2 {
        return Err(GeometryError::Shape(format!(
            "a contour needs at least 2 points to split, got {}",
            points.len()
        )));
    }

    let le = leading_edge_index(points)
        .ok_or_else(|| GeometryError::Shape("contour is empty".to_string()))?;

    let upper = points[..=le].iter().rev().copied().collect();
    let lower = points[le..].to_vec();

    Ok(SurfacePair::new(upper, lower))
}
