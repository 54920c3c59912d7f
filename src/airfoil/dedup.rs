use ncollide2d::na::Point2;

/// Removes every point whose x coordinate is exactly equal to that of the point before it. The
/// comparison wraps around, so the first point is checked against the last one and a repeated
/// closure point is caught as well.
///
/// No tolerance is applied. The duplicates this is meant to catch come from a fixed precision
/// text round trip, where repeated values are bit-identical. A sequence whose points all share one
/// x coordinate is a single run and collapses to its first point.
pub fn collapse_duplicates(points: &[Point2<f64>]) -> Vec<Point2<f64>> {
    let n = points.len();
    let result: Vec<Point2<f64>> = points
        .iter()
        .enumerate()
        .filter(|(i, p)| p.x != points[(i + n - 1) % n].x)
        .map(|(_, p)| *p)
        .collect();

    match (result.is_empty(), points.first()) {
        (true, Some(first)) => vec![*first],
        _ => result,
    }
}

/// Removes points whose x coordinate exactly equals that of the point before them, without
/// comparing the first point against the last. Use this on an open sequence whose two ends
/// legitimately share an x coordinate, such as a contour running from one trailing edge point to
/// the other.
pub fn collapse_adjacent_duplicates(points: &[Point2<f64>]) -> Vec<Point2<f64>> {
    let mut result = points.to_vec();
    result.dedup_by(|a, b| a.x == b.x);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use test_case::test_case;

    fn from_x(xs: &[f64]) -> Vec<Point2<f64>> {
        xs.iter()
            .enumerate()
            .map(|(i, x)| Point2::new(*x, i as f64))
            .collect()
    }

    fn xs(points: &[Point2<f64>]) -> Vec<f64> {
        points.iter().map(|p| p.x).collect()
    }

    #[test_case(&[1.0, 0.5, 0.0, 0.0, 0.5, 0.9], &[1.0, 0.5, 0.0, 0.5, 0.9] ; "leading edge pair")]
    #[test_case(&[1.0, 0.5, 0.2, 0.2, 0.2, 0.2, 0.6], &[1.0, 0.5, 0.2, 0.6] ; "run of four")]
    #[test_case(&[1.0, 0.5, 0.0, 0.5, 1.0], &[0.5, 0.0, 0.5, 1.0] ; "closure wraps")]
    #[test_case(&[0.3, 0.3, 0.3], &[0.3] ; "all equal")]
    #[test_case(&[0.3], &[0.3] ; "single point")]
    #[test_case(&[], &[] ; "empty")]
    #[test_case(&[0.1, 0.2, 0.1, 0.2], &[0.1, 0.2, 0.1, 0.2] ; "alternating")]
    fn test_collapse(input: &[f64], expected: &[f64]) {
        assert_eq!(expected.to_vec(), xs(&collapse_duplicates(&from_x(input))));
    }

    #[test]
    fn test_survivors_keep_their_y() {
        let points = vec![
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 0.1),
            Point2::new(0.0, 0.2),
            Point2::new(1.0, -0.1),
        ];
        let expected = vec![
            Point2::new(0.0, 0.1),
            Point2::new(1.0, -0.1),
        ];
        assert_eq!(expected, collapse_duplicates(&points));
    }

    #[test]
    fn test_constant_run_keeps_first_point() {
        let points = vec![
            Point2::new(0.3, 0.0),
            Point2::new(0.3, 1.0),
            Point2::new(0.3, 2.0),
        ];
        assert_eq!(vec![Point2::new(0.3, 0.0)], collapse_duplicates(&points));
    }

    #[test_case(&[1.0, 0.5, 0.0, 0.5, 1.0], &[1.0, 0.5, 0.0, 0.5, 1.0] ; "closure kept")]
    #[test_case(&[1.0, 0.5, 0.0, 0.0, 0.5, 1.0], &[1.0, 0.5, 0.0, 0.5, 1.0] ; "interior pair")]
    #[test_case(&[0.3, 0.3, 0.3], &[0.3] ; "all equal")]
    #[test_case(&[], &[] ; "empty")]
    fn test_collapse_adjacent(input: &[f64], expected: &[f64]) {
        assert_eq!(
            expected.to_vec(),
            xs(&collapse_adjacent_duplicates(&from_x(input)))
        );
    }

    #[test]
    fn test_idempotent_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let count: usize = rng.gen_range(0..40);
            let values: Vec<f64> = (0..count).map(|_| rng.gen_range(0..4) as f64 * 0.25).collect();
            let once = collapse_duplicates(&from_x(&values));
            let twice = collapse_duplicates(&once);
            assert_eq!(once, twice);
            if count > 0 {
                assert!(!once.is_empty());
            }
        }
    }
}
