use ncollide2d::na::{self, Point2, RealField};

/// Return the distance between two 2D points
pub fn dist<N: RealField + Copy>(a: &Point2<N>, b: &Point2<N>) -> N {
    (a - b).norm()
}

pub fn mid_point<N: RealField + Copy>(a: &Point2<N>, b: &Point2<N>) -> Point2<N> {
    na::center(a, b)
}
