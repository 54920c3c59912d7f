use ncollide2d::na::RealField;

/// Finds the index `i` of the last value in a sorted slice such that `slice[i] <= test_value`,
/// clamped to zero when the test value precedes the second entry. Values beyond the end of the
/// slice return the last index.
pub fn preceding_index_search<N: RealField + Copy>(slice: &[N], test_value: N) -> usize {
    if slice.len() <= 1 || slice[1] > test_value {
        return 0;
    }

    let mut a = 1;
    let mut b = slice.len() - 1;
    if slice[b] <= test_value {
        return b;
    }

    while b > a + 1 {
        let check = (a + b) / 2;
        if test_value >= slice[check] {
            a = check;
        } else {
            b = check;
        }
    }
    a
}

/// Returns `n` evenly spaced values from `start` to `stop`, both endpoints included. A count of
/// one yields only `start`.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| {
                    // Pin the last value so that rounding in the step never misses the endpoint
                    if i == n - 1 {
                        stop
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::prelude::*;
    use test_case::test_case;

    fn naive(slice: &[f64], test_value: f64) -> usize {
        if slice.len() <= 1 || slice[1] > test_value {
            return 0;
        }

        if slice[slice.len() - 1] <= test_value {
            return slice.len() - 1;
        }

        for (i, v) in slice.iter().skip(1).enumerate() {
            if *v > test_value {
                return i;
            }
        }

        slice.len() - 1
    }

    #[test_case(0, -1.0)]
    #[test_case(0, 0.05)]
    #[test_case(1, 0.1)]
    #[test_case(2, 0.25)]
    #[test_case(4, 0.5)]
    fn test_simple_binary_search(e: usize, v: f64) {
        let test = [0.0, 0.1, 0.2, 0.3, 0.4];
        assert_eq!(e, preceding_index_search(&test, v));
    }

    #[test]
    fn test_binary_search_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let count: usize = rng.gen_range(2..200);
            let mut values: Vec<f64> = (0..count).map(|_| rng.gen_range(-10.0..10.0)).collect();
            values.sort_by(|a, b| a.partial_cmp(b).unwrap());

            for _ in 0..100 {
                let test = rng.gen_range(-11.0..11.0);
                assert_eq!(naive(&values, test), preceding_index_search(&values, test));
            }
        }
    }

    #[test_case(0, &[])]
    #[test_case(1, &[180.0])]
    #[test_case(3, &[180.0, 0.0, -180.0])]
    #[test_case(5, &[180.0, 90.0, 0.0, -90.0, -180.0])]
    fn test_linspace(n: usize, expected: &[f64]) {
        let result = linspace(180.0, -180.0, n);
        assert_eq!(expected.len(), result.len());
        for (e, r) in expected.iter().zip(result.iter()) {
            assert_relative_eq!(*e, *r, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_linspace_hits_endpoint_exactly() {
        let result = linspace(0.1, 0.7, 37);
        assert_eq!(0.1, result[0]);
        assert_eq!(0.7, *result.last().unwrap());
    }
}
