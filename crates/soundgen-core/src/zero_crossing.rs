//! Zero crossing search.
//!
//! Splicing two signals at a zero crossing avoids an audible click. Sweeps in
//! particular end at an arbitrary phase, so callers that join a sweep to
//! another sound should cut at the crossing nearest the join.

/// Which crossings to consider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Slope {
    /// Any sign change.
    #[default]
    Any,
    /// Negative to positive.
    Rising,
    /// Positive to negative.
    Falling,
}

fn sign(x: f64) -> i8 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}

/// Indices of every zero crossing in `samples`, in ascending order.
///
/// Index `i` is a crossing when the sign changes between `samples[i]` and
/// `samples[i + 1]` and `samples[i + 1]` is not exactly zero. A direct flip
/// reports the sample before it; a signal that touches zero reports the zero
/// sample where it leaves.
pub fn zero_crossings(samples: &[f64], slope: Slope) -> Vec<usize> {
    samples
        .windows(2)
        .enumerate()
        .filter_map(|(i, pair)| {
            let step = sign(pair[1]) - sign(pair[0]);
            let matches = match slope {
                Slope::Any => step != 0,
                Slope::Rising => step > 0,
                Slope::Falling => step < 0,
            };
            (matches && pair[1] != 0.0).then_some(i)
        })
        .collect()
}

/// Finds the zero crossing nearest `index`.
///
/// Equidistant crossings resolve to the lower index. Returns `None` when the
/// signal has no crossing of the requested slope.
pub fn find_nearest_zero_crossing(samples: &[f64], index: usize, slope: Slope) -> Option<usize> {
    zero_crossings(samples, slope)
        .into_iter()
        .min_by_key(|&crossing| crossing.abs_diff(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fixture() -> Vec<f64> {
        let mut a = vec![1.0; 1000];
        for i in [87, 173, 211, 304, 468, 823, 900, 902] {
            a[i] = 0.0;
        }
        for i in [143, 257, 366, 411, 640, 781, 901, 951] {
            a[i] = -1.0;
        }
        a
    }

    #[test]
    fn test_nearest_crossing_fixture() {
        let a = fixture();
        let cases = [
            (100, 87),
            (200, 211),
            (250, 256),
            (300, 304),
            (400, 410),
            (500, 468),
            (600, 639),
            (700, 640),
            (800, 781),
            (900, 900),
        ];
        for (index, expected) in cases {
            assert_eq!(
                find_nearest_zero_crossing(&a, index, Slope::Any),
                Some(expected),
                "index {}",
                index
            );
        }
    }

    #[test]
    fn test_tie_resolves_to_lower_index() {
        let a = fixture();
        assert_eq!(find_nearest_zero_crossing(&a, 901, Slope::Any), Some(900));
    }

    #[test]
    fn test_slope_filter() {
        let a = [1.0, -1.0, -1.0, 1.0, 1.0];
        assert_eq!(zero_crossings(&a, Slope::Any), vec![0, 2]);
        assert_eq!(zero_crossings(&a, Slope::Falling), vec![0]);
        assert_eq!(zero_crossings(&a, Slope::Rising), vec![2]);
        assert_eq!(find_nearest_zero_crossing(&a, 0, Slope::Rising), Some(2));
    }

    #[test]
    fn test_step_into_zero_is_not_counted() {
        let a = [1.0, 0.0, 0.0, -1.0];
        assert_eq!(zero_crossings(&a, Slope::Any), vec![2]);
    }

    #[test]
    fn test_no_crossing() {
        assert_eq!(find_nearest_zero_crossing(&[1.0; 8], 3, Slope::Any), None);
        assert_eq!(find_nearest_zero_crossing(&[], 0, Slope::Any), None);
    }
}
