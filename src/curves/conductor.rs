use super::{Curve, CurvePoint, logspace};

/// Number of time samples on an ampacity curve.
pub const AMPACITY_SAMPLES: usize = 50;

/// Shortest sampled time (s).
pub const TIME_MIN_S: f64 = 1e-3;

/// Longest sampled time (s).
pub const TIME_MAX_S: f64 = 1e6;

/// Withstand curve of a conductor.
///
/// Samples `I(t) = K·S/√t` at [`AMPACITY_SAMPLES`] log-spaced times between
/// [`TIME_MIN_S`] and [`TIME_MAX_S`] and floors every value at the
/// continuous ampacity `admissible_a`. Points are ordered by ascending time.
///
/// # Arguments
///
/// * `section_mm2` - Cross-section `S` (mm²)
/// * `admissible_a` - Continuous ampacity `I_adm` (A)
/// * `k` - Material/insulation constant `K` (A·√s/mm²)
///
/// # Examples
///
/// ```
/// use tcc_plot::curves::conductor_curve;
///
/// let curve = conductor_curve(2.5, 26.0, 115.0);
/// assert_eq!(curve.len(), 50);
/// assert!(curve.iter().all(|p| p.current_a >= 26.0));
/// ```
pub fn conductor_curve(section_mm2: f64, admissible_a: f64, k: f64) -> Curve {
    logspace(TIME_MIN_S, TIME_MAX_S, AMPACITY_SAMPLES)
        .into_iter()
        .map(|t| {
            let withstand = k * section_mm2 / t.sqrt();
            CurvePoint::new(withstand.max(admissible_a), t)
        })
        .collect()
}

/// Vertical marker at the conductor's rated current spanning `[t_min, t_max]`.
pub fn rated_current_marker(rated_a: f64, t_min: f64, t_max: f64) -> Curve {
    vec![
        CurvePoint::new(rated_a, t_min),
        CurvePoint::new(rated_a, t_max),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_is_non_increasing_over_time() {
        for (s, adm) in [(2.5, 26.0), (10.0, 87.0), (70.0, 256.0), (240.0, 500.0)] {
            let curve = conductor_curve(s, adm, 115.0);
            assert!(curve.windows(2).all(|w| w[0].time_s < w[1].time_s));
            assert!(curve.windows(2).all(|w| w[0].current_a >= w[1].current_a));
        }
    }

    #[test]
    fn curve_floors_at_admissible_current() {
        let curve = conductor_curve(10.0, 87.0, 115.0);
        assert!(curve.iter().all(|p| p.current_a >= 87.0));
        assert_eq!(curve.last().map(|p| p.current_a), Some(87.0));
    }

    #[test]
    fn short_times_follow_adiabatic_law() {
        let curve = conductor_curve(70.0, 256.0, 115.0);
        let first = curve[0];
        let expected = 115.0 * 70.0 / first.time_s.sqrt();
        assert!((first.current_a - expected).abs() < 1e-6);
    }

    #[test]
    fn marker_is_vertical() {
        let m = rated_current_marker(25.53, TIME_MIN_S, TIME_MAX_S);
        assert_eq!(m.len(), 2);
        assert!(m.iter().all(|p| p.current_a == 25.53));
        assert_eq!(m[0].time_s, 1e-3);
        assert_eq!(m[1].time_s, 1e6);
    }

    #[test]
    fn repeated_calls_are_identical() {
        assert_eq!(
            conductor_curve(16.0, 76.0, 143.0),
            conductor_curve(16.0, 76.0, 143.0)
        );
    }
}
