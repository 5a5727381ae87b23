//! Time-current curve synthesis.
//!
//! Every function here is pure: it maps device parameters to an ordered
//! polyline of [`CurvePoint`]s meant for log-log axes. Points are kept in
//! the order they must be drawn; callers must not re-sort them.

/// Conductor withstand (ampacity) curves.
pub mod conductor;
/// Fuse melting curves.
pub mod fuse;
pub mod tables;
/// Thermal-magnetic and electronic breaker trip curves.
pub mod thermal;

use serde::Serialize;

pub use conductor::{AMPACITY_SAMPLES, conductor_curve, rated_current_marker};
pub use fuse::{Fuse, fuse_curve};
pub use thermal::{ElectronicSettings, Thermal, TripFamily, thermal_curve};

/// One sample of a time-current characteristic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    /// Current in amperes (x axis).
    pub current_a: f64,
    /// Time in seconds (y axis).
    pub time_s: f64,
}

impl CurvePoint {
    /// Creates a point from a current and a time.
    pub const fn new(current_a: f64, time_s: f64) -> Self {
        Self { current_a, time_s }
    }
}

/// Ordered polyline of curve samples.
pub type Curve = Vec<CurvePoint>;

/// Returns `n` logarithmically spaced values from `start` to `stop`, both
/// ends included.
///
/// # Examples
///
/// ```
/// use tcc_plot::curves::logspace;
///
/// let v = logspace(1e-3, 1e6, 10);
/// assert_eq!(v.len(), 10);
/// assert!((v[3] - 1.0).abs() < 1e-12);
/// ```
pub fn logspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let (lo, hi) = (start.log10(), stop.log10());
            let step = (hi - lo) / (n - 1) as f64;
            (0..n)
                .map(|i| 10f64.powf(lo + step * i as f64))
                .collect()
        }
    }
}
