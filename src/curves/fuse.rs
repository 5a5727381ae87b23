use crate::error::CurveError;

use super::tables::fuse_characteristic;
use super::{Curve, CurvePoint};

/// A gG fuse identified by its standard rating class.
///
/// # Examples
///
/// ```
/// use tcc_plot::curves::Fuse;
///
/// let fuse = Fuse::new("NH00", 80.0);
/// let curve = fuse.curve().expect("80 A is a standard class");
/// assert_eq!(curve.len(), 13);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Fuse {
    /// Display name used in the chart legend.
    pub name: String,
    /// Rating class in amperes.
    pub rating_a: f64,
}

impl Fuse {
    /// Creates a fuse. The rating is checked only when the curve is drawn.
    pub fn new(name: impl Into<String>, rating_a: f64) -> Self {
        Self {
            name: name.into(),
            rating_a,
        }
    }

    /// Melting curve of this fuse.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::UnsupportedRating`] if the rating is not tabulated.
    pub fn curve(&self) -> Result<Curve, CurveError> {
        fuse_curve(self.rating_a)
    }
}

impl Default for Fuse {
    fn default() -> Self {
        Self::new("fuse", 0.0)
    }
}

/// Looks up the melting curve of a standard rating class.
///
/// Points are ordered by ascending time (descending current).
///
/// # Errors
///
/// Returns [`CurveError::UnsupportedRating`] if `rating_a` is not exactly one
/// of the 22 tabulated classes. No neighbouring class is substituted.
pub fn fuse_curve(rating_a: f64) -> Result<Curve, CurveError> {
    let c = fuse_characteristic(rating_a).ok_or(CurveError::UnsupportedRating { rating_a })?;
    Ok(c.current_a
        .iter()
        .zip(c.time_s.iter())
        .map(|(&i, &t)| CurvePoint::new(i, t))
        .collect())
}
