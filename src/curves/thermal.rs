use std::str::FromStr;

use super::tables::{THERMAL_C_MULTIPLIERS, THERMAL_C_TIMES_S};
use super::{Curve, CurvePoint};

/// Time at which the long-time segment starts (s).
const LONG_TIME_START_S: f64 = 10e6;

/// Current at which the instantaneous stage is drawn down to (A).
const INSTANTANEOUS_FLOOR_A: f64 = 10e7;

/// Ratio between the pickup-point time and `t_r` on the long-time bend.
const BEND_FACTOR: f64 = 30.0;

/// Adjustable settings of an electronic (family `M`) trip unit.
///
/// Pickups are multiples of the breaker rated current `I_t`.
#[derive(Debug, Clone, PartialEq)]
pub struct ElectronicSettings {
    /// Long-time pickup `I_r`.
    pub long_pickup: f64,
    /// Long-time delay `t_r` (s).
    pub long_delay_s: f64,
    /// Short-time pickup `I_sd`; `None` when the stage is disabled.
    pub short_pickup: Option<f64>,
    /// Short-time delay `t_sd` (s).
    pub short_delay_s: f64,
    /// Instantaneous pickup `I_i`.
    pub instantaneous_pickup: f64,
    /// Instantaneous clearing time `t_i` (s).
    pub instantaneous_delay_s: f64,
}

impl Default for ElectronicSettings {
    fn default() -> Self {
        Self {
            long_pickup: 0.8,
            long_delay_s: 12.0,
            short_pickup: None,
            short_delay_s: 0.1,
            instantaneous_pickup: 15.0,
            instantaneous_delay_s: 0.02,
        }
    }
}

/// Trip curve family of a breaker.
#[derive(Debug, Clone, PartialEq)]
pub enum TripFamily {
    /// Thermal-magnetic type C envelope.
    C,
    /// Electronic trip unit with adjustable stages.
    M(ElectronicSettings),
}

impl TripFamily {
    /// One-letter tag used in input sheets and legends.
    pub fn tag(&self) -> char {
        match self {
            Self::C => 'C',
            Self::M(_) => 'M',
        }
    }
}

impl FromStr for TripFamily {
    type Err = String;

    /// Parses `"C"` or `"M"` (case-insensitive); `M` starts from default settings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "C" | "c" => Ok(Self::C),
            "M" | "m" => Ok(Self::M(ElectronicSettings::default())),
            other => Err(other.to_string()),
        }
    }
}

/// A breaker trip unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Thermal {
    /// Display name used in the chart legend.
    pub name: String,
    /// Rated current `I_t` (A).
    pub rated_a: f64,
    /// Breaking capacity `I_cc` (A). Informational; does not shape the curve.
    pub short_circuit_a: f64,
    /// Curve family and settings.
    pub family: TripFamily,
}

impl Thermal {
    /// Creates a type C breaker.
    pub fn type_c(name: impl Into<String>, rated_a: f64, short_circuit_a: f64) -> Self {
        Self {
            name: name.into(),
            rated_a,
            short_circuit_a,
            family: TripFamily::C,
        }
    }

    /// Creates an electronic breaker with the given settings.
    pub fn electronic(
        name: impl Into<String>,
        rated_a: f64,
        short_circuit_a: f64,
        settings: ElectronicSettings,
    ) -> Self {
        Self {
            name: name.into(),
            rated_a,
            short_circuit_a,
            family: TripFamily::M(settings),
        }
    }

    /// Trip curve of this breaker.
    pub fn curve(&self) -> Curve {
        thermal_curve(self)
    }
}

/// Builds the trip curve of a breaker.
///
/// Family `C` scales the fixed envelope by `I_t`. Family `M` emits the
/// long-time, optional short-time and instantaneous stages as a connected
/// polyline; the two branches differ in point count and are kept exactly in
/// drawing order.
pub fn thermal_curve(thermal: &Thermal) -> Curve {
    let it = thermal.rated_a;
    match &thermal.family {
        TripFamily::C => THERMAL_C_MULTIPLIERS
            .iter()
            .zip(THERMAL_C_TIMES_S.iter())
            .map(|(&m, &t)| CurvePoint::new(m * it, t))
            .collect(),
        TripFamily::M(s) => {
            let long = s.long_pickup * it;
            let inst = s.instantaneous_pickup * it;
            match s.short_pickup.filter(|&isd| isd != 0.0) {
                Some(isd) => {
                    let short = isd * it;
                    vec![
                        CurvePoint::new(long, LONG_TIME_START_S),
                        CurvePoint::new(long, s.long_delay_s * isd * BEND_FACTOR),
                        CurvePoint::new(short, s.long_delay_s),
                        CurvePoint::new(short, s.short_delay_s),
                        CurvePoint::new(inst, s.short_delay_s),
                        CurvePoint::new(inst, s.instantaneous_delay_s),
                        CurvePoint::new(INSTANTANEOUS_FLOOR_A, s.instantaneous_delay_s),
                    ]
                }
                None => vec![
                    CurvePoint::new(long, LONG_TIME_START_S),
                    CurvePoint::new(
                        long,
                        s.long_delay_s * s.instantaneous_pickup * BEND_FACTOR,
                    ),
                    CurvePoint::new(inst, s.long_delay_s),
                    CurvePoint::new(inst, s.instantaneous_delay_s),
                    CurvePoint::new(INSTANTANEOUS_FLOOR_A, s.instantaneous_delay_s),
                ],
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_c_scales_linearly_with_rating() {
        let base = thermal_curve(&Thermal::type_c("b", 16.0, 3e3));
        let scaled = thermal_curve(&Thermal::type_c("b", 16.0 * 2.5, 3e3));
        assert_eq!(base.len(), 12);
        for (a, b) in base.iter().zip(scaled.iter()) {
            assert_eq!(a.time_s, b.time_s);
            assert!((b.current_a - 2.5 * a.current_a).abs() <= 1e-9 * b.current_a);
        }
    }

    #[test]
    fn type_c_spans_envelope() {
        let curve = thermal_curve(&Thermal::type_c("b", 10.0, 3e3));
        assert_eq!(curve[0].time_s, 1e7);
        assert!((curve[0].current_a - 11.3).abs() < 1e-9);
        assert_eq!(curve.last().map(|p| p.time_s), Some(0.003));
        assert_eq!(curve.last().map(|p| p.current_a), Some(1e6));
    }

    #[test]
    fn electronic_with_short_time_stage() {
        let settings = ElectronicSettings {
            long_pickup: 1.0,
            long_delay_s: 10.0,
            short_pickup: Some(4.0),
            short_delay_s: 0.2,
            instantaneous_pickup: 10.0,
            instantaneous_delay_s: 0.02,
        };
        let curve = thermal_curve(&Thermal::electronic("m", 100.0, 25e3, settings));
        let expected = vec![
            CurvePoint::new(100.0, 1e7),
            CurvePoint::new(100.0, 1200.0),
            CurvePoint::new(400.0, 10.0),
            CurvePoint::new(400.0, 0.2),
            CurvePoint::new(1000.0, 0.2),
            CurvePoint::new(1000.0, 0.02),
            CurvePoint::new(1e8, 0.02),
        ];
        assert_eq!(curve, expected);
    }

    #[test]
    fn electronic_without_short_time_stage() {
        let settings = ElectronicSettings {
            long_pickup: 1.0,
            long_delay_s: 10.0,
            instantaneous_pickup: 10.0,
            ..ElectronicSettings::default()
        };
        let curve = thermal_curve(&Thermal::electronic("m", 100.0, 25e3, settings));
        let expected = vec![
            CurvePoint::new(100.0, 1e7),
            CurvePoint::new(100.0, 3000.0),
            CurvePoint::new(1000.0, 10.0),
            CurvePoint::new(1000.0, 0.02),
            CurvePoint::new(1e8, 0.02),
        ];
        assert_eq!(curve, expected);
    }

    #[test]
    fn zero_short_pickup_means_disabled() {
        let with_zero = ElectronicSettings {
            short_pickup: Some(0.0),
            ..ElectronicSettings::default()
        };
        let a = thermal_curve(&Thermal::electronic("m", 50.0, 1e3, with_zero));
        let b = thermal_curve(&Thermal::electronic(
            "m",
            50.0,
            1e3,
            ElectronicSettings::default(),
        ));
        assert_eq!(a, b);
        assert_eq!(a.len(), 5);
    }

    #[test]
    fn family_parses_from_sheet_tags() {
        assert_eq!("C".parse::<TripFamily>(), Ok(TripFamily::C));
        assert_eq!(" m ".parse::<TripFamily>().map(|f| f.tag()), Ok('M'));
        assert!("D".parse::<TripFamily>().is_err());
    }
}
