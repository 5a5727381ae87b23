//! Backend-neutral chart description produced by the composer.

use serde::Serialize;

use crate::color::Rgb;
use crate::curves::{Curve, CurvePoint};

/// Stroke pattern of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    Solid,
    Dashed,
    DashDot,
    Dotted,
}

/// What a series depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    /// Fuse melting curve.
    Fuse,
    /// Breaker trip curve.
    Thermal,
    /// Conductor withstand curve.
    Ampacity,
    /// Vertical marker at a conductor's rated current.
    RatedCurrent,
}

impl SeriesKind {
    /// Stroke used for this kind of series.
    pub fn line_style(self) -> LineStyle {
        match self {
            Self::Fuse => LineStyle::DashDot,
            Self::Thermal => LineStyle::Dashed,
            Self::Ampacity => LineStyle::Solid,
            Self::RatedCurrent => LineStyle::Dotted,
        }
    }

    /// Snake-case name used in exports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fuse => "fuse",
            Self::Thermal => "thermal",
            Self::Ampacity => "ampacity",
            Self::RatedCurrent => "rated_current",
        }
    }
}

/// One labeled polyline on the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    /// Legend text.
    pub label: String,
    pub kind: SeriesKind,
    pub style: LineStyle,
    pub color: Rgb,
    /// Name of the network node that contributed the series.
    pub source: String,
    pub points: Curve,
}

impl Series {
    /// Creates a series; the line style follows from `kind`.
    pub fn new(
        kind: SeriesKind,
        label: impl Into<String>,
        color: Rgb,
        source: impl Into<String>,
        points: Curve,
    ) -> Self {
        Self {
            label: label.into(),
            kind,
            style: kind.line_style(),
            color,
            source: source.into(),
            points,
        }
    }
}

/// Axis scaling. Only logarithmic axes are drawn today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    Log,
}

/// A finalized axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub label: String,
    pub scale: Scale,
    pub min: f64,
    pub max: f64,
    /// Major tick positions, one per decade.
    pub ticks: Vec<f64>,
}

impl Axis {
    /// Logarithmic axis over `[min, max]` with a tick at each decade.
    pub fn log(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            scale: Scale::Log,
            min,
            max,
            ticks: decade_ticks(min, max),
        }
    }
}

/// Where the legend is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendPosition {
    UpperRight,
}

/// A complete time-current chart for one bus or load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub title: String,
    /// Current axis.
    pub x_axis: Axis,
    /// Time axis.
    pub y_axis: Axis,
    /// Series in drawing order (source end first).
    pub series: Vec<Series>,
    pub grid: bool,
    pub legend: LegendPosition,
}

impl Chart {
    /// Number of series of the given kind.
    pub fn count(&self, kind: SeriesKind) -> usize {
        self.series.iter().filter(|s| s.kind == kind).count()
    }

    /// Series of the given kind, in drawing order.
    pub fn series_of(&self, kind: SeriesKind) -> impl Iterator<Item = &Series> {
        self.series.iter().filter(move |s| s.kind == kind)
    }

    /// Every point of every series.
    pub fn points(&self) -> impl Iterator<Item = &CurvePoint> {
        self.series.iter().flat_map(|s| s.points.iter())
    }
}

/// Largest power of ten not above `v`.
pub fn decade_floor(v: f64) -> f64 {
    10f64.powi(v.log10().floor() as i32)
}

/// Smallest power of ten not below `v`.
pub fn decade_ceil(v: f64) -> f64 {
    10f64.powi(v.log10().ceil() as i32)
}

/// Powers of ten from `min` to `max`, both rounded outward to a decade.
pub fn decade_ticks(min: f64, max: f64) -> Vec<f64> {
    if !(min > 0.0 && max >= min && max.is_finite()) {
        return Vec::new();
    }
    let lo = min.log10().floor() as i32;
    let hi = max.log10().ceil() as i32;
    (lo..=hi).map(|e| 10f64.powi(e)).collect()
}
