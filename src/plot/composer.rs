//! Collects the curves between the source and one bus or load into a chart.

use crate::color::{Rgb, base_color, conductor_depth, lighten, palette_color};
use crate::curves::conductor::{TIME_MAX_S, TIME_MIN_S};
use crate::curves::{Curve, CurvePoint, rated_current_marker};
use crate::error::RenderError;
use crate::network::{Conductor, Network, NodeId, NodeKind, Protection};

use super::chart::{Axis, Chart, LegendPosition, Series, SeriesKind, decade_ceil, decade_floor};

/// Current range used when a chart has no curve at all.
const EMPTY_CURRENT_RANGE: (f64, f64) = (1.0, 1e4);

/// Shading of composed charts.
///
/// The time axis is not configurable: it always spans the range the
/// conductor withstand curves are sampled over.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotStyle {
    /// Lightening applied to fuse and breaker curves.
    pub protection_lighten: f64,
    /// Lightening applied to conductor withstand curves.
    pub conductor_lighten: f64,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            protection_lighten: 0.75,
            conductor_lighten: 0.5,
        }
    }
}

/// Composes the time-current chart of a bus or load.
///
/// Every protection and conductor on the path from the source to `target`
/// contributes its curves, source end first. A conductor takes the palette
/// color of its depth; the nodes above it on the path, up to the next
/// conductor, share that color, so each protection is drawn in a lighter
/// shade of the cable it feeds.
///
/// # Errors
///
/// * [`RenderError::NotRenderable`] if `target` is not a bus or load
/// * [`RenderError::Detached`] if `target` has no path to the source
/// * [`RenderError::Curve`] if a fuse on the path has an unsupported rating
pub fn compose(network: &Network, target: NodeId, style: &PlotStyle) -> Result<Chart, RenderError> {
    let node = network.node(target);
    if !node.kind().is_item() {
        return Err(RenderError::NotRenderable {
            name: node.name().to_string(),
            kind: node.kind().label(),
        });
    }

    let path: Vec<NodeId> = network.ancestors(target).collect();
    if path.last() != Some(&network.root()) {
        return Err(RenderError::Detached(node.name().to_string()));
    }

    // Color flows upstream from each conductor until the next one overrides it.
    let mut current: Option<Rgb> = None;
    let colors: Vec<Option<Rgb>> = path
        .iter()
        .map(|&id| {
            if let Some(c) = base_color(network, id) {
                current = Some(c);
            }
            current
        })
        .collect();

    let mut series = Vec::new();
    for (&id, color) in path.iter().zip(colors).rev() {
        let n = network.node(id);
        let color = color.unwrap_or_else(|| palette_color(conductor_depth(network, id)));
        match n.kind() {
            NodeKind::Protection(p) => {
                protection_series(n.name(), p, color, style, &mut series)?;
            }
            NodeKind::Conductor(c) => conductor_series(n.name(), c, color, style, &mut series),
            NodeKind::Source | NodeKind::Bus(_) | NodeKind::Load(_) => {}
        }
    }

    Ok(finalize(node.name(), series))
}

fn protection_series(
    name: &str,
    protection: &Protection,
    color: Rgb,
    style: &PlotStyle,
    out: &mut Vec<Series>,
) -> Result<(), RenderError> {
    let shade = lighten(color, style.protection_lighten);
    if let Some(fuse) = &protection.fuse {
        let points = fuse.curve().map_err(|source| RenderError::Curve {
            node: name.to_string(),
            source,
        })?;
        let label = format!("{}   {}A", fuse.name, amount_text(fuse.rating_a));
        out.push(Series::new(SeriesKind::Fuse, label, shade, name, points));
    }
    if let Some(thermal) = &protection.thermal {
        let label = format!("{}   {}A", thermal.name, amount_text(thermal.rated_a));
        out.push(Series::new(
            SeriesKind::Thermal,
            label,
            shade,
            name,
            thermal.curve(),
        ));
    }
    Ok(())
}

fn conductor_series(
    name: &str,
    conductor: &Conductor,
    color: Rgb,
    style: &PlotStyle,
    out: &mut Vec<Series>,
) {
    out.push(Series::new(
        SeriesKind::Ampacity,
        format!("{name}   {}mm²", amount_text(conductor.section_mm2)),
        lighten(color, style.conductor_lighten),
        name,
        conductor.ampacity_curve(),
    ));
    out.push(Series::new(
        SeriesKind::RatedCurrent,
        format!("I_n={}A", amount_text(conductor.rated_a)),
        color,
        name,
        rated_current_marker(conductor.rated_a, TIME_MIN_S, TIME_MAX_S),
    ));
}

fn finalize(target: &str, series: Vec<Series>) -> Chart {
    let (x_min, x_max) = current_range(&series);
    let title = if target.is_empty() {
        "Current-time curve".to_string()
    } else {
        format!("Curves for {target}")
    };
    Chart {
        title,
        x_axis: Axis::log("Current (A)", x_min, x_max),
        y_axis: Axis::log("Time (s)", TIME_MIN_S, TIME_MAX_S),
        series,
        grid: true,
        legend: LegendPosition::UpperRight,
    }
}

/// Current-axis range rounded outward to whole decades.
///
/// The lower end covers every point. The upper end follows the conductor
/// withstand curves only: breaker curves run out to 1e8 A, which would
/// squash the region where coordination is read.
fn current_range(series: &[Series]) -> (f64, f64) {
    let min = usable_currents(series.iter().map(|s| &s.points)).reduce(f64::min);
    let has_ampacity = series.iter().any(|s| s.kind == SeriesKind::Ampacity);
    let max = usable_currents(
        series
            .iter()
            .filter(|s| !has_ampacity || s.kind == SeriesKind::Ampacity)
            .map(|s| &s.points),
    )
    .reduce(f64::max);

    match (min, max) {
        (Some(lo), Some(hi)) => {
            let lo = decade_floor(lo);
            let hi = decade_ceil(hi.max(lo));
            if hi > lo { (lo, hi) } else { (lo, lo * 10.0) }
        }
        _ => EMPTY_CURRENT_RANGE,
    }
}

/// Positive finite currents of every point in `curves`.
fn usable_currents<'a>(curves: impl Iterator<Item = &'a Curve>) -> impl Iterator<Item = f64> {
    curves
        .flat_map(|c| c.iter())
        .map(|p: &CurvePoint| p.current_a)
        .filter(|c| *c > 0.0 && c.is_finite())
}

/// Formats a rating the way legends show it: whole numbers lose decimals.
pub fn amount_text(value: f64) -> String {
    if value.rem_euclid(1.0) < 1e-2 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
