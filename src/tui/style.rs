//! Color constants and log-axis helpers for the TUI.

use ratatui::style::Color;
use ratatui::symbols::Marker;

use crate::color::Rgb;
use crate::curves::CurvePoint;
use crate::plot::LineStyle;

/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;
/// Highlighted list entry.
pub const SELECTED_BG: Color = Color::Blue;
/// Render error text.
pub const ERROR_FG: Color = Color::Red;

/// Terminal color of a chart series.
pub fn series_color(c: Rgb) -> Color {
    let (r, g, b) = c.to_u8();
    Color::Rgb(r, g, b)
}

/// Terminal cells cannot dash a line; the marker stands in for the stroke.
pub fn marker(style: LineStyle) -> Marker {
    match style {
        LineStyle::Solid => Marker::Braille,
        LineStyle::Dashed | LineStyle::DashDot => Marker::Dot,
        LineStyle::Dotted => Marker::Block,
    }
}

/// Points in `(log10 I, log10 t)` coordinates, dropping non-positive values.
pub fn log_points(points: &[CurvePoint]) -> Vec<(f64, f64)> {
    points
        .iter()
        .filter(|p| p.current_a > 0.0 && p.time_s > 0.0)
        .map(|p| (p.current_a.log10(), p.time_s.log10()))
        .collect()
}

/// Axis label for a decade exponent, e.g. `1e3`.
pub fn decade_label(exponent: f64) -> String {
    format!("1e{}", exponent.round() as i32)
}
