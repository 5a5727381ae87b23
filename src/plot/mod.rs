//! Chart composition for buses and loads.

pub mod chart;
mod composer;

pub use chart::{Axis, Chart, LegendPosition, LineStyle, Scale, Series, SeriesKind};
pub use composer::{PlotStyle, amount_text, compose};
