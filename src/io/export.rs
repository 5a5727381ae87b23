//! Chart export: one point per CSV row, or the whole chart as JSON.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ExportError;
use crate::plot::{Chart, LineStyle};

/// Column header of the CSV export.
const HEADER: &str = "series,kind,style,color,current_a,time_s";

/// On-disk format of an exported chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

/// Path of an item's chart: `<dir>/<prefix>_<item>.<ext>`.
///
/// Path separators in the item name are replaced so every chart lands
/// directly in `dir`.
pub fn output_path(dir: &Path, prefix: &str, item: &str, format: ExportFormat) -> PathBuf {
    let item: String = item
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    dir.join(format!("{prefix}_{item}.{}", format.extension()))
}

/// Writes the chart as CSV to any writer.
///
/// Rows follow the drawing order: series by series, points in curve order.
///
/// # Errors
///
/// Returns [`ExportError::Csv`] if a record cannot be written and
/// [`ExportError::Io`] if the final flush fails.
pub fn write_chart_csv(chart: &Chart, writer: impl Write) -> Result<(), ExportError> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;

    for series in &chart.series {
        let color = series.color.to_hex();
        for p in &series.points {
            let current = p.current_a.to_string();
            let time = p.time_s.to_string();
            wtr.write_record([
                series.label.as_str(),
                series.kind.as_str(),
                style_name(series.style),
                color.as_str(),
                current.as_str(),
                time.as_str(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

fn style_name(style: LineStyle) -> &'static str {
    match style {
        LineStyle::Solid => "solid",
        LineStyle::Dashed => "dashed",
        LineStyle::DashDot => "dash_dot",
        LineStyle::Dotted => "dotted",
    }
}

/// Writes the whole chart, axes and legend included, as pretty JSON.
///
/// # Errors
///
/// Returns [`ExportError::Json`] if serialization or writing fails.
pub fn write_chart_json(chart: &Chart, writer: impl Write) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, chart)?;
    Ok(())
}

/// Saves a chart to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns an [`ExportError`] if the directory or file cannot be written.
pub fn save_chart(chart: &Chart, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let buf = io::BufWriter::new(File::create(path)?);
    match format {
        ExportFormat::Csv => write_chart_csv(chart, buf)?,
        ExportFormat::Json => write_chart_json(chart, buf)?,
    }
    Ok(())
}
