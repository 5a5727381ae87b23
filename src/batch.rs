//! Renders every item of a catalog and writes one chart file per item.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::error::ItemError;
use crate::io::{ExportFormat, output_path, save_chart};
use crate::plot::PlotStyle;

/// Where and how charts are written.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub dir: PathBuf,
    pub prefix: String,
    pub format: ExportFormat,
    pub style: PlotStyle,
}

/// Outcome of one item.
#[derive(Debug)]
pub struct ItemOutcome {
    pub item: String,
    /// File written, or why nothing was.
    pub result: Result<PathBuf, ItemError>,
}

/// Summary of a batch run, items in catalog order.
#[derive(Debug)]
pub struct BatchReport {
    pub outcomes: Vec<ItemOutcome>,
}

impl BatchReport {
    /// Number of charts written.
    pub fn rendered(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    /// Items that failed, with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &ItemError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.item.as_str(), e)))
    }
}

/// Renders and saves every item in parallel.
///
/// The network is only read, so workers share it. A failing item is logged
/// as a warning and recorded in the report; the rest of the batch goes on.
pub fn render_all(catalog: &Catalog, options: &BatchOptions) -> BatchReport {
    let total = catalog.len();
    let done = AtomicUsize::new(0);

    let outcomes: Vec<ItemOutcome> = catalog
        .items()
        .par_iter()
        .map(|item| {
            let result = render_one(catalog, &item.name, options);
            let n = done.fetch_add(1, Ordering::Relaxed) + 1;
            match &result {
                Ok(path) => info!(
                    path = %path.display(),
                    "fig {n}/{total} - {} - {:.1}%",
                    item.name,
                    n as f64 * 100.0 / total as f64
                ),
                Err(e) => warn!(item = %item.name, error = %e, "chart skipped"),
            }
            ItemOutcome {
                item: item.name.clone(),
                result,
            }
        })
        .collect();

    let report = BatchReport { outcomes };
    info!(rendered = report.rendered(), failed = total - report.rendered(), "batch finished");
    report
}

/// Renders and saves a single item, returning the file written.
pub fn render_one(catalog: &Catalog, name: &str, options: &BatchOptions) -> Result<PathBuf, ItemError> {
    let chart = catalog.compose(name, &options.style)?;
    let path = output_path(&options.dir, &options.prefix, name, options.format);
    save_chart(&chart, &path, options.format)?;
    Ok(path)
}

impl BatchOptions {
    /// Options writing into `dir` with the default prefix and style.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            prefix: "current-time_characteristic".to_string(),
            format: ExportFormat::Csv,
            style: PlotStyle::default(),
        }
    }
}
