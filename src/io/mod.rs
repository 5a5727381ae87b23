//! Tabular input, network building and chart export.

pub mod builder;
pub mod export;
pub mod input;

pub use builder::{BuildDefaults, build_catalog};
pub use export::{ExportFormat, output_path, save_chart};
pub use input::{InputRow, read_rows, read_rows_from_path};

use tracing::info;

use crate::catalog::Catalog;
use crate::config::InputConfig;
use crate::error::InputError;

/// Loads the network named by the input section.
///
/// A preset wins over a path so a config can switch to the built-in network
/// without losing its file setting.
///
/// # Errors
///
/// Returns [`InputError::NoSource`] when neither is set, or any error from
/// reading and building the sheet.
pub fn load_catalog(input: &InputConfig, defaults: &BuildDefaults) -> Result<Catalog, InputError> {
    match (&input.preset, &input.path) {
        (Some(preset), _) if preset == "reference" => {
            info!(preset = %preset, "using built-in network");
            Ok(Catalog::reference())
        }
        (Some(preset), _) => Err(InputError::UnknownPreset(preset.clone())),
        (None, Some(path)) => {
            info!(path = %path.display(), "reading network sheet");
            let rows = read_rows_from_path(path, input.skip_rows, input.delimiter_byte())?;
            build_catalog(&rows, defaults)
        }
        (None, None) => Err(InputError::NoSource),
    }
}
