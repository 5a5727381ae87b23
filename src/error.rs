//! Error types shared across the curve engine, network model and I/O layers.
//!
//! Each layer owns one enum so callers can match on the failure they can
//! actually recover from. Batch rendering only ever sees [`RenderError`].

use thiserror::Error;

/// Errors raised while synthesizing a single curve.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// The fuse rating is not one of the 22 tabulated classes.
    #[error("unsupported fuse rating {rating_a} A; expected one of the standard classes 6..=1250 A")]
    UnsupportedRating {
        /// Rating that was requested.
        rating_a: f64,
    },
}

/// Errors raised while wiring the network tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// The parent's kind cannot take another child.
    #[error("{kind} \"{parent}\" accepts at most {limit} child(ren); cannot attach \"{child}\"")]
    Cardinality {
        /// Parent node name.
        parent: String,
        /// Parent node kind.
        kind: &'static str,
        /// Maximum number of children for that kind.
        limit: usize,
        /// Child node name.
        child: String,
    },
    /// The child already hangs from another node.
    #[error("\"{child}\" is already attached to \"{parent}\"")]
    AlreadyAttached {
        /// Child node name.
        child: String,
        /// Current parent name.
        parent: String,
    },
    /// Attaching would close a loop.
    #[error("attaching \"{child}\" under \"{parent}\" would create a cycle")]
    Cycle {
        /// Parent node name.
        parent: String,
        /// Child node name.
        child: String,
    },
    /// The network source can never be a child.
    #[error("the network source \"{0}\" cannot be attached as a child")]
    RootAsChild(String),
    /// Bulk child replacement is only defined for buses.
    #[error("{kind} \"{name}\" does not hold a child list")]
    NotABus {
        /// Node name.
        name: String,
        /// Node kind.
        kind: &'static str,
    },
}

/// Errors raised while composing the chart of one item.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// No item with that name exists.
    #[error("no bus or load named \"{0}\"")]
    UnknownItem(String),
    /// Only buses and loads anchor a chart.
    #[error("\"{name}\" is a {kind}; only buses and loads can be plotted")]
    NotRenderable {
        /// Node name.
        name: String,
        /// Node kind.
        kind: &'static str,
    },
    /// The ancestor walk never reached the network source.
    #[error("\"{0}\" has no path to the network source")]
    Detached(String),
    /// A device on the path could not produce its curve.
    #[error("curve of \"{node}\" failed: {source}")]
    Curve {
        /// Node that owns the failing device.
        node: String,
        /// Underlying curve failure.
        #[source]
        source: CurveError,
    },
}

/// Errors raised while reading tabular input and building the tree.
#[derive(Error, Debug)]
pub enum InputError {
    /// Neither an input file nor a built-in network was configured.
    #[error("no network given: set input.path or input.preset")]
    NoSource,
    /// The built-in network name is not known.
    #[error("unknown network preset \"{0}\"")]
    UnknownPreset(String),
    /// The input file could not be opened.
    #[error("cannot read input: {0}")]
    Io(#[from] std::io::Error),
    /// The CSV layer rejected a record.
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    /// A numeric field did not parse after normalization.
    #[error("row {row}: column `{column}` has invalid number \"{value}\"")]
    InvalidNumber {
        /// 1-based data row.
        row: usize,
        /// Column name.
        column: &'static str,
        /// Raw cell text.
        value: String,
    },
    /// A required field was empty.
    #[error("row {row}: column `{column}` is required")]
    MissingField {
        /// 1-based data row.
        row: usize,
        /// Column name.
        column: &'static str,
    },
    /// The breaker curve family is neither `C` nor `M`.
    #[error("row {row}: unknown breaker curve family \"{value}\" (expected C or M)")]
    UnknownCurveFamily {
        /// 1-based data row.
        row: usize,
        /// Raw cell text.
        value: String,
    },
    /// Two rows share an item name.
    #[error("row {row}: item \"{name}\" is defined more than once")]
    DuplicateItem {
        /// 1-based data row.
        row: usize,
        /// Item name.
        name: String,
    },
    /// The feeder column names an item that does not exist.
    #[error("row {row}: feeder \"{name}\" does not exist")]
    UnknownFeeder {
        /// 1-based data row.
        row: usize,
        /// Feeder name.
        name: String,
    },
    /// The tree rejected an attachment.
    #[error("row {row}: {source}")]
    Network {
        /// 1-based data row.
        row: usize,
        /// Underlying attachment failure.
        #[source]
        source: NetworkError,
    },
}

/// Errors raised while persisting a chart.
#[derive(Error, Debug)]
pub enum ExportError {
    /// File-system failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// CSV serialization failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure of one item in a batch run.
#[derive(Error, Debug)]
pub enum ItemError {
    /// The chart could not be composed.
    #[error(transparent)]
    Render(#[from] RenderError),
    /// The chart could not be written.
    #[error(transparent)]
    Export(#[from] ExportError),
}
