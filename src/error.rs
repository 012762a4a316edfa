use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Library error type
// ---------------------------------------------------------------------------

/// Everything that can go wrong while loading a dataset or building a figure.
#[derive(Debug, Error)]
pub enum Error {
    // -- container --
    #[error("dataset container not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot open dataset container {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: hdf5::Error,
    },

    // -- fields --
    #[error("dataset container has no field '{field}'")]
    MissingField { field: &'static str },

    #[error("failed to read field '{field}'")]
    Read {
        field: &'static str,
        #[source]
        source: hdf5::Error,
    },

    #[error("field '{field}' has rank {found}, expected {expected}")]
    Rank {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("field '{field}' does not fit its declared shape")]
    Shape {
        field: &'static str,
        #[source]
        source: ndarray::ShapeError,
    },

    // -- labels --
    #[error("field '{field}' holds {found} values, expected byte-string labels")]
    LabelType { field: &'static str, found: String },

    #[error("labels in field '{field}' are {len} bytes wide, limit is {max}")]
    LabelTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    // -- visualizer --
    #[error("stimulus index {index} is out of range for {len} samples")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("expected 3 colour channels, found {found}")]
    ChannelCount { found: usize },

    #[error("display failed: {0}")]
    Display(String),

    // -- viewer config --
    #[error("cannot read viewer config {}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid viewer config {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
