use std::path::PathBuf;

use thiserror::Error;

use crate::shape::ShapeId;

/// Top-level error type for dice shape handling.
#[derive(Debug, Error)]
pub enum DiceError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DiceError {
    /// Wraps an I/O error together with the path it occurred on.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors raised while decoding shape files.
///
/// Line numbers are 1-based.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("line {line}: invalid number {token:?}")]
    InvalidNumber { line: usize, token: String },

    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// `index` is the reference as written in the file: 0-based in the
    /// point/edge format, 1-based or negative (relative) in OBJ.
    #[error("line {line}: point index {index} is out of range for {count} points")]
    IndexOutOfRange {
        line: usize,
        index: i64,
        count: usize,
    },

    #[error("line {line}: element needs at least {min} vertices, found {found}")]
    TooFewVertices {
        line: usize,
        min: usize,
        found: usize,
    },
}

/// Errors related to the shape store.
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("no shape file found for id {id}")]
    MissingFile { id: ShapeId },

    #[error("shape {id} is not loaded")]
    NotLoaded { id: ShapeId },

    #[error("scale factor {factor} would make the scale of shape {id} degenerate")]
    DegenerateScale { id: ShapeId, factor: f64 },
}

/// Convenience type alias for results using [`DiceError`].
pub type Result<T> = std::result::Result<T, DiceError>;
