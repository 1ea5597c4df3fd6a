use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the arrangement segment traits.
///
/// Predicate contract violations are not represented here; they panic.
#[derive(Debug, Error)]
pub enum ArrangementError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Io(#[from] IoError),
}

/// Errors raised when constructing geometric values.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate segment: source and target coincide")]
    DegenerateSegment,

    #[error("non-finite coordinate: ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },
}

/// Errors raised by the point-set reader and writer.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("cannot write point set: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },

    #[error("normal vector of point {index} has zero length")]
    ZeroNormal { index: usize },
}

/// Convenience type alias for results using [`ArrangementError`].
pub type Result<T> = std::result::Result<T, ArrangementError>;
