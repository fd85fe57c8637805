//! Error types shared by the generators and the model-file reader.

use thiserror::Error;

use super::type_lib::NumericData;

/// Rejected grid or profile parameters.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("grid needs at least one zone (nx = 0)")]
    EmptyGrid,
    #[error("outer radius {r_max} must exceed inner radius {r_min}")]
    InvertedGrid { r_min: NumericData, r_max: NumericData },
    #[error("inner radius {0} is negative")]
    NegativeRadius(NumericData),
    #[error("header label {0:?} must be one token that is not a zone count")]
    InvalidLabel(String),
}

/// Failures while reading a `1D_sphere` model file back in.
#[derive(Debug, Error, PartialEq)]
pub enum ModelFileError {
    #[error("model file is empty")]
    Empty,
    #[error("missing {0}")]
    MissingToken(&'static str),
    #[error("could not parse {field} from {token:?}")]
    BadNumber { field: &'static str, token: String },
    #[error("grid type {0:?} disagrees with 1D_sphere")]
    WrongGridType(String),
    #[error("unexpected trailing token {0:?} in header")]
    TrailingHeaderToken(String),
    #[error("header declares {expected} zones but {found} rows follow")]
    RowCount { expected: usize, found: usize },
    #[error("row {row}: expected 4 columns, found {found}")]
    ColumnCount { row: usize, found: usize },
    #[error("row {row}: radius {radius} does not exceed previous edge {previous}")]
    NonMonotonicRadius { row: usize, radius: NumericData, previous: NumericData },
    #[error("row {row}: {field} = {value} out of range")]
    OutOfRange { row: usize, field: &'static str, value: NumericData },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Top-level error for the generators.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
