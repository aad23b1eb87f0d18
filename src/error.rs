use thiserror::Error;

/// Errors surfaced by dataset construction and attribute-indexed statistics.
///
/// Every variant is a caller contract violation; there is no transient
/// failure class in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The table cannot be used as a dataset: zero rows, fewer than two
    /// columns, or rows with inconsistent column counts.
    #[error("invalid dataset: {0}")]
    InvalidInput(String),

    /// An attribute index referenced a column outside `0..n_attributes`.
    /// The label column is not addressable as an attribute.
    #[error("attribute index {index} out of range: dataset has {n_attributes} attributes")]
    IndexOutOfRange { index: usize, n_attributes: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
