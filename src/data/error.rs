use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while bulk-loading a rating dataset.
///
/// A load is all-or-nothing: the first failing document aborts the whole
/// call and no partial store is returned.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The storage location or one of its documents could not be read.
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document is not valid JSON or does not match the record schema
    /// (missing field, wrong type, negative comment count).
    #[error("parsing {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A CSV dataset row could not be read or parsed.
    #[error("reading CSV {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A document parsed but violates a record invariant.
    #[error("invalid record in {}: {reason}", path.display())]
    InvalidRecord { path: PathBuf, reason: String },

    /// The dataset path has an extension `load_all` does not understand.
    #[error("unsupported dataset format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },
}

/// An unrecognized sort key passed to `RatingStore::sort_by`. The store's
/// order is left untouched.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort field: {0:?}")]
pub struct InvalidFieldError(pub String);

/// Strict-mode tag filtering only: the tag matched no record at all.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("tag {0:?} does not appear in any record")]
pub struct UnknownTagError(pub String);
