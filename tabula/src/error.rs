//! Error-handling module for the crate

use thiserror::Error;

/// Error-Collection for errors related to reading tables from delimiter-separated text.
/// Used by the [`DsvReader`][crate::io::dsv::DsvReader].
#[allow(variant_size_differences)]
#[derive(Error, Debug)]
pub enum ReadingError {
    /// Error reported by the underlying csv parser
    #[error(transparent)]
    Csv(#[from] csv::Error),
    /// Could not read the dsv headers
    #[error("cannot read headers in csv/dsv input")]
    DsvMissingHeaders,
    /// A record has a different number of fields than the header
    #[error("line {line} has {found} fields, expected {expected}")]
    RaggedRow {
        /// Line of the offending record
        line: u64,
        /// Number of fields given by the first record or the header
        expected: usize,
        /// Number of fields found in the record
        found: usize,
    },
    /// Number of explicit column types does not match the number of columns
    #[error("{given} column types were given for {columns} columns")]
    ColumnTypeCount {
        /// Number of types provided by the caller
        given: usize,
        /// Number of columns in the input
        columns: usize,
    },
}

/// Error-Collection for all the possible Errors occurring in this crate
#[allow(variant_size_differences)]
#[derive(Error, Debug)]
pub enum Error {
    /// An argument lies outside the domain of an operation
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Lookup of a column name that does not exist (names are matched exactly)
    #[error("no column named \"{0}\"")]
    ColumnNotFound(String),
    /// Two columns of a table would share a name
    #[error("duplicate column name \"{0}\"")]
    DuplicateColumnName(String),
    /// A column does not have the row count of its table
    #[error("column \"{name}\" has length {found}, but the table has {expected} rows")]
    ColumnLengthMismatch {
        /// Name of the offending column
        name: String,
        /// Row count of the table
        expected: usize,
        /// Length of the column
        found: usize,
    },
    /// Positional access beyond the end of a container
    #[error("index {index} is out of bounds for length {len}")]
    IndexOutOfBounds {
        /// The requested index
        index: usize,
        /// Length of the indexed dimension
        len: usize,
    },
    /// The flattened data of a matrix does not fit its dimensions
    #[error("{len} elements cannot form a {rows}x{cols} matrix")]
    DimensionMismatch {
        /// Requested number of rows
        rows: usize,
        /// Requested number of columns
        cols: usize,
        /// Number of elements supplied
        len: usize,
    },
    /// Permutation shall be applied to a too small amount of data
    #[error("Permutation data length ({0}) is smaller than the permutation length ({1})")]
    PermutationApplyWrongLen(usize, usize),
    /// A factor value is not among the declared levels
    #[error("value \"{0}\" is not a level of the factor")]
    UnknownFactorLevel(String),
    /// Floating point value is NaN or infinite
    #[error("floating point value {0} is not finite")]
    NonFiniteDouble(f64),
    /// Error that happened while reading a Table
    #[error(transparent)]
    ReadingError(#[from] ReadingError),
}

impl Error {
    /// Shorthand for [`Error::InvalidArgument`]
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
