//! This crate defines typed in-memory containers for tabular data,
//! i.e., matrices over a single element type and tables of named,
//! independently typed columns, together with explicit subsetting
//! operations on them.
//!
//! Subsetting comes in two flavours, which are kept as separately named operations:
//! *simplifying* operations (e.g. [`Table::column`][tabular::table::Table::column],
//! [`Matrix::row`][matrix::Matrix::row]) return the simplest representable result,
//! whereas *preserving* operations (e.g. [`Table::select`][tabular::table::Table::select],
//! [`Matrix::submatrix`][matrix::Matrix::submatrix]) keep the structure of their input.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts
)]
#![warn(
    missing_docs,
    unused_import_braces,
    unused_qualifications,
    unused_extern_crates,
    variant_size_differences,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]

pub mod datatypes;
pub mod error;
pub mod io;
pub mod matrix;
pub mod permutator;
pub mod tabular;

pub use error::{Error, ReadingError};
pub use matrix::{Layout, Matrix};
pub use tabular::table::Table;
