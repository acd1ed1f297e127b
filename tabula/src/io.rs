//! This module contains readers that build [tables][crate::tabular::table::Table] from text input.

pub mod dsv;
