//! This module collects data structures and operations for tables.

pub mod operations;
pub mod table;
