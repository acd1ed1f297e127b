//! This module collects the datatypes that can be stored in tables.

/// Module for defining [Double]
pub mod double;
pub use double::Double;
/// Module for defining [Value] and [ValueType]
pub mod value;
pub use value::{Value, ValueType};
/// Module for defining [Factor]
pub mod factor;
pub use factor::Factor;
/// Module for defining [ColumnData]
pub mod column_data;
pub use column_data::ColumnData;
