//! This module defines [Value], a single cell of a table, and [ValueType].

use std::fmt;

use crate::error::Error;

use super::Double;

/// Types of atomic values.
///
/// The declaration order is the coercion hierarchy:
/// a column holding values of several types is stored as the greatest of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueType {
    /// Truth values
    Logical,
    /// 64-bit signed integers
    Integer,
    /// Finite floating point numbers
    Double,
    /// Character strings
    Text,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Logical => "logical",
            ValueType::Integer => "integer",
            ValueType::Double => "double",
            ValueType::Text => "text",
        };
        write!(f, "{name}")
    }
}

/// Enum for values of all supported atomic types.
/// This should not be used to represent large numbers of values;
/// columns store their values in a [`ColumnData`][super::ColumnData].
#[allow(variant_size_differences)]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Value {
    /// A [`ValueType::Logical`] value
    Logical(bool),
    /// A [`ValueType::Integer`] value
    Integer(i64),
    /// A [`ValueType::Double`] value
    Double(Double),
    /// A [`ValueType::Text`] value
    Text(String),
}

impl Value {
    /// Returns the [ValueType] of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Logical(_) => ValueType::Logical,
            Value::Integer(_) => ValueType::Integer,
            Value::Double(_) => ValueType::Double,
            Value::Text(_) => ValueType::Text,
        }
    }

    /// Converts the value into the given, more general type.
    ///
    /// Logical values become `1`/`0`, integers become doubles
    /// and every value can be turned into text.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if `target` lies below the type of this value.
    pub fn coerce(self, target: ValueType) -> Result<Value, Error> {
        let source = self.value_type();
        if target < source {
            return Err(Error::invalid_argument(format!(
                "cannot coerce {source} value to {target}"
            )));
        }

        Ok(match (self, target) {
            (value, ValueType::Text) => Value::Text(value.to_string()),
            (Value::Logical(b), ValueType::Integer) => Value::Integer(i64::from(b)),
            (Value::Logical(b), ValueType::Double) => {
                Value::Double(Double::from_number(if b { 1.0 } else { 0.0 }))
            }
            (Value::Integer(i), ValueType::Double) => Value::Double(Double::from_number(i as f64)),
            (value, _) => value,
        })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Logical(true) => write!(f, "TRUE"),
            Value::Logical(false) => write!(f, "FALSE"),
            Value::Integer(val) => write!(f, "{val}"),
            Value::Double(val) => write!(f, "{val}"),
            Value::Text(val) => write!(f, "{val}"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Logical(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<Double> for Value {
    fn from(value: Double) -> Self {
        Value::Double(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}
