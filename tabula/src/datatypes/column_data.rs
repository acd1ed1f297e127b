//! This module defines [ColumnData], the typed storage of a single table column.

use std::ops::Range;

use crate::error::Error;

use super::{Double, Factor, Value, ValueType};

/// Forwards a method call to the vector inside each variant of [ColumnData].
macro_rules! forward_to_vec {
    ($self:ident, $method:ident) => {
        match $self {
            ColumnData::Logical(vec) => vec.$method(),
            ColumnData::Integer(vec) => vec.$method(),
            ColumnData::Double(vec) => vec.$method(),
            ColumnData::Text(vec) => vec.$method(),
            ColumnData::Factor(factor) => factor.$method(),
        }
    };
}

/// Gathers the entries at the given indices of a vector, failing on indices out of range.
fn take_from_vec<T: Clone>(vec: &[T], indices: &[usize]) -> Result<Vec<T>, Error> {
    indices
        .iter()
        .map(|&index| {
            vec.get(index).cloned().ok_or(Error::IndexOutOfBounds {
                index,
                len: vec.len(),
            })
        })
        .collect()
}

/// Enum for columns of the different supported [value types](ValueType),
/// plus categorical columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColumnData {
    /// Case `Vec<bool>`
    Logical(Vec<bool>),
    /// Case `Vec<i64>`
    Integer(Vec<i64>),
    /// Case `Vec<Double>`
    Double(Vec<Double>),
    /// Case `Vec<String>`
    Text(Vec<String>),
    /// Case [Factor]
    Factor(Factor),
}

impl Default for ColumnData {
    fn default() -> Self {
        Self::Logical(Vec::new())
    }
}

impl ColumnData {
    /// Creates a new empty column for the given [ValueType]
    pub fn new(value_type: ValueType) -> Self {
        match value_type {
            ValueType::Logical => Self::Logical(Vec::new()),
            ValueType::Integer => Self::Integer(Vec::new()),
            ValueType::Double => Self::Double(Vec::new()),
            ValueType::Text => Self::Text(Vec::new()),
        }
    }

    /// Builds a column from a list of values.
    ///
    /// All values are coerced to the most general [ValueType] among them.
    /// An empty list results in an empty logical column.
    pub fn from_values(values: Vec<Value>) -> Self {
        let target = values
            .iter()
            .map(Value::value_type)
            .max()
            .unwrap_or(ValueType::Logical);

        let mut column = Self::new(target);
        for value in values {
            let value = value
                .coerce(target)
                .expect("target is the greatest type among the values");
            column.push(value);
        }

        column
    }

    /// Appends a value whose type matches this column.
    fn push(&mut self, value: Value) {
        match (self, value) {
            (ColumnData::Logical(vec), Value::Logical(val)) => vec.push(val),
            (ColumnData::Integer(vec), Value::Integer(val)) => vec.push(val),
            (ColumnData::Double(vec), Value::Double(val)) => vec.push(val),
            (ColumnData::Text(vec), Value::Text(val)) => vec.push(val),
            (column, value) => unreachable!(
                "value of type {} pushed onto {:?} column",
                value.value_type(),
                column.value_type()
            ),
        }
    }

    /// Returns the [ValueType] of the entries, or [None] for a factor.
    pub fn value_type(&self) -> Option<ValueType> {
        match self {
            ColumnData::Logical(_) => Some(ValueType::Logical),
            ColumnData::Integer(_) => Some(ValueType::Integer),
            ColumnData::Double(_) => Some(ValueType::Double),
            ColumnData::Text(_) => Some(ValueType::Text),
            ColumnData::Factor(_) => None,
        }
    }

    /// Returns the length of the column
    pub fn len(&self) -> usize {
        forward_to_vec!(self, len)
    }

    /// Returns whether the column is empty, or not
    pub fn is_empty(&self) -> bool {
        forward_to_vec!(self, is_empty)
    }

    /// Get the value at the given index. Factor entries are returned as their level.
    pub fn get(&self, index: usize) -> Option<Value> {
        match self {
            ColumnData::Logical(vec) => vec.get(index).copied().map(Value::Logical),
            ColumnData::Integer(vec) => vec.get(index).copied().map(Value::Integer),
            ColumnData::Double(vec) => vec.get(index).copied().map(Value::Double),
            ColumnData::Text(vec) => vec.get(index).cloned().map(Value::Text),
            ColumnData::Factor(factor) => factor.get(index).map(Value::from),
        }
    }

    /// Returns a new column containing the entries at `indices`, in that order.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfBounds`] for an index beyond the end of the column.
    pub fn take(&self, indices: &[usize]) -> Result<Self, Error> {
        Ok(match self {
            ColumnData::Logical(vec) => ColumnData::Logical(take_from_vec(vec, indices)?),
            ColumnData::Integer(vec) => ColumnData::Integer(take_from_vec(vec, indices)?),
            ColumnData::Double(vec) => ColumnData::Double(take_from_vec(vec, indices)?),
            ColumnData::Text(vec) => ColumnData::Text(take_from_vec(vec, indices)?),
            ColumnData::Factor(factor) => ColumnData::Factor(factor.take(indices)?),
        })
    }

    /// Returns a new column containing the entries in `range`.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfBounds`] if `range` does not lie within the column.
    pub fn slice(&self, range: Range<usize>) -> Result<Self, Error> {
        if range.start > range.end || range.end > self.len() {
            return Err(Error::IndexOutOfBounds {
                index: range.end.max(range.start),
                len: self.len(),
            });
        }

        Ok(match self {
            ColumnData::Logical(vec) => ColumnData::Logical(vec[range].to_vec()),
            ColumnData::Integer(vec) => ColumnData::Integer(vec[range].to_vec()),
            ColumnData::Double(vec) => ColumnData::Double(vec[range].to_vec()),
            ColumnData::Text(vec) => ColumnData::Text(vec[range].to_vec()),
            ColumnData::Factor(factor) => {
                ColumnData::Factor(factor.take(&range.collect::<Vec<_>>())?)
            }
        })
    }

    /// Returns an iterator over the values of this column.
    pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        (0..self.len()).filter_map(move |index| self.get(index))
    }
}

impl From<Vec<bool>> for ColumnData {
    fn from(value: Vec<bool>) -> Self {
        ColumnData::Logical(value)
    }
}

impl From<Vec<i64>> for ColumnData {
    fn from(value: Vec<i64>) -> Self {
        ColumnData::Integer(value)
    }
}

impl From<Vec<Double>> for ColumnData {
    fn from(value: Vec<Double>) -> Self {
        ColumnData::Double(value)
    }
}

impl From<Vec<String>> for ColumnData {
    fn from(value: Vec<String>) -> Self {
        ColumnData::Text(value)
    }
}

impl From<Vec<&str>> for ColumnData {
    fn from(value: Vec<&str>) -> Self {
        ColumnData::Text(value.into_iter().map(String::from).collect())
    }
}

impl From<Factor> for ColumnData {
    fn from(value: Factor) -> Self {
        ColumnData::Factor(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use quickcheck_macros::quickcheck;
    use test_log::test;

    #[test]
    fn from_values_coerces_to_most_general_type() {
        let column = ColumnData::from_values(vec![
            Value::Integer(1),
            Value::Double(Double::from_number(2.5)),
        ]);
        assert_eq!(
            column,
            ColumnData::Double(vec![Double::from_number(1.0), Double::from_number(2.5)])
        );

        let column = ColumnData::from_values(vec![Value::Logical(true), Value::from("a")]);
        assert_eq!(column, ColumnData::from(vec!["TRUE", "a"]));

        assert_eq!(ColumnData::from_values(vec![]), ColumnData::Logical(vec![]));
    }

    #[test]
    fn take_and_slice() {
        let column = ColumnData::from(vec![10i64, 20, 30, 40]);

        assert_eq!(
            column.take(&[3, 0, 0]).ok(),
            Some(ColumnData::from(vec![40i64, 10, 10]))
        );
        assert!(matches!(
            column.take(&[4]),
            Err(Error::IndexOutOfBounds { index: 4, len: 4 })
        ));
        assert_eq!(
            column.slice(1..3).ok(),
            Some(ColumnData::from(vec![20i64, 30]))
        );
        assert!(column.slice(2..5).is_err());
    }

    #[test]
    fn factor_columns_yield_levels() {
        let column = ColumnData::from(Factor::new(&["lo", "hi", "lo"]));

        assert_eq!(column.value_type(), None);
        assert_eq!(column.get(1), Some(Value::from("hi")));
        assert_eq!(column.iter().count(), 3);
    }

    #[quickcheck]
    fn take_all_indices_is_identity(values: Vec<i64>) -> bool {
        let column = ColumnData::from(values.clone());
        let indices = (0..values.len()).collect::<Vec<_>>();

        column.take(&indices).ok() == Some(column)
    }
}
