//! This module defines [Table], an ordered collection of named, equally long columns.

use std::{collections::HashSet, ops::Range};

use crate::{
    datatypes::{ColumnData, Value},
    error::Error,
    permutator::Permutator,
};

/// Ordered sequence of named columns of a common length.
///
/// Columns may differ in type from each other. Column names are unique and
/// are only ever matched exactly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<(String, ColumnData)>,
    rows: usize,
}

impl Table {
    /// Creates a table from a list of named columns.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateColumnName`] if two columns share a name and
    /// [`Error::ColumnLengthMismatch`] if the columns differ in length.
    pub fn new(columns: Vec<(String, ColumnData)>) -> Result<Self, Error> {
        let rows = columns.first().map_or(0, |(_, column)| column.len());

        let mut names = HashSet::with_capacity(columns.len());
        for (name, column) in &columns {
            if !names.insert(name.as_str()) {
                return Err(Error::DuplicateColumnName(name.clone()));
            }
            if column.len() != rows {
                return Err(Error::ColumnLengthMismatch {
                    name: name.clone(),
                    expected: rows,
                    found: column.len(),
                });
            }
        }

        Ok(Self { columns, rows })
    }

    /// Creates a table without any columns or rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of rows
    pub fn nrows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn ncols(&self) -> usize {
        self.columns.len()
    }

    /// Returns the column names, in column order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Returns an iterator over the named columns, in column order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &ColumnData)> {
        self.columns
            .iter()
            .map(|(name, column)| (name.as_str(), column))
    }

    fn position(&self, name: &str) -> Result<usize, Error> {
        self.columns
            .iter()
            .position(|(column_name, _)| column_name == name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))
    }

    /// Returns the column with the given name.
    ///
    /// # Errors
    /// Returns [`Error::ColumnNotFound`] if no column has exactly this name.
    pub fn column(&self, name: &str) -> Result<&ColumnData, Error> {
        self.position(name).map(|index| &self.columns[index].1)
    }

    /// Returns the column at position `index`.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfBounds`] if there is no such column.
    pub fn column_at(&self, index: usize) -> Result<&ColumnData, Error> {
        self.columns
            .get(index)
            .map(|(_, column)| column)
            .ok_or(Error::IndexOutOfBounds {
                index,
                len: self.columns.len(),
            })
    }

    /// Returns the values of row `index`, in column order.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfBounds`] if there is no such row.
    pub fn row(&self, index: usize) -> Result<Vec<Value>, Error> {
        if index >= self.rows {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.rows,
            });
        }

        Ok(self
            .columns
            .iter()
            .filter_map(|(_, column)| column.get(index))
            .collect())
    }

    /// Returns the table with the given columns, in the order given.
    ///
    /// # Errors
    /// Returns [`Error::ColumnNotFound`] for an unknown name and
    /// [`Error::DuplicateColumnName`] if a name is requested twice.
    pub fn select(&self, names: &[&str]) -> Result<Table, Error> {
        let indices = names
            .iter()
            .map(|name| self.position(name))
            .collect::<Result<Vec<_>, _>>()?;
        self.select_at(&indices)
    }

    /// Returns the table with the columns at the given positions, in the order given.
    ///
    /// Selecting no columns keeps the row count.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfBounds`] for a position beyond the last column and
    /// [`Error::DuplicateColumnName`] if a position is requested twice.
    pub fn select_at(&self, indices: &[usize]) -> Result<Table, Error> {
        let mut seen = HashSet::with_capacity(indices.len());
        let mut columns = Vec::with_capacity(indices.len());

        for &index in indices {
            let (name, column) = self.columns.get(index).ok_or(Error::IndexOutOfBounds {
                index,
                len: self.columns.len(),
            })?;
            if !seen.insert(index) {
                return Err(Error::DuplicateColumnName(name.clone()));
            }
            columns.push((name.clone(), column.clone()));
        }

        Ok(Table {
            columns,
            rows: self.rows,
        })
    }

    /// Returns the table without the given columns.
    ///
    /// # Errors
    /// Returns [`Error::ColumnNotFound`] for an unknown name.
    pub fn drop_columns(&self, names: &[&str]) -> Result<Table, Error> {
        let dropped = names
            .iter()
            .map(|name| self.position(name))
            .collect::<Result<HashSet<_>, _>>()?;

        let columns = self
            .columns
            .iter()
            .enumerate()
            .filter(|(index, _)| !dropped.contains(index))
            .map(|(_, named)| named.clone())
            .collect();

        Ok(Table {
            columns,
            rows: self.rows,
        })
    }

    /// Returns the table consisting of the rows in `range`.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfBounds`] if `range` does not lie within the table.
    pub fn rows(&self, range: Range<usize>) -> Result<Table, Error> {
        if range.start > range.end || range.end > self.rows {
            return Err(Error::IndexOutOfBounds {
                index: range.end.max(range.start),
                len: self.rows,
            });
        }

        self.map_columns(range.len(), |column| column.slice(range.clone()))
    }

    /// Returns the table consisting of the rows at `indices`, in the order given.
    /// Rows may be repeated.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfBounds`] for an index beyond the last row.
    pub fn take_rows(&self, indices: &[usize]) -> Result<Table, Error> {
        if let Some(&index) = indices.iter().find(|&&index| index >= self.rows) {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.rows,
            });
        }

        self.map_columns(indices.len(), |column| column.take(indices))
    }

    /// Returns the table consisting of the rows for which `mask` is `true`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if `mask` does not have one entry per row.
    pub fn filter(&self, mask: &[bool]) -> Result<Table, Error> {
        if mask.len() != self.rows {
            return Err(Error::invalid_argument(format!(
                "mask of length {} applied to a table with {} rows",
                mask.len(),
                self.rows
            )));
        }

        let indices = mask
            .iter()
            .enumerate()
            .filter_map(|(index, &keep)| keep.then_some(index))
            .collect::<Vec<_>>();
        self.take_rows(&indices)
    }

    /// Returns the first `n` rows, or the whole table if it has fewer rows.
    pub fn head(&self, n: usize) -> Table {
        self.rows(0..n.min(self.rows))
            .expect("range is clamped to the row count")
    }

    /// Returns the last `n` rows, or the whole table if it has fewer rows.
    pub fn tail(&self, n: usize) -> Table {
        self.rows(self.rows - n.min(self.rows)..self.rows)
            .expect("range is clamped to the row count")
    }

    /// Returns a table where the column `name` is replaced by `column`,
    /// or appended if no such column exists.
    ///
    /// # Errors
    /// Returns [`Error::ColumnLengthMismatch`] if the table has columns of a different length.
    pub fn with_column(&self, name: &str, column: ColumnData) -> Result<Table, Error> {
        let mut columns = self.columns.clone();
        match self.position(name) {
            Ok(index) => columns[index].1 = column,
            Err(_) => columns.push((name.to_string(), column)),
        }

        Table::new(columns)
    }

    /// Returns the table with its columns reordered by `permutator`.
    ///
    /// # Errors
    /// Returns [`Error::PermutationApplyWrongLen`] if the permutation covers more columns than exist.
    pub fn reorder_columns(&self, permutator: &Permutator) -> Result<Table, Error> {
        let columns = permutator.permute(&self.columns)?.collect();

        Ok(Table {
            columns,
            rows: self.rows,
        })
    }

    /// Returns the table with its rows reordered by `permutator`.
    ///
    /// # Errors
    /// Returns [`Error::PermutationApplyWrongLen`] if the permutation covers more rows than exist.
    pub fn reorder_rows(&self, permutator: &Permutator) -> Result<Table, Error> {
        if permutator.len() > self.rows {
            return Err(Error::PermutationApplyWrongLen(self.rows, permutator.len()));
        }

        self.map_columns(self.rows, |column| permutator.apply_column(column))
    }

    fn map_columns<F>(&self, rows: usize, mut f: F) -> Result<Table, Error>
    where
        F: FnMut(&ColumnData) -> Result<ColumnData, Error>,
    {
        let columns = self
            .columns
            .iter()
            .map(|(name, column)| Ok((name.clone(), f(column)?)))
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(Table { columns, rows })
    }
}
