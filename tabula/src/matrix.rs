//! This module defines [Matrix], a two-dimensional container over a single element type.

use num::{One, Zero};

use crate::error::Error;

/// Order in which the elements of a [Matrix] are stored in its flattened representation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Columns are stored one after another
    #[default]
    ColumnMajor,
    /// Rows are stored one after another
    RowMajor,
}

impl Layout {
    /// Returns the other layout.
    pub fn flipped(self) -> Self {
        match self {
            Layout::ColumnMajor => Layout::RowMajor,
            Layout::RowMajor => Layout::ColumnMajor,
        }
    }
}

/// Fixed-size two-dimensional container of elements of type `T`.
///
/// The elements are kept in a single vector whose traversal order is given by the [Layout].
/// It is always the case that `nrows() * ncols() == len()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
    layout: Layout,
}

impl<T> Matrix<T> {
    /// Creates a matrix of the given dimensions from its flattened representation.
    ///
    /// # Errors
    /// Returns [`Error::DimensionMismatch`] if `data` does not contain exactly `rows * cols` elements.
    pub fn new(rows: usize, cols: usize, data: Vec<T>, layout: Layout) -> Result<Self, Error> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(Error::DimensionMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }

        Ok(Self {
            rows,
            cols,
            data,
            layout,
        })
    }

    /// Creates a matrix from a list of rows, stored in [`Layout::RowMajor`].
    ///
    /// # Errors
    /// Returns [`Error::DimensionMismatch`] if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, Error> {
        let (outer, inner, data) = Self::flatten(rows)?;
        Self::new(outer, inner, data, Layout::RowMajor)
    }

    /// Creates a matrix from a list of columns, stored in [`Layout::ColumnMajor`].
    ///
    /// # Errors
    /// Returns [`Error::DimensionMismatch`] if the columns differ in length.
    pub fn from_columns(columns: Vec<Vec<T>>) -> Result<Self, Error> {
        let (outer, inner, data) = Self::flatten(columns)?;
        Self::new(inner, outer, data, Layout::ColumnMajor)
    }

    fn flatten(nested: Vec<Vec<T>>) -> Result<(usize, usize, Vec<T>), Error> {
        let outer = nested.len();
        let inner = nested.first().map_or(0, Vec::len);

        if nested.iter().any(|part| part.len() != inner) {
            return Err(Error::DimensionMismatch {
                rows: outer,
                cols: inner,
                len: nested.iter().map(Vec::len).sum(),
            });
        }

        Ok((outer, inner, nested.into_iter().flatten().collect()))
    }

    /// Number of rows
    pub fn nrows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// Total number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns whether the matrix has no elements, i.e., no rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Storage order of the elements
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Returns the flattened representation, in the order given by [`Matrix::layout`].
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Position of the element at (`row`, `col`) in the flattened representation.
    pub fn linear_index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }

        Some(match self.layout {
            Layout::ColumnMajor => col * self.rows + row,
            Layout::RowMajor => row * self.cols + col,
        })
    }

    /// Returns a reference to the element at (`row`, `col`).
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.linear_index(row, col).map(|index| &self.data[index])
    }

    fn check_row(&self, row: usize) -> Result<(), Error> {
        if row >= self.rows {
            return Err(Error::IndexOutOfBounds {
                index: row,
                len: self.rows,
            });
        }
        Ok(())
    }

    fn check_col(&self, col: usize) -> Result<(), Error> {
        if col >= self.cols {
            return Err(Error::IndexOutOfBounds {
                index: col,
                len: self.cols,
            });
        }
        Ok(())
    }
}

impl<T: Clone> Matrix<T> {
    /// Returns the elements of row `row` as a plain vector.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfBounds`] if there is no such row.
    pub fn row(&self, row: usize) -> Result<Vec<T>, Error> {
        self.check_row(row)?;
        Ok((0..self.cols)
            .map(|col| self.data[self.index_unchecked(row, col)].clone())
            .collect())
    }

    /// Returns the elements of column `col` as a plain vector.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfBounds`] if there is no such column.
    pub fn column(&self, col: usize) -> Result<Vec<T>, Error> {
        self.check_col(col)?;
        Ok((0..self.rows)
            .map(|row| self.data[self.index_unchecked(row, col)].clone())
            .collect())
    }

    /// Returns the elements at the given (row, column) coordinates, in the order given.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfBounds`] if a coordinate lies outside the matrix.
    pub fn gather(&self, coordinates: &[(usize, usize)]) -> Result<Vec<T>, Error> {
        coordinates
            .iter()
            .map(|&(row, col)| {
                self.check_row(row)?;
                self.check_col(col)?;
                Ok(self.data[self.index_unchecked(row, col)].clone())
            })
            .collect()
    }

    /// Returns the matrix formed by the given rows and columns, in the order given.
    ///
    /// Unlike [`Matrix::row`] and [`Matrix::column`], the result stays two-dimensional,
    /// even if only a single row or column is selected.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfBounds`] if a row or column does not exist.
    pub fn submatrix(&self, rows: &[usize], cols: &[usize]) -> Result<Matrix<T>, Error> {
        rows.iter().try_for_each(|&row| self.check_row(row))?;
        cols.iter().try_for_each(|&col| self.check_col(col))?;

        let data = match self.layout {
            Layout::ColumnMajor => cols
                .iter()
                .flat_map(|&col| rows.iter().map(move |&row| (row, col)))
                .map(|(row, col)| self.data[self.index_unchecked(row, col)].clone())
                .collect(),
            Layout::RowMajor => rows
                .iter()
                .flat_map(|&row| cols.iter().map(move |&col| (row, col)))
                .map(|(row, col)| self.data[self.index_unchecked(row, col)].clone())
                .collect(),
        };

        Ok(Matrix {
            rows: rows.len(),
            cols: cols.len(),
            data,
            layout: self.layout,
        })
    }

    /// Returns the transposed matrix.
    ///
    /// The flattened representation is reused as is, so the result has the opposite layout.
    pub fn transpose(&self) -> Matrix<T> {
        Matrix {
            rows: self.cols,
            cols: self.rows,
            data: self.data.clone(),
            layout: self.layout.flipped(),
        }
    }

    /// Returns the same matrix stored in the given layout.
    pub fn to_layout(&self, layout: Layout) -> Matrix<T> {
        if layout == self.layout {
            return self.clone();
        }

        let data = match layout {
            Layout::ColumnMajor => (0..self.cols)
                .flat_map(|col| (0..self.rows).map(move |row| (row, col)))
                .map(|(row, col)| self.data[self.index_unchecked(row, col)].clone())
                .collect(),
            Layout::RowMajor => (0..self.rows)
                .flat_map(|row| (0..self.cols).map(move |col| (row, col)))
                .map(|(row, col)| self.data[self.index_unchecked(row, col)].clone())
                .collect(),
        };

        Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
            layout,
        }
    }

    /// Returns the elements above the diagonal (and on it, if `include_diagonal` is set),
    /// traversed column by column.
    pub fn upper_triangle(&self, include_diagonal: bool) -> Vec<T> {
        (0..self.cols)
            .flat_map(|col| (0..self.rows).map(move |row| (row, col)))
            .filter(|&(row, col)| row < col || (include_diagonal && row == col))
            .map(|(row, col)| self.data[self.index_unchecked(row, col)].clone())
            .collect()
    }

    /// Returns the elements at (0, 0), (1, 1), ..., i.e., `min(nrows, ncols)` elements.
    ///
    /// The elements are read from the flattened representation, starting at position 0
    /// and advancing by `nrows + 1` in [`Layout::ColumnMajor`] or by `ncols + 1` in [`Layout::RowMajor`].
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if the matrix has no rows or no columns.
    pub fn diagonal(&self) -> Result<Vec<T>, Error> {
        if self.rows == 0 || self.cols == 0 {
            return Err(Error::invalid_argument(format!(
                "a {}x{} matrix has no diagonal",
                self.rows, self.cols
            )));
        }

        let step = match self.layout {
            Layout::ColumnMajor => self.rows + 1,
            Layout::RowMajor => self.cols + 1,
        };

        Ok(self
            .data
            .iter()
            .step_by(step)
            .take(self.rows.min(self.cols))
            .cloned()
            .collect())
    }

    fn index_unchecked(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        match self.layout {
            Layout::ColumnMajor => col * self.rows + row,
            Layout::RowMajor => row * self.cols + col,
        }
    }
}

impl<T: Clone + Zero + One> Matrix<T> {
    /// Creates the `n`x`n` identity matrix.
    pub fn identity(n: usize) -> Matrix<T> {
        let data = (0..n * n)
            .map(|index| {
                if index % (n + 1) == 0 {
                    T::one()
                } else {
                    T::zero()
                }
            })
            .collect();

        Matrix {
            rows: n,
            cols: n,
            data,
            layout: Layout::ColumnMajor,
        }
    }
}
