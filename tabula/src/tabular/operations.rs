//! Whole-table helpers: reordering columns and rows, sampling rows,
//! and extracting the diagonal of a matrix.
//!
//! All functions borrow their input and return a new value.
//! Randomized functions take the random source as an explicit argument,
//! so results are reproducible with a seeded generator.

use rand::{seq::index, Rng};

use crate::{error::Error, matrix::Matrix, permutator::Permutator};

use super::table::Table;

/// Returns the elements on the diagonal of `matrix`, see [`Matrix::diagonal`].
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if the matrix has no rows or no columns.
pub fn extract_diagonal<T: Clone>(matrix: &Matrix<T>) -> Result<Vec<T>, Error> {
    matrix.diagonal()
}

/// Returns `table` with its columns in a uniformly random order.
/// The data within each column is unchanged.
pub fn permute_columns<R>(table: &Table, rng: &mut R) -> Table
where
    R: Rng + ?Sized,
{
    let permutator = Permutator::random(table.ncols(), rng);
    log::debug!("permuting columns by {:?}", permutator.get_sort_vec());

    table
        .reorder_columns(&permutator)
        .expect("permutation has one entry per column")
}

/// Returns `table` with its columns sorted by name.
///
/// Names are compared byte-wise, i.e., case-sensitive and independent of the locale.
pub fn alphabetize_columns(table: &Table) -> Table {
    let permutator = Permutator::sort_from_vec(&table.column_names());

    table
        .reorder_columns(&permutator)
        .expect("permutation has one entry per column")
}

/// Returns `table` with both its rows and its columns in a uniformly random order.
pub fn permute_rows_and_columns<R>(table: &Table, rng: &mut R) -> Table
where
    R: Rng + ?Sized,
{
    let rows = Permutator::random(table.nrows(), rng);
    log::debug!("permuting rows by {:?}", rows.get_sort_vec());

    let shuffled = table
        .reorder_rows(&rows)
        .expect("permutation has one entry per row");
    permute_columns(&shuffled, rng)
}

/// Returns `size` consecutive rows of `table`, starting at a uniformly random row.
///
/// If `size` exceeds the number of rows, the whole table is returned.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if the table has no rows or `size` is zero.
pub fn sample_contiguous_rows<R>(table: &Table, size: usize, rng: &mut R) -> Result<Table, Error>
where
    R: Rng + ?Sized,
{
    let rows = table.nrows();
    if rows == 0 {
        return Err(Error::invalid_argument(
            "cannot sample rows from a table without rows",
        ));
    }
    if size == 0 {
        return Err(Error::invalid_argument("sample size must be at least 1"));
    }

    let size = size.min(rows);
    let start = rng.gen_range(0..=rows - size);
    log::debug!("sampling rows {start}..{} of {rows}", start + size);

    table.rows(start..start + size)
}

/// Returns `size` distinct rows of `table`, drawn uniformly at random,
/// in the order in which they were drawn.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if the table has no rows or fewer than `size` rows.
pub fn sample_rows<R>(table: &Table, size: usize, rng: &mut R) -> Result<Table, Error>
where
    R: Rng + ?Sized,
{
    let rows = table.nrows();
    if rows == 0 {
        return Err(Error::invalid_argument(
            "cannot sample rows from a table without rows",
        ));
    }
    if size > rows {
        return Err(Error::invalid_argument(format!(
            "cannot sample {size} distinct rows from a table with {rows} rows"
        )));
    }

    let indices = index::sample(rng, rows, size).into_vec();
    log::debug!("sampling rows {indices:?}");

    table.take_rows(&indices)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::datatypes::ColumnData;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;
    use test_log::test;

    fn numbered(rows: i64, names: &[&str]) -> Table {
        Table::new(
            names
                .iter()
                .map(|name| (name.to_string(), ColumnData::from((0..rows).collect::<Vec<_>>())))
                .collect(),
        )
        .expect("columns are well-formed")
    }

    #[test]
    fn permute_columns_keeps_column_identity() {
        let table = numbered(3, &["d", "a", "c", "b", "e"]);
        let permuted = permute_columns(&table, &mut Pcg64::seed_from_u64(7));

        let mut names = permuted.column_names();
        names.sort_unstable();
        assert_eq!(names, ["a", "b", "c", "d", "e"]);
        for (name, column) in permuted.columns() {
            assert_eq!(table.column(name).ok(), Some(column));
        }
    }

    #[test]
    fn permute_columns_follows_the_random_source() {
        let table = numbered(3, &["a", "b", "c", "d", "e"]);
        let names = table.column_names();

        for seed in 0..10 {
            let order = Permutator::random(5, &mut Pcg64::seed_from_u64(seed));
            let expected = order
                .permute(&names)
                .expect("one entry per column")
                .collect::<Vec<_>>();

            let permuted = permute_columns(&table, &mut Pcg64::seed_from_u64(seed));
            assert_eq!(permuted.column_names(), expected);
        }

        let identity = Permutator::identity(5);
        assert!((0..10).any(|seed| {
            Permutator::random(5, &mut Pcg64::seed_from_u64(seed)) != identity
        }));
    }

    #[test]
    fn permute_columns_without_columns() {
        let permuted = permute_columns(&Table::empty(), &mut Pcg64::seed_from_u64(0));
        assert_eq!(permuted, Table::empty());
    }

    #[test]
    fn alphabetize_is_case_sensitive() {
        let table = numbered(2, &["b", "B", "a", "_x"]);
        let sorted = alphabetize_columns(&table);

        assert_eq!(sorted.column_names(), ["B", "_x", "a", "b"]);
        assert_eq!(alphabetize_columns(&sorted), sorted);
    }

    #[test]
    fn contiguous_sample_clamps_size() {
        let table = numbered(5, &["x"]);
        let sample = sample_contiguous_rows(&table, 100, &mut Pcg64::seed_from_u64(1))
            .expect("table has rows");

        assert_eq!(sample, table);
    }

    #[test]
    fn contiguous_sample_rejects_degenerate_input() {
        let mut rng = Pcg64::seed_from_u64(1);

        assert!(matches!(
            sample_contiguous_rows(&numbered(0, &["x"]), 3, &mut rng),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            sample_contiguous_rows(&numbered(4, &["x"]), 0, &mut rng),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn permute_rows_and_columns_keeps_rows_together() {
        let table = Table::new(vec![
            ("n".to_string(), ColumnData::from(vec![1i64, 2, 3, 4])),
            ("s".to_string(), ColumnData::from(vec!["1", "2", "3", "4"])),
        ])
        .expect("columns are well-formed");
        let shuffled = permute_rows_and_columns(&table, &mut Pcg64::seed_from_u64(3));

        let numbers = shuffled.column("n").expect("column is kept");
        let strings = shuffled.column("s").expect("column is kept");
        for (number, string) in numbers.iter().zip(strings.iter()) {
            assert_eq!(number.to_string(), string.to_string());
        }
    }

    #[test]
    fn sample_rows_without_replacement() {
        let table = numbered(10, &["x"]);
        let mut rng = Pcg64::seed_from_u64(11);

        let sample = sample_rows(&table, 4, &mut rng).expect("enough rows");
        let ColumnData::Integer(values) = sample.column("x").expect("column is kept") else {
            panic!("x is an integer column")
        };
        let mut distinct = values.clone();
        distinct.sort_unstable();
        distinct.dedup();
        assert_eq!(distinct.len(), 4);

        assert!(sample_rows(&table, 11, &mut rng).is_err());
        assert!(sample_rows(&numbered(0, &["x"]), 0, &mut rng).is_err());
    }
}
