//! Holds the [Permutator] struct, which allows one to define a logical permutation of the content of index-based data structures

use rand::{seq::SliceRandom, Rng};

use crate::{datatypes::ColumnData, error::Error};

/// Allows one to define a logical permutation of content of index-based data structures
///
/// Position `i` of the permuted data holds the element at position `get_sort_vec()[i]` of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutator {
    sort_vec: Vec<usize>,
}

impl Permutator {
    /// Creates a [`Permutator`] that leaves data of length `len` unchanged
    pub fn identity(len: usize) -> Permutator {
        Permutator {
            sort_vec: (0..len).collect(),
        }
    }

    /// Creates a [`Permutator`] based on one slice of sort-able data.
    ///
    /// Equal elements keep their relative order.
    pub fn sort_from_vec<T>(data: &[T]) -> Permutator
    where
        T: Ord,
    {
        let mut vec = (0..data.len()).collect::<Vec<usize>>();
        vec.sort_by_key(|&i| &data[i]);
        Permutator { sort_vec: vec }
    }

    /// Creates a uniformly distributed random [`Permutator`] for data of length `len`
    pub fn random<R>(len: usize, rng: &mut R) -> Permutator
    where
        R: Rng + ?Sized,
    {
        let mut vec = (0..len).collect::<Vec<usize>>();
        vec.shuffle(rng);
        log::trace!("random permutation: {vec:?}");
        Permutator { sort_vec: vec }
    }

    /// Returns the vector which contains the permuted indices
    pub fn get_sort_vec(&self) -> &[usize] {
        &self.sort_vec
    }

    /// Number of positions covered by this permutation
    pub fn len(&self) -> usize {
        self.sort_vec.len()
    }

    /// Returns whether this permutation covers no positions
    pub fn is_empty(&self) -> bool {
        self.sort_vec.is_empty()
    }

    /// Permutes a given slice of data with the computed sort-order.
    ///
    /// Data beyond the length of the permutation keeps its position.
    pub fn permute<'a, T>(&'a self, data: &'a [T]) -> Result<impl Iterator<Item = T> + 'a, Error>
    where
        T: Clone,
    {
        self.check_len(data.len())?;

        let x = self
            .sort_vec
            .iter()
            .copied()
            .chain(self.sort_vec.len()..data.len());
        Ok(x.map(|idx| data[idx].clone()))
    }

    /// Applies the permutator to the rows of a given column.
    ///
    /// *Returns* either a new [`ColumnData`] or an [Error][Error::PermutationApplyWrongLen]
    pub fn apply_column(&self, column: &ColumnData) -> Result<ColumnData, Error> {
        self.check_len(column.len())?;

        let indices = self
            .sort_vec
            .iter()
            .copied()
            .chain(self.sort_vec.len()..column.len())
            .collect::<Vec<_>>();
        column.take(&indices)
    }

    fn check_len(&self, len: usize) -> Result<(), Error> {
        if len < self.sort_vec.len() {
            Err(Error::PermutationApplyWrongLen(len, self.sort_vec.len()))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::datatypes::Double;
    use quickcheck_macros::quickcheck;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;
    use std::fmt::Debug;
    use test_log::test;

    fn apply_sort_permutator<T>(data: &[T])
    where
        T: Ord + Clone + Debug,
    {
        let mut vector = data.to_vec();

        let permutator = Permutator::sort_from_vec(data);
        vector.sort();
        assert_eq!(
            vector,
            permutator
                .permute(data)
                .expect("Expect that sorting works in this test-case")
                .collect::<Vec<_>>()
        );
    }

    #[quickcheck]
    #[cfg_attr(miri, ignore)]
    fn sort_from_vec(
        vec_u64: Vec<u64>,
        vec_i64: Vec<i64>,
        vec_double: Vec<Double>,
        vec_string: Vec<String>,
    ) -> bool {
        log::debug!(
            "used values:\nvec_u64: {:?}\nvec_i64: {:?}\nvec_double: {:?}\nvec_string: {:?}",
            vec_u64,
            vec_i64,
            vec_double,
            vec_string
        );

        apply_sort_permutator(&vec_u64);
        apply_sort_permutator(&vec_i64);
        apply_sort_permutator(&vec_double);
        apply_sort_permutator(&vec_string);
        true
    }

    #[test]
    fn sort_multiple_from_one_vec() {
        let vec = vec![10, 5, 1, 9, 2, 3, 5, 4, 7, 8, 6, 0];
        let vec2 = vec![0usize, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];

        let permutator = Permutator::sort_from_vec(&vec);
        assert_eq!(
            vec![0, 1, 2, 3, 4, 5, 5, 6, 7, 8, 9, 10],
            permutator
                .permute(&vec)
                .expect("Expect that sorting works in this test-case")
                .collect::<Vec<_>>()
        );
        assert_eq!(
            vec![11, 2, 4, 5, 7, 1, 6, 10, 8, 9, 3, 0],
            permutator
                .permute(&vec2)
                .expect("Expect that sorting works in this test-case")
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn longer_data_keeps_its_tail() {
        let permutator = Permutator::sort_from_vec(&[3, 1, 2]);
        assert_eq!(
            vec!['b', 'c', 'a', 'd', 'e'],
            permutator
                .permute(&['a', 'b', 'c', 'd', 'e'])
                .expect("data is longer than the permutation")
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn error_with_permutator() {
        let vec = vec![10, 5, 1, 9, 2, 3, 5, 4, 7, 8, 6, 0];
        let vec2 = vec![0usize, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 2];
        let permutator = Permutator::sort_from_vec(&vec2);
        let result = permutator.permute(&vec);
        assert!(result.is_err());
        let Err(err) = result else {
            unreachable!("checked above")
        };
        match err {
            Error::PermutationApplyWrongLen(12, 13) => (),
            _ => panic!("wrong error returned"),
        }
    }

    #[quickcheck]
    fn random_permutation_is_bijection(len: u8, seed: u64) -> bool {
        let mut rng = Pcg64::seed_from_u64(seed);
        let permutator = Permutator::random(usize::from(len), &mut rng);

        let mut sorted = permutator.get_sort_vec().to_vec();
        sorted.sort_unstable();
        sorted == Permutator::identity(usize::from(len)).get_sort_vec()
    }

    #[test]
    fn random_permutation_is_reproducible() {
        let first = Permutator::random(20, &mut Pcg64::seed_from_u64(42));
        let second = Permutator::random(20, &mut Pcg64::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn apply_to_column() {
        let column = ColumnData::from(vec!["c", "a", "b"]);
        let permutator = Permutator::sort_from_vec(&["c", "a", "b"]);

        assert_eq!(
            permutator.apply_column(&column).ok(),
            Some(ColumnData::from(vec!["a", "b", "c"]))
        );
        assert!(Permutator::identity(4).apply_column(&column).is_err());
    }
}
