//! This module defines [Factor], a vector of categorical values.

use std::collections::HashMap;

use itertools::Itertools;

use crate::error::Error;

/// A vector over a fixed set of categories.
///
/// Each entry is stored as an index (code) into the list of levels.
/// Subsetting a factor never removes levels, even if they are no longer used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Factor {
    levels: Vec<String>,
    codes: Vec<usize>,
}

impl Factor {
    /// Create a [Factor] whose levels are the sorted distinct `values`.
    pub fn new<S: AsRef<str>>(values: &[S]) -> Self {
        let levels = values
            .iter()
            .map(|value| value.as_ref().to_string())
            .sorted()
            .dedup()
            .collect::<Vec<_>>();

        Self::with_levels(values, levels).expect("levels are derived from the values")
    }

    /// Create a [Factor] over the given `levels`, in the given order.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if a level is repeated and
    /// [`Error::UnknownFactorLevel`] if a value is not one of the `levels`.
    pub fn with_levels<S: AsRef<str>>(values: &[S], levels: Vec<String>) -> Result<Self, Error> {
        let mut lookup = HashMap::with_capacity(levels.len());
        for (code, level) in levels.iter().enumerate() {
            if lookup.insert(level.as_str(), code).is_some() {
                return Err(Error::invalid_argument(format!(
                    "factor level \"{level}\" is given more than once"
                )));
            }
        }

        let codes = values
            .iter()
            .map(|value| {
                lookup
                    .get(value.as_ref())
                    .copied()
                    .ok_or_else(|| Error::UnknownFactorLevel(value.as_ref().to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { levels, codes })
    }

    /// Returns the levels of this factor.
    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    /// Returns the level index of each entry.
    pub fn codes(&self) -> &[usize] {
        &self.codes
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns whether the factor has no entries.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Returns the level of the entry at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.codes
            .get(index)
            .map(|&code| self.levels[code].as_str())
    }

    /// Number of entries per level, in level order. Unused levels count zero.
    pub fn counts(&self) -> Vec<(&str, usize)> {
        let mut counts = vec![0usize; self.levels.len()];
        for &code in &self.codes {
            counts[code] += 1;
        }

        self.levels
            .iter()
            .map(String::as_str)
            .zip(counts)
            .collect()
    }

    /// Returns a new factor with the entries at `indices`, keeping all levels.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfBounds`] for an index beyond the end of the factor.
    pub fn take(&self, indices: &[usize]) -> Result<Self, Error> {
        let codes = indices
            .iter()
            .map(|&index| {
                self.codes.get(index).copied().ok_or(Error::IndexOutOfBounds {
                    index,
                    len: self.codes.len(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            levels: self.levels.clone(),
            codes,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_log::test;

    #[test]
    fn levels_are_sorted_and_distinct() {
        let factor = Factor::new(&["m", "f", "m", "m"]);

        assert_eq!(factor.levels(), ["f", "m"]);
        assert_eq!(factor.codes(), [1, 0, 1, 1]);
        assert_eq!(factor.get(1), Some("f"));
        assert_eq!(factor.get(4), None);
    }

    #[test]
    fn explicit_levels_keep_unused_categories() {
        let factor = Factor::with_levels(&["m", "m"], vec!["m".to_string(), "f".to_string()])
            .expect("all values are levels");

        assert_eq!(factor.counts(), vec![("m", 2), ("f", 0)]);
    }

    #[test]
    fn unknown_and_repeated_levels_are_rejected() {
        let unknown = Factor::with_levels(&["x"], vec!["a".to_string()]);
        assert!(matches!(unknown, Err(Error::UnknownFactorLevel(value)) if value == "x"));

        let repeated = Factor::with_levels(&["a"], vec!["a".to_string(), "a".to_string()]);
        assert!(matches!(repeated, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn take_preserves_levels() {
        let factor = Factor::new(&["a", "b", "c"]);
        let subset = factor.take(&[2, 2]).expect("indices are in range");

        assert_eq!(subset.levels(), ["a", "b", "c"]);
        assert_eq!(subset.get(0), Some("c"));
        assert_eq!(subset.counts(), vec![("a", 0), ("b", 0), ("c", 2)]);
        assert!(factor.take(&[3]).is_err());
    }
}
