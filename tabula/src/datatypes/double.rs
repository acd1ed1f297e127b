//! This module defines a wrapper type [Double] for [f64] that excludes NaN and infinity.

use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, Mul},
};

use num::{One, Zero};

use crate::error::Error;

#[cfg(test)]
use quickcheck::{Arbitrary, Gen};

/// Wrapper for [f64] that excludes [f64::NAN] and infinite values
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Double(f64);

impl Double {
    /// Wraps the given [f64]-`value` as a value over [Double].
    ///
    /// # Errors
    /// Returns an error if `value` is [f64::NAN] or infinite.
    pub fn new(value: f64) -> Result<Self, Error> {
        if !value.is_finite() {
            return Err(Error::NonFiniteDouble(value));
        }

        Ok(Self(value))
    }

    /// Wraps the given [f64]-`value` as a value over [Double].
    ///
    /// # Panics
    /// Panics if `value` is [f64::NAN] or not finite.
    pub fn from_number(value: f64) -> Self {
        if !value.is_finite() {
            panic!("floating point values must be finite")
        }

        Self(value)
    }

    /// Returns the wrapped [f64].
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Eq for Double {}

impl PartialOrd for Double {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Double {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .partial_cmp(&other.0)
            .expect("Comparison can only fail on NaN values which have been forbidden in this type")
    }
}

/// # Panics
/// Panics if the sum overflows to an infinite value.
impl Add for Double {
    type Output = Double;

    fn add(self, rhs: Self) -> Self::Output {
        Double::from_number(self.0 + rhs.0)
    }
}

/// # Panics
/// Panics if the product overflows to an infinite value.
impl Mul for Double {
    type Output = Double;

    fn mul(self, rhs: Self) -> Self::Output {
        Double::from_number(self.0 * rhs.0)
    }
}

impl fmt::Display for Double {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for Double {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Double> for f64 {
    fn from(value: Double) -> Self {
        value.0
    }
}

impl Zero for Double {
    fn zero() -> Self {
        Double(0.0)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Double {
    fn one() -> Self {
        Double(1.0)
    }
}

#[cfg(test)]
impl Arbitrary for Double {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut value = f64::arbitrary(g);
        while !value.is_finite() {
            value = f64::arbitrary(g);
        }

        Self::from_number(value)
    }
}
