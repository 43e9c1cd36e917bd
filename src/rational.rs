//! Immutable exact rational number.

use crate::common::impl_arith_ops;
use crate::ctx::MathContext;
use crate::decimal::Decimal;
use crate::defs::Error;
use crate::integer::ArbitraryInteger;
use core::cmp::Ordering;
use core::fmt::Display;
use core::hash::Hash;
use core::hash::Hasher;
use core::str::FromStr;
use lazy_static::lazy_static;
use num_integer::Integer;

lazy_static! {
    /// Value of 0.
    pub static ref ZERO: ArbitraryRational = ArbitraryRational::from_integer(ArbitraryInteger::zero());

    /// Value of 1.
    pub static ref ONE: ArbitraryRational = ArbitraryRational::from_integer(ArbitraryInteger::one());
}

/// Rational number as a pair of numerator and denominator.
///
/// The denominator is always positive. A zero numerator always comes with the denominator 1.
/// Arithmetic does not reduce the fraction to lowest terms: use `reduced` to do that explicitly.
#[derive(Clone, Debug)]
pub struct ArbitraryRational {
    n: ArbitraryInteger,
    d: ArbitraryInteger,
}

impl ArbitraryRational {
    /// Creates the rational number `numerator / denominator`.
    /// The sign of a negative denominator is moved to the numerator.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `denominator` is zero.
    pub fn new(numerator: ArbitraryInteger, denominator: ArbitraryInteger) -> Result<Self, Error> {
        if denominator.is_zero() {
            return Err(Error::DivisionByZero);
        }

        if denominator.is_negative() {
            Ok(Self::from_parts(numerator.negate(), denominator.negate()))
        } else {
            Ok(Self::from_parts(numerator, denominator))
        }
    }

    /// Creates a rational number with the value of integer `n`.
    pub fn from_integer(n: ArbitraryInteger) -> Self {
        Self::from_parts(n, ArbitraryInteger::one())
    }

    // Prereq: `d` is positive.
    fn from_parts(n: ArbitraryInteger, d: ArbitraryInteger) -> Self {
        debug_assert!(d.is_positive());

        if n.is_zero() {
            ArbitraryRational {
                n,
                d: ArbitraryInteger::one(),
            }
        } else {
            ArbitraryRational { n, d }
        }
    }

    /// Returns the value of 0.
    pub fn zero() -> Self {
        ZERO.clone()
    }

    /// Returns the value of 1.
    pub fn one() -> Self {
        ONE.clone()
    }

    /// Returns the numerator. It carries the sign of the number.
    #[inline]
    pub fn numerator(&self) -> &ArbitraryInteger {
        &self.n
    }

    /// Returns the denominator. It is always positive.
    #[inline]
    pub fn denominator(&self) -> &ArbitraryInteger {
        &self.d
    }

    /// Returns -1, 0, or 1 depending on the sign of the number.
    pub fn signum(&self) -> i8 {
        self.n.signum()
    }

    /// Returns true if `self` is zero.
    pub fn is_zero(&self) -> bool {
        self.n.is_zero()
    }

    /// Returns true if `self` is less than zero.
    pub fn is_negative(&self) -> bool {
        self.n.is_negative()
    }

    /// Returns true if `self` is greater than zero.
    pub fn is_positive(&self) -> bool {
        self.n.is_positive()
    }

    /// Returns `-self`.
    pub fn negate(&self) -> Self {
        Self::from_parts(self.n.negate(), self.d.clone())
    }

    /// Returns the absolute value of `self`.
    pub fn abs(&self) -> Self {
        Self::from_parts(self.n.abs(), self.d.clone())
    }

    /// Returns `self + d2`.
    pub fn add(&self, d2: &Self) -> Self {
        if d2.is_zero() {
            return self.clone();
        }

        if self.is_zero() {
            return d2.clone();
        }

        let n = self.n.multiply(&d2.d).add(&d2.n.multiply(&self.d));
        Self::from_parts(n, self.d.multiply(&d2.d))
    }

    /// Returns `self - d2`.
    pub fn subtract(&self, d2: &Self) -> Self {
        self.add(&d2.negate())
    }

    /// Returns `self * d2`.
    pub fn multiply(&self, d2: &Self) -> Self {
        if self.is_zero() || d2.is_zero() {
            return Self::zero();
        }

        Self::from_parts(self.n.multiply(&d2.n), self.d.multiply(&d2.d))
    }

    /// Returns `self / d2`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `d2` is zero.
    pub fn divide(&self, d2: &Self) -> Result<Self, Error> {
        Self::new(self.n.multiply(&d2.d), self.d.multiply(&d2.n))
    }

    /// Returns `1 / self`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `self` is zero.
    pub fn reciprocal(&self) -> Result<Self, Error> {
        Self::new(self.d.clone(), self.n.clone())
    }

    /// Returns `self` to the power of `n`. A negative power is computed from the reciprocal.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `self` is zero and `n` is negative.
    ///  - InvalidArgument: `n` is `i32::MIN`.
    pub fn pow(&self, n: i32) -> Result<Self, Error> {
        if n < 0 {
            let n = n.checked_neg().ok_or(Error::InvalidArgument)?;
            return self.reciprocal()?.pow(n);
        }

        Ok(Self::from_parts(self.n.pow(n)?, self.d.pow(n)?))
    }

    /// Returns the fraction reduced to lowest terms.
    pub fn reduced(&self) -> Self {
        let n = self.n.to_bigint();
        let d = self.d.to_bigint();
        let g = n.gcd(&d);

        Self::from_parts(ArbitraryInteger::from(n / &g), ArbitraryInteger::from(d / &g))
    }

    /// Returns the decimal value of the number rounded according to `mc`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: precision of `mc` is unlimited.
    pub fn to_decimal(&self, mc: &MathContext) -> Result<Decimal, Error> {
        Decimal::from(&self.n).div(&Decimal::from(&self.d), mc)
    }
}

impl_arith_ops!(ArbitraryRational, add, subtract, multiply);

impl Ord for ArbitraryRational {
    fn cmp(&self, other: &Self) -> Ordering {
        // denominators are positive
        self.n.multiply(&other.d).cmp(&other.n.multiply(&self.d))
    }
}

impl PartialOrd for ArbitraryRational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ArbitraryRational {
    fn eq(&self, other: &Self) -> bool {
        (self.n == other.n && self.d == other.d) || self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ArbitraryRational {}

impl Hash for ArbitraryRational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let r = self.reduced();
        r.n.hash(state);
        r.d.hash(state);
    }
}

impl Default for ArbitraryRational {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<ArbitraryInteger> for ArbitraryRational {
    fn from(n: ArbitraryInteger) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for ArbitraryRational {
    fn from(n: i64) -> Self {
        Self::from_integer(ArbitraryInteger::from(n))
    }
}

impl Display for ArbitraryRational {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.n, self.d)
    }
}

impl FromStr for ArbitraryRational {
    type Err = Error;

    /// Parses `n` or `n/d`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((n, d)) => Self::new(n.parse()?, d.parse()?),
            None => Ok(Self::from_integer(s.parse()?)),
        }
    }
}
