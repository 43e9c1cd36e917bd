//! Complex number with exact rational components.

use crate::common::impl_arith_ops;
use crate::defs::Error;
use crate::integer::ArbitraryInteger;
use crate::rational::ArbitraryRational;
use core::fmt::Display;
use lazy_static::lazy_static;

lazy_static! {
    /// Value of 0.
    pub static ref ZERO: ArbitraryComplex = ArbitraryComplex::from_real(ArbitraryRational::zero());

    /// Value of 1.
    pub static ref ONE: ArbitraryComplex = ArbitraryComplex::from_real(ArbitraryRational::one());

    /// Imaginary unit.
    pub static ref I: ArbitraryComplex = ArbitraryComplex::new(ArbitraryRational::zero(), ArbitraryRational::one());

    /// Negative imaginary unit.
    pub static ref MINUS_I: ArbitraryComplex =
        ArbitraryComplex::new(ArbitraryRational::zero(), ArbitraryRational::one().negate());
}

/// Complex number `re + im*i`.
///
/// Complex numbers are not ordered, so operations that need a sign or an order are not supported.
/// Division is not supported either.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArbitraryComplex {
    re: ArbitraryRational,
    im: ArbitraryRational,
}

impl ArbitraryComplex {
    /// Creates the complex number `re + im*i`.
    pub fn new(re: ArbitraryRational, im: ArbitraryRational) -> Self {
        ArbitraryComplex { re, im }
    }

    /// Creates a complex number with zero imaginary part.
    pub fn from_real(re: ArbitraryRational) -> Self {
        Self::new(re, ArbitraryRational::zero())
    }

    /// Returns the real part.
    #[inline]
    pub fn real(&self) -> &ArbitraryRational {
        &self.re
    }

    /// Returns the imaginary part.
    #[inline]
    pub fn imaginary(&self) -> &ArbitraryRational {
        &self.im
    }

    /// Returns `-self`.
    pub fn negate(&self) -> Self {
        Self::new(self.re.negate(), self.im.negate())
    }

    /// Returns the complex conjugate `re - im*i`.
    pub fn conjugate(&self) -> Self {
        Self::new(self.re.clone(), self.im.negate())
    }

    /// Returns `1 / self` computed as `conjugate / (re² + im²)`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `self` is zero.
    pub fn reciprocal(&self) -> Result<Self, Error> {
        let norm = self.re.multiply(&self.re).add(&self.im.multiply(&self.im));
        let inv = norm.reciprocal()?;

        Ok(Self::new(self.re.multiply(&inv), self.im.negate().multiply(&inv)))
    }

    /// Returns `self * self`.
    pub fn square(&self) -> Self {
        let re = self.re.multiply(&self.re).subtract(&self.im.multiply(&self.im));
        let im = self.re.multiply(&self.im);
        Self::new(re, im.add(&im))
    }

    /// Returns `self + d2`.
    pub fn add(&self, d2: &Self) -> Self {
        Self::new(self.re.add(&d2.re), self.im.add(&d2.im))
    }

    /// Returns `self - d2`.
    pub fn subtract(&self, d2: &Self) -> Self {
        Self::new(self.re.subtract(&d2.re), self.im.subtract(&d2.im))
    }

    /// Returns `self * d2`. Multiplication by `I` or `MINUS_I` is a rotation without multiplication of components.
    pub fn multiply(&self, d2: &Self) -> Self {
        if let Some(ret) = d2.rotate_by(self) {
            return ret;
        }

        if let Some(ret) = self.rotate_by(d2) {
            return ret;
        }

        let re = self.re.multiply(&d2.re).subtract(&self.im.multiply(&d2.im));
        let im = self.re.multiply(&d2.im).add(&self.im.multiply(&d2.re));
        Self::new(re, im)
    }

    // Returns `self` multiplied by `unit` if `unit` is `I` or `MINUS_I`.
    fn rotate_by(&self, unit: &Self) -> Option<Self> {
        if !unit.re.is_zero() || unit.im.denominator() != &ArbitraryInteger::one() {
            return None;
        }

        let im = unit.im.numerator();
        if im.is_one() {
            Some(Self::new(self.im.negate(), self.re.clone()))
        } else if *im == ArbitraryInteger::minus_one() {
            Some(Self::new(self.im.clone(), self.re.negate()))
        } else {
            None
        }
    }

    /// Division of complex numbers is not supported.
    pub fn divide(&self, _d2: &Self) -> Result<Self, Error> {
        Err(Error::Unsupported("complex division"))
    }

    /// Complex numbers have no sign.
    pub fn signum(&self) -> Result<i8, Error> {
        Err(Error::Unsupported("complex signum"))
    }

    /// Complex numbers have no sign.
    pub fn is_negative(&self) -> Result<bool, Error> {
        Err(Error::Unsupported("complex is_negative"))
    }

    /// Complex numbers have no sign.
    pub fn is_positive(&self) -> Result<bool, Error> {
        Err(Error::Unsupported("complex is_positive"))
    }

    /// Not supported for complex numbers.
    pub fn is_zero(&self) -> Result<bool, Error> {
        Err(Error::Unsupported("complex is_zero"))
    }

    /// The modulus of a complex number is irrational in general and is not supported.
    pub fn abs(&self) -> Result<Self, Error> {
        Err(Error::Unsupported("complex abs"))
    }
}

impl_arith_ops!(ArbitraryComplex, add, subtract, multiply);

impl Default for ArbitraryComplex {
    fn default() -> Self {
        ZERO.clone()
    }
}

impl From<ArbitraryRational> for ArbitraryComplex {
    fn from(re: ArbitraryRational) -> Self {
        Self::from_real(re)
    }
}

impl Display for ArbitraryComplex {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.re, self.im)
    }
}
