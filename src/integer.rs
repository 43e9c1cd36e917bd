//! Immutable arbitrary precision signed integer.

use crate::common::buf::WordBuf;
use crate::common::impl_arith_ops;
use crate::defs::{Error, Sign, Word};
use crate::magnitude;
use core::cmp::Ordering;
use core::fmt::Display;
use core::str::FromStr;
use lazy_static::lazy_static;
use num_bigint::BigInt;

lazy_static! {
    /// Value of -1.
    pub static ref MINUS_ONE: ArbitraryInteger = ArbitraryInteger::from_parts(Sign::Neg, magnitude::from_u64(1));

    /// Value of 0.
    pub static ref ZERO: ArbitraryInteger = ArbitraryInteger::from_parts(Sign::Pos, WordBuf::new());

    /// Value of 1.
    pub static ref ONE: ArbitraryInteger = ArbitraryInteger::from_parts(Sign::Pos, magnitude::from_u64(1));

    /// Value of 2.
    pub static ref TWO: ArbitraryInteger = ArbitraryInteger::from_parts(Sign::Pos, magnitude::from_u64(2));
}

/// Arbitrary precision integer in sign-magnitude representation.
///
/// The magnitude never has leading zero limbs, and zero is always positive,
/// so structural equality is numeric equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArbitraryInteger {
    sign: Sign,
    m: WordBuf,
}

impl ArbitraryInteger {
    // Prereq: `m` has no leading zero limbs.
    pub(crate) fn from_parts(sign: Sign, m: WordBuf) -> Self {
        let sign = if m.is_empty() { Sign::Pos } else { sign };
        ArbitraryInteger { sign, m }
    }

    /// Returns the value of 0.
    pub fn zero() -> Self {
        ZERO.clone()
    }

    /// Returns the value of 1.
    pub fn one() -> Self {
        ONE.clone()
    }

    /// Returns the value of 2.
    pub fn two() -> Self {
        TWO.clone()
    }

    /// Returns the value of -1.
    pub fn minus_one() -> Self {
        MINUS_ONE.clone()
    }

    /// Creates an integer from a signed native integer.
    pub fn from_i64(v: i64) -> Self {
        match v {
            -1 => Self::minus_one(),
            0 => Self::zero(),
            1 => Self::one(),
            2 => Self::two(),
            _ => {
                let sign = if v < 0 { Sign::Neg } else { Sign::Pos };
                Self::from_parts(sign, magnitude::from_u64(v.unsigned_abs()))
            }
        }
    }

    /// Creates an integer from an unsigned native integer.
    pub fn from_u64(v: u64) -> Self {
        match v {
            0 => Self::zero(),
            1 => Self::one(),
            2 => Self::two(),
            _ => Self::from_parts(Sign::Pos, magnitude::from_u64(v)),
        }
    }

    /// Creates an integer from its big-endian two's-complement representation.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `bytes` is empty.
    pub fn from_signed_bytes_be(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.is_empty() {
            return Err(Error::InvalidArgument);
        }

        let (sign, m) = magnitude::from_twos_complement(bytes);

        Ok(Self::from_parts(sign, m))
    }

    /// Returns the minimal big-endian two's-complement representation of the integer.
    pub fn to_signed_bytes_be(&self) -> Vec<u8> {
        magnitude::to_twos_complement(self.sign, &self.m)
    }

    /// Converts the integer to `BigInt`.
    pub fn to_bigint(&self) -> BigInt {
        BigInt::from_signed_bytes_be(&self.to_signed_bytes_be())
    }

    /// Converts the integer to i64 if it fits.
    pub fn to_i64(&self) -> Option<i64> {
        let v = magnitude::to_u64(&self.m)?;
        if self.sign.is_negative() {
            if v <= i64::MAX as u64 + 1 {
                Some((v as i64).wrapping_neg())
            } else {
                None
            }
        } else {
            i64::try_from(v).ok()
        }
    }

    /// Returns the limbs of the magnitude, the most significant limb first.
    #[inline]
    pub fn limbs(&self) -> &[Word] {
        &self.m
    }

    /// Returns the sign of the integer. The sign of zero is positive.
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns -1, 0, or 1 depending on the sign of the integer.
    pub fn signum(&self) -> i8 {
        if self.m.is_empty() {
            0
        } else {
            self.sign.to_int()
        }
    }

    /// Returns true if `self` is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.m.is_empty()
    }

    /// Returns true if `self` is less than zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }

    /// Returns true if `self` is greater than zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign.is_positive() && !self.m.is_empty()
    }

    /// Returns true if `self` is equal to 1.
    pub fn is_one(&self) -> bool {
        self.sign.is_positive() && self.m[..] == [1]
    }

    /// Returns `-self`.
    pub fn negate(&self) -> Self {
        Self::from_parts(self.sign.invert(), self.m.clone())
    }

    /// Returns the absolute value of `self`.
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            self.negate()
        } else {
            self.clone()
        }
    }

    /// Returns `self + 1`.
    pub fn increment(&self) -> Self {
        if *self == *MINUS_ONE {
            Self::zero()
        } else if self.is_zero() {
            Self::one()
        } else if *self == *ONE {
            Self::two()
        } else if self.is_negative() {
            Self::from_parts(Sign::Neg, magnitude::subtract_ordered(&self.m, &[1]))
        } else {
            Self::from_parts(Sign::Pos, magnitude::add(&self.m, &[1]))
        }
    }

    /// Returns `self - 1`.
    pub fn decrement(&self) -> Self {
        if *self == *TWO {
            Self::one()
        } else if *self == *ONE {
            Self::zero()
        } else if self.is_zero() {
            Self::minus_one()
        } else if self.is_negative() {
            Self::from_parts(Sign::Neg, magnitude::add(&self.m, &[1]))
        } else {
            Self::from_parts(Sign::Pos, magnitude::subtract_ordered(&self.m, &[1]))
        }
    }

    /// Returns `self + d2`.
    pub fn add(&self, d2: &Self) -> Self {
        self.add_sub(d2, Sign::Pos)
    }

    /// Returns `self - d2`.
    pub fn subtract(&self, d2: &Self) -> Self {
        self.add_sub(d2, Sign::Neg)
    }

    fn add_sub(&self, d2: &Self, op: Sign) -> Self {
        if d2.is_zero() {
            return self.clone();
        }

        let s2 = d2.sign.mul(op);

        if self.is_zero() {
            return Self::from_parts(s2, d2.m.clone());
        }

        if self.sign == s2 {
            Self::from_parts(self.sign, magnitude::add(&self.m, &d2.m))
        } else {
            match magnitude::compare(&self.m, &d2.m) {
                Ordering::Greater => Self::from_parts(self.sign, magnitude::subtract_ordered(&self.m, &d2.m)),
                Ordering::Less => Self::from_parts(s2, magnitude::subtract_ordered(&d2.m, &self.m)),
                Ordering::Equal => Self::zero(),
            }
        }
    }

    /// Returns `self * d2`.
    pub fn multiply(&self, d2: &Self) -> Self {
        if self.is_zero() || d2.is_zero() {
            return Self::zero();
        }

        if self.is_one() {
            return d2.clone();
        }

        if d2.is_one() {
            return self.clone();
        }

        Self::from_parts(self.sign.mul(d2.sign), magnitude::multiply(&self.m, &d2.m))
    }

    /// Returns `self` to the power of `n`.
    ///
    /// ## Errors
    ///
    ///  - NegativeExponent: `n` is negative; use the reciprocal of a rational number instead.
    pub fn pow(&self, n: i32) -> Result<Self, Error> {
        if n < 0 {
            return Err(Error::NegativeExponent);
        }

        let mut n = n as u32;
        let mut ret = Self::one();
        let mut base = self.clone();

        while n > 0 {
            if n & 1 != 0 {
                ret = ret.multiply(&base);
            }
            n >>= 1;
            if n > 0 {
                base = base.multiply(&base);
            }
        }

        Ok(ret)
    }

    /// Returns a random integer with up to `limbs` limbs of the magnitude and a random sign.
    #[cfg(feature = "random")]
    pub fn random(limbs: usize) -> Self {
        let mut m: WordBuf = (0..limbs).map(|_| rand::random::<Word>()).collect();
        m.trunc_leading_zeroes();
        let sign = if rand::random::<bool>() {
            Sign::Neg
        } else {
            Sign::Pos
        };
        Self::from_parts(sign, m)
    }
}

impl_arith_ops!(ArbitraryInteger, add, subtract, multiply);

impl Ord for ArbitraryInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Pos, Sign::Neg) => Ordering::Greater,
            (Sign::Neg, Sign::Pos) => Ordering::Less,
            (Sign::Pos, Sign::Pos) => magnitude::compare(&self.m, &other.m),
            (Sign::Neg, Sign::Neg) => magnitude::compare(&other.m, &self.m),
        }
    }
}

impl PartialOrd for ArbitraryInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Default for ArbitraryInteger {
    fn default() -> Self {
        Self::zero()
    }
}

macro_rules! impl_int_conv {
    ($s:ty, $from:ident, $t:ty) => {
        impl From<$s> for ArbitraryInteger {
            fn from(v: $s) -> Self {
                ArbitraryInteger::$from(v as $t)
            }
        }
    };
}

impl_int_conv!(i8, from_i64, i64);
impl_int_conv!(i16, from_i64, i64);
impl_int_conv!(i32, from_i64, i64);
impl_int_conv!(i64, from_i64, i64);
impl_int_conv!(u8, from_u64, u64);
impl_int_conv!(u16, from_u64, u64);
impl_int_conv!(u32, from_u64, u64);
impl_int_conv!(u64, from_u64, u64);

impl From<&BigInt> for ArbitraryInteger {
    fn from(v: &BigInt) -> Self {
        let (sign, m) = magnitude::from_twos_complement(&v.to_signed_bytes_be());
        Self::from_parts(sign, m)
    }
}

impl From<BigInt> for ArbitraryInteger {
    fn from(v: BigInt) -> Self {
        Self::from(&v)
    }
}

impl From<&ArbitraryInteger> for BigInt {
    fn from(v: &ArbitraryInteger) -> Self {
        v.to_bigint()
    }
}

impl Display for ArbitraryInteger {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        Display::fmt(&self.to_bigint(), f)
    }
}

impl FromStr for ArbitraryInteger {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let v = BigInt::from_str(s.trim()).map_err(|_| Error::InvalidArgument)?;
        Ok(Self::from(&v))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use rand::random;

    fn random_int() -> ArbitraryInteger {
        ArbitraryInteger::random(random::<usize>() % 6)
    }

    #[test]
    fn test_canonical_values() {
        let z = ArbitraryInteger::from_i64(-1).add(&ArbitraryInteger::from_i64(1));
        assert_eq!(z, *ZERO);
        assert!(z.is_zero());
        assert_eq!(z.signum(), 0);
        assert!(!z.is_negative());

        assert_eq!(ArbitraryInteger::from_i64(3).subtract(&ArbitraryInteger::from_i64(3)), *ZERO);
        assert_eq!(ArbitraryInteger::from(-3).add(&ArbitraryInteger::from(5)), ArbitraryInteger::from(2));
        assert_eq!(ArbitraryInteger::from(3).subtract(&ArbitraryInteger::from(5)), ArbitraryInteger::from(-2));
        assert_eq!(ArbitraryInteger::from(-3).subtract(&ArbitraryInteger::from(-5)), ArbitraryInteger::from(2));
        assert_eq!(ArbitraryInteger::from(-3).multiply(&ArbitraryInteger::zero()), *ZERO);
        assert!(!ArbitraryInteger::zero().negate().is_negative());
    }

    #[test]
    fn test_increment_decrement() {
        let mut v = ArbitraryInteger::from(-3);
        for i in -3..=5 {
            assert_eq!(v, ArbitraryInteger::from(i));
            v = v.increment();
        }
        for i in (-5..=6).rev() {
            assert_eq!(v, ArbitraryInteger::from(i));
            v = v.decrement();
        }

        let big = ArbitraryInteger::from_u64(u32::MAX as u64);
        assert_eq!(big.increment().limbs(), &[1, 0]);
        assert_eq!(big.increment().decrement(), big);
        assert_eq!(big.negate().decrement().limbs(), &[1, 0]);
    }

    #[test]
    fn test_pow() {
        assert_eq!(ArbitraryInteger::from(7).pow(3).unwrap(), ArbitraryInteger::from(343));
        assert_eq!(ArbitraryInteger::from(-2).pow(5).unwrap(), ArbitraryInteger::from(-32));
        assert_eq!(ArbitraryInteger::from(0).pow(0).unwrap(), ArbitraryInteger::one());
        assert_eq!(ArbitraryInteger::from(5).pow(-1).unwrap_err(), Error::NegativeExponent);

        for _ in 0..100 {
            let a = ArbitraryInteger::random(2);
            let n = random::<u32>() % 20;
            let mut expected = ArbitraryInteger::one();
            for _ in 0..n {
                expected = expected.multiply(&a);
            }
            assert_eq!(a.pow(n as i32).unwrap(), expected);
        }
    }

    #[test]
    fn test_against_bigint() {
        for _ in 0..1000 {
            let a = random_int();
            let b = random_int();
            let ba = a.to_bigint();
            let bb = b.to_bigint();

            assert_eq!(a.add(&b).to_bigint(), &ba + &bb);
            assert_eq!(a.subtract(&b).to_bigint(), &ba - &bb);
            assert_eq!(a.multiply(&b).to_bigint(), &ba * &bb);
            assert_eq!(a.cmp(&b), ba.cmp(&bb));

            // round trips
            assert_eq!(a.add(&b).subtract(&b), a);
            assert_eq!(a.negate().negate(), a);
            assert!(a.add(&a.negate()).is_zero());
            assert_eq!(ArbitraryInteger::from(&ba), a);
        }
    }

    #[test]
    fn test_conversions() {
        let v = ArbitraryInteger::from_signed_bytes_be(&[0xff, 0x7f]).unwrap();
        assert_eq!(v, ArbitraryInteger::from(-129));
        assert_eq!(v.to_signed_bytes_be(), vec![0xff, 0x7f]);
        assert_eq!(ArbitraryInteger::from_signed_bytes_be(&[]).unwrap_err(), Error::InvalidArgument);

        assert_eq!(ArbitraryInteger::from(i64::MIN).to_i64(), Some(i64::MIN));
        assert_eq!(ArbitraryInteger::from(i64::MAX).to_i64(), Some(i64::MAX));
        assert_eq!(ArbitraryInteger::from(u64::MAX).to_i64(), None);

        let s = "-123456789012345678901234567890";
        let v: ArbitraryInteger = s.parse().unwrap();
        assert_eq!(v.to_string(), s);
        assert!("12a".parse::<ArbitraryInteger>().is_err());

        assert!(ArbitraryInteger::from(-1) < ArbitraryInteger::zero());
        assert!(ArbitraryInteger::from(u64::MAX) > ArbitraryInteger::from(1));
        assert!(ArbitraryInteger::from(-5) < ArbitraryInteger::from(-4));
    }

    #[test]
    fn test_operators() {
        let a = ArbitraryInteger::from(12);
        let b = ArbitraryInteger::from(-5);
        assert_eq!(&a + &b, ArbitraryInteger::from(7));
        assert_eq!(&a - &b, ArbitraryInteger::from(17));
        assert_eq!(&a * &b, ArbitraryInteger::from(-60));
        assert_eq!(-&b, ArbitraryInteger::from(5));
        assert_eq!(a.clone() * b.clone(), ArbitraryInteger::from(-60));
    }
}
