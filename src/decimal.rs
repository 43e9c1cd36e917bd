//! Arbitrary precision decimal number.
//!
//! A decimal is an unscaled integer value and a scale: the value is `unscaled * 10^-scale`.
//! Addition, subtraction, and multiplication are exact. Division and rounding take a `MathContext`
//! which defines the number of significant digits of the result and the rounding mode.

use crate::common::impl_arith_ops;
use crate::ctx::MathContext;
use crate::defs::Error;
use crate::integer::ArbitraryInteger;
use crate::RoundingMode;
use core::cmp::Ordering;
use core::fmt::Display;
use core::hash::Hash;
use core::hash::Hasher;
use core::str::FromStr;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

const LOG10_2: f64 = core::f64::consts::LOG10_2;

// Number of significant digits used for conversion to f64.
const F64_DIGITS: usize = 17;

/// Arbitrary precision decimal number.
#[derive(Clone, Debug)]
pub struct Decimal {
    unscaled: BigInt,
    scale: i64,
}

impl Decimal {
    /// Creates a decimal with the value `unscaled * 10^-scale`.
    pub fn new(unscaled: BigInt, scale: i64) -> Self {
        Decimal { unscaled, scale }
    }

    /// Returns the value of 0.
    pub fn zero() -> Self {
        Decimal::new(BigInt::zero(), 0)
    }

    /// Returns the value of 1.
    pub fn one() -> Self {
        Decimal::new(BigInt::one(), 0)
    }

    /// Creates a decimal from f64. The result is the shortest decimal which converts back to the same f64.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `f` is NaN or infinite.
    pub fn from_f64(f: f64) -> Result<Self, Error> {
        if !f.is_finite() {
            return Err(Error::InvalidArgument);
        }

        format!("{f:e}").parse()
    }

    /// Returns the unscaled value.
    #[inline]
    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// Returns the scale.
    #[inline]
    pub fn scale(&self) -> i64 {
        self.scale
    }

    /// Returns the number of significant decimal digits of the unscaled value. Zero has precision 1.
    pub fn precision(&self) -> usize {
        digit_count(&self.unscaled) as usize
    }

    /// Returns the power of 10 of the most significant digit: `d.ddd * 10^exponent`.
    pub fn exponent(&self) -> i64 {
        self.precision() as i64 - 1 - self.scale
    }

    /// Returns -1, 0, or 1 depending on the sign of the number.
    pub fn signum(&self) -> i8 {
        if self.unscaled.is_zero() {
            0
        } else if self.unscaled.is_negative() {
            -1
        } else {
            1
        }
    }

    /// Returns true if `self` is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    /// Returns true if `self` is less than zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.unscaled.is_negative()
    }

    /// Returns true if `self` is greater than zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.unscaled.is_positive()
    }

    /// Returns `-self`.
    pub fn negate(&self) -> Self {
        Decimal::new(-&self.unscaled, self.scale)
    }

    /// Returns the absolute value of `self`.
    pub fn abs(&self) -> Self {
        Decimal::new(self.unscaled.abs(), self.scale)
    }

    /// Returns `self + d2`. The result is exact.
    pub fn add(&self, d2: &Self) -> Self {
        let (a, b, scale) = Self::align(self, d2);
        Decimal::new(a + b, scale)
    }

    /// Returns `self - d2`. The result is exact.
    pub fn sub(&self, d2: &Self) -> Self {
        let (a, b, scale) = Self::align(self, d2);
        Decimal::new(a - b, scale)
    }

    /// Returns `self * d2`. The result is exact unless the scale of the product does not fit `i64`,
    /// in which case the scale saturates. Use [`Decimal::checked_mul`] to detect it.
    pub fn mul(&self, d2: &Self) -> Self {
        Decimal::new(&self.unscaled * &d2.unscaled, self.scale.saturating_add(d2.scale))
    }

    /// Returns `self * d2`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the scale of the product does not fit `i64`.
    pub fn checked_mul(&self, d2: &Self) -> Result<Self, Error> {
        let scale = self.scale.checked_add(d2.scale).ok_or(Error::InvalidArgument)?;
        Ok(Decimal::new(&self.unscaled * &d2.unscaled, scale))
    }

    /// Returns `self * 10^n`. The result is exact.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the scale of the result does not fit `i64`.
    pub fn mul_pow10(&self, n: i64) -> Result<Self, Error> {
        let scale = self.scale.checked_sub(n).ok_or(Error::InvalidArgument)?;
        Ok(Decimal::new(self.unscaled.clone(), scale))
    }

    /// Returns `self / d2` rounded according to `mc`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `d2` is zero.
    ///  - InvalidArgument: precision of `mc` is unlimited, or the scale of the quotient does not fit `i64`.
    pub fn div(&self, d2: &Self, mc: &MathContext) -> Result<Self, Error> {
        if d2.is_zero() {
            return Err(Error::DivisionByZero);
        }

        if mc.is_unlimited() {
            return Err(Error::InvalidArgument);
        }

        if self.is_zero() {
            return Ok(Self::zero());
        }

        // shift the dividend so that the quotient has at least p + 1 digits.
        let k = mc.precision() as i64 + 1 + digit_count(&d2.unscaled) as i64 - digit_count(&self.unscaled) as i64;

        let (n, d) = if k >= 0 {
            (&self.unscaled * ten_pow(k as u64), d2.unscaled.clone())
        } else {
            (self.unscaled.clone(), &d2.unscaled * ten_pow(k.unsigned_abs()))
        };

        let (mut q, r) = n.div_rem(&d);
        let mut scale = self
            .scale
            .checked_sub(d2.scale)
            .and_then(|v| v.checked_add(k))
            .ok_or(Error::InvalidArgument)?;

        if !r.is_zero() {
            // sticky digit keeps the inexact quotient away from ties.
            q *= 10u32;
            if q.is_negative() {
                q -= BigInt::one();
            } else {
                q += BigInt::one();
            }
            scale = scale.checked_add(1).ok_or(Error::InvalidArgument)?;
        }

        Ok(Decimal::new(q, scale).round(mc))
    }

    /// Returns the reciprocal of `self` rounded according to `mc`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `self` is zero.
    ///  - InvalidArgument: precision of `mc` is unlimited.
    pub fn reciprocal(&self, mc: &MathContext) -> Result<Self, Error> {
        Self::one().div(self, mc)
    }

    /// Returns `self` rounded to the precision of `mc` using its rounding mode.
    /// The value is returned unchanged if it already fits the precision.
    pub fn round(&self, mc: &MathContext) -> Self {
        let p = mc.precision();
        let digits = self.precision();

        if p == 0 || digits <= p {
            return self.clone();
        }

        let drop = (digits - p) as u64;
        let divisor = ten_pow(drop);
        let (mut q, r) = self.unscaled.div_rem(&divisor);

        if !r.is_zero() && round_increment(&q, &r, &divisor, self.is_negative(), mc.rounding_mode()) {
            if self.is_negative() {
                q -= BigInt::one();
            } else {
                q += BigInt::one();
            }
        }

        let mut scale = self.scale - drop as i64;

        // 99..9 rounded up gets an extra digit.
        if digit_count(&q) as usize > p {
            q /= 10u32;
            scale -= 1;
        }

        Decimal::new(q, scale)
    }

    /// Rounds a value obtained by truncation of a more precise value: a tie is resolved
    /// as if the truncated digits were not all zero.
    pub(crate) fn round_inexact(&self, mc: &MathContext) -> Self {
        if mc.is_unlimited() || self.precision() <= mc.precision() {
            return self.clone();
        }

        let sticky = BigInt::from(self.signum());
        Decimal::new(&self.unscaled * 10u32 + sticky, self.scale + 1).round(mc)
    }

    /// Returns the same value with trailing zeroes of the unscaled value removed.
    pub fn strip_trailing_zeros(&self) -> Self {
        if self.unscaled.is_zero() {
            return Self::zero();
        }

        let ten = BigInt::from(10u32);
        let mut unscaled = self.unscaled.clone();
        let mut scale = self.scale;

        loop {
            let (q, r) = unscaled.div_rem(&ten);
            if !r.is_zero() {
                break;
            }
            unscaled = q;
            scale -= 1;
        }

        Decimal::new(unscaled, scale)
    }

    /// Converts the number to f64. Values out of range become infinite or zero.
    pub fn to_f64(&self) -> f64 {
        let r = self.round(&MathContext::new(F64_DIGITS, RoundingMode::ToEven));
        format!("{}e{}", r.unscaled, -r.scale).parse().unwrap_or(f64::NAN)
    }

    /// Approximates `self` as `m * 10^e` with `1 <= |m| < 10`, or `(0, 0)` for zero.
    pub(crate) fn to_f64_exp(&self) -> (f64, i64) {
        if self.is_zero() {
            return (0.0, 0);
        }

        let r = self.round(&MathContext::new(F64_DIGITS, RoundingMode::ToEven));
        let m = r.unscaled.to_f64().unwrap_or(f64::NAN) / 10f64.powi(r.precision() as i32 - 1);

        (m, r.exponent())
    }

    // Returns unscaled values of `d1` and `d2` brought to the same scale, and the scale.
    fn align(d1: &Self, d2: &Self) -> (BigInt, BigInt, i64) {
        match d1.scale.cmp(&d2.scale) {
            Ordering::Equal => (d1.unscaled.clone(), d2.unscaled.clone(), d1.scale),
            Ordering::Less => {
                let a = &d1.unscaled * ten_pow((d2.scale - d1.scale) as u64);
                (a, d2.unscaled.clone(), d2.scale)
            }
            Ordering::Greater => {
                let b = &d2.unscaled * ten_pow((d1.scale - d2.scale) as u64);
                (d1.unscaled.clone(), b, d1.scale)
            }
        }
    }
}

impl_arith_ops!(Decimal, add, sub, mul);

// 10^n.
fn ten_pow(n: u64) -> BigInt {
    num_traits::pow(BigInt::from(10u32), n as usize)
}

// Number of decimal digits of |v|; 1 for zero.
fn digit_count(v: &BigInt) -> u64 {
    if v.is_zero() {
        return 1;
    }

    // 2^(bits-1) <= |v| < 2^bits gives either `est` or `est + 1` digits.
    let bits = v.bits();
    let est = ((bits - 1) as f64 * LOG10_2) as u64 + 1;

    if *v.magnitude() >= num_traits::pow(BigUint::from(10u32), est as usize) {
        est + 1
    } else {
        est
    }
}

// Decides if the magnitude of the truncated quotient `q` must be incremented given the remainder `r`.
fn round_increment(q: &BigInt, r: &BigInt, divisor: &BigInt, negative: bool, rm: RoundingMode) -> bool {
    let twice: BigUint = r.magnitude() * 2u32;

    match twice.cmp(divisor.magnitude()) {
        Ordering::Less => false,
        Ordering::Greater => rm != RoundingMode::None,
        Ordering::Equal => match rm {
            RoundingMode::None => false,
            RoundingMode::Up => !negative,
            RoundingMode::Down => negative,
            RoundingMode::ToZero => false,
            RoundingMode::FromZero => true,
            RoundingMode::ToEven => q.is_odd(),
            RoundingMode::ToOdd => q.is_even(),
        },
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let s1 = self.signum();
        let s2 = other.signum();

        if s1 != s2 {
            return s1.cmp(&s2);
        }

        if s1 == 0 {
            return Ordering::Equal;
        }

        // cheap check of magnitudes first
        let e1 = self.exponent();
        let e2 = other.exponent();
        if e1 != e2 {
            let ord = e1.cmp(&e2);
            return if s1 > 0 { ord } else { ord.reverse() };
        }

        let (a, b, _) = Self::align(self, other);
        a.cmp(&b)
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let s = self.strip_trailing_zeros();
        s.unscaled.hash(state);
        s.scale.hash(state);
    }
}

impl Default for Decimal {
    fn default() -> Self {
        Self::zero()
    }
}

macro_rules! impl_int_conv {
    ($($s:ty),*) => {
        $(
            impl From<$s> for Decimal {
                fn from(v: $s) -> Self {
                    Decimal::new(BigInt::from(v), 0)
                }
            }
        )*
    };
}

impl_int_conv!(i8, i16, i32, i64, u8, u16, u32, u64);

impl From<BigInt> for Decimal {
    fn from(v: BigInt) -> Self {
        Decimal::new(v, 0)
    }
}

impl From<&ArbitraryInteger> for Decimal {
    fn from(v: &ArbitraryInteger) -> Self {
        Decimal::new(v.to_bigint(), 0)
    }
}

impl Display for Decimal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let digits = self.unscaled.magnitude().to_string();

        if self.is_negative() {
            f.write_str("-")?;
        }

        if self.scale <= 0 {
            f.write_str(&digits)?;
            if !self.unscaled.is_zero() {
                for _ in 0..self.scale.unsigned_abs() {
                    f.write_str("0")?;
                }
            }
            Ok(())
        } else {
            let scale = self.scale as usize;
            if digits.len() > scale {
                let (int, fract) = digits.split_at(digits.len() - scale);
                write!(f, "{int}.{fract}")
            } else {
                f.write_str("0.")?;
                for _ in 0..scale - digits.len() {
                    f.write_str("0")?;
                }
                f.write_str(&digits)
            }
        }
    }
}

impl FromStr for Decimal {
    type Err = Error;

    /// Parses plain (`-12.5`) and exponent (`1.25e-3`) notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let (mantissa, exp) = match s.find(|c: char| c == 'e' || c == 'E') {
            Some(pos) => {
                let exp: i64 = s[pos + 1..].parse().map_err(|_| Error::InvalidArgument)?;
                (&s[..pos], exp)
            }
            None => (s, 0),
        };

        let (neg, mantissa) = match mantissa.as_bytes().first() {
            Some(b'-') => (true, &mantissa[1..]),
            Some(b'+') => (false, &mantissa[1..]),
            _ => (false, mantissa),
        };

        let (int, fract) = match mantissa.find('.') {
            Some(pos) => (&mantissa[..pos], &mantissa[pos + 1..]),
            None => (mantissa, ""),
        };

        if int.is_empty() && fract.is_empty() {
            return Err(Error::InvalidArgument);
        }

        if !int.bytes().chain(fract.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidArgument);
        }

        let digits: String = int.chars().chain(fract.chars()).collect();
        let mut unscaled = BigInt::from_str(&digits).map_err(|_| Error::InvalidArgument)?;
        if neg {
            unscaled = -unscaled;
        }

        let scale = (fract.len() as i64).checked_sub(exp).ok_or(Error::InvalidArgument)?;

        Ok(Decimal::new(unscaled, scale))
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(dec("12.50").to_string(), "12.50");
        assert_eq!(dec("-0.0012").to_string(), "-0.0012");
        assert_eq!(dec("1.25e-3").to_string(), "0.00125");
        assert_eq!(dec("-7E2").to_string(), "-700");
        assert_eq!(dec(".5").to_string(), "0.5");
        assert_eq!(dec("0").to_string(), "0");
        assert_eq!(dec("12.50").scale(), 2);
        assert!("".parse::<Decimal>().is_err());
        assert!("1.2.3".parse::<Decimal>().is_err());
        assert!("-".parse::<Decimal>().is_err());
        assert!("1e".parse::<Decimal>().is_err());

        assert_eq!(Decimal::from_f64(0.1).unwrap(), dec("0.1"));
        assert_eq!(Decimal::from_f64(-2.5e-7).unwrap(), dec("-0.00000025"));
        assert!(Decimal::from_f64(f64::NAN).is_err());
        assert_eq!(dec("1.5").to_f64(), 1.5);
        assert_eq!(dec("-3e300").to_f64(), -3e300);
    }

    #[test]
    fn test_precision_exponent() {
        assert_eq!(dec("0").precision(), 1);
        assert_eq!(dec("999").precision(), 3);
        assert_eq!(dec("1000").precision(), 4);
        assert_eq!(dec("-0.00123").precision(), 3);
        assert_eq!(dec("-0.00123").exponent(), -3);
        assert_eq!(dec("123.4").exponent(), 2);

        for i in 1..60 {
            let v = ten_pow(i);
            assert_eq!(digit_count(&v), i + 1);
            assert_eq!(digit_count(&(v - BigInt::one())), i);
        }

        let (m, e) = dec("-123.45").to_f64_exp();
        assert!((m + 1.2345).abs() < 1e-12);
        assert_eq!(e, 2);
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(dec("1.5").add(&dec("0.25")), dec("1.75"));
        assert_eq!(dec("1.5").sub(&dec("2.25")), dec("-0.75"));
        assert_eq!(dec("-1.5").mul(&dec("0.2")), dec("-0.3"));
        assert_eq!(dec("1.5").mul_pow10(2).unwrap(), dec("150"));
        assert_eq!(dec("1.0"), dec("1.000"));
        assert!(dec("-2") < dec("-1.5"));
        assert!(dec("0.001") < dec("0.01"));
        assert!(dec("12") > dec("9.99"));
        assert_eq!(dec("1.2300").strip_trailing_zeros().scale(), 2);
        assert_eq!(dec("1200").strip_trailing_zeros().scale(), -2);
    }

    #[test]
    fn test_div() {
        let mc = MathContext::new(10, RoundingMode::ToEven);
        assert_eq!(dec("1").div(&dec("3"), &mc).unwrap(), dec("0.3333333333"));
        assert_eq!(dec("2").div(&dec("3"), &mc).unwrap(), dec("0.6666666667"));
        assert_eq!(dec("-2").div(&dec("3"), &mc).unwrap(), dec("-0.6666666667"));
        assert_eq!(dec("1").div(&dec("8"), &mc).unwrap(), dec("0.125"));
        assert_eq!(dec("12345").div(&dec("0.001"), &mc).unwrap(), dec("12345000"));

        let mc = MathContext::new(10, RoundingMode::None);
        assert_eq!(dec("2").div(&dec("3"), &mc).unwrap(), dec("0.6666666666"));

        assert_eq!(dec("1").div(&dec("0"), &mc).unwrap_err(), Error::DivisionByZero);
        assert_eq!(dec("1").div(&dec("3"), &MathContext::unlimited()).unwrap_err(), Error::InvalidArgument);
        assert_eq!(dec("4").reciprocal(&mc).unwrap(), dec("0.25"));
    }

    #[test]
    fn test_scale_overflow() {
        assert_eq!("1e-9223372036854775808".parse::<Decimal>().err(), Some(Error::InvalidArgument));
        assert_eq!("1.5e-9223372036854775807".parse::<Decimal>().err(), Some(Error::InvalidArgument));
        assert_eq!("1e9223372036854775807".parse::<Decimal>().unwrap().scale(), -i64::MAX);
        assert!("1e99999999999999999999".parse::<Decimal>().is_err());

        let tiny = Decimal::new(BigInt::from(3), i64::MAX);
        let huge = Decimal::new(BigInt::from(3), i64::MIN);
        assert_eq!(tiny.mul_pow10(-1).err(), Some(Error::InvalidArgument));
        assert_eq!(huge.mul_pow10(1).err(), Some(Error::InvalidArgument));
        assert_eq!(tiny.mul_pow10(1).unwrap().scale(), i64::MAX - 1);

        assert_eq!(tiny.checked_mul(&tiny).err(), Some(Error::InvalidArgument));
        assert_eq!(tiny.checked_mul(&huge).unwrap().scale(), -1);
        assert_eq!(tiny.mul(&tiny).scale(), i64::MAX);

        let mc = MathContext::new(10, RoundingMode::ToEven);
        assert_eq!(tiny.div(&huge, &mc).err(), Some(Error::InvalidArgument));
        assert_eq!(huge.div(&tiny, &mc).err(), Some(Error::InvalidArgument));
    }

    #[test]
    fn test_round() {
        let round = |s: &str, p: usize, rm: RoundingMode| dec(s).round(&MathContext::new(p, rm)).to_string();

        assert_eq!(round("1.25", 2, RoundingMode::ToEven), "1.2");
        assert_eq!(round("1.35", 2, RoundingMode::ToEven), "1.4");
        assert_eq!(round("1.25", 2, RoundingMode::ToOdd), "1.3");
        assert_eq!(round("1.25", 2, RoundingMode::FromZero), "1.3");
        assert_eq!(round("1.25", 2, RoundingMode::ToZero), "1.2");
        assert_eq!(round("-1.25", 2, RoundingMode::Up), "-1.2");
        assert_eq!(round("-1.25", 2, RoundingMode::Down), "-1.3");
        assert_eq!(round("1.25", 2, RoundingMode::Up), "1.3");
        assert_eq!(round("1.2501", 2, RoundingMode::ToZero), "1.3");
        assert_eq!(round("1.2999", 2, RoundingMode::None), "1.2");
        assert_eq!(round("-1.2999", 2, RoundingMode::None), "-1.2");
        assert_eq!(round("9.99", 2, RoundingMode::ToEven), "10");
        assert_eq!(round("99.96", 3, RoundingMode::ToEven), "100");
        assert_eq!(round("123456", 3, RoundingMode::ToEven), "123000");
        assert_eq!(round("1.5", 0, RoundingMode::ToEven), "1.5");
        assert_eq!(dec("99.96").round(&MathContext::new(3, RoundingMode::ToEven)).precision(), 3);
    }

    #[test]
    fn test_operators() {
        let a = dec("1.5");
        let b = dec("-0.5");
        assert_eq!(&a + &b, dec("1"));
        assert_eq!(&a - &b, dec("2"));
        assert_eq!(&a * &b, dec("-0.75"));
        assert_eq!(-a, dec("-1.5"));
        assert_eq!(Decimal::from(&ArbitraryInteger::from(-42)), Decimal::from(-42));
    }
}
