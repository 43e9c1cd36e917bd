//! Utility functions for numeric methods.

use crate::ctx::MathContext;
use crate::decimal::Decimal;
use crate::defs::Error;
use crate::RoundingMode;

const LN_10_F64: f64 = core::f64::consts::LN_10;

/// Context for intermediate results: `guard` digits above the precision of `mc`, rounding to the nearest.
pub fn working_context(mc: &MathContext, guard: usize) -> MathContext {
    MathContext::new(mc.precision() + guard, RoundingMode::ToEven)
}

/// Returns the parameter at `idx`.
pub fn parameter(parameters: &[Decimal], idx: usize) -> Result<&Decimal, Error> {
    parameters.get(idx).ok_or(Error::InvalidArgument)
}

/// Returns true if `x` has no fractional part.
pub fn is_integer(x: &Decimal) -> bool {
    x.strip_trailing_zeros().scale() <= 0
}

/// Approximate natural logarithm of |x| for choosing the number of reductions and guard digits.
/// Prereq: `x` is not zero.
pub fn ln_estimate(x: &Decimal) -> f64 {
    let (m, e) = x.to_f64_exp();
    m.abs().ln() + e as f64 * LN_10_F64
}

/// Approximate value of |x| as f64, infinite if it is out of range.
pub fn abs_estimate(x: &Decimal) -> f64 {
    let (m, e) = x.to_f64_exp();
    if e > 308 {
        f64::INFINITY
    } else if e < -308 {
        0.0
    } else {
        m.abs() * 10f64.powi(e as i32)
    }
}

/// Number of halvings of `v` needed to make it not greater than `limit`.
pub fn halvings(v: f64, limit: f64) -> usize {
    if v > limit {
        (v / limit).log2().ceil() as usize
    } else {
        0
    }
}

/// Returns true if the term of a series is negligible relative to the sum with the precision of `mc`.
pub fn is_negligible(term: &Decimal, sum: &Decimal, mc: &MathContext) -> bool {
    term.is_zero() || (!sum.is_zero() && term.exponent() < sum.exponent() - mc.precision() as i64 - 1)
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_util() {
        assert!(is_integer(&"120.000".parse().unwrap()));
        assert!(is_integer(&"-3".parse().unwrap()));
        assert!(!is_integer(&"0.5".parse().unwrap()));

        assert!((ln_estimate(&"1e100".parse().unwrap()) - 230.2585).abs() < 1e-3);
        assert!((abs_estimate(&"-2.5".parse().unwrap()) - 2.5).abs() < 1e-12);
        assert_eq!(abs_estimate(&"1e400".parse().unwrap()), f64::INFINITY);

        assert_eq!(halvings(0.1, 0.125), 0);
        assert_eq!(halvings(1.0, 0.125), 3);
        assert_eq!(halvings(1.5, 0.125), 4);

        let mc = MathContext::with_precision(10);
        assert!(is_negligible(&"1e-12".parse().unwrap(), &Decimal::one(), &mc));
        assert!(!is_negligible(&"1e-10".parse().unwrap(), &Decimal::one(), &mc));
        assert_eq!(parameter(&[], 0).unwrap_err(), Error::InvalidArgument);
    }
}
