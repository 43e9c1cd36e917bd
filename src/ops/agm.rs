//! Arithmetic-geometric mean.

use crate::common::consts::HALF;
use crate::ctx::MathContext;
use crate::decimal::Decimal;
use crate::defs::Error;
use crate::ops::cache::AlgorithmStrategy;
use crate::ops::cache::PrecisionCache;
use crate::ops::sqrt::sqrt_with_seed;
use crate::ops::util::parameter;
use crate::ops::util::working_context;
use log::trace;

/// Arithmetic-geometric mean of two non-negative numbers:
/// `a' = (a + b) / 2`, `b' = sqrt(a*b)` until `a` and `b` are equal with the working precision.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArithmeticGeometricMean;

impl AlgorithmStrategy for ArithmeticGeometricMean {
    fn calculate(&self, parameters: &[Decimal], _previous: Option<&Decimal>, mc: &MathContext) -> Result<Decimal, Error> {
        agm_value(parameter(parameters, 0)?, parameter(parameters, 1)?, mc)
    }

    fn is_exact(&self, parameters: &[Decimal], value: &Decimal) -> bool {
        match (parameter(parameters, 0), parameter(parameters, 1)) {
            (Ok(a), Ok(b)) => a.is_zero() || b.is_zero() || (a == b && a == value),
            _ => false,
        }
    }
}

/// Returns the arithmetic-geometric mean of `a` and `b` as a precision cache.
///
/// ## Errors
///
///  - ArgumentOutOfDomain: `a` or `b` is negative.
pub fn agm(a: Decimal, b: Decimal) -> Result<PrecisionCache<ArithmeticGeometricMean>, Error> {
    if a.is_negative() || b.is_negative() {
        return Err(Error::ArgumentOutOfDomain);
    }

    Ok(PrecisionCache::new(vec![a, b], ArithmeticGeometricMean))
}

/// Computes the arithmetic-geometric mean of `a` and `b` with the precision of `mc`.
pub(crate) fn agm_value(a: &Decimal, b: &Decimal, mc: &MathContext) -> Result<Decimal, Error> {
    if a.is_negative() || b.is_negative() {
        return Err(Error::ArgumentOutOfDomain);
    }

    if mc.is_unlimited() {
        return Err(Error::InvalidArgument);
    }

    if a.is_zero() || b.is_zero() {
        return Ok(Decimal::zero());
    }

    let wmc = working_context(mc, 5);
    let mut a = a.round(&wmc);
    let mut b = b.round(&wmc);
    let mut prev_diff: Option<Decimal> = None;
    let mut iters = 0;

    loop {
        let diff = a.sub(&b).abs();

        // a and b one unit in the last place apart can not get any closer.
        let ulp = Decimal::one().mul_pow10(a.exponent() - wmc.precision() as i64 + 1)?;
        if diff <= ulp || prev_diff.as_ref().map_or(false, |d| diff >= *d) {
            break;
        }

        let a1 = a.add(&b).mul(&HALF).round(&wmc);
        let b1 = sqrt_with_seed(&a.mul(&b).round(&wmc), Some(&b), &wmc)?;

        a = a1;
        b = b1;
        prev_diff = Some(diff);
        iters += 1;
    }

    trace!("agm: {} iterations with {} digits", iters, wmc.precision());

    Ok(a.round(mc))
}
