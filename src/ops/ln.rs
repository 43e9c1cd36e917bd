//! Natural logarithm.

use crate::common::consts::ONE;
use crate::ctx::MathContext;
use crate::decimal::Decimal;
use crate::defs::Error;
use crate::ops::cache::AlgorithmStrategy;
use crate::ops::cache::PrecisionCache;
use crate::ops::sqrt::sqrt_with_seed;
use crate::ops::util::halvings;
use crate::ops::util::is_negligible;
use crate::ops::util::ln_estimate;
use crate::ops::util::parameter;
use crate::ops::util::working_context;
use log::trace;
use num_bigint::BigInt;
use num_traits::One;

// Arguments are reduced until |ln(x)| is below this value.
const REDUCED_LN: f64 = 0.1;

/// Natural logarithm computed with the series of `atanh`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Logarithm;

impl AlgorithmStrategy for Logarithm {
    fn calculate(&self, parameters: &[Decimal], _previous: Option<&Decimal>, mc: &MathContext) -> Result<Decimal, Error> {
        ln_value(parameter(parameters, 0)?, mc)
    }

    fn is_exact(&self, parameters: &[Decimal], _value: &Decimal) -> bool {
        parameter(parameters, 0).map_or(false, |x| *x == *ONE)
    }
}

/// Returns the natural logarithm of `x` as a precision cache.
///
/// ## Errors
///
///  - ArgumentOutOfDomain: `x` is not positive.
pub fn ln(x: Decimal) -> Result<PrecisionCache<Logarithm>, Error> {
    if !x.is_positive() {
        return Err(Error::ArgumentOutOfDomain);
    }

    Ok(PrecisionCache::new(vec![x], Logarithm))
}

/// Computes the natural logarithm of `x` with the precision of `mc`.
///
/// ## Errors
///
///  - ArgumentOutOfDomain: `x` is not positive.
///  - InvalidArgument: precision of `mc` is unlimited.
pub(crate) fn ln_value(x: &Decimal, mc: &MathContext) -> Result<Decimal, Error> {
    // reduction: ln(x) = 2*ln(sqrt(x))
    // replacement: ln(x) = 2*atanh((x-1)/(x+1))
    // atanh(z) = z + z^3/3 + z^5/5 + ...

    if !x.is_positive() {
        return Err(Error::ArgumentOutOfDomain);
    }

    if mc.is_unlimited() {
        return Err(Error::InvalidArgument);
    }

    if *x == *ONE {
        return Ok(Decimal::zero());
    }

    let k = halvings(ln_estimate(x).abs(), REDUCED_LN);
    let wmc = working_context(mc, 10 + k / 3);

    let mut y = x.clone();
    for _ in 0..k {
        y = sqrt_with_seed(&y, None, &wmc)?;
    }

    let z = y.sub(&ONE).div(&y.add(&ONE), &wmc)?;
    let z2 = z.mul(&z).round(&wmc);

    let mut sum = z.clone();
    let mut pow = z;
    let mut n = 1u32;

    loop {
        pow = pow.mul(&z2).round(&wmc);
        let term = pow.div(&Decimal::from(2 * n + 1), &wmc)?;

        if is_negligible(&term, &sum, &wmc) {
            break;
        }

        sum = sum.add(&term);
        n += 1;
    }

    trace!("ln: {} reductions, {} terms with {} digits", k, n, wmc.precision());

    let ret = sum.mul(&Decimal::from(BigInt::one() << (k + 1)));

    Ok(ret.round(mc))
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::RoundingMode;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_ln() {
        let mc = MathContext::new(30, RoundingMode::ToEven);

        assert_eq!(ln_value(&dec("1"), &mc).unwrap(), Decimal::zero());
        assert_eq!(ln_value(&dec("2"), &mc).unwrap(), dec("0.693147180559945309417232121458"));
        assert_eq!(ln_value(&dec("0.5"), &mc).unwrap(), dec("-0.693147180559945309417232121458"));
        assert_eq!(ln_value(&dec("10"), &mc).unwrap(), dec("2.30258509299404568401799145468"));
        assert_eq!(ln_value(&dec("1.0001"), &mc).unwrap(), dec("0.0000999950003333083353331666809511"));

        let mc = MathContext::new(15, RoundingMode::ToEven);
        assert_eq!(ln_value(&dec("1e100"), &mc).unwrap(), dec("230.258509299405"));
        assert_eq!(ln_value(&dec("3e-50"), &mc).unwrap(), dec("-114.030642361034"));

        assert_eq!(ln_value(&dec("0"), &mc).unwrap_err(), Error::ArgumentOutOfDomain);
        assert_eq!(ln_value(&dec("-1"), &mc).unwrap_err(), Error::ArgumentOutOfDomain);

        let c = ln(dec("3")).unwrap();
        assert_eq!(c.value_to_precision(&mc).unwrap(), dec("1.09861228866811"));
        assert!(ln(dec("0")).is_err());
    }
}
