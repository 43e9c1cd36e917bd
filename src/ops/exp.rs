//! Exponent.

use crate::common::consts::ONE;
use crate::ctx::MathContext;
use crate::decimal::Decimal;
use crate::defs::Error;
use crate::ops::util::abs_estimate;
use crate::ops::util::halvings;
use crate::ops::util::is_negligible;
use crate::ops::util::working_context;
use log::trace;
use num_bigint::BigInt;
use num_traits::One;

// Largest |x| accepted: e^x has about 4*10^8 decimal digits in the exponent.
const MAX_ARG: f64 = 1e9;

// The argument is reduced below this value before the series is applied.
const REDUCED_ARG: f64 = 0.01;

/// Computes `e^x` with the precision of `mc`.
///
/// The argument is reduced as `x / 2^k`, then the Taylor series is computed and squared `k` times.
///
/// ## Errors
///
///  - InvalidArgument: precision of `mc` is unlimited.
///  - ArgumentOutOfDomain: |x| is too large for the result to be represented.
pub fn exp(x: &Decimal, mc: &MathContext) -> Result<Decimal, Error> {
    if mc.is_unlimited() {
        return Err(Error::InvalidArgument);
    }

    if x.is_zero() {
        return Ok(Decimal::one());
    }

    let ax = abs_estimate(x);
    if ax > MAX_ARG {
        return Err(Error::ArgumentOutOfDomain);
    }

    let k = halvings(ax, REDUCED_ARG);

    // every squaring doubles the relative error.
    let wmc = working_context(mc, 10 + k * 3 / 10 + 1);

    let r = if k > 0 {
        x.div(&Decimal::from(BigInt::one() << k), &wmc)?
    } else {
        x.round(&wmc)
    };

    let mut sum = ONE.clone();
    let mut term = ONE.clone();
    let mut n = 1u32;

    loop {
        term = term.mul(&r).div(&Decimal::from(n), &wmc)?;

        if is_negligible(&term, &sum, &wmc) {
            break;
        }

        sum = sum.add(&term);
        n += 1;
    }

    for _ in 0..k {
        sum = sum.mul(&sum).round(&wmc);
    }

    trace!("exp: {} terms, {} squarings with {} digits", n, k, wmc.precision());

    Ok(sum.round(mc))
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::RoundingMode;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_exp() {
        let mc = MathContext::new(30, RoundingMode::ToEven);

        assert_eq!(exp(&dec("0"), &mc).unwrap(), Decimal::one());
        assert_eq!(exp(&dec("1"), &mc).unwrap(), dec("2.71828182845904523536028747135"));
        assert_eq!(exp(&dec("-1"), &mc).unwrap(), dec("0.367879441171442321595523770161"));
        assert_eq!(exp(&dec("0.001"), &mc).unwrap(), dec("1.00100050016670834166805575399"));

        let mc = MathContext::new(15, RoundingMode::ToEven);
        assert_eq!(exp(&dec("100"), &mc).unwrap(), dec("2.68811714181614e43"));
        assert_eq!(exp(&dec("-100"), &mc).unwrap(), dec("3.72007597602084e-44"));

        assert_eq!(exp(&dec("1e10"), &mc).unwrap_err(), Error::ArgumentOutOfDomain);
        assert_eq!(exp(&dec("1"), &MathContext::unlimited()).unwrap_err(), Error::InvalidArgument);
    }
}
