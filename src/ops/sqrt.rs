//! Square root.

use crate::common::consts::HALF;
use crate::common::consts::ONE;
use crate::ctx::MathContext;
use crate::decimal::Decimal;
use crate::defs::Error;
use crate::ops::cache::AlgorithmStrategy;
use crate::ops::cache::PrecisionCache;
use crate::ops::util::parameter;
use crate::ops::util::working_context;
use log::trace;

// Guard digits of the Newton iteration.
const GUARD: usize = 5;

/// Square root computed with Newton's iteration `r' = (r + x/r) / 2`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SquareRoot;

impl AlgorithmStrategy for SquareRoot {
    fn calculate(&self, parameters: &[Decimal], previous: Option<&Decimal>, mc: &MathContext) -> Result<Decimal, Error> {
        sqrt_with_seed(parameter(parameters, 0)?, previous, mc)
    }

    fn is_exact(&self, parameters: &[Decimal], value: &Decimal) -> bool {
        parameter(parameters, 0).map_or(false, |x| value.mul(value) == *x)
    }
}

/// Returns the square root of `x` as a precision cache.
///
/// ## Errors
///
///  - ArgumentOutOfDomain: `x` is negative.
pub fn sqrt(x: Decimal) -> Result<PrecisionCache<SquareRoot>, Error> {
    if x.is_negative() {
        return Err(Error::ArgumentOutOfDomain);
    }

    Ok(PrecisionCache::new(vec![x], SquareRoot))
}

/// Computes the square root of `x` with the precision of `mc`, starting the iteration from `seed` if it is given.
pub(crate) fn sqrt_with_seed(x: &Decimal, seed: Option<&Decimal>, mc: &MathContext) -> Result<Decimal, Error> {
    if x.is_negative() {
        return Err(Error::ArgumentOutOfDomain);
    }

    if mc.is_unlimited() {
        return Err(Error::InvalidArgument);
    }

    if x.is_zero() {
        return Ok(Decimal::zero());
    }

    if *x == *ONE {
        return Ok(Decimal::one());
    }

    let wmc = working_context(mc, GUARD);

    let mut r = match seed {
        Some(s) if s.is_positive() => s.clone(),
        _ => sqrt_estimate(x)?,
    };

    // iterate while the error decreases.
    let mut err: Option<Decimal> = None;
    let mut iters = 0;

    loop {
        let q = x.div(&r, &wmc)?;
        let next = r.add(&q).mul(&HALF).round(&wmc);
        let diff = next.sub(&r).abs();

        r = next;
        iters += 1;

        if diff.is_zero() || err.as_ref().map_or(false, |e| diff >= *e) {
            break;
        }

        err = Some(diff);
    }

    trace!("sqrt: {} iterations with {} digits", iters, wmc.precision());

    Ok(r.round(mc))
}

// Initial approximation using f64.
fn sqrt_estimate(x: &Decimal) -> Result<Decimal, Error> {
    let (mut m, mut e) = x.to_f64_exp();

    if e % 2 != 0 {
        m *= 10.0;
        e -= 1;
    }

    Decimal::from_f64(m.sqrt())?.mul_pow10(e / 2)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::RoundingMode;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_sqrt() {
        let mc = MathContext::new(10, RoundingMode::ToEven);

        let s2 = sqrt(dec("2")).unwrap();
        assert_eq!(s2.value_to_precision(&mc).unwrap().to_string(), "1.414213562");

        let mc50 = MathContext::new(50, RoundingMode::ToEven);
        assert_eq!(
            s2.value_to_precision(&mc50).unwrap(),
            dec("1.4142135623730950488016887242096980785696718753769")
        );

        assert_eq!(sqrt_with_seed(&dec("0"), None, &mc).unwrap(), Decimal::zero());
        assert_eq!(sqrt_with_seed(&dec("1"), None, &mc).unwrap(), Decimal::one());
        assert_eq!(sqrt_with_seed(&dec("144"), None, &mc).unwrap(), dec("12"));
        assert_eq!(sqrt_with_seed(&dec("0.0004"), None, &mc).unwrap(), dec("0.02"));
        assert_eq!(sqrt_with_seed(&dec("4e1000"), None, &mc).unwrap(), dec("2e500"));
        assert_eq!(sqrt_with_seed(&dec("9e-1001"), None, &mc).unwrap(), dec("9.486832981e-501"));

        assert_eq!(sqrt(dec("-1")).err(), Some(Error::ArgumentOutOfDomain));
    }

    #[test]
    fn test_sqrt_exact_ties() {
        let cases = [
            (RoundingMode::ToEven, "1.2"),
            (RoundingMode::ToZero, "1.2"),
            (RoundingMode::Down, "1.2"),
            (RoundingMode::FromZero, "1.3"),
            (RoundingMode::Up, "1.3"),
        ];

        for (rm, expected) in cases {
            let c = sqrt(dec("1.5625")).unwrap();
            assert_eq!(c.value_to_precision(&MathContext::new(2, rm)).unwrap().to_string(), expected, "{:?}", rm);
        }

        let mc = MathContext::new(1, RoundingMode::ToEven);
        assert_eq!(sqrt(dec("6.25")).unwrap().value_to_precision(&mc).unwrap(), dec("2"));
        let mc = MathContext::new(2, RoundingMode::ToEven);
        assert_eq!(sqrt(dec("0.015625")).unwrap().value_to_precision(&mc).unwrap(), dec("0.12"));

        // seeded from a less precise inexact value
        let c = sqrt(dec("1.5625")).unwrap();
        assert_eq!(c.value_to_precision(&MathContext::new(1, RoundingMode::ToEven)).unwrap(), dec("1"));
        assert_eq!(c.value_to_precision(&mc).unwrap(), dec("1.2"));

        assert!(SquareRoot.is_exact(&[dec("1.5625")], &dec("1.25")));
        assert!(!SquareRoot.is_exact(&[dec("2")], &dec("1.41")));
        assert_eq!(sqrt(dec("2")).unwrap().value_to_precision(&mc).unwrap(), dec("1.4"));
    }
}
