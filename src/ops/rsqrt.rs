//! Reciprocal square root.

use crate::common::consts::HALF;
use crate::common::consts::THREE;
use crate::ctx::MathContext;
use crate::decimal::Decimal;
use crate::defs::Error;
use crate::ops::cache::AlgorithmStrategy;
use crate::ops::cache::PrecisionCache;
use crate::ops::util::parameter;
use crate::ops::util::working_context;
use log::trace;

const GUARD: usize = 5;

/// Reciprocal square root computed with the division-free iteration `y' = y(3 - x*y²) / 2`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReciprocalSquareRoot;

impl AlgorithmStrategy for ReciprocalSquareRoot {
    fn calculate(&self, parameters: &[Decimal], previous: Option<&Decimal>, mc: &MathContext) -> Result<Decimal, Error> {
        rsqrt_with_seed(parameter(parameters, 0)?, previous, mc)
    }

    fn is_exact(&self, parameters: &[Decimal], value: &Decimal) -> bool {
        parameter(parameters, 0).map_or(false, |x| value.mul(value).mul(x) == Decimal::one())
    }
}

/// Returns `1/sqrt(x)` as a precision cache.
///
/// ## Errors
///
///  - ArgumentOutOfDomain: `x` is not positive.
pub fn rsqrt(x: Decimal) -> Result<PrecisionCache<ReciprocalSquareRoot>, Error> {
    if !x.is_positive() {
        return Err(Error::ArgumentOutOfDomain);
    }

    Ok(PrecisionCache::new(vec![x], ReciprocalSquareRoot))
}

/// Computes `1/sqrt(x)` with the precision of `mc`, starting the iteration from `seed` if it is given.
pub(crate) fn rsqrt_with_seed(x: &Decimal, seed: Option<&Decimal>, mc: &MathContext) -> Result<Decimal, Error> {
    if !x.is_positive() {
        return Err(Error::ArgumentOutOfDomain);
    }

    if mc.is_unlimited() {
        return Err(Error::InvalidArgument);
    }

    let wmc = working_context(mc, GUARD);

    let mut y = match seed {
        Some(s) if s.is_positive() => s.clone(),
        _ => rsqrt_estimate(x)?,
    };

    let mut err: Option<Decimal> = None;
    let mut iters = 0;

    loop {
        let xy2 = x.mul(&y.mul(&y).round(&wmc)).round(&wmc);
        let next = y.mul(&THREE.sub(&xy2)).mul(&HALF).round(&wmc);
        let diff = next.sub(&y).abs();

        y = next;
        iters += 1;

        if diff.is_zero() || err.as_ref().map_or(false, |e| diff >= *e) {
            break;
        }

        err = Some(diff);
    }

    trace!("rsqrt: {} iterations with {} digits", iters, wmc.precision());

    Ok(y.round(mc))
}

fn rsqrt_estimate(x: &Decimal) -> Result<Decimal, Error> {
    let (mut m, mut e) = x.to_f64_exp();

    if e % 2 != 0 {
        m *= 10.0;
        e -= 1;
    }

    Decimal::from_f64(1.0 / m.sqrt())?.mul_pow10(-e / 2)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::RoundingMode;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_rsqrt() {
        let mc = MathContext::new(30, RoundingMode::ToEven);

        let r2 = rsqrt(dec("2")).unwrap();
        assert_eq!(
            r2.value_to_precision(&mc).unwrap(),
            dec("0.707106781186547524400844362105")
        );

        let mc = MathContext::new(10, RoundingMode::ToEven);
        assert_eq!(rsqrt_with_seed(&dec("4"), None, &mc).unwrap(), dec("0.5"));
        assert_eq!(rsqrt_with_seed(&dec("1e-20"), None, &mc).unwrap(), dec("1e10"));
        assert_eq!(rsqrt_with_seed(&dec("1000"), None, &mc).unwrap(), dec("0.03162277660"));

        assert_eq!(rsqrt(dec("0")).err(), Some(Error::ArgumentOutOfDomain));
        assert_eq!(rsqrt(dec("-2")).err(), Some(Error::ArgumentOutOfDomain));
    }

    #[test]
    fn test_rsqrt_exact_tie() {
        let c = rsqrt(dec("64")).unwrap();
        assert_eq!(c.value_to_precision(&MathContext::new(2, RoundingMode::ToEven)).unwrap(), dec("0.12"));
        assert_eq!(c.value_to_precision(&MathContext::new(2, RoundingMode::FromZero)).unwrap(), dec("0.13"));
        assert!(!ReciprocalSquareRoot.is_exact(&[dec("2")], &dec("0.707")));
    }
}
