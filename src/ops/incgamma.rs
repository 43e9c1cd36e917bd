//! Incomplete Gamma functions.

use crate::ctx::MathContext;
use crate::decimal::Decimal;
use crate::defs::Error;
use crate::ops::cache::AlgorithmStrategy;
use crate::ops::cache::PrecisionCache;
use crate::ops::exp::exp;
use crate::ops::gamma::gamma_value;
use crate::ops::ln::ln_value;
use crate::ops::util::abs_estimate;
use crate::ops::util::is_negligible;
use crate::ops::util::parameter;
use crate::ops::util::working_context;
use log::trace;

// The number of terms of the series grows linearly with x.
const MAX_X: f64 = 1e6;

const LOG10_E: f64 = core::f64::consts::LOG10_E;

/// Lower incomplete Gamma function `γ(s, x)` computed with the series
/// `x^s e^-x Σ x^n / (s(s+1)...(s+n))`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LowerIncompleteGamma;

impl AlgorithmStrategy for LowerIncompleteGamma {
    fn calculate(&self, parameters: &[Decimal], _previous: Option<&Decimal>, mc: &MathContext) -> Result<Decimal, Error> {
        lower_value(parameter(parameters, 0)?, parameter(parameters, 1)?, mc)
    }

    fn is_exact(&self, parameters: &[Decimal], _value: &Decimal) -> bool {
        parameter(parameters, 1).map_or(false, |x| x.is_zero())
    }
}

/// Upper incomplete Gamma function `Γ(s, x) = Γ(s) - γ(s, x)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UpperIncompleteGamma;

impl AlgorithmStrategy for UpperIncompleteGamma {
    fn calculate(&self, parameters: &[Decimal], _previous: Option<&Decimal>, mc: &MathContext) -> Result<Decimal, Error> {
        upper_value(parameter(parameters, 0)?, parameter(parameters, 1)?, mc)
    }
}

/// Returns `γ(s, x)` as a precision cache.
///
/// ## Errors
///
///  - ArgumentOutOfDomain: `s` is not positive, `x` is negative, or `x` is greater than 10^6.
pub fn lower_incomplete_gamma(s: Decimal, x: Decimal) -> Result<PrecisionCache<LowerIncompleteGamma>, Error> {
    check_domain(&s, &x)?;
    Ok(PrecisionCache::new(vec![s, x], LowerIncompleteGamma))
}

/// Returns `Γ(s, x)` as a precision cache.
///
/// ## Errors
///
///  - ArgumentOutOfDomain: `s` is not positive, `x` is negative, or `x` is greater than 10^6.
pub fn upper_incomplete_gamma(s: Decimal, x: Decimal) -> Result<PrecisionCache<UpperIncompleteGamma>, Error> {
    check_domain(&s, &x)?;
    Ok(PrecisionCache::new(vec![s, x], UpperIncompleteGamma))
}

fn check_domain(s: &Decimal, x: &Decimal) -> Result<(), Error> {
    if !s.is_positive() || x.is_negative() || abs_estimate(x) > MAX_X {
        Err(Error::ArgumentOutOfDomain)
    } else {
        Ok(())
    }
}

fn lower_value(s: &Decimal, x: &Decimal, mc: &MathContext) -> Result<Decimal, Error> {
    check_domain(s, x)?;

    if mc.is_unlimited() {
        return Err(Error::InvalidArgument);
    }

    if x.is_zero() {
        return Ok(Decimal::zero());
    }

    let wmc = working_context(mc, 10);

    let mut term = s.reciprocal(&wmc)?;
    let mut sum = term.clone();
    let mut n = 1u32;

    loop {
        term = term.mul(x).div(&s.add(&Decimal::from(n)), &wmc)?;

        if is_negligible(&term, &sum, &wmc) {
            break;
        }

        sum = sum.add(&term);
        n += 1;
    }

    trace!("lower incomplete gamma: {} terms with {} digits", n, wmc.precision());

    // x^s * e^-x
    let pw = s.mul(&ln_value(x, &wmc)?).sub(x);
    let f = exp(&pw.round(&wmc), &wmc)?;

    Ok(f.mul(&sum).round(mc))
}

fn upper_value(s: &Decimal, x: &Decimal, mc: &MathContext) -> Result<Decimal, Error> {
    check_domain(s, x)?;

    if mc.is_unlimited() {
        return Err(Error::InvalidArgument);
    }

    // Γ(s, x) decreases as e^-x, so the subtraction loses about x*log10(e) digits.
    let lost = (abs_estimate(x) * LOG10_E).ceil() as usize;
    let wmc = working_context(mc, lost + 10);

    let g = gamma_value(s, &wmc)?;
    let l = lower_value(s, x, &wmc)?;

    Ok(g.sub(&l).round(mc))
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::RoundingMode;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_incomplete_gamma() {
        let mc = MathContext::new(20, RoundingMode::ToEven);

        let c = lower_incomplete_gamma(dec("2"), dec("3")).unwrap();
        assert_eq!(c.value_to_precision(&mc).unwrap(), dec("0.80085172652854422808"));
        assert_eq!(lower_value(&dec("0.5"), &dec("2"), &mc).unwrap(), dec("1.6918067329451983365"));
        assert_eq!(lower_value(&dec("3"), &dec("0.1"), &mc).unwrap(), dec("0.00030930614052934330701"));
        assert_eq!(lower_value(&dec("3"), &dec("0"), &mc).unwrap(), Decimal::zero());

        let c = upper_incomplete_gamma(dec("2"), dec("3")).unwrap();
        assert_eq!(c.value_to_precision(&mc).unwrap(), dec("0.19914827347145577192"));
        assert_eq!(upper_value(&dec("2.5"), &dec("1.5"), &mc).unwrap(), dec("0.93051944278679239087"));

        // γ(s, x) + Γ(s, x) = Γ(s)
        let mc = MathContext::new(25, RoundingMode::ToEven);
        let sum = lower_value(&dec("1.5"), &dec("0.7"), &mc)
            .unwrap()
            .add(&upper_value(&dec("1.5"), &dec("0.7"), &mc).unwrap());
        assert!(sum.sub(&gamma_value(&dec("1.5"), &mc).unwrap()).abs() < dec("1e-23"));

        assert_eq!(lower_incomplete_gamma(dec("0"), dec("1")).err(), Some(Error::ArgumentOutOfDomain));
        assert_eq!(upper_incomplete_gamma(dec("1"), dec("-1")).err(), Some(Error::ArgumentOutOfDomain));
    }
}
