//! Gamma function.

use crate::common::consts::HALF;
use crate::common::consts::ONE;
use crate::ctx::MathContext;
use crate::decimal::Decimal;
use crate::defs::Error;
use crate::ops::cache::AlgorithmStrategy;
use crate::ops::cache::PrecisionCache;
use crate::ops::consts::TWO_PI;
use crate::ops::exp::exp;
use crate::ops::ln::ln_value;
use crate::ops::sqrt::sqrt_with_seed;
use crate::ops::util::abs_estimate;
use crate::ops::util::is_integer;
use crate::ops::util::parameter;
use crate::ops::util::working_context;
use lazy_static::lazy_static;
use log::trace;
use num_bigint::BigInt;
use num_traits::One;

// Lanczos approximation with g = 7 and 9 coefficients.
const LANCZOS_G: u32 = 7;
const LANCZOS_COEF: [&str; 9] = [
    "0.99999999999980993",
    "676.5203681218851",
    "-1259.1392167224028",
    "771.32342877765313",
    "-176.61502916214059",
    "12.507343278686905",
    "-0.13857109526572012",
    "9.9843695780195716e-6",
    "1.5056327351493116e-7",
];

// Relative error of the Lanczos table is about 1e-13.
const LANCZOS_MAX_P: usize = 12;

// Integer arguments up to this value are computed as a factorial.
const FACTORIAL_MAX: u32 = 1000;

const MAX_ARG: f64 = 1e7;

// log10(2π)
const LOG10_2PI: f64 = 0.798_179_868_358_115;

lazy_static! {
    static ref LANCZOS: Vec<Decimal> = LANCZOS_COEF.iter().filter_map(|c| c.parse().ok()).collect();
}

/// Gamma function.
///
/// Up to 12 digits the Lanczos approximation with a fixed table of coefficients is used.
/// Higher precision is computed with Spouge's approximation, whose coefficients depend on the precision.
/// Positive integers up to 1000 are computed exactly as factorials.
#[derive(Debug, Default, Clone, Copy)]
pub struct LanczosGamma;

impl AlgorithmStrategy for LanczosGamma {
    fn calculate(&self, parameters: &[Decimal], _previous: Option<&Decimal>, mc: &MathContext) -> Result<Decimal, Error> {
        gamma_value(parameter(parameters, 0)?, mc)
    }

    fn is_exact(&self, parameters: &[Decimal], value: &Decimal) -> bool {
        match parameter(parameters, 0) {
            Ok(x) if is_integer(x) && x.is_positive() && *x <= Decimal::from(FACTORIAL_MAX) => {
                *value == Decimal::from(factorial(x.to_f64() as u32 - 1))
            }
            _ => false,
        }
    }
}

/// Returns `Γ(x)` as a precision cache.
///
/// ## Errors
///
///  - ArgumentOutOfDomain: `x` is zero or a negative integer, or |x| is greater than 10^7.
pub fn gamma(x: Decimal) -> Result<PrecisionCache<LanczosGamma>, Error> {
    check_domain(&x)?;
    Ok(PrecisionCache::new(vec![x], LanczosGamma))
}

fn check_domain(x: &Decimal) -> Result<(), Error> {
    if (!x.is_positive() && is_integer(x)) || is_huge(x) {
        Err(Error::ArgumentOutOfDomain)
    } else {
        Ok(())
    }
}

/// Computes `Γ(x)` with the precision of `mc`.
pub(crate) fn gamma_value(x: &Decimal, mc: &MathContext) -> Result<Decimal, Error> {
    check_domain(x)?;

    if mc.is_unlimited() {
        return Err(Error::InvalidArgument);
    }

    if is_integer(x) && *x <= Decimal::from(FACTORIAL_MAX) {
        let n = x.to_f64() as u32;
        return Ok(Decimal::from(factorial(n - 1)).round(mc));
    }

    let wmc = working_context(mc, 10);

    // Γ(x) = Γ(x + n) / (x(x+1)...(x+n-1)) with x + n >= 1
    let mut z = x.round(&wmc);
    let mut divisor = ONE.clone();
    while z < *ONE {
        divisor = divisor.mul(&z).round(&wmc);
        z = z.add(&ONE);
    }

    let g = if mc.precision() <= LANCZOS_MAX_P {
        lanczos(&z, &wmc)?
    } else {
        spouge(&z, mc)?
    };

    g.div(&divisor, mc)
}

// Γ(z) for z >= 1 using the Lanczos approximation.
fn lanczos(z: &Decimal, mc: &MathContext) -> Result<Decimal, Error> {
    let z = z.sub(&ONE);

    let mut s = LANCZOS[0].clone();
    for (i, c) in LANCZOS.iter().enumerate().skip(1) {
        s = s.add(&c.div(&z.add(&Decimal::from(i as u32)), mc)?);
    }

    let t = z.add(&Decimal::from(LANCZOS_G)).add(&HALF);

    // sqrt(2π) * t^(z + 1/2) * e^(-t) * s
    let p = exp(&z.add(&HALF).mul(&ln_value(&t, mc)?).sub(&t).round(mc), mc)?;
    let sqrt_2pi = sqrt_with_seed(&TWO_PI.value_to_precision(mc)?, None, mc)?;

    Ok(sqrt_2pi.mul(&p).round(mc).mul(&s).round(mc))
}

// Γ(z) for z >= 1 using Spouge's approximation with relative error below 10^-p.
fn spouge(z: &Decimal, mc: &MathContext) -> Result<Decimal, Error> {
    let p = mc.precision() + 2;
    let a = (p as f64 / LOG10_2PI).ceil() as u32 + 1;

    // coefficients of alternating signs reach about 10^(0.7p).
    let wmc = working_context(mc, p * 3 / 4 + 10);

    let z = z.sub(&ONE);
    let a_dec = Decimal::from(a);

    let mut s = sqrt_with_seed(&TWO_PI.value_to_precision(&wmc)?, None, &wmc)?;
    let mut fact = ONE.clone();

    for k in 1..a {
        // c_k = (-1)^(k-1) / (k-1)! * (a-k)^(k-1/2) * e^(a-k)
        let ak = Decimal::from(a - k);
        let pw = Decimal::from(k).sub(&HALF).mul(&ln_value(&ak, &wmc)?).add(&ak);
        let mut c = exp(&pw.round(&wmc), &wmc)?.div(&fact, &wmc)?;

        if k % 2 == 0 {
            c = c.negate();
        }

        s = s.add(&c.div(&z.add(&Decimal::from(k)), &wmc)?);
        fact = fact.mul(&Decimal::from(k));
    }

    // (z+a)^(z+1/2) * e^(-(z+a))
    let za = z.add(&a_dec);
    let pw = z.add(&HALF).mul(&ln_value(&za, &wmc)?).sub(&za);
    let ret = exp(&pw.round(&wmc), &wmc)?.mul(&s).round(&wmc);

    trace!("gamma: Spouge's approximation with a = {} and {} digits", a, wmc.precision());

    Ok(ret)
}

fn factorial(n: u32) -> BigInt {
    (1..=n).fold(BigInt::one(), |acc, i| acc * i)
}

// Arguments too large to compute the power or to reduce by the recurrence.
fn is_huge(x: &Decimal) -> bool {
    abs_estimate(x) > MAX_ARG
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::RoundingMode;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_gamma() {
        let mc = MathContext::new(10, RoundingMode::ToEven);

        assert_eq!(gamma(dec("5")).unwrap().value_to_precision(&mc).unwrap(), dec("24"));
        assert_eq!(gamma_value(&dec("1"), &mc).unwrap(), Decimal::one());
        assert_eq!(gamma_value(&dec("21"), &mc).unwrap(), dec("2.432902008e18"));
        assert_eq!(gamma_value(&dec("4.5"), &mc).unwrap(), dec("11.63172840"));
        assert_eq!(gamma_value(&dec("0.1"), &mc).unwrap(), dec("9.513507699"));
        assert_eq!(gamma_value(&dec("-1.5"), &mc).unwrap(), dec("2.363271801"));

        let mc = MathContext::new(30, RoundingMode::ToEven);
        assert_eq!(gamma_value(&dec("0.5"), &mc).unwrap(), dec("1.77245385090551602729816748334"));
        assert_eq!(gamma_value(&dec("7.3"), &mc).unwrap(), dec("1271.42363366390927305799362668"));

        assert_eq!(gamma(dec("0")).err(), Some(Error::ArgumentOutOfDomain));
        assert_eq!(gamma(dec("-3")).err(), Some(Error::ArgumentOutOfDomain));
        assert_eq!(gamma(dec("1e8")).err(), Some(Error::ArgumentOutOfDomain));
    }

    #[test]
    fn test_gamma_exactness() {
        assert!(LanczosGamma.is_exact(&[dec("5")], &dec("24")));
        assert!(LanczosGamma.is_exact(&[dec("1")], &dec("1")));
        assert!(!LanczosGamma.is_exact(&[dec("21")], &dec("2.4329020082e18")));
        assert!(LanczosGamma.is_exact(&[dec("21")], &dec("2432902008176640000")));
        assert!(!LanczosGamma.is_exact(&[dec("0.5")], &dec("1.7724538509")));
        assert_eq!(factorial(0), BigInt::one());
        assert_eq!(factorial(5), BigInt::from(120));
    }
}
