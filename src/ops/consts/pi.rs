//! π number

use crate::common::consts::HALF;
use crate::common::consts::ONE;
use crate::common::consts::QUARTER;
use crate::common::consts::TWO;
use crate::ctx::MathContext;
use crate::decimal::Decimal;
use crate::defs::Error;
use crate::ops::cache::AlgorithmStrategy;
use crate::ops::cache::PrecisionCache;
use crate::ops::rsqrt::ReciprocalSquareRoot;
use crate::ops::sqrt::sqrt_with_seed;
use crate::ops::util::working_context;
use log::trace;

/// Multiple of π computed with the Gauss-Legendre algorithm.
///
/// The only parameter is the multiplier. `1/sqrt(2)` is taken from a shared cache.
pub struct GaussLegendre {
    rsqrt2: &'static PrecisionCache<ReciprocalSquareRoot>,
}

impl GaussLegendre {
    /// Creates the strategy which takes `1/sqrt(2)` from `rsqrt2`.
    pub fn new(rsqrt2: &'static PrecisionCache<ReciprocalSquareRoot>) -> Self {
        GaussLegendre { rsqrt2 }
    }

    fn pi(&self, mc: &MathContext) -> Result<Decimal, Error> {
        let wmc = working_context(mc, 10);
        let wp = wmc.precision() as i64;

        let mut a = ONE.clone();
        let mut b = self.rsqrt2.value_to_precision(&wmc)?;
        let mut t = QUARTER.clone();
        let mut p = ONE.clone();
        let mut iters = 0;

        loop {
            let a1 = a.add(&b).mul(&HALF);
            let b1 = sqrt_with_seed(&a.mul(&b).round(&wmc), Some(&b), &wmc)?;
            let d = a.sub(&a1);

            t = t.sub(&p.mul(&d.mul(&d))).round(&wmc);
            p = p.mul(&TWO);
            a = a1.round(&wmc);
            b = b1;
            iters += 1;

            // the error of the next iteration is of order d².
            if d.is_zero() || 2 * d.exponent() < -wp {
                break;
            }
        }

        trace!("pi: {} iterations with {} digits", iters, wp);

        let s = a.add(&b);
        s.mul(&s).div(&t.mul(&Decimal::from(4u32)), &wmc)
    }
}

impl AlgorithmStrategy for GaussLegendre {
    fn calculate(&self, parameters: &[Decimal], _previous: Option<&Decimal>, mc: &MathContext) -> Result<Decimal, Error> {
        let pi = self.pi(mc)?;

        let ret = match parameters.first() {
            Some(k) => pi.mul(k),
            None => pi,
        };

        Ok(ret.round(mc))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::ops::consts::RSQRT_2;
    use crate::RoundingMode;

    #[test]
    fn test_pi() {
        let c = PrecisionCache::new(vec![Decimal::from(3)], GaussLegendre::new(&RSQRT_2));
        let v = c.value_to_precision(&MathContext::new(20, RoundingMode::ToEven)).unwrap();
        assert_eq!(v.to_string(), "9.4247779607693797154");

        let c = PrecisionCache::new(vec![], GaussLegendre::new(&RSQRT_2));
        let v = c.value_to_precision(&MathContext::new(100, RoundingMode::ToEven)).unwrap();
        assert_eq!(
            v.to_string(),
            "3.141592653589793238462643383279502884197169399375105820974944592307816406286208998628034825342117068"
        );
    }
}
