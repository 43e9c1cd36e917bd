//! Shared precision caches of frequently used constants.
//!
//! Each constant is initialized on first use and is shared by the whole process,
//! so its value is computed only when a higher precision is requested than ever before.

mod phi;
mod pi;

pub use crate::ops::consts::phi::GoldenRatio;
pub use crate::ops::consts::pi::GaussLegendre;

use crate::decimal::Decimal;
use crate::defs::Error;
use crate::ops::cache::PrecisionCache;
use crate::ops::ln::Logarithm;
use crate::ops::rsqrt::ReciprocalSquareRoot;
use crate::ops::sqrt::SquareRoot;
use lazy_static::lazy_static;

lazy_static! {
    /// 1/sqrt(2).
    pub static ref RSQRT_2: PrecisionCache<ReciprocalSquareRoot> =
        PrecisionCache::new(vec![Decimal::from(2u32)], ReciprocalSquareRoot);

    /// sqrt(5).
    pub static ref SQRT_5: PrecisionCache<SquareRoot> = PrecisionCache::new(vec![Decimal::from(5u32)], SquareRoot);

    /// π.
    pub static ref PI: PrecisionCache<GaussLegendre> =
        PrecisionCache::new(vec![Decimal::one()], GaussLegendre::new(&RSQRT_2));

    /// 2π.
    pub static ref TWO_PI: PrecisionCache<GaussLegendre> =
        PrecisionCache::new(vec![Decimal::from(2u32)], GaussLegendre::new(&RSQRT_2));

    /// Natural logarithm of 2.
    pub static ref LN_2: PrecisionCache<Logarithm> = PrecisionCache::new(vec![Decimal::from(2u32)], Logarithm);

    /// Natural logarithm of 10.
    pub static ref LN_10: PrecisionCache<Logarithm> = PrecisionCache::new(vec![Decimal::from(10u32)], Logarithm);

    /// Golden ratio.
    pub static ref PHI: PrecisionCache<GoldenRatio> = PrecisionCache::new(vec![], GoldenRatio::new(&SQRT_5));
}

/// Returns `k*π` as a precision cache.
///
/// ## Errors
///
///  - InvalidArgument: `k` is zero.
pub fn pi_multiple(k: Decimal) -> Result<PrecisionCache<GaussLegendre>, Error> {
    if k.is_zero() {
        return Err(Error::InvalidArgument);
    }

    Ok(PrecisionCache::new(vec![k], GaussLegendre::new(&RSQRT_2)))
}
