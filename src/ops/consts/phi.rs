//! Golden ratio.

use crate::common::consts::HALF;
use crate::common::consts::ONE;
use crate::ctx::MathContext;
use crate::decimal::Decimal;
use crate::defs::Error;
use crate::ops::cache::AlgorithmStrategy;
use crate::ops::cache::PrecisionCache;
use crate::ops::sqrt::SquareRoot;
use crate::ops::util::working_context;

/// Golden ratio `(1 + sqrt(5)) / 2` with `sqrt(5)` taken from a shared cache.
///
/// The value is derived from the closed form rather than from an AGM iteration:
/// both give the same digits, and the closed form costs a single square root.
pub struct GoldenRatio {
    sqrt5: &'static PrecisionCache<SquareRoot>,
}

impl GoldenRatio {
    /// Creates the strategy which takes `sqrt(5)` from `sqrt5`.
    pub fn new(sqrt5: &'static PrecisionCache<SquareRoot>) -> Self {
        GoldenRatio { sqrt5 }
    }
}

impl AlgorithmStrategy for GoldenRatio {
    fn calculate(&self, _parameters: &[Decimal], _previous: Option<&Decimal>, mc: &MathContext) -> Result<Decimal, Error> {
        let s = self.sqrt5.value_to_precision(&working_context(mc, 2))?;
        Ok(ONE.add(&s).mul(&HALF).round(mc))
    }
}
