//! Precision-escalating cache of an irrational value.

use crate::ctx::MathContext;
use crate::decimal::Decimal;
use crate::defs::Error;
use crate::RoundingMode;
use core::sync::atomic::Ordering;
use crossbeam::epoch::{self, Atomic, Owned};
use log::{debug, trace};

/// Numeric method which computes a value with the requested precision.
pub trait AlgorithmStrategy: Send + Sync {
    /// Computes the value for `parameters` with the precision and the rounding mode of `mc`.
    /// `previous` is the most precise value computed so far, if there is one, and may seed an iteration.
    fn calculate(&self, parameters: &[Decimal], previous: Option<&Decimal>, mc: &MathContext) -> Result<Decimal, Error>;

    /// Returns true if `value` returned by `calculate` for `parameters` is the exact result.
    ///
    /// An exact value is rounded to the requested precision as it is. Any other value is treated
    /// as truncated: it is rounded as if the digits beyond the computed ones were not all zero.
    fn is_exact(&self, _parameters: &[Decimal], _value: &Decimal) -> bool {
        false
    }
}

struct Cached {
    value: Decimal,
    precision: usize,
    exact: bool,
}

impl Cached {
    fn rounded(&self, mc: &MathContext) -> Decimal {
        if self.exact {
            self.value.round(mc)
        } else {
            self.value.round_inexact(mc)
        }
    }
}

/// Holds the most precise value computed so far for fixed parameters and computes a more precise
/// value with the strategy only when it is requested.
///
/// The cached precision never decreases, even if several threads request the value concurrently.
/// Updates do not take locks: a newly computed value is installed with compare-and-swap,
/// and a computed value is discarded if another thread has already installed a value with at least the same precision.
pub struct PrecisionCache<S> {
    parameters: Vec<Decimal>,
    strategy: S,
    cached: Atomic<Cached>,
}

impl<S: AlgorithmStrategy> PrecisionCache<S> {
    /// Creates an empty cache for the given parameters and strategy.
    pub fn new(parameters: Vec<Decimal>, strategy: S) -> Self {
        PrecisionCache {
            parameters,
            strategy,
            cached: Atomic::null(),
        }
    }

    /// Returns the fixed parameters of the value.
    pub fn parameters(&self) -> &[Decimal] {
        &self.parameters
    }

    /// Returns the strategy.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Returns the precision of the cached value, or 0 if nothing has been computed yet.
    pub fn cached_precision(&self) -> usize {
        let guard = epoch::pin();
        let current = self.cached.load(Ordering::Acquire, &guard);

        // SAFETY: the pointee is destroyed only after all guards pinned before its replacement are dropped.
        unsafe { current.as_ref() }.map_or(0, |c| c.precision)
    }

    /// Returns the value rounded to the precision of `mc` using its rounding mode.
    /// The strategy is called only if the cached value is less precise than requested.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: precision of `mc` is unlimited.
    ///  - Any error returned by the strategy.
    pub fn value_to_precision(&self, mc: &MathContext) -> Result<Decimal, Error> {
        if mc.is_unlimited() {
            return Err(Error::InvalidArgument);
        }

        let p = mc.precision();

        let previous = {
            let guard = epoch::pin();
            let current = self.cached.load(Ordering::Acquire, &guard);

            // SAFETY: see `cached_precision`.
            match unsafe { current.as_ref() } {
                Some(c) if c.precision >= p => {
                    trace!("cache hit: requested {} digits, cached {} digits", p, c.precision);
                    return Ok(c.rounded(mc));
                }
                Some(c) => Some((c.value.clone(), c.precision)),
                None => None,
            }
        };

        // one extra digit truncated allows correct rounding to p digits afterwards.
        let wp = p + 1;
        debug!(
            "computing value: requested {} digits, working precision {} digits, cached {} digits",
            p,
            wp,
            previous.as_ref().map_or(0, |(_, cp)| *cp)
        );

        // no guard is pinned while the strategy runs.
        let value = self.strategy.calculate(
            &self.parameters,
            previous.as_ref().map(|(v, _)| v),
            &MathContext::new(wp, RoundingMode::None),
        )?;
        let exact = self.strategy.is_exact(&self.parameters, &value);

        let mut new = Owned::new(Cached {
            value,
            precision: wp,
            exact,
        });

        let guard = epoch::pin();
        let mut current = self.cached.load(Ordering::Acquire, &guard);

        loop {
            // SAFETY: see `cached_precision`.
            if let Some(c) = unsafe { current.as_ref() } {
                if c.precision >= wp {
                    debug!(
                        "concurrently computed value with {} digits is kept, {} digits discarded",
                        c.precision, wp
                    );
                    return Ok(c.rounded(mc));
                }
            }

            match self
                .cached
                .compare_exchange(current, new, Ordering::AcqRel, Ordering::Acquire, &guard)
            {
                Ok(installed) => {
                    if !current.is_null() {
                        // SAFETY: `current` is unlinked and is destroyed when no pinned thread can read it.
                        unsafe { guard.defer_destroy(current) };
                    }

                    // SAFETY: `installed` is not null and is protected by `guard`.
                    let c = unsafe { installed.deref() };
                    return Ok(c.rounded(mc));
                }
                Err(e) => {
                    current = e.current;
                    new = e.new;
                }
            }
        }
    }
}

impl<S> Drop for PrecisionCache<S> {
    fn drop(&mut self) {
        // SAFETY: `&mut self` guarantees no other thread accesses the cache.
        unsafe {
            let guard = epoch::unprotected();
            let current = self.cached.load(Ordering::Relaxed, guard);
            if !current.is_null() {
                drop(current.into_owned());
            }
        }
    }
}
