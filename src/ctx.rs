//! Precision and rounding parameters of decimal operations.

use crate::defs::DEFAULT_P;
use crate::defs::DEFAULT_RM;
use crate::RoundingMode;

/// Math context holds the number of significant decimal digits and the rounding mode
/// applied to the result of an inexact operation.
///
/// Precision 0 stands for unlimited precision: rounding to it leaves a value unchanged,
/// and operations that can not produce an exact result reject it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MathContext {
    p: usize,
    rm: RoundingMode,
}

impl MathContext {
    /// Create a new context with precision `p` and rounding mode `rm`.
    pub const fn new(p: usize, rm: RoundingMode) -> Self {
        MathContext { p, rm }
    }

    /// Create a new context with precision `p` and the default rounding mode.
    pub const fn with_precision(p: usize) -> Self {
        MathContext { p, rm: DEFAULT_RM }
    }

    /// Context with unlimited precision.
    pub const fn unlimited() -> Self {
        MathContext {
            p: 0,
            rm: RoundingMode::None,
        }
    }

    /// Returns the precision of the context.
    #[inline]
    pub fn precision(&self) -> usize {
        self.p
    }

    /// Returns the rounding mode of the context.
    #[inline]
    pub fn rounding_mode(&self) -> RoundingMode {
        self.rm
    }

    /// Returns true if the precision is unlimited.
    #[inline]
    pub fn is_unlimited(&self) -> bool {
        self.p == 0
    }

    /// Returns a context with the same rounding mode and the precision increased by `n` digits.
    pub fn extended(&self, n: usize) -> Self {
        MathContext {
            p: self.p + n,
            rm: self.rm,
        }
    }

    /// Returns a context with the same precision which truncates excess digits.
    pub fn truncating(&self) -> Self {
        MathContext {
            p: self.p,
            rm: RoundingMode::None,
        }
    }
}

impl Default for MathContext {
    fn default() -> Self {
        MathContext::new(DEFAULT_P, DEFAULT_RM)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_context() {
        let mc = MathContext::default();
        assert_eq!(mc.precision(), DEFAULT_P);
        assert_eq!(mc.rounding_mode(), DEFAULT_RM);

        let mc = MathContext::new(10, RoundingMode::FromZero);
        let ext = mc.extended(5);
        assert_eq!(ext.precision(), 15);
        assert_eq!(ext.rounding_mode(), RoundingMode::FromZero);

        let tr = ext.truncating();
        assert_eq!(tr.precision(), 15);
        assert_eq!(tr.rounding_mode(), RoundingMode::None);

        assert!(MathContext::unlimited().is_unlimited());
        assert!(!MathContext::with_precision(1).is_unlimited());
    }
}
