//! Shared helpers.

pub mod buf;
pub mod consts;
pub mod util;

/// Implements `Add`, `Sub`, `Mul` for owned values and references by delegating
/// to the inherent methods of the type.
macro_rules! impl_arith_ops {
    ($t:ty, $add:ident, $sub:ident, $mul:ident) => {
        $crate::common::impl_arith_ops!(@op $t, Add, add, $add);
        $crate::common::impl_arith_ops!(@op $t, Sub, sub, $sub);
        $crate::common::impl_arith_ops!(@op $t, Mul, mul, $mul);

        impl core::ops::Neg for $t {
            type Output = $t;
            fn neg(self) -> $t {
                <$t>::negate(&self)
            }
        }

        impl core::ops::Neg for &$t {
            type Output = $t;
            fn neg(self) -> $t {
                <$t>::negate(self)
            }
        }
    };
    (@op $t:ty, $trait:ident, $f:ident, $m:ident) => {
        impl core::ops::$trait<$t> for $t {
            type Output = $t;
            fn $f(self, rhs: $t) -> $t {
                <$t>::$m(&self, &rhs)
            }
        }

        impl core::ops::$trait<&$t> for $t {
            type Output = $t;
            fn $f(self, rhs: &$t) -> $t {
                <$t>::$m(&self, rhs)
            }
        }

        impl core::ops::$trait<$t> for &$t {
            type Output = $t;
            fn $f(self, rhs: $t) -> $t {
                <$t>::$m(self, &rhs)
            }
        }

        impl core::ops::$trait<&$t> for &$t {
            type Output = $t;
            fn $f(self, rhs: &$t) -> $t {
                <$t>::$m(self, rhs)
            }
        }
    };
}

pub(crate) use impl_arith_ops;
