//! Irrational values computed to a requested precision.

mod agm;
mod cache;
pub mod consts;
mod exp;
mod gamma;
mod incgamma;
mod ln;
mod rsqrt;
mod sqrt;
mod util;

pub use crate::ops::agm::{agm, ArithmeticGeometricMean};
pub use crate::ops::cache::{AlgorithmStrategy, PrecisionCache};
pub use crate::ops::consts::{pi_multiple, GaussLegendre, GoldenRatio};
pub use crate::ops::exp::exp;
pub use crate::ops::gamma::{gamma, LanczosGamma};
pub use crate::ops::incgamma::{lower_incomplete_gamma, upper_incomplete_gamma, LowerIncompleteGamma, UpperIncompleteGamma};
pub use crate::ops::ln::{ln, Logarithm};
pub use crate::ops::rsqrt::{rsqrt, ReciprocalSquareRoot};
pub use crate::ops::sqrt::{sqrt, SquareRoot};
