//! Exact arbitrary precision numbers and irrational values computed to any requested precision.
//!
//! The library provides:
//!
//! - [`ArbitraryInteger`]: signed integer of unbounded magnitude.
//! - [`ArbitraryRational`]: exact fraction of two integers.
//! - [`ArbitraryComplex`]: complex number with rational components.
//! - [`Decimal`]: arbitrary precision decimal floating point number rounded according to a [`MathContext`].
//! - [`PrecisionCache`]: value of an irrational function which is computed lazily to the precision
//!   requested by the caller, and recomputed only when a higher precision is requested.
//!
//! ## Examples
//!
//! ``` rust
//! use arbitrary_num::{ArbitraryInteger, ArbitraryRational, MathContext, RoundingMode};
//! use arbitrary_num::ops::consts::PI;
//! use arbitrary_num::ops::sqrt;
//!
//! // exact arithmetic
//! let q = ArbitraryRational::new(ArbitraryInteger::from(1), ArbitraryInteger::from(3)).unwrap();
//! assert_eq!(q.add(&q).add(&q), ArbitraryRational::one());
//!
//! // irrational values
//! let mc = MathContext::new(20, RoundingMode::ToEven);
//! assert_eq!(PI.value_to_precision(&mc).unwrap().to_string(), "3.1415926535897932385");
//!
//! let sqrt2 = sqrt(2.into()).unwrap();
//! let mc = MathContext::new(10, RoundingMode::ToEven);
//! assert_eq!(sqrt2.value_to_precision(&mc).unwrap().to_string(), "1.414213562");
//! ```
//!
//! Precision caches are safe to share between threads. A value computed by one thread
//! is reused by all threads requesting the same or lower precision.

#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::new_without_default)]

mod common;
pub mod complex;
pub mod ctx;
pub mod decimal;
mod defs;
pub mod integer;
pub mod magnitude;
pub mod ops;
pub mod rational;

mod for_3rd;

pub use crate::common::buf::WordBuf;
pub use crate::complex::ArbitraryComplex;
pub use crate::ctx::MathContext;
pub use crate::decimal::Decimal;
pub use crate::defs::Error;
pub use crate::defs::RoundingMode;
pub use crate::defs::Sign;
pub use crate::defs::Word;
pub use crate::defs::DEFAULT_P;
pub use crate::defs::DEFAULT_RM;
pub use crate::defs::WORD_BASE;
pub use crate::defs::WORD_BIT_SIZE;
pub use crate::defs::WORD_MAX;
pub use crate::integer::ArbitraryInteger;
pub use crate::ops::AlgorithmStrategy;
pub use crate::ops::PrecisionCache;
pub use crate::rational::ArbitraryRational;
