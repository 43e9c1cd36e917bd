//! Definitions.

use core::fmt::Display;

/// A limb of an integer magnitude.
pub type Word = u32;

/// Doubled word.
pub type DoubleWord = u64;

/// Maximum value of a word.
pub const WORD_MAX: Word = Word::MAX;

/// Base of words.
pub const WORD_BASE: DoubleWord = WORD_MAX as DoubleWord + 1;

/// Size of a word in bits.
pub const WORD_BIT_SIZE: usize = core::mem::size_of::<Word>() * 8;

/// Default rounding mode.
pub const DEFAULT_RM: RoundingMode = RoundingMode::ToEven;

/// Default precision in decimal digits.
pub const DEFAULT_P: usize = 34;

/// Sign.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Sign {
    /// Negative.
    Neg = -1,

    /// Positive.
    Pos = 1,
}

impl Sign {
    /// Changes the sign to the opposite.
    pub fn invert(&self) -> Self {
        match *self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }

    /// Returns true if `self` is positive.
    pub fn is_positive(&self) -> bool {
        *self == Sign::Pos
    }

    /// Returns true if `self` is negative.
    pub fn is_negative(&self) -> bool {
        *self == Sign::Neg
    }

    /// Returns 1 for the positive sign and -1 for the negative sign.
    pub fn to_int(&self) -> i8 {
        *self as i8
    }

    /// Sign of a product of numbers with signs `self` and `other`.
    pub fn mul(&self, other: Sign) -> Sign {
        if *self == other {
            Sign::Pos
        } else {
            Sign::Neg
        }
    }
}

/// Possible errors.
#[derive(Debug, Clone, Copy)]
pub enum Error {
    /// Divizor is zero.
    DivisionByZero,

    /// Invalid argument.
    InvalidArgument,

    /// The argument is outside of the domain of the function.
    ArgumentOutOfDomain,

    /// Integer exponentiation with a negative exponent.
    NegativeExponent,

    /// The operation is not defined for the value type.
    Unsupported(&'static str),
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::DivisionByZero => f.write_str("division by zero"),
            Error::InvalidArgument => f.write_str("invalid argument"),
            Error::ArgumentOutOfDomain => f.write_str("argument is out of domain"),
            Error::NegativeExponent => f.write_str("negative exponent"),
            Error::Unsupported(op) => write!(f, "unsupported operation: {op}"),
        }
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Unsupported(l0), Self::Unsupported(r0)) => l0 == r0,
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

impl Eq for Error {}

/// Rounding modes.
///
/// Apart from `None`, every mode decides only the case when the discarded part is exactly
/// one half of the last retained digit; otherwise the result is rounded to the nearest value.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum RoundingMode {
    /// Discard excess digits (truncate toward zero).
    None = 1,

    /// Round half toward positive infinity.
    Up = 2,

    /// Round half toward negative infinity.
    Down = 4,

    /// Round half toward zero.
    ToZero = 8,

    /// Round half away from zero.
    FromZero = 16,

    /// Round half to even.
    ToEven = 32,

    /// Round half to odd.
    ToOdd = 64,
}
