//! Implementations of third-party traits.

#[cfg(feature = "serde")]
mod de;

#[cfg(feature = "serde")]
mod ser;
