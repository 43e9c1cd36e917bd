//! Static constants.

use crate::decimal::Decimal;
use lazy_static::lazy_static;
use num_bigint::BigInt;

lazy_static! {
    pub static ref ONE: Decimal = Decimal::from(1u32);
    pub static ref TWO: Decimal = Decimal::from(2u32);
    pub static ref THREE: Decimal = Decimal::from(3u32);
    pub static ref HALF: Decimal = Decimal::new(BigInt::from(5u32), 1);
    pub static ref QUARTER: Decimal = Decimal::new(BigInt::from(25u32), 2);
}
