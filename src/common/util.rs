//! Limb arithmetic with carry and borrow.

use crate::defs::{DoubleWord, Word, WORD_BASE, WORD_BIT_SIZE};

/// Add `a`, `b`, and carry `c`, store the low word in `r`, and return the new carry.
#[inline(always)]
pub fn add_carry(a: Word, b: Word, c: Word, r: &mut Word) -> Word {
    let s = c as DoubleWord + a as DoubleWord + b as DoubleWord;
    if s >= WORD_BASE {
        *r = (s - WORD_BASE) as Word;
        1
    } else {
        *r = s as Word;
        0
    }
}

/// Subtract `b` and borrow `c` from `a`, store the result in `r`, and return the new borrow.
#[inline(always)]
pub fn sub_borrow(a: Word, b: Word, c: Word, r: &mut Word) -> Word {
    let v1 = a as DoubleWord;
    let v2 = b as DoubleWord + c as DoubleWord;

    if v1 < v2 {
        *r = (v1 + WORD_BASE - v2) as Word;
        1
    } else {
        *r = (v1 - v2) as Word;
        0
    }
}

/// Compute `a * b + c + k`, store the low word in `r`, and return the high word.
#[inline(always)]
pub fn mul_add(a: Word, b: Word, c: Word, k: Word, r: &mut Word) -> Word {
    let m = a as DoubleWord * b as DoubleWord + c as DoubleWord + k as DoubleWord;
    *r = m as Word;
    (m >> WORD_BIT_SIZE) as Word
}
