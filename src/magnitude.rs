//! Sign-less arithmetic on integer magnitudes.
//!
//! A magnitude is a sequence of 32-bit limbs, the most significant limb first,
//! without leading zero limbs. The empty sequence is zero.

use crate::common::buf::WordBuf;
use crate::common::util::{add_carry, mul_add, sub_borrow};
use crate::defs::{Sign, Word, WORD_BIT_SIZE};
use core::cmp::Ordering;
use itertools::izip;

const WORD_BYTES: usize = WORD_BIT_SIZE / 8;

/// Compares two magnitudes. A shorter magnitude is lesser;
/// magnitudes of equal length are compared limb by limb starting from the most significant one.
pub fn compare(a: &[Word], b: &[Word]) -> Ordering {
    match a.len().cmp(&b.len()) {
        Ordering::Equal => {
            for (x, y) in a.iter().zip(b.iter()) {
                if x != y {
                    return x.cmp(y);
                }
            }
            Ordering::Equal
        }
        ord => ord,
    }
}

/// Sum of two magnitudes.
pub fn add(a: &[Word], b: &[Word]) -> WordBuf {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut ret = WordBuf::zeroed(long.len() + 1);
    let mut c = 0;

    let mut iter1 = long.iter().rev();
    let mut dst = ret.iter_mut().rev();

    for (b, a, x) in izip!(short.iter().rev(), iter1.by_ref(), dst.by_ref()) {
        c = add_carry(*a, *b, c, x);
    }

    for (a, x) in iter1.zip(dst.by_ref()) {
        c = add_carry(*a, 0, c, x);
    }

    if let Some(x) = dst.next() {
        *x = c;
    }

    ret.trunc_leading_zeroes();
    ret
}

/// Difference of two magnitudes, or `None` if `a` is less than `b`.
pub fn subtract(a: &[Word], b: &[Word]) -> Option<WordBuf> {
    if compare(a, b) == Ordering::Less {
        None
    } else {
        Some(subtract_ordered(a, b))
    }
}

// Difference of `a` and `b` where `a` is known to be not less than `b`.
pub(crate) fn subtract_ordered(a: &[Word], b: &[Word]) -> WordBuf {
    debug_assert!(compare(a, b) != Ordering::Less);

    let mut ret = WordBuf::zeroed(a.len());
    let mut c = 0;

    let mut iter1 = a.iter().rev();
    let mut dst = ret.iter_mut().rev();

    for (b, a, x) in izip!(b.iter().rev(), iter1.by_ref(), dst.by_ref()) {
        c = sub_borrow(*a, *b, c, x);
    }

    for (a, x) in iter1.zip(dst) {
        c = sub_borrow(*a, 0, c, x);
    }

    debug_assert!(c == 0);

    ret.trunc_leading_zeroes();
    ret
}

/// Product of two magnitudes.
pub fn multiply(a: &[Word], b: &[Word]) -> WordBuf {
    if a.is_empty() || b.is_empty() {
        return WordBuf::new();
    }

    let n = a.len() + b.len();
    let mut ret = WordBuf::zeroed(n);

    for (i, d1mi) in a.iter().rev().enumerate() {
        if *d1mi == 0 {
            continue;
        }

        let mut k = 0;
        for (m2j, m3ij) in b.iter().rev().zip(ret[..n - i].iter_mut().rev()) {
            k = mul_add(*d1mi, *m2j, *m3ij, k, m3ij);
        }

        ret[n - i - b.len() - 1] = k;
    }

    ret.trunc_leading_zeroes();
    ret
}

/// Magnitude of an unsigned integer.
pub fn from_u64(v: u64) -> WordBuf {
    let mut ret = WordBuf::from_slice(&[(v >> WORD_BIT_SIZE) as Word, v as Word]);
    ret.trunc_leading_zeroes();
    ret
}

/// Converts the magnitude to u64 if it fits.
pub fn to_u64(m: &[Word]) -> Option<u64> {
    if m.len() > 2 {
        return None;
    }
    Some(m.iter().fold(0u64, |acc, w| (acc << WORD_BIT_SIZE) | *w as u64))
}

/// Converts a big-endian two's-complement byte sequence into sign and magnitude.
///
/// Prereq: `bytes` is not empty.
pub fn from_twos_complement(bytes: &[u8]) -> (Sign, WordBuf) {
    debug_assert!(!bytes.is_empty());

    let negative = bytes[0] & 0x80 != 0;

    let mut m: WordBuf = if negative {
        let mut inv: Vec<u8> = bytes.iter().map(|b| !b).collect();
        for b in inv.iter_mut().rev() {
            let (s, o) = b.overflowing_add(1);
            *b = s;
            if !o {
                break;
            }
        }
        pack_bytes(&inv)
    } else {
        pack_bytes(bytes)
    };

    m.trunc_leading_zeroes();

    let sign = if negative && !m.is_empty() {
        Sign::Neg
    } else {
        Sign::Pos
    };

    (sign, m)
}

/// Converts sign and magnitude into the minimal big-endian two's-complement byte sequence.
pub fn to_twos_complement(sign: Sign, m: &[Word]) -> Vec<u8> {
    let mut bytes: Vec<u8> = m
        .iter()
        .flat_map(|w| w.to_be_bytes())
        .skip_while(|b| *b == 0)
        .collect();

    if bytes.is_empty() {
        return vec![0];
    }

    if sign.is_positive() {
        if bytes[0] & 0x80 != 0 {
            bytes.insert(0, 0);
        }
        return bytes;
    }

    // -2^(8n-1) is the smallest value representable with n bytes.
    let fits = bytes[0] < 0x80 || (bytes[0] == 0x80 && bytes[1..].iter().all(|b| *b == 0));
    if !fits {
        bytes.insert(0, 0);
    }

    for b in bytes.iter_mut() {
        *b = !*b;
    }

    for b in bytes.iter_mut().rev() {
        let (s, o) = b.overflowing_add(1);
        *b = s;
        if !o {
            break;
        }
    }

    bytes
}

// Pack big-endian bytes into limbs, the most significant limb first.
fn pack_bytes(bytes: &[u8]) -> WordBuf {
    let mut ret: WordBuf = bytes
        .rchunks(WORD_BYTES)
        .map(|chunk| chunk.iter().fold(0, |acc: Word, b| (acc << 8) | *b as Word))
        .collect();
    ret.reverse();
    ret
}
