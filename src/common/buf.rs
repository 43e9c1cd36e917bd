//! Buffer for holding magnitude limbs.

use crate::defs::Word;
use core::ops::Deref;
use core::ops::DerefMut;
use core::ops::Index;
use core::ops::IndexMut;
use core::slice::SliceIndex;
use smallvec::SmallVec;

const STATIC_ALLOCATION: usize = 4;

/// Buffer for holding magnitude limbs. The most significant limb goes first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct WordBuf {
    inner: SmallVec<[Word; STATIC_ALLOCATION]>,
}

impl WordBuf {
    /// Empty buffer.
    #[inline]
    pub fn new() -> Self {
        WordBuf {
            inner: SmallVec::new(),
        }
    }

    /// Buffer of `sz` zero limbs.
    #[inline]
    pub fn zeroed(sz: usize) -> Self {
        WordBuf {
            inner: SmallVec::from_elem(0, sz),
        }
    }

    /// Buffer holding a copy of `s`.
    #[inline]
    pub fn from_slice(s: &[Word]) -> Self {
        WordBuf {
            inner: SmallVec::from_slice(s),
        }
    }

    /// Number of limbs.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the buffer holds no limbs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Removes leading limbs containing zeroes.
    pub fn trunc_leading_zeroes(&mut self) {
        let n = self.inner.iter().take_while(|v| **v == 0).count();
        if n > 0 {
            self.inner.drain(..n);
        }
    }
}

impl FromIterator<Word> for WordBuf {
    fn from_iter<T: IntoIterator<Item = Word>>(iter: T) -> Self {
        WordBuf {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<I: SliceIndex<[Word]>> IndexMut<I> for WordBuf {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        self.inner.index_mut(index)
    }
}

impl<I: SliceIndex<[Word]>> Index<I> for WordBuf {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        self.inner.index(index)
    }
}

impl Deref for WordBuf {
    type Target = [Word];

    #[inline]
    fn deref(&self) -> &[Word] {
        self.inner.deref()
    }
}

impl DerefMut for WordBuf {
    #[inline]
    fn deref_mut(&mut self) -> &mut [Word] {
        self.inner.deref_mut()
    }
}
