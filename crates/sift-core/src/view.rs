//! Read-only views over the sequences being compared

/// Random-access, length-bounded access to a sequence of symbols.
///
/// Symbols are only ever compared for equality; no ordering or hashing is
/// required of the alphabet.
pub trait SequenceView {
    type Symbol: PartialEq;

    /// Number of symbols in the sequence
    fn len(&self) -> usize;

    /// Symbol at `index`, which must be below [`len`](Self::len)
    fn symbol(&self, index: usize) -> &Self::Symbol;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: PartialEq> SequenceView for [T] {
    type Symbol = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn symbol(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T: PartialEq> SequenceView for Vec<T> {
    type Symbol = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn symbol(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T: PartialEq, const N: usize> SequenceView for [T; N] {
    type Symbol = T;

    fn len(&self) -> usize {
        N
    }

    fn symbol(&self, index: usize) -> &T {
        &self[index]
    }
}

/// Strings are viewed byte by byte. Use [`crate::text::chars`] for a
/// Unicode-aware view.
impl SequenceView for str {
    type Symbol = u8;

    fn len(&self) -> usize {
        str::len(self)
    }

    fn symbol(&self, index: usize) -> &u8 {
        &self.as_bytes()[index]
    }
}
