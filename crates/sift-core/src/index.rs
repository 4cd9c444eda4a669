//! Integer widths for stored wavefront positions
//!
//! The width bounds the combined length of the two inputs and sets the size
//! of every stored reach, so it is a type parameter callers choose rather
//! than an internal detail.

use crate::comparator::CompareError;
use std::fmt::Debug;

/// An unsigned integer type wide enough to hold `m + n` for the inputs it
/// is used with.
pub trait IndexWidth: Copy + Ord + Debug + Default + Send + Sync + 'static {
    /// Type name reported in overflow errors
    const NAME: &'static str;

    /// Largest position representable in this width
    fn max_position() -> usize;

    /// Convert a position that has already been checked against
    /// [`max_position`](Self::max_position).
    fn narrow(position: usize) -> Self;

    fn widen(self) -> usize;

    /// Bytes taken by one stored position
    fn bytes() -> usize {
        std::mem::size_of::<Self>()
    }
}

macro_rules! impl_index_width {
    ($($ty:ty),*) => {
        $(
            impl IndexWidth for $ty {
                const NAME: &'static str = stringify!($ty);

                fn max_position() -> usize {
                    usize::try_from(<$ty>::MAX).unwrap_or(usize::MAX)
                }

                fn narrow(position: usize) -> Self {
                    debug_assert!(position <= Self::max_position());
                    position as $ty
                }

                fn widen(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_index_width!(u16, u32, u64, usize);

/// Fail fast when `old_len + new_len` cannot be represented by `I`, or by
/// the signed diagonal arithmetic.
pub fn check_capacity<I: IndexWidth>(old_len: usize, new_len: usize) -> Result<usize, CompareError> {
    let overflow = || CompareError::IndexOverflow {
        old_len,
        new_len,
        width: I::NAME,
    };

    let combined = old_len.checked_add(new_len).ok_or_else(overflow)?;
    if combined > I::max_position() || isize::try_from(combined).is_err() {
        return Err(overflow());
    }
    Ok(combined)
}
