//! Trait bounds shared by the tree's type parameters.
use az::Cast;
use num_traits::{PrimInt, Unsigned, Zero};
use std::fmt::Debug;

/// Content trait.
///
/// Must be implemented by any type that is to be used as the id of a
/// [`Point`](crate::Point) stored in the tree. Ids are opaque to the tree: they are
/// carried along with the co-ordinates and handed back by queries, never inspected.
/// Integer types are the common choice.
pub trait Content: PartialEq + Default + Clone + Copy + Ord + Debug {}
impl<T: PartialEq + Default + Clone + Copy + Ord + Debug> Content for T {}

/// Implemented on u16, u32 and u64 so that they can be used as the arena index type
/// of a [`KdTree`](crate::KdTree).
///
/// Narrower index types make each node smaller, at the cost of a lower limit on the number
/// of points the tree can hold.
pub trait Index: PrimInt + Unsigned + Zero + Cast<usize> {
    /// Sentinel value marking an absent child. Never a valid node index.
    fn max() -> Self;

    /// Returns the maximum number of nodes that a tree using this index type can hold.
    fn capacity() -> usize;
}

macro_rules! impl_index {
    ($($t:ty),+) => {
        $(
            impl Index for $t {
                #[inline]
                fn max() -> $t {
                    <$t>::MAX
                }

                #[inline]
                fn capacity() -> usize {
                    usize::try_from(<$t>::MAX).unwrap_or(usize::MAX)
                }
            }
        )+
    };
}

impl_index!(u16, u32, u64);
