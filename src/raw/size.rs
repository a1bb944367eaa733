use super::handle::Handle;

/// Number of nodes in a subtree.
///
/// A subtree can never hold more nodes than the arena has handles, so the count
/// is kept as narrow as a handle.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
#[repr(transparent)]
pub(crate) struct Size(u32);

impl Size {
    pub(crate) const MAX: usize = Handle::MAX;
    pub(crate) const ZERO: Self = Self(0);
    pub(crate) const ONE: Self = Self(1);

    #[inline]
    pub(crate) const fn from_usize(size: usize) -> Self {
        assert!(size <= Self::MAX, "`Size::from_usize()` - `size` > `Size::MAX`!");
        #[allow(clippy::cast_possible_truncation)]
        Self(size as u32)
    }

    #[inline]
    pub(crate) const fn to_usize(self) -> usize {
        self.0 as usize
    }

    /// Size of a node whose children have the given sizes.
    #[inline]
    pub(crate) const fn of_parent(left: Self, right: Self) -> Self {
        Self::from_usize(1 + left.to_usize() + right.to_usize())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    #[should_panic(expected = "`Size::from_usize()` - `size` > `Size::MAX`!")]
    fn invalid_size() {
        let _ = Size::from_usize(Size::MAX + 1);
    }

    #[test]
    fn leaf_has_size_one() {
        assert_eq!(Size::of_parent(Size::ZERO, Size::ZERO), Size::ONE);
    }

    proptest! {
        #[test]
        fn parent_size_counts_both_children(left in 0..Size::MAX / 2, right in 0..Size::MAX / 2) {
            let size = Size::of_parent(Size::from_usize(left), Size::from_usize(right));
            prop_assert_eq!(size.to_usize(), left + right + 1);
        }
    }
}
