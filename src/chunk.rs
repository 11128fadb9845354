use std::alloc::Layout;

use crate::error::{LayoutError, LayoutResult};

/// A request to pack `count` contiguous elements of `element_size` bytes
/// each, starting at an address that is a multiple of `align`.
///
/// Invariants are checked once at construction, so a `Chunk` in hand is
/// always valid: `count > 0`, `element_size > 0`, `align` a non-zero power
/// of two. The total footprint `count * element_size` may still overflow;
/// that is detected by [`Chunk::byte_size`] and by the planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    count: usize,
    element_size: usize,
    align: usize,
}

impl Chunk {
    pub fn new(count: usize, element_size: usize, align: usize) -> LayoutResult<Self> {
        if count == 0 {
            return Err(LayoutError::ZeroCount);
        }
        if element_size == 0 {
            return Err(LayoutError::ZeroSize);
        }
        if !align.is_power_of_two() {
            return Err(LayoutError::BadAlignment(align));
        }
        Ok(Self {
            count,
            element_size,
            align,
        })
    }

    /// Describes `count` values of type `T`.
    ///
    /// Fails with [`LayoutError::ZeroSize`] for zero-sized types; a ZST
    /// occupies no bytes and has no place in a packed block.
    pub fn of<T>(count: usize) -> LayoutResult<Self> {
        Self::new(count, size_of::<T>(), align_of::<T>())
    }

    /// Describes `count` values with the given [`Layout`].
    pub fn from_layout(layout: Layout, count: usize) -> LayoutResult<Self> {
        Self::new(count, layout.size(), layout.align())
    }

    #[inline]
    pub const fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub const fn element_size(&self) -> usize {
        self.element_size
    }

    #[inline]
    pub const fn align(&self) -> usize {
        self.align
    }

    /// Total footprint in bytes: `count * element_size`, overflow-checked.
    #[inline]
    pub fn byte_size(&self) -> LayoutResult<usize> {
        self.count
            .checked_mul(self.element_size)
            .ok_or(LayoutError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_validates_fields() {
        assert!(Chunk::new(4, 8, 8).is_ok());
        assert_eq!(Chunk::new(0, 8, 8), Err(LayoutError::ZeroCount));
        assert_eq!(Chunk::new(4, 0, 8), Err(LayoutError::ZeroSize));
        assert_eq!(Chunk::new(4, 8, 6), Err(LayoutError::BadAlignment(6)));
        assert_eq!(Chunk::new(4, 8, 0), Err(LayoutError::BadAlignment(0)));
    }

    #[test]
    fn byte_size_is_checked_product() {
        let c = Chunk::new(3, 7, 1).unwrap();
        assert_eq!(c.byte_size(), Ok(21));

        let max = Chunk::new(2, usize::MAX, 1).unwrap();
        assert_eq!(max.byte_size(), Err(LayoutError::Overflow));

        // Exactly at the boundary still fits.
        let edge = Chunk::new(1, usize::MAX, 1).unwrap();
        assert_eq!(edge.byte_size(), Ok(usize::MAX));
    }

    #[test]
    fn of_uses_type_layout() {
        let c = Chunk::of::<u64>(4).unwrap();
        assert_eq!(c.count(), 4);
        assert_eq!(c.element_size(), 8);
        assert_eq!(c.align(), align_of::<u64>());

        assert_eq!(Chunk::of::<()>(1), Err(LayoutError::ZeroSize));
    }

    #[test]
    fn from_layout_matches_layout() {
        let l = Layout::new::<[u32; 3]>();
        let c = Chunk::from_layout(l, 2).unwrap();
        assert_eq!(c.element_size(), 12);
        assert_eq!(c.align(), 4);
        assert_eq!(c.byte_size(), Ok(24));
    }
}
