use crate::error::{LayoutError, LayoutResult};

/// Bytes needed to round `pos` up to the next multiple of `align`.
///
/// Valid only for power-of-two `align`; depends solely on the low bits of
/// `pos`, so the result is invariant under translation of `pos` by any
/// multiple of `align`.
#[inline(always)]
pub(crate) const fn padding_for(pos: usize, align: usize) -> usize {
    !pos.wrapping_sub(1) & (align - 1)
}

/// Rounds `size` up to the smallest multiple of `align` that is `>= size`.
///
/// `align` must be a non-zero power of two. Idempotent:
/// `aligned(aligned(x, a)?, a) == aligned(x, a)`.
///
/// # Examples
///
/// ```rust
/// use bytelayout::aligned;
///
/// assert_eq!(aligned(13, 8), Ok(16));
/// assert_eq!(aligned(16, 8), Ok(16));
/// assert!(aligned(3, 6).is_err());
/// ```
#[inline]
pub fn aligned(size: usize, align: usize) -> LayoutResult<usize> {
    if !align.is_power_of_two() {
        return Err(LayoutError::BadAlignment(align));
    }
    size.checked_add(padding_for(size, align))
        .ok_or(LayoutError::Overflow)
}

/// Rounds `value` down to the largest multiple of `align` that is `<= value`.
///
/// `align` must be a non-zero power of two. Cannot overflow.
#[inline]
pub fn align_down(value: usize, align: usize) -> LayoutResult<usize> {
    if !align.is_power_of_two() {
        return Err(LayoutError::BadAlignment(align));
    }
    Ok(value & !(align - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligned_rounds_up_to_multiple() {
        for align in [1usize, 2, 4, 8, 16, 64, 4096] {
            for size in 0..200 {
                let up = aligned(size, align).unwrap();
                assert!(up >= size);
                assert_eq!(up % align, 0);
                assert!(up - size < align);
            }
        }
    }

    #[test]
    fn aligned_is_idempotent() {
        for align in [1usize, 2, 8, 32, 1 << 20] {
            for size in [0usize, 1, 7, 63, 4097, usize::MAX >> 1] {
                let once = aligned(size, align).unwrap();
                assert_eq!(aligned(once, align), Ok(once));
            }
        }
    }

    #[test]
    fn aligned_detects_overflow() {
        assert_eq!(aligned(usize::MAX, 2), Err(LayoutError::Overflow));
        assert_eq!(aligned(usize::MAX - 2, 8), Err(LayoutError::Overflow));
        // Already a multiple, no pad, no overflow.
        assert_eq!(aligned(usize::MAX - 7, 8), Ok(usize::MAX - 7));
    }

    #[test]
    fn aligned_rejects_bad_alignment() {
        assert_eq!(aligned(10, 0), Err(LayoutError::BadAlignment(0)));
        assert_eq!(aligned(10, 6), Err(LayoutError::BadAlignment(6)));
        assert_eq!(aligned(10, 12), Err(LayoutError::BadAlignment(12)));
    }

    #[test]
    fn align_down_masks_low_bits() {
        assert_eq!(align_down(13, 8), Ok(8));
        assert_eq!(align_down(16, 8), Ok(16));
        assert_eq!(align_down(7, 8), Ok(0));
        assert_eq!(align_down(usize::MAX, 16), Ok(usize::MAX & !15));
        assert_eq!(align_down(13, 6), Err(LayoutError::BadAlignment(6)));
    }
}
