use std::ptr::NonNull;

use crate::align::padding_for;

mod sealed {
    use std::ptr::NonNull;

    pub trait Sealed {}
    impl Sealed for *const u8 {}
    impl Sealed for *mut u8 {}
    impl Sealed for NonNull<u8> {}
}

/// A byte address the navigator can step through.
///
/// Implemented for `*const u8`, `*mut u8` and [`NonNull<u8>`], so one generic
/// implementation serves both mutable and immutable views. Address math goes
/// through `addr`/`with_addr`, keeping the original provenance.
pub trait BytePtr: sealed::Sealed + Copy {
    fn addr(self) -> usize;
    fn with_addr(self, addr: usize) -> Self;
}

impl BytePtr for *const u8 {
    #[inline]
    fn addr(self) -> usize {
        self.addr()
    }

    #[inline]
    fn with_addr(self, addr: usize) -> Self {
        self.with_addr(addr)
    }
}

impl BytePtr for *mut u8 {
    #[inline]
    fn addr(self) -> usize {
        self.addr()
    }

    #[inline]
    fn with_addr(self, addr: usize) -> Self {
        self.with_addr(addr)
    }
}

impl BytePtr for NonNull<u8> {
    #[inline]
    fn addr(self) -> usize {
        self.as_ptr().addr()
    }

    #[inline]
    fn with_addr(self, addr: usize) -> Self {
        assert!(addr != 0, "address arithmetic produced a null pointer");
        // SAFETY: just checked addr is non-zero.
        unsafe { NonNull::new_unchecked(self.as_ptr().with_addr(addr)) }
    }
}

/// Address of the object following the one at `ptr`.
///
/// Advances past `curr_size` bytes, then rounds up to `next_align`. No bounds
/// checking is performed; staying inside the backing block is the caller's
/// contract. With `next_align == 1` the result is exactly `ptr + curr_size`.
///
/// # Panics
///
/// Panics if `ptr` is null or `next_align` is not a power of two.
#[inline]
pub fn next<P: BytePtr>(ptr: P, curr_size: usize, next_align: usize) -> P {
    assert!(ptr.addr() != 0, "null pointer passed to next");
    assert!(
        next_align.is_power_of_two(),
        "next_align must be a non-zero power of two"
    );
    let stepped = ptr.addr().wrapping_add(curr_size);
    ptr.with_addr(stepped.wrapping_add(padding_for(stepped, next_align)))
}

/// Address of the object preceding the one at `ptr`.
///
/// Steps back `prev_size` bytes, then rounds down to `prev_align`. Not a
/// general inverse of [`next`]: rounding down cannot tell padding inserted by
/// `next` apart from object content, so the pair is only exact for the
/// size/alignment pairing a layout was actually built with.
///
/// # Panics
///
/// Panics if `ptr` is null or `prev_align` is not a power of two.
#[inline]
pub fn prev<P: BytePtr>(ptr: P, prev_size: usize, prev_align: usize) -> P {
    assert!(ptr.addr() != 0, "null pointer passed to prev");
    assert!(
        prev_align.is_power_of_two(),
        "prev_align must be a non-zero power of two"
    );
    let stepped = ptr.addr().wrapping_sub(prev_size);
    ptr.with_addr(stepped & !(prev_align - 1))
}
