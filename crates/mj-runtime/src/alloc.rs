//! Allocation gateway behind `calloc_impl`.
//!
//! Generated code passes `num` and `size` as full machine words but only
//! guarantees the low 32 bits of each. Both are masked before use, so a
//! dirty upper half shrinks the request to what the program meant instead
//! of overflowing into a huge or failing one. Callers may rely on this
//! wraparound; it must not be widened.

use std::ffi::c_void;

use crate::variant::AllocVariant;

const ARG_MASK: u64 = 0xFFFF_FFFF;

/// A zero-initializing allocator the gateway forwards to.
///
/// Implementations are chosen at compile time through [`Selected`]; there is
/// no runtime dispatch.
pub trait ZeroedAlloc {
    const VARIANT: AllocVariant;

    /// Returns `num * size` zeroed bytes, or null if the backing allocator
    /// refuses. `num` and `size` are already masked.
    fn alloc_zeroed(num: usize, size: usize) -> *mut c_void;
}

/// Platform heap. Nothing allocated here is ever freed by the runtime.
#[derive(Clone, Copy, Debug, Default)]
pub struct Manual;

impl ZeroedAlloc for Manual {
    const VARIANT: AllocVariant = AllocVariant::Manual;

    fn alloc_zeroed(num: usize, size: usize) -> *mut c_void {
        unsafe { libc::calloc(num, size) }
    }
}

#[cfg(mj_gc)]
extern "C" {
    fn GC_malloc(size_in_bytes: usize) -> *mut c_void;
}

/// Boehm conservative collector. `GC_malloc` returns cleared memory and the
/// collector finds roots on its own.
#[cfg(mj_gc)]
#[derive(Clone, Copy, Debug, Default)]
pub struct Collected;

#[cfg(mj_gc)]
impl ZeroedAlloc for Collected {
    const VARIANT: AllocVariant = AllocVariant::Collected;

    fn alloc_zeroed(num: usize, size: usize) -> *mut c_void {
        // The gateway has already checked that the product fits in usize.
        unsafe { GC_malloc(num * size) }
    }
}

#[cfg(mj_gc)]
pub type Selected = Collected;

#[cfg(not(mj_gc))]
pub type Selected = Manual;

/// Keeps only the low 32 bits of an allocation argument.
pub fn mask_arg(x: usize) -> u64 {
    x as u64 & ARG_MASK
}

/// Byte count the gateway requests for `(num, size)`.
///
/// Two masked 32-bit values always multiply without overflowing `u64`.
pub fn requested_bytes(num: usize, size: usize) -> u64 {
    mask_arg(num) * mask_arg(size)
}

/// Allocates `num * size` zeroed bytes through `A` after masking both
/// arguments to 32 bits.
///
/// Failure is whatever `A` does. A request that does not fit in `usize`
/// (32-bit targets only) returns null, like an overflowing `calloc`.
pub fn allocate<A: ZeroedAlloc>(num: usize, size: usize) -> *mut c_void {
    if usize::try_from(requested_bytes(num, size)).is_err() {
        return std::ptr::null_mut();
    }
    A::alloc_zeroed(mask_arg(num) as usize, mask_arg(size) as usize)
}
