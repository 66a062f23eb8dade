use std::cell::Cell;
use std::ffi::c_void;

use mj_runtime::alloc::{allocate, requested_bytes, Manual, Selected, ZeroedAlloc};
use mj_runtime::{AllocVariant, ALLOC_VARIANT};
use proptest::prelude::*;

thread_local! {
    static LAST_REQUEST: Cell<Option<(usize, usize)>> = const { Cell::new(None) };
}

/// Records what the gateway forwards instead of allocating.
struct Recording;

impl ZeroedAlloc for Recording {
    const VARIANT: AllocVariant = AllocVariant::Manual;

    fn alloc_zeroed(num: usize, size: usize) -> *mut c_void {
        LAST_REQUEST.with(|r| r.set(Some((num, size))));
        std::ptr::null_mut()
    }
}

fn forwarded(num: usize, size: usize) -> (usize, usize) {
    LAST_REQUEST.with(|r| r.set(None));
    let _ = allocate::<Recording>(num, size);
    LAST_REQUEST
        .with(|r| r.get())
        .expect("gateway did not call the strategy")
}

fn assert_zeroed_region(p: *mut c_void, len: usize) {
    assert!(!p.is_null(), "allocation of {len} bytes failed");
    let bytes = unsafe { std::slice::from_raw_parts(p as *const u8, len) };
    assert!(bytes.iter().all(|&b| b == 0));
}

#[test]
fn manual_allocations_are_zero_filled() {
    for (num, size) in [(1usize, 1usize), (3, 8), (100, 4), (4096, 16)] {
        let p = allocate::<Manual>(num, size);
        assert_zeroed_region(p, num * size);
        unsafe { libc::free(p) };
    }
}

#[test]
fn selected_allocations_are_zero_filled() {
    let p = allocate::<Selected>(10, 12);
    assert_zeroed_region(p, 120);
    if ALLOC_VARIANT == AllocVariant::Manual {
        unsafe { libc::free(p) };
    }
}

#[test]
#[cfg(target_pointer_width = "64")]
fn dirty_upper_halves_are_discarded() {
    let num = 0xCAFE_BABE_0000_0005usize;
    let size = 0x0000_0001_0000_0004usize;
    assert_eq!(forwarded(num, size), (5, 4));

    let p = allocate::<Manual>(num, size);
    assert_zeroed_region(p, 20);
    unsafe { libc::free(p) };
}

#[test]
#[cfg(target_pointer_width = "64")]
fn upper_half_only_requests_are_empty() {
    assert_eq!(requested_bytes(0x1_0000_0000, 8), 0);
    assert_eq!(forwarded(0x1_0000_0000, 8), (0, 8));
}

#[cfg(target_pointer_width = "64")]
proptest! {
    #[test]
    fn forwarded_args_are_congruence_invariant(
        num in any::<u32>(),
        size in any::<u32>(),
        num_hi in any::<u32>(),
        size_hi in any::<u32>(),
    ) {
        let clean = (num as usize, size as usize);
        let dirty = (
            (num_hi as usize) << 32 | num as usize,
            (size_hi as usize) << 32 | size as usize,
        );
        prop_assert_eq!(forwarded(dirty.0, dirty.1), clean);
        prop_assert_eq!(
            requested_bytes(dirty.0, dirty.1),
            u64::from(num) * u64::from(size)
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn small_manual_allocations_are_zeroed(num in 0usize..64, size in 1usize..64) {
        let p = allocate::<Manual>(num, size);
        if num * size > 0 {
            assert_zeroed_region(p, num * size);
        }
        unsafe { libc::free(p) };
    }
}
