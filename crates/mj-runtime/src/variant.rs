/// Which allocator backs the allocation gateway in this build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AllocVariant {
    /// Platform `calloc`; memory is never reclaimed by the runtime.
    Manual,
    /// Boehm conservative collector; unreachable memory is reclaimed by it.
    Collected,
}

/// Fixed at build time by the `gc` feature or `MJ_USE_GC=1`.
pub const ALLOC_VARIANT: AllocVariant = if cfg!(mj_gc) {
    AllocVariant::Collected
} else {
    AllocVariant::Manual
};
