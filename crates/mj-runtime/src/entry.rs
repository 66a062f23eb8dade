use std::ffi::c_int;
use std::io::Write;

/// Signature of the generated program's entry routine (`mjMain`).
pub type EntryFn = unsafe extern "C" fn();

/// Runs the generated program and returns the process exit status.
///
/// No setup happens before `entry`. Afterwards standard output is flushed:
/// a Rust `main` exported from a static library skips the runtime's own
/// exit-time flush, and buffered program output must still reach the
/// stream.
///
/// # Safety
///
/// `entry` is foreign code and runs with whatever guarantees it has.
pub unsafe fn dispatch(entry: EntryFn) -> c_int {
    dispatch_with(entry, std::io::stdout())
}

/// [`dispatch`] with the stream that is flushed once `entry` returns.
///
/// Flush errors are ignored, as they would be at C `exit`.
///
/// # Safety
///
/// Same as [`dispatch`].
pub unsafe fn dispatch_with<W: Write>(entry: EntryFn, mut out: W) -> c_int {
    entry();
    let _ = out.flush();
    libc::EXIT_SUCCESS
}
