//! C symbols linked into every MiniJava executable.
//!
//! The code generator calls these by name with the platform C calling
//! convention. No panic may unwind across them.

use std::ffi::{c_int, c_void};

use mj_runtime::alloc::{self, Selected};
use mj_runtime::entry;
use mj_runtime::io::{Console, END_OF_INPUT};

#[allow(non_snake_case)]
extern "C" {
    fn mjMain();
}

#[no_mangle]
pub extern "C" fn main() -> c_int {
    match std::panic::catch_unwind(|| unsafe { entry::dispatch(mjMain) }) {
        Ok(status) => status,
        Err(_) => {
            eprintln!("mj-runtime: panic while running mjMain");
            std::process::abort();
        }
    }
}

#[no_mangle]
pub extern "C" fn calloc_impl(num: usize, size: usize) -> *mut c_void {
    std::panic::catch_unwind(|| alloc::allocate::<Selected>(num, size))
        .unwrap_or(std::ptr::null_mut())
}

#[no_mangle]
pub extern "C" fn print_int(val: c_int) {
    let _ = std::panic::catch_unwind(|| Console::stdout().print_int(val));
}

#[no_mangle]
pub extern "C" fn write_int(val: c_int) {
    let _ = std::panic::catch_unwind(|| Console::stdout().write_int(val));
}

#[no_mangle]
pub extern "C" fn flush() {
    let _ = std::panic::catch_unwind(|| Console::stdout().flush());
}

#[no_mangle]
pub extern "C" fn read_int() -> c_int {
    std::panic::catch_unwind(|| Console::stdin().read_int().unwrap_or(END_OF_INPUT))
        .unwrap_or(END_OF_INPUT)
}
