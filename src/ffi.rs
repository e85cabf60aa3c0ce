//! Raw FFI declarations for libfcd.
//!
//! Mirrors the entry points of `<fcd.h>` used by this crate, nothing more.
//! All functions follow the libfcd convention: a nonzero return signals
//! failure and `errno` holds the cause, except [`fcd_open`] which returns
//! NULL on failure.

#![allow(non_snake_case)]

use libc::{c_char, c_int, c_uint};

/// Opaque libfcd device handle.
#[repr(C)]
pub struct FCD {
    _private: [u8; 0],
}

extern "C" {
    /// Open a FUNcube dongle. A NULL `path` opens the first available
    /// device. Returns NULL on failure.
    pub fn fcd_open(path: *const c_char) -> *mut FCD;

    /// Close a handle previously returned by [`fcd_open`]. NULL is a no-op.
    pub fn fcd_close(dev: *mut FCD);

    /// Read the tuned frequency in Hz into `freq`.
    pub fn fcd_get_frequency_Hz(dev: *mut FCD, freq: *mut c_uint) -> c_int;

    /// Tune the dongle to `freq` Hz.
    pub fn fcd_set_frequency_Hz(dev: *mut FCD, freq: c_uint) -> c_int;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_is_opaque() {
        // The handle is only ever used behind a pointer; it must stay
        // zero-sized so no Rust code can materialize one by value.
        assert_eq!(std::mem::size_of::<FCD>(), 0);
    }
}
