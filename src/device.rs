//! FUNcube dongle device control.
//!
//! Wraps the libfcd handle in an RAII type. Opening returns the handle,
//! dropping closes it; frequency reads and writes surface libfcd failures
//! with the errno the library left behind.

use std::ffi::CString;
use std::ptr::NonNull;

use crate::error::{Error, Result};
use crate::ffi;

/// An open FUNcube dongle.
///
/// The handle is closed when the value is dropped.
pub struct Fcd {
    dev: NonNull<ffi::FCD>,
}

// The handle can move to another thread (e.g. a receiver thread), but
// libfcd gives no guarantee about concurrent calls on one handle, so no
// Sync.
unsafe impl Send for Fcd {}

impl Fcd {
    /// Open the first available FUNcube dongle.
    pub fn open() -> Result<Self> {
        Self::open_raw(None)
    }

    /// Open the dongle at a specific device path (e.g. a hidraw node).
    pub fn open_path(path: &str) -> Result<Self> {
        let path = CString::new(path)?;
        Self::open_raw(Some(path))
    }

    fn open_raw(path: Option<CString>) -> Result<Self> {
        let path_ptr = path
            .as_ref()
            .map_or(std::ptr::null(), |p| p.as_ptr());

        let dev = unsafe { ffi::fcd_open(path_ptr) };
        match NonNull::new(dev) {
            Some(dev) => {
                tracing::info!("Opened FUNcube dongle");
                Ok(Self { dev })
            }
            None => Err(Error::Open),
        }
    }

    /// Returns true if a FUNcube dongle can currently be opened.
    pub fn is_available() -> bool {
        match Self::open() {
            Ok(_) => {
                tracing::debug!("FUNcube dongle detected");
                true
            }
            Err(e) => {
                tracing::debug!("FUNcube dongle not available: {}", e);
                false
            }
        }
    }

    /// Read the tuned frequency in Hz.
    pub fn frequency_hz(&self) -> Result<u32> {
        let mut freq: libc::c_uint = 0;
        let ret = unsafe { ffi::fcd_get_frequency_Hz(self.dev.as_ptr(), &mut freq) };
        if ret != 0 {
            return Err(Error::Io(std::io::Error::last_os_error()));
        }
        Ok(freq)
    }

    /// Tune the dongle to `hz`.
    pub fn set_frequency_hz(&mut self, hz: u32) -> Result<()> {
        let ret = unsafe { ffi::fcd_set_frequency_Hz(self.dev.as_ptr(), hz) };
        if ret != 0 {
            return Err(Error::Io(std::io::Error::last_os_error()));
        }
        tracing::info!("Set frequency to {} Hz", hz);
        Ok(())
    }
}

impl Drop for Fcd {
    fn drop(&mut self) {
        unsafe { ffi::fcd_close(self.dev.as_ptr()) };
        tracing::debug!("Closed FUNcube dongle");
    }
}

impl std::fmt::Debug for Fcd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fcd").field("dev", &self.dev.as_ptr()).finish()
    }
}
