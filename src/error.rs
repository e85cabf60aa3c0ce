//! Error types for FUNcube dongle operations.

use thiserror::Error;

/// Result type for FUNcube dongle operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while opening or controlling a dongle.
#[derive(Debug, Error)]
pub enum Error {
    /// No dongle could be opened (not plugged in, no permissions, or the
    /// given device path does not exist).
    #[error("could not open FUNcube dongle")]
    Open,

    /// A device operation failed; carries the errno libfcd left behind.
    #[error("FUNcube dongle I/O failed: {0}")]
    Io(#[source] std::io::Error),

    /// The device path contains an interior NUL byte and cannot be passed
    /// to libfcd.
    #[error("invalid device path: {0}")]
    InvalidPath(#[from] std::ffi::NulError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_error_display() {
        assert_eq!(Error::Open.to_string(), "could not open FUNcube dongle");
    }

    #[test]
    fn test_io_error_carries_errno() {
        let err = Error::Io(std::io::Error::from_raw_os_error(libc::EIO));
        assert!(err.to_string().starts_with("FUNcube dongle I/O failed"));
        match err {
            Error::Io(io) => assert_eq!(io.raw_os_error(), Some(libc::EIO)),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn test_nul_in_path_maps_to_invalid_path() {
        let nul = std::ffi::CString::new("/dev/hid\0raw0").unwrap_err();
        let err = Error::from(nul);
        assert!(matches!(err, Error::InvalidPath(_)));
    }
}
