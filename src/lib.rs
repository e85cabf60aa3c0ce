//! Rust interface to FUNcube dongles, via the system-installed libfcd.
//!
//! The crate links against `libfcd` (located through pkg-config at build
//! time) and wraps its device handle in a safe [`Fcd`] type: open a dongle,
//! read or set the tuned frequency, and let `Drop` close the handle. The
//! raw C surface is available in [`ffi`] for callers that need it.
//!
//! # Example
//!
//! ```no_run
//! use fcd::Fcd;
//!
//! let mut dongle = Fcd::open()?;
//! dongle.set_frequency_hz(144_800_000)?;
//! println!("tuned to {}", fcd::freq::format_mhz(dongle.frequency_hz()?));
//! # Ok::<(), fcd::Error>(())
//! ```
//!
//! Building requires libfcd and its headers on the host; without them the
//! build fails at the link stage.

mod device;
mod error;

pub mod ffi;
pub mod freq;

pub use device::Fcd;
pub use error::{Error, Result};
