#![deny(unused_mut)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Platform adapters for the WASI host module.
//!
//! Guest programs see one canonical ABI ([`Errno`], [`Clockid`],
//! [`Filetype`], [`Whence`], nanosecond [`Timestamp`]s) while every host OS
//! family numbers its errors, clocks, file types and seek origins
//! differently. [`HostPlatform`] is the contract every backend implements;
//! exactly one backend is compiled per target and exported as [`Host`].
//!
//! ```
//! use wasi_host_adapter::{Errno, Host, HostPlatform};
//!
//! assert_eq!(Host::normalize_error(0), Errno::Success);
//! let fine = Host::to_fine_time(1_500_000_250);
//! assert_eq!(Host::from_fine_time(&fine), 1_500_000_250);
//! ```

#[macro_use]
mod macros;

pub mod availability;
mod error;
mod io;
mod platform;
pub mod time;

pub use crate::availability::{OsVersion, PlatformFamily, Requirement, is_available};
pub use crate::error::{ContractViolation, contract_violation};
pub use crate::io::normalize_io_error;
pub use crate::platform::*;
pub use crate::time::{CoarseTime, FineTime};
pub use wasi_host_types::{Clockid, Errno, Filetype, Timestamp, Whence};

/// The translation contract between the canonical ABI and one host OS
/// family.
///
/// Every operation is a pure function over value types, safe to call from
/// any number of threads at once. The error-number and whence tables are
/// closed: an input outside them is a [`ContractViolation`] and the plain
/// entry points abort through [`contract_violation`]. The file-type tables
/// are total and fall back to [`Filetype::Unknown`].
pub trait HostPlatform {
    /// Short name used in diagnostics.
    const NAME: &'static str;

    /// Native clock identifier handed to the host's clock query.
    type ClockId: Copy + Eq + core::fmt::Debug;
    /// Native `whence` argument of the host's seek call.
    type SeekWhence: Copy + Eq + core::fmt::Debug;
    /// File-mode field of a stat-like record.
    type FileMode: Copy;
    /// Type tag carried by a directory entry.
    type DirEntryTag: Copy;

    /// Maps a general host error number to its canonical code.
    fn try_normalize_error(code: i32) -> Result<Errno, ContractViolation>;

    /// Maps a name-resolution (`getaddrinfo`) error number to its canonical
    /// code. Kept apart from [`HostPlatform::try_normalize_error`] because
    /// the two numbering spaces overlap on some hosts.
    fn try_normalize_name_resolution_error(code: i32) -> Result<Errno, ContractViolation>;

    /// Like [`HostPlatform::try_normalize_error`], aborting on an
    /// unrecognised error number.
    #[track_caller]
    fn normalize_error(code: i32) -> Errno {
        match Self::try_normalize_error(code) {
            Ok(errno) => errno,
            Err(violation) => contract_violation(violation),
        }
    }

    /// Like [`HostPlatform::try_normalize_name_resolution_error`], aborting
    /// on an unrecognised error number.
    #[track_caller]
    fn normalize_name_resolution_error(code: i32) -> Errno {
        match Self::try_normalize_name_resolution_error(code) {
            Ok(errno) => errno,
            Err(violation) => contract_violation(violation),
        }
    }

    /// Selects the host clock backing a canonical clock. Callers reject
    /// clocks the host lacks before getting here.
    fn to_host_clock(clock: Clockid) -> Self::ClockId;

    /// Splits a timestamp into seconds and nanoseconds. Lossless.
    fn to_fine_time(timestamp: Timestamp) -> FineTime {
        time::to_fine(timestamp)
    }

    /// Splits a timestamp into seconds and microseconds, truncating the
    /// sub-microsecond remainder.
    fn to_coarse_time(timestamp: Timestamp) -> CoarseTime {
        time::to_coarse(timestamp)
    }

    /// Joins a host seconds + nanoseconds pair back into a timestamp.
    fn from_fine_time(time: &FineTime) -> Timestamp {
        time::from_fine(time)
    }

    /// Degrades a host-native fine time to the coarse representation.
    fn fine_to_coarse_time(time: &FineTime) -> CoarseTime {
        time::fine_to_coarse(time)
    }

    /// Classifies a stat-style mode field.
    fn from_file_mode(mode: Self::FileMode) -> Filetype;

    /// Classifies a directory entry type tag.
    fn from_dir_entry_tag(tag: Self::DirEntryTag) -> Filetype;

    fn to_host_whence(whence: Whence) -> Self::SeekWhence;

    /// Translates a guest-supplied whence byte, aborting if it is not one of
    /// the three canonical origins.
    #[track_caller]
    fn to_host_whence_raw(raw: u8) -> Self::SeekWhence {
        match Whence::try_from(raw) {
            Ok(whence) => Self::to_host_whence(whence),
            Err(_) => contract_violation(ContractViolation::InvalidWhence { raw }),
        }
    }

    /// Whether the running OS is new enough for a version-gated facility.
    fn is_available(requirement: &Requirement) -> bool {
        availability::is_available(requirement)
    }
}
