//! Conversions between canonical nanosecond timestamps and the host's
//! seconds + sub-second pairs.
//!
//! Splitting goes through [`Duration`], so sub-unit remainders are always
//! truncated, never rounded. Joining saturates: host instants before the
//! origin clamp to `0` and instants past `u64::MAX` nanoseconds (year 2554)
//! clamp to `u64::MAX`.

use std::time::Duration;

use wasi_host_types::{NANOS_PER_MICRO, NANOS_PER_SEC, Timestamp};

/// Seconds + nanoseconds, as taken by `clock_gettime`, `utimensat`, ...
pub type FineTime = libc::timespec;

/// Seconds + microseconds, as taken by `utimes`, `select`, `SO_RCVTIMEO`, ...
pub type CoarseTime = libc::timeval;

/// Whole seconds and the nanosecond remainder of `timestamp`.
pub fn split_nanos(timestamp: Timestamp) -> (u64, u32) {
    let duration = Duration::from_nanos(timestamp);
    (duration.as_secs(), duration.subsec_nanos())
}

/// Whole seconds and the truncated microsecond remainder of `timestamp`.
pub fn split_micros(timestamp: Timestamp) -> (u64, u32) {
    let duration = Duration::from_nanos(timestamp);
    (duration.as_secs(), duration.subsec_micros())
}

/// Joins a signed host seconds/nanoseconds pair into a timestamp.
pub fn join_nanos(secs: i64, nanos: i64) -> Timestamp {
    let total = i128::from(secs) * i128::from(NANOS_PER_SEC) + i128::from(nanos);
    total.clamp(0, i128::from(u64::MAX)) as Timestamp
}

/// Host time fields are `i32` or `i64` depending on the target; values that
/// do not fit clamp to the field's range instead of wrapping.
trait SaturatingFrom: Sized {
    fn saturating_from(value: i64) -> Self;
}

macro_rules! saturating_from {
    ($($ty:ty),*) => {
        $(
            impl SaturatingFrom for $ty {
                fn saturating_from(value: i64) -> Self {
                    <$ty>::try_from(value).unwrap_or(if value < 0 { <$ty>::MIN } else { <$ty>::MAX })
                }
            }
        )*
    };
}

saturating_from!(i32, i64);

pub(crate) fn to_fine(timestamp: Timestamp) -> FineTime {
    let (secs, nanos) = split_nanos(timestamp);
    libc::timespec {
        tv_sec: SaturatingFrom::saturating_from(i64::try_from(secs).unwrap_or(i64::MAX)),
        tv_nsec: SaturatingFrom::saturating_from(i64::from(nanos)),
    }
}

pub(crate) fn to_coarse(timestamp: Timestamp) -> CoarseTime {
    let (secs, micros) = split_micros(timestamp);
    libc::timeval {
        tv_sec: SaturatingFrom::saturating_from(i64::try_from(secs).unwrap_or(i64::MAX)),
        tv_usec: SaturatingFrom::saturating_from(i64::from(micros)),
    }
}

#[allow(clippy::unnecessary_cast)]
pub(crate) fn from_fine(time: &FineTime) -> Timestamp {
    join_nanos(time.tv_sec as i64, time.tv_nsec as i64)
}

/// `tv_nsec` outside `[0, 1e9)` is carried into the seconds first, so the
/// result is always a valid `timeval`.
#[allow(clippy::unnecessary_cast)]
pub(crate) fn fine_to_coarse(time: &FineTime) -> CoarseTime {
    let nanos_per_sec = NANOS_PER_SEC as i64;
    let nanos = time.tv_nsec as i64;
    let secs = (time.tv_sec as i64).saturating_add(nanos.div_euclid(nanos_per_sec));
    let micros = nanos.rem_euclid(nanos_per_sec) / NANOS_PER_MICRO as i64;
    libc::timeval {
        tv_sec: SaturatingFrom::saturating_from(secs),
        tv_usec: SaturatingFrom::saturating_from(micros),
    }
}
