use num_enum::{IntoPrimitive, TryFromPrimitive};
#[cfg(feature = "enable-serde")]
use serde::{Deserialize, Serialize};

/// Timestamp in nanoseconds.
pub type Timestamp = u64;

pub const NANOS_PER_SEC: u64 = 1_000_000_000;
pub const NANOS_PER_MICRO: u64 = 1_000;
pub const MICROS_PER_SEC: u64 = 1_000_000;

/// Identifiers for clocks.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "enable-serde", derive(Serialize, Deserialize))]
pub enum Clockid {
    /// The clock measuring real time. Time value zero corresponds with 1970-01-01T00:00:00Z.
    Realtime = 0,
    /// The store-wide monotonic clock, which is defined as a clock measuring real time, whose value cannot be adjusted and which cannot have negative clock jumps. The epoch of this clock is undefined. The absolute time value of this clock therefore has no meaning.
    Monotonic = 1,
    /// The CPU-time clock associated with the current process.
    ProcessCputimeId = 2,
    /// The CPU-time clock associated with the current thread.
    ThreadCputimeId = 3,
}

impl Clockid {
    pub const ALL: [Clockid; 4] = [
        Clockid::Realtime,
        Clockid::Monotonic,
        Clockid::ProcessCputimeId,
        Clockid::ThreadCputimeId,
    ];
}
