#![no_main]
#![deny(unused_variables)]

use libfuzzer_sys::fuzz_target;
use wasi_host_adapter::{Host, HostPlatform, Whence, time};

fuzz_target!(|input: (u64, i64, i64, u8)| {
    let (timestamp, secs, nanos, byte) = input;

    let fine = Host::to_fine_time(timestamp);
    assert_eq!(Host::from_fine_time(&fine), timestamp);

    let (whole, micros) = time::split_micros(timestamp);
    let kept = u128::from(whole) * 1_000_000_000 + u128::from(micros) * 1_000;
    assert!(u128::from(timestamp) - kept < 1_000);

    // Arbitrary host pairs saturate instead of wrapping.
    let joined = time::join_nanos(secs, nanos);
    if secs < 0 && nanos <= 0 {
        assert_eq!(joined, 0);
    }

    let first = Host::from_dir_entry_tag(byte.into());
    assert_eq!(Host::from_dir_entry_tag(byte.into()), first);

    if let Ok(whence) = Whence::try_from(byte) {
        assert_eq!(Host::to_host_whence_raw(byte), Host::to_host_whence(whence));
    }

    if let Ok(errno) = Host::try_normalize_error(i32::from(byte)) {
        assert_eq!(Host::normalize_error(i32::from(byte)), errno);
    }
});
