//! Exactly one backend is compiled per target and re-exported as `Host`.

cfg_if::cfg_if! {
    if #[cfg(any(target_os = "linux", target_os = "android"))] {
        mod unix;
        pub use self::unix::linux::{HostProbe, Linux, Linux as Host};
    } else if #[cfg(target_vendor = "apple")] {
        mod unix;
        pub use self::unix::darwin::{Darwin, Darwin as Host, HostProbe};
    } else if #[cfg(windows)] {
        mod windows;
        pub use self::windows::{HostClock, HostProbe, Windows, Windows as Host};
    } else {
        compile_error!("wasi-host-adapter has no backend for this target OS family");
    }
}
