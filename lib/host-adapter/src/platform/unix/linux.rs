//! Linux and Android backend.

use std::ffi::CStr;
use std::mem;

use libc::c_int;
use wasi_host_types::{Clockid, Errno, Filetype, Whence};

use crate::HostPlatform;
use crate::availability::{OsVersion, PlatformFamily, VersionProbe};
use crate::error::ContractViolation;

/// `getaddrinfo(3)` error numbers. glibc and musl use negative values,
/// bionic the positive BSD numbering; `libc` does not export the full set on
/// every Linux target.
mod gai {
    use libc::c_int;

    #[cfg(not(target_os = "android"))]
    mod values {
        use libc::c_int;

        pub const EAI_BADFLAGS: c_int = -1;
        pub const EAI_NONAME: c_int = -2;
        pub const EAI_AGAIN: c_int = -3;
        pub const EAI_FAIL: c_int = -4;
        pub const EAI_NODATA: c_int = -5;
        pub const EAI_FAMILY: c_int = -6;
        pub const EAI_SOCKTYPE: c_int = -7;
        pub const EAI_SERVICE: c_int = -8;
        pub const EAI_ADDRFAMILY: c_int = -9;
        pub const EAI_MEMORY: c_int = -10;
        pub const EAI_SYSTEM: c_int = -11;
    }

    #[cfg(target_os = "android")]
    mod values {
        use libc::c_int;

        pub const EAI_ADDRFAMILY: c_int = 1;
        pub const EAI_AGAIN: c_int = 2;
        pub const EAI_BADFLAGS: c_int = 3;
        pub const EAI_FAIL: c_int = 4;
        pub const EAI_FAMILY: c_int = 5;
        pub const EAI_MEMORY: c_int = 6;
        pub const EAI_NODATA: c_int = 7;
        pub const EAI_NONAME: c_int = 8;
        pub const EAI_SERVICE: c_int = 9;
        pub const EAI_SOCKTYPE: c_int = 10;
        pub const EAI_SYSTEM: c_int = 11;
    }

    pub use values::*;

    #[allow(dead_code)]
    pub const ALL: [c_int; 11] = [
        EAI_ADDRFAMILY,
        EAI_AGAIN,
        EAI_BADFLAGS,
        EAI_FAIL,
        EAI_FAMILY,
        EAI_MEMORY,
        EAI_NODATA,
        EAI_NONAME,
        EAI_SERVICE,
        EAI_SOCKTYPE,
        EAI_SYSTEM,
    ];
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Linux;

impl HostPlatform for Linux {
    const NAME: &'static str = "linux";

    type ClockId = libc::clockid_t;
    type SeekWhence = c_int;
    type FileMode = libc::mode_t;
    type DirEntryTag = u8;

    fn try_normalize_error(code: i32) -> Result<Errno, ContractViolation> {
        Ok(match code {
            0 => Errno::Success,
            libc::E2BIG => Errno::Toobig,
            libc::EACCES => Errno::Access,
            libc::EADDRINUSE => Errno::Addrinuse,
            libc::EADDRNOTAVAIL => Errno::Addrnotavail,
            libc::EAFNOSUPPORT => Errno::Afnosupport,
            libc::EAGAIN => Errno::Again,
            libc::EALREADY => Errno::Already,
            libc::EBADF => Errno::Badf,
            libc::EBADMSG => Errno::Badmsg,
            libc::EBUSY => Errno::Busy,
            libc::ECANCELED => Errno::Canceled,
            libc::ECHILD => Errno::Child,
            libc::ECONNABORTED => Errno::Connaborted,
            libc::ECONNREFUSED => Errno::Connrefused,
            libc::ECONNRESET => Errno::Connreset,
            libc::EDEADLK => Errno::Deadlk,
            libc::EDESTADDRREQ => Errno::Destaddrreq,
            libc::EDOM => Errno::Dom,
            libc::EDQUOT => Errno::Dquot,
            libc::EEXIST => Errno::Exist,
            libc::EFAULT => Errno::Fault,
            libc::EFBIG => Errno::Fbig,
            libc::EHOSTUNREACH => Errno::Hostunreach,
            libc::EIDRM => Errno::Idrm,
            libc::EILSEQ => Errno::Ilseq,
            libc::EINPROGRESS => Errno::Inprogress,
            libc::EINTR => Errno::Intr,
            libc::EINVAL => Errno::Inval,
            libc::EIO => Errno::Io,
            libc::EISCONN => Errno::Isconn,
            libc::EISDIR => Errno::Isdir,
            libc::ELOOP => Errno::Loop,
            libc::EMFILE => Errno::Mfile,
            libc::EMLINK => Errno::Mlink,
            libc::EMSGSIZE => Errno::Msgsize,
            libc::EMULTIHOP => Errno::Multihop,
            libc::ENAMETOOLONG => Errno::Nametoolong,
            libc::ENETDOWN => Errno::Netdown,
            libc::ENETRESET => Errno::Netreset,
            libc::ENETUNREACH => Errno::Netunreach,
            libc::ENFILE => Errno::Nfile,
            libc::ENOBUFS => Errno::Nobufs,
            libc::ENODEV => Errno::Nodev,
            libc::ENOENT => Errno::Noent,
            libc::ENOEXEC => Errno::Noexec,
            libc::ENOLCK => Errno::Nolck,
            libc::ENOLINK => Errno::Nolink,
            libc::ENOMEM => Errno::Nomem,
            libc::ENOMSG => Errno::Nomsg,
            libc::ENOPROTOOPT => Errno::Noprotoopt,
            libc::ENOSPC => Errno::Nospc,
            libc::ENOSYS => Errno::Nosys,
            libc::ENOTCONN => Errno::Notconn,
            libc::ENOTDIR => Errno::Notdir,
            libc::ENOTEMPTY => Errno::Notempty,
            libc::ENOTRECOVERABLE => Errno::Notrecoverable,
            libc::ENOTSOCK => Errno::Notsock,
            // Same value as EOPNOTSUPP on Linux.
            libc::ENOTSUP => Errno::Notsup,
            libc::ENOTTY => Errno::Notty,
            libc::ENXIO => Errno::Nxio,
            libc::EOVERFLOW => Errno::Overflow,
            libc::EOWNERDEAD => Errno::Ownerdead,
            libc::EPERM => Errno::Perm,
            libc::EPIPE => Errno::Pipe,
            libc::EPROTO => Errno::Proto,
            libc::EPROTONOSUPPORT => Errno::Protonosupport,
            libc::EPROTOTYPE => Errno::Prototype,
            libc::ERANGE => Errno::Range,
            libc::EROFS => Errno::Rofs,
            libc::ESPIPE => Errno::Spipe,
            libc::ESRCH => Errno::Srch,
            libc::ESTALE => Errno::Stale,
            libc::ETIMEDOUT => Errno::Timedout,
            libc::ETXTBSY => Errno::Txtbsy,
            libc::EXDEV => Errno::Xdev,
            code => {
                return Err(ContractViolation::UnknownErrno {
                    platform: Self::NAME,
                    code,
                });
            }
        })
    }

    fn try_normalize_name_resolution_error(code: i32) -> Result<Errno, ContractViolation> {
        Ok(match code {
            gai::EAI_ADDRFAMILY => Errno::AiAddrfamily,
            gai::EAI_AGAIN => Errno::AiAgain,
            gai::EAI_BADFLAGS => Errno::AiBadflag,
            gai::EAI_FAIL => Errno::AiFail,
            gai::EAI_FAMILY => Errno::AiFamily,
            gai::EAI_MEMORY => Errno::AiMemory,
            gai::EAI_NODATA => Errno::AiNodata,
            gai::EAI_NONAME => Errno::AiNoname,
            gai::EAI_SERVICE => Errno::AiService,
            gai::EAI_SOCKTYPE => Errno::AiSocktype,
            gai::EAI_SYSTEM => Errno::AiSystem,
            code => {
                return Err(ContractViolation::UnknownNameResolutionError {
                    platform: Self::NAME,
                    code,
                });
            }
        })
    }

    fn to_host_clock(clock: Clockid) -> libc::clockid_t {
        match clock {
            Clockid::Realtime => libc::CLOCK_REALTIME,
            Clockid::Monotonic => libc::CLOCK_MONOTONIC,
            Clockid::ProcessCputimeId => libc::CLOCK_PROCESS_CPUTIME_ID,
            Clockid::ThreadCputimeId => libc::CLOCK_THREAD_CPUTIME_ID,
        }
    }

    fn from_file_mode(mode: libc::mode_t) -> Filetype {
        super::file_type_from_mode(mode)
    }

    fn from_dir_entry_tag(tag: u8) -> Filetype {
        super::file_type_from_dirent(tag)
    }

    fn to_host_whence(whence: Whence) -> c_int {
        super::seek_whence(whence)
    }
}

/// Reads the kernel release from `uname(2)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostProbe;

impl VersionProbe for HostProbe {
    fn family(&self) -> PlatformFamily {
        PlatformFamily::Linux
    }

    fn probe(&self) -> Option<OsVersion> {
        let mut uts: libc::utsname = unsafe { mem::zeroed() };
        if unsafe { libc::uname(&mut uts) } != 0 {
            return None;
        }
        let release = unsafe { CStr::from_ptr(uts.release.as_ptr()) };
        release.to_str().ok()?.parse().ok()
    }
}
