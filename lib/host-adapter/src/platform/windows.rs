//! Windows backend.
//!
//! Error numbers arrive from `GetLastError` or `WSAGetLastError`; the two
//! ranges do not overlap, so one table serves both.

use std::mem;

use wasi_host_types::{Clockid, Errno, Filetype, Timestamp, Whence};
use windows_sys::Wdk::System::SystemServices::RtlGetVersion;
use windows_sys::Win32::Foundation::{self as win32, FILETIME, STATUS_SUCCESS};
use windows_sys::Win32::Networking::WinSock as ws;
use windows_sys::Win32::Storage::FileSystem::{
    FILE_ATTRIBUTE_DEVICE, FILE_ATTRIBUTE_DIRECTORY, FILE_ATTRIBUTE_REPARSE_POINT, FILE_BEGIN,
    FILE_CURRENT, FILE_END, INVALID_FILE_ATTRIBUTES, SET_FILE_POINTER_MOVE_METHOD,
};
use windows_sys::Win32::System::SystemInformation::OSVERSIONINFOW;

use crate::HostPlatform;
use crate::availability::{OsVersion, PlatformFamily, VersionProbe};
use crate::error::ContractViolation;

/// `st_mode` type bits of the CRT `_stat64` family.
mod crt {
    pub const S_IFMT: u16 = 0xF000;
    pub const S_IFDIR: u16 = 0x4000;
    pub const S_IFCHR: u16 = 0x2000;
    #[allow(dead_code)]
    pub const S_IFIFO: u16 = 0x1000;
    pub const S_IFREG: u16 = 0x8000;
}

/// 100 ns intervals between 1601-01-01 and 1970-01-01.
const FILETIME_UNIX_EPOCH: u64 = 116_444_736_000_000_000;
const NANOS_PER_FILETIME_TICK: u64 = 100;

/// Clock sources backing each canonical clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostClock {
    /// `GetSystemTimePreciseAsFileTime`.
    SystemTime,
    /// `QueryPerformanceCounter`.
    PerformanceCounter,
    /// `GetProcessTimes`, kernel + user.
    ProcessTimes,
    /// `GetThreadTimes`, kernel + user.
    ThreadTimes,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Windows;

fn from_win32(code: u32) -> Option<Errno> {
    Some(match code {
        win32::ERROR_SUCCESS => Errno::Success,
        win32::ERROR_INVALID_FUNCTION => Errno::Nosys,
        win32::ERROR_FILE_NOT_FOUND => Errno::Noent,
        win32::ERROR_PATH_NOT_FOUND => Errno::Noent,
        win32::ERROR_TOO_MANY_OPEN_FILES => Errno::Mfile,
        win32::ERROR_ACCESS_DENIED => Errno::Access,
        win32::ERROR_INVALID_HANDLE => Errno::Badf,
        win32::ERROR_NOT_ENOUGH_MEMORY => Errno::Nomem,
        win32::ERROR_INVALID_DATA => Errno::Inval,
        win32::ERROR_OUTOFMEMORY => Errno::Nomem,
        win32::ERROR_INVALID_DRIVE => Errno::Noent,
        win32::ERROR_NOT_SAME_DEVICE => Errno::Xdev,
        win32::ERROR_WRITE_PROTECT => Errno::Rofs,
        win32::ERROR_BAD_UNIT => Errno::Nodev,
        win32::ERROR_NOT_READY => Errno::Busy,
        win32::ERROR_CRC => Errno::Io,
        win32::ERROR_SEEK => Errno::Io,
        win32::ERROR_WRITE_FAULT => Errno::Io,
        win32::ERROR_READ_FAULT => Errno::Io,
        win32::ERROR_GEN_FAILURE => Errno::Io,
        win32::ERROR_SHARING_VIOLATION => Errno::Busy,
        win32::ERROR_LOCK_VIOLATION => Errno::Busy,
        win32::ERROR_SHARING_BUFFER_EXCEEDED => Errno::Nolck,
        win32::ERROR_HANDLE_DISK_FULL => Errno::Nospc,
        win32::ERROR_NOT_SUPPORTED => Errno::Notsup,
        win32::ERROR_BAD_NETPATH => Errno::Noent,
        win32::ERROR_DEV_NOT_EXIST => Errno::Nodev,
        win32::ERROR_NETWORK_ACCESS_DENIED => Errno::Access,
        win32::ERROR_FILE_EXISTS => Errno::Exist,
        win32::ERROR_CANNOT_MAKE => Errno::Access,
        win32::ERROR_INVALID_PARAMETER => Errno::Inval,
        win32::ERROR_BROKEN_PIPE => Errno::Pipe,
        win32::ERROR_OPEN_FAILED => Errno::Io,
        win32::ERROR_BUFFER_OVERFLOW => Errno::Nametoolong,
        win32::ERROR_DISK_FULL => Errno::Nospc,
        win32::ERROR_CALL_NOT_IMPLEMENTED => Errno::Nosys,
        win32::ERROR_SEM_TIMEOUT => Errno::Timedout,
        win32::ERROR_INVALID_NAME => Errno::Noent,
        win32::ERROR_WAIT_NO_CHILDREN => Errno::Child,
        win32::ERROR_NEGATIVE_SEEK => Errno::Inval,
        win32::ERROR_DIR_NOT_EMPTY => Errno::Notempty,
        win32::ERROR_NOT_LOCKED => Errno::Nolck,
        win32::ERROR_BUSY => Errno::Busy,
        win32::ERROR_ALREADY_EXISTS => Errno::Exist,
        win32::ERROR_BAD_EXE_FORMAT => Errno::Noexec,
        win32::ERROR_FILENAME_EXCED_RANGE => Errno::Nametoolong,
        win32::ERROR_FILE_TOO_LARGE => Errno::Fbig,
        win32::ERROR_BAD_PIPE => Errno::Pipe,
        win32::ERROR_PIPE_BUSY => Errno::Busy,
        win32::ERROR_NO_DATA => Errno::Pipe,
        win32::ERROR_PIPE_NOT_CONNECTED => Errno::Pipe,
        win32::ERROR_DIRECTORY => Errno::Notdir,
        win32::ERROR_INVALID_ADDRESS => Errno::Fault,
        win32::ERROR_ARITHMETIC_OVERFLOW => Errno::Overflow,
        win32::ERROR_OPERATION_ABORTED => Errno::Canceled,
        win32::ERROR_IO_PENDING => Errno::Inprogress,
        win32::ERROR_NOACCESS => Errno::Fault,
        win32::ERROR_NO_UNICODE_TRANSLATION => Errno::Ilseq,
        win32::ERROR_POSSIBLE_DEADLOCK => Errno::Deadlk,
        win32::ERROR_TOO_MANY_LINKS => Errno::Mlink,
        win32::ERROR_NOT_FOUND => Errno::Noent,
        win32::ERROR_CANCELLED => Errno::Canceled,
        win32::ERROR_DISK_QUOTA_EXCEEDED => Errno::Dquot,
        win32::ERROR_PRIVILEGE_NOT_HELD => Errno::Perm,
        win32::ERROR_TIMEOUT => Errno::Timedout,
        win32::ERROR_CANT_RESOLVE_FILENAME => Errno::Loop,
        win32::ERROR_NOT_A_REPARSE_POINT => Errno::Inval,
        win32::ERROR_INVALID_ACCESS => Errno::Access,
        win32::ERROR_NO_MORE_FILES => Errno::Noent,
        win32::ERROR_HANDLE_EOF => Errno::Io,
        win32::ERROR_NETNAME_DELETED => Errno::Connreset,
        win32::ERROR_SEEK_ON_DEVICE => Errno::Spipe,
        win32::ERROR_BAD_PATHNAME => Errno::Noent,
        win32::ERROR_ENVVAR_NOT_FOUND => Errno::Noent,
        win32::ERROR_DELETE_PENDING => Errno::Access,
        win32::ERROR_DIRECTORY_NOT_SUPPORTED => Errno::Isdir,
        win32::ERROR_STOPPED_ON_SYMLINK => Errno::Loop,
        win32::ERROR_CONNECTION_REFUSED => Errno::Connrefused,
        win32::ERROR_NETWORK_UNREACHABLE => Errno::Netunreach,
        win32::ERROR_HOST_UNREACHABLE => Errno::Hostunreach,
        win32::ERROR_CONNECTION_ABORTED => Errno::Connaborted,
        win32::ERROR_CANT_ACCESS_FILE => Errno::Access,
        win32::ERROR_INVALID_REPARSE_DATA => Errno::Inval,
        _ => return None,
    })
}

fn from_winsock(code: i32) -> Option<Errno> {
    Some(match code {
        ws::WSAEINTR => Errno::Intr,
        ws::WSAEBADF => Errno::Badf,
        ws::WSAEACCES => Errno::Access,
        ws::WSAEFAULT => Errno::Fault,
        ws::WSAEINVAL => Errno::Inval,
        ws::WSAEMFILE => Errno::Mfile,
        ws::WSAEWOULDBLOCK => Errno::Again,
        ws::WSAEINPROGRESS => Errno::Inprogress,
        ws::WSAEALREADY => Errno::Already,
        ws::WSAENOTSOCK => Errno::Notsock,
        ws::WSAEDESTADDRREQ => Errno::Destaddrreq,
        ws::WSAEMSGSIZE => Errno::Msgsize,
        ws::WSAEPROTOTYPE => Errno::Prototype,
        ws::WSAENOPROTOOPT => Errno::Noprotoopt,
        ws::WSAEPROTONOSUPPORT => Errno::Protonosupport,
        ws::WSAESOCKTNOSUPPORT => Errno::Notsup,
        ws::WSAEOPNOTSUPP => Errno::Notsup,
        ws::WSAEPFNOSUPPORT => Errno::Afnosupport,
        ws::WSAEAFNOSUPPORT => Errno::Afnosupport,
        ws::WSAEADDRINUSE => Errno::Addrinuse,
        ws::WSAEADDRNOTAVAIL => Errno::Addrnotavail,
        ws::WSAENETDOWN => Errno::Netdown,
        ws::WSAENETUNREACH => Errno::Netunreach,
        ws::WSAENETRESET => Errno::Netreset,
        ws::WSAECONNABORTED => Errno::Connaborted,
        ws::WSAECONNRESET => Errno::Connreset,
        ws::WSAENOBUFS => Errno::Nobufs,
        ws::WSAEISCONN => Errno::Isconn,
        ws::WSAENOTCONN => Errno::Notconn,
        ws::WSAESHUTDOWN => Errno::Pipe,
        ws::WSAETIMEDOUT => Errno::Timedout,
        ws::WSAECONNREFUSED => Errno::Connrefused,
        ws::WSAELOOP => Errno::Loop,
        ws::WSAENAMETOOLONG => Errno::Nametoolong,
        ws::WSAEHOSTDOWN => Errno::Hostunreach,
        ws::WSAEHOSTUNREACH => Errno::Hostunreach,
        ws::WSAENOTEMPTY => Errno::Notempty,
        ws::WSAEDQUOT => Errno::Dquot,
        ws::WSAESTALE => Errno::Stale,
        ws::WSAECANCELLED => Errno::Canceled,
        _ => return None,
    })
}

impl Windows {
    /// Converts a timestamp to a `FILETIME`, truncating to 100 ns ticks.
    pub fn to_filetime(timestamp: Timestamp) -> FILETIME {
        let ticks = timestamp / NANOS_PER_FILETIME_TICK + FILETIME_UNIX_EPOCH;
        FILETIME {
            dwLowDateTime: ticks as u32,
            dwHighDateTime: (ticks >> 32) as u32,
        }
    }

    /// Converts a `FILETIME` to a timestamp. Instants before 1970 clamp to
    /// `0`, instants past the canonical horizon to `u64::MAX`.
    pub fn from_filetime(time: &FILETIME) -> Timestamp {
        let ticks = (u64::from(time.dwHighDateTime) << 32) | u64::from(time.dwLowDateTime);
        ticks
            .saturating_sub(FILETIME_UNIX_EPOCH)
            .saturating_mul(NANOS_PER_FILETIME_TICK)
    }
}

impl HostPlatform for Windows {
    const NAME: &'static str = "windows";

    type ClockId = HostClock;
    type SeekWhence = SET_FILE_POINTER_MOVE_METHOD;
    type FileMode = u16;
    type DirEntryTag = u32;

    fn try_normalize_error(code: i32) -> Result<Errno, ContractViolation> {
        from_winsock(code)
            .or_else(|| from_win32(code as u32))
            .ok_or(ContractViolation::UnknownErrno {
                platform: Self::NAME,
                code,
            })
    }

    /// `getaddrinfo` reports WinSock codes; `EAI_ADDRFAMILY` and
    /// `EAI_SYSTEM` have no counterpart here.
    fn try_normalize_name_resolution_error(code: i32) -> Result<Errno, ContractViolation> {
        Ok(match code {
            ws::WSATRY_AGAIN => Errno::AiAgain,
            ws::WSAEINVAL => Errno::AiBadflag,
            ws::WSANO_RECOVERY => Errno::AiFail,
            ws::WSAEAFNOSUPPORT => Errno::AiFamily,
            ws::WSA_NOT_ENOUGH_MEMORY => Errno::AiMemory,
            ws::WSANO_DATA => Errno::AiNodata,
            ws::WSAHOST_NOT_FOUND => Errno::AiNoname,
            ws::WSATYPE_NOT_FOUND => Errno::AiService,
            ws::WSAESOCKTNOSUPPORT => Errno::AiSocktype,
            code => {
                return Err(ContractViolation::UnknownNameResolutionError {
                    platform: Self::NAME,
                    code,
                });
            }
        })
    }

    fn to_host_clock(clock: Clockid) -> HostClock {
        match clock {
            Clockid::Realtime => HostClock::SystemTime,
            Clockid::Monotonic => HostClock::PerformanceCounter,
            Clockid::ProcessCputimeId => HostClock::ProcessTimes,
            Clockid::ThreadCputimeId => HostClock::ThreadTimes,
        }
    }

    /// Pipes (`_S_IFIFO`) are reported as unknown, as on the POSIX hosts.
    fn from_file_mode(mode: u16) -> Filetype {
        match mode & crt::S_IFMT {
            crt::S_IFDIR => Filetype::Directory,
            crt::S_IFCHR => Filetype::CharacterDevice,
            crt::S_IFREG => Filetype::RegularFile,
            _ => Filetype::Unknown,
        }
    }

    /// Classifies the `dwFileAttributes` of a directory listing. Reparse
    /// points take precedence, so directory symlinks and junctions read as
    /// links.
    fn from_dir_entry_tag(attributes: u32) -> Filetype {
        if attributes == INVALID_FILE_ATTRIBUTES {
            Filetype::Unknown
        } else if attributes & FILE_ATTRIBUTE_REPARSE_POINT != 0 {
            Filetype::SymbolicLink
        } else if attributes & FILE_ATTRIBUTE_DIRECTORY != 0 {
            Filetype::Directory
        } else if attributes & FILE_ATTRIBUTE_DEVICE != 0 {
            Filetype::CharacterDevice
        } else {
            Filetype::RegularFile
        }
    }

    fn to_host_whence(whence: Whence) -> SET_FILE_POINTER_MOVE_METHOD {
        match whence {
            Whence::Set => FILE_BEGIN,
            Whence::Cur => FILE_CURRENT,
            Whence::End => FILE_END,
        }
    }
}

/// Reads `major.minor.build` through `RtlGetVersion`, which unlike
/// `GetVersionEx` is not subject to manifest-based version lies.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostProbe;

impl VersionProbe for HostProbe {
    fn family(&self) -> PlatformFamily {
        PlatformFamily::Windows
    }

    fn probe(&self) -> Option<OsVersion> {
        let mut info: OSVERSIONINFOW = unsafe { mem::zeroed() };
        info.dwOSVersionInfoSize = mem::size_of::<OSVERSIONINFOW>() as u32;
        if unsafe { RtlGetVersion(&mut info) } != STATUS_SUCCESS {
            return None;
        }
        Some(OsVersion::new(
            info.dwMajorVersion,
            info.dwMinorVersion,
            info.dwBuildNumber,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const WIN32_TABLE: &[(u32, Errno)] = &[
        (win32::ERROR_SUCCESS, Errno::Success),
        (win32::ERROR_INVALID_FUNCTION, Errno::Nosys),
        (win32::ERROR_FILE_NOT_FOUND, Errno::Noent),
        (win32::ERROR_PATH_NOT_FOUND, Errno::Noent),
        (win32::ERROR_TOO_MANY_OPEN_FILES, Errno::Mfile),
        (win32::ERROR_ACCESS_DENIED, Errno::Access),
        (win32::ERROR_INVALID_HANDLE, Errno::Badf),
        (win32::ERROR_NOT_ENOUGH_MEMORY, Errno::Nomem),
        (win32::ERROR_INVALID_DATA, Errno::Inval),
        (win32::ERROR_OUTOFMEMORY, Errno::Nomem),
        (win32::ERROR_INVALID_DRIVE, Errno::Noent),
        (win32::ERROR_NOT_SAME_DEVICE, Errno::Xdev),
        (win32::ERROR_WRITE_PROTECT, Errno::Rofs),
        (win32::ERROR_BAD_UNIT, Errno::Nodev),
        (win32::ERROR_NOT_READY, Errno::Busy),
        (win32::ERROR_CRC, Errno::Io),
        (win32::ERROR_SEEK, Errno::Io),
        (win32::ERROR_WRITE_FAULT, Errno::Io),
        (win32::ERROR_READ_FAULT, Errno::Io),
        (win32::ERROR_GEN_FAILURE, Errno::Io),
        (win32::ERROR_SHARING_VIOLATION, Errno::Busy),
        (win32::ERROR_LOCK_VIOLATION, Errno::Busy),
        (win32::ERROR_SHARING_BUFFER_EXCEEDED, Errno::Nolck),
        (win32::ERROR_HANDLE_DISK_FULL, Errno::Nospc),
        (win32::ERROR_NOT_SUPPORTED, Errno::Notsup),
        (win32::ERROR_BAD_NETPATH, Errno::Noent),
        (win32::ERROR_DEV_NOT_EXIST, Errno::Nodev),
        (win32::ERROR_NETWORK_ACCESS_DENIED, Errno::Access),
        (win32::ERROR_FILE_EXISTS, Errno::Exist),
        (win32::ERROR_CANNOT_MAKE, Errno::Access),
        (win32::ERROR_INVALID_PARAMETER, Errno::Inval),
        (win32::ERROR_BROKEN_PIPE, Errno::Pipe),
        (win32::ERROR_OPEN_FAILED, Errno::Io),
        (win32::ERROR_BUFFER_OVERFLOW, Errno::Nametoolong),
        (win32::ERROR_DISK_FULL, Errno::Nospc),
        (win32::ERROR_CALL_NOT_IMPLEMENTED, Errno::Nosys),
        (win32::ERROR_SEM_TIMEOUT, Errno::Timedout),
        (win32::ERROR_INVALID_NAME, Errno::Noent),
        (win32::ERROR_WAIT_NO_CHILDREN, Errno::Child),
        (win32::ERROR_NEGATIVE_SEEK, Errno::Inval),
        (win32::ERROR_DIR_NOT_EMPTY, Errno::Notempty),
        (win32::ERROR_NOT_LOCKED, Errno::Nolck),
        (win32::ERROR_BUSY, Errno::Busy),
        (win32::ERROR_ALREADY_EXISTS, Errno::Exist),
        (win32::ERROR_BAD_EXE_FORMAT, Errno::Noexec),
        (win32::ERROR_FILENAME_EXCED_RANGE, Errno::Nametoolong),
        (win32::ERROR_FILE_TOO_LARGE, Errno::Fbig),
        (win32::ERROR_BAD_PIPE, Errno::Pipe),
        (win32::ERROR_PIPE_BUSY, Errno::Busy),
        (win32::ERROR_NO_DATA, Errno::Pipe),
        (win32::ERROR_PIPE_NOT_CONNECTED, Errno::Pipe),
        (win32::ERROR_DIRECTORY, Errno::Notdir),
        (win32::ERROR_INVALID_ADDRESS, Errno::Fault),
        (win32::ERROR_ARITHMETIC_OVERFLOW, Errno::Overflow),
        (win32::ERROR_OPERATION_ABORTED, Errno::Canceled),
        (win32::ERROR_IO_PENDING, Errno::Inprogress),
        (win32::ERROR_NOACCESS, Errno::Fault),
        (win32::ERROR_NO_UNICODE_TRANSLATION, Errno::Ilseq),
        (win32::ERROR_POSSIBLE_DEADLOCK, Errno::Deadlk),
        (win32::ERROR_TOO_MANY_LINKS, Errno::Mlink),
        (win32::ERROR_NOT_FOUND, Errno::Noent),
        (win32::ERROR_CANCELLED, Errno::Canceled),
        (win32::ERROR_DISK_QUOTA_EXCEEDED, Errno::Dquot),
        (win32::ERROR_PRIVILEGE_NOT_HELD, Errno::Perm),
        (win32::ERROR_TIMEOUT, Errno::Timedout),
        (win32::ERROR_CANT_RESOLVE_FILENAME, Errno::Loop),
        (win32::ERROR_NOT_A_REPARSE_POINT, Errno::Inval),
        (win32::ERROR_INVALID_ACCESS, Errno::Access),
        (win32::ERROR_NO_MORE_FILES, Errno::Noent),
        (win32::ERROR_HANDLE_EOF, Errno::Io),
        (win32::ERROR_NETNAME_DELETED, Errno::Connreset),
        (win32::ERROR_SEEK_ON_DEVICE, Errno::Spipe),
        (win32::ERROR_BAD_PATHNAME, Errno::Noent),
        (win32::ERROR_ENVVAR_NOT_FOUND, Errno::Noent),
        (win32::ERROR_DELETE_PENDING, Errno::Access),
        (win32::ERROR_DIRECTORY_NOT_SUPPORTED, Errno::Isdir),
        (win32::ERROR_STOPPED_ON_SYMLINK, Errno::Loop),
        (win32::ERROR_CONNECTION_REFUSED, Errno::Connrefused),
        (win32::ERROR_NETWORK_UNREACHABLE, Errno::Netunreach),
        (win32::ERROR_HOST_UNREACHABLE, Errno::Hostunreach),
        (win32::ERROR_CONNECTION_ABORTED, Errno::Connaborted),
        (win32::ERROR_CANT_ACCESS_FILE, Errno::Access),
        (win32::ERROR_INVALID_REPARSE_DATA, Errno::Inval),
    ];

    const WINSOCK_TABLE: &[(i32, Errno)] = &[
        (ws::WSAEINTR, Errno::Intr),
        (ws::WSAEBADF, Errno::Badf),
        (ws::WSAEACCES, Errno::Access),
        (ws::WSAEFAULT, Errno::Fault),
        (ws::WSAEINVAL, Errno::Inval),
        (ws::WSAEMFILE, Errno::Mfile),
        (ws::WSAEWOULDBLOCK, Errno::Again),
        (ws::WSAEINPROGRESS, Errno::Inprogress),
        (ws::WSAEALREADY, Errno::Already),
        (ws::WSAENOTSOCK, Errno::Notsock),
        (ws::WSAEDESTADDRREQ, Errno::Destaddrreq),
        (ws::WSAEMSGSIZE, Errno::Msgsize),
        (ws::WSAEPROTOTYPE, Errno::Prototype),
        (ws::WSAENOPROTOOPT, Errno::Noprotoopt),
        (ws::WSAEPROTONOSUPPORT, Errno::Protonosupport),
        (ws::WSAESOCKTNOSUPPORT, Errno::Notsup),
        (ws::WSAEOPNOTSUPP, Errno::Notsup),
        (ws::WSAEPFNOSUPPORT, Errno::Afnosupport),
        (ws::WSAEAFNOSUPPORT, Errno::Afnosupport),
        (ws::WSAEADDRINUSE, Errno::Addrinuse),
        (ws::WSAEADDRNOTAVAIL, Errno::Addrnotavail),
        (ws::WSAENETDOWN, Errno::Netdown),
        (ws::WSAENETUNREACH, Errno::Netunreach),
        (ws::WSAENETRESET, Errno::Netreset),
        (ws::WSAECONNABORTED, Errno::Connaborted),
        (ws::WSAECONNRESET, Errno::Connreset),
        (ws::WSAENOBUFS, Errno::Nobufs),
        (ws::WSAEISCONN, Errno::Isconn),
        (ws::WSAENOTCONN, Errno::Notconn),
        (ws::WSAESHUTDOWN, Errno::Pipe),
        (ws::WSAETIMEDOUT, Errno::Timedout),
        (ws::WSAECONNREFUSED, Errno::Connrefused),
        (ws::WSAELOOP, Errno::Loop),
        (ws::WSAENAMETOOLONG, Errno::Nametoolong),
        (ws::WSAEHOSTDOWN, Errno::Hostunreach),
        (ws::WSAEHOSTUNREACH, Errno::Hostunreach),
        (ws::WSAENOTEMPTY, Errno::Notempty),
        (ws::WSAEDQUOT, Errno::Dquot),
        (ws::WSAESTALE, Errno::Stale),
        (ws::WSAECANCELLED, Errno::Canceled),
    ];

    /// Canonical codes with no Win32 or WinSock counterpart.
    const UNREACHABLE: &[Errno] = &[
        Errno::Toobig,
        Errno::Badmsg,
        Errno::Dom,
        Errno::Idrm,
        Errno::Multihop,
        Errno::Nfile,
        Errno::Nolink,
        Errno::Nomsg,
        Errno::Notrecoverable,
        Errno::Notty,
        Errno::Nxio,
        Errno::Ownerdead,
        Errno::Proto,
        Errno::Range,
        Errno::Srch,
        Errno::Txtbsy,
    ];

    #[test]
    fn documented_win32_errors_are_covered() {
        for &(code, expected) in WIN32_TABLE {
            assert_eq!(
                Windows::try_normalize_error(code as i32),
                Ok(expected),
                "win32 error {code}"
            );
        }
    }

    #[test]
    fn documented_winsock_errors_are_covered() {
        for &(code, expected) in WINSOCK_TABLE {
            assert_eq!(Windows::try_normalize_error(code), Ok(expected), "wsa error {code}");
        }
    }

    #[test]
    fn every_general_errno_is_reachable_or_listed() {
        let general = Errno::ALL
            .iter()
            .filter(|errno| !errno.is_name_resolution() && **errno != Errno::Notcapable);
        for errno in general {
            let reachable = WIN32_TABLE.iter().any(|(_, mapped)| mapped == errno)
                || WINSOCK_TABLE.iter().any(|(_, mapped)| mapped == errno);
            assert_eq!(
                reachable,
                !UNREACHABLE.contains(errno),
                "{} reachability",
                errno.name()
            );
        }
    }

    #[test]
    fn file_api_errors_from_std_normalize() {
        let cases = [
            (win32::ERROR_NO_MORE_FILES, Errno::Noent),
            (win32::ERROR_HANDLE_EOF, Errno::Io),
            (win32::ERROR_NETNAME_DELETED, Errno::Connreset),
            (win32::ERROR_SEEK_ON_DEVICE, Errno::Spipe),
            (win32::ERROR_BAD_PATHNAME, Errno::Noent),
            (win32::ERROR_DELETE_PENDING, Errno::Access),
            (win32::ERROR_DIRECTORY_NOT_SUPPORTED, Errno::Isdir),
        ];
        for (code, expected) in cases {
            let err = std::io::Error::from_raw_os_error(code as i32);
            assert_eq!(crate::normalize_io_error::<Windows>(&err), expected, "{err}");
        }
    }

    #[test]
    fn win32_and_winsock_ranges_are_disjoint() {
        for &(code, _) in WINSOCK_TABLE {
            assert_eq!(from_win32(code as u32), None, "wsa error {code}");
        }
        for &(code, _) in WIN32_TABLE {
            assert_eq!(from_winsock(code as i32), None, "win32 error {code}");
        }
    }

    #[test]
    fn unknown_codes_are_violations() {
        let code = win32::ERROR_INVALID_SIGNAL_NUMBER as i32;
        assert_eq!(
            Windows::try_normalize_error(code),
            Err(ContractViolation::UnknownErrno {
                platform: "windows",
                code,
            })
        );
    }

    #[test]
    #[should_panic(expected = "has no canonical errno on windows")]
    fn unknown_code_aborts() {
        Windows::normalize_error(-1);
    }

    #[test]
    fn resolver_errors_use_winsock_codes() {
        assert_eq!(
            Windows::normalize_name_resolution_error(ws::WSAHOST_NOT_FOUND),
            Errno::AiNoname
        );
        assert_eq!(
            Windows::normalize_name_resolution_error(ws::WSATRY_AGAIN),
            Errno::AiAgain
        );
        // Same number, different table.
        assert_eq!(Windows::normalize_error(ws::WSAEINVAL), Errno::Inval);
        assert_eq!(
            Windows::normalize_name_resolution_error(ws::WSAEINVAL),
            Errno::AiBadflag
        );
    }

    #[test]
    fn crt_mode_bits() {
        assert_eq!(Windows::from_file_mode(crt::S_IFREG | 0o644), Filetype::RegularFile);
        assert_eq!(Windows::from_file_mode(crt::S_IFDIR | 0o755), Filetype::Directory);
        assert_eq!(Windows::from_file_mode(crt::S_IFCHR), Filetype::CharacterDevice);
        assert_eq!(Windows::from_file_mode(crt::S_IFIFO), Filetype::Unknown);
        assert_eq!(Windows::from_file_mode(0), Filetype::Unknown);
    }

    #[test]
    fn attribute_precedence() {
        use windows_sys::Win32::Storage::FileSystem::{
            FILE_ATTRIBUTE_ARCHIVE, FILE_ATTRIBUTE_NORMAL,
        };

        assert_eq!(
            Windows::from_dir_entry_tag(FILE_ATTRIBUTE_DIRECTORY | FILE_ATTRIBUTE_REPARSE_POINT),
            Filetype::SymbolicLink
        );
        assert_eq!(
            Windows::from_dir_entry_tag(FILE_ATTRIBUTE_DIRECTORY),
            Filetype::Directory
        );
        assert_eq!(
            Windows::from_dir_entry_tag(FILE_ATTRIBUTE_NORMAL),
            Filetype::RegularFile
        );
        assert_eq!(
            Windows::from_dir_entry_tag(FILE_ATTRIBUTE_ARCHIVE),
            Filetype::RegularFile
        );
        assert_eq!(
            Windows::from_dir_entry_tag(INVALID_FILE_ATTRIBUTES),
            Filetype::Unknown
        );
    }

    #[test]
    fn whence_uses_move_methods() {
        assert_eq!(Windows::to_host_whence(Whence::Set), FILE_BEGIN);
        assert_eq!(Windows::to_host_whence(Whence::Cur), FILE_CURRENT);
        assert_eq!(Windows::to_host_whence(Whence::End), FILE_END);
    }

    #[test]
    fn clocks_are_distinct() {
        let clocks: Vec<_> = Clockid::ALL.iter().map(|c| Windows::to_host_clock(*c)).collect();
        assert_eq!(
            clocks,
            vec![
                HostClock::SystemTime,
                HostClock::PerformanceCounter,
                HostClock::ProcessTimes,
                HostClock::ThreadTimes,
            ]
        );
    }

    #[test]
    fn filetime_epoch_and_truncation() {
        let epoch = Windows::to_filetime(0);
        let ticks = (u64::from(epoch.dwHighDateTime) << 32) | u64::from(epoch.dwLowDateTime);
        assert_eq!(ticks, FILETIME_UNIX_EPOCH);

        assert_eq!(
            Windows::from_filetime(&Windows::to_filetime(1_500_000_250)),
            1_500_000_200
        );
        assert_eq!(
            Windows::from_filetime(&FILETIME {
                dwLowDateTime: 0,
                dwHighDateTime: 0,
            }),
            0
        );
    }

    #[test]
    fn probes_running_release() {
        let version = HostProbe.probe().expect("RtlGetVersion");
        assert!(version.major >= 6, "{version}");
    }
}
