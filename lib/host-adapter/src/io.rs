use std::io;

use wasi_host_types::Errno;

use crate::HostPlatform;

/// Converts an [`io::Error`] into a canonical code.
///
/// Errors carrying a raw OS code go through the platform's closed table.
/// Errors synthesised by the standard library have no code and are mapped
/// by kind, with anything inconvertible reported as [`Errno::Io`].
#[track_caller]
pub fn normalize_io_error<P: HostPlatform>(err: &io::Error) -> Errno {
    if let Some(code) = err.raw_os_error() {
        return P::normalize_error(code);
    }
    match err.kind() {
        io::ErrorKind::AddrInUse => Errno::Addrinuse,
        io::ErrorKind::AddrNotAvailable => Errno::Addrnotavail,
        io::ErrorKind::AlreadyExists => Errno::Exist,
        io::ErrorKind::BrokenPipe => Errno::Pipe,
        io::ErrorKind::ConnectionAborted => Errno::Connaborted,
        io::ErrorKind::ConnectionRefused => Errno::Connrefused,
        io::ErrorKind::ConnectionReset => Errno::Connreset,
        io::ErrorKind::Interrupted => Errno::Intr,
        io::ErrorKind::InvalidInput => Errno::Inval,
        io::ErrorKind::NotConnected => Errno::Notconn,
        io::ErrorKind::NotFound => Errno::Noent,
        io::ErrorKind::OutOfMemory => Errno::Nomem,
        io::ErrorKind::PermissionDenied => Errno::Access,
        io::ErrorKind::TimedOut => Errno::Timedout,
        io::ErrorKind::Unsupported => Errno::Notsup,
        io::ErrorKind::WouldBlock => Errno::Again,
        kind => {
            tracing::debug!(?kind, error = %err, "inconvertible I/O error");
            Errno::Io
        }
    }
}
