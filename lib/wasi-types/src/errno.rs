use num_enum::{IntoPrimitive, TryFromPrimitive};
#[cfg(feature = "enable-serde")]
use serde::{Deserialize, Serialize};

macro_rules! errnos {
    ($($variant:ident = $code:literal, $name:literal, $message:literal;)*) => {
        /// Error codes returned by functions.
        ///
        /// Codes `0..=76` follow `wasi_snapshot_preview1`; codes starting at
        /// `77` report name-resolution (`getaddrinfo`) failures, which live in
        /// a numbering space of their own on every host.
        #[repr(u16)]
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, TryFromPrimitive, IntoPrimitive)]
        #[cfg_attr(feature = "enable-serde", derive(Serialize, Deserialize))]
        pub enum Errno {
            $(
                #[doc = $message]
                $variant = $code,
            )*
        }

        impl Errno {
            /// Every canonical code, in ascending numeric order.
            pub const ALL: &'static [Errno] = &[$(Errno::$variant,)*];

            pub fn name(&self) -> &'static str {
                match self {
                    $(Errno::$variant => $name,)*
                }
            }

            pub fn message(&self) -> &'static str {
                match self {
                    $(Errno::$variant => $message,)*
                }
            }
        }
    };
}

errnos! {
    Success = 0, "success", "No error occurred. System call completed successfully.";
    Toobig = 1, "toobig", "Argument list too long.";
    Access = 2, "access", "Permission denied.";
    Addrinuse = 3, "addrinuse", "Address in use.";
    Addrnotavail = 4, "addrnotavail", "Address not available.";
    Afnosupport = 5, "afnosupport", "Address family not supported.";
    Again = 6, "again", "Resource unavailable, or operation would block.";
    Already = 7, "already", "Connection already in progress.";
    Badf = 8, "badf", "Bad file descriptor.";
    Badmsg = 9, "badmsg", "Bad message.";
    Busy = 10, "busy", "Device or resource busy.";
    Canceled = 11, "canceled", "Operation canceled.";
    Child = 12, "child", "No child processes.";
    Connaborted = 13, "connaborted", "Connection aborted.";
    Connrefused = 14, "connrefused", "Connection refused.";
    Connreset = 15, "connreset", "Connection reset.";
    Deadlk = 16, "deadlk", "Resource deadlock would occur.";
    Destaddrreq = 17, "destaddrreq", "Destination address required.";
    Dom = 18, "dom", "Mathematics argument out of domain of function.";
    Dquot = 19, "dquot", "Reserved.";
    Exist = 20, "exist", "File exists.";
    Fault = 21, "fault", "Bad address.";
    Fbig = 22, "fbig", "File too large.";
    Hostunreach = 23, "hostunreach", "Host is unreachable.";
    Idrm = 24, "idrm", "Identifier removed.";
    Ilseq = 25, "ilseq", "Illegal byte sequence.";
    Inprogress = 26, "inprogress", "Operation in progress.";
    Intr = 27, "intr", "Interrupted function.";
    Inval = 28, "inval", "Invalid argument.";
    Io = 29, "io", "I/O error.";
    Isconn = 30, "isconn", "Socket is connected.";
    Isdir = 31, "isdir", "Is a directory.";
    Loop = 32, "loop", "Too many levels of symbolic links.";
    Mfile = 33, "mfile", "File descriptor value too large.";
    Mlink = 34, "mlink", "Too many links.";
    Msgsize = 35, "msgsize", "Message too large.";
    Multihop = 36, "multihop", "Reserved.";
    Nametoolong = 37, "nametoolong", "Filename too long.";
    Netdown = 38, "netdown", "Network is down.";
    Netreset = 39, "netreset", "Connection aborted by network.";
    Netunreach = 40, "netunreach", "Network unreachable.";
    Nfile = 41, "nfile", "Too many files open in system.";
    Nobufs = 42, "nobufs", "No buffer space available.";
    Nodev = 43, "nodev", "No such device.";
    Noent = 44, "noent", "No such file or directory.";
    Noexec = 45, "noexec", "Executable file format error.";
    Nolck = 46, "nolck", "No locks available.";
    Nolink = 47, "nolink", "Reserved.";
    Nomem = 48, "nomem", "Not enough space.";
    Nomsg = 49, "nomsg", "No message of the desired type.";
    Noprotoopt = 50, "noprotoopt", "Protocol not available.";
    Nospc = 51, "nospc", "No space left on device.";
    Nosys = 52, "nosys", "Function not supported.";
    Notconn = 53, "notconn", "The socket is not connected.";
    Notdir = 54, "notdir", "Not a directory or a symbolic link to a directory.";
    Notempty = 55, "notempty", "Directory not empty.";
    Notrecoverable = 56, "notrecoverable", "State not recoverable.";
    Notsock = 57, "notsock", "Not a socket.";
    Notsup = 58, "notsup", "Not supported, or operation not supported on socket.";
    Notty = 59, "notty", "Inappropriate I/O control operation.";
    Nxio = 60, "nxio", "No such device or address.";
    Overflow = 61, "overflow", "Value too large to be stored in data type.";
    Ownerdead = 62, "ownerdead", "Previous owner died.";
    Perm = 63, "perm", "Operation not permitted.";
    Pipe = 64, "pipe", "Broken pipe.";
    Proto = 65, "proto", "Protocol error.";
    Protonosupport = 66, "protonosupport", "Protocol not supported.";
    Prototype = 67, "prototype", "Protocol wrong type for socket.";
    Range = 68, "range", "Result too large.";
    Rofs = 69, "rofs", "Read-only file system.";
    Spipe = 70, "spipe", "Invalid seek.";
    Srch = 71, "srch", "No such process.";
    Stale = 72, "stale", "Reserved.";
    Timedout = 73, "timedout", "Connection timed out.";
    Txtbsy = 74, "txtbsy", "Text file busy.";
    Xdev = 75, "xdev", "Cross-device link.";
    Notcapable = 76, "notcapable", "Extension: Capabilities insufficient.";
    AiAddrfamily = 77, "aiaddrfamily", "Address family for hostname not supported.";
    AiAgain = 78, "aiagain", "Temporary failure in name resolution.";
    AiBadflag = 79, "aibadflag", "Invalid value for name resolution flags.";
    AiFail = 80, "aifail", "Non-recoverable failure in name resolution.";
    AiFamily = 81, "aifamily", "Address family not supported by name resolution.";
    AiMemory = 82, "aimemory", "Memory allocation failure during name resolution.";
    AiNodata = 83, "ainodata", "No address associated with hostname.";
    AiNoname = 84, "ainoname", "Hostname or service not known.";
    AiService = 85, "aiservice", "Service not supported for socket type.";
    AiSocktype = 86, "aisocktype", "Socket type not supported.";
    AiSystem = 87, "aisystem", "System error during name resolution.";
}

impl Errno {
    /// Whether this code belongs to the name-resolution range.
    pub fn is_name_resolution(&self) -> bool {
        *self >= Errno::AiAddrfamily
    }
}

impl core::fmt::Debug for Errno {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Errno")
            .field("code", &(*self as u16))
            .field("name", &self.name())
            .field("message", &self.message())
            .finish()
    }
}

impl core::fmt::Display for Errno {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} (error {})", self.name(), *self as u16)
    }
}

impl std::error::Error for Errno {}
