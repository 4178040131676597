use num_enum::{IntoPrimitive, TryFromPrimitive};
#[cfg(feature = "enable-serde")]
use serde::{Deserialize, Serialize};

/// The type of a file descriptor or file.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "enable-serde", derive(Serialize, Deserialize))]
pub enum Filetype {
    /// The type of the file descriptor or file is unknown or is different from any of the other types specified.
    Unknown = 0,
    /// The file descriptor or file refers to a block device inode.
    BlockDevice = 1,
    /// The file descriptor or file refers to a character device inode.
    CharacterDevice = 2,
    /// The file descriptor or file refers to a directory inode.
    Directory = 3,
    /// The file descriptor or file refers to a regular file inode.
    RegularFile = 4,
    /// The file descriptor or file refers to a datagram socket.
    ///
    /// Part of the ABI numbering only: a stat mode or directory entry tag
    /// cannot tell datagram sockets apart, so no host adapter produces it.
    SocketDgram = 5,
    /// The file descriptor or file refers to a byte-stream socket.
    SocketStream = 6,
    /// The file refers to a symbolic link inode.
    SymbolicLink = 7,
}

// Not derived: num_enum treats a `#[default]` variant as a catch-all for
// `TryFrom`, which would accept every unassigned tag.
#[allow(clippy::derivable_impls)]
impl Default for Filetype {
    fn default() -> Self {
        Filetype::Unknown
    }
}

/// The position relative to which to set the offset of the file descriptor.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "enable-serde", derive(Serialize, Deserialize))]
pub enum Whence {
    /// Seek relative to start-of-file.
    Set = 0,
    /// Seek relative to current position.
    Cur = 1,
    /// Seek relative to end-of-file.
    End = 2,
}

impl Whence {
    pub const ALL: [Whence; 3] = [Whence::Set, Whence::Cur, Whence::End];
}
