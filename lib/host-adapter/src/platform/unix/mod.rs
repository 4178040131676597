//! Tables shared by the POSIX backends. The `libc` constants carry each
//! target's own numbering, so these bodies are valid on every unix family;
//! the error and clock tables differ per family and live in the submodules.

use libc::c_int;
use wasi_host_types::{Filetype, Whence};

#[cfg(any(target_os = "linux", target_os = "android"))]
pub mod linux;

#[cfg(target_vendor = "apple")]
pub mod darwin;

/// Classifies `st_mode`. FIFOs are reported as unknown.
pub(crate) fn file_type_from_mode(mode: libc::mode_t) -> Filetype {
    match mode & libc::S_IFMT {
        libc::S_IFBLK => Filetype::BlockDevice,
        libc::S_IFCHR => Filetype::CharacterDevice,
        libc::S_IFDIR => Filetype::Directory,
        libc::S_IFREG => Filetype::RegularFile,
        libc::S_IFSOCK => Filetype::SocketStream,
        libc::S_IFLNK => Filetype::SymbolicLink,
        _ => Filetype::Unknown,
    }
}

/// Classifies `dirent::d_type`. `DT_UNKNOWN` means the filesystem left the
/// type for a later `stat`; that and `DT_FIFO` are reported as unknown.
pub(crate) fn file_type_from_dirent(tag: u8) -> Filetype {
    match tag {
        libc::DT_BLK => Filetype::BlockDevice,
        libc::DT_CHR => Filetype::CharacterDevice,
        libc::DT_DIR => Filetype::Directory,
        libc::DT_LNK => Filetype::SymbolicLink,
        libc::DT_REG => Filetype::RegularFile,
        libc::DT_SOCK => Filetype::SocketStream,
        _ => Filetype::Unknown,
    }
}

pub(crate) fn seek_whence(whence: Whence) -> c_int {
    match whence {
        Whence::Set => libc::SEEK_SET,
        Whence::Cur => libc::SEEK_CUR,
        Whence::End => libc::SEEK_END,
    }
}
