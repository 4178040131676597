#![deny(unused_mut)]

//! Canonical WASI ABI value types.
//!
//! Guest programs only ever observe the numeric values defined here, never
//! the host-native ones. Every platform backend of `wasi-host-adapter`
//! translates into and out of these types, so their discriminants must stay
//! stable across releases and platforms.

mod errno;
mod file;
mod time;

pub use crate::errno::*;
pub use crate::file::*;
pub use crate::time::*;
