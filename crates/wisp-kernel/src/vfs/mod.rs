//! Virtual Filesystem (VFS) for wisp.
//!
//! A unified read-only interface over listing backends:
//!
//! - **LocalFs**: real filesystem access beneath a root directory
//! - **MemoryFs**: in-memory ephemeral tree (tests and scratch data)
//!
//! The resolver only ever lists one directory level at a time, so the trait
//! surface is deliberately small: `list`, `stat`, `exists`.

mod local;
mod memory;
mod traits;

pub use local::LocalFs;
pub use memory::MemoryFs;
pub use traits::{DirEntry, EntryType, Filesystem, Metadata};
