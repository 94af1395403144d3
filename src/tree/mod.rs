//! Directory tree building
//!
//! `TreeBuilder` walks a starting path once and produces an immutable
//! [`Node`] tree whose directory sizes are aggregated bottom-up. The
//! filesystem is reached through the [`Filesystem`] trait so the walk can be
//! driven by something other than the host filesystem.

mod builder;
mod config;
mod fs;
mod node;
mod utils;

pub use builder::{Scan, TreeBuilder};
pub use config::BuildConfig;
pub use fs::{EntryType, Filesystem, HostFs};
pub use node::{Node, NodeKind, Walk};
pub use utils::{format_size, serialize_path_lossy};
