//! Directory walking
//!
//! `DirectoryWalker::walk` lists one directory in partitioned order
//! (directories first, then files, listing order kept within each group).
//! `DirectoryWalker::traverse` drives a depth-first walk over a subtree and
//! feeds each entry to a `Renderer`.

mod config;
mod entry;
mod error;
mod traversal;
mod walker;

// Re-export public types
pub use config::{StatErrorPolicy, WalkerConfig};
pub use entry::{Entry, FileId, Position};
pub use error::WalkError;
pub use traversal::Renderer;
pub use walker::DirectoryWalker;
