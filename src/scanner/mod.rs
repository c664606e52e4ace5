//! Repository discovery
//!
//! Recursive walk over a directory tree that collects every directory
//! directly containing git metadata, pruning dependency caches and honoring
//! a recursion-depth bound. Unreadable directories are skipped, never fatal.

pub mod filter;
pub mod types;
pub mod walker;

pub use filter::PathFilter;
pub use types::RepoRoot;
pub use walker::RepoWalker;
