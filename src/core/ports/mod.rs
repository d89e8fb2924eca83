//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the expansion core and the
//! filesystem. Implementations live in the `adapters` module.
//!
//! The core depends only on these traits, so unit tests can drive it with
//! mock or in-memory trees.

mod filesystem;

pub use filesystem::FileSystem;

#[cfg(test)]
pub use filesystem::MockFileSystem;
