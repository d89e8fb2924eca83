//! Adapter implementations for port traits
//!
//! Concrete implementations that perform I/O:
//!
//! - `fs/` - Glob expansion and existence checks on the host filesystem

pub mod fs;
