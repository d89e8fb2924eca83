//! Core domain logic for glob expansion
//!
//! This module contains the transformation itself. All filesystem
//! interaction is abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Directive, NamespaceStrategy, IgnoreSet, Warning)
//! - `services/` - Scanning, resolution and rewriting
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
