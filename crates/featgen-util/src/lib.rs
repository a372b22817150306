//! Shared utilities for featgen.
//!
//! This crate provides the cross-cutting concerns used by all other featgen
//! crates: the unified error type and filesystem helpers.

pub mod errors;
pub mod fs;
