//! Core data types for featgen.
//!
//! This crate defines the types shared by the resolver, the feature catalog
//! and the high-level operations: Maven coordinates, the public feature set,
//! lookup-table entries produced by feature resolution and the global
//! configuration.
//!
//! Nothing here is async or scans the filesystem.

/// Maven group under which the platform publishes its public features.
pub const DEFAULT_FEATURE_GROUP: &str = "io.openliberty.features";

pub mod config;
pub mod coordinate;
pub mod lookup;
pub mod units;
