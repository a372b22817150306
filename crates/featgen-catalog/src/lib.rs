//! Where feature names and feature-defined artifacts come from.
//!
//! The resolver works against a [`PublicUnitSet`](featgen_core::units::PublicUnitSet)
//! and a set of artifact coordinates; this crate produces both from a platform
//! source checkout, and lists the packages shipped in an artifact archive.

pub mod archive;
pub mod catalog;
pub mod checkout;
pub mod descriptor;

pub use catalog::{FeatureCatalog, InMemoryCatalog};
pub use checkout::CheckoutCatalog;
