//! Feature resolution engine.
//!
//! Given the dependency graphs of a project's managed artifacts and the set of
//! public platform features, finds for a dependency pattern the public feature
//! that most of the pattern's dependency paths lead to: nearest public
//! ancestor per path, counts merged across feature versions, ties reported as
//! conflicts.

pub mod aggregate;
pub mod ancestor;
pub mod conflict;
pub mod graph;
pub mod membership;
pub mod pattern;
pub mod resolver;
pub mod source;
pub mod tally;
pub mod version;

pub use resolver::{resolve, Resolver};
