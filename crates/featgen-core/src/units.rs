//! The set of feature names a platform exposes for direct use.

use std::collections::BTreeSet;

use featgen_util::errors::FeatgenError;

/// Names of the public features of the target platform.
///
/// Never empty: an empty listing almost always means the platform checkout is
/// missing or incomplete, and resolving against it would silently report
/// every dependency as unresolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicUnitSet {
    names: BTreeSet<String>,
}

impl PublicUnitSet {
    /// Build the set, failing when no names are supplied.
    pub fn new<I, S>(names: I) -> Result<Self, FeatgenError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(FeatgenError::Catalog {
                message: "no public features were found".to_string(),
            });
        }
        Ok(Self { names })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn names(&self) -> &BTreeSet<String> {
        &self.names
    }
}
