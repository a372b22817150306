use std::collections::BTreeSet;

use featgen_core::coordinate::Coordinate;
use featgen_core::units::PublicUnitSet;

/// A source of public feature names and feature-defined artifacts.
pub trait FeatureCatalog: Send + Sync {
    /// Names of the features the platform exposes for direct use.
    fn list_public_unit_names(&self) -> miette::Result<PublicUnitSet>;

    /// Every artifact some feature definition ships, de-duplicated.
    fn list_capability_unit_definitions(&self) -> miette::Result<BTreeSet<Coordinate>>;
}

/// A catalog over fixed, already known sets.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    public_units: PublicUnitSet,
    definitions: BTreeSet<Coordinate>,
}

impl InMemoryCatalog {
    pub fn new<I>(public_units: PublicUnitSet, definitions: I) -> Self
    where
        I: IntoIterator<Item = Coordinate>,
    {
        Self {
            public_units,
            definitions: definitions.into_iter().collect(),
        }
    }
}

impl FeatureCatalog for InMemoryCatalog {
    fn list_public_unit_names(&self) -> miette::Result<PublicUnitSet> {
        Ok(self.public_units.clone())
    }

    fn list_capability_unit_definitions(&self) -> miette::Result<BTreeSet<Coordinate>> {
        Ok(self.definitions.clone())
    }
}
