//! Catalog read from an Open Liberty source checkout.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use featgen_core::config::PlatformConfig;
use featgen_core::coordinate::Coordinate;
use featgen_core::units::PublicUnitSet;
use featgen_util::errors::FeatgenError;
use featgen_util::fs::{collect_files_with_suffix, list_subdirectory_names};

use crate::catalog::FeatureCatalog;
use crate::descriptor::{read_descriptor, DESCRIPTOR_SUFFIX};

/// Directory under the visibility directory holding one subdirectory per
/// public feature.
pub const PUBLIC_DIR: &str = "public";

/// The feature visibility tree of a platform checkout.
///
/// Public feature names are the subdirectory names of `<visibility>/public`;
/// definitions are collected from every descriptor anywhere below the
/// visibility directory.
#[derive(Debug, Clone)]
pub struct CheckoutCatalog {
    checkout: PathBuf,
    visibility: PathBuf,
}

impl CheckoutCatalog {
    pub fn new(checkout: impl Into<PathBuf>, visibility_dir: impl AsRef<Path>) -> Self {
        let checkout = checkout.into();
        let visibility = checkout.join(visibility_dir);
        Self {
            checkout,
            visibility,
        }
    }

    pub fn from_config(config: &PlatformConfig) -> Self {
        Self::new(&config.checkout, &config.visibility_dir)
    }

    pub fn visibility_path(&self) -> &Path {
        &self.visibility
    }

    fn ensure_visibility_dir(&self) -> Result<(), FeatgenError> {
        if self.visibility.is_dir() {
            return Ok(());
        }
        Err(FeatgenError::Catalog {
            message: format!(
                "{} does not exist. Ensure the open-liberty repository is cloned to {}",
                self.visibility.display(),
                self.checkout.display()
            ),
        })
    }
}

impl FeatureCatalog for CheckoutCatalog {
    fn list_public_unit_names(&self) -> miette::Result<PublicUnitSet> {
        self.ensure_visibility_dir()?;
        let public_dir = self.visibility.join(PUBLIC_DIR);
        let names = list_subdirectory_names(&public_dir).map_err(|e| FeatgenError::Catalog {
            message: format!("cannot list {}: {e}", public_dir.display()),
        })?;
        tracing::debug!("Public features: {names:?}");
        Ok(PublicUnitSet::new(names)?)
    }

    fn list_capability_unit_definitions(&self) -> miette::Result<BTreeSet<Coordinate>> {
        self.ensure_visibility_dir()?;
        let files = collect_files_with_suffix(&self.visibility, DESCRIPTOR_SUFFIX);
        tracing::info!("All features size {}", files.len());

        let mut definitions = BTreeSet::new();
        for file in &files {
            match read_descriptor(file, &mut definitions) {
                Ok(()) => {}
                Err(e) if is_read_failure(&e) => {
                    tracing::error!("Could not read file {}: {e}", file.display());
                }
                Err(e) => return Err(e),
            }
        }
        tracing::info!("Found {} feature-defined artifacts", definitions.len());
        Ok(definitions)
    }
}

fn is_read_failure(err: &miette::Report) -> bool {
    matches!(err.downcast_ref::<FeatgenError>(), Some(FeatgenError::Io(_)))
}
