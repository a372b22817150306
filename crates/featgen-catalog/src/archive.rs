//! Java package listing of artifact archives.

use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;

use featgen_util::errors::FeatgenError;
use zip::ZipArchive;

/// Packages (`a/b/c`) of every class file in the archive at `path`.
///
/// Classes in the default package have no package and are left out.
pub fn package_names(path: &Path) -> miette::Result<BTreeSet<String>> {
    let file = File::open(path).map_err(FeatgenError::Io)?;
    let mut archive = ZipArchive::new(file).map_err(|e| FeatgenError::Archive {
        message: format!("{}: {e}", path.display()),
    })?;

    let mut packages = BTreeSet::new();
    for i in 0..archive.len() {
        let entry = archive.by_index_raw(i).map_err(|e| FeatgenError::Archive {
            message: format!("{}: {e}", path.display()),
        })?;
        if entry.is_dir() {
            continue;
        }
        if let Some(package) = class_package(entry.name()) {
            packages.insert(package.to_string());
        }
    }
    tracing::info!("Packages: {packages:?}");
    Ok(packages)
}

fn class_package(entry_name: &str) -> Option<&str> {
    if !entry_name.ends_with(".class") {
        return None;
    }
    entry_name.rsplit_once('/').map(|(package, _)| package)
}
