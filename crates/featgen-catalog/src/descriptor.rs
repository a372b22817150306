//! Extraction of artifact coordinates from feature descriptor files.
//!
//! A descriptor names the artifacts its feature ships through
//! `mavenCoordinates="group:name:version"` attributes; the rest of the file is
//! irrelevant here and is not parsed.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::OnceLock;

use featgen_core::coordinate::Coordinate;
use featgen_util::errors::FeatgenError;
use regex::Regex;

/// File name suffix of feature descriptors.
pub const DESCRIPTOR_SUFFIX: &str = ".feature";

fn coordinates_attribute() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"mavenCoordinates="([^"]*)""#).expect("static regex is valid")
    })
}

/// Every coordinate declared in `content`, in order of appearance.
///
/// A value that is not exactly `group:name:version` is an error.
pub fn parse_coordinates(content: &str) -> Result<Vec<Coordinate>, FeatgenError> {
    coordinates_attribute()
        .captures_iter(content)
        .map(|caps| Coordinate::parse(&caps[1]))
        .collect()
}

/// Read one descriptor and add its coordinates to `into`.
pub fn read_descriptor(path: &Path, into: &mut BTreeSet<Coordinate>) -> miette::Result<()> {
    let content = std::fs::read_to_string(path).map_err(FeatgenError::Io)?;
    for coordinate in parse_coordinates(&content)? {
        tracing::debug!("File {} has mavenCoordinates {coordinate}", path.display());
        into.insert(coordinate);
    }
    Ok(())
}
