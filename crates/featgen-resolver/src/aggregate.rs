//! Merging of occurrence counts across versions of the same feature.

use std::collections::HashMap;

use featgen_core::config::UnversionedPolicy;

use crate::tally::OccurrenceTally;
use crate::version::{split_feature_id, FeatureVersion};

/// Highest version and total occurrences for one feature base name.
struct VersionAndOccurrences {
    version: Option<FeatureVersion>,
    occurrences: u32,
}

/// Merge counts of identifiers sharing a base name into the highest version.
///
/// `jsp-2.2: 3` and `jsp-2.3: 1` become `jsp-2.3: 4`. Counts of an
/// unversioned identifier with the same base name are added to the versioned
/// entry. A base name seen only without a version is handled per `policy`.
/// Re-aggregating the output is a no-op.
pub fn aggregate_by_base_name(
    tally: &OccurrenceTally,
    policy: UnversionedPolicy,
) -> OccurrenceTally {
    let mut groups: Vec<(&str, VersionAndOccurrences)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for (id, count) in tally.iter() {
        let (base, version) = split_feature_id(id);
        let pos = *index.entry(base).or_insert_with(|| {
            groups.push((
                base,
                VersionAndOccurrences {
                    version: None,
                    occurrences: 0,
                },
            ));
            groups.len() - 1
        });
        let group = &mut groups[pos].1;
        group.occurrences += count;
        if let Some(version) = version {
            if group.version.as_ref().map_or(true, |highest| version > *highest) {
                group.version = Some(version);
            }
        }
    }

    let mut aggregated = OccurrenceTally::new();
    for (base, group) in groups {
        match (group.version, policy) {
            (Some(version), _) => aggregated.add(&format!("{base}-{version}"), group.occurrences),
            (None, UnversionedPolicy::PassThrough) => aggregated.add(base, group.occurrences),
            (None, UnversionedPolicy::Drop) => tracing::warn!(
                "Dropping feature {base} ({} occurrences): no numeric version suffix",
                group.occurrences
            ),
        }
    }
    aggregated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(entries: &[(&str, u32)]) -> OccurrenceTally {
        entries.iter().copied().collect()
    }

    #[test]
    fn versions_merge_into_highest() {
        let merged = aggregate_by_base_name(
            &tally(&[("jsp-2.2", 3), ("jsp-2.3", 1)]),
            UnversionedPolicy::Drop,
        );
        assert_eq!(merged, tally(&[("jsp-2.3", 4)]));
    }

    #[test]
    fn numeric_not_lexical_version_order() {
        let merged = aggregate_by_base_name(
            &tally(&[("cdi-2.10", 1), ("cdi-2.9", 1)]),
            UnversionedPolicy::Drop,
        );
        assert_eq!(merged, tally(&[("cdi-2.10", 2)]));
    }

    #[test]
    fn distinct_bases_stay_separate_in_first_seen_order() {
        let merged = aggregate_by_base_name(
            &tally(&[("servlet-4.0", 2), ("jsp-2.3", 2), ("servlet-3.1", 1)]),
            UnversionedPolicy::Drop,
        );
        let order: Vec<(&str, u32)> = merged.iter().collect();
        assert_eq!(order, vec![("servlet-4.0", 3), ("jsp-2.3", 2)]);
    }

    #[test]
    fn hyphenated_base_names_split_at_last_hyphen() {
        let merged = aggregate_by_base_name(
            &tally(&[("jakarta-ee-8.0", 1), ("jakarta-ee-9.1", 1)]),
            UnversionedPolicy::Drop,
        );
        assert_eq!(merged, tally(&[("jakarta-ee-9.1", 2)]));
    }

    #[test]
    fn unversioned_dropped_by_default() {
        let merged = aggregate_by_base_name(
            &tally(&[("jaxrsClient", 2), ("servlet-4.0", 1)]),
            UnversionedPolicy::Drop,
        );
        assert_eq!(merged, tally(&[("servlet-4.0", 1)]));
    }

    #[test]
    fn unversioned_passed_through_on_request() {
        let merged = aggregate_by_base_name(
            &tally(&[("jaxrsClient", 2), ("servlet-4.0", 1)]),
            UnversionedPolicy::PassThrough,
        );
        assert_eq!(merged, tally(&[("jaxrsClient", 2), ("servlet-4.0", 1)]));
    }

    #[test]
    fn unversioned_counts_join_versioned_sibling() {
        let merged = aggregate_by_base_name(
            &tally(&[("jsp", 1), ("jsp-2.3", 1)]),
            UnversionedPolicy::Drop,
        );
        assert_eq!(merged, tally(&[("jsp-2.3", 2)]));
    }

    #[test]
    fn empty_tally_stays_empty() {
        let merged = aggregate_by_base_name(&OccurrenceTally::new(), UnversionedPolicy::Drop);
        assert!(merged.is_empty());
    }
}
