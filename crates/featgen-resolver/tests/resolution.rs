use std::collections::BTreeSet;

use featgen_core::config::{ResolveConfig, UnversionedPolicy};
use featgen_core::coordinate::Coordinate;
use featgen_core::units::PublicUnitSet;
use featgen_resolver::aggregate::aggregate_by_base_name;
use featgen_resolver::ancestor::resolve_occurrences;
use featgen_resolver::conflict::select;
use featgen_resolver::graph::{DependencyGraph, DependencyPath};
use featgen_resolver::membership::missing_active_units;
use featgen_resolver::tally::OccurrenceTally;
use featgen_resolver::{resolve, Resolver};

const FEATURES: &str = "io.openliberty.features";

fn feature(name: &str) -> Coordinate {
    Coordinate::new(FEATURES, name, "21.0.0.3")
}

fn bundle(name: &str) -> Coordinate {
    Coordinate::new("com.ibm.ws", name, "1.0")
}

fn units(names: &[&str]) -> PublicUnitSet {
    PublicUnitSet::new(names.iter().copied()).unwrap()
}

fn set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// `servlet-4.0 -> servlet.impl -> shared`, `jsp-2.3 -> jsp.impl -> shared`,
/// `jsp-2.2 -> shared`, `webProfile-8.0 -> servlet-4.0 (again)`.
fn platform_graph() -> DependencyGraph {
    let mut g = DependencyGraph::new();
    let servlet = g.add_root(feature("servlet-4.0"));
    let servlet_impl = g.add_node(bundle("servlet.impl"));
    let shared_a = g.add_node(bundle("shared"));
    g.add_edge(servlet, servlet_impl);
    g.add_edge(servlet_impl, shared_a);

    let jsp = g.add_root(feature("jsp-2.3"));
    let jsp_impl = g.add_node(bundle("jsp.impl"));
    let shared_b = g.add_node(bundle("shared"));
    g.add_edge(jsp, jsp_impl);
    g.add_edge(jsp_impl, shared_b);

    let old_jsp = g.add_root(feature("jsp-2.2"));
    let shared_c = g.add_node(bundle("shared"));
    g.add_edge(old_jsp, shared_c);

    let web = g.add_root(feature("webProfile-8.0"));
    let nested_servlet = g.add_node(feature("servlet-4.0"));
    let shared_d = g.add_node(bundle("shared"));
    g.add_edge(web, nested_servlet);
    g.add_edge(nested_servlet, shared_d);
    g
}

fn public() -> PublicUnitSet {
    units(&["servlet-4.0", "jsp-2.2", "jsp-2.3", "webProfile-8.0"])
}

#[test]
fn test_zero_matching_nodes_is_unresolved() {
    let result = resolve(
        "com.ibm.ws:nothing",
        &[platform_graph()],
        &public(),
        &ResolveConfig::default(),
    )
    .unwrap();
    assert_eq!(result.resolved_unit, None);
    assert_eq!(result.occurrences, None);
}

#[test]
fn test_duplicated_artifacts_each_count() {
    let graphs = vec![platform_graph()];
    let result = resolve(
        "com.ibm.ws:shared::1.0",
        &graphs,
        &public(),
        &ResolveConfig::default(),
    )
    .unwrap();
    // servlet-4.0 twice (direct and below webProfile), jsp 2.3 + 2.2 merged.
    let occurrences = result.occurrences.clone().unwrap();
    assert_eq!(occurrences.get("servlet-4.0"), Some(&2));
    assert_eq!(occurrences.get("jsp-2.3"), Some(&2));
    assert_eq!(occurrences.len(), 2);
    assert_eq!(result.resolved_unit.as_deref(), Some("servlet-4.0"));
    assert_eq!(
        result.conflicts,
        Some(vec!["servlet-4.0".to_string(), "jsp-2.3".to_string()])
    );
}

#[test]
fn test_paths_from_several_graphs_are_combined() {
    let mut first = DependencyGraph::new();
    let root = first.add_root(feature("jsp-2.3"));
    let leaf = first.add_node(bundle("el.impl"));
    first.add_edge(root, leaf);

    let mut second = DependencyGraph::new();
    let root = second.add_root(feature("el-3.0"));
    let leaf = second.add_node(bundle("el.impl"));
    second.add_edge(root, leaf);
    let root = second.add_root(feature("el-3.0"));
    let leaf = second.add_node(bundle("el.impl"));
    second.add_edge(root, leaf);

    let public = units(&["jsp-2.3", "el-3.0"]);
    let resolver = Resolver::new(&public, &ResolveConfig::default());
    let result = resolver.resolve_matching("el", &[first, second], |c| c.name == "el.impl");
    assert_eq!(result.resolved_unit.as_deref(), Some("el-3.0"));
    assert!(!result.has_conflicts());
}

#[test]
fn test_one_occurrence_per_path_even_with_public_parents() {
    let leaf = bundle("impl");
    let mid = feature("featureA");
    let root = feature("featureB");
    let path = DependencyPath::new(vec![&root, &mid, &leaf]);

    let tally = resolve_occurrences(&[path], &units(&["featureA", "featureB"]));
    let expected: OccurrenceTally = [("featureA", 1)].into_iter().collect();
    assert_eq!(tally, expected);
}

#[test]
fn test_aggregation_keeps_highest_version_and_sums() {
    let tally: OccurrenceTally = [("jsp-2.2", 3), ("jsp-2.3", 1)].into_iter().collect();
    let merged = aggregate_by_base_name(&tally, UnversionedPolicy::Drop);
    let merged: Vec<(String, u32)> = merged.to_map().into_iter().collect();
    assert_eq!(merged, vec![("jsp-2.3".to_string(), 4)]);
}

#[test]
fn test_aggregation_is_idempotent() {
    let tally: OccurrenceTally = [
        ("jsp-2.2", 3),
        ("servlet-3.1", 1),
        ("jsp-2.3", 1),
        ("servlet-4.0", 2),
    ]
    .into_iter()
    .collect();
    let once = aggregate_by_base_name(&tally, UnversionedPolicy::Drop);
    let twice = aggregate_by_base_name(&once, UnversionedPolicy::Drop);
    assert_eq!(once, twice);
}

#[test]
fn test_equal_counts_conflict() {
    let tally: OccurrenceTally = [("servlet-4.0", 2), ("jsp-2.3", 2)].into_iter().collect();
    let selection = select(&tally);
    let conflicts: BTreeSet<String> = selection.conflicts.unwrap().into_iter().collect();
    assert_eq!(conflicts, set(&["servlet-4.0", "jsp-2.3"]));
    let resolved = selection.resolved_unit.unwrap();
    assert!(conflicts.contains(&resolved));
    assert_eq!(select(&tally).resolved_unit.unwrap(), resolved);
}

#[test]
fn test_already_active_features_are_not_missing() {
    let missing = missing_active_units(&set(&["servlet-4.0", "jsp-2.3"]), &set(&["servlet-4.0"]));
    assert_eq!(missing, set(&["jsp-2.3"]));

    let missing = missing_active_units(&set(&["Servlet-4.0", "jsp-2.3"]), &set(&["SERVLET-4.0"]));
    assert_eq!(missing, set(&["jsp-2.3"]));
}
