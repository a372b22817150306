//! Operation: build the feature lookup table.
//!
//! Every artifact some feature definition ships is resolved, as a dependency
//! pattern, against the dependency graphs of the platform's managed artifacts.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use featgen_catalog::archive::package_names;
use featgen_catalog::FeatureCatalog;
use featgen_core::config::ResolveConfig;
use featgen_core::coordinate::Coordinate;
use featgen_core::lookup::{LookupTable, ResolutionResult};
use featgen_core::units::PublicUnitSet;
use featgen_resolver::graph::DependencyGraph;
use featgen_resolver::pattern::ArtifactPattern;
use featgen_resolver::source::{collect_graphs, GraphSource};
use featgen_resolver::Resolver;

/// Locates the archive file of an artifact, for package listing.
pub type ArchiveLocator = Arc<dyn Fn(&Coordinate) -> miette::Result<PathBuf> + Send + Sync>;

/// Options for building a lookup table.
#[derive(Clone, Default)]
pub struct LookupOptions {
    pub resolve: ResolveConfig,
    /// Used when `resolve.package_names` is set.
    pub archives: Option<ArchiveLocator>,
}

/// Build the lookup table: one row per feature-defined artifact, in sorted
/// artifact order.
///
/// Fails only when the catalog cannot be read. Artifacts whose dependency
/// graph cannot be collected are left out of the analysis.
pub async fn build_lookup_table(
    catalog: &dyn FeatureCatalog,
    source: &dyn GraphSource,
    managed: &[Coordinate],
    opts: &LookupOptions,
) -> miette::Result<LookupTable> {
    let public_units = Arc::new(catalog.list_public_unit_names()?);
    tracing::info!("Public features: {}", public_units.len());
    let definitions: Vec<Coordinate> =
        catalog.list_capability_unit_definitions()?.into_iter().collect();

    let graphs = Arc::new(collect_graphs(source, managed));

    let mut patterns = Vec::with_capacity(definitions.len());
    for definition in &definitions {
        let raw = definition.inclusion_pattern();
        match ArtifactPattern::parse(&raw) {
            Ok(pattern) => patterns.push(Some(pattern)),
            Err(e) => {
                tracing::warn!("Skipping resolution of {definition}: {e}");
                patterns.push(None);
            }
        }
    }

    let resolved = resolve_all(patterns, graphs, public_units, &opts.resolve).await?;
    let mut entries = Vec::with_capacity(resolved.len());
    for (definition, result) in definitions.iter().zip(resolved) {
        let result = result.unwrap_or_else(|| {
            ResolutionResult::unresolved(definition.inclusion_pattern())
        });
        entries.push(attach_package_names(result, definition, opts));
    }

    let table = LookupTable::new(entries);
    tracing::info!(
        "Lookup table: {} entries, {} resolved, {} with conflicts",
        table.len(),
        table.resolved().count(),
        table.conflicting().count()
    );
    Ok(table)
}

/// Resolve caller-supplied patterns against already collected graphs.
///
/// Results are returned in the order of `patterns`. An unparsable pattern
/// fails the whole call before any resolution starts.
pub async fn resolve_patterns(
    patterns: &[String],
    graphs: Arc<Vec<DependencyGraph>>,
    public_units: Arc<PublicUnitSet>,
    config: &ResolveConfig,
) -> miette::Result<Vec<ResolutionResult>> {
    let parsed = patterns
        .iter()
        .map(|p| ArtifactPattern::parse(p).map(Some))
        .collect::<Result<Vec<_>, _>>()?;
    let resolved = resolve_all(parsed, graphs, public_units, config).await?;
    Ok(resolved.into_iter().flatten().collect())
}

/// Run one blocking resolution per pattern, at most `config.jobs` at a time.
/// `None` patterns produce `None` results in the same position.
async fn resolve_all(
    patterns: Vec<Option<ArtifactPattern>>,
    graphs: Arc<Vec<DependencyGraph>>,
    public_units: Arc<PublicUnitSet>,
    config: &ResolveConfig,
) -> miette::Result<Vec<Option<ResolutionResult>>> {
    let semaphore = Arc::new(Semaphore::new(config.jobs.max(1) as usize));
    let policy = config.unversioned;
    let mut join_set = JoinSet::new();
    let mut results: Vec<Option<ResolutionResult>> = vec![None; patterns.len()];

    for (idx, pattern) in patterns.into_iter().enumerate() {
        let Some(pattern) = pattern else { continue };
        let graphs = graphs.clone();
        let public_units = public_units.clone();
        let permit = semaphore
            .clone()
            .acquire_owned()
            .await
            .map_err(|e| miette::miette!("Resolution pool closed: {}", e))?;

        join_set.spawn_blocking(move || {
            let _permit = permit;
            let resolver = Resolver::with_policy(&public_units, policy);
            (idx, resolver.resolve_pattern(&pattern, &graphs))
        });
    }

    while let Some(joined) = join_set.join_next().await {
        let (idx, result) =
            joined.map_err(|e| miette::miette!("Background task failed: {}", e))?;
        results[idx] = Some(result);
    }
    Ok(results)
}

fn attach_package_names(
    result: ResolutionResult,
    definition: &Coordinate,
    opts: &LookupOptions,
) -> ResolutionResult {
    let Some(ref locate) = opts.archives else {
        return result;
    };
    if !opts.resolve.package_names {
        return result;
    }
    match locate(definition).and_then(|path| package_names(&path)) {
        Ok(packages) => result.with_package_names(packages),
        Err(e) => {
            tracing::warn!("Could not list packages of {definition}: {e}");
            result
        }
    }
}
