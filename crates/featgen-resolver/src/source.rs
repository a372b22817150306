//! Sources of collected dependency graphs.
//!
//! Building a graph means resolving descriptors against artifact repositories,
//! which is left to the embedding build tool. The resolver only needs a way to
//! ask for the graph rooted at one artifact.

use std::collections::HashMap;
use std::path::Path;

use featgen_core::coordinate::Coordinate;
use featgen_util::errors::FeatgenError;

use crate::graph::DependencyGraph;

/// Supplies the dependency graph rooted at an artifact.
pub trait GraphSource: Send + Sync {
    fn collect(&self, artifact: &Coordinate) -> miette::Result<DependencyGraph>;
}

/// Collect one graph per artifact, skipping artifacts whose collection fails.
///
/// A failure degrades the analysis but does not abort it; it is logged and the
/// remaining artifacts are still collected.
pub fn collect_graphs<S>(source: &S, artifacts: &[Coordinate]) -> Vec<DependencyGraph>
where
    S: GraphSource + ?Sized,
{
    let mut graphs = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        match source.collect(artifact) {
            Ok(graph) => graphs.push(graph),
            Err(e) => tracing::error!("Could not collect dependencies of {artifact}: {e}"),
        }
    }
    tracing::debug!("Collected {} of {} dependency graphs", graphs.len(), artifacts.len());
    graphs
}

/// Graphs held in memory, keyed by root artifact.
#[derive(Debug, Clone, Default)]
pub struct StaticGraphSource {
    graphs: HashMap<Coordinate, DependencyGraph>,
}

impl StaticGraphSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, artifact: Coordinate, graph: DependencyGraph) {
        self.graphs.insert(artifact, graph);
    }

    /// Load `<dir>/<group>/<name>/<version>.json` graph documents for `artifacts`.
    /// Missing files are left out, so collecting them later reports a failure.
    pub fn load_dir(dir: &Path, artifacts: &[Coordinate]) -> miette::Result<Self> {
        let mut source = Self::new();
        for artifact in artifacts {
            let path = dir
                .join(&artifact.group)
                .join(&artifact.name)
                .join(format!("{}.json", artifact.version));
            if !path.is_file() {
                continue;
            }
            let json = std::fs::read_to_string(&path).map_err(FeatgenError::Io)?;
            source.insert(artifact.clone(), DependencyGraph::from_json(&json)?);
        }
        Ok(source)
    }

    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }
}

impl GraphSource for StaticGraphSource {
    fn collect(&self, artifact: &Coordinate) -> miette::Result<DependencyGraph> {
        self.graphs.get(artifact).cloned().ok_or_else(|| {
            FeatgenError::GraphCollection {
                artifact: artifact.to_string(),
                message: "no dependency graph available".to_string(),
            }
            .into()
        })
    }
}
