//! Dependency graph storage and root-to-match path extraction.

use std::collections::HashMap;
use std::fmt;

use featgen_core::coordinate::Coordinate;
use featgen_util::errors::FeatgenError;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};

/// A collected dependency graph backed by petgraph.
///
/// Unlike a resolved classpath, nodes are not unique per coordinate: the same
/// artifact may sit at several positions, and each position is its own node.
/// A node may also be shared by several parents.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    graph: DiGraph<Coordinate, ()>,
    roots: Vec<NodeIndex>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node. Every call creates a new node, even for an equal coordinate.
    pub fn add_node(&mut self, coordinate: Coordinate) -> NodeIndex {
        self.graph.add_node(coordinate)
    }

    /// Add a node and mark it as a traversal root.
    pub fn add_root(&mut self, coordinate: Coordinate) -> NodeIndex {
        let idx = self.add_node(coordinate);
        self.roots.push(idx);
        idx
    }

    /// Mark an existing node as a traversal root.
    pub fn set_root(&mut self, idx: NodeIndex) {
        if !self.roots.contains(&idx) {
            self.roots.push(idx);
        }
    }

    /// Add a dependency edge from `from` to `to`. Children keep insertion order.
    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex) {
        if !self.graph.edges(from).any(|e| e.target() == to) {
            self.graph.add_edge(from, to, ());
        }
    }

    /// Get the coordinate of a node.
    pub fn node(&self, idx: NodeIndex) -> &Coordinate {
        &self.graph[idx]
    }

    pub fn roots(&self) -> &[NodeIndex] {
        &self.roots
    }

    /// Direct dependencies of a node, in the order they were added.
    pub fn children(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        // petgraph yields the most recently added edge first.
        let mut children: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(idx, Direction::Outgoing)
            .collect();
        children.reverse();
        children
    }

    /// Number of nodes, roots included.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Record every path from a root to a node whose coordinate satisfies `matches`.
    ///
    /// The walk is depth-first and descends through matched nodes as well, so a
    /// node reachable along several routes yields one path per route. Aether's
    /// path-recording visitor stops at a match by default; here a match nested
    /// below another match gets its own path. A node already on the current
    /// path is not re-entered.
    pub fn extract_paths<F>(&self, matches: F) -> Vec<DependencyPath<'_>>
    where
        F: Fn(&Coordinate) -> bool,
    {
        let mut paths = Vec::new();
        let mut stack = Vec::new();
        for &root in &self.roots {
            self.walk(root, &matches, &mut stack, &mut paths);
        }
        paths
    }

    fn walk<'g, F>(
        &'g self,
        idx: NodeIndex,
        matches: &F,
        stack: &mut Vec<NodeIndex>,
        paths: &mut Vec<DependencyPath<'g>>,
    ) where
        F: Fn(&Coordinate) -> bool,
    {
        if stack.contains(&idx) {
            tracing::debug!("Dependency cycle through {}, not descending", self.graph[idx]);
            return;
        }
        stack.push(idx);
        if matches(&self.graph[idx]) {
            paths.push(DependencyPath {
                nodes: stack.iter().map(|&i| &self.graph[i]).collect(),
            });
        }
        for child in self.children(idx) {
            self.walk(child, matches, stack, paths);
        }
        stack.pop();
    }

    /// Build a graph from its JSON interchange form.
    pub fn from_json(json: &str) -> miette::Result<Self> {
        let document: GraphDocument =
            serde_json::from_str(json).map_err(|e| FeatgenError::InvalidGraph {
                message: format!("Failed to parse graph document: {e}"),
            })?;
        Ok(document.into_graph()?)
    }
}

/// A sequence of coordinates from a graph root (index 0) to a matched node (last).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyPath<'g> {
    nodes: Vec<&'g Coordinate>,
}

impl<'g> DependencyPath<'g> {
    pub fn new(nodes: Vec<&'g Coordinate>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[&'g Coordinate] {
        &self.nodes
    }

    /// The matched node.
    pub fn last(&self) -> Option<&'g Coordinate> {
        self.nodes.last().copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl fmt::Display for DependencyPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}

/// Serialized form of a [`DependencyGraph`].
///
/// ```json
/// { "nodes": [{ "id": "app", "group": "g", "name": "app", "version": "1.0" }],
///   "edges": [["app", "lib"]],
///   "roots": ["app"] }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<GraphDocumentNode>,
    #[serde(default)]
    pub edges: Vec<(String, String)>,
    pub roots: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDocumentNode {
    pub id: String,
    #[serde(flatten)]
    pub coordinate: Coordinate,
}

impl GraphDocument {
    pub fn into_graph(self) -> Result<DependencyGraph, FeatgenError> {
        let mut graph = DependencyGraph::new();
        let mut ids: HashMap<String, NodeIndex> = HashMap::new();
        for node in self.nodes {
            let idx = graph.add_node(node.coordinate);
            if ids.insert(node.id.clone(), idx).is_some() {
                return Err(FeatgenError::InvalidGraph {
                    message: format!("duplicate node id `{}`", node.id),
                });
            }
        }
        let lookup = |id: &str| {
            ids.get(id).copied().ok_or_else(|| FeatgenError::InvalidGraph {
                message: format!("unknown node id `{id}`"),
            })
        };
        for (from, to) in &self.edges {
            graph.add_edge(lookup(from)?, lookup(to)?);
        }
        for root in &self.roots {
            graph.set_root(lookup(root)?);
        }
        Ok(graph)
    }
}
