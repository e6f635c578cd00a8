//! Directory/file hierarchy for coverage reports
//!
//! This module handles:
//! - Trimming the common base path from report paths
//! - Building the directory tree one path segment at a time
//! - Aggregating file metrics bottom-up into directories
//! - Read-only access to the finished tree for rendering
//!
//! Nodes are stored in an arena and refer to each other by `NodeId`.
//! `TreeBuilder` is the only place a node can change; `finish` hands out a
//! `CoverageTree` that only exposes shared references.

use crate::types::{CoverageTotals, FileMetrics, Metrics};
use log::debug;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

/// Index of a node in its tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Whether a node is a directory or a source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Directory,
    File,
}

/// One directory or file in the hierarchy
#[derive(Debug, Clone)]
pub struct CoverageNode {
    pub name: String,
    pub kind: NodeKind,
    /// Owning directory, None for the root
    pub parent: Option<NodeId>,
    /// Children keyed by path segment; unordered, see `CoverageTree::sorted_children`
    pub children: HashMap<String, NodeId>,
    pub statements: Metrics,
    pub branches: Metrics,
    pub lines: Metrics,
    /// Only populated for files
    pub uncovered_lines: Vec<u32>,
}

impl CoverageNode {
    fn new(name: &str, parent: Option<NodeId>) -> Self {
        Self {
            name: name.to_string(),
            kind: NodeKind::Directory,
            parent,
            children: HashMap::new(),
            statements: Metrics::zero(),
            branches: Metrics::zero(),
            lines: Metrics::zero(),
            uncovered_lines: Vec::new(),
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }

    pub fn totals(&self) -> CoverageTotals {
        CoverageTotals { statements: self.statements, branches: self.branches, lines: self.lines }
    }
}

/// Mutable construction phase of a coverage tree
#[derive(Debug)]
pub struct TreeBuilder {
    nodes: Vec<CoverageNode>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    /// Start with an empty root directory
    pub fn new() -> Self {
        Self { nodes: vec![CoverageNode::new("", None)] }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Insert a file below the root, creating intermediate directories.
    ///
    /// Inserting the same segments twice overwrites the earlier metrics.
    pub fn insert_file(&mut self, segments: &[&str], metrics: &FileMetrics) -> NodeId {
        let mut current = self.root();
        for segment in segments {
            current = self.child_or_insert(current, segment);
        }

        let node = &mut self.nodes[current.0];
        node.kind = NodeKind::File;
        node.statements = metrics.statements;
        node.branches = metrics.branches;
        node.lines = metrics.lines;
        node.uncovered_lines = metrics.uncovered_lines.clone();
        current
    }

    fn child_or_insert(&mut self, parent: NodeId, segment: &str) -> NodeId {
        if let Some(&id) = self.nodes[parent.0].children.get(segment) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(CoverageNode::new(segment, Some(parent)));
        self.nodes[parent.0].children.insert(segment.to_string(), id);
        id
    }

    /// Recompute directory metrics below and including `start` from their files.
    ///
    /// Files keep their own values. Directories are reset to zero and then
    /// receive every child's metrics after that child is complete.
    pub fn aggregate_from_children(&mut self, start: NodeId) {
        // Pre-order walk with an explicit stack; reversed, every node comes
        // after all of its descendants.
        let mut order = Vec::new();
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.nodes[id.0].children.values().copied());
        }

        for &id in &order {
            let node = &mut self.nodes[id.0];
            if !node.is_file() {
                node.statements = Metrics::zero();
                node.branches = Metrics::zero();
                node.lines = Metrics::zero();
            }
        }

        for &id in order.iter().rev() {
            if id == start {
                continue;
            }
            let child = &self.nodes[id.0];
            let (statements, branches, lines) = (child.statements, child.branches, child.lines);
            let Some(parent) = child.parent else { continue };

            let parent = &mut self.nodes[parent.0];
            if parent.is_file() {
                continue;
            }
            parent.statements += statements;
            parent.branches += branches;
            parent.lines += lines;
        }
    }

    /// Freeze the tree for rendering
    pub fn finish(self) -> CoverageTree {
        CoverageTree { nodes: self.nodes }
    }
}

/// A finished, aggregated coverage tree
#[derive(Debug, Clone)]
pub struct CoverageTree {
    nodes: Vec<CoverageNode>,
}

impl CoverageTree {
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &CoverageNode {
        &self.nodes[id.0]
    }

    /// Number of edges between the root and `id`
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.node(id).parent;
        while let Some(parent) = current {
            depth += 1;
            current = self.node(parent).parent;
        }
        depth
    }

    /// All node ids, root first
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Number of file nodes
    pub fn file_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_file()).count()
    }

    /// Children in display order: directories first, then files, each
    /// group sorted by name ignoring ASCII case
    pub fn sorted_children(&self, id: NodeId) -> Vec<NodeId> {
        let mut children: Vec<NodeId> = self.node(id).children.values().copied().collect();
        children.sort_by(|a, b| display_order(self.node(*a), self.node(*b)));
        children
    }
}

fn display_order(a: &CoverageNode, b: &CoverageNode) -> Ordering {
    a.is_file()
        .cmp(&b.is_file())
        .then_with(|| a.name.to_ascii_lowercase().cmp(&b.name.to_ascii_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}

fn is_separator(c: char) -> bool {
    c == '/' || c == std::path::MAIN_SEPARATOR
}

fn path_segments(path: &str) -> Vec<&str> {
    path.split(is_separator).filter(|s| !s.is_empty()).collect()
}

/// Number of leading segments shared by every path that get trimmed.
///
/// This is the length of the longest common directory prefix minus one, so
/// the deepest shared directory stays visible below the root. For a single
/// path that is its grandparent directory.
pub fn common_base_len(paths: &[Vec<&str>]) -> usize {
    let Some(first) = paths.first() else {
        return 0;
    };

    let dir_len = |segments: &Vec<&str>| segments.len().saturating_sub(1);
    let mut shared = dir_len(first);
    for segments in &paths[1..] {
        shared = shared.min(dir_len(segments));
        shared = first[..shared].iter().zip(segments.iter()).take_while(|(a, b)| a == b).count();
    }

    shared.saturating_sub(1)
}

/// Build and aggregate the tree for a flat path -> metrics map
pub fn build_tree(files: &BTreeMap<String, FileMetrics>) -> CoverageTree {
    let mut builder = TreeBuilder::new();
    if files.is_empty() {
        return builder.finish();
    }

    let split: Vec<Vec<&str>> = files.keys().map(|p| path_segments(p)).collect();
    let base_len = common_base_len(&split);
    if let Some(first) = split.first() {
        debug!("Trimming common base path /{}", first[..base_len].join("/"));
    }

    for (segments, metrics) in split.iter().zip(files.values()) {
        if segments.is_empty() {
            debug!("Skipping report entry without a path");
            continue;
        }
        builder.insert_file(&segments[base_len..], metrics);
    }

    let root = builder.root();
    builder.aggregate_from_children(root);
    builder.finish()
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;
