//! Acyclicity checking for pipeline graphs.

use crate::models::{Edge, Node};
use std::collections::{HashMap, HashSet, VecDeque};

/// Outcome of an acyclicity check.
///
/// Counts reflect the payload exactly as received: `node_count` is not
/// de-duplicated and `edge_count` includes edges whose endpoints name no
/// node. The check itself runs on the unique identifier set, so the two can
/// diverge when a request repeats an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DagCheck {
    pub node_count: usize,
    pub edge_count: usize,
    pub is_dag: bool,
}

/// Determine whether the graph is a DAG using Kahn's algorithm.
///
/// Repeatedly removes nodes with in-degree zero; the graph is acyclic iff
/// every unique node gets removed. Edges with an endpoint outside the node
/// set carry no structure. An empty node set is vacuously acyclic. Runs in
/// O(V + E): each node is enqueued at most once, each edge walked at most
/// once.
pub fn check(nodes: &[Node], edges: &[Edge]) -> DagCheck {
    let node_ids: HashSet<&str> = nodes.iter().map(|node| node.id.as_str()).collect();

    let mut successors: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut in_degree: HashMap<&str, usize> = node_ids.iter().map(|&id| (id, 0)).collect();

    for edge in edges {
        let source = edge.source.as_str();
        let target = edge.target.as_str();
        if node_ids.contains(source) && node_ids.contains(target) {
            successors.entry(source).or_default().push(target);
            if let Some(degree) = in_degree.get_mut(target) {
                *degree += 1;
            }
        }
    }

    let mut worklist: VecDeque<&str> = in_degree
        .iter()
        .filter(|(_, &degree)| degree == 0)
        .map(|(&id, _)| id)
        .collect();

    let mut visited = 0usize;
    while let Some(current) = worklist.pop_front() {
        visited += 1;

        if let Some(next) = successors.get(current) {
            for &successor in next {
                if let Some(degree) = in_degree.get_mut(successor) {
                    *degree -= 1;
                    if *degree == 0 {
                        worklist.push_back(successor);
                    }
                }
            }
        }
    }

    // Nodes the worklist never reached sit on a cycle: they keep each
    // other's in-degree above zero.
    DagCheck {
        node_count: nodes.len(),
        edge_count: edges.len(),
        is_dag: visited == node_ids.len(),
    }
}
