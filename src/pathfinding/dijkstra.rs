use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::graph::Graph;
use super::types::NodeId;

/// Result of a single-source run: best distance and predecessor per node.
///
/// Unreachable nodes keep an infinite distance and no predecessor.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPaths {
	/// Minimum total weight from `source`, indexed by node.
	pub distance: Vec<f64>,
	/// Previous node on a minimal path from `source`, indexed by node.
	pub predecessor: Vec<Option<NodeId>>,
}

impl ShortestPaths {
	/// Distance to `node`, or `None` when it cannot be reached.
	pub fn distance_to(&self, node: NodeId) -> Option<f64> {
		let d = self.distance[node];
		d.is_finite().then_some(d)
	}
}

#[derive(Clone, Copy, Debug)]
struct Frontier {
	distance: f64,
	node: NodeId,
}

impl Ord for Frontier {
	fn cmp(&self, other: &Self) -> Ordering {
		// Reversed so the max-heap pops the closest node first.
		other.distance.total_cmp(&self.distance)
	}
}

impl PartialOrd for Frontier {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl PartialEq for Frontier {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for Frontier {}

/// Dijkstra from `source` over `graph`.
///
/// Stale heap entries (popped with a distance worse than the best known one)
/// are skipped rather than removed eagerly.
///
/// # Panics
///
/// If `source` is not a node of `graph`.
pub fn shortest_paths(graph: &Graph, source: NodeId) -> ShortestPaths {
	let n = graph.len();
	assert!(source < n, "source node {source} out of range for {n} nodes");

	let mut distance = vec![f64::INFINITY; n];
	let mut predecessor = vec![None; n];
	let mut heap = BinaryHeap::new();

	distance[source] = 0.0;
	heap.push(Frontier {
		distance: 0.0,
		node: source,
	});

	while let Some(Frontier { distance: d, node: u }) = heap.pop() {
		if d > distance[u] {
			continue;
		}
		for (v, w) in graph.neighbors(u) {
			let candidate = d + w;
			if candidate < distance[v] {
				distance[v] = candidate;
				predecessor[v] = Some(u);
				heap.push(Frontier {
					distance: candidate,
					node: v,
				});
			}
		}
	}

	ShortestPaths {
		distance,
		predecessor,
	}
}
