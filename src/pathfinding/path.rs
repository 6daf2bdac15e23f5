use super::dijkstra::shortest_paths;
use super::graph::Graph;
use super::types::NodeId;

/// Walks predecessor links back from `target` and returns the path from
/// `source` to `target`, both inclusive.
///
/// Returns `[source]` when `source == target` and an empty vector when the
/// walk ends anywhere other than `source`.
pub fn reconstruct(predecessor: &[Option<NodeId>], source: NodeId, target: NodeId) -> Vec<NodeId> {
	if source == target {
		return vec![source];
	}

	let mut path = vec![target];
	let mut current = target;
	while let Some(prev) = predecessor.get(current).copied().flatten() {
		if path.len() > predecessor.len() {
			// Predecessor tables from a real run never loop.
			return Vec::new();
		}
		path.push(prev);
		current = prev;
	}

	if current != source {
		return Vec::new();
	}
	path.reverse();
	path
}

/// Shortest path between two nodes of `graph`, or `None` when they are not
/// connected.
pub fn find_path(graph: &Graph, source: NodeId, target: NodeId) -> Option<Vec<NodeId>> {
	let paths = shortest_paths(graph, source);
	let path = reconstruct(&paths.predecessor, source, target);
	(!path.is_empty()).then_some(path)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::pathfinding::graph::tests::snapshot;
	use crate::pathfinding::graph::LinkThresholds;
	use crate::pathfinding::types::{NodeKind, Point};

	#[test]
	fn single_node_path() {
		assert_eq!(reconstruct(&[None, None], 1, 1), vec![1]);
	}

	#[test]
	fn walk_must_end_at_source() {
		let predecessor = [None, Some(0), Some(1), None, Some(3)];
		assert_eq!(reconstruct(&predecessor, 0, 2), vec![0, 1, 2]);
		assert!(reconstruct(&predecessor, 0, 4).is_empty());
		assert!(reconstruct(&predecessor, 0, 3).is_empty());
	}

	#[test]
	fn looping_table_yields_empty() {
		let predecessor = [None, Some(2), Some(1)];
		assert!(reconstruct(&predecessor, 0, 1).is_empty());
	}

	#[test]
	fn takes_cheaper_route_through_middle() {
		let (a, b, c) = (0, 1, 2);
		let graph = Graph::from_edges(3, &[(a, b, 100.0), (b, c, 100.0), (a, c, 300.0)]);
		let path = find_path(&graph, a, c);
		assert_eq!(path, Some(vec![a, b, c]));
		assert_eq!(path.and_then(|p| graph.path_weight(&p)), Some(200.0));
	}

	#[test]
	fn sub_orbiter_to_owner_uses_configured_radius() {
		// X sits nowhere near B; the hop still costs exactly its radius.
		let snap = snapshot(&[(0.0, 0.0), (200.0, 0.0)], &[(1, 50.0, (-300.0, 700.0))]);
		let graph = Graph::build(&snap, &LinkThresholds::default());
		let x = graph.layout().id_of(NodeKind::SubOrbiting(0));

		let path = find_path(&graph, x, 1);
		assert_eq!(path, Some(vec![x, 1]));
		assert_eq!(graph.path_weight(&[x, 1]), Some(50.0));
	}

	#[test]
	fn distant_bodies_have_no_path() {
		let snap = snapshot(&[(0.0, 0.0), (500.0, 0.0)], &[(0, 40.0, (40.0, 0.0))]);
		let graph = Graph::build(&snap, &LinkThresholds::default());
		assert_eq!(find_path(&graph, 0, 1), None);
		assert_eq!(find_path(&graph, 1, 0), None);
	}

	#[test]
	fn repeated_queries_agree() {
		let mut snap = snapshot(
			&[(0.0, 0.0), (250.0, 100.0), (480.0, 20.0), (700.0, 300.0)],
			&[(0, 40.0, (0.0, 40.0)), (3, 65.0, (765.0, 300.0))],
		);
		snap.anchor = Point::new(350.0, 150.0);
		let graph = Graph::build(&snap, &LinkThresholds::default());
		let first = find_path(&graph, 4, 5);
		assert_eq!(first, find_path(&graph, 4, 5));
		assert!(first.is_some());
	}

	#[test]
	fn path_weight_matches_dijkstra_distance() {
		let mut snap = snapshot(
			&[(0.0, 0.0), (250.0, 100.0), (480.0, 20.0), (700.0, 300.0), (100.0, 320.0)],
			&[(0, 40.0, (0.0, 40.0)), (3, 65.0, (765.0, 300.0)), (4, 35.0, (0.0, 0.0))],
		);
		snap.anchor = Point::new(350.0, 150.0);
		let graph = Graph::build(&snap, &LinkThresholds::default());

		for source in 0..graph.len() {
			let paths = shortest_paths(&graph, source);
			for target in 0..graph.len() {
				let Some(path) = find_path(&graph, source, target) else {
					assert_eq!(paths.distance_to(target), None);
					continue;
				};
				let (total, expected) = (
					graph.path_weight(&path).unwrap(),
					paths.distance_to(target).unwrap(),
				);
				assert!((total - expected).abs() < 1e-9, "{total} != {expected}");
			}
		}
	}
}
