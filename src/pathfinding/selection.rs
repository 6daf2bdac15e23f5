use log::{debug, info};

use super::graph::Graph;
use super::path::find_path;
use super::types::NodeId;

/// Picks collected so far towards the next query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
	/// Nothing picked.
	#[default]
	Empty,
	/// One pick waiting for its partner.
	OnePicked(NodeId),
}

/// A path produced by a completed pair of picks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FoundPath {
	/// Nodes from the first pick to the second, both inclusive.
	pub nodes: Vec<NodeId>,
	/// Index into the display palette.
	pub color_index: usize,
}

/// Two-slot pick buffer that runs a shortest-path query whenever it fills.
#[derive(Clone, Debug)]
pub struct PathSelector {
	selection: Selection,
	palette_len: usize,
	next_color: usize,
}

impl PathSelector {
	/// Creates an empty selector cycling through `palette_len` colours.
	///
	/// # Panics
	///
	/// If `palette_len` is zero.
	pub fn new(palette_len: usize) -> Self {
		assert!(palette_len > 0, "path palette must not be empty");
		Self {
			selection: Selection::Empty,
			palette_len,
			next_color: 0,
		}
	}

	/// Current buffer state.
	pub fn selection(&self) -> Selection {
		self.selection
	}

	/// Number of picks waiting, 0 or 1.
	pub fn pending(&self) -> usize {
		match self.selection {
			Selection::Empty => 0,
			Selection::OnePicked(_) => 1,
		}
	}

	/// Records a pick.
	///
	/// The first pick is only remembered. The second runs `build` for a fresh
	/// graph, searches from the first pick to the second and empties the
	/// buffer. A found path is returned with the next palette colour; a
	/// disconnected pair returns `None` without consuming a colour. Picking
	/// the same node twice returns `[node]` tagged with the upcoming colour,
	/// which stays available for the next multi-node path.
	pub fn register_pick<F>(&mut self, node: NodeId, build: F) -> Option<FoundPath>
	where
		F: FnOnce() -> Graph,
	{
		let source = match std::mem::take(&mut self.selection) {
			Selection::Empty => {
				debug!("first pick: node {node}");
				self.selection = Selection::OnePicked(node);
				return None;
			}
			Selection::OnePicked(source) => source,
		};

		let graph = build();
		let Some(nodes) = find_path(&graph, source, node) else {
			debug!("no path between node {source} and node {node}");
			return None;
		};

		let color_index = self.next_color;
		// A single-node path draws nothing, so it leaves the colour for the
		// next real path.
		if nodes.len() > 1 {
			self.next_color = (self.next_color + 1) % self.palette_len;
		}
		info!(
			"path {source} -> {node}: {} hops, weight {:.1}",
			nodes.len() - 1,
			graph.path_weight(&nodes).unwrap_or(f64::INFINITY)
		);
		Some(FoundPath { nodes, color_index })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn chain() -> Graph {
		// 0 - 1 - 2, with 3 isolated and 4 the anchor.
		Graph::from_edges(4, &[(0, 1, 10.0), (1, 2, 10.0)])
	}

	#[test]
	fn first_pick_is_held() {
		let mut selector = PathSelector::new(3);
		let found = selector.register_pick(2, || unreachable!("no query on the first pick"));
		assert_eq!(found, None);
		assert_eq!(selector.selection(), Selection::OnePicked(2));
		assert_eq!(selector.pending(), 1);
	}

	#[test]
	fn second_pick_queries_and_resets() {
		let mut selector = PathSelector::new(3);
		selector.register_pick(0, chain);
		let found = selector.register_pick(2, chain);
		assert_eq!(
			found,
			Some(FoundPath {
				nodes: vec![0, 1, 2],
				color_index: 0,
			})
		);
		assert_eq!(selector.selection(), Selection::Empty);
	}

	#[test]
	fn unreachable_pair_is_silent() {
		let mut selector = PathSelector::new(3);
		selector.register_pick(0, chain);
		assert_eq!(selector.register_pick(3, chain), None);
		assert_eq!(selector.selection(), Selection::Empty);

		selector.register_pick(0, chain);
		let found = selector.register_pick(1, chain);
		assert_eq!(found.map(|p| p.color_index), Some(0));
	}

	#[test]
	fn same_entity_twice_gives_single_node_path() {
		let mut selector = PathSelector::new(3);
		selector.register_pick(3, chain);
		let found = selector.register_pick(3, chain);
		assert_eq!(
			found,
			Some(FoundPath {
				nodes: vec![3],
				color_index: 0,
			})
		);

		// The colour is still free for the next drawable path.
		selector.register_pick(0, chain);
		let found = selector.register_pick(2, chain);
		assert_eq!(found.map(|p| p.color_index), Some(0));
	}

	#[test]
	fn colours_cycle_through_palette() {
		let mut selector = PathSelector::new(2);
		let colors: Vec<_> = (0..5)
			.filter_map(|_| {
				selector.register_pick(0, chain);
				selector.register_pick(1, chain)
			})
			.map(|p| p.color_index)
			.collect();
		assert_eq!(colors, vec![0, 1, 0, 1, 0]);
	}
}
