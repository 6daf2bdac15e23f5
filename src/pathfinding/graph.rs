use log::trace;

use super::types::{NodeId, NodeKind, NodeLayout, Point, Snapshot};
use crate::config::{ANCHOR_LINK_THRESHOLD, ORBITING_LINK_THRESHOLD};

/// Distance limits below which two bodies are linked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkThresholds {
	/// Orbiting body to orbiting body.
	pub orbiting: f64,
	/// Orbiting body to anchor.
	pub anchor: f64,
}

impl Default for LinkThresholds {
	fn default() -> Self {
		Self {
			orbiting: ORBITING_LINK_THRESHOLD,
			anchor: ANCHOR_LINK_THRESHOLD,
		}
	}
}

/// Weighted undirected proximity graph over one [`Snapshot`].
///
/// Weights live in a dense row-major matrix where `f64::INFINITY` means
/// "no edge". The matrix is symmetric and its diagonal is always empty.
#[derive(Clone, Debug)]
pub struct Graph {
	layout: NodeLayout,
	positions: Vec<Point>,
	weights: Vec<f64>,
}

impl Graph {
	/// Builds the graph for the current positions.
	///
	/// Orbiting bodies link to each other and to the anchor when closer than
	/// the respective threshold, weighted by distance. Every sub-orbiting
	/// body links only to its owner, weighted by its configured orbit radius.
	///
	/// # Panics
	///
	/// If a sub-orbiting body names an owner that does not exist, or has a
	/// non-positive orbit radius.
	pub fn build(snapshot: &Snapshot, thresholds: &LinkThresholds) -> Self {
		let layout = snapshot.layout();
		let n = layout.len();
		let mut graph = Self {
			layout,
			positions: (0..n)
				.filter_map(|id| layout.kind_of(id))
				.map(|kind| snapshot.position(kind))
				.collect(),
			weights: vec![f64::INFINITY; n * n],
		};

		let orbiting = &snapshot.orbiting;
		for i in 0..orbiting.len() {
			for j in (i + 1)..orbiting.len() {
				let d = orbiting[i].distance(orbiting[j]);
				if d < thresholds.orbiting {
					graph.link(i, j, d);
				}
			}
		}

		for (si, sub) in snapshot.sub_orbiting.iter().enumerate() {
			assert!(
				sub.owner < orbiting.len(),
				"sub-orbiting body {si} names owner {} but only {} orbiting bodies exist",
				sub.owner,
				orbiting.len()
			);
			assert!(
				sub.orbit_radius > 0.0,
				"sub-orbiting body {si} has non-positive orbit radius {}",
				sub.orbit_radius
			);
			graph.link(
				layout.id_of(NodeKind::SubOrbiting(si)),
				sub.owner,
				sub.orbit_radius,
			);
		}

		let anchor = layout.id_of(NodeKind::Anchor);
		for (i, body) in orbiting.iter().enumerate() {
			let d = body.distance(snapshot.anchor);
			if d < thresholds.anchor {
				graph.link(i, anchor, d);
			}
		}

		trace!("built graph with {n} nodes and {} edges", graph.edges().count());
		graph
	}

	fn link(&mut self, a: NodeId, b: NodeId, weight: f64) {
		// Coincident bodies still link; keep the weight strictly positive.
		let weight = weight.max(f64::MIN_POSITIVE);
		let n = self.len();
		self.weights[a * n + b] = weight;
		self.weights[b * n + a] = weight;
	}

	/// Graph over `orbiting` bodies at the origin with hand-picked weights.
	#[cfg(test)]
	pub(crate) fn from_edges(orbiting: usize, edges: &[(NodeId, NodeId, f64)]) -> Self {
		let layout = NodeLayout {
			orbiting,
			sub_orbiting: 0,
		};
		let n = layout.len();
		let mut graph = Self {
			layout,
			positions: vec![Point::default(); n],
			weights: vec![f64::INFINITY; n * n],
		};
		for &(a, b, w) in edges {
			graph.link(a, b, w);
		}
		graph
	}

	/// Number of nodes.
	pub fn len(&self) -> usize {
		self.layout.len()
	}

	/// Always false; the anchor is always a node.
	pub fn is_empty(&self) -> bool {
		false
	}

	/// Node numbering used by this graph.
	pub fn layout(&self) -> NodeLayout {
		self.layout
	}

	/// Position of `id` when the graph was built.
	pub fn position(&self, id: NodeId) -> Point {
		self.positions[id]
	}

	/// Weight of the edge between `a` and `b`, if there is one.
	pub fn weight(&self, a: NodeId, b: NodeId) -> Option<f64> {
		let w = self.weights[a * self.len() + b];
		w.is_finite().then_some(w)
	}

	/// Neighbours of `u` with the connecting edge weight.
	pub fn neighbors(&self, u: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
		let n = self.len();
		self.weights[u * n..(u + 1) * n]
			.iter()
			.enumerate()
			.filter(|(_, w)| w.is_finite())
			.map(|(v, &w)| (v, w))
	}

	/// Every edge once, as `(a, b, weight)` with `a < b`.
	pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, f64)> + '_ {
		(0..self.len()).flat_map(move |a| {
			self.neighbors(a)
				.filter(move |&(b, _)| a < b)
				.map(move |(b, w)| (a, b, w))
		})
	}

	/// Total weight along `path`, or `None` if two consecutive nodes are not
	/// adjacent.
	pub fn path_weight(&self, path: &[NodeId]) -> Option<f64> {
		path.windows(2)
			.map(|hop| self.weight(hop[0], hop[1]))
			.sum()
	}
}
