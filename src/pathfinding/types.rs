/// Integer handle of an entity within one graph build.
pub type NodeId = usize;

/// A position in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate.
	pub y: f64,
}

impl Point {
	/// Creates a point from its coordinates.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Euclidean distance to `other`.
	pub fn distance(&self, other: Point) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// A sub-orbiting body as seen by the graph builder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubOrbiter {
	/// Current position.
	pub position: Point,
	/// Index of the owning orbiting body.
	pub owner: usize,
	/// Configured distance from the owner, used as the edge weight.
	pub orbit_radius: f64,
}

/// Everything the graph builder and hit test need from one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
	/// Orbiting body positions, in node order.
	pub orbiting: Vec<Point>,
	/// Sub-orbiting bodies, in node order.
	pub sub_orbiting: Vec<SubOrbiter>,
	/// Position of the central anchor.
	pub anchor: Point,
}

impl Snapshot {
	/// Node numbering implied by this snapshot's group sizes.
	pub fn layout(&self) -> NodeLayout {
		NodeLayout {
			orbiting: self.orbiting.len(),
			sub_orbiting: self.sub_orbiting.len(),
		}
	}

	/// Current position of a node.
	pub fn position(&self, kind: NodeKind) -> Point {
		match kind {
			NodeKind::Orbiting(i) => self.orbiting[i],
			NodeKind::SubOrbiting(i) => self.sub_orbiting[i].position,
			NodeKind::Anchor => self.anchor,
		}
	}
}

/// Which entity group a node belongs to, with its index inside the group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
	/// An orbiting body.
	Orbiting(usize),
	/// A sub-orbiting body.
	SubOrbiting(usize),
	/// The central anchor.
	Anchor,
}

/// Maps node ids to entities: orbiting bodies first, then sub-orbiting
/// bodies, then the anchor as the last id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NodeLayout {
	/// Number of orbiting bodies.
	pub orbiting: usize,
	/// Number of sub-orbiting bodies.
	pub sub_orbiting: usize,
}

impl NodeLayout {
	/// Total node count, anchor included.
	pub fn len(&self) -> usize {
		self.orbiting + self.sub_orbiting + 1
	}

	/// Always false; the anchor is always present.
	pub fn is_empty(&self) -> bool {
		false
	}

	/// Id assigned to `kind`.
	pub fn id_of(&self, kind: NodeKind) -> NodeId {
		match kind {
			NodeKind::Orbiting(i) => i,
			NodeKind::SubOrbiting(i) => self.orbiting + i,
			NodeKind::Anchor => self.orbiting + self.sub_orbiting,
		}
	}

	/// Entity behind `id`, or `None` when out of range.
	pub fn kind_of(&self, id: NodeId) -> Option<NodeKind> {
		if id < self.orbiting {
			Some(NodeKind::Orbiting(id))
		} else if id < self.orbiting + self.sub_orbiting {
			Some(NodeKind::SubOrbiting(id - self.orbiting))
		} else if id == self.orbiting + self.sub_orbiting {
			Some(NodeKind::Anchor)
		} else {
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn layout_orders_groups() {
		let layout = NodeLayout {
			orbiting: 3,
			sub_orbiting: 2,
		};
		assert_eq!(layout.len(), 6);
		assert!(!layout.is_empty());
		assert!(!NodeLayout::default().is_empty());
		assert_eq!(layout.id_of(NodeKind::Orbiting(2)), 2);
		assert_eq!(layout.id_of(NodeKind::SubOrbiting(0)), 3);
		assert_eq!(layout.id_of(NodeKind::Anchor), 5);
		assert_eq!(layout.kind_of(4), Some(NodeKind::SubOrbiting(1)));
		assert_eq!(layout.kind_of(5), Some(NodeKind::Anchor));
		assert_eq!(layout.kind_of(6), None);
	}

	#[test]
	fn distance_is_euclidean() {
		let d = Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0));
		assert!((d - 5.0).abs() < 1e-12);
	}
}
