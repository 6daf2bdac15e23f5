use super::types::{NodeId, NodeKind, Point, Snapshot};
use crate::config::{ANCHOR_HIT_RADIUS, ORBITING_HIT_RADIUS, SUB_ORBITING_HIT_RADIUS};

/// Pick radius per entity group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitRadii {
	/// Around each orbiting body.
	pub orbiting: f64,
	/// Around each sub-orbiting body.
	pub sub_orbiting: f64,
	/// Around the anchor.
	pub anchor: f64,
}

impl Default for HitRadii {
	fn default() -> Self {
		Self {
			orbiting: ORBITING_HIT_RADIUS,
			sub_orbiting: SUB_ORBITING_HIT_RADIUS,
			anchor: ANCHOR_HIT_RADIUS,
		}
	}
}

/// Entity under `at`, if any.
///
/// Groups are tried in a fixed order (orbiting bodies, sub-orbiting bodies,
/// then the anchor) and the first body in range wins, even when a later one
/// is closer.
pub fn hit_test(snapshot: &Snapshot, at: Point, radii: &HitRadii) -> Option<NodeId> {
	let layout = snapshot.layout();
	let kind = snapshot
		.orbiting
		.iter()
		.position(|p| p.distance(at) < radii.orbiting)
		.map(NodeKind::Orbiting)
		.or_else(|| {
			snapshot
				.sub_orbiting
				.iter()
				.position(|s| s.position.distance(at) < radii.sub_orbiting)
				.map(NodeKind::SubOrbiting)
		})
		.or_else(|| (snapshot.anchor.distance(at) < radii.anchor).then_some(NodeKind::Anchor))?;
	Some(layout.id_of(kind))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::pathfinding::types::SubOrbiter;

	fn scene() -> Snapshot {
		Snapshot {
			orbiting: vec![Point::new(100.0, 100.0), Point::new(110.0, 100.0)],
			sub_orbiting: vec![
				SubOrbiter {
					position: Point::new(104.0, 100.0),
					owner: 0,
					orbit_radius: 40.0,
				},
				SubOrbiter {
					position: Point::new(300.0, 300.0),
					owner: 1,
					orbit_radius: 40.0,
				},
			],
			anchor: Point::new(500.0, 500.0),
		}
	}

	#[test]
	fn orbiting_bodies_take_precedence() {
		// Closest to the satellite and the second planet, but the first planet
		// is in range and listed first.
		assert_eq!(hit_test(&scene(), Point::new(105.0, 100.0), &HitRadii::default()), Some(0));
	}

	#[test]
	fn falls_through_to_sub_orbiters_then_anchor() {
		let snap = scene();
		let radii = HitRadii::default();
		assert_eq!(hit_test(&snap, Point::new(303.0, 303.0), &radii), Some(3));
		assert_eq!(hit_test(&snap, Point::new(530.0, 500.0), &radii), Some(4));
	}

	#[test]
	fn misses_return_none() {
		let radii = HitRadii::default();
		assert_eq!(hit_test(&scene(), Point::new(0.0, 0.0), &radii), None);
		// Radii are exclusive.
		assert_eq!(hit_test(&scene(), Point::new(540.0, 500.0), &radii), None);
	}
}
