//! The moving system the graph is built from: an anchor, planets orbiting it,
//! satellites orbiting planets, and strays drifting until a planet catches
//! them.

mod bodies;
mod strays;

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub use bodies::{Anchor, Planet, Satellite};
pub use strays::{Capture, Stray};

use crate::config::SceneConfig;
use crate::pathfinding::{Point, Snapshot, SubOrbiter};

/// Owned simulation state, advanced once per animation frame.
#[derive(Clone, Debug)]
pub struct Scene {
	/// Central body.
	pub anchor: Anchor,
	/// Orbiting bodies, in node order.
	pub planets: Vec<Planet>,
	/// Sub-orbiting bodies, in node order.
	pub satellites: Vec<Satellite>,
	/// Free-roaming particles; not part of the graph.
	pub strays: Vec<Stray>,
	config: SceneConfig,
}

impl Scene {
	/// Populates a scene centred in a `width × height` area.
	///
	/// The same `seed` and config always produce the same scene.
	pub fn generate(config: &SceneConfig, seed: u64, width: f64, height: f64) -> Self {
		let mut rng = StdRng::seed_from_u64(seed);
		let anchor = Anchor {
			position: Point::new(width / 2.0, height / 2.0),
		};
		let planets: Vec<Planet> = (0..config.planet_count)
			.map(|_| Planet::random(&mut rng, config, anchor.position))
			.collect();
		// Satellites need an owner to circle.
		let satellites = if planets.is_empty() {
			Vec::new()
		} else {
			(0..config.satellite_count)
				.map(|_| Satellite::random(&mut rng, config, &planets))
				.collect()
		};
		let strays = (0..config.stray_count)
			.map(|_| Stray::random(&mut rng, config, width, height))
			.collect();

		info!(
			"scene generated: {} planets, {} satellites, {} strays (seed {seed:#x})",
			planets.len(),
			satellites.len(),
			config.stray_count
		);
		Self {
			anchor,
			planets,
			satellites,
			strays,
			config: config.clone(),
		}
	}

	/// Configuration the scene was generated with.
	pub fn config(&self) -> &SceneConfig {
		&self.config
	}

	/// Advances planets, then satellites, then strays by one frame.
	pub fn step(&mut self) {
		for planet in &mut self.planets {
			planet.step(self.anchor.position);
		}
		for satellite in &mut self.satellites {
			satellite.step(self.planets[satellite.owner].position);
		}
		for stray in &mut self.strays {
			stray.step(&self.planets, &self.config);
		}
	}

	/// Moves the anchor; planets follow on their next step.
	pub fn recenter(&mut self, center: Point) {
		self.anchor.position = center;
	}

	/// Current positions and ownership, ready for graph building.
	pub fn snapshot(&self) -> Snapshot {
		Snapshot {
			orbiting: self.planets.iter().map(|p| p.position).collect(),
			sub_orbiting: self
				.satellites
				.iter()
				.map(|s| SubOrbiter {
					position: s.position,
					owner: s.owner,
					orbit_radius: s.orbit_radius,
				})
				.collect(),
			anchor: self.anchor.position,
		}
	}
}
