use rand::Rng;

use super::bodies::{Planet, orbit_point};
use crate::config::{PLANET_SIZE, SceneConfig};
use crate::pathfinding::Point;

/// Orbit a stray settles into once a planet catches it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Capture {
	/// Index of the captor planet.
	pub planet: usize,
	/// Current angle around the captor.
	pub angle: f64,
	/// Distance kept from the captor.
	pub distance: f64,
}

/// A free-roaming particle drifting towards the nearest planet.
#[derive(Clone, Debug)]
pub struct Stray {
	/// Current position.
	pub position: Point,
	/// Drawn radius.
	pub size: f64,
	/// Drift speed while free.
	pub speed: f64,
	/// Set once captured.
	pub captured: Option<Capture>,
}

impl Stray {
	pub(super) fn random(rng: &mut impl Rng, config: &SceneConfig, width: f64, height: f64) -> Self {
		Self {
			position: Point::new(
				rng.gen_range(0.0..=width.max(0.0)),
				rng.gen_range(0.0..=height.max(0.0)),
			),
			// Size 2 twice as often as size 1.
			size: if rng.gen_range(0..3) == 0 { 1.0 } else { 2.0 },
			speed: rng.gen_range(config.stray_speed.0..config.stray_speed.1),
			captured: None,
		}
	}

	/// Advances one frame: drift and maybe get captured, or keep orbiting the
	/// captor.
	pub fn step(&mut self, planets: &[Planet], config: &SceneConfig) {
		if let Some(capture) = &mut self.captured {
			capture.angle += config.capture_spin;
			self.position = orbit_point(planets[capture.planet].position, capture.distance, capture.angle);
			return;
		}

		let Some((nearest, planet)) = planets.iter().enumerate().min_by(|a, b| {
			let (da, db) = (a.1.position.distance(self.position), b.1.position.distance(self.position));
			da.total_cmp(&db)
		}) else {
			return;
		};

		let target = planet.position;
		let (dx, dy) = (target.x - self.position.x, target.y - self.position.y);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist > 0.1 {
			self.position.x += dx / dist * self.speed;
			self.position.y += dy / dist * self.speed;
		}

		let dist = self.position.distance(target);
		if dist < PLANET_SIZE + config.capture_margin {
			self.captured = Some(Capture {
				planet: nearest,
				angle: (self.position.y - target.y).atan2(self.position.x - target.x),
				distance: dist,
			});
		}
	}
}
