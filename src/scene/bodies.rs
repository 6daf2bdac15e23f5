use std::collections::VecDeque;
use std::f64::consts::TAU;

use rand::Rng;

use crate::config::SceneConfig;
use crate::pathfinding::Point;

/// The fixed central body.
#[derive(Clone, Debug)]
pub struct Anchor {
	/// Centre of the scene.
	pub position: Point,
}

/// A body orbiting the anchor on a circle.
#[derive(Clone, Debug)]
pub struct Planet {
	/// Distance from the anchor.
	pub orbit_distance: f64,
	/// Current angle, kept in `[0, 2π)`.
	pub angle: f64,
	/// Angle advanced per frame.
	pub speed: f64,
	/// Current position.
	pub position: Point,
}

impl Planet {
	pub(super) fn random(rng: &mut impl Rng, config: &SceneConfig, anchor: Point) -> Self {
		let (lo, hi) = config.planet_orbit;
		let mut planet = Self {
			orbit_distance: rng.gen_range(lo..=hi) as f64,
			angle: rng.gen_range(0.0..TAU),
			speed: rng.gen_range(config.planet_speed.0..config.planet_speed.1),
			position: anchor,
		};
		planet.step(anchor);
		planet
	}

	/// Advances one frame around `anchor`.
	pub fn step(&mut self, anchor: Point) {
		self.angle = (self.angle + self.speed) % TAU;
		self.position = orbit_point(anchor, self.orbit_distance, self.angle);
	}
}

/// A body orbiting one planet.
#[derive(Clone, Debug)]
pub struct Satellite {
	/// Index of the planet it circles.
	pub owner: usize,
	/// Distance from the owner.
	pub orbit_radius: f64,
	/// Current angle.
	pub angle: f64,
	/// Base rotation speed.
	pub speed: f64,
	/// Current position.
	pub position: Point,
	/// Recent positions, oldest first.
	pub trail: VecDeque<Point>,
	trail_len: usize,
}

impl Satellite {
	pub(super) fn random(rng: &mut impl Rng, config: &SceneConfig, planets: &[Planet]) -> Self {
		let owner = rng.gen_range(0..planets.len());
		let (lo, hi) = config.satellite_orbit;
		let mut satellite = Self {
			owner,
			orbit_radius: rng.gen_range(lo..=hi) as f64,
			angle: rng.gen_range(0.0..TAU),
			speed: rng.gen_range(config.satellite_speed.0..config.satellite_speed.1),
			position: planets[owner].position,
			trail: VecDeque::with_capacity(config.trail_len + 1),
			trail_len: config.trail_len,
		};
		satellite.step(planets[owner].position);
		satellite
	}

	/// Advances one frame around `owner` and records the new position.
	///
	/// Tighter orbits turn faster: the base speed is scaled by
	/// `0.8 + 40 / orbit_radius`.
	pub fn step(&mut self, owner: Point) {
		self.angle += self.speed * (0.8 + 40.0 / self.orbit_radius);
		self.position = orbit_point(owner, self.orbit_radius, self.angle);
		self.trail.push_back(self.position);
		while self.trail.len() > self.trail_len {
			self.trail.pop_front();
		}
	}
}

pub(super) fn orbit_point(center: Point, radius: f64, angle: f64) -> Point {
	Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}
