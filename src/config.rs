//! Tunable constants and the scene configuration assembled from them.

use crate::pathfinding::{HitRadii, LinkThresholds};

/// Orbiting bodies closer than this are linked.
pub const ORBITING_LINK_THRESHOLD: f64 = 350.0;
/// Orbiting bodies closer than this to the anchor are linked to it.
pub const ANCHOR_LINK_THRESHOLD: f64 = 450.0;

/// Drawn radius of an orbiting body.
pub const PLANET_SIZE: f64 = 15.0;
/// Radius of the anchor's core.
pub const ANCHOR_CORE_RADIUS: f64 = 30.0;
/// Drawn radius of a sub-orbiting body.
pub const SATELLITE_SIZE: f64 = 4.0;

/// Pick radius around an orbiting body.
pub const ORBITING_HIT_RADIUS: f64 = PLANET_SIZE + 8.0;
/// Pick radius around a sub-orbiting body.
pub const SUB_ORBITING_HIT_RADIUS: f64 = 8.0;
/// Pick radius around the anchor.
pub const ANCHOR_HIT_RADIUS: f64 = ANCHOR_CORE_RADIUS + 10.0;

/// Colours assigned to found paths, in order.
pub const PATH_PALETTE: &[&str] = &["rgb(255, 150, 50)", "rgb(70, 220, 180)", "rgb(200, 80, 255)"];

/// Everything needed to populate a [`Scene`](crate::scene::Scene).
///
/// Speeds are per animation frame; angles are in radians.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
	/// Number of orbiting bodies.
	pub planet_count: usize,
	/// Inclusive range of planet orbit distances from the anchor.
	pub planet_orbit: (u32, u32),
	/// Half-open range of planet angular speeds.
	pub planet_speed: (f64, f64),
	/// Number of sub-orbiting bodies.
	pub satellite_count: usize,
	/// Inclusive range of satellite orbit radii around their owner.
	pub satellite_orbit: (u32, u32),
	/// Half-open range of satellite rotation speeds.
	pub satellite_speed: (f64, f64),
	/// Positions kept in each satellite trail.
	pub trail_len: usize,
	/// Number of free-roaming particles.
	pub stray_count: usize,
	/// Half-open range of stray drift speeds.
	pub stray_speed: (f64, f64),
	/// Extra distance beyond a planet's size at which a stray is captured.
	pub capture_margin: f64,
	/// Angular speed of a captured stray around its captor.
	pub capture_spin: f64,
	/// Graph link thresholds.
	pub links: LinkThresholds,
	/// Pick radii.
	pub hit: HitRadii,
}

impl Default for SceneConfig {
	fn default() -> Self {
		Self {
			planet_count: 5,
			planet_orbit: (130, 280),
			planet_speed: (0.0015, 0.003),
			satellite_count: 12,
			satellite_orbit: (35, 65),
			satellite_speed: (0.015, 0.025),
			trail_len: 12,
			stray_count: 40,
			stray_speed: (0.08, 0.25),
			capture_margin: 25.0,
			capture_spin: 0.02,
			links: LinkThresholds::default(),
			hit: HitRadii::default(),
		}
	}
}
