use log::debug;

use crate::config::{PATH_PALETTE, SceneConfig};
use crate::pathfinding::{FoundPath, Graph, NodeId, PathSelector, Point, Selection, hit_test};
use crate::scene::Scene;

const HOVER_DELAY: f64 = 0.08;
const HOVER_SPEED: f64 = 6.0;

/// Ring fades in after a short delay; it disappears as soon as the cursor
/// leaves the body.
#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<NodeId>,
	pub highlight_t: f64,
	delay_t: f64,
}

pub struct OrbitGraphState {
	pub scene: Scene,
	pub graph: Graph,
	pub selector: PathSelector,
	pub paths: Vec<FoundPath>,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub flow_time: f64,
}

impl OrbitGraphState {
	pub fn new(config: &SceneConfig, seed: u64, width: f64, height: f64) -> Self {
		let scene = Scene::generate(config, seed, width, height);
		let graph = Graph::build(&scene.snapshot(), &config.links);
		Self {
			scene,
			graph,
			selector: PathSelector::new(PATH_PALETTE.len()),
			paths: Vec::new(),
			hover: HoverState::default(),
			width,
			height,
			flow_time: 0.0,
		}
	}

	pub fn node_at_position(&self, x: f64, y: f64) -> Option<NodeId> {
		hit_test(&self.scene.snapshot(), Point::new(x, y), &self.scene.config().hit)
	}

	/// Feeds a click into the selector; a completed pair queries a graph built
	/// from the scene as it is right now.
	pub fn pick(&mut self, x: f64, y: f64) {
		let snapshot = self.scene.snapshot();
		let hit = &self.scene.config().hit;
		let Some(node) = hit_test(&snapshot, Point::new(x, y), hit) else {
			debug!("pick at ({x:.0}, {y:.0}) hit nothing");
			return;
		};
		let links = self.scene.config().links;
		if let Some(path) = self.selector.register_pick(node, || Graph::build(&snapshot, &links)) {
			self.paths.push(path);
		}
	}

	pub fn pending_pick(&self) -> Option<NodeId> {
		match self.selector.selection() {
			Selection::Empty => None,
			Selection::OnePicked(node) => Some(node),
		}
	}

	pub fn set_hover(&mut self, node: Option<NodeId>) {
		if self.hover.node == node {
			return;
		}
		self.hover.node = node;
		self.hover.delay_t = 0.0;
		self.hover.highlight_t = 0.0;
	}

	pub fn tick(&mut self, dt: f64) {
		self.scene.step();
		self.graph = Graph::build(&self.scene.snapshot(), &self.scene.config().links);
		self.flow_time += dt;

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt).min(HOVER_DELAY);
			if self.hover.delay_t >= HOVER_DELAY {
				self.hover.highlight_t += (1.0 - self.hover.highlight_t) * (HOVER_SPEED * dt).min(1.0);
			}
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.scene.recenter(Point::new(width / 2.0, height / 2.0));
	}
}
