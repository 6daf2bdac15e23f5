//! Proximity graph construction and shortest-path queries over a snapshot of
//! the scene.
//!
//! Node ids are assigned orbiting bodies first, then sub-orbiting bodies, then
//! the anchor. Every query works on a freshly built [`Graph`].

mod dijkstra;
mod graph;
mod hit_test;
mod path;
mod selection;
mod types;

pub use dijkstra::{ShortestPaths, shortest_paths};
pub use graph::{Graph, LinkThresholds};
pub use hit_test::{HitRadii, hit_test};
pub use path::{find_path, reconstruct};
pub use selection::{FoundPath, PathSelector, Selection};
pub use types::{NodeId, NodeKind, NodeLayout, Point, Snapshot, SubOrbiter};
