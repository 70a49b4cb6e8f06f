pub mod controller;
pub mod hit_tester;
pub mod scatter;

pub use controller::{CanvasController, CanvasEvent};
pub use hit_tester::{EDGE_HIT_TOLERANCE, HitTester, VERTEX_HIT_RADIUS, point_segment_distance};
pub use scatter::{CanvasSize, PLACEMENT_MARGIN, colorize_positions, random_color, scatter_topology};
