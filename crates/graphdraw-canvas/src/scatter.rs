//! Random colours and positions for vertices whose appearance was not saved.

use graphdraw_core::{Edge, Graph, GraphError, Point, Rgb, Vertex};
use rand::Rng;

/// Loaded vertices keep at least this many pixels from every canvas border.
pub const PLACEMENT_MARGIN: i32 = 20;

/// Size of the drawing area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: i32,
    pub height: i32,
}

impl CanvasSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// A uniformly random point in `[margin, width - margin) x [margin, height - margin)`.
    ///
    /// Canvases too small to leave any room collapse to the margin itself.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        let x = PLACEMENT_MARGIN + rng.random_range(0..placement_span(self.width));
        let y = PLACEMENT_MARGIN + rng.random_range(0..placement_span(self.height));
        Point::new(x, y)
    }
}

fn placement_span(extent: i32) -> i32 {
    extent.saturating_sub(2 * PLACEMENT_MARGIN).max(1)
}

pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    Rgb::new(rng.random(), rng.random(), rng.random())
}

/// Build a graph of `vertex_count` randomly placed vertices joined by `edges`.
pub fn scatter_topology<R: Rng + ?Sized>(
    vertex_count: usize,
    edges: Vec<Edge>,
    size: CanvasSize,
    rng: &mut R,
) -> Result<Graph, GraphError> {
    let vertices = (0..vertex_count)
        .map(|_| Vertex {
            position: size.random_point(rng),
            color: random_color(rng),
        })
        .collect();
    Graph::from_parts(vertices, edges)
}

/// Build an edgeless graph with the given positions and fresh colours.
pub fn colorize_positions<R: Rng + ?Sized>(positions: &[Point], rng: &mut R) -> Graph {
    let mut graph = Graph::new();
    for &position in positions {
        graph.add_vertex(position, random_color(rng));
    }
    graph
}
