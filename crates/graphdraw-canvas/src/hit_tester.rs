use graphdraw_core::{Graph, Point};

/// Clicks closer than this to a vertex centre hit the vertex.
pub const VERTEX_HIT_RADIUS: f64 = 15.0;
/// Clicks closer than this to an edge segment hit the edge.
pub const EDGE_HIT_TOLERANCE: f64 = 5.0;

/// Linear-scan hit tester for vertices and edges.
///
/// Both lookups return the *first* match in insertion order, not the closest
/// one. Overlapping vertices therefore resolve to the oldest vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTester {
    vertex_radius: f64,
    edge_tolerance: f64,
}

impl Default for HitTester {
    fn default() -> Self {
        Self::new()
    }
}

impl HitTester {
    pub fn new() -> Self {
        Self {
            vertex_radius: VERTEX_HIT_RADIUS,
            edge_tolerance: EDGE_HIT_TOLERANCE,
        }
    }

    /// Index of the first vertex strictly within the hit radius of `pos`.
    pub fn vertex_at(&self, graph: &Graph, pos: Point) -> Option<usize> {
        graph
            .vertices()
            .iter()
            .position(|vertex| pos.distance(vertex.position) < self.vertex_radius)
    }

    /// Index of the first edge whose segment is strictly within tolerance of `pos`.
    ///
    /// Zero-length edges (including self-loops) are tested as a single point.
    pub fn edge_at(&self, graph: &Graph, pos: Point) -> Option<usize> {
        (0..graph.edge_count()).find(|&index| {
            graph
                .edge_endpoints(index)
                .is_some_and(|(a, b)| point_segment_distance(pos, a, b) < self.edge_tolerance)
        })
    }
}

/// Distance from `p` to the closed segment `a`-`b`.
pub fn point_segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let (px, py) = (f64::from(p.x), f64::from(p.y));
    let (ax, ay) = (f64::from(a.x), f64::from(a.y));
    let (bx, by) = (f64::from(b.x), f64::from(b.y));

    let (dx, dy) = (bx - ax, by - ay);
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return p.distance(a);
    }

    let t = (((px - ax) * dx + (py - ay) * dy) / len_sq).clamp(0.0, 1.0);
    let (cx, cy) = (ax + t * dx, ay + t * dy);
    (px - cx).hypot(py - cy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphdraw_core::Rgb;

    const GRAY: Rgb = Rgb::new(128, 128, 128);

    fn graph_with(points: &[(i32, i32)], edges: &[(usize, usize)]) -> Graph {
        let mut graph = Graph::new();
        for &(x, y) in points {
            graph.add_vertex(Point::new(x, y), GRAY);
        }
        for &(a, b) in edges {
            graph.add_edge(a, b).unwrap();
        }
        graph
    }

    #[test]
    fn test_vertex_at_radius_is_exclusive() {
        let graph = graph_with(&[(100, 100)], &[]);
        let tester = HitTester::new();

        assert_eq!(tester.vertex_at(&graph, Point::new(100, 100)), Some(0));
        assert_eq!(tester.vertex_at(&graph, Point::new(114, 100)), Some(0));
        assert_eq!(tester.vertex_at(&graph, Point::new(115, 100)), None);
        // 9-12-15 triangle lands exactly on the radius.
        assert_eq!(tester.vertex_at(&graph, Point::new(109, 112)), None);
    }

    #[test]
    fn test_vertex_at_first_inserted_wins() {
        let graph = graph_with(&[(100, 100), (105, 100)], &[]);
        let tester = HitTester::new();

        // Closer to vertex 1, but vertex 0 is scanned first.
        assert_eq!(tester.vertex_at(&graph, Point::new(106, 100)), Some(0));
        assert_eq!(tester.vertex_at(&graph, Point::new(118, 100)), Some(1));
    }

    #[test]
    fn test_vertex_at_empty_graph() {
        assert_eq!(HitTester::new().vertex_at(&Graph::new(), Point::new(0, 0)), None);
    }

    #[test]
    fn test_edge_at_segment_distance() {
        let graph = graph_with(&[(0, 0), (100, 0)], &[(0, 1)]);
        let tester = HitTester::new();

        assert_eq!(tester.edge_at(&graph, Point::new(50, 4)), Some(0));
        assert_eq!(tester.edge_at(&graph, Point::new(50, -4)), Some(0));
        assert_eq!(tester.edge_at(&graph, Point::new(50, 5)), None);
        // Past the end of the segment the distance is to the endpoint.
        assert_eq!(tester.edge_at(&graph, Point::new(103, 3)), Some(0));
        assert_eq!(tester.edge_at(&graph, Point::new(104, 4)), None);
    }

    #[test]
    fn test_edge_at_first_match_wins() {
        let graph = graph_with(&[(0, 0), (100, 0), (0, 2), (100, 2)], &[(0, 1), (2, 3)]);
        let tester = HitTester::new();
        assert_eq!(tester.edge_at(&graph, Point::new(50, 2)), Some(0));
        assert_eq!(tester.edge_at(&graph, Point::new(50, 6)), Some(1));
    }

    #[test]
    fn test_edge_at_degenerate_edge() {
        let graph = graph_with(&[(40, 40)], &[(0, 0)]);
        let tester = HitTester::new();
        assert_eq!(tester.edge_at(&graph, Point::new(43, 40)), Some(0));
        assert_eq!(tester.edge_at(&graph, Point::new(45, 40)), None);
    }

    #[test]
    fn test_point_segment_distance() {
        let a = Point::new(0, 0);
        let b = Point::new(10, 0);
        assert_eq!(point_segment_distance(Point::new(5, 3), a, b), 3.0);
        assert_eq!(point_segment_distance(Point::new(-3, 4), a, b), 5.0);
        assert_eq!(point_segment_distance(Point::new(13, 4), a, b), 5.0);
        assert_eq!(point_segment_distance(Point::new(3, 4), a, a), 5.0);
    }
}
