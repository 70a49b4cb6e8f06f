use graphdraw_core::{Edge, Graph, Mode, Point};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::hit_tester::HitTester;
use crate::scatter::random_color;

/// What a pointer press did to the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasEvent {
    Nothing,
    VertexAdded(usize),
    DragStarted(usize),
    EdgeRemoved(Edge),
    /// First half of the two-click edge gesture: the source is armed.
    EdgeStarted(usize),
    EdgeAdded(usize),
}

impl CanvasEvent {
    /// Whether the drawn graph changed and needs a repaint.
    pub fn mutated(&self) -> bool {
        matches!(
            self,
            CanvasEvent::VertexAdded(_) | CanvasEvent::EdgeRemoved(_) | CanvasEvent::EdgeAdded(_)
        )
    }
}

/// Turns pointer events into graph mutations.
///
/// Owns the in-memory graph together with the interaction state that only
/// makes sense relative to it: the current mode, the armed edge source and
/// the vertex being dragged.
pub struct CanvasController {
    graph: Graph,
    mode: Mode,
    pending_edge: Option<usize>,
    dragging: Option<usize>,
    hit_tester: HitTester,
    rng: StdRng,
}

impl Default for CanvasController {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasController {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Deterministic colours, for tests and reproducible sessions.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            graph: Graph::new(),
            mode: Mode::default(),
            pending_edge: None,
            dragging: None,
            hit_tester: HitTester::new(),
            rng,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch modes. An armed edge source survives the switch.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            tracing::debug!("Canvas mode {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
    }

    pub fn pending_edge(&self) -> Option<usize> {
        self.pending_edge
    }

    pub fn dragging(&self) -> Option<usize> {
        self.dragging
    }

    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub fn vertex_at(&self, pos: Point) -> Option<usize> {
        self.hit_tester.vertex_at(&self.graph, pos)
    }

    pub fn edge_at(&self, pos: Point) -> Option<usize> {
        self.hit_tester.edge_at(&self.graph, pos)
    }

    /// Primary button went down at `pos`.
    pub fn press(&mut self, pos: Point) -> CanvasEvent {
        let event = match self.mode {
            Mode::Vertex => self.press_vertex_mode(pos),
            Mode::Edge => self.press_edge_mode(pos),
        };
        if event != CanvasEvent::Nothing {
            tracing::debug!("Canvas press at {}: {:?}", pos, event);
        }
        event
    }

    fn press_vertex_mode(&mut self, pos: Point) -> CanvasEvent {
        if let Some(index) = self.vertex_at(pos) {
            self.dragging = Some(index);
            return CanvasEvent::DragStarted(index);
        }
        let color = random_color(&mut self.rng);
        CanvasEvent::VertexAdded(self.graph.add_vertex(pos, color))
    }

    fn press_edge_mode(&mut self, pos: Point) -> CanvasEvent {
        if let Some(index) = self.edge_at(pos) {
            return match self.graph.remove_edge(index) {
                Ok(edge) => CanvasEvent::EdgeRemoved(edge),
                Err(e) => {
                    tracing::warn!("Hit edge vanished before removal: {}", e);
                    CanvasEvent::Nothing
                }
            };
        }

        let Some(clicked) = self.vertex_at(pos) else {
            return CanvasEvent::Nothing;
        };

        match self.pending_edge.take() {
            None => {
                self.pending_edge = Some(clicked);
                CanvasEvent::EdgeStarted(clicked)
            }
            Some(source) => match self.graph.add_edge(source, clicked) {
                Ok(index) => CanvasEvent::EdgeAdded(index),
                Err(e) => {
                    tracing::warn!("Dropping edge gesture: {}", e);
                    CanvasEvent::Nothing
                }
            },
        }
    }

    /// Pointer moved to `pos` with the primary button held.
    ///
    /// Returns `true` when a vertex was moved.
    pub fn drag(&mut self, pos: Point) -> bool {
        if self.mode != Mode::Vertex {
            return false;
        }
        let Some(index) = self.dragging else {
            return false;
        };
        match self.graph.move_vertex(index, pos) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Dragged vertex is gone: {}", e);
                self.dragging = None;
                false
            }
        }
    }

    /// Primary button released.
    pub fn release(&mut self) {
        if let Some(index) = self.dragging.take() {
            tracing::debug!("Finished dragging vertex {}", index);
        }
    }

    /// Empty the graph and drop any half-finished gesture.
    pub fn clear(&mut self) {
        self.graph.clear();
        self.pending_edge = None;
        self.dragging = None;
    }

    /// Swap in a freshly loaded graph.
    pub fn replace_graph(&mut self, graph: Graph) {
        self.graph = graph;
        self.pending_edge = None;
        self.dragging = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> CanvasController {
        CanvasController::with_seed(42)
    }

    #[test]
    fn test_vertex_mode_click_on_empty_space_adds_vertex() {
        let mut ctl = controller();
        assert_eq!(ctl.press(Point::new(10, 20)), CanvasEvent::VertexAdded(0));
        ctl.release();
        assert_eq!(ctl.press(Point::new(200, 20)), CanvasEvent::VertexAdded(1));
        assert_eq!(ctl.graph().vertex_count(), 2);
        assert_eq!(ctl.graph().vertices()[0].position, Point::new(10, 20));
    }

    #[test]
    fn test_vertex_mode_click_on_vertex_starts_drag() {
        let mut ctl = controller();
        ctl.press(Point::new(100, 100));
        ctl.release();

        assert_eq!(ctl.press(Point::new(110, 105)), CanvasEvent::DragStarted(0));
        assert_eq!(ctl.dragging(), Some(0));
        assert_eq!(ctl.graph().vertex_count(), 1);

        assert!(ctl.drag(Point::new(300, 250)));
        assert!(ctl.drag(Point::new(310, 260)));
        assert_eq!(ctl.graph().vertices()[0].position, Point::new(310, 260));

        ctl.release();
        assert_eq!(ctl.dragging(), None);
        assert!(!ctl.drag(Point::new(0, 0)));
        assert_eq!(ctl.graph().vertices()[0].position, Point::new(310, 260));
    }

    #[test]
    fn test_drag_ignored_in_edge_mode() {
        let mut ctl = controller();
        ctl.press(Point::new(100, 100));
        ctl.press(Point::new(100, 100));
        assert_eq!(ctl.dragging(), Some(0));

        ctl.set_mode(Mode::Edge);
        assert!(!ctl.drag(Point::new(500, 500)));
        assert_eq!(ctl.graph().vertices()[0].position, Point::new(100, 100));
    }

    #[test]
    fn test_drag_keeps_color() {
        let mut ctl = controller();
        ctl.press(Point::new(50, 50));
        let color = ctl.graph().vertices()[0].color;
        ctl.press(Point::new(50, 50));
        ctl.drag(Point::new(90, 90));
        assert_eq!(ctl.graph().vertices()[0].color, color);
    }

    #[test]
    fn test_two_click_edge_gesture() {
        let mut ctl = controller();
        ctl.press(Point::new(0, 0));
        ctl.press(Point::new(100, 0));
        ctl.release();
        ctl.set_mode(Mode::Edge);

        assert_eq!(ctl.press(Point::new(2, 2)), CanvasEvent::EdgeStarted(0));
        assert_eq!(ctl.pending_edge(), Some(0));
        assert_eq!(ctl.graph().edge_count(), 0);

        assert_eq!(ctl.press(Point::new(98, 1)), CanvasEvent::EdgeAdded(0));
        assert_eq!(ctl.pending_edge(), None);
        assert_eq!(ctl.graph().edges(), &[Edge::new(0, 1)]);
    }

    #[test]
    fn test_same_vertex_twice_makes_self_loop() {
        let mut ctl = controller();
        ctl.press(Point::new(40, 40));
        ctl.set_mode(Mode::Edge);

        assert_eq!(ctl.press(Point::new(40, 40)), CanvasEvent::EdgeStarted(0));
        assert_eq!(ctl.press(Point::new(41, 40)), CanvasEvent::EdgeAdded(0));
        assert!(ctl.graph().edges()[0].is_self_loop());
    }

    #[test]
    fn test_edge_mode_click_on_empty_space_keeps_selection() {
        let mut ctl = controller();
        ctl.press(Point::new(0, 0));
        ctl.set_mode(Mode::Edge);
        ctl.press(Point::new(0, 0));

        assert_eq!(ctl.press(Point::new(400, 400)), CanvasEvent::Nothing);
        assert_eq!(ctl.pending_edge(), Some(0));
        assert_eq!(ctl.graph().vertex_count(), 1);
    }

    #[test]
    fn test_edge_mode_click_on_edge_removes_exactly_one() {
        let mut ctl = controller();
        let mut graph = Graph::new();
        for x in [0, 100, 200] {
            graph.add_vertex(Point::new(x, 0), Default::default());
        }
        // 0-1 and 0-2 overlap along y = 0.
        for (a, b) in [(0, 1), (0, 2), (1, 2)] {
            graph.add_edge(a, b).unwrap();
        }
        ctl.replace_graph(graph);
        ctl.set_mode(Mode::Edge);

        assert_eq!(
            ctl.press(Point::new(50, 3)),
            CanvasEvent::EdgeRemoved(Edge::new(0, 1))
        );
        assert_eq!(ctl.graph().edge_count(), 2);
        assert_eq!(ctl.graph().vertex_count(), 3);
        assert_eq!(ctl.graph().edges(), &[Edge::new(0, 2), Edge::new(1, 2)]);
    }

    #[test]
    fn test_edge_hit_takes_priority_over_vertex() {
        let mut ctl = controller();
        ctl.press(Point::new(0, 0));
        ctl.press(Point::new(100, 0));
        ctl.set_mode(Mode::Edge);
        ctl.press(Point::new(0, 0));
        ctl.press(Point::new(100, 0));

        // On top of vertex 0, which is also on the edge.
        assert_eq!(
            ctl.press(Point::new(0, 0)),
            CanvasEvent::EdgeRemoved(Edge::new(0, 1))
        );
        assert_eq!(ctl.pending_edge(), None);
    }

    #[test]
    fn test_mode_switch_preserves_pending_edge() {
        let mut ctl = controller();
        ctl.press(Point::new(0, 0));
        ctl.set_mode(Mode::Edge);
        ctl.press(Point::new(0, 0));
        ctl.set_mode(Mode::Vertex);
        ctl.set_mode(Mode::Edge);
        assert_eq!(ctl.pending_edge(), Some(0));
    }

    #[test]
    fn test_clear_resets_gesture_state() {
        let mut ctl = controller();
        ctl.press(Point::new(0, 0));
        ctl.set_mode(Mode::Edge);
        ctl.press(Point::new(0, 0));
        ctl.clear();

        assert!(ctl.graph().is_empty());
        assert_eq!(ctl.pending_edge(), None);
        assert_eq!(ctl.dragging(), None);
        assert_eq!(ctl.mode(), Mode::Edge);
    }

    #[test]
    fn test_replace_graph() {
        let mut ctl = controller();
        ctl.press(Point::new(0, 0));
        ctl.press(Point::new(0, 0));

        let mut loaded = Graph::new();
        loaded.add_vertex(Point::new(5, 5), Default::default());
        loaded.add_vertex(Point::new(50, 5), Default::default());
        loaded.add_edge(0, 1).unwrap();
        ctl.replace_graph(loaded.clone());

        assert_eq!(ctl.graph(), &loaded);
        assert_eq!(ctl.dragging(), None);
    }

    #[test]
    fn test_event_mutated() {
        assert!(CanvasEvent::VertexAdded(0).mutated());
        assert!(CanvasEvent::EdgeRemoved(Edge::new(0, 0)).mutated());
        assert!(!CanvasEvent::EdgeStarted(0).mutated());
        assert!(!CanvasEvent::Nothing.mutated());
    }
}
