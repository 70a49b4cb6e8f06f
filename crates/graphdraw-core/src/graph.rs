use crate::{Edge, GraphError, Point, Rgb, Vertex};

/// The drawn graph: vertices and edges in insertion order.
///
/// A vertex is identified by its index in `vertices`. Every edge refers to
/// valid vertex indices; vertices are never removed individually, so the
/// only way to shrink the vertex list is [`Graph::clear`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from parts, checking every edge against the vertex list.
    pub fn from_parts(vertices: Vec<Vertex>, edges: Vec<Edge>) -> Result<Self, GraphError> {
        let count = vertices.len();
        for edge in &edges {
            for index in [edge.a, edge.b] {
                if index >= count {
                    return Err(GraphError::VertexOutOfRange { index, count });
                }
            }
        }
        Ok(Self { vertices, edges })
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    /// Append a vertex and return its index.
    pub fn add_vertex(&mut self, position: Point, color: Rgb) -> usize {
        self.vertices.push(Vertex { position, color });
        self.vertices.len() - 1
    }

    pub fn move_vertex(&mut self, index: usize, position: Point) -> Result<(), GraphError> {
        let count = self.vertices.len();
        let vertex = self
            .vertices
            .get_mut(index)
            .ok_or(GraphError::VertexOutOfRange { index, count })?;
        vertex.position = position;
        Ok(())
    }

    /// Append an edge and return its index.
    pub fn add_edge(&mut self, a: usize, b: usize) -> Result<usize, GraphError> {
        let count = self.vertices.len();
        for index in [a, b] {
            if index >= count {
                return Err(GraphError::VertexOutOfRange { index, count });
            }
        }
        self.edges.push(Edge::new(a, b));
        Ok(self.edges.len() - 1)
    }

    pub fn remove_edge(&mut self, index: usize) -> Result<Edge, GraphError> {
        if index >= self.edges.len() {
            return Err(GraphError::EdgeOutOfRange {
                index,
                count: self.edges.len(),
            });
        }
        Ok(self.edges.remove(index))
    }

    /// Positions of both endpoints of the edge at `index`.
    pub fn edge_endpoints(&self, index: usize) -> Option<(Point, Point)> {
        let edge = self.edges.get(index)?;
        let a = self.vertices.get(edge.a)?.position;
        let b = self.vertices.get(edge.b)?.position;
        Some((a, b))
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
    }
}
