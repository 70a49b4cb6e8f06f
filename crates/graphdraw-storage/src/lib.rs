use graphdraw_core::{Graph, Point};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

pub mod dot;
pub mod positions;

pub use dot::{DotTopology, MAX_VERTEX_ID, parse_dot, write_dot};
pub use positions::{parse_positions, write_positions};

#[cfg(test)]
mod tests;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Write `graph` to `path` in the DOT-like format, replacing any existing file.
pub fn save_graph<P: AsRef<Path>>(path: P, graph: &Graph) -> Result<(), StorageError> {
    let path = path.as_ref();
    let mut out = BufWriter::new(File::create(path)?);
    write_dot(graph, &mut out)?;
    out.flush()?;
    tracing::info!(
        "Saved graph ({} vertices, {} edges) to {:?}",
        graph.vertex_count(),
        graph.edge_count(),
        path
    );
    Ok(())
}

pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<DotTopology, StorageError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let topology = parse_dot(&text)?;
    tracing::info!(
        "Loaded graph topology ({} vertices, {} edges) from {:?}",
        topology.vertex_count,
        topology.edges.len(),
        path
    );
    Ok(topology)
}

/// Write one `"<x> <y>"` line per vertex to `path`.
pub fn save_positions<P: AsRef<Path>>(path: P, graph: &Graph) -> Result<(), StorageError> {
    let path = path.as_ref();
    let mut out = BufWriter::new(File::create(path)?);
    write_positions(graph, &mut out)?;
    out.flush()?;
    tracing::info!("Saved {} positions to {:?}", graph.vertex_count(), path);
    Ok(())
}

pub fn load_positions<P: AsRef<Path>>(path: P) -> Result<Vec<Point>, StorageError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let points = parse_positions(&text)?;
    tracing::info!("Loaded {} positions from {:?}", points.len(), path);
    Ok(points)
}
