//! Plain vertex positions: one `"<x> <y>"` line per vertex, in vertex order.

use graphdraw_core::{Graph, Point};
use std::io::{self, Write};

use crate::StorageError;

pub fn write_positions<W: Write>(graph: &Graph, out: &mut W) -> io::Result<()> {
    for vertex in graph.vertices() {
        writeln!(out, "{} {}", vertex.position.x, vertex.position.y)?;
    }
    Ok(())
}

/// Read positions back. Blank lines are skipped; anything else must be two integers.
pub fn parse_positions(text: &str) -> Result<Vec<Point>, StorageError> {
    let mut points = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let mut fields = line.split_whitespace();
        let Some(first) = fields.next() else {
            continue;
        };
        let (Some(second), None) = (fields.next(), fields.next()) else {
            return Err(StorageError::Parse {
                line: line_no + 1,
                message: format!("expected two coordinates, got {:?}", line.trim()),
            });
        };
        points.push(Point::new(
            parse_coordinate(first, line_no + 1)?,
            parse_coordinate(second, line_no + 1)?,
        ));
    }
    Ok(points)
}

fn parse_coordinate(field: &str, line: usize) -> Result<i32, StorageError> {
    field.parse().map_err(|e| StorageError::Parse {
        line,
        message: format!("invalid coordinate {field:?}: {e}"),
    })
}
