//! The DOT-like graph format.
//!
//! ```text
//! graph G {
//!   0;
//!   1;
//!   0 -- 1;
//! }
//! ```
//!
//! Only topology is stored. Reading is line based: each trimmed line is either
//! a vertex declaration `<id>;`, an edge `<a> -- <b>;`, or ignored.

use graphdraw_core::{Edge, Graph};
use regex::Regex;
use std::io::{self, Write};
use std::sync::LazyLock;

use crate::StorageError;

static VERTEX_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+);$").expect("vertex pattern is valid"));
static EDGE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+) -- ([0-9]+);$").expect("edge pattern is valid"));

/// Safety cap on vertex ids accepted on load. Every id up to the highest one
/// declared becomes a vertex, so a single large id would allocate that many.
pub const MAX_VERTEX_ID: usize = 100_000;

/// Graph shape recovered from a DOT-like file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DotTopology {
    /// Highest declared vertex id plus one. Ids in between that were never
    /// declared still count.
    pub vertex_count: usize,
    pub edges: Vec<Edge>,
}

pub fn write_dot<W: Write>(graph: &Graph, out: &mut W) -> io::Result<()> {
    writeln!(out, "graph G {{")?;
    for index in 0..graph.vertex_count() {
        writeln!(out, "  {index};")?;
    }
    for edge in graph.edges() {
        writeln!(out, "  {} -- {};", edge.a, edge.b)?;
    }
    writeln!(out, "}}")
}

pub fn parse_dot(text: &str) -> Result<DotTopology, StorageError> {
    let mut vertex_count = 0usize;
    let mut edges = Vec::new();

    for (line_no, raw) in text.lines().enumerate() {
        let line_no = line_no + 1;
        let line = raw.trim();

        if let Some(caps) = VERTEX_LINE.captures(line) {
            let id = parse_id(&caps[1], line_no)?;
            if id > MAX_VERTEX_ID {
                return Err(StorageError::Parse {
                    line: line_no,
                    message: format!(
                        "vertex id {id} is above the safety limit of {MAX_VERTEX_ID}; \
                         graphs this large are refused rather than allocated"
                    ),
                });
            }
            vertex_count = vertex_count.max(id + 1);
        } else if let Some(caps) = EDGE_LINE.captures(line) {
            let a = parse_id(&caps[1], line_no)?;
            let b = parse_id(&caps[2], line_no)?;
            edges.push((line_no, Edge::new(a, b)));
        }
    }

    let edges = edges
        .into_iter()
        .map(|(line, edge)| {
            if edge.a >= vertex_count || edge.b >= vertex_count {
                Err(StorageError::Parse {
                    line,
                    message: format!(
                        "edge {} -- {} refers to an undeclared vertex ({} declared)",
                        edge.a, edge.b, vertex_count
                    ),
                })
            } else {
                Ok(edge)
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DotTopology {
        vertex_count,
        edges,
    })
}

fn parse_id(digits: &str, line: usize) -> Result<usize, StorageError> {
    digits.parse().map_err(|e| StorageError::Parse {
        line,
        message: format!("invalid vertex id {digits:?}: {e}"),
    })
}
