use super::*;
use graphdraw_core::{Edge, Rgb};
use std::fs;
use tempfile::tempdir;

fn sample_graph() -> Graph {
    let mut graph = Graph::new();
    graph.add_vertex(Point::new(100, 120), Rgb::new(200, 10, 10));
    graph.add_vertex(Point::new(-3, 77), Rgb::new(10, 200, 10));
    graph.add_vertex(Point::new(640, 480), Rgb::new(10, 10, 200));
    graph.add_edge(0, 1).unwrap();
    graph.add_edge(1, 2).unwrap();
    graph.add_edge(2, 2).unwrap();
    graph
}

#[test]
fn test_positions_round_trip() -> Result<(), StorageError> {
    let dir = tempdir()?;
    let path = dir.path().join("positions.txt");
    let graph = sample_graph();

    save_positions(&path, &graph)?;
    let points = load_positions(&path)?;

    let expected: Vec<Point> = graph.vertices().iter().map(|v| v.position).collect();
    assert_eq!(points, expected);
    Ok(())
}

#[test]
fn test_positions_file_contents() -> Result<(), StorageError> {
    let dir = tempdir()?;
    let path = dir.path().join("positions.txt");

    save_positions(&path, &sample_graph())?;
    assert_eq!(fs::read_to_string(&path)?, "100 120\n-3 77\n640 480\n");
    Ok(())
}

#[test]
fn test_graph_round_trip_keeps_only_topology() -> Result<(), StorageError> {
    let dir = tempdir()?;
    let path = dir.path().join("graph.dot");
    let graph = sample_graph();

    save_graph(&path, &graph)?;
    let topology = load_graph(&path)?;

    assert_eq!(topology.vertex_count, graph.vertex_count());
    assert_eq!(topology.edges, graph.edges().to_vec());
    Ok(())
}

#[test]
fn test_graph_file_contents() -> Result<(), StorageError> {
    let dir = tempdir()?;
    let path = dir.path().join("graph.dot");

    save_graph(&path, &sample_graph())?;
    assert_eq!(
        fs::read_to_string(&path)?,
        "graph G {\n  0;\n  1;\n  2;\n  0 -- 1;\n  1 -- 2;\n  2 -- 2;\n}\n"
    );
    Ok(())
}

#[test]
fn test_save_overwrites_existing_file() -> Result<(), StorageError> {
    let dir = tempdir()?;
    let path = dir.path().join("graph.dot");
    fs::write(&path, "stale contents that are much longer than the new graph\n".repeat(10))?;

    let mut graph = Graph::new();
    graph.add_vertex(Point::new(0, 0), Rgb::default());
    save_graph(&path, &graph)?;

    assert_eq!(fs::read_to_string(&path)?, "graph G {\n  0;\n}\n");
    Ok(())
}

#[test]
fn test_load_handwritten_graph() -> Result<(), StorageError> {
    let dir = tempdir()?;
    let path = dir.path().join("hand.gv");
    fs::write(
        &path,
        "// drawn by hand\ngraph G {\n    3;\n  0;\n  0 -- 3;\n  label=\"x\";\n}\n",
    )?;

    let topology = load_graph(&path)?;
    assert_eq!(topology.vertex_count, 4);
    assert_eq!(topology.edges, vec![Edge::new(0, 3)]);
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let result = load_graph(dir.path().join("nope.dot"));
    assert!(matches!(result, Err(StorageError::Io(_))));
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("graph.dot");
    let result = save_graph(&path, &sample_graph());
    assert!(matches!(result, Err(StorageError::Io(_))));
    assert!(!path.exists());
}

#[test]
fn test_parse_error_message_names_line() {
    let err = parse_positions("1 2\nfoo bar\n").unwrap_err();
    assert!(err.to_string().starts_with("line 2:"));
}
