//! Edge-list loader tests for the CLI.

use std::io::Write;

use graphwalk::cli::commands::load_graph;
use graphwalk::GraphError;

use tempfile::NamedTempFile;

fn write_edge_list(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_load_edges_comments_and_isolated_vertices() {
    let file = write_edge_list(
        "# demo graph\n\
         a b\n\
         b c\n\
         \n\
         loner\n\
         a b\n",
    );

    let g = load_graph(file.path()).unwrap();
    assert_eq!(g.vertex_count(), 4);
    // The duplicate "a b" line is ignored.
    assert_eq!(g.edge_count(), 2);
    assert!(g.contains_vertex(&"loner".to_string()));
    assert!(g.contains_edge(&"a".to_string(), &"b".to_string()));
}

#[test]
fn test_load_self_edge_line_keeps_vertex() {
    let file = write_edge_list("a a\n");
    let g = load_graph(file.path()).unwrap();
    assert_eq!(g.vertex_count(), 1);
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn test_load_rejects_extra_tokens() {
    let file = write_edge_list("a b\na b c\n");
    match load_graph(file.path()) {
        Err(GraphError::MalformedEdgeList { line, text }) => {
            assert_eq!(line, 2);
            assert_eq!(text, "a b c");
        }
        other => panic!("expected MalformedEdgeList, got {:?}", other.map(|g| g.vertex_count())),
    }
}

#[test]
fn test_load_missing_file_is_io_error() {
    let result = load_graph(std::path::Path::new("/nonexistent/graph.txt"));
    assert!(matches!(result, Err(GraphError::Io(_))));
}

#[test]
fn test_load_whitespace_tolerance() {
    let file = write_edge_list("  a\tb  \n\t\n   c\n");
    let g = load_graph(file.path()).unwrap();
    assert_eq!(g.vertex_count(), 3);
    assert_eq!(g.edge_count(), 1);
}
