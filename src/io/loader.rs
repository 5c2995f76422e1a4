//! Loader for the section-delimited street-network format.
//!
//! ```text
//! #Sommets
//! C;Centre
//! A;Avenue
//! #Aretes
//! C;A;10
//! ```
//!
//! `#Sommets` rows are `id;name` (or `id;quantity` for district maps),
//! `#Aretes` rows are undirected `id1;id2;weight`, `#Arcs` rows are directed.
//! Blank lines, other `#` lines and rows before the first section are
//! skipped. Fields are trimmed.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, RoutingError};
use crate::graph::{DirectedGraph, Network, UndirectedGraph};
use crate::models::{Loads, Vertex};

const VERTICES: &str = "#Sommets";
const EDGES: &str = "#Aretes";
const ARCS: &str = "#Arcs";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Vertices,
    Links,
}

/// Calls `on_vertex` / `on_link` with the 1-based line number and the
/// trimmed fields of every data row.
fn for_each_row<V, L>(text: &str, link_header: &str, mut on_vertex: V, mut on_link: L) -> Result<()>
where
    V: FnMut(usize, &[&str]) -> Result<()>,
    L: FnMut(usize, &[&str]) -> Result<()>,
{
    let mut section = Section::Preamble;
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with('#') {
            if line == VERTICES {
                section = Section::Vertices;
            } else if line == link_header {
                section = Section::Links;
            }
            continue;
        }
        let fields: Vec<&str> = line.split(';').map(str::trim).collect();
        match section {
            Section::Preamble => {}
            Section::Vertices => on_vertex(idx + 1, &fields)?,
            Section::Links => on_link(idx + 1, &fields)?,
        }
    }
    Ok(())
}

fn parse_error(line: usize, message: impl Into<String>) -> RoutingError {
    RoutingError::Parse {
        line,
        message: message.into(),
    }
}

fn vertex_fields<'a>(line: usize, fields: &[&'a str], expected: &str) -> Result<(&'a str, &'a str)> {
    match fields {
        [id, value, ..] if !id.is_empty() => Ok((*id, *value)),
        _ => Err(parse_error(line, format!("expected `{expected}`"))),
    }
}

fn link_fields<'a>(line: usize, fields: &[&'a str]) -> Result<(&'a str, &'a str, f64)> {
    match fields {
        [from, to, weight, ..] => {
            let weight = weight
                .parse::<f64>()
                .map_err(|_| parse_error(line, format!("invalid weight `{weight}`")))?;
            Ok((*from, *to, weight))
        }
        _ => Err(parse_error(line, "expected `id1;id2;weight`")),
    }
}

/// Parses an undirected street network (`#Sommets` + `#Aretes`).
///
/// # Errors
///
/// - `Parse` for malformed rows
/// - `VertexNotFound` for an edge between undeclared vertices
/// - `InvalidWeight` for negative weights
/// - `EmptyGraph` if no vertex is declared
///
/// # Examples
///
/// ```
/// use collect_routing::graph::Network;
/// use collect_routing::io::parse_undirected;
///
/// let text = "#Sommets\nC;Centre\nA;Avenue\n#Aretes\nC;A;10\n";
/// let g = parse_undirected(text).unwrap();
/// assert_eq!(g.vertex_count(), 2);
/// assert_eq!(g.edge_count(), 1);
/// assert_eq!(g.vertex(0).unwrap().name(), "Centre");
/// ```
pub fn parse_undirected(text: &str) -> Result<UndirectedGraph> {
    let mut graph = UndirectedGraph::new();
    let mut links = Vec::new();
    for_each_row(
        text,
        EDGES,
        |line, fields| {
            let (id, name) = vertex_fields(line, fields, "id;name")?;
            graph.insert_vertex(Vertex::new(id).with_name(name));
            Ok(())
        },
        |line, fields| {
            let (from, to, weight) = link_fields(line, fields)?;
            links.push((from.to_string(), to.to_string(), weight));
            Ok(())
        },
    )?;
    for (from, to, weight) in &links {
        let a = graph.require(from)?;
        let b = graph.require(to)?;
        graph.connect(a, b, *weight)?;
    }
    finish(graph)
}

/// Parses a one-way street network (`#Sommets` + `#Arcs`).
///
/// Errors as for [`parse_undirected`].
pub fn parse_directed(text: &str) -> Result<DirectedGraph> {
    let mut graph = DirectedGraph::new();
    let mut links = Vec::new();
    for_each_row(
        text,
        ARCS,
        |line, fields| {
            let (id, name) = vertex_fields(line, fields, "id;name")?;
            graph.insert_vertex(Vertex::new(id).with_name(name));
            Ok(())
        },
        |line, fields| {
            let (from, to, weight) = link_fields(line, fields)?;
            links.push((from.to_string(), to.to_string(), weight));
            Ok(())
        },
    )?;
    for (from, to, weight) in &links {
        graph.require(from)?;
        graph.require(to)?;
        graph.add_arc(from, to, *weight)?;
    }
    finish(graph)
}

/// Parses a district map whose `#Sommets` rows carry `id;quantity`.
///
/// Returns the district adjacency graph and the waste quantity per district.
/// Fails with `InvalidQuantity` for negative quantities, otherwise as
/// [`parse_undirected`].
///
/// # Examples
///
/// ```
/// use collect_routing::io::parse_with_quantities;
///
/// let text = "#Sommets\nN;4.5\nS;2\n#Aretes\nN;S;1\n";
/// let (g, loads) = parse_with_quantities(text).unwrap();
/// assert_eq!(g.edge_count(), 1);
/// assert_eq!(loads.get(0), 4.5);
/// ```
pub fn parse_with_quantities(text: &str) -> Result<(UndirectedGraph, Loads)> {
    let mut graph = UndirectedGraph::new();
    let mut quantities = Vec::new();
    let mut links = Vec::new();
    for_each_row(
        text,
        EDGES,
        |line, fields| {
            let (id, raw) = vertex_fields(line, fields, "id;quantity")?;
            let quantity = raw
                .parse::<f64>()
                .map_err(|_| parse_error(line, format!("invalid quantity `{raw}`")))?;
            graph.add_vertex(id);
            quantities.push((id.to_string(), quantity));
            Ok(())
        },
        |line, fields| {
            let (from, to, weight) = link_fields(line, fields)?;
            links.push((from.to_string(), to.to_string(), weight));
            Ok(())
        },
    )?;
    for (from, to, weight) in &links {
        let a = graph.require(from)?;
        let b = graph.require(to)?;
        graph.connect(a, b, *weight)?;
    }
    let loads = Loads::from_ids(&graph, quantities.iter().map(|(id, q)| (id.as_str(), *q)))?;
    Ok((finish(graph)?, loads))
}

fn finish<N: Network>(graph: N) -> Result<N> {
    if graph.is_empty() {
        return Err(RoutingError::EmptyGraph);
    }
    debug!(vertices = graph.vertex_count(), "graph loaded");
    Ok(graph)
}

/// Reads and parses an undirected network file.
pub fn load_undirected(path: impl AsRef<Path>) -> Result<UndirectedGraph> {
    parse_undirected(&fs::read_to_string(path)?)
}

/// Reads and parses a directed network file.
pub fn load_directed(path: impl AsRef<Path>) -> Result<DirectedGraph> {
    parse_directed(&fs::read_to_string(path)?)
}

/// Reads and parses a district map with quantities.
pub fn load_with_quantities(path: impl AsRef<Path>) -> Result<(UndirectedGraph, Loads)> {
    parse_with_quantities(&fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PENTAGON: &str = "\
# street network of the town centre
#Sommets
C;Centre
A;Avenue
B;Boulevard
D;Docks
E;Eglise

#Aretes
C;A;10
A;B;10
B;D;10
D;E;10
E;C;10
";

    #[test]
    fn test_parse_pentagon() {
        let g = parse_undirected(PENTAGON).expect("valid file");
        assert_eq!(g.vertex_count(), 5);
        assert_eq!(g.edge_count(), 5);
        assert!((g.total_weight() - 50.0).abs() < 1e-10);
        let d = g.require("D").expect("declared");
        assert_eq!(g.vertex(d).map(Vertex::name), Some("Docks"));
    }

    #[test]
    fn test_edges_section_ignored_by_directed_loader() {
        let text = "#Sommets\nA;a\nB;b\n#Aretes\nA;B;1\n#Arcs\nB;A;2\n";
        let g = parse_directed(text).expect("valid file");
        // `#Aretes` is not a directed section header, so its rows stay in
        // the vertex section and A;B;1 redeclares A (first one kept).
        assert_eq!(g.arc_count(), 1);
        assert_eq!(g.vertex_count(), 2);
        let (a, b) = (g.require("A").expect("a"), g.require("B").expect("b"));
        assert_eq!(g.vertex(a).map(Vertex::name), Some("a"));
        assert_eq!(g.weight(b, a), 2.0);
        assert_eq!(g.weight(a, b), f64::INFINITY);
    }

    #[test]
    fn test_undeclared_vertex() {
        let text = "#Sommets\nA;a\n#Aretes\nA;Z;1\n";
        assert!(matches!(
            parse_undirected(text),
            Err(RoutingError::VertexNotFound(id)) if id == "Z"
        ));
    }

    #[test]
    fn test_bad_weight_reports_line() {
        let text = "#Sommets\nA;a\nB;b\n#Aretes\nA;B;far\n";
        match parse_undirected(text) {
            Err(RoutingError::Parse { line, message }) => {
                assert_eq!(line, 5);
                assert!(message.contains("far"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_short_rows() {
        assert!(matches!(
            parse_undirected("#Sommets\nA\n"),
            Err(RoutingError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            parse_undirected("#Sommets\nA;a\n#Aretes\nA;A\n"),
            Err(RoutingError::Parse { line: 4, .. })
        ));
    }

    #[test]
    fn test_negative_weight() {
        let text = "#Sommets\nA;a\nB;b\n#Aretes\nA;B;-3\n";
        assert!(matches!(
            parse_undirected(text),
            Err(RoutingError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn test_empty_file() {
        assert!(matches!(
            parse_undirected("# nothing here\n"),
            Err(RoutingError::EmptyGraph)
        ));
    }

    #[test]
    fn test_quantities() {
        let text = "#Sommets\nN;4.5\nS;2\nW;0\n#Aretes\nN;S;1\nS;W;1\n";
        let (g, loads) = parse_with_quantities(text).expect("valid file");
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(loads.get(g.require("S").expect("s")), 2.0);
        assert_eq!(loads.total(&[0, 1, 2]), 6.5);
    }

    #[test]
    fn test_negative_quantity() {
        assert!(matches!(
            parse_with_quantities("#Sommets\nN;-1\n"),
            Err(RoutingError::InvalidQuantity { .. })
        ));
        assert!(matches!(
            parse_with_quantities("#Sommets\nN;lots\n"),
            Err(RoutingError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            load_undirected("/definitely/not/here.txt"),
            Err(RoutingError::Io(_))
        ));
    }
}
