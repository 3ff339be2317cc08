//! Build a graph from its text description

use super::{FormatError, TextWeight};
use crate::graph::{Graph, GraphMode, WeightedGraph};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Parse an unweighted graph; a third edge field, if present, is ignored
pub fn parse_graph(input: &str) -> Result<Graph, FormatError> {
    parse(input)
}

/// Parse a weighted graph; every edge must carry a numeric weight
pub fn parse_weighted_graph(input: &str) -> Result<WeightedGraph, FormatError> {
    parse(input)
}

/// Read an unweighted graph description from a file
pub fn read_graph(path: impl AsRef<Path>) -> Result<Graph, FormatError> {
    let path = path.as_ref();
    info!("Reading graph from {:?}", path);
    parse_graph(&fs::read_to_string(path)?)
}

/// Read a weighted graph description from a file
pub fn read_weighted_graph(path: impl AsRef<Path>) -> Result<WeightedGraph, FormatError> {
    let path = path.as_ref();
    info!("Reading weighted graph from {:?}", path);
    parse_weighted_graph(&fs::read_to_string(path)?)
}

fn parse<W: TextWeight>(input: &str) -> Result<Graph<W>, FormatError> {
    let mut lines = input.lines().enumerate();

    let mode_line = lines.next().map(|(_, line)| line.trim()).unwrap_or_default();
    let mode: GraphMode = mode_line
        .parse()
        .map_err(|_| FormatError::InvalidMode(mode_line.to_string()))?;

    let mut graph: Graph<W> = Graph::new(mode);

    let (vertex_line_no, vertex_line) = lines.next().ok_or(FormatError::MissingVertexLine)?;
    for label in vertex_line.split(',').map(str::trim).filter(|l| !l.is_empty()) {
        graph.add_vertex(label).map_err(|source| FormatError::Graph {
            line: vertex_line_no + 1,
            source,
        })?;
    }

    for (line_no, line) in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let line_no = line_no + 1;

        let (from, to, weight) = parse_edge::<W>(line, line_no)?;
        graph
            .insert_edge(from, to, weight)
            .map_err(|source| FormatError::Graph { line: line_no, source })?;
    }

    debug!(
        "Parsed {} graph with {} vertices and {} edges",
        mode,
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn parse_edge<W: TextWeight>(line: &str, line_no: usize) -> Result<(&str, &str, W), FormatError> {
    let malformed = || FormatError::MalformedEdge {
        line: line_no,
        content: line.to_string(),
    };

    let body = match line.strip_prefix('(') {
        Some(rest) => rest.strip_suffix(')').ok_or_else(malformed)?,
        None if line.ends_with(')') => return Err(malformed()),
        None => line,
    };

    let fields: Vec<&str> = body.split(',').map(str::trim).collect();
    let (from, to, weight_field) = match fields.as_slice() {
        [from, to] => (*from, *to, None),
        [from, to, weight] => (*from, *to, Some(*weight)),
        _ => return Err(malformed()),
    };
    if from.is_empty() || to.is_empty() {
        return Err(malformed());
    }

    let weight = W::parse_field(weight_field).ok_or_else(|| FormatError::InvalidWeight {
        line: line_no,
        content: line.to_string(),
    })?;

    Ok((from, to, weight))
}
