//! Serialise a graph back into its text description

use super::{FormatError, TextWeight};
use crate::graph::Graph;

fn check_label(label: &str) -> Result<&str, FormatError> {
    let representable = !label.is_empty()
        && label.trim() == label
        && !label.contains([',', '(', ')', '\n', '\r']);
    if representable {
        Ok(label)
    } else {
        Err(FormatError::UnrepresentableLabel(label.to_string()))
    }
}

/// Write `graph` in the description format read by [`parse_graph`](super::parse_graph).
///
/// Vertices keep insertion order; undirected edges are written once.
pub fn write_graph<W: TextWeight>(graph: &Graph<W>) -> Result<String, FormatError> {
    let mut out = String::new();
    out.push_str(graph.mode().marker());
    out.push('\n');

    let labels = graph
        .get_vertices()
        .iter()
        .map(|v| check_label(v.label()))
        .collect::<Result<Vec<_>, _>>()?;
    out.push_str(&labels.join(","));
    out.push('\n');

    for edge in graph.edges() {
        let line = match edge.weight.format_field() {
            Some(weight) => format!("({},{},{})\n", edge.source, edge.target, weight),
            None => format!("({},{})\n", edge.source, edge.target),
        };
        out.push_str(&line);
    }

    Ok(out)
}
