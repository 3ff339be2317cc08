//! Graph description text format
//!
//! ```text
//! G            <- "D" (directed) or "G" (undirected)
//! A,B,C        <- vertex labels
//! (A,B)        <- one edge per line, parentheses optional
//! (B,C,2.5)    <- weighted graphs carry a third field
//! ```
//!
//! Labels may not contain `,`, `(`, `)` or line breaks.

pub mod reader;
pub mod writer;

pub use reader::{parse_graph, parse_weighted_graph, read_graph, read_weighted_graph};
pub use writer::write_graph;

use crate::graph::GraphError;
use graphkit_algorithms::EdgeWeight;
use thiserror::Error;

/// Errors raised while reading or writing graph descriptions
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid graph type {0:?}, expected \"D\" or \"G\"")]
    InvalidMode(String),

    #[error("Missing vertex line")]
    MissingVertexLine,

    #[error("Line {line}: malformed edge {content:?}")]
    MalformedEdge { line: usize, content: String },

    #[error("Line {line}: invalid edge weight in {content:?}")]
    InvalidWeight { line: usize, content: String },

    #[error("Line {line}: {source}")]
    Graph {
        line: usize,
        #[source]
        source: GraphError,
    },

    #[error("Label {0:?} cannot be written in graph description format")]
    UnrepresentableLabel(String),
}

/// Edge weights that can appear as the optional third edge field
pub trait TextWeight: EdgeWeight {
    /// Parse the third field; `None` means the field is missing or invalid
    fn parse_field(field: Option<&str>) -> Option<Self>;

    /// The third field to write, if the weight model has one
    fn format_field(&self) -> Option<String>;
}

impl TextWeight for () {
    fn parse_field(_field: Option<&str>) -> Option<Self> {
        Some(())
    }

    fn format_field(&self) -> Option<String> {
        None
    }
}

impl TextWeight for f64 {
    fn parse_field(field: Option<&str>) -> Option<Self> {
        field?.parse().ok()
    }

    fn format_field(&self) -> Option<String> {
        Some(self.to_string())
    }
}
