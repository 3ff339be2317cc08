//! Core type definitions for the graph store

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Arena slot of a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn new(idx: usize) -> Self {
        VertexId(idx)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl From<usize> for VertexId {
    fn from(idx: usize) -> Self {
        VertexId(idx)
    }
}

/// Caller-supplied, unique vertex label (e.g., "A", "42")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct Label(String);

impl Label {
    pub fn new(label: impl Into<String>) -> Self {
        Label(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Label(s)
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label(s.to_string())
    }
}

// Lets label-keyed maps be queried with a plain &str
impl Borrow<str> for Label {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Directedness, fixed when a graph is constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GraphMode {
    /// Edges go one way only (marker `D`)
    #[default]
    Directed,
    /// Edges are stored in both endpoints (marker `G`)
    Undirected,
}

impl GraphMode {
    pub fn is_directed(&self) -> bool {
        matches!(self, GraphMode::Directed)
    }

    /// Marker used in graph description text
    pub fn marker(&self) -> &'static str {
        match self {
            GraphMode::Directed => "D",
            GraphMode::Undirected => "G",
        }
    }
}

impl fmt::Display for GraphMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid graph mode {0:?}, expected \"D\" or \"G\"")]
pub struct ParseModeError(pub String);

impl FromStr for GraphMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "D" => Ok(GraphMode::Directed),
            "G" => Ok(GraphMode::Undirected),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}
