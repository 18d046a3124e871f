use std::fmt;

use thiserror::Error;

use crate::color::CheckerResult;

/// reason why Brooks' construction does not apply to a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedReason {
    /// every pair of vertices is adjacent (needs Δ+1 colors)
    Complete,
    /// the graph is an odd cycle (needs 3 > Δ colors)
    OddCycle,
}

impl fmt::Display for UnsupportedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnsupportedReason::Complete => write!(f, "the graph is complete"),
            UnsupportedReason::OddCycle => write!(f, "the graph is an odd cycle"),
        }
    }
}

/** errors of a coloring attempt. All of them are terminal: no partial coloring is returned. */
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BrooksError {
    /// the graph has no vertex, Δ is undefined
    #[error("the graph is empty")]
    EmptyGraph,

    /// the graph has more than one connected component
    #[error("the graph is not connected ({nb_components} components), color each component separately")]
    Disconnected {
        /// number of connected components found
        nb_components: usize,
    },

    /// complete graph or odd cycle
    #[error("unsupported graph: {0}")]
    UnsupportedGraph(UnsupportedReason),

    /// no (x,y,z) with y,z non-adjacent neighbors of x and G-{y,z} connected
    #[error("no vertex x with two non-adjacent neighbors y,z such that G-{{y,z}} is connected")]
    NoTripleFound,

    /// a vertex selected by the plan is missing from the graph being colored
    #[error("vertex {0} selected by the plan is not in the graph")]
    PlanVertexMissing(String),

    /// the produced coloring is not proper or not complete (labels rendered with `{:?}`)
    #[error("invalid coloring produced: {0}")]
    InvalidColoring(CheckerResult<String>),

    /// the produced coloring uses more than Δ colors
    #[error("coloring uses {nb_colors} colors but Δ = {max_degree}")]
    ColorBoundExceeded {
        /// number of colors used
        nb_colors: usize,
        /// maximum degree of the graph
        max_degree: usize,
    },
}

/** errors raised while reading a graph or writing results */
#[derive(Error, Debug)]
pub enum InputError {
    /// unable to read or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// malformed DIMACS or edge-list content
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// line number (starting at 1) where the error was detected, or the
        /// last line when the problem concerns the whole file
        line: usize,
        /// description of the problem
        message: String,
    },

    /// unable to serialize the results
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl InputError {
    /// creates a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        InputError::Parse { line, message: message.into() }
    }
}
