use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::graph::{Graph, NodeId};

/** Color (non-negative integer) */
pub type Color = usize;

/** Coloring of a graph: label -> color. Built incrementally, so it may be partial
while a construction is running. */
pub type Coloring<N> = BTreeMap<N, Color>;

/** outcome of the solution checker */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerResult<N> {
    /// proper and complete coloring, with its number of colors
    Ok(usize),
    /// a vertex of the graph has no color
    VertexNotColored(N),
    /// the coloring gives a color to a label absent from the graph
    UnknownVertex(N),
    /// both endpoints of an edge share a color
    ConflictingEdge(N, N),
}

impl<N> CheckerResult<N> {
    /// same outcome with the labels converted by f
    pub fn map_labels<M, F:Fn(&N) -> M>(&self, f:F) -> CheckerResult<M> {
        match self {
            CheckerResult::Ok(nb_colors) => CheckerResult::Ok(*nb_colors),
            CheckerResult::VertexNotColored(u) => CheckerResult::VertexNotColored(f(u)),
            CheckerResult::UnknownVertex(u) => CheckerResult::UnknownVertex(f(u)),
            CheckerResult::ConflictingEdge(a, b) => CheckerResult::ConflictingEdge(f(a), f(b)),
        }
    }
}

impl<N:fmt::Display> fmt::Display for CheckerResult<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckerResult::Ok(nb_colors) => write!(f, "valid coloring ({} colors)", nb_colors),
            CheckerResult::VertexNotColored(u) => write!(f, "vertex {} is not colored", u),
            CheckerResult::UnknownVertex(u) => write!(f, "vertex {} is not in the graph", u),
            CheckerResult::ConflictingEdge(a, b) => write!(f, "edge ({},{}) is monochromatic", a, b),
        }
    }
}

/**
checks that the coloring covers exactly the vertices of the graph and that no
edge is monochromatic. Returns the number of distinct colors if so.
*/
pub fn checker<N:NodeId>(inst:&Graph<N>, coloring:&Coloring<N>) -> CheckerResult<N> {
    // check that all vertices are colored
    for u in inst.labels() {
        if !coloring.contains_key(u) {
            return CheckerResult::VertexNotColored(u.clone());
        }
    }
    if let Some(u) = coloring.keys().find(|u| inst.index_of(u).is_none()) {
        return CheckerResult::UnknownVertex(u.clone());
    }
    // check conflicts
    for (a,b) in inst.labelled_edges() {
        if coloring[&a] == coloring[&b] {
            return CheckerResult::ConflictingEdge(a, b);
        }
    }
    // if ok: return the number of colors
    CheckerResult::Ok(nb_colors(coloring))
}

/// number of distinct colors used
pub fn nb_colors<N>(coloring:&Coloring<N>) -> usize {
    coloring.values().collect::<BTreeSet<_>>().len()
}

/** partition view of a coloring: res[c] lists the vertices of color c.
Colors without vertices give empty classes. */
pub fn to_partition<N:NodeId>(coloring:&Coloring<N>) -> Vec<Vec<N>> {
    let nb_classes = coloring.values().max().map_or(0, |c| c+1);
    let mut res = vec![vec![] ; nb_classes];
    for (u,c) in coloring {
        res[*c].push(u.clone());
    }
    res
}
