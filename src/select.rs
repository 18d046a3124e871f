use std::fmt;

use crate::classify::is_connected;
use crate::error::BrooksError;
use crate::graph::{Graph, NodeId, VertexId};
use crate::split::{connected_components, derive};

/** construction strategy, selected once by `select_case` and consumed by the solver */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CasePlan<N> {
    /// Δ ≤ 2: even cycle or path, colored by BFS parity
    TwoColorable,
    /// BFS tree rooted at a vertex of degree < Δ, colored deepest first
    RootedAtLowDegreeVertex(N),
    /// dominating or cut vertex: color each piece and pin the color of the shared vertex
    SplitAtCutVertex(N),
    /// x with non-adjacent neighbors y,z such that G-{y,z} is connected
    NonAdjacentTriple {
        /// root of the spanning tree, colored last
        x: N,
        /// first vertex sharing the pre-assigned color
        y: N,
        /// second vertex sharing the pre-assigned color
        z: N,
    },
}

impl<N:fmt::Debug> fmt::Display for CasePlan<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CasePlan::TwoColorable => write!(f, "two-colorable (Δ ≤ 2)"),
            CasePlan::RootedAtLowDegreeVertex(r) => write!(f, "rooted at low degree vertex {:?}", r),
            CasePlan::SplitAtCutVertex(c) => write!(f, "split at vertex {:?}", c),
            CasePlan::NonAdjacentTriple { x, y, z } =>
                write!(f, "non-adjacent triple x={:?} y={:?} z={:?}", x, y, z),
        }
    }
}

/// among the candidates, the vertex with the smallest label
fn lowest_label<N:NodeId, I>(graph:&Graph<N>, candidates:I) -> Option<VertexId>
where I: Iterator<Item=VertexId> {
    candidates.min_by(|a,b| graph.label(*a).cmp(graph.label(*b)))
}

/// vertices by increasing label
fn by_label<N:NodeId>(graph:&Graph<N>) -> Vec<VertexId> {
    let mut res:Vec<VertexId> = graph.vertices().collect();
    res.sort_by(|a,b| graph.label(*a).cmp(graph.label(*b)));
    res
}

/// a vertex of degree < Δ (smallest label first)
pub fn low_degree_vertex<N:NodeId>(graph:&Graph<N>) -> Option<VertexId> {
    let max_degree = graph.max_degree()?;
    lowest_label(graph, graph.vertices().filter(|u| graph.degree(*u) < max_degree))
}

/// a vertex adjacent to every other vertex (smallest label first)
pub fn dominating_vertex<N:NodeId>(graph:&Graph<N>) -> Option<VertexId> {
    let n = graph.nb_vertices();
    lowest_label(graph, graph.vertices().filter(|u| graph.degree(*u) + 1 == n))
}

/// a vertex whose removal increases the number of connected components (smallest label first)
pub fn cut_vertex<N:NodeId>(graph:&Graph<N>) -> Option<VertexId> {
    let nb_components = connected_components(graph).len();
    by_label(graph).into_iter()
        .find(|u| {
            let remaining = derive(graph, &[graph.label(*u).clone()]);
            !remaining.is_empty() && connected_components(&remaining).len() > nb_components
        })
}

/** exhaustive search of (x,y,z): y and z neighbors of x, not adjacent, and
G-{y,z} connected. x is taken by increasing label, the pairs (y,z) in the
adjacency order of x. */
pub fn find_triple<N:NodeId>(graph:&Graph<N>) -> Option<(VertexId, VertexId, VertexId)> {
    for x in by_label(graph) {
        let neighbors = graph.neighbors(x);
        for (i,y) in neighbors.iter().enumerate() {
            for z in neighbors.iter().skip(i+1) {
                if graph.are_adjacent(*y, *z) { continue; }
                let reduced = derive(graph, &[graph.label(*y).clone(), graph.label(*z).clone()]);
                if is_connected(&reduced) {
                    return Some((x, *y, *z));
                }
            }
        }
    }
    None
}

/** selects the construction, in priority order:
    1. Δ ≤ 2
    2. a vertex of degree < Δ
    3. a dominating vertex, or else a cut vertex
    4. a non-adjacent triple (fails with `NoTripleFound` if none exists)
*/
pub fn select_case<N:NodeId>(graph:&Graph<N>) -> Result<CasePlan<N>, BrooksError> {
    let max_degree = graph.max_degree().ok_or(BrooksError::EmptyGraph)?;
    let label = |u:VertexId| graph.label(u).clone();
    if max_degree <= 2 {
        return Ok(CasePlan::TwoColorable);
    }
    if let Some(root) = low_degree_vertex(graph) {
        return Ok(CasePlan::RootedAtLowDegreeVertex(label(root)));
    }
    if let Some(cut) = dominating_vertex(graph).or_else(|| cut_vertex(graph)) {
        return Ok(CasePlan::SplitAtCutVertex(label(cut)));
    }
    match find_triple(graph) {
        Some((x,y,z)) => Ok(CasePlan::NonAdjacentTriple { x:label(x), y:label(y), z:label(z) }),
        None => Err(BrooksError::NoTripleFound),
    }
}
