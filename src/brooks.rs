use crate::classify::check_preconditions;
use crate::color::{checker, CheckerResult, Color, Coloring};
use crate::error::BrooksError;
use crate::graph::{Graph, NodeId, VertexId};
use crate::greedy::{greedy_color, parity_coloring, recolor_root, shared_color};
use crate::select::{select_case, CasePlan};
use crate::spanning_tree::bfs_tree;
use crate::split::{derive, split_at};

/** result of a successful run */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrooksSolution<N> {
    /// construction that produced the coloring
    pub plan: CasePlan<N>,
    /// Δ(G)
    pub max_degree: usize,
    /// proper coloring using at most Δ colors
    pub coloring: Coloring<N>,
}

/// id of the vertex labelled `label` (it comes from a plan built on the same graph)
fn vertex<N:NodeId>(graph:&Graph<N>, label:&N) -> Result<VertexId, BrooksError> {
    graph.index_of(label).ok_or_else(||
        BrooksError::PlanVertexMissing(format!("{:?}", label))
    )
}

/// Δ ≤ 2: BFS parity from an arbitrary vertex
fn color_two_colorable<N:NodeId>(graph:&Graph<N>) -> Coloring<N> {
    parity_coloring(graph, &bfs_tree(graph, 0))
}

/** greedy over the reverse-layer order of a BFS tree rooted at `root`.
Every vertex but the root still has its parent uncolored when it is colored,
so it sees at most Δ-1 colors; the root is colored last and has fewer than Δ
neighbors in the graph. */
fn color_from_root<N:NodeId>(graph:&Graph<N>, root:&N) -> Result<Coloring<N>, BrooksError> {
    let tree = bfs_tree(graph, vertex(graph, root)?);
    let mut coloring = Coloring::new();
    greedy_color(graph, &tree.reverse_layer_order(), &mut coloring);
    Ok(coloring)
}

/** colors each piece around the cut vertex from a tree rooted at the cut vertex
(whose degree inside a piece is below Δ as soon as there are two pieces).
The first piece fixes the color of the cut vertex, the next ones are recolored
so the cut vertex keeps it. */
fn color_split<N:NodeId>(graph:&Graph<N>, cut:&N) -> Result<Coloring<N>, BrooksError> {
    let pieces = split_at(graph, vertex(graph, cut)?);
    log::debug!("{} pieces around {:?}", pieces.len(), cut);
    let mut coloring = Coloring::new();
    let mut pinned:Option<Color> = None;
    for piece in &pieces {
        let mut piece_coloring = color_from_root(piece, cut)?;
        match pinned {
            None => { pinned = piece_coloring.get(cut).copied(); },
            Some(c) => recolor_root(&mut piece_coloring, cut, c),
        }
        coloring.extend(piece_coloring);
    }
    Ok(coloring)
}

/** y and z share a color, then the rest of the graph is colored from the deepest
layer of a BFS tree of G-{y,z} rooted at x. x comes last: two of its neighbors
have the same color so at most Δ-1 colors are forbidden. */
fn color_triple<N:NodeId>(graph:&Graph<N>, x:&N, y:&N, z:&N) -> Result<Coloring<N>, BrooksError> {
    let reduced = derive(graph, &[y.clone(), z.clone()]);
    let tree = bfs_tree(&reduced, vertex(&reduced, x)?);
    let mut coloring = Coloring::new();
    let color = shared_color(&reduced, &tree, &coloring);
    coloring.insert(y.clone(), color);
    coloring.insert(z.clone(), color);
    let order = tree.reverse_layer_order().iter()
        .map(|u| vertex(graph, reduced.label(*u)))
        .collect::<Result<Vec<_>, _>>()?;
    greedy_color(graph, &order, &mut coloring);
    Ok(coloring)
}

/// properness, completeness and Δ bound of the final coloring
fn verify<N:NodeId>(graph:&Graph<N>, coloring:&Coloring<N>, max_degree:usize) -> Result<(), BrooksError> {
    match checker(graph, coloring) {
        CheckerResult::Ok(nb_colors) if nb_colors <= max_degree => Ok(()),
        CheckerResult::Ok(nb_colors) => Err(BrooksError::ColorBoundExceeded { nb_colors, max_degree }),
        defect => {
            log::error!("coloring rejected by the checker: {:?}", defect);
            Err(BrooksError::InvalidColoring(defect.map_labels(|u| format!("{:?}", u))))
        }
    }
}

/**
colors a connected graph that is neither complete nor an odd cycle with at most Δ colors.
    1. check the preconditions (empty, connectivity, complete, odd cycle)
    2. select the construction
    3. build the coloring
    4. check it
*/
pub fn solve<N:NodeId>(graph:&Graph<N>) -> Result<BrooksSolution<N>, BrooksError> {
    check_preconditions(graph)?;
    let max_degree = graph.max_degree().ok_or(BrooksError::EmptyGraph)?;
    let plan = select_case(graph)?;
    log::info!("Δ = {}, case: {}", max_degree, plan);
    let coloring = match &plan {
        CasePlan::TwoColorable => color_two_colorable(graph),
        CasePlan::RootedAtLowDegreeVertex(root) => color_from_root(graph, root)?,
        CasePlan::SplitAtCutVertex(cut) => color_split(graph, cut)?,
        CasePlan::NonAdjacentTriple { x, y, z } => color_triple(graph, x, y, z)?,
    };
    verify(graph, &coloring, max_degree)?;
    Ok(BrooksSolution { plan, max_degree, coloring })
}

/// same as `solve`, only returns the coloring
pub fn brooks_coloring<N:NodeId>(graph:&Graph<N>) -> Result<Coloring<N>, BrooksError> {
    solve(graph).map(|s| s.coloring)
}
