use bit_set::BitSet;

use crate::graph::{Graph, NodeId, VertexId};
use crate::spanning_tree::bfs_tree;

/** subgraph induced by the vertices in `kept` (ids of `graph`).
Labels, vertex order and edge order of the original graph are preserved. */
pub fn induced<N:NodeId>(graph:&Graph<N>, kept:&BitSet) -> Graph<N> {
    let nodes = graph.vertices()
        .filter(|u| kept.contains(*u))
        .map(|u| graph.label(u).clone());
    let edges = graph.edges().iter()
        .filter(|(u,v)| kept.contains(*u) && kept.contains(*v))
        .map(|(u,v)| (graph.label(*u).clone(), graph.label(*v).clone()));
    Graph::with_nodes(nodes, edges)
}

/** copy of `graph` without the vertices labelled in `removed` (and their edges).
Labels absent from the graph are ignored. The original graph is left untouched. */
pub fn derive<N:NodeId>(graph:&Graph<N>, removed:&[N]) -> Graph<N> {
    let mut kept:BitSet = graph.vertices().collect();
    for u in removed.iter().filter_map(|l| graph.index_of(l)) {
        kept.remove(u);
    }
    induced(graph, &kept)
}

/// vertex sets of the connected components, each in BFS order
pub fn connected_components<N:NodeId>(graph:&Graph<N>) -> Vec<Vec<VertexId>> {
    let mut visited = BitSet::with_capacity(graph.nb_vertices());
    let mut res = Vec::new();
    for u in graph.vertices() {
        if visited.contains(u) { continue; }
        let tree = bfs_tree(graph, u);
        for v in tree.nodes() { visited.insert(*v); }
        res.push(tree.nodes().to_vec());
    }
    res
}

/** removes `cut` and returns one subgraph per connected component of the
remainder. Each subgraph holds the component, the cut vertex and every original
edge between them. */
pub fn split_at<N:NodeId>(graph:&Graph<N>, cut:VertexId) -> Vec<Graph<N>> {
    let cut_label = graph.label(cut).clone();
    let rest = derive(graph, &[cut_label.clone()]);
    connected_components(&rest).iter().map(|component| {
        let mut kept = BitSet::with_capacity(graph.nb_vertices());
        kept.insert(cut);
        for u in component {
            if let Some(v) = graph.index_of(rest.label(*u)) {
                kept.insert(v);
            }
        }
        let sub = induced(graph, &kept);
        log::debug!(
            "split at {:?}: piece with {} vertices and {} edges",
            cut_label, sub.nb_vertices(), sub.nb_edges()
        );
        sub
    }).collect()
}
