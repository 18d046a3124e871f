//! Applicability tests of Brooks' theorem. All functions are pure: they only read the graph.

use bit_set::BitSet;

use crate::error::{BrooksError, UnsupportedReason};
use crate::graph::{Graph, NodeId};
use crate::spanning_tree::bfs_tree;
use crate::split::connected_components;

/// true iff every pair of distinct vertices is adjacent (|E| = n(n-1)/2)
pub fn is_complete<N:NodeId>(graph:&Graph<N>) -> bool {
    let n = graph.nb_vertices();
    graph.nb_edges() == n * n.saturating_sub(1) / 2
}

/// true iff a BFS from vertex 0 reaches every vertex (true on the empty graph)
pub fn is_connected<N:NodeId>(graph:&Graph<N>) -> bool {
    graph.is_empty() || bfs_tree(graph, 0).len() == graph.nb_vertices()
}

/** true iff the graph is not bipartite.
Every component is 2-colored by the parity of its BFS layers; an edge joining two
vertices of the same parity closes an odd cycle, and if there is none the parity
classes form a bipartition. */
pub fn has_odd_cycle<N:NodeId>(graph:&Graph<N>) -> bool {
    let mut odd_side = BitSet::with_capacity(graph.nb_vertices());
    let mut visited = BitSet::with_capacity(graph.nb_vertices());
    for u in graph.vertices() {
        if visited.contains(u) { continue; }
        let tree = bfs_tree(graph, u);
        for v in tree.nodes() {
            visited.insert(*v);
            if tree.layer(*v).map_or(false, |l| l % 2 == 1) {
                odd_side.insert(*v);
            }
        }
    }
    graph.edges().iter().any(|(u,v)| odd_side.contains(*u) == odd_side.contains(*v))
}

/// true iff the graph is a cycle of odd length
pub fn is_odd_cycle<N:NodeId>(graph:&Graph<N>) -> bool {
    graph.nb_vertices() >= 3
        && graph.vertices().all(|u| graph.degree(u) == 2)
        && is_connected(graph)
        && has_odd_cycle(graph)
}

/** rejects the graphs Brooks' construction can not color with Δ colors.
Checked in order: empty, disconnected, complete, odd cycle.
A connected graph with Δ ≤ 2 is a path or a cycle: if it has an odd cycle, it is one. */
pub fn check_preconditions<N:NodeId>(graph:&Graph<N>) -> Result<(), BrooksError> {
    let max_degree = graph.max_degree().ok_or(BrooksError::EmptyGraph)?;
    if !is_connected(graph) {
        return Err(BrooksError::Disconnected {
            nb_components: connected_components(graph).len()
        });
    }
    if is_complete(graph) {
        return Err(BrooksError::UnsupportedGraph(UnsupportedReason::Complete));
    }
    if max_degree <= 2 && has_odd_cycle(graph) {
        return Err(BrooksError::UnsupportedGraph(UnsupportedReason::OddCycle));
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(n:u32) -> Graph<u32> {
        Graph::from_edges((1..=n).map(|i| (i, i % n + 1)))
    }

    fn complete(n:u32) -> Graph<u32> {
        Graph::from_edges((1..=n).flat_map(|i| (i+1..=n).map(move |j| (i,j))))
    }

    #[test]
    fn test_is_complete() {
        assert!(is_complete(&complete(4)));
        assert!(is_complete(&complete(2)));
        assert!(!is_complete(&cycle(4)));
        // K3 is both a cycle and a complete graph
        assert!(is_complete(&cycle(3)));
    }

    #[test]
    fn test_is_connected() {
        assert!(is_connected(&cycle(6)));
        assert!(!is_connected(&Graph::from_edges(vec![(1,2),(3,4)])));
        assert!(!is_connected(&Graph::with_nodes(vec![1,2,3], vec![(1,2)])));
    }

    #[test]
    fn test_has_odd_cycle() {
        assert!(has_odd_cycle(&cycle(5)));
        assert!(!has_odd_cycle(&cycle(6)));
        assert!(has_odd_cycle(&complete(4)));
        // trees never raise
        assert!(!has_odd_cycle(&Graph::from_edges(vec![(1,2),(1,3),(3,4)])));
        assert!(!has_odd_cycle(&Graph::with_nodes(vec![1], vec![])));
        // triangle hidden in the second component
        assert!(has_odd_cycle(&Graph::from_edges(vec![(1,2),(3,4),(4,5),(5,3)])));
    }

    #[test]
    fn test_is_odd_cycle() {
        assert!(is_odd_cycle(&cycle(5)));
        assert!(!is_odd_cycle(&cycle(6)));
        assert!(!is_odd_cycle(&complete(4)));
    }

    #[test]
    fn test_classification_is_idempotent() {
        let g = Graph::from_edges(vec![(1,7),(1,5),(1,4),(2,5),(2,7),(2,8),(3,6),(3,7),(3,8),(4,6),(4,8),(5,6)]);
        let first = (is_complete(&g), has_odd_cycle(&g), is_connected(&g));
        for _ in 0..5 {
            assert_eq!((is_complete(&g), has_odd_cycle(&g), is_connected(&g)), first);
        }
        assert_eq!(first, (false, true, true));
    }

    #[test]
    fn test_check_preconditions() {
        assert_eq!(check_preconditions(&Graph::<u32>::new()), Err(BrooksError::EmptyGraph));
        assert_eq!(
            check_preconditions(&Graph::from_edges(vec![(1,2),(3,4),(5,6)])),
            Err(BrooksError::Disconnected { nb_components: 3 })
        );
        assert_eq!(
            check_preconditions(&complete(5)),
            Err(BrooksError::UnsupportedGraph(UnsupportedReason::Complete))
        );
        assert_eq!(
            check_preconditions(&cycle(5)),
            Err(BrooksError::UnsupportedGraph(UnsupportedReason::OddCycle))
        );
        assert_eq!(check_preconditions(&cycle(6)), Ok(()));
        // contains triangles but Δ = 3
        assert_eq!(check_preconditions(&Graph::from_edges(vec![(1,2),(2,3),(3,4),(4,2)])), Ok(()));
    }
}
