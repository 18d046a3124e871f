use std::collections::VecDeque;

use bit_set::BitSet;

use crate::graph::{Graph, NodeId, VertexId};

/** breadth-first spanning tree of the component containing its root.
All vertex ids refer to the graph the tree was built on. */
#[derive(Debug, Clone)]
pub struct SpanningTree {
    /// root of the tree
    root: VertexId,
    /// vertices in BFS discovery order (root first)
    order: Vec<VertexId>,
    /// parent[u]: tree parent of u (None for the root and unreached vertices)
    parent: Vec<Option<VertexId>>,
    /// layer[u]: distance from the root (None if unreached)
    layer: Vec<Option<usize>>,
}

impl SpanningTree {

    /// root of the tree
    pub fn root(&self) -> VertexId { self.root }

    /// reached vertices, in BFS discovery order
    pub fn nodes(&self) -> &[VertexId] { &self.order }

    /// number of reached vertices
    pub fn len(&self) -> usize { self.order.len() }

    /// true iff no vertex was reached
    pub fn is_empty(&self) -> bool { self.order.is_empty() }

    /// true iff u was reached from the root
    pub fn contains(&self, u:VertexId) -> bool {
        self.layer.get(u).map_or(false, |l| l.is_some())
    }

    /// distance between u and the root
    pub fn layer(&self, u:VertexId) -> Option<usize> {
        self.layer.get(u).copied().flatten()
    }

    /// tree parent of u
    pub fn parent(&self, u:VertexId) -> Option<VertexId> {
        self.parent.get(u).copied().flatten()
    }

    /// largest layer
    pub fn depth(&self) -> usize {
        self.order.last().and_then(|u| self.layer(*u)).unwrap_or(0)
    }

    /// tree edges as (parent, child), in discovery order of the child
    pub fn edges(&self) -> Vec<(VertexId, VertexId)> {
        self.order.iter()
            .filter_map(|u| self.parent(*u).map(|p| (p, *u)))
            .collect()
    }

    /// vertices without children (the root is a leaf only if it is alone)
    pub fn leaves(&self) -> Vec<VertexId> {
        let mut has_child:BitSet = BitSet::default();
        for (p,_) in self.edges() { has_child.insert(p); }
        self.order.iter().copied().filter(|u| !has_child.contains(*u)).collect()
    }

    /** vertices by non-increasing layer: deepest first, root last.
    Each vertex comes after every strictly deeper vertex, in particular after its
    whole subtree, and before its parent. */
    pub fn reverse_layer_order(&self) -> Vec<VertexId> {
        self.order.iter().rev().copied().collect()
    }
}

/** breadth-first search from root. Neighbors are explored in adjacency order,
so the tree is deterministic for a given graph. A root that is not a vertex of
the graph (e.g. any root of the empty graph) gives an empty tree. */
pub fn bfs_tree<N:NodeId>(graph:&Graph<N>, root:VertexId) -> SpanningTree {
    let n = graph.nb_vertices();
    let mut parent = vec![None ; n];
    let mut layer = vec![None ; n];
    let mut order = Vec::with_capacity(n);
    if root >= n {
        log::warn!("BFS root {} out of range (graph has {} vertices)", root, n);
        return SpanningTree { root, order, parent, layer };
    }
    let mut queue = VecDeque::new();
    layer[root] = Some(0);
    queue.push_back(root);
    while let Some(u) = queue.pop_front() {
        order.push(u);
        let next_layer = layer[u].map(|l| l+1);
        for v in graph.neighbors(u) {
            if layer[*v].is_none() {
                layer[*v] = next_layer;
                parent[*v] = Some(u);
                queue.push_back(*v);
            }
        }
    }
    log::debug!(
        "BFS tree rooted at {:?}: {} vertices, depth {}",
        graph.label(root), order.len(), order.last().and_then(|u| layer[*u]).unwrap_or(0)
    );
    SpanningTree { root, order, parent, layer }
}
