use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Range;

use bit_set::BitSet;

/** Vertex Id (dense index of a vertex inside a given graph) */
pub type VertexId = usize;

/** requirements on node labels. Labels are opaque: only equality, hashing and
ordering are ever used (ordering breaks ties deterministically). */
pub trait NodeId: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> NodeId for T {}

/** models a simple undirected graph with labelled vertices.
Vertices get dense ids in their insertion order. */
#[derive(Debug, Clone)]
pub struct Graph<N> {
    /// labels[i]: label of vertex i
    labels: Vec<N>,
    /// label -> vertex id
    index: HashMap<N, VertexId>,
    /// edges of the graph (insertion order)
    edges: Vec<(VertexId,VertexId)>,
    /// adj_list[i]: list of vertices adjacent to i
    adj_list: Vec<Vec<VertexId>>,
    /// adj_matrix[i] represents a bitset of its neighbors
    adj_matrix: Vec<BitSet>,
}

impl<N: NodeId> Default for Graph<N> {
    fn default() -> Self { Self::new() }
}

impl<N: NodeId> Graph<N> {

    /// empty graph
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            adj_list: Vec::new(),
            adj_matrix: Vec::new(),
        }
    }

    /** builds a graph from an edge list. Self-loops are skipped (with a warning),
    duplicated edges are ignored. */
    pub fn from_edges<I>(edges:I) -> Self where I: IntoIterator<Item=(N,N)> {
        Self::with_nodes(Vec::new(), edges)
    }

    /** builds a graph from a node list (that may contain isolated vertices) and an edge list */
    pub fn with_nodes<V, I>(nodes:V, edges:I) -> Self
    where V: IntoIterator<Item=N>, I: IntoIterator<Item=(N,N)> {
        let mut res = Self::new();
        for u in nodes { res.add_node(u); }
        for (a,b) in edges { res.add_edge(a, b); }
        res
    }

    /// adds a vertex if not already present, returns its id
    pub fn add_node(&mut self, label:N) -> VertexId {
        if let Some(u) = self.index.get(&label) {
            return *u;
        }
        let u = self.labels.len();
        self.index.insert(label.clone(), u);
        self.labels.push(label);
        self.adj_list.push(Vec::new());
        self.adj_matrix.push(BitSet::default());
        u
    }

    /// adds an undirected edge (and its endpoints if needed)
    pub fn add_edge(&mut self, a:N, b:N) {
        if a == b {
            log::warn!("skipping self-loop edge ({:?}, {:?})", a, b);
            self.add_node(a);
            return;
        }
        let u = self.add_node(a);
        let v = self.add_node(b);
        if self.adj_matrix[u].contains(v) { return; } // already there
        self.adj_list[u].push(v);
        self.adj_list[v].push(u);
        self.adj_matrix[u].insert(v);
        self.adj_matrix[v].insert(u);
        self.edges.push((u,v));
    }

    /// number of vertices
    pub fn nb_vertices(&self) -> usize { self.labels.len() }

    /// number of edges
    pub fn nb_edges(&self) -> usize { self.edges.len() }

    /// true iff the graph has no vertex
    pub fn is_empty(&self) -> bool { self.labels.is_empty() }

    /// range of vertex ids
    pub fn vertices(&self) -> Range<VertexId> { 0..self.nb_vertices() }

    /// label of vertex u
    pub fn label(&self, u:VertexId) -> &N { &self.labels[u] }

    /// all labels, in vertex id order
    pub fn labels(&self) -> &[N] { &self.labels }

    /// id of the vertex labelled `label` (if it exists)
    pub fn index_of(&self, label:&N) -> Option<VertexId> { self.index.get(label).copied() }

    /// list of vertices adjacent to u
    pub fn neighbors(&self, u:VertexId) -> &[VertexId] { &self.adj_list[u] }

    /// number of neighbors of u
    pub fn degree(&self, u:VertexId) -> usize { self.adj_list[u].len() }

    /// O(1) adjacency test
    pub fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool { self.adj_matrix[u].contains(v) }

    /// edge list
    pub fn edges(&self) -> &[(VertexId, VertexId)] { &self.edges }

    /// edge list, using labels
    pub fn labelled_edges(&self) -> Vec<(N,N)> {
        self.edges.iter()
            .map(|(u,v)| (self.labels[*u].clone(), self.labels[*v].clone()))
            .collect()
    }

    /// Δ(G), None if the graph is empty
    pub fn max_degree(&self) -> Option<usize> {
        self.vertices().map(|u| self.degree(u)).max()
    }

    /// minimum degree, None if the graph is empty
    pub fn min_degree(&self) -> Option<usize> {
        self.vertices().map(|u| self.degree(u)).min()
    }

    /// log statistics of the graph
    pub fn display_statistics(&self) {
        log::info!("\t{} \t vertices", self.nb_vertices());
        log::info!("\t{} \t edges", self.nb_edges());
        if let (Some(dmin), Some(dmax)) = (self.min_degree(), self.max_degree()) {
            log::info!("\t{} \t min degree", dmin);
            log::info!("\t{} \t max degree", dmax);
        }
    }
}
