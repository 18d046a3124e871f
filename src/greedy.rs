use bit_set::BitSet;

use crate::color::{Color, Coloring};
use crate::graph::{Graph, NodeId, VertexId};
use crate::spanning_tree::SpanningTree;

/// smallest non-negative integer absent from `used`
pub fn smallest_free_color(used:&BitSet) -> Color {
    let mut color:Color = 0;
    while used.contains(color) { color += 1; }
    color
}

/** greedy coloring parameterized by the vertex order.
    1. visit the vertices in `order` (ids of `graph`)
    2. collect the colors of all its graph neighbors already colored
    3. give it the smallest color not in this set
Vertices already present in `coloring` (pre-assigned or pinned) keep their color.
*/
pub fn greedy_color<N:NodeId>(graph:&Graph<N>, order:&[VertexId], coloring:&mut Coloring<N>) {
    for u in order {
        if coloring.contains_key(graph.label(*u)) { continue; }
        let used:BitSet = graph.neighbors(*u).iter()
            .filter_map(|v| coloring.get(graph.label(*v)).copied())
            .collect();
        coloring.insert(graph.label(*u).clone(), smallest_free_color(&used));
    }
}

/// 2-coloring by the parity of the BFS layers (proper iff the graph is bipartite)
pub fn parity_coloring<N:NodeId>(graph:&Graph<N>, tree:&SpanningTree) -> Coloring<N> {
    tree.nodes().iter()
        .filter_map(|u| tree.layer(*u).map(|l| (graph.label(*u).clone(), l % 2)))
        .collect()
}

/** color given to both non-adjacent neighbors y,z of the root before the greedy
pass: one more than the largest color already on a leaf of the tree, 0 if no
leaf is colored yet. */
pub fn shared_color<N:NodeId>(graph:&Graph<N>, tree:&SpanningTree, coloring:&Coloring<N>) -> Color {
    tree.leaves().iter()
        .filter_map(|u| coloring.get(graph.label(*u)))
        .max()
        .map_or(0, |c| c+1)
}

/** swaps two color classes so that `root` gets color `pinned`.
The coloring stays proper and keeps the same number of colors. */
pub fn recolor_root<N:NodeId>(coloring:&mut Coloring<N>, root:&N, pinned:Color) {
    let current = match coloring.get(root) {
        None => return,
        Some(c) => *c,
    };
    if current == pinned { return; }
    for c in coloring.values_mut() {
        if *c == current { *c = pinned; }
        else if *c == pinned { *c = current; }
    }
}
