//! Constructive Brooks' theorem: colors a connected graph that is neither complete
//! nor an odd cycle with at most Δ colors.

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// error types
pub mod error;

/// undirected graph with labelled vertices
pub mod graph;

/// colorings, solution checker
pub mod color;

/// completeness, connectivity and odd cycle tests
pub mod classify;

/// BFS spanning trees and reverse-layer orders
pub mod spanning_tree;

/// subgraph derivation and splitting at a vertex
pub mod split;

/// greedy coloring in a given vertex order
pub mod greedy;

/// selection of the construction (case plan)
pub mod select;

/// Brooks' coloring: preconditions, case dispatch and final check
pub mod brooks;

/// read DIMACS formats
pub mod dimacs;

/// read delimited edge lists
pub mod edge_list;

/// helper and utility methods for executables
pub mod util;
