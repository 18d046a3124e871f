use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};

use clap::ArgMatches;
use serde::Serialize;
use serde_json::Value;

use crate::brooks::BrooksSolution;
use crate::color::{nb_colors, Color};
use crate::dimacs;
use crate::edge_list;
use crate::error::InputError;
use crate::graph::{Graph, NodeId};

/** where the graph comes from */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphSource {
    /// DIMACS file
    Dimacs(String),
    /// edge list file
    EdgeFile(String),
    /// edge list given on the command line
    Inline(String),
}

/** command line parameters */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunParams {
    /// instance name (file name, or "inline")
    pub inst_name: String,
    /// graph source
    pub source: GraphSource,
    /// solution (JSON) filename
    pub sol_file: Option<String>,
    /// statistics (JSON) filename
    pub perf_file: Option<String>,
}

/** graph read from a source: DIMACS vertices are numbers, edge lists use names */
#[derive(Debug)]
pub enum LoadedGraph {
    /// DIMACS instance
    Numbered(Graph<usize>),
    /// edge-list instance
    Named(Graph<String>),
}

/** reads command line input and returns the instance source and the output filenames */
pub fn read_params(main_args:&ArgMatches) -> RunParams {
    let instance_type = main_args.value_of("type").unwrap_or("edges");
    let (inst_name, source) = match (main_args.value_of("instance"), main_args.value_of("edges")) {
        (Some(filename), _) => {
            let source = match instance_type {
                "dimacs" => GraphSource::Dimacs(filename.to_string()),
                _ => GraphSource::EdgeFile(filename.to_string()),
            };
            (filename.to_string(), source)
        },
        (None, edges) => ("inline".to_string(), GraphSource::Inline(edges.unwrap_or("").to_string())),
    };
    // read value of the solution filename
    let sol_file = main_args.value_of("solution").map(|e| {
        log::info!("printing solutions in: {}", e);
        e.to_string()
    });
    // read value of the performance logs filename
    let perf_file = main_args.value_of("perf").map(|e| {
        log::info!("printing perfs in: {}", e);
        e.to_string()
    });
    RunParams { inst_name, source, sol_file, perf_file }
}

/// reads the graph
pub fn load_graph(source:&GraphSource) -> Result<LoadedGraph, InputError> {
    Ok(match source {
        GraphSource::Dimacs(filename) => LoadedGraph::Numbered(dimacs::read_from_file(filename)?),
        GraphSource::EdgeFile(filename) => LoadedGraph::Named(edge_list::read_from_file(filename)?),
        GraphSource::Inline(content) => LoadedGraph::Named(edge_list::graph_from_edge_list(content)?),
    })
}

/** everything a renderer needs to draw the colored graph */
#[derive(Debug, Clone, Serialize)]
pub struct SolutionReport<N> {
    /// instance name
    pub inst_name: String,
    /// construction used
    pub case: String,
    /// Δ(G)
    pub max_degree: usize,
    /// number of colors used
    pub nb_colors: usize,
    /// vertex labels
    pub vertices: Vec<N>,
    /// edges (labels)
    pub edges: Vec<(N,N)>,
    /// color of each vertex
    pub coloring: BTreeMap<N, Color>,
}

/// builds the exported solution
pub fn solution_report<N:NodeId>(inst_name:&str, graph:&Graph<N>, solution:&BrooksSolution<N>) -> SolutionReport<N> {
    SolutionReport {
        inst_name: inst_name.to_string(),
        case: solution.plan.to_string(),
        max_degree: solution.max_degree,
        nb_colors: nb_colors(&solution.coloring),
        vertices: graph.labels().to_vec(),
        edges: graph.labelled_edges(),
        coloring: solution.coloring.clone(),
    }
}

/// writes a value as JSON in a file
fn write_json<T:Serialize>(filename:&str, value:&T) -> Result<(), InputError> {
    let mut writer = BufWriter::new(File::create(filename)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}

/// exports statistics and solution to files
pub fn export_results<N:NodeId+Serialize>(
    report:&SolutionReport<N>,
    stats:&Value,
    perf_file:Option<&str>,
    sol_file:Option<&str>,
) -> Result<(), InputError> {
    if let Some(filename) = perf_file {
        write_json(filename, stats)?;
    }
    if let Some(filename) = sol_file {
        write_json(filename, report)?;
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    use clap::{App, load_yaml};
    use serde_json::json;

    use crate::brooks::solve;

    fn params(args:&[&str]) -> RunParams {
        let yaml = load_yaml!("bin/brooks_color.yml");
        let main_args = App::from_yaml(yaml).get_matches_from(args.to_vec());
        read_params(&main_args)
    }

    #[test]
    fn test_read_params() {
        let p = params(&["brooks_color", "-i", "insts/brooks/cubic8.col", "-t", "dimacs", "-s", "sol.json"]);
        assert_eq!(p.source, GraphSource::Dimacs("insts/brooks/cubic8.col".to_string()));
        assert_eq!(p.sol_file, Some("sol.json".to_string()));
        assert_eq!(p.perf_file, None);
        let p = params(&["brooks_color", "--edges", "1-2, 2-3"]);
        assert_eq!(p.inst_name, "inline");
        assert_eq!(p.source, GraphSource::Inline("1-2, 2-3".to_string()));
        let p = params(&["brooks_color", "-i", "insts/brooks/paw.edges"]);
        assert_eq!(p.source, GraphSource::EdgeFile("insts/brooks/paw.edges".to_string()));
    }

    #[test]
    fn test_load_graph() {
        match load_graph(&GraphSource::Dimacs("insts/brooks/cycle6.col".to_string())).unwrap() {
            LoadedGraph::Numbered(g) => assert_eq!(g.nb_vertices(), 6),
            other => panic!("unexpected {:?}", other),
        }
        match load_graph(&GraphSource::Inline("a-b, b-c".to_string())).unwrap() {
            LoadedGraph::Named(g) => assert_eq!(g.nb_edges(), 2),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_export_results() {
        let g = Graph::from_edges(vec![(1,2),(2,3),(3,4),(4,2)]);
        let solution = solve(&g).unwrap();
        let report = solution_report("paw", &g, &solution);
        assert_eq!(report.nb_colors, 3);
        assert_eq!(report.edges.len(), 4);
        let dir = std::env::temp_dir();
        let sol_file = dir.join("brooks_color_test_solution.json");
        let perf_file = dir.join("brooks_color_test_perf.json");
        let stats = json!({ "inst_name": "paw", "nb_colors": report.nb_colors });
        export_results(&report, &stats, perf_file.to_str(), sol_file.to_str()).unwrap();
        let written:Value = serde_json::from_str(&std::fs::read_to_string(&sol_file).unwrap()).unwrap();
        assert_eq!(written["max_degree"], 3);
        assert_eq!(written["coloring"]["1"], 0);
        let written:Value = serde_json::from_str(&std::fs::read_to_string(&perf_file).unwrap()).unwrap();
        assert_eq!(written, stats);
    }
}
