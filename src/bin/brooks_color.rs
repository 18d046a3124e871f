use std::fmt::Display;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{App, load_yaml};
use serde::Serialize;
use serde_json::json;

use brooks_color::brooks::solve;
use brooks_color::color::to_partition;
use brooks_color::graph::{Graph, NodeId};
use brooks_color::util::{read_params, load_graph, solution_report, export_results, LoadedGraph, RunParams};

/// colors the graph, prints the coloring and exports the results
fn run<N:NodeId+Display+Serialize>(graph:&Graph<N>, params:&RunParams) -> Result<()> {
    graph.display_statistics();
    let t_start = Instant::now();
    let solution = solve(graph)
        .with_context(|| format!("unable to color {}", params.inst_name))?;
    let duration = t_start.elapsed().as_secs_f32();
    let report = solution_report(&params.inst_name, graph, &solution);
    log::info!(
        "{} took {:.3} seconds. Nb colors: {} (Δ = {})",
        report.case, duration, report.nb_colors, report.max_degree
    );
    for (c, vertices) in to_partition(&solution.coloring).iter().enumerate() {
        let names:Vec<String> = vertices.iter().map(|v| v.to_string()).collect();
        println!("color {}: {}", c, names.join(" "));
    }
    let stats = json!({
        "case": report.case,
        "max_degree": report.max_degree,
        "nb_colors": report.nb_colors,
        "time_searched": duration,
        "inst_name": params.inst_name
    });
    export_results(&report, &stats, params.perf_file.as_deref(), params.sol_file.as_deref())
        .context("unable to export the results")?;
    Ok(())
}

/** colors a graph with at most Δ colors using Brooks' construction */
pub fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    // parse arguments
    let yaml = load_yaml!("brooks_color.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let params = read_params(&main_args);
    log::info!("reading instance: {}...", params.inst_name);
    let graph = load_graph(&params.source)
        .with_context(|| format!("unable to read {}", params.inst_name))?;
    match graph {
        LoadedGraph::Numbered(g) => run(&g, &params),
        LoadedGraph::Named(g) => run(&g, &params),
    }
}
