use crate::util::{create_output, read_graph};
use crate::CliOptions;
use clap::Parser;
use log::{error, info, warn};
use std::io::Write;
use weightgraph::algo::bellman_ford::shortest_path_general;
use weightgraph::algo::dijkstra::shortest_path_non_negative;
use weightgraph::io::write_distance_table;
use weightgraph::Vertex;

#[derive(Parser)]
pub struct SingleSourceCommand {
    #[clap(
        short,
        long,
        help = "The input edge list, one '<origin> <destination> <weight>' triple per line. Edges are undirected"
    )]
    pub input: String,

    #[clap(short, long, help = "The vertex the distances are computed from")]
    pub source: Vertex,

    #[clap(
        short,
        long,
        help = "The file the distances are written to, one '<vertex> <distance>' pair per line. Defaults to stdout"
    )]
    pub output: Option<String>,
}

pub(crate) fn dijkstra(
    _options: &CliOptions,
    subcommand: &SingleSourceCommand,
) -> crate::Result<()> {
    let graph = read_graph(&subcommand.input)?;
    if graph.edges().any(|(_, _, weight)| weight.is_negative()) {
        warn!("The graph has negative edge weights, Dijkstra's algorithm may compute wrong distances");
    }

    info!("Computing distances from {} with Dijkstra's algorithm", subcommand.source);
    let distances = shortest_path_non_negative(&graph, subcommand.source)?;
    info!(
        "{}/{} vertices are reachable",
        distances.reachable().count(),
        distances.len()
    );

    let mut output = create_output(&subcommand.output)?;
    write_distance_table(&distances, &mut output)?;
    output.flush()?;
    Ok(())
}

pub(crate) fn bellman_ford(
    _options: &CliOptions,
    subcommand: &SingleSourceCommand,
) -> crate::Result<()> {
    let graph = read_graph(&subcommand.input)?;

    info!("Computing distances from {} with the Bellman-Ford algorithm", subcommand.source);
    let distances = shortest_path_general(&graph, subcommand.source).map_err(|e| {
        if let weightgraph::ErrorKind::NegativeCycleDetected = e.kind() {
            error!("The graph has a negative cycle reachable from {}", subcommand.source);
        }
        e
    })?;
    info!(
        "{}/{} vertices are reachable",
        distances.reachable().count(),
        distances.len()
    );

    let mut output = create_output(&subcommand.output)?;
    write_distance_table(&distances, &mut output)?;
    output.flush()?;
    Ok(())
}
