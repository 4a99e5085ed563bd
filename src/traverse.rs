use crate::util::{create_output, read_graph};
use crate::CliOptions;
use clap::Parser;
use error_chain::bail;
use log::{error, info};
use std::io::Write;
use weightgraph::algo::traversal::{
    breadth_first_search, depth_first_search, depth_first_search_iterative,
};
use weightgraph::Vertex;

#[derive(Parser)]
pub struct TraverseCommand {
    #[clap(
        short,
        long,
        help = "The input edge list, one '<origin> <destination> <weight>' triple per line. Edges are undirected"
    )]
    pub input: String,

    #[clap(short, long, help = "The vertex the traversal starts from")]
    pub start: Vertex,

    #[clap(
        long,
        default_value = "bfs",
        help = "The traversal order, one of bfs, dfs (recursive) and dfs-iterative"
    )]
    pub order: String,

    #[clap(
        short,
        long,
        help = "The file the visited vertices are written to, one per line. Defaults to stdout"
    )]
    pub output: Option<String>,
}

pub(crate) fn traverse(_options: &CliOptions, subcommand: &TraverseCommand) -> crate::Result<()> {
    let graph = read_graph(&subcommand.input)?;

    let order = match subcommand.order.as_str() {
        "bfs" => breadth_first_search(&graph, subcommand.start)?,
        "dfs" => depth_first_search(&graph, subcommand.start)?,
        "dfs-iterative" => depth_first_search_iterative(&graph, subcommand.start)?,
        unknown => {
            error!("Unknown traversal order: {}", unknown);
            bail!(crate::ErrorKind::Parameter);
        }
    };
    info!("Visited {}/{} vertices", order.len(), graph.vertex_count());

    let mut output = create_output(&subcommand.output)?;
    for vertex in order {
        writeln!(output, "{}", vertex)?;
    }
    output.flush()?;
    Ok(())
}
