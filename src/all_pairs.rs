use crate::util::{create_output, read_edges};
use crate::CliOptions;
use clap::Parser;
use error_chain::bail;
use log::{error, info, warn};
use std::io::Write;
use weightgraph::algo::floyd_warshall::all_pairs_shortest_paths;
use weightgraph::io::write_distance_matrix;
use weightgraph::{Distance, Vertex};

#[derive(Parser)]
pub struct FloydWarshallCommand {
    #[clap(
        short,
        long,
        help = "The input edge list, one '<origin> <destination> <weight>' triple per line. Edges are directed"
    )]
    pub input: String,

    #[clap(
        short,
        long,
        help = "The amount of vertices, which are numbered from zero. Defaults to the largest vertex id in the input plus one"
    )]
    pub vertex_count: Option<usize>,

    #[clap(
        short,
        long,
        help = "The file the distance matrix is written to, one row per line. Defaults to stdout"
    )]
    pub output: Option<String>,
}

pub(crate) fn floyd_warshall(
    _options: &CliOptions,
    subcommand: &FloydWarshallCommand,
) -> crate::Result<()> {
    let edges = read_edges(&subcommand.input)?;
    let vertex_count = match subcommand.vertex_count {
        Some(vertex_count) => vertex_count,
        None => vertex_count_of(&edges)?,
    };

    info!("Computing all pairs shortest paths between {} vertices", vertex_count);
    let distances = all_pairs_shortest_paths(vertex_count, &edges)?;
    if (0..vertex_count).any(|vertex| distances.get(vertex, vertex) < Distance::Finite(0)) {
        warn!("Some vertices have a negative distance to themselves, the graph has a negative cycle");
    }

    let mut output = create_output(&subcommand.output)?;
    write_distance_matrix(&distances, &mut output)?;
    output.flush()?;
    Ok(())
}

/// The amount of vertices needed to contain all edge endpoints.
fn vertex_count_of<WeightType>(edges: &[(Vertex, Vertex, WeightType)]) -> crate::Result<usize> {
    let max_vertex = match edges
        .iter()
        .map(|&(origin, destination, _)| origin.max(destination))
        .max()
    {
        Some(max_vertex) => max_vertex,
        None => return Ok(0),
    };

    match max_vertex.checked_add(1) {
        Some(vertex_count) => Ok(vertex_count),
        None => {
            error!("The vertex id {} is too large", max_vertex);
            bail!(crate::ErrorKind::Parameter);
        }
    }
}
