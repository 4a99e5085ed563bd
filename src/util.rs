use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use weightgraph::io::edge_list::read_edge_list;
use weightgraph::{Vertex, WeightedGraph};

/// The weight type of all graphs read by the command line interface.
pub type CliWeight = i64;

pub fn read_edges(input: &str) -> crate::Result<Vec<(Vertex, Vertex, CliWeight)>> {
    info!("Reading edge list from: {}", input);
    let edges = read_edge_list(input)?;
    info!("Read {} edges", edges.len());
    Ok(edges)
}

pub fn read_graph(input: &str) -> crate::Result<WeightedGraph<CliWeight>> {
    let graph: WeightedGraph<_> = read_edges(input)?.into_iter().collect();
    info!(
        "Built an undirected graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Opens the given output file, or stdout if there is none.
pub fn create_output(output: &Option<String>) -> crate::Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = match output {
        Some(output) => {
            info!("Writing result to: {}", output);
            Box::new(BufWriter::new(File::create(output)?))
        }
        None => Box::new(BufWriter::new(std::io::stdout())),
    };
    Ok(writer)
}
