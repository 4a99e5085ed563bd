use crate::graph::Vertex;
use crate::weight::Weight;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

error_chain! {
    foreign_links {
        // For some weird reasons I don't understand, the doc comments have to be put after the item in this macro...
        Io(std::io::Error)
        /// An IO error.
        ;
    }

    errors {
        /// A line is neither blank, nor a comment, nor an edge.
        MalformedLine(line_number: usize, line: String) {
            description("malformed edge list line")
            display("malformed edge list line {}: '{}', expected '<origin> <destination> <weight>'", line_number, line)
        }
    }
}

/// Read an edge list from the given file.
/// See [`parse_edge_list`] for the format.
pub fn read_edge_list<WeightType: Weight + FromStr, P: AsRef<Path>>(
    path: P,
) -> Result<Vec<(Vertex, Vertex, WeightType)>> {
    debug!("Reading edge list from {:?}", path.as_ref());
    parse_edge_list(BufReader::new(File::open(path)?))
}

/// Parse an edge list in the following format.
///
/// ```text
/// # comment
/// <origin> <destination> <weight>
/// ```
///
/// The second line is repeated for each edge.
/// Blank lines and lines starting with `#` are ignored.
/// Line numbers in errors start at one.
pub fn parse_edge_list<WeightType: Weight + FromStr, Reader: BufRead>(
    reader: Reader,
) -> Result<Vec<(Vertex, Vertex, WeightType)>> {
    let mut edges = Vec::new();

    for (line_index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let malformed = || ErrorKind::MalformedLine(line_index + 1, line.clone());
        let mut columns = trimmed.split_whitespace();
        let origin = parse_column::<Vertex>(columns.next()).ok_or_else(malformed)?;
        let destination = parse_column::<Vertex>(columns.next()).ok_or_else(malformed)?;
        let weight = parse_column::<WeightType>(columns.next()).ok_or_else(malformed)?;
        if columns.next().is_some() {
            bail!(malformed());
        }

        edges.push((origin, destination, weight));
    }

    trace!("Parsed {} edges", edges.len());
    Ok(edges)
}

fn parse_column<T: FromStr>(column: Option<&str>) -> Option<T> {
    column.and_then(|column| column.parse().ok())
}
