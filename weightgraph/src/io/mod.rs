use crate::distances::{DistanceMatrix, DistanceTable};
use crate::error::Result;
use crate::weight::Weight;
use std::io::Write;

/// Reading graphs from plain text edge lists.
pub mod edge_list;

/// Write a distance table in the following format, ordered by vertex id.
///
/// ```text
/// <vertex> <distance>
/// ```
///
/// Unreachable vertices have the distance `inf`.
pub fn write_distance_table<WeightType: Weight, Writer: Write>(
    distances: &DistanceTable<WeightType>,
    writer: &mut Writer,
) -> Result<()> {
    for (vertex, distance) in distances.iter() {
        writeln!(writer, "{} {}", vertex, distance)?;
    }
    Ok(())
}

/// Write a distance matrix with one row per line and the columns separated by spaces.
/// Unreachable pairs have the distance `inf`.
pub fn write_distance_matrix<WeightType: Weight, Writer: Write>(
    distances: &DistanceMatrix<WeightType>,
    writer: &mut Writer,
) -> Result<()> {
    for row in distances.rows() {
        let mut once = false;
        for distance in row {
            if once {
                write!(writer, " ")?;
            } else {
                once = true;
            }
            write!(writer, "{}", distance)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{write_distance_matrix, write_distance_table};
    use crate::algo::floyd_warshall::all_pairs_shortest_paths;
    use crate::distances::DistanceTable;
    use crate::weight::Distance;

    #[test]
    fn test_write_distance_table() {
        let mut distances = DistanceTable::new_unreachable(vec![2, 0]);
        distances.set(0, Distance::Finite(-3i32));
        let mut output = Vec::new();
        write_distance_table(&distances, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "0 -3\n2 inf\n");
    }

    #[test]
    fn test_write_distance_matrix() {
        let distances = all_pairs_shortest_paths(3, &[(0, 1, 2u8), (1, 2, 3)]).unwrap();
        let mut output = Vec::new();
        write_distance_matrix(&distances, &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "0 2 5\ninf 0 3\ninf inf 0\n"
        );
    }
}
