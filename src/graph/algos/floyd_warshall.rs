use crate::bail_invalid;
use crate::error::Result;
use crate::graph::types::Weight;
use crate::graph::WeightedGraph;

/// All-pairs shortest paths, relaxing `matrix` in place.
///
/// `INFINITY` marks an absent edge. A via-node is skipped when either leg
/// through it is infinite.
#[tracing::instrument(skip(matrix), fields(nodes = matrix.len()))]
pub fn floyd_warshall(matrix: &mut [Vec<Weight>]) -> Result<()> {
    let n = matrix.len();
    if let Some(row) = matrix.iter().find(|row| row.len() != n) {
        bail_invalid!(
            "distance matrix",
            format!("row of length {} in a {}x{} matrix", row.len(), n, n)
        );
    }

    for via in 0..n {
        for i in 0..n {
            let to_via = matrix[i][via];
            if to_via == f64::INFINITY {
                continue;
            }
            for j in 0..n {
                let from_via = matrix[via][j];
                if from_via != f64::INFINITY && to_via + from_via < matrix[i][j] {
                    matrix[i][j] = to_via + from_via;
                }
            }
        }
    }

    Ok(())
}

/// All-pairs distances for `graph`, computed on a copy of its adjacency matrix
pub fn floyd_warshall_graph(graph: &WeightedGraph) -> Result<Vec<Vec<Weight>>> {
    let mut matrix = graph.adjacency_matrix().to_vec();
    floyd_warshall(&mut matrix)?;
    Ok(matrix)
}
