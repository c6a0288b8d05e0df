//! Single-vehicle visiting order: nearest-neighbor construction followed by
//! 2-opt local search.
//!
//! The matrix is indexed with the origin at 0 and pickup stops at `1..n`.
//! Routes are sequences of stop indices that exclude the origin; their cost is
//! the closed loop origin -> stops -> origin.

use tracing::debug;

use crate::error::{PlannerError, Result};

#[derive(Debug, Clone, Default)]
pub struct SolveOptions {
    /// Upper bound on full 2-opt passes. `None` runs until a pass finds no
    /// improving swap.
    pub max_two_opt_passes: Option<usize>,
}

/// Compute a visiting order over stops `1..n` of the matrix.
///
/// Returns an empty order when the matrix holds only the origin (or nothing).
pub fn solve(matrix: &[Vec<f64>], options: &SolveOptions) -> Result<Vec<usize>> {
    validate_matrix(matrix)?;

    if matrix.len() <= 1 {
        return Ok(Vec::new());
    }

    let mut route = nearest_neighbor(matrix);
    let initial = route_distance(matrix, &route);
    let swaps = improve_two_opt(matrix, &mut route, options.max_two_opt_passes);

    debug!(
        stops = route.len(),
        initial_distance = initial,
        final_distance = route_distance(matrix, &route),
        swaps,
        "route search finished"
    );

    Ok(route)
}

/// Greedy construction from the origin.
///
/// Each step moves to the closest unvisited stop; on equal distances the lower
/// index wins.
pub fn nearest_neighbor(matrix: &[Vec<f64>]) -> Vec<usize> {
    let n = matrix.len();
    if n <= 1 {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    visited[0] = true;
    let mut route = Vec::with_capacity(n - 1);
    let mut current = 0;

    while route.len() < n - 1 {
        let mut nearest: Option<usize> = None;
        let mut min_distance = f64::INFINITY;

        for candidate in 1..n {
            if !visited[candidate] && matrix[current][candidate] < min_distance {
                min_distance = matrix[current][candidate];
                nearest = Some(candidate);
            }
        }

        let Some(next) = nearest else {
            break;
        };

        visited[next] = true;
        route.push(next);
        current = next;
    }

    route
}

/// 2-opt: reverse `route[i+1..=j]` for every `j >= i + 2` and keep the
/// reversal when it strictly shortens the closed loop.
///
/// Scanning continues on the adopted route; passes repeat until one makes no
/// improvement or `max_passes` is reached. Returns the number of accepted
/// swaps.
pub fn improve_two_opt(matrix: &[Vec<f64>], route: &mut [usize], max_passes: Option<usize>) -> usize {
    let n = route.len();
    if n < 3 {
        return 0;
    }

    let mut best = route_distance(matrix, route);
    let mut swaps = 0;
    let mut passes = 0;
    let mut improved = true;

    while improved {
        if max_passes.is_some_and(|limit| passes >= limit) {
            break;
        }
        improved = false;
        passes += 1;

        for i in 0..n - 1 {
            for j in i + 2..n {
                route[i + 1..=j].reverse();
                let candidate = route_distance(matrix, route);

                if candidate < best {
                    best = candidate;
                    swaps += 1;
                    improved = true;
                } else {
                    route[i + 1..=j].reverse();
                }
            }
        }
    }

    debug!(passes, swaps, distance = best, "2-opt converged");
    swaps
}

/// Closed-loop cost: origin -> first, consecutive stops, last -> origin.
pub fn route_distance(matrix: &[Vec<f64>], route: &[usize]) -> f64 {
    let (Some(&first), Some(&last)) = (route.first(), route.last()) else {
        return 0.0;
    };

    let inner: f64 = route
        .windows(2)
        .map(|pair| matrix[pair[0]][pair[1]])
        .sum();

    matrix[0][first] + inner + matrix[last][0]
}

fn validate_matrix(matrix: &[Vec<f64>]) -> Result<()> {
    let n = matrix.len();
    for (i, row) in matrix.iter().enumerate() {
        if row.len() != n {
            return Err(PlannerError::optimization_failed(format!(
                "distance matrix is not square: row {} has {} entries, expected {}",
                i,
                row.len(),
                n
            )));
        }
        if let Some(value) = row.iter().find(|value| !value.is_finite() || **value < 0.0) {
            return Err(PlannerError::optimization_failed(format!(
                "distance matrix row {} contains invalid distance {}",
                i, value
            )));
        }
    }
    Ok(())
}
