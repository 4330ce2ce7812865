//! Random graph instances for benchmarking.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::{BenchConfig, Density};
use crate::graph::{Graph, GraphResult, Weight};

/// Smallest weight given to a generated edge.
pub const MIN_WEIGHT: Weight = 1;

/// Largest weight given to a generated edge.
pub const MAX_WEIGHT: Weight = 10;

/// Builds an RNG from `seed`, or from a freshly drawn seed when none is given.
///
/// # Returns
///
/// The RNG and the seed it was built from, so a run can be reproduced.
pub fn seeded_rng(seed: Option<u64>) -> (StdRng, u64) {
    let seed = seed.unwrap_or_else(rand::random);
    (StdRng::seed_from_u64(seed), seed)
}

/// Generates one random graph.
///
/// Every pair `i < j` gets an edge when a roll in `0..100` falls below the
/// density. Edge weights are uniform in `MIN_WEIGHT..=MAX_WEIGHT`.
///
/// # Example
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use waypoint::harness::{random_graph, Density};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let graph = random_graph(6, Density::clamped(100), &mut rng).unwrap();
/// assert_eq!(graph.edge_count(), 15);
/// ```
pub fn random_graph<R: Rng + ?Sized>(
    vertices: usize,
    density: Density,
    rng: &mut R,
) -> GraphResult<Graph> {
    let mut graph = Graph::new(vertices);

    for i in 0..vertices {
        for j in (i + 1)..vertices {
            if rng.gen_range(0u8..100) < density.percent() {
                let weight = rng.gen_range(MIN_WEIGHT..=MAX_WEIGHT);
                graph.insert_edge(i, j, weight)?;
            }
        }
    }

    Ok(graph)
}

/// Generates `config.instances` independent random graphs.
pub fn generate_random_instances<R: Rng + ?Sized>(
    config: &BenchConfig,
    rng: &mut R,
) -> GraphResult<Vec<Graph>> {
    let instances = (0..config.instances)
        .map(|_| random_graph(config.vertices, config.density, &mut *rng))
        .collect::<GraphResult<Vec<_>>>()?;

    tracing::info!(
        instances = instances.len(),
        vertices = config.vertices,
        density = config.density.percent(),
        edges = instances.iter().map(Graph::edge_count).sum::<usize>(),
        "generated random instances"
    );

    Ok(instances)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_density_has_no_edges() {
        let mut rng = StdRng::seed_from_u64(3);
        let graph = random_graph(20, Density::clamped(0), &mut rng).unwrap();
        assert_eq!(graph.vertex_count(), 20);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_full_density_is_complete() {
        let mut rng = StdRng::seed_from_u64(3);
        let graph = random_graph(12, Density::clamped(100), &mut rng).unwrap();
        assert_eq!(graph.edge_count(), 12 * 11 / 2);
        for i in 0..12 {
            for j in 0..12 {
                if i != j {
                    assert!(graph.are_adjacent(i, j).unwrap());
                }
            }
        }
    }

    #[test]
    fn test_weights_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let graph = random_graph(30, Density::clamped(50), &mut rng).unwrap();
        assert!(graph.edge_count() > 0);
        for (u, v, w) in graph.weighted_edges() {
            assert!(u < v);
            assert!((MIN_WEIGHT..=MAX_WEIGHT).contains(&w));
        }
    }

    #[test]
    fn test_same_seed_same_instances() {
        let config = BenchConfig::new(15, Density::clamped(30)).with_instances(4);

        let (mut first_rng, seed) = seeded_rng(Some(99));
        assert_eq!(seed, 99);
        let (mut second_rng, _) = seeded_rng(Some(99));

        let first = generate_random_instances(&config, &mut first_rng).unwrap();
        let second = generate_random_instances(&config, &mut second_rng).unwrap();

        assert_eq!(first.len(), 4);
        let edges = |graphs: &[Graph]| -> Vec<Vec<(usize, usize, Weight)>> {
            graphs.iter().map(Graph::weighted_edges).collect()
        };
        assert_eq!(edges(&first), edges(&second));
    }

    #[test]
    fn test_single_vertex() {
        let mut rng = StdRng::seed_from_u64(0);
        let graph = random_graph(1, Density::clamped(100), &mut rng).unwrap();
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }
}
