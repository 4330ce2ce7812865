//! Benchmark harness: random instance generation and timed engine runs.
//!
//! # Example
//!
//! ```rust
//! use waypoint::harness::{
//!     generate_random_instances, measure_shortest_path_from_source, seeded_rng, BenchConfig,
//!     BenchSummary, Density,
//! };
//!
//! let config = BenchConfig::new(10, Density::clamped(30)).with_instances(5);
//! let (mut rng, _seed) = seeded_rng(Some(42));
//! let instances = generate_random_instances(&config, &mut rng).unwrap();
//!
//! let runs = measure_shortest_path_from_source(&instances, config.source).unwrap();
//! let summary = BenchSummary::from_runs(&runs);
//! assert_eq!(summary.runs, 5);
//! ```

mod config;
mod generator;
mod timing;

pub use config::{BenchConfig, ConfigError, Density, DEFAULT_INSTANCES};
pub use generator::{
    generate_random_instances, random_graph, seeded_rng, MAX_WEIGHT, MIN_WEIGHT,
};
pub use timing::{
    measure_shortest_path, measure_shortest_path_from_source, BenchSummary, InstanceRun,
};
