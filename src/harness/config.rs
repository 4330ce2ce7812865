//! Benchmark configuration: instance size, edge density and run options.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Number of random instances generated when none is requested.
pub const DEFAULT_INSTANCES: usize = 100;

/// Errors that can occur while validating a [`BenchConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Instances need at least one vertex.
    #[error("Vertex count must be positive")]
    NoVertices,

    /// At least one instance must be generated.
    #[error("Instance count must be positive")]
    NoInstances,

    /// The source vertex does not exist in the generated instances.
    #[error("Source vertex {vertex} is out of range for {vertices} vertices")]
    SourceOutOfRange {
        /// Requested source vertex
        vertex: usize,
        /// Vertices per instance
        vertices: usize,
    },
}

/// Edge density as a percentage, always within `[0, 100]`.
///
/// # Example
///
/// ```rust
/// use waypoint::harness::Density;
///
/// assert_eq!(Density::clamped(250).percent(), 100);
/// assert_eq!(Density::clamped(-5).percent(), 0);
/// assert_eq!("40".parse::<Density>().unwrap().percent(), 40);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Density(u8);

impl Density {
    /// Clamps any integer percentage into `[0, 100]`.
    pub fn clamped(percent: i64) -> Self {
        // Lossless after the clamp.
        Self(percent.clamp(0, 100) as u8)
    }

    /// The percentage.
    pub fn percent(self) -> u8 {
        self.0
    }
}

impl FromStr for Density {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self::clamped)
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Settings for one benchmark session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchConfig {
    /// Vertices per generated instance
    pub vertices: usize,
    /// Chance, in percent, that any given vertex pair is joined by an edge
    pub density: Density,
    /// Number of instances to generate
    pub instances: usize,
    /// Source vertex for the all-destinations runs
    pub source: usize,
    /// RNG seed; a random one is chosen when absent
    pub seed: Option<u64>,
}

impl BenchConfig {
    /// Creates a configuration with the default instance count, source 0 and no seed.
    pub fn new(vertices: usize, density: Density) -> Self {
        Self {
            vertices,
            density,
            instances: DEFAULT_INSTANCES,
            source: 0,
            seed: None,
        }
    }

    /// Sets the number of instances.
    pub fn with_instances(mut self, instances: usize) -> Self {
        self.instances = instances;
        self
    }

    /// Sets the source vertex.
    pub fn with_source(mut self, source: usize) -> Self {
        self.source = source;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Checks that the configuration describes a runnable benchmark.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.vertices == 0 {
            return Err(ConfigError::NoVertices);
        }
        if self.instances == 0 {
            return Err(ConfigError::NoInstances);
        }
        if self.source >= self.vertices {
            return Err(ConfigError::SourceOutOfRange {
                vertex: self.source,
                vertices: self.vertices,
            });
        }
        Ok(())
    }
}
