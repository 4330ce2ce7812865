//! Timed shortest-path runs over a set of instances.

use std::time::{Duration, Instant};

use crate::graph::{Graph, GraphResult};
use crate::shortest_path::{PathReport, ShortestPathEngine, SourceReport};

/// One timed engine run on one instance.
#[derive(Debug, Clone)]
pub struct InstanceRun<T> {
    /// 1-based instance number
    pub instance: usize,
    /// Wall-clock time spent in the engine
    pub elapsed: Duration,
    /// What the engine reported
    pub report: T,
}

impl<T> InstanceRun<T> {
    /// Elapsed time in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_nanos() as f64 / 1_000_000.0
    }
}

fn timed<T>(
    instances: &[Graph],
    mut run: impl FnMut(ShortestPathEngine<'_>) -> GraphResult<T>,
) -> GraphResult<Vec<InstanceRun<T>>> {
    let mut runs = Vec::with_capacity(instances.len());

    for (i, graph) in instances.iter().enumerate() {
        let start = Instant::now();
        let report = run(ShortestPathEngine::new(graph))?;
        let elapsed = start.elapsed();

        tracing::trace!(
            instance = i + 1,
            elapsed_us = elapsed.as_micros() as u64,
            "timed run"
        );
        runs.push(InstanceRun {
            instance: i + 1,
            elapsed,
            report,
        });
    }

    Ok(runs)
}

/// Runs the engine from `source` to every vertex on each instance.
pub fn measure_shortest_path_from_source(
    instances: &[Graph],
    source: usize,
) -> GraphResult<Vec<InstanceRun<SourceReport>>> {
    timed(instances, |engine| engine.shortest_path_from_source(source))
}

/// Runs the engine for the pair `(from, to)` on each instance.
pub fn measure_shortest_path(
    instances: &[Graph],
    from: usize,
    to: usize,
) -> GraphResult<Vec<InstanceRun<PathReport>>> {
    timed(instances, |engine| engine.shortest_path(from, to))
}

/// Total and average run time of a set of runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchSummary {
    /// Number of runs
    pub runs: usize,
    /// Sum of all run times
    pub total: Duration,
}

impl BenchSummary {
    /// Summarizes `runs`.
    pub fn from_runs<T>(runs: &[InstanceRun<T>]) -> Self {
        Self {
            runs: runs.len(),
            total: runs.iter().map(|r| r.elapsed).sum(),
        }
    }

    /// Total time in milliseconds.
    pub fn total_ms(&self) -> f64 {
        self.total.as_nanos() as f64 / 1_000_000.0
    }

    /// Mean time per run in milliseconds, `None` when there were no runs.
    pub fn average_ms(&self) -> Option<f64> {
        if self.runs == 0 {
            None
        } else {
            Some(self.total_ms() / self.runs as f64)
        }
    }
}
