//! Export functionality for benchmark results.
//!
//! This module provides exporters for writing a [`BenchReport`] in various
//! formats: the plain-text console transcript, JSON, and CSV.

pub mod csv;
pub mod json;
pub mod text;

use crate::harness::{BenchConfig, BenchSummary, InstanceRun};
use crate::shortest_path::{PathReport, SourceReport};
use std::io::{self, Write};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text - one report line per path plus timings
    #[default]
    Text,
    /// JSON format - machine-readable, full data
    Json,
    /// CSV format - spreadsheet-friendly
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!(
                "Unknown output format: '{}'. Valid formats: text, json, csv",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Timed runs for a single source/destination pair.
#[derive(Debug, Clone)]
pub struct QueryRuns {
    /// Source vertex of the query
    pub from: usize,
    /// Destination vertex of the query
    pub to: usize,
    /// One run per instance
    pub runs: Vec<InstanceRun<PathReport>>,
}

impl QueryRuns {
    /// Timing summary of the query runs.
    pub fn summary(&self) -> BenchSummary {
        BenchSummary::from_runs(&self.runs)
    }
}

/// Data container for export operations.
///
/// Holds everything one benchmark session produced.
#[derive(Debug, Clone)]
pub struct BenchReport {
    /// Configuration the instances were generated with
    pub config: BenchConfig,
    /// Seed actually used, so the session can be reproduced
    pub seed: u64,
    /// All-destinations runs from `config.source`
    pub source_runs: Vec<InstanceRun<SourceReport>>,
    /// Optional single-pair runs
    pub query: Option<QueryRuns>,
}

impl BenchReport {
    /// Create a report from the all-destinations runs.
    pub fn new(
        config: BenchConfig,
        seed: u64,
        source_runs: Vec<InstanceRun<SourceReport>>,
    ) -> Self {
        Self {
            config,
            seed,
            source_runs,
            query: None,
        }
    }

    /// Attach single-pair runs.
    pub fn with_query(
        mut self,
        from: usize,
        to: usize,
        runs: Vec<InstanceRun<PathReport>>,
    ) -> Self {
        self.query = Some(QueryRuns { from, to, runs });
        self
    }

    /// Timing summary of the all-destinations runs.
    pub fn source_summary(&self) -> BenchSummary {
        BenchSummary::from_runs(&self.source_runs)
    }
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the data to the given writer.
    fn export<W: Write>(&self, data: &BenchReport, writer: &mut W) -> io::Result<()>;
}

/// Export data in the specified format.
pub fn export<W: Write>(
    format: OutputFormat,
    data: &BenchReport,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => text::TextExporter.export(data, writer),
        OutputFormat::Json => json::JsonExporter.export(data, writer),
        OutputFormat::Csv => csv::CsvExporter.export(data, writer),
    }
}

/// Export data to a string.
pub fn export_to_string(format: OutputFormat, data: &BenchReport) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, data, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::graph::Graph;
    use crate::harness::Density;
    use crate::shortest_path::ShortestPathEngine;
    use std::time::Duration;

    /// Two instances over the same vertices; vertex 2 is cut off in the second.
    pub fn sample_report() -> BenchReport {
        let mut first: Graph = Graph::new(3);
        first.insert_edge(0, 1, 1).unwrap();
        first.insert_edge(1, 2, 2).unwrap();

        let mut second: Graph = Graph::new(3);
        second.insert_edge(0, 1, 4).unwrap();

        let graphs = [first, second];
        let source_runs: Vec<_> = graphs
            .iter()
            .enumerate()
            .map(|(i, g)| InstanceRun {
                instance: i + 1,
                elapsed: Duration::from_micros(1500 * (i as u64 + 1)),
                report: ShortestPathEngine::new(g).shortest_path_from_source(0).unwrap(),
            })
            .collect();
        let query_runs: Vec<_> = graphs
            .iter()
            .enumerate()
            .map(|(i, g)| InstanceRun {
                instance: i + 1,
                elapsed: Duration::from_micros(250),
                report: ShortestPathEngine::new(g).shortest_path(0, 2).unwrap(),
            })
            .collect();

        let config = BenchConfig::new(3, Density::clamped(50))
            .with_instances(2)
            .with_seed(Some(7));
        BenchReport::new(config, 7, source_runs).with_query(0, 2, query_runs)
    }
}
