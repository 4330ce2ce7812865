//! JSON export implementation.
//!
//! Exports benchmark results in JSON format for machine-readable output.

use super::{BenchReport, Exporter};
use crate::harness::BenchConfig;
use crate::shortest_path::{PathReport, Route};
use serde::Serialize;
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

/// Serializable all-destinations run for JSON output.
#[derive(Serialize)]
struct JsonSourceRun<'a> {
    instance: usize,
    elapsed_ms: f64,
    reachable: usize,
    paths: &'a [PathReport],
}

/// Serializable single-pair run for JSON output.
#[derive(Serialize)]
struct JsonQueryRun<'a> {
    instance: usize,
    elapsed_ms: f64,
    route: Option<&'a Route>,
}

/// Timing totals for JSON output.
#[derive(Serialize)]
struct JsonTiming {
    runs: usize,
    total_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    average_ms: Option<f64>,
}

/// All-destinations section for JSON output.
#[derive(Serialize)]
struct JsonSingleSource<'a> {
    source: usize,
    timing: JsonTiming,
    runs: Vec<JsonSourceRun<'a>>,
}

/// Single-pair section for JSON output.
#[derive(Serialize)]
struct JsonQuery<'a> {
    from: usize,
    to: usize,
    timing: JsonTiming,
    runs: Vec<JsonQueryRun<'a>>,
}

/// Root JSON export structure.
#[derive(Serialize)]
struct JsonExport<'a> {
    config: &'a BenchConfig,
    seed: u64,
    single_source: JsonSingleSource<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<JsonQuery<'a>>,
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, data: &BenchReport, writer: &mut W) -> io::Result<()> {
        let summary = data.source_summary();
        let single_source = JsonSingleSource {
            source: data.config.source,
            timing: JsonTiming {
                runs: summary.runs,
                total_ms: summary.total_ms(),
                average_ms: summary.average_ms(),
            },
            runs: data
                .source_runs
                .iter()
                .map(|run| JsonSourceRun {
                    instance: run.instance,
                    elapsed_ms: run.elapsed_ms(),
                    reachable: run.report.reachable_count(),
                    paths: &run.report.paths,
                })
                .collect(),
        };

        let query = data.query.as_ref().map(|query| {
            let summary = query.summary();
            JsonQuery {
                from: query.from,
                to: query.to,
                timing: JsonTiming {
                    runs: summary.runs,
                    total_ms: summary.total_ms(),
                    average_ms: summary.average_ms(),
                },
                runs: query
                    .runs
                    .iter()
                    .map(|run| JsonQueryRun {
                        instance: run.instance,
                        elapsed_ms: run.elapsed_ms(),
                        route: run.report.route.as_ref(),
                    })
                    .collect(),
            }
        });

        let export = JsonExport {
            config: &data.config,
            seed: data.seed,
            single_source,
            query,
        };

        let json = serde_json::to_string_pretty(&export)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::fixtures::sample_report;

    fn render(report: &BenchReport) -> serde_json::Value {
        let mut output = Vec::new();
        JsonExporter.export(report, &mut output).unwrap();
        let json_str = String::from_utf8(output).unwrap();
        serde_json::from_str(&json_str).unwrap()
    }

    #[test]
    fn test_json_export_config() {
        let parsed = render(&sample_report());

        assert_eq!(parsed["config"]["vertices"], 3);
        assert_eq!(parsed["config"]["density"], 50);
        assert_eq!(parsed["config"]["instances"], 2);
        assert_eq!(parsed["seed"], 7);
    }

    #[test]
    fn test_json_export_single_source() {
        let parsed = render(&sample_report());
        let section = &parsed["single_source"];

        assert_eq!(section["source"], 0);
        assert_eq!(section["timing"]["runs"], 2);
        assert_eq!(section["timing"]["average_ms"], 2.25);

        let runs = section["runs"].as_array().unwrap();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0]["reachable"], 2);
        assert_eq!(runs[0]["paths"][1]["route"]["vertices"], serde_json::json!([0, 1, 2]));
        assert_eq!(runs[1]["paths"][1]["route"], serde_json::Value::Null);
    }

    #[test]
    fn test_json_export_query() {
        let parsed = render(&sample_report());
        let query = &parsed["query"];

        assert_eq!(query["from"], 0);
        assert_eq!(query["to"], 2);
        assert_eq!(query["runs"][0]["route"]["distance"], 3);
        assert_eq!(query["runs"][1]["route"], serde_json::Value::Null);
    }

    #[test]
    fn test_json_export_omits_missing_query() {
        let mut report = sample_report();
        report.query = None;

        let parsed = render(&report);
        assert!(parsed.get("query").is_none());
    }
}
