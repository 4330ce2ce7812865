//! CSV export implementation.
//!
//! Exports benchmark results in CSV format for spreadsheet use, one row per
//! reported path.

use super::{BenchReport, Exporter};
use crate::shortest_path::PathReport;
use std::io::{self, Write};

/// CSV exporter implementation.
pub struct CsvExporter;

impl CsvExporter {
    fn write_row<W: Write>(
        writer: &mut W,
        section: &str,
        instance: usize,
        elapsed_ms: f64,
        report: &PathReport,
    ) -> io::Result<()> {
        // Unreachable destinations leave distance and path empty.
        let (distance, path) = match &report.route {
            Some(route) => (route.distance.to_string(), route.path_string()),
            None => (String::new(), String::new()),
        };

        writeln!(
            writer,
            "{},{},{},{},{},{},{},{:.3}",
            section,
            instance,
            report.source,
            report.destination,
            report.is_reachable(),
            distance,
            path,
            elapsed_ms
        )
    }
}

impl Exporter for CsvExporter {
    fn export<W: Write>(&self, data: &BenchReport, writer: &mut W) -> io::Result<()> {
        // Write header
        writeln!(
            writer,
            "section,instance,source,destination,reachable,distance,path,elapsed_ms"
        )?;

        for run in &data.source_runs {
            for report in &run.report.paths {
                Self::write_row(writer, "source", run.instance, run.elapsed_ms(), report)?;
            }
        }

        if let Some(query) = &data.query {
            for run in &query.runs {
                Self::write_row(writer, "query", run.instance, run.elapsed_ms(), &run.report)?;
            }
        }

        Ok(())
    }
}
