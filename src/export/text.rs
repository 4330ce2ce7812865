//! Plain-text export implementation.
//!
//! Writes the console transcript: every path report, per-instance timings and
//! the average times.

use super::{BenchReport, Exporter};
use std::io::{self, Write};

/// Plain-text exporter implementation.
pub struct TextExporter;

impl Exporter for TextExporter {
    fn export<W: Write>(&self, data: &BenchReport, writer: &mut W) -> io::Result<()> {
        for run in &data.source_runs {
            write!(writer, "{}", run.report)?;
            writeln!(
                writer,
                "Time taken to find shortest path for instance {}: {:.2} ms",
                run.instance,
                run.elapsed_ms()
            )?;
        }

        if let Some(average) = data.source_summary().average_ms() {
            writeln!(writer)?;
            writeln!(
                writer,
                "Average time taken to find shortest path for all instances: {:.2} ms",
                average
            )?;
        }

        if let Some(query) = &data.query {
            writeln!(writer)?;
            for run in &query.runs {
                writeln!(writer, "{}", run.report.query_line())?;
            }
            if let Some(average) = query.summary().average_ms() {
                writeln!(
                    writer,
                    "Average time taken to find shortest path between vertices {} and {}: {:.2} ms",
                    query.from, query.to, average
                )?;
            }
        }

        Ok(())
    }
}
