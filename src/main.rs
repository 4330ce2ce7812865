use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use waypoint::export::{self, BenchReport, OutputFormat};
use waypoint::harness::{
    generate_random_instances, measure_shortest_path, measure_shortest_path_from_source,
    seeded_rng, BenchConfig, Density, DEFAULT_INSTANCES,
};

mod prompt;

#[derive(Parser)]
#[command(name = "waypoint")]
#[command(author = "Zachary Woods <143150513+zach-fau@users.noreply.github.com>")]
#[command(version)]
#[command(about = "Dijkstra shortest paths over randomly generated weighted graphs", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate random graphs and time shortest-path queries on them
    Run(RunArgs),
    /// Show version information
    Version,
}

#[derive(Args)]
struct RunArgs {
    /// Vertices per instance (prompted for when omitted)
    #[arg(short = 'n', long, env = "WAYPOINT_VERTICES")]
    vertices: Option<usize>,

    /// Edge density in percent, clamped to 0-100 (prompted for when omitted)
    #[arg(short, long, env = "WAYPOINT_DENSITY", allow_negative_numbers = true)]
    density: Option<Density>,

    /// First vertex of the pair query (prompted for when omitted)
    #[arg(long)]
    from: Option<usize>,

    /// Second vertex of the pair query (prompted for when omitted)
    #[arg(long)]
    to: Option<usize>,

    /// Number of random instances
    #[arg(short, long, env = "WAYPOINT_INSTANCES", default_value_t = DEFAULT_INSTANCES)]
    instances: usize,

    /// Source vertex for the all-destinations runs
    #[arg(short, long, default_value_t = 0)]
    source: usize,

    /// Seed for reproducible instances
    #[arg(long, env = "WAYPOINT_SEED")]
    seed: Option<u64>,

    /// Output format: text, json or csv
    #[arg(short, long, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn run(args: RunArgs) -> Result<()> {
    // Prompts go to stderr so stdout carries only the report.
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut prompts = io::stderr();

    let vertices = match args.vertices {
        Some(v) => v,
        None => prompt::ask(&mut input, &mut prompts, "Enter number of vertices: ")?,
    };
    let density = match args.density {
        Some(d) => d,
        None => prompt::ask(&mut input, &mut prompts, "Enter density (percentage): ")?,
    };
    let from = match args.from {
        Some(v) => v,
        None => prompt::ask(
            &mut input,
            &mut prompts,
            "Enter two vertices to find the shortest path between them (vertex1): ",
        )?,
    };
    let to = match args.to {
        Some(v) => v,
        None => prompt::ask(
            &mut input,
            &mut prompts,
            "Enter two vertices to find the shortest path between them (vertex2): ",
        )?,
    };

    let config = BenchConfig::new(vertices, density)
        .with_instances(args.instances)
        .with_source(args.source)
        .with_seed(args.seed);
    config
        .validate()
        .context("Invalid benchmark configuration")?;

    let (mut rng, seed) = seeded_rng(config.seed);
    tracing::info!(seed, "seeded instance generator");

    let instances = generate_random_instances(&config, &mut rng)?;
    let source_runs = measure_shortest_path_from_source(&instances, config.source)
        .context("All-destinations run failed")?;
    let query_runs = measure_shortest_path(&instances, from, to)
        .with_context(|| format!("Cannot query vertices {} and {}", from, to))?;

    let report = BenchReport::new(config, seed, source_runs).with_query(from, to, query_runs);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    export::export(args.format, &report, &mut out).context("Failed to write report")?;
    out.flush()?;

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    match cli.command {
        Some(Commands::Run(args)) => run(args),
        Some(Commands::Version) => {
            println!("waypoint v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        None => {
            println!("Waypoint - Dijkstra shortest paths over random graphs");
            println!("Run 'waypoint run' to generate instances and time queries");
            println!("Run 'waypoint --help' for more information");
            Ok(())
        }
    }
}
