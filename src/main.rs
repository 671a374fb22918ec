use std::path::PathBuf;

use clap::Parser;
use pyscout::{
    discover_candidates, DiscoverOptions, DiscoveryReport, JsonFormatter, OutputFormat,
    OutputFormatter, TextFormatter,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "pyscout")]
#[command(about = "Discover candidate test files from paths, directories, and glob patterns")]
#[command(version)]
struct Cli {
    /// Files, directories, or glob patterns to search
    #[arg(value_name = "PATTERNS")]
    patterns: Vec<String>,

    /// Base directory for resolving relative patterns
    #[arg(long, value_name = "DIR")]
    base_dir: Option<PathBuf>,

    /// Extension that marks a file as a test source
    #[arg(long, default_value = "py")]
    extension: String,

    /// Output format
    #[arg(long = "output-format", value_enum, default_value = "text")]
    output_format: OutputFormat,

    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = DiscoverOptions {
        base_dir: cli.base_dir,
        extension: cli.extension,
    };
    let candidates = discover_candidates(&cli.patterns, &options).await?;
    let report = DiscoveryReport::new(candidates);

    let output = match cli.output_format {
        OutputFormat::Text => TextFormatter.format(&report),
        OutputFormat::Json => JsonFormatter.format(&report),
    };
    println!("{}", output.trim_end_matches('\n'));

    std::process::exit(if report.is_empty() { 1 } else { 0 });
}
