use std::path::PathBuf;

use clap::Parser;
use format1_parser::output::{OutputFormat, format_inventory};
use format1_parser::report::{PersonOrder, ReportOptions};
use format1_parser::{parse_file, strict_check};
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "format1-report")]
#[command(about = "Render an ownership report from a FORMAT-1 inventory file")]
#[command(version)]
struct Cli {
    /// FORMAT-1 input file.
    input: PathBuf,
    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
    /// How people are enumerated in the text report.
    #[arg(long, value_enum, default_value = "indexed")]
    person_order: PersonOrder,
    /// Fail on declared-count mismatches, dangling relations and dropped lines.
    #[arg(long)]
    strict: bool,
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let run = parse_file(&cli.input).map_err(|e| e.to_string())?;

    for warning in run.diagnostics.warnings() {
        debug!("{warning}");
    }

    if cli.strict {
        strict_check(&run).map_err(|e| e.to_string())?;
    }

    let options = ReportOptions {
        person_order: cli.person_order,
    };
    let output = format_inventory(&run.inventory, cli.format, &options)
        .map_err(|e| format!("Failed to format output: {e}"))?;
    print!("{output}");
    Ok(())
}
