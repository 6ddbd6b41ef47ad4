//! Model Generator
//!
//! Generates strongly-typed Rust models from table-shaped JSON schemas.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use modelgen_gen::config::{GeneratorConfig, GroupSelector};
use modelgen_gen::errors::GeneratorError;
use modelgen_gen::output::{GroupReport, generate_group};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Model generator - turns JSON schema documents into typed Rust models
#[derive(Parser, Debug)]
#[command(name = "modelgen-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Model group to generate
    #[arg(value_enum, default_value_t = GroupSelector::Common)]
    group: GroupSelector,

    /// Directory to read schemas from (defaults to the group's schema directory)
    #[arg(long)]
    schemas_dir: Option<PathBuf>,

    /// Output directory for generated code
    #[arg(short, long, default_value = "generated")]
    output_dir: PathBuf,

    /// Print generated code without writing files
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,modelgen_gen=info".to_string(),
            2 => "info,modelgen_gen=debug".to_string(),
            _ => "debug,modelgen_gen=trace".to_string(),
        },
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn print_summary(report: &GroupReport) {
    let line = format!(
        "Generated {}/{} {} models",
        report.succeeded(),
        report.attempted(),
        report.group
    );
    if report.batch.is_complete() {
        eprintln!("{}", line.green());
    } else {
        eprintln!("{}", line.yellow());
        for skipped in &report.batch.failures {
            eprintln!("  {} {}", "skipped".yellow(), skipped.error);
        }
    }
}

fn run(cli: &Cli) -> Result<(), GeneratorError> {
    let configs = GeneratorConfig::for_selection(
        cli.group,
        cli.schemas_dir.as_deref(),
        &cli.output_dir,
        cli.dry_run,
    )?;

    for config in &configs {
        debug!(?config, "Resolved configuration");
        let report = generate_group(config)?;
        print_summary(&report);
    }

    if !cli.dry_run {
        eprintln!("Output directory: {}", cli.output_dir.join("models").display());
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
