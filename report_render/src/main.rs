use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use grader::RenderJob;
use grader::config::GraderConfig;
use grader::renderers::html::HtmlRenderer;
use std::path::PathBuf;
use tracing::info;

#[derive(ValueEnum, Clone, Debug)]
enum OutputFormat {
    Text,
    Html,
}

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Report JSON file, relative to the base directory
    #[arg(default_value = "report.json")]
    report: String,
    /// Auxiliary raw-log capture, shown when the report is missing
    log: Option<String>,
    /// Base directory for resolving the file arguments. Defaults to REPORT_BASE_DIR
    /// from the environment, else the current directory
    #[arg(long)]
    base_dir: Option<PathBuf>,
    /// Output format for the rendered report
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let config = match &args.base_dir {
        Some(dir) => GraderConfig::new(dir),
        None => GraderConfig::from_env(),
    };

    let mut job = RenderJob::new(config, &args.report);
    if let Some(log) = &args.log {
        job = job.with_aux_log(log);
    }
    let job = match args.format {
        OutputFormat::Text => job,
        OutputFormat::Html => job.with_renderer(HtmlRenderer),
    };

    // A missing report is handled inside the job (fallback penalty, exit 0);
    // malformed JSON in an existing report propagates as a fatal error.
    let outcome = job
        .run()
        .with_context(|| format!("rendering report {}", args.report))?;

    info!(
        points = outcome.tally.points,
        max_points = outcome.tally.max_points,
        "report scored"
    );

    // Report body first, then the machine-readable trailer. The extra println
    // newline closes the trailer with a blank line.
    print!("{}", outcome.rendered);
    if !outcome.rendered.ends_with('\n') {
        println!();
    }
    println!("{}", outcome.tally.trailer());

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    // Stdout carries the rendered report and the totals trailer, which downstream
    // harnesses scrape; all logging goes to stderr.
    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
