//! Retirement Planner CLI
//!
//! Projects yearly contributions through age 100 and draws the result

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use retirement_planner::{
    chart::{
        render_chart, write_series_csv, format_abbreviated_currency, ChartData, ChartOptions,
        JsonChartRenderer, TextChartRenderer, DEFAULT_BAR_WIDTH, MAX_BAR_WIDTH,
    },
    input::{load_input, FormFields},
    projection::{AfterStopContributions, PaymentTiming, ProjectionConfig, ProjectionEngine},
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Text chart with a summary
    Chart,
    /// Chart document as JSON
    Json,
    /// One CSV row per age
    Csv,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Timing {
    End,
    Beginning,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AfterStop {
    Hold,
    Omit,
}

#[derive(Debug, Parser)]
#[command(name = "retirement-planner", version, about)]
struct Cli {
    /// Age contributions begin
    #[arg(long, required_unless_present = "input", allow_hyphen_values = true)]
    start_age: Option<String>,

    /// Age of the last contribution (inclusive)
    #[arg(long, required_unless_present = "input", allow_hyphen_values = true)]
    stop_age: Option<String>,

    /// Amount contributed each year
    #[arg(long, required_unless_present = "input", allow_hyphen_values = true)]
    annual_contribution: Option<String>,

    /// Expected annual return in percent (7 means 7%)
    #[arg(long, required_unless_present = "input", allow_hyphen_values = true)]
    annual_return: Option<String>,

    /// Read inputs from a JSON file instead of flags
    #[arg(long, conflicts_with_all = ["start_age", "stop_age", "annual_contribution", "annual_return"])]
    input: Option<PathBuf>,

    /// When each year's contribution is paid
    #[arg(long, value_enum, default_value = "end")]
    timing: Timing,

    /// Contribution series after the stop age
    #[arg(long, value_enum, default_value = "hold")]
    after_stop: AfterStop,

    #[arg(long, value_enum, default_value = "chart")]
    format: OutputFormat,

    /// Write output here instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Bar width of the text chart
    #[arg(
        long,
        default_value_t = DEFAULT_BAR_WIDTH as u16,
        value_parser = clap::value_parser!(u16).range(1..=MAX_BAR_WIDTH as i64)
    )]
    width: u16,
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        log::error!("{:#}", e);
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Inputs come from a JSON file or the four form flags
    let input = match &cli.input {
        Some(path) => load_input(path)
            .with_context(|| format!("loading inputs from {}", path.display()))?,
        None => FormFields::new(
            cli.start_age.clone().unwrap_or_default(),
            cli.stop_age.clone().unwrap_or_default(),
            cli.annual_contribution.clone().unwrap_or_default(),
            cli.annual_return.clone().unwrap_or_default(),
        )
        .parse()?,
    };

    // Set up projection config from flags
    let config = ProjectionConfig {
        timing: match cli.timing {
            Timing::End => PaymentTiming::EndOfYear,
            Timing::Beginning => PaymentTiming::BeginningOfYear,
        },
        after_stop: match cli.after_stop {
            AfterStop::Hold => AfterStopContributions::Hold,
            AfterStop::Omit => AfterStopContributions::Omit,
        },
        ..Default::default()
    };

    log::info!(
        "projecting ages {}..={} at {}% with {} per year",
        input.start_age(),
        config.horizon_age,
        input.annual_return_percent(),
        input.annual_contribution()
    );

    // Run projection
    let engine = ProjectionEngine::new(config);
    let series = engine.project(&input);

    // Output goes to the file if given, stdout otherwise
    let out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    let chart = ChartData::from_series(&series);
    let options = ChartOptions::default();

    // Render in the requested format
    match cli.format {
        OutputFormat::Chart => {
            let mut renderer = TextChartRenderer::with_width(out, cli.width as usize);
            render_chart(&mut renderer, None, &chart, &options)?;

            // Print summary below the chart
            let summary = series.summary();
            let mut out = renderer.into_inner();
            writeln!(out)?;
            writeln!(out, "Summary:")?;
            writeln!(out, "  Ages projected:    {}", summary.total_ages)?;
            writeln!(out, "  Total contributed: {}", format_abbreviated_currency(summary.total_contributed))?;
            writeln!(out, "  Value at stop age: {}", format_abbreviated_currency(summary.value_at_stop))?;
            writeln!(out, "  Value at age 100:  {}", format_abbreviated_currency(summary.final_value))?;
            writeln!(out, "  Growth:            {}", format_abbreviated_currency(summary.growth))?;
            out.flush()?;
        }
        OutputFormat::Json => {
            let mut renderer = JsonChartRenderer::new(out);
            render_chart(&mut renderer, None, &chart, &options)?;
        }
        OutputFormat::Csv => write_series_csv(out, &series)?,
    }

    if let Some(path) = &cli.output {
        println!("Output written to: {}", path.display());
    }

    Ok(())
}
