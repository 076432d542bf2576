//! Compound Calc CLI
//!
//! Command-line front end for the solver, rate converter, projection and
//! allocation splitter

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use compound_calc::{
    allocation::{self, AllocationWeight},
    config::CalculatorConfig,
    projection::{project, ProjectionSeries, ProjectionSummary},
    rates::{convert, convert_all, RatePeriod},
    report,
    scenario::{write_results, BatchRunner},
    solver::{solve, InvestmentInputs},
};
use serde_json::json;
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "compound_calc",
    version,
    about = "Compound-interest calculator on a 252 business-day year",
    long_about = "Solve for present value, future value, annual rate or business days, \
                  convert rates between compounding periods, project an investment \
                  day by day and split a total across assets."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON config file (defaults to $COMPOUND_CALC_CONFIG, then built-in values)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Leave exactly one of --pv, --fv, --rate, --days out to compute it
    Solve(SolveArgs),
    /// Convert a rate to its equivalent over another period
    Convert(ConvertArgs),
    /// Day-by-day accumulated value under a daily rate
    Project(ProjectArgs),
    /// Split a total across assets by percentage
    Allocate(AllocateArgs),
    /// Solve every row of a CSV file
    Batch(BatchArgs),
}

#[derive(Args)]
#[command(allow_hyphen_values = true)]
struct SolveArgs {
    /// Present value (comma or dot decimals, e.g. 13000,50)
    #[arg(long, default_value = "")]
    pv: String,

    /// Future value
    #[arg(long, default_value = "")]
    fv: String,

    /// Annual rate in percent (e.g. 7.33)
    #[arg(long, default_value = "")]
    rate: String,

    /// Business days
    #[arg(long, default_value = "")]
    days: String,

    /// Print the day-by-day evolution table
    #[arg(long)]
    table: bool,

    /// Write the evolution table to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Table rows to print
    #[arg(long, default_value_t = 24)]
    rows: usize,
}

#[derive(Args)]
#[command(allow_negative_numbers = true)]
struct ConvertArgs {
    /// Rate in percent
    #[arg(long)]
    rate: f64,

    /// Period the rate is quoted over
    #[arg(long, default_value = "annual")]
    from: RatePeriod,

    /// Target period
    #[arg(long, required_unless_present = "all")]
    to: Option<RatePeriod>,

    /// Show the equivalent rate in every period
    #[arg(long)]
    all: bool,
}

#[derive(Args)]
#[command(allow_negative_numbers = true)]
struct ProjectArgs {
    /// Present value
    #[arg(long)]
    pv: f64,

    /// Daily rate as a decimal (0.000284 = 0.0284% per day)
    #[arg(long)]
    daily_rate: f64,

    /// Business days to project
    #[arg(long)]
    days: u32,

    /// Write the table to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Table rows to print
    #[arg(long, default_value_t = 24)]
    rows: usize,
}

#[derive(Args)]
struct AllocateArgs {
    /// Amount to allocate (defaults to the config total)
    #[arg(long)]
    total: Option<f64>,

    /// Asset weight as NAME=PCT; repeat for each asset (defaults to the config portfolio)
    #[arg(long = "weight")]
    weights: Vec<AllocationWeight>,
}

#[derive(Args)]
struct BatchArgs {
    /// CSV with present_value,future_value,annual_rate,business_days columns
    #[arg(long)]
    input: PathBuf,

    /// Output CSV (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Worker threads (defaults to one per core)
    #[arg(long)]
    threads: Option<usize>,
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_solve(args: SolveArgs, config: &CalculatorConfig, as_json: bool) -> Result<()> {
    let inputs = InvestmentInputs::from_text(&args.pv, &args.fv, &args.rate, &args.days);
    let result = solve(inputs);

    let series = if args.table || args.csv.is_some() {
        ProjectionSeries::from_result(&result)
    } else {
        None
    };

    if let Some(path) = &args.csv {
        match &series {
            Some(series) => series
                .write_csv_path(path)
                .with_context(|| format!("writing {}", path.display()))?,
            None => log::warn!("Not enough data for an evolution table; {} not written", path.display()),
        }
    }

    if as_json {
        return print_json(&json!({
            "inputs": inputs,
            "result": result,
            "projection": ProjectionSummary::from_result(&result),
        }));
    }

    print!("{}", report::render_result(&result, &config.display));
    if let Some(note) = report::ignored_days_note(&args.days) {
        println!("{}", note);
    }
    if args.table {
        match &series {
            Some(series) => {
                println!();
                print!("{}", report::render_projection(series, &config.display, Some(args.rows)));
                print!("{}", report::render_summary(&series.summary(), &config.display));
            }
            None => println!("Evolution table needs present value, rate and business days."),
        }
    }
    Ok(())
}

fn run_convert(args: ConvertArgs, config: &CalculatorConfig, as_json: bool) -> Result<()> {
    match args.to {
        Some(to) if !args.all => {
            let converted = convert(args.rate, args.from, to)?;
            if as_json {
                return print_json(&json!({ "rate_pct": args.rate, "from": args.from, "to": to, "converted_pct": converted }));
            }
            println!("{}", report::render_conversion(args.rate, args.from, to, converted, &config.display));
        }
        _ => {
            let table = convert_all(args.rate, args.from)?;
            if as_json {
                return print_json(&json!({ "rate_pct": args.rate, "from": args.from, "equivalents": table }));
            }
            for row in table {
                println!("{}", report::render_conversion(args.rate, args.from, row.period, row.rate_pct, &config.display));
            }
        }
    }
    Ok(())
}

fn run_project(args: ProjectArgs, config: &CalculatorConfig, as_json: bool) -> Result<()> {
    let series = project(args.pv, args.daily_rate, args.days);

    if let Some(path) = &args.csv {
        series
            .write_csv_path(path)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("Projection written to {}", path.display());
    }

    if as_json {
        return print_json(&json!({ "summary": series.summary(), "points": series.points() }));
    }

    print!("{}", report::render_projection(&series, &config.display, Some(args.rows)));
    print!("{}", report::render_summary(&series.summary(), &config.display));
    Ok(())
}

fn run_allocate(args: AllocateArgs, config: &CalculatorConfig, as_json: bool) -> Result<()> {
    let total = args.total.unwrap_or(config.allocation.total);
    let weights = if args.weights.is_empty() {
        config.allocation.assets.clone()
    } else {
        args.weights
    };

    let entries = allocation::split(total, &weights)?;
    if as_json {
        return print_json(&json!({ "total": total, "entries": entries }));
    }
    print!("{}", report::render_allocation(&entries, &config.display));
    Ok(())
}

fn run_batch(args: BatchArgs, as_json: bool) -> Result<()> {
    let runner = match args.threads {
        Some(threads) => BatchRunner::new().with_threads(threads),
        None => BatchRunner::new(),
    };
    let rows = runner
        .run_file(&args.input)
        .with_context(|| format!("solving {}", args.input.display()))?;

    if as_json {
        return print_json(&serde_json::to_value(&rows)?);
    }
    match &args.output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            write_results(file, &rows)?;
            println!("Results for {} rows written to {}", rows.len(), path.display());
        }
        None => write_results(std::io::stdout().lock(), &rows)?,
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = CalculatorConfig::load(cli.config.as_deref()).context("loading config")?;

    match cli.command {
        Command::Solve(args) => run_solve(args, &config, cli.json),
        Command::Convert(args) => run_convert(args, &config, cli.json),
        Command::Project(args) => run_project(args, &config, cli.json),
        Command::Allocate(args) => run_allocate(args, &config, cli.json),
        Command::Batch(args) => run_batch(args, cli.json),
    }
}
