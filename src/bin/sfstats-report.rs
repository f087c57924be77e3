use anyhow::{Context, Result, anyhow};
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use log::info;
use sfstats::database::Database;
use sfstats::driver::{self, DriverArgs};
use sfstats::input::{Layout, Year};
use sfstats::spreadsheet;
use std::{fs, io};

/// Compute every statistic for every year and write a report
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Input file (CSV)
    infile: String,
    /// Output file (JSON)
    outfile: String,
    /// Starting year
    #[arg(long, default_value_t = 0)]
    start: Year,
    /// Ending year
    #[arg(long, default_value_t = 9999)]
    end: Year,
    /// Follow the share of this crime from the first to the last year
    #[arg(long)]
    crime: Option<String>,
    /// Also write the report as an Excel file
    #[arg(long)]
    xlsx: Option<String>,
    /// Produce compact JSON files
    #[arg(long)]
    compact: bool,
    /// Verbosity
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    pretty_env_logger::formatted_timed_builder()
        .filter_level(args.verbose.log_level_filter())
        .init();
    let db = Database::from_file(&args.infile, &Layout::default())
        .map_err(|e| anyhow!("{e}"))
        .with_context(|| format!("cannot load {}", args.infile))?;
    let driver_args = DriverArgs {
        start: args.start,
        end: args.end,
        crime: args.crime.as_deref(),
    };
    let report = driver::calc(&driver_args, &db).map_err(|e| anyhow!("{e}"))?;
    let file =
        fs::File::create(&args.outfile).with_context(|| format!("cannot create {}", args.outfile))?;
    let writer = io::BufWriter::new(file);
    if args.compact {
        serde_json::to_writer(writer, &report)?;
    } else {
        serde_json::to_writer_pretty(writer, &report)?;
    }
    info!(target: "sfstats", "wrote: {}", args.outfile);
    if let Some(xlsx) = &args.xlsx {
        spreadsheet::write_report(&report, xlsx)
            .map_err(|e| anyhow!("{e}"))
            .with_context(|| format!("cannot write {xlsx}"))?;
        info!(target: "sfstats", "wrote: {xlsx}");
    }
    Ok(())
}
