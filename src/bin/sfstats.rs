use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::{error, info};
use sfstats::database::Database;
use sfstats::errors::Result;
use sfstats::input::{Layout, Year};
use sfstats::output::{self, OError};
use std::{error, fs, io, process};

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Input file (CSV)
    infile: String,
    #[command(subcommand)]
    command: Command,
    /// Report errors as a JSON file
    #[arg(long)]
    error_file: Option<String>,
    /// Verbosity
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

#[derive(Subcommand)]
enum Command {
    /// List years and the number of records in each
    Years,
    /// Records of people of the given race
    Race {
        #[arg(long)]
        year: Year,
        /// Race code, e.g. B or W
        #[arg(long)]
        race: String,
        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Percentage of stops with a frisk and with an arrest
    Rates {
        #[arg(long)]
        year: Year,
    },
    /// Gender of Black and White people stopped
    Gender {
        #[arg(long)]
        year: Year,
    },
    /// Change in the share of a crime between two years
    Trend {
        /// Text that the crime description contains
        #[arg(long)]
        crime: String,
        #[arg(long)]
        from: Year,
        #[arg(long)]
        to: Year,
    },
    /// Borough with the most stops
    Borough {
        #[arg(long)]
        year: Year,
        /// Show the number of stops in every borough
        #[arg(long)]
        counts: bool,
    },
}

fn run(db: &Database, command: &Command) -> Result<()> {
    match command {
        Command::Years => {
            for year in db.years() {
                let n = db.bucket(year).map_or(0, |b| b.len());
                println!("{year}: {n} records");
            }
        }
        Command::Race { year, race, json } => {
            let records = db.records_by_race(*year, race);
            if *json {
                let stdout = io::stdout().lock();
                serde_json::to_writer_pretty(stdout, &records)?;
                println!();
            } else {
                println!("{year}, race {race}: {} records", records.len());
                for r in records {
                    println!(
                        "- {} ({}, {}){}{}",
                        r.description(),
                        r.gender(),
                        r.location(),
                        if r.frisked() { ", frisked" } else { "" },
                        if r.arrested() { ", arrested" } else { "" },
                    );
                }
            }
        }
        Command::Rates { year } => {
            let rates = db.frisked_vs_arrested(*year)?;
            println!("{year}:");
            println!("- frisked: {}", output::pretty_percent(rates.frisked));
            println!("- arrested: {}", output::pretty_percent(rates.arrested));
        }
        Command::Gender { year } => {
            let gb = db.gender_breakdown(*year)?;
            println!("{year}: {} Black, {} White", gb.black, gb.white);
            println!("{}", output::gender_table_string(&gb));
        }
        Command::Trend { crime, from, to } => {
            let delta = db.crime_trend(crime, *from, *to)?;
            println!("'{crime}' from {from} to {to}: {}", output::pretty_delta(delta));
        }
        Command::Borough { year, counts } => {
            if *counts {
                for (b, n) in db.location_counts(*year)? {
                    println!("{b}: {n}");
                }
            }
            println!("{}", db.most_frequent_location(*year)?);
        }
    }
    Ok(())
}

fn process(args: &Args) -> Result<()> {
    let db = Database::from_file(&args.infile, &Layout::default())?;
    run(&db, &args.command)
}

fn store_error(error_file: &str, e: &dyn error::Error) -> Result<()> {
    let error = OError {
        error: format!("{e}"),
    };
    let file = fs::File::create(error_file)?;
    let writer = io::BufWriter::new(file);
    serde_json::to_writer(writer, &error)?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    pretty_env_logger::formatted_timed_builder()
        .filter_level(args.verbose.log_level_filter())
        .init();
    match process(&args) {
        Ok(()) => (),
        Err(e) => {
            match &args.error_file {
                Some(filename) => match store_error(filename, &*e) {
                    Ok(()) => {
                        info!(target: "sfstats", "error reported: {e}");
                    }
                    Err(e2) => {
                        error!(target: "sfstats", "{e}");
                        error!(target: "sfstats", "{e2}");
                    }
                },
                None => error!(target: "sfstats", "{e}"),
            }
            process::exit(1);
        }
    }
}
