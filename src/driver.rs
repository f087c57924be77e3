//! Main entry point for calculating everything.

use crate::database::Database;
use crate::errors::{self, EmptyCohort, Result};
use crate::input::Year;
use crate::output::{self, Report, Trend, YearReport};
use itertools::Itertools;
use log::{debug, info, warn};

/// What to calculate?
pub struct DriverArgs<'a> {
    /// Starting year.
    /// Years without records are skipped, so this can be safely set to e.g. 0.
    pub start: Year,

    /// Final year (inclusive).
    pub end: Year,

    /// Crime description to follow over time.
    /// If specified, the report contains the change in the share of records whose
    /// description contains this text, from the first to the last selected year.
    pub crime: Option<&'a str>,
}

impl Default for DriverArgs<'_> {
    fn default() -> Self {
        DriverArgs {
            start: 0,
            end: 9999,
            crime: None,
        }
    }
}

/// Calculate everything.
pub fn calc(args: &DriverArgs, db: &Database) -> Result<Report> {
    let years = db
        .years()
        .into_iter()
        .filter(|&y| args.start <= y && y <= args.end)
        .collect_vec();
    if years.is_empty() {
        return Err(errors::invalid_argument(format!(
            "no records between {} and {}",
            args.start, args.end
        )));
    }
    info!(target: "sfstats", "selected years: {}", output::pretty_years(&years));
    let per_year = years
        .iter()
        .map(|&year| year_report(db, year))
        .collect::<Result<Vec<_>>>()?;
    let trend = match args.crime {
        None => None,
        Some(description) => {
            let from = years[0];
            let to = years[years.len() - 1];
            let delta = db.crime_trend(description, from, to)?;
            info!(
                target: "sfstats",
                "'{}' from {} to {}: {}",
                description,
                from,
                to,
                output::pretty_delta(delta)
            );
            Some(Trend {
                description: description.to_owned(),
                from,
                to,
                delta,
            })
        }
    };
    Ok(Report {
        records: per_year.iter().map(|y| y.records).sum(),
        years,
        per_year,
        trend,
    })
}

fn year_report(db: &Database, year: Year) -> Result<YearReport> {
    let records = db.bucket(year).map_or(0, |b| b.len());
    let rates = db.frisked_vs_arrested(year)?;
    let gender = match db.gender_breakdown(year) {
        Ok(gb) => Some(gb),
        Err(e) if e.downcast_ref::<EmptyCohort>().is_some() => {
            warn!(target: "sfstats", "{year}: {e}");
            None
        }
        Err(e) => return Err(e),
    };
    let locations = db.location_counts(year)?.to_vec();
    let most_frequent_location = db.most_frequent_location(year)?;
    debug!(
        target: "sfstats",
        "{}: {} records, {} frisked, {} arrested, most stops in {}",
        year,
        records,
        output::pretty_percent(rates.frisked),
        output::pretty_percent(rates.arrested),
        most_frequent_location
    );
    Ok(YearReport {
        year,
        records,
        races: db.race_counts(year),
        rates,
        gender,
        locations,
        most_frequent_location,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::borough::Borough;
    use crate::errors::InvalidArgument;
    use crate::input::Record;

    fn build_db() -> Database {
        Database::load(vec![
            (2011, Record::new("ROBBERY", true, true, "M", "B", "BRONX")),
            (2011, Record::new("CPW", false, true, "F", "W", "BRONX")),
            (2012, Record::new("ROBBERY", false, false, "M", "Q", "QUEENS")),
            (2013, Record::new("CPW", false, true, "M", "B", "")),
        ])
    }

    #[test]
    fn all_years() {
        let db = build_db();
        let report = calc(&DriverArgs::default(), &db).unwrap();
        assert_eq!(report.years, [2011, 2012, 2013]);
        assert_eq!(report.records, 4);
        assert!(report.trend.is_none());
        let y = &report.per_year[0];
        assert_eq!(y.year, 2011);
        assert_eq!(y.records, 2);
        assert_eq!(y.rates.frisked, 100.0);
        assert_eq!(y.rates.arrested, 50.0);
        assert_eq!(y.most_frequent_location, Borough::Bronx);
        assert_eq!(y.locations[2], (Borough::Bronx, 2));
        let gb = y.gender.unwrap();
        assert_eq!(gb.male.black, Some(50.0));
        assert_eq!(gb.female.white, Some(50.0));
        // 2012 has neither Black nor White records.
        assert!(report.per_year[1].gender.is_none());
        assert_eq!(report.per_year[1].races["Q"], 1);
        assert_eq!(report.per_year[2].most_frequent_location, Borough::Brooklyn);
    }

    #[test]
    fn range_and_trend() {
        let db = build_db();
        let args = DriverArgs {
            start: 2012,
            end: 2013,
            crime: Some("ROBBERY"),
        };
        let report = calc(&args, &db).unwrap();
        assert_eq!(report.years, [2012, 2013]);
        let trend = report.trend.unwrap();
        assert_eq!(trend.from, 2012);
        assert_eq!(trend.to, 2013);
        assert_eq!(trend.delta, -100.0);
    }

    #[test]
    fn single_year_trend() {
        let db = build_db();
        let args = DriverArgs {
            start: 2011,
            end: 2011,
            crime: Some("CPW"),
        };
        let report = calc(&args, &db).unwrap();
        assert_eq!(report.trend.unwrap().delta, 0.0);
    }

    #[test]
    fn nothing_selected() {
        let db = build_db();
        let args = DriverArgs {
            start: 2020,
            end: 2030,
            crime: None,
        };
        let e = calc(&args, &db).unwrap_err();
        assert!(e.downcast_ref::<InvalidArgument>().is_some());
    }
}
